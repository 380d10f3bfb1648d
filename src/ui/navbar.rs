// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for in-page navigation.
//!
//! Tracks which section link is highlighted and whether the mobile menu is
//! open. Selecting a link always closes the mobile menu.

use std::fmt;

/// One link of the navigation bar, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NavItem {
    #[default]
    Home,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

impl NavItem {
    pub const ALL: [NavItem; 6] = [
        NavItem::Home,
        NavItem::Skills,
        NavItem::Experience,
        NavItem::Education,
        NavItem::Projects,
        NavItem::Contact,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Skills => "Skills",
            NavItem::Experience => "Experience",
            NavItem::Education => "Education",
            NavItem::Projects => "Projects",
            NavItem::Contact => "Contact",
        }
    }

    /// Anchor of the section this link scrolls to.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Home => "#hero",
            NavItem::Skills => "#skills",
            NavItem::Experience => "#experience",
            NavItem::Education => "#education",
            NavItem::Projects => "#projects",
            NavItem::Contact => "#contact",
        }
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A link was clicked, in the desktop bar or the mobile menu.
    Select(NavItem),
    ToggleMenu,
    CloseMenu,
}

/// Effects propagated to the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Scroll to the selected section.
    Navigate(NavItem),
    MenuToggled(bool),
}

#[derive(Debug, Clone, Default)]
pub struct Navbar {
    active: NavItem,
    menu_open: bool,
}

impl Navbar {
    #[must_use]
    pub fn active(&self) -> NavItem {
        self.active
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Select(item) => {
                self.active = item;
                self.menu_open = false;
                Effect::Navigate(item)
            }
            Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Effect::MenuToggled(self.menu_open)
            }
            Message::CloseMenu => {
                if !self.menu_open {
                    return Effect::None;
                }
                self.menu_open = false;
                Effect::MenuToggled(false)
            }
        }
    }

    pub fn teardown(&mut self) {
        self.menu_open = false;
    }
}
