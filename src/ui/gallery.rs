// SPDX-License-Identifier: MPL-2.0
//! Category-filtered view over a fixed project list.
//!
//! The gallery never mutates or reorders its items. A filter change
//! recomputes the visible list synchronously, keeping source order, and
//! reports which items should replay their entrance. An empty result is
//! reported explicitly so the page can show an empty state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category id meaning "no filtering".
pub const ALL_CATEGORY: &str = "all";

/// Anything the gallery can filter.
pub trait Categorized {
    fn id(&self) -> &str;
    fn category(&self) -> &str;
}

/// A portfolio project as supplied by the content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    /// Tailwind gradient classes used when there is no cover image.
    #[serde(default)]
    pub gradient: Option<String>,
}

impl Categorized for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}

/// The active gallery tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Maps a tab id to a filter; `"all"` is the sentinel.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Only(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Badge text shown on a project card.
#[must_use]
pub fn category_label(category: &str) -> String {
    match category {
        "web" => "WEB DEVELOPMENT".to_string(),
        "mobile" => "MOBILE".to_string(),
        "uiux" => "UI/UX".to_string(),
        "multimedia" => "MULTIMEDIA".to_string(),
        other => other.to_uppercase(),
    }
}

/// Text of a filter tab.
#[must_use]
pub fn tab_label(filter: &CategoryFilter) -> &str {
    match filter.id() {
        ALL_CATEGORY => "All",
        "web" => "Web",
        "mobile" => "Mobile",
        "uiux" => "UI/UX",
        "multimedia" => "Multimedia",
        other => other,
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SetFilter(CategoryFilter),
    /// Quick view requested for the item with this id.
    QuickView(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    None,
    /// The visible list changed; these ids replay their entrance, in order.
    FilterChanged { visible: Vec<String> },
    /// The filter matched nothing.
    Empty,
    /// Open the quick view for this item.
    QuickView(T),
}

/// Filter state over a fixed list of items.
#[derive(Debug, Clone)]
pub struct Gallery<T> {
    items: Vec<T>,
    categories: Vec<CategoryFilter>,
    active: CategoryFilter,
    /// Indices into `items`, in source order.
    visible: Vec<usize>,
}

impl<T: Categorized + Clone> Gallery<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let mut categories = vec![CategoryFilter::All];
        for item in &items {
            let category = item.category();
            if category.is_empty() || category == ALL_CATEGORY {
                continue;
            }
            let filter = CategoryFilter::Only(category.to_string());
            if !categories.contains(&filter) {
                categories.push(filter);
            }
        }

        let visible = (0..items.len()).collect();
        Self {
            items,
            categories,
            active: CategoryFilter::All,
            visible,
        }
    }

    /// Tabs: `All` first, then each category once in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    #[must_use]
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(|&index| &self.items[index])
    }

    /// Positions of the visible items in the source list.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn visible_ids(&self) -> Vec<String> {
        self.visible().map(|item| item.id().to_string()).collect()
    }

    /// Whether the page should show the empty state.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.visible.is_empty()
    }

    /// Switches the active category. Selecting the active one is a no-op.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> Effect<T> {
        if filter == self.active {
            return Effect::None;
        }

        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item.category()))
            .map(|(index, _)| index)
            .collect();
        tracing::debug!(filter = %filter, visible = self.visible.len(), "gallery filter changed");
        self.active = filter;

        if self.visible.is_empty() {
            Effect::Empty
        } else {
            Effect::FilterChanged {
                visible: self.visible_ids(),
            }
        }
    }

    /// Hands the item over to the quick view. Unknown ids are ignored.
    pub fn quick_view(&self, id: &str) -> Effect<T> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .map_or(Effect::None, |item| Effect::QuickView(item.clone()))
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect<T> {
        match msg {
            Message::SetFilter(filter) => self.set_filter(filter),
            Message::QuickView(id) => self.quick_view(&id),
        }
    }
}
