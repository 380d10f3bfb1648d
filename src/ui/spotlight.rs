// SPDX-License-Identifier: MPL-2.0
//! Pointer-following glow inside a bounded region.

use crate::geometry::{relative_position, Region};
use crate::ui::design_tokens::{glow, opacity, palette};
use iced_core::{Color, Point, Rectangle};

/// Radii and colours of one spotlight surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightStyle {
    /// Radius of the background glow; `None` for border-only surfaces.
    pub fill_radius: Option<f32>,
    pub border_radius: f32,
    pub fill: Color,
    pub border: Color,
}

impl SpotlightStyle {
    /// Project and about cards.
    pub const CARD: Self = Self {
        fill_radius: Some(glow::CARD_FILL),
        border_radius: glow::CARD_BORDER,
        fill: Color {
            a: opacity::GLOW_BACKGROUND,
            ..palette::CYAN_500
        },
        border: Color {
            a: opacity::GLOW_BORDER,
            ..palette::CYAN_500
        },
    };

    /// Navigation pill.
    pub const NAV: Self = Self {
        fill_radius: Some(glow::NAV_FILL),
        border_radius: glow::NAV_BORDER,
        ..Self::CARD
    };

    /// Contact form panel.
    pub const FORM: Self = Self {
        fill_radius: Some(glow::FORM_FILL),
        border_radius: glow::FORM_BORDER,
        ..Self::CARD
    };

    /// Testimonial cards only light up their border.
    pub const TESTIMONIAL: Self = Self {
        fill_radius: None,
        border_radius: glow::CARD_BORDER,
        fill: Color::TRANSPARENT,
        border: Color {
            a: opacity::GLOW_BORDER_SUBTLE,
            ..palette::WHITE
        },
    };
}

/// A radial glow ready to render, in region-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    /// Layer opacity; the renderer fades between 0 and 1.
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer moved; `bounds` is the region's current layout, if still mounted.
    Moved {
        bounds: Option<Rectangle>,
        pointer: Point,
    },
    Left,
    /// The region was removed.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ActiveChanged(bool),
}

/// Spotlight state for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct Spotlight {
    style: SpotlightStyle,
    position: Option<Point>,
    active: bool,
}

impl Spotlight {
    #[must_use]
    pub fn new(style: SpotlightStyle) -> Self {
        Self {
            style,
            position: None,
            active: false,
        }
    }

    /// Tracks the pointer against the region's current bounds.
    ///
    /// A region without bounds has been removed, so the spotlight detaches.
    pub fn pointer_moved(&mut self, region: &impl Region, pointer: Point) -> Effect {
        let Some(bounds) = region.bounds() else {
            return self.detach();
        };

        if bounds.contains(pointer) {
            self.position = Some(relative_position(bounds, pointer));
            self.set_active(true)
        } else {
            self.set_active(false)
        }
    }

    /// Pointer left the region. The last position is kept so the glow can
    /// fade out where it was.
    pub fn pointer_left(&mut self) -> Effect {
        self.set_active(false)
    }

    /// Forgets the position and deactivates. Safe to call repeatedly.
    pub fn detach(&mut self) -> Effect {
        self.position = None;
        self.set_active(false)
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Moved { bounds, pointer } => self.pointer_moved(&bounds, pointer),
            Message::Left => self.pointer_left(),
            Message::Detached => self.detach(),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer position relative to the region's top-left corner.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    #[must_use]
    pub fn style(&self) -> &SpotlightStyle {
        &self.style
    }

    /// Background glow, only while the pointer is inside.
    #[must_use]
    pub fn fill(&self) -> Option<Glow> {
        let radius = self.style.fill_radius?;
        if !self.active {
            return None;
        }
        self.position.map(|center| Glow {
            center,
            radius,
            color: self.style.fill,
            opacity: opacity::OPAQUE,
        })
    }

    /// Border glow; fully transparent once the pointer has left.
    #[must_use]
    pub fn border(&self) -> Option<Glow> {
        self.position.map(|center| Glow {
            center,
            radius: self.style.border_radius,
            color: self.style.border,
            opacity: if self.active {
                opacity::OPAQUE
            } else {
                opacity::TRANSPARENT
            },
        })
    }

    fn set_active(&mut self, active: bool) -> Effect {
        if self.active == active {
            return Effect::None;
        }
        self.active = active;
        Effect::ActiveChanged(active)
    }
}
