// SPDX-License-Identifier: MPL-2.0
//! Top-level messages, outgoing events and mount-time inputs of the page.

use crate::ui::contact::{ContactSubmission, SubmitResponse};
use crate::ui::gallery::{CategoryFilter, Project};
use crate::ui::navbar::{self, NavItem};
use crate::ui::carousel::Testimonial;
use crate::ui::quick_view::Status;
use crate::ui::reveal::{ElementId, Intersection, RevealStart};
use crate::ui::sparkles;
use crate::ui::theming::Theme;
use iced_core::{Point, Rectangle};

/// Content supplied by the CMS collaborator.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

/// Top-level messages consumed by `Page::update`. Time is supplied by the
/// caller alongside each message.
#[derive(Debug, Clone)]
pub enum Message {
    /// Theme button pressed, with the pointer position if it was a click.
    ToggleTheme { origin: Option<Point> },
    Navbar(navbar::Message),
    /// The window changed size.
    Resized { width: f32, height: f32 },
    /// Visibility notification for an animatable element.
    Visibility(Intersection),
    PointerMoved {
        region: ElementId,
        bounds: Option<Rectangle>,
        pointer: Point,
    },
    PointerLeft { region: ElementId },
    /// A spotlight region left the document.
    RegionRemoved { region: ElementId },
    SetFilter(CategoryFilter),
    /// Quick view button on the card with this project id.
    QuickView(String),
    QuickViewEntered,
    CloseQuickView,
    CarouselNext,
    CarouselPrev,
    CarouselGoTo(isize),
    CarouselPointerDown,
    CarouselPointerUp,
    SubmitContact(ContactSubmission),
    ContactResponse(SubmitResponse),
    /// The contact request failed before any response arrived.
    ContactTransportFailed(String),
    /// Periodic tick driving every timer on the page.
    Tick,
}

/// What the page asks the renderer (or the caller) to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeChanged(Theme),
    RippleRemoved,
    /// Scroll to this section's anchor.
    Navigate(NavItem),
    MobileMenu { open: bool },
    /// Hero stars that appeared or expired this frame.
    Sparkles(sparkles::Effect),
    Reveal(RevealStart),
    SpotlightChanged { region: ElementId, active: bool },
    /// The gallery shows these project ids, in order.
    GalleryChanged { visible: Vec<String> },
    GalleryEmpty,
    QuickView(Status),
    QuickViewCleared,
    CarouselMoved(usize),
    /// POST this JSON body to the contact endpoint.
    SendContact(String),
    ContactSucceeded { id: String },
    ContactFailed(String),
    ContactReset,
}
