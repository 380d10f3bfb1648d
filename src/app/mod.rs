// SPDX-License-Identifier: MPL-2.0
//! Page shell composing the interactive components.
//!
//! The `Page` owns one instance of every controller. Controllers never
//! reference each other; the shell routes top-level messages to them and
//! turns their effects into page [`Event`]s, wiring gallery effects to the
//! quick view and to the card entrance replay along the way.
//!
//! Mount order: the theme is restored first (before anything is drawn),
//! then headings, tabs and cards are registered for reveal, the gallery and
//! carousel build their own state, the quick view starts closed, and the
//! hero sparkles start spawning.

pub mod layout;
mod message;
pub mod paths;
pub mod persisted_state;
mod update;

pub use message::{Content, Event, Message};

use crate::config::Config;
use crate::content::or_fallback;
use crate::geometry::Viewport;
use crate::ui::carousel::{Carousel, Testimonial};
use crate::ui::contact::ContactForm;
use crate::ui::gallery::{Gallery, Project};
use crate::ui::navbar::Navbar;
use crate::ui::quick_view::QuickView;
use crate::ui::reveal::{
    ElementId, EntrancePreset, ObservationSupport, RegistrationHandle, RevealEngine,
    RevealOptions,
};
use crate::ui::sparkles::Sparkles;
use crate::ui::spotlight::{Spotlight, SpotlightStyle};
use crate::ui::theming::ThemeEngine;
use layout::Section;
use persisted_state::Storage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

/// Everything `Page::mount` needs from the outside world.
pub struct Mount {
    pub config: Config,
    pub storage: Box<dyn Storage>,
    pub content: Content,
    pub viewport: Viewport,
    pub observation: ObservationSupport,
}

/// Root state of the page.
pub struct Page {
    theme: ThemeEngine,
    reveal: RevealEngine,
    gallery: Gallery<Project>,
    quick_view: QuickView<Project>,
    carousel: Carousel<Testimonial>,
    contact: ContactForm,
    navbar: Navbar,
    sparkles: Sparkles<StdRng>,
    spotlights: BTreeMap<ElementId, Spotlight>,
    viewport: Viewport,
    card_preset: EntrancePreset,
    /// Current card entrance, replaced on every filter change.
    card_reveal: Option<RegistrationHandle>,
    section_reveals: Vec<RegistrationHandle>,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("theme", &self.theme.theme())
            .field("filter", self.gallery.active())
            .field("quick_view", &self.quick_view.status())
            .field("carousel_index", &self.carousel.current_index())
            .field("contact", self.contact.status())
            .field("section", &self.navbar.active())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Builds and mounts the page at `now`.
    #[must_use]
    pub fn mount(mount: Mount, now: Instant) -> Self {
        let Mount {
            config,
            storage,
            content,
            viewport,
            observation,
        } = mount;

        let mut theme = ThemeEngine::new(storage, config.theme_timing());
        theme.init();

        let gallery = Gallery::new(or_fallback(content.projects));
        let testimonials = or_fallback(content.testimonials);

        let mut reveal = RevealEngine::new(observation);
        let options = config.reveal_options();
        let mut section_reveals: Vec<RegistrationHandle> = Section::ALL
            .iter()
            .map(|section| reveal.register(&section.heading(), options, EntrancePreset::HEADING))
            .collect();

        let tabs: Vec<ElementId> = (0..gallery.categories().len()).map(layout::tab).collect();
        section_reveals.push(reveal.register(
            &tabs,
            RevealOptions {
                stagger: EntrancePreset::TABS.stagger,
                ..options
            },
            EntrancePreset::TABS,
        ));

        let card_preset = config.gallery_preset();
        let cards: Vec<ElementId> = gallery
            .visible_indices()
            .iter()
            .map(|&index| layout::card(index))
            .collect();
        let card_reveal = (!cards.is_empty()).then(|| reveal.play(&cards, card_preset, now));

        let mut spotlights = BTreeMap::new();
        spotlights.insert(layout::NAV, Spotlight::new(SpotlightStyle::NAV));
        spotlights.insert(layout::CONTACT_FORM, Spotlight::new(SpotlightStyle::FORM));
        for index in 0..gallery.items().len() {
            spotlights.insert(layout::card(index), Spotlight::new(SpotlightStyle::CARD));
        }
        for index in 0..testimonials.len() {
            spotlights.insert(
                layout::testimonial(index),
                Spotlight::new(SpotlightStyle::TESTIMONIAL),
            );
        }

        let carousel = Carousel::new(testimonials, config.carousel_settings(), now);
        let quick_view = QuickView::new(config.close_delay());
        let contact = ContactForm::new(config.error_reset());

        let mut sparkles = Sparkles::new(StdRng::from_os_rng());
        sparkles.start(now);

        tracing::info!(
            theme = %theme.theme(),
            projects = gallery.items().len(),
            testimonials = carousel.len(),
            "page mounted"
        );

        Self {
            theme,
            reveal,
            gallery,
            quick_view,
            carousel,
            contact,
            navbar: Navbar::default(),
            sparkles,
            spotlights,
            viewport,
            card_preset,
            card_reveal,
            section_reveals,
        }
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeEngine {
        &self.theme
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery<Project> {
        &self.gallery
    }

    #[must_use]
    pub fn quick_view(&self) -> &QuickView<Project> {
        &self.quick_view
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<Testimonial> {
        &self.carousel
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[must_use]
    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    #[must_use]
    pub fn sparkles(&self) -> &Sparkles<StdRng> {
        &self.sparkles
    }

    #[must_use]
    pub fn spotlight(&self, region: ElementId) -> Option<&Spotlight> {
        self.spotlights.get(&region)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
