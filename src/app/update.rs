// SPDX-License-Identifier: MPL-2.0
//! Message routing for the page shell.

use super::{layout, Event, Message, Page};
use crate::error::Error;
use crate::geometry::Viewport;
use crate::ui::carousel;
use crate::ui::contact;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::quick_view;
use crate::ui::reveal::ElementId;
use crate::ui::spotlight;
use crate::ui::theming;
use std::time::Instant;

impl Page {
    /// Applies one message at `now` and returns what the renderer should do.
    pub fn update(&mut self, message: Message, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();

        match message {
            Message::ToggleTheme { origin } => {
                if self.theme.toggle(origin, self.viewport, now) {
                    events.push(Event::ThemeChanged(self.theme.theme()));
                }
            }
            Message::Navbar(message) => match self.navbar.handle(message) {
                navbar::Effect::None => {}
                navbar::Effect::Navigate(item) => events.push(Event::Navigate(item)),
                navbar::Effect::MenuToggled(open) => events.push(Event::MobileMenu { open }),
            },
            Message::Resized { width, height } => {
                self.viewport = Viewport::new(width, height);
            }
            Message::Visibility(entry) => {
                self.reveal.observe(entry, now);
                // Zero-delay entrances start in the same frame.
                events.extend(self.reveal.tick(now).into_iter().map(Event::Reveal));
            }
            Message::PointerMoved {
                region,
                bounds,
                pointer,
            } => {
                let message = spotlight::Message::Moved { bounds, pointer };
                self.route_spotlight(region, message, &mut events);
            }
            Message::PointerLeft { region } => {
                self.route_spotlight(region, spotlight::Message::Left, &mut events);
            }
            Message::RegionRemoved { region } => {
                self.route_spotlight(region, spotlight::Message::Detached, &mut events);
            }
            Message::SetFilter(filter) => {
                let effect = self.gallery.set_filter(filter);
                self.apply_gallery_effect(effect, now, &mut events);
            }
            Message::QuickView(id) => {
                let effect = self.gallery.quick_view(&id);
                self.apply_gallery_effect(effect, now, &mut events);
            }
            Message::QuickViewEntered => {
                let effect = self.quick_view.entrance_finished();
                push_quick_view_event(effect, &mut events);
            }
            Message::CloseQuickView => {
                let effect = self.quick_view.close(now);
                push_quick_view_event(effect, &mut events);
            }
            Message::CarouselNext => {
                push_carousel_event(self.carousel.next(now), &mut events);
            }
            Message::CarouselPrev => {
                push_carousel_event(self.carousel.prev(now), &mut events);
            }
            Message::CarouselGoTo(index) => {
                push_carousel_event(self.carousel.goto(index, now), &mut events);
            }
            Message::CarouselPointerDown => self.carousel.pointer_down(),
            Message::CarouselPointerUp => self.carousel.pointer_up(now),
            Message::SubmitContact(submission) => {
                let effect = self.contact.submit(&submission, now);
                push_contact_event(effect, &mut events);
            }
            Message::ContactResponse(response) => {
                let effect = self.contact.resolve(&response, now);
                push_contact_event(effect, &mut events);
            }
            Message::ContactTransportFailed(reason) => {
                let effect = self.contact.transport_failed(&Error::Submission(reason), now);
                push_contact_event(effect, &mut events);
            }
            Message::Tick => events = self.tick(now),
        }

        events
    }

    /// Fires every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();

        if self.theme.tick(now) == theming::Effect::OverlayRemoved {
            events.push(Event::RippleRemoved);
        }
        events.extend(self.reveal.tick(now).into_iter().map(Event::Reveal));
        let sparkles = self.sparkles.tick(now);
        if !sparkles.is_empty() {
            events.push(Event::Sparkles(sparkles));
        }
        push_quick_view_event(self.quick_view.tick(now), &mut events);
        push_carousel_event(self.carousel.tick(now), &mut events);
        push_contact_event(self.contact.tick(now), &mut events);

        events
    }

    /// Cancels every timer and observer. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        for handle in self.section_reveals.drain(..) {
            self.reveal.unregister(handle);
        }
        if let Some(handle) = self.card_reveal.take() {
            self.reveal.unregister(handle);
        }
        self.reveal.teardown();
        self.theme.teardown();
        self.quick_view.teardown();
        self.carousel.teardown();
        self.contact.teardown();
        self.navbar.teardown();
        self.sparkles.teardown();
        for spotlight in self.spotlights.values_mut() {
            spotlight.detach();
        }
        tracing::debug!("page torn down");
    }

    fn route_spotlight(
        &mut self,
        region: ElementId,
        message: spotlight::Message,
        events: &mut Vec<Event>,
    ) {
        let Some(spotlight) = self.spotlights.get_mut(&region) else {
            return;
        };
        if let spotlight::Effect::ActiveChanged(active) = spotlight.handle(message) {
            events.push(Event::SpotlightChanged { region, active });
        }
    }

    fn apply_gallery_effect(
        &mut self,
        effect: gallery::Effect<gallery::Project>,
        now: Instant,
        events: &mut Vec<Event>,
    ) {
        match effect {
            gallery::Effect::None => {}
            gallery::Effect::FilterChanged { visible } => {
                self.replay_cards(now, events);
                events.push(Event::GalleryChanged { visible });
            }
            gallery::Effect::Empty => {
                self.replay_cards(now, events);
                events.push(Event::GalleryEmpty);
            }
            gallery::Effect::QuickView(project) => {
                let effect = self.quick_view.open(project);
                push_quick_view_event(effect, events);
            }
        }
    }

    /// Drops the previous card entrance, replays it for the visible cards
    /// and emits the starts that are already due.
    ///
    /// An empty grid still goes through the tick so both filter outcomes
    /// report the same frame.
    fn replay_cards(&mut self, now: Instant, events: &mut Vec<Event>) {
        if let Some(handle) = self.card_reveal.take() {
            self.reveal.unregister(handle);
        }

        let cards: Vec<ElementId> = self
            .gallery
            .visible_indices()
            .iter()
            .map(|&index| layout::card(index))
            .collect();
        if !cards.is_empty() {
            self.card_reveal = Some(self.reveal.play(&cards, self.card_preset, now));
        }
        events.extend(self.reveal.tick(now).into_iter().map(Event::Reveal));
    }
}

fn push_quick_view_event(effect: quick_view::Effect, events: &mut Vec<Event>) {
    match effect {
        quick_view::Effect::None => {}
        quick_view::Effect::Updated(status) => events.push(Event::QuickView(status)),
        quick_view::Effect::Cleared => events.push(Event::QuickViewCleared),
    }
}

fn push_carousel_event(effect: carousel::Effect, events: &mut Vec<Event>) {
    if let carousel::Effect::Moved(index) = effect {
        events.push(Event::CarouselMoved(index));
    }
}

fn push_contact_event(effect: contact::Effect, events: &mut Vec<Event>) {
    match effect {
        contact::Effect::None => {}
        contact::Effect::Send(body) => events.push(Event::SendContact(body)),
        contact::Effect::Succeeded { id } => events.push(Event::ContactSucceeded { id }),
        contact::Effect::Failed(message) => events.push(Event::ContactFailed(message)),
        contact::Effect::Reset => events.push(Event::ContactReset),
    }
}
