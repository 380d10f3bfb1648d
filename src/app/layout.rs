// SPDX-License-Identifier: MPL-2.0
//! Stable element ids for the regions the page animates.
//!
//! The renderer reports visibility and pointer events against these ids, so
//! both sides only need to agree on this numbering.

use crate::ui::reveal::ElementId;

/// Sections that carry an animated heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    fn base(self) -> u64 {
        match self {
            Section::About => 100,
            Section::Projects => 200,
            Section::Testimonials => 300,
            Section::Contact => 400,
        }
    }

    /// Badge, title and subtitle, in reveal order.
    #[must_use]
    pub fn heading(self) -> [ElementId; 3] {
        let base = self.base();
        [ElementId(base), ElementId(base + 1), ElementId(base + 2)]
    }
}

const NAV_ID: u64 = 10;
const FORM_ID: u64 = 20;
const TAB_BASE: u64 = 1_000;
const CARD_BASE: u64 = 10_000;
const TESTIMONIAL_BASE: u64 = 20_000;

/// Navigation pill.
pub const NAV: ElementId = ElementId(NAV_ID);

/// Contact form panel.
pub const CONTACT_FORM: ElementId = ElementId(FORM_ID);

/// Gallery filter tab at `index` in the tab list.
#[must_use]
pub fn tab(index: usize) -> ElementId {
    ElementId(TAB_BASE + index as u64)
}

/// Gallery card of the project at `index` in the source list.
#[must_use]
pub fn card(index: usize) -> ElementId {
    ElementId(CARD_BASE + index as u64)
}

/// Testimonial card at `index`.
#[must_use]
pub fn testimonial(index: usize) -> ElementId {
    ElementId(TESTIMONIAL_BASE + index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_do_not_collide() {
        let mut ids: Vec<ElementId> = Section::ALL
            .iter()
            .flat_map(|section| section.heading())
            .chain([NAV, CONTACT_FORM])
            .chain((0..8).map(tab))
            .chain((0..500).map(card))
            .chain((0..500).map(testimonial))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
