// SPDX-License-Identifier: MPL-2.0
//! Interactive components of the page and their shared state types.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! a state struct, a `Message` enum, an `Effect` enum and `handle(msg)`.
//! Components never talk to each other; the page shell in [`crate::app`]
//! wires their effects together.
//!
//! # Components
//!
//! - [`theming`] - Dark/light theme with a persisted value and ripple transition
//! - [`navbar`] - Highlighted section link and the mobile menu
//! - [`sparkles`] - Randomly spawned stars around the hero portrait
//! - [`reveal`] - One-shot, staggered entrance animations on first visibility
//! - [`spotlight`] - Pointer-following glow inside a region
//! - [`gallery`] - Category-filtered project grid
//! - [`quick_view`] - Detail modal for one gallery item
//! - [`carousel`] - Autoplaying testimonial carousel
//! - [`contact`] - Contact form submission status
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Clamped value types used by the components' settings
//! - [`ripple`] - The theme transition overlay
//! - [`design_tokens`] - Colors, opacities and radii of the effects

pub mod carousel;
pub mod contact;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod quick_view;
pub mod reveal;
pub mod ripple;
pub mod sparkles;
pub mod spotlight;
pub mod state;
pub mod theming;
