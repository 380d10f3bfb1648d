// SPDX-License-Identifier: MPL-2.0
//! `folio_fx` holds the interaction state of a personal portfolio page.
//!
//! It models the theme toggle with its ripple transition, scroll-triggered
//! reveals, the pointer spotlight, the filtered project gallery with its
//! quick view, the testimonial carousel and the contact form. Every
//! controller is a plain state machine fed with explicit timestamps, so the
//! rendering layer (and the tests) decide when time passes.

#![doc(html_root_url = "https://docs.rs/folio_fx/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod timer;
pub mod ui;

#[cfg(test)]
mod test_utils;
