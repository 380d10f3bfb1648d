// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration: loading and saving the
//! timing and behaviour knobs of every controller to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[theme]` - Ripple animation and toggle settle timings
//! - `[reveal]` - Default activation threshold and stagger for reveal groups
//! - `[gallery]` - Card entrance timings replayed on every filter change
//! - `[quick_view]` - Exit delay before the selected item is cleared
//! - `[carousel]` - Autoplay interval, looping and resume policy
//! - `[contact]` - How long a failed submission message is shown
//!
//! Every field is optional; missing fields take the values in [`defaults`],
//! and out-of-range values are clamped when converted to controller settings:
//! durations are capped at the `MAX_*` bounds in [`defaults`], and the
//! threshold, close delay and autoplay interval use their clamped newtypes.
//!
//! # Examples
//!
//! ```no_run
//! use folio_fx::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let timing = config.theme_timing();
//! assert!(timing.settle() >= timing.ripple_duration());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::carousel::{self, ResumePolicy};
use crate::ui::reveal::{EntrancePreset, RevealOptions};
use crate::ui::state::{AutoplayInterval, CloseDelay, Threshold};
use crate::ui::theming::Timing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Theme transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Ripple expand-and-fade duration (milliseconds).
    #[serde(default = "default_ripple_duration_ms", skip_serializing_if = "Option::is_none")]
    pub ripple_duration_ms: Option<u64>,

    /// Time before the ripple element removes itself (milliseconds).
    #[serde(default = "default_ripple_lifetime_ms", skip_serializing_if = "Option::is_none")]
    pub ripple_lifetime_ms: Option<u64>,

    /// Minimum time between toggles (milliseconds).
    #[serde(default = "default_theme_settle_ms", skip_serializing_if = "Option::is_none")]
    pub settle_ms: Option<u64>,

    /// Vertical ripple origin for keyboard-triggered toggles (pixels).
    #[serde(default = "default_origin_offset_y", skip_serializing_if = "Option::is_none")]
    pub origin_offset_y: Option<f32>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            ripple_duration_ms: default_ripple_duration_ms(),
            ripple_lifetime_ms: default_ripple_lifetime_ms(),
            settle_ms: default_theme_settle_ms(),
            origin_offset_y: default_origin_offset_y(),
        }
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// Visible fraction that activates an element (0.0 to 1.0).
    #[serde(default = "default_reveal_threshold", skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,

    /// Delay between elements of one group (milliseconds).
    #[serde(default = "default_reveal_stagger_ms", skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            stagger_ms: default_reveal_stagger_ms(),
        }
    }
}

/// Project gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Delay before the first card animates after a filter change (milliseconds).
    #[serde(default = "default_gallery_delay_ms", skip_serializing_if = "Option::is_none")]
    pub reveal_delay_ms: Option<u64>,

    /// Delay between cards (milliseconds).
    #[serde(default = "default_gallery_stagger_ms", skip_serializing_if = "Option::is_none")]
    pub reveal_stagger_ms: Option<u64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_gallery_delay_ms(),
            reveal_stagger_ms: default_gallery_stagger_ms(),
        }
    }
}

/// Quick view modal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickViewConfig {
    /// Exit animation time before the item is cleared (milliseconds).
    #[serde(default = "default_close_delay_ms", skip_serializing_if = "Option::is_none")]
    pub close_delay_ms: Option<u64>,
}

impl Default for QuickViewConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

/// How autoplay behaves once the user lets go of the carousel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResumeMode {
    #[default]
    Immediate,
    AfterIdle,
    Never,
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Autoplay interval (milliseconds).
    #[serde(default = "default_autoplay_interval_ms", skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,

    /// Whether navigation wraps around.
    #[serde(default = "default_loop", skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,

    /// Autoplay resume policy after a drag or pointer press.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeMode>,

    /// Idle period for the `after-idle` policy (milliseconds).
    #[serde(default = "default_resume_idle_ms", skip_serializing_if = "Option::is_none")]
    pub resume_idle_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            loop_enabled: default_loop(),
            resume: Some(ResumeMode::default()),
            resume_idle_ms: default_resume_idle_ms(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// How long a failure message stays up (milliseconds).
    #[serde(default = "default_error_reset_ms", skip_serializing_if = "Option::is_none")]
    pub error_reset_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            error_reset_ms: default_error_reset_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with one section per controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub quick_view: QuickViewConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    /// Theme engine timings, with the settle window never shorter than the ripple.
    #[must_use]
    pub fn theme_timing(&self) -> Timing {
        let theme_millis =
            |value: Option<u64>, default| clamped_millis(value, default, MAX_THEME_TIMING_MS);

        Timing::new(
            theme_millis(self.theme.ripple_duration_ms, DEFAULT_RIPPLE_DURATION_MS),
            theme_millis(self.theme.ripple_lifetime_ms, DEFAULT_RIPPLE_LIFETIME_MS),
            theme_millis(self.theme.settle_ms, DEFAULT_THEME_SETTLE_MS),
            self.theme
                .origin_offset_y
                .unwrap_or(DEFAULT_RIPPLE_ORIGIN_OFFSET_Y),
        )
    }

    /// Default options for scroll-triggered reveal groups.
    #[must_use]
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: Threshold::new(self.reveal.threshold.unwrap_or(DEFAULT_REVEAL_THRESHOLD)),
            stagger: clamped_millis(
                self.reveal.stagger_ms,
                DEFAULT_REVEAL_STAGGER_MS,
                MAX_STAGGER_MS,
            ),
        }
    }

    /// Entrance replayed for gallery cards after every filter change.
    #[must_use]
    pub fn gallery_preset(&self) -> EntrancePreset {
        EntrancePreset {
            delay: clamped_millis(
                self.gallery.reveal_delay_ms,
                DEFAULT_GALLERY_REVEAL_DELAY_MS,
                MAX_GALLERY_REVEAL_DELAY_MS,
            ),
            stagger: clamped_millis(
                self.gallery.reveal_stagger_ms,
                DEFAULT_GALLERY_REVEAL_STAGGER_MS,
                MAX_STAGGER_MS,
            ),
            ..EntrancePreset::CARD
        }
    }

    #[must_use]
    pub fn close_delay(&self) -> CloseDelay {
        CloseDelay::new(self.quick_view.close_delay_ms.unwrap_or(DEFAULT_CLOSE_DELAY_MS))
    }

    #[must_use]
    pub fn carousel_settings(&self) -> carousel::Settings {
        let idle = clamped_millis(
            self.carousel.resume_idle_ms,
            DEFAULT_RESUME_IDLE_MS,
            MAX_RESUME_IDLE_MS,
        );
        let resume = match self.carousel.resume.unwrap_or_default() {
            ResumeMode::Immediate => ResumePolicy::Immediate,
            ResumeMode::AfterIdle => ResumePolicy::AfterIdle(idle),
            ResumeMode::Never => ResumePolicy::Never,
        };

        carousel::Settings {
            interval: AutoplayInterval::new(
                self.carousel
                    .autoplay_interval_ms
                    .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS),
            ),
            loop_enabled: self.carousel.loop_enabled.unwrap_or(true),
            resume,
        }
    }

    #[must_use]
    pub fn error_reset(&self) -> Duration {
        clamped_millis(
            self.contact.error_reset_ms,
            DEFAULT_ERROR_RESET_MS,
            MAX_ERROR_RESET_MS,
        )
    }
}

/// Configured milliseconds (or the default) capped at `max`.
fn clamped_millis(value: Option<u64>, default: u64, max: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).min(max))
}

#[allow(clippy::unnecessary_wraps)]
fn default_ripple_duration_ms() -> Option<u64> {
    Some(DEFAULT_RIPPLE_DURATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_ripple_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_RIPPLE_LIFETIME_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_theme_settle_ms() -> Option<u64> {
    Some(DEFAULT_THEME_SETTLE_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_origin_offset_y() -> Option<f32> {
    Some(DEFAULT_RIPPLE_ORIGIN_OFFSET_Y)
}

#[allow(clippy::unnecessary_wraps)]
fn default_reveal_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

#[allow(clippy::unnecessary_wraps)]
fn default_reveal_stagger_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_STAGGER_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_gallery_delay_ms() -> Option<u64> {
    Some(DEFAULT_GALLERY_REVEAL_DELAY_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_gallery_stagger_ms() -> Option<u64> {
    Some(DEFAULT_GALLERY_REVEAL_STAGGER_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_CLOSE_DELAY_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_loop() -> Option<bool> {
    Some(true)
}

#[allow(clippy::unnecessary_wraps)]
fn default_resume_idle_ms() -> Option<u64> {
    Some(DEFAULT_RESUME_IDLE_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_error_reset_ms() -> Option<u64> {
    Some(DEFAULT_ERROR_RESET_MS)
}

// =============================================================================
// Path Helpers
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
