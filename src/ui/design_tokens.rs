// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, opacities and radii used by the transient effects this crate
describes (theme ripple, pointer spotlight). The stylesheet owns everything
else; these are only the values the controllers hand to the renderer.

## Organization

- **Palette**: Accent colors shared by the effects
- **Opacity**: Gradient stop intensities
- **Glow**: Spotlight radii per surface

## Examples

```
use folio_fx::ui::design_tokens::{opacity, palette};
use iced_core::Color;

let ripple_core = Color {
    a: opacity::RIPPLE_LIGHT_CORE,
    ..palette::BLUE_500
};
assert!(ripple_core.a < 0.2);
```
"#]

use iced_core::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    /// Ripple accent when switching to light.
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3B82F6

    /// Ripple accent when switching to dark.
    pub const VIOLET_500: Color = Color::from_rgb(0.545, 0.361, 0.965); // #8B5CF6

    /// Spotlight accent (cards, navigation, contact form).
    pub const CYAN_500: Color = Color::from_rgb(0.024, 0.714, 0.831); // #06B6D4
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    // Ripple gradient stops (core at 0%, halo at 40%, transparent from 70%)
    pub const RIPPLE_LIGHT_CORE: f32 = 0.12;
    pub const RIPPLE_LIGHT_HALO: f32 = 0.08;
    pub const RIPPLE_DARK_CORE: f32 = 0.15;
    pub const RIPPLE_DARK_HALO: f32 = 0.10;

    /// Spotlight fill behind card content.
    pub const GLOW_BACKGROUND: f32 = 0.15;
    /// Spotlight border glow.
    pub const GLOW_BORDER: f32 = 0.8;
    /// Subtle white border glow on testimonial cards.
    pub const GLOW_BORDER_SUBTLE: f32 = 0.3;
}

// ============================================================================
// Gradient Stops
// ============================================================================

pub mod stops {
    /// Position of the ripple halo stop.
    pub const RIPPLE_HALO: f32 = 0.4;
    /// Position from which the ripple is fully transparent.
    pub const RIPPLE_FADE: f32 = 0.7;
}

// ============================================================================
// Glow Radii
// ============================================================================

pub mod glow {
    pub const CARD_FILL: f32 = 250.0;
    pub const CARD_BORDER: f32 = 200.0;
    pub const NAV_FILL: f32 = 150.0;
    pub const NAV_BORDER: f32 = 100.0;
    pub const FORM_FILL: f32 = 300.0;
    pub const FORM_BORDER: f32 = 200.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::RIPPLE_LIGHT_CORE > opacity::RIPPLE_LIGHT_HALO);
    assert!(opacity::RIPPLE_DARK_CORE > opacity::RIPPLE_DARK_HALO);
    assert!(stops::RIPPLE_HALO < stops::RIPPLE_FADE);
    assert!(glow::CARD_FILL > glow::CARD_BORDER);
    assert!(glow::NAV_FILL > glow::NAV_BORDER);
};
