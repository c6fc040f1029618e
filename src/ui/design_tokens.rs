// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (4px steps)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use front_desk::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let swipe_background = Color {
//!     a: opacity::SWIPE_HINT,
//!     ..palette::DANGER_500
//! };
//! let padding = spacing::MD;
//! # let _ = (swipe_background, padding);
//! ```

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand (front-desk teal)
    pub const BRAND_400: Color = Color::from_rgb(0.2, 0.7, 0.68);
    pub const BRAND_500: Color = Color::from_rgb(0.1, 0.58, 0.56);

    // Semantic
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    /// Unread dot and badge.
    pub const UNREAD_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Hovered destructive buttons.
    pub const OVERLAY_HOVER_DANGER: f32 = 0.85;
    /// Backdrop behind the bulk-delete prompt.
    pub const SCRIM: f32 = 0.6;
    /// Red strip revealed behind a swiped row, before the threshold.
    pub const SWIPE_HINT: f32 = 0.35;
    /// Muted text of read notifications.
    pub const READ_TEXT: f32 = 0.7;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 48.0;
    pub const BELL_BUTTON: f32 = 36.0;
    /// Diameter of the unread-count badge.
    pub const BADGE: f32 = 18.0;
    /// Extra badge scale while pulsing.
    pub const BADGE_PULSE_SCALE: f32 = 1.35;
    pub const UNREAD_DOT: f32 = 8.0;

    pub const HISTORY_PANEL_WIDTH: f32 = 460.0;
    pub const ROW_MIN_HEIGHT: f32 = 64.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DIALOG_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
    pub const BADGE: f32 = 11.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SWIPE_HINT > 0.0 && opacity::SWIPE_HINT < 1.0);
    assert!(opacity::SCRIM > opacity::OVERLAY_MEDIUM);

    assert!(sizing::BADGE < sizing::BELL_BUTTON);
    assert!(sizing::BADGE_PULSE_SCALE > 1.0);
    assert!(sizing::TOAST_WIDTH < sizing::HISTORY_PANEL_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
