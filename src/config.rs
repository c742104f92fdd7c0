// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

// ============================================================================
// ONBOARDING CONFIGURATION
// ============================================================================
// Edit this file to rebrand or restyle the onboarding screen.
//
// QUICK START - To rebrand, change these values:
//   1. APP_NAME        - Product name shown in the welcome title
//   2. LOGO_URL        - Remote logo image (PNG)
//   3. GRADIENT_STOPS  - Background gradient, top-left to bottom-right
//
// Platform accent colours live next to the Platform enum in connection.rs.
// ============================================================================

use eframe::egui::Color32;

// ----------------------------------------------------------------------------
// BRANDING
// ----------------------------------------------------------------------------

/// Product name (used in the welcome title and window title)
pub const APP_NAME: &str = "Pango";

/// Welcome title shown under the logo
pub const WELCOME_TITLE: &str = "Welcome to Pango";

/// Window title (displayed in title bar)
pub const WINDOW_TITLE: &str = "Pango";

/// Window title for the background preview harness
pub const PREVIEW_WINDOW_TITLE: &str = "Pango App Background";

/// Logo loaded by reference. A failed load falls back to egui's broken image.
pub const LOGO_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/pango_nobg-0aLO3E4IsuXBBkSy42NPEOz5wmHBp7.png";

// ----------------------------------------------------------------------------
// BACKGROUND
// ----------------------------------------------------------------------------

/// Onboarding gradient, diagonal from top-left to bottom-right
pub const GRADIENT_STOPS: [Color32; 3] = [
    Color32::from_rgb(0x4c, 0x80, 0xf0),
    Color32::from_rgb(0x9c, 0x55, 0xe0),
    Color32::from_rgb(0xe9, 0x4c, 0x89),
];

/// Preview harness gradient (blue-500 / purple-500 / pink-500)
pub const PREVIEW_GRADIENT_STOPS: [Color32; 3] = [
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0xa8, 0x55, 0xf7),
    Color32::from_rgb(0xec, 0x48, 0x99),
];

/// Translucent card behind the preview text (white at 10%)
pub const PREVIEW_CARD_FILL: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);

pub const PREVIEW_HEADING: &str = "Pango App Background";
pub const PREVIEW_BODY: &str = "This is the gradient background used in the onboarding screen";

// ----------------------------------------------------------------------------
// LAYOUT (logical units)
// ----------------------------------------------------------------------------

pub const CONTENT_PADDING_X: f32 = 24.0;
pub const CONTENT_PADDING_Y: f32 = 40.0;

pub const LOGO_SIZE: f32 = 120.0;
pub const LOGO_MARGIN_TOP: f32 = 40.0;
pub const LOGO_MARGIN_BOTTOM: f32 = 24.0;
pub const TITLE_FONT_SIZE: f32 = 28.0;

pub const BUTTON_GROUP_MAX_WIDTH: f32 = 320.0;
pub const BUTTON_GROUP_MARGIN_BOTTOM: f32 = 40.0;
pub const BUTTON_HEIGHT: f32 = 56.0;
pub const BUTTON_CORNER_RADIUS: u8 = 12;
pub const BUTTON_SPACING: f32 = 16.0;
pub const BUTTON_FONT_SIZE: f32 = 18.0;
pub const CONTINUE_MARGIN_TOP: f32 = 8.0;

pub const CHECKMARK_SIZE: f32 = 24.0;
pub const CHECKMARK_MARGIN_LEFT: f32 = 8.0;
pub const CHECKMARK_FONT_SIZE: f32 = 14.0;

/// Heavy check mark (U+2714). egui's bundled fonts have no glyph for U+2713.
pub const CHECKMARK_GLYPH: &str = "\u{2714}";

pub const PREVIEW_CARD_PADDING: f32 = 32.0;
pub const PREVIEW_CARD_RADIUS: u8 = 12;
pub const PREVIEW_HEADING_SIZE: f32 = 24.0;
pub const PREVIEW_BODY_SIZE: f32 = 16.0;
pub const PREVIEW_BODY_MARGIN_TOP: f32 = 8.0;

// ----------------------------------------------------------------------------
// BUTTON STYLING
// ----------------------------------------------------------------------------

pub const CONTINUE_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 204);
pub const CHECKMARK_FILL: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);

/// Opacity of a connect button once its platform is connected
pub const CONNECTED_OPACITY: f32 = 0.8;

/// Opacity of the continue button while progression is gated
pub const DISABLED_OPACITY: f32 = 0.5;

/// Ripple tint painted over a pressed button
pub const RIPPLE_ALPHA: f32 = 0.3;
pub const RIPPLE_DURATION_MS: f64 = 400.0;

// ----------------------------------------------------------------------------
// ELEVATED SURFACE
// ----------------------------------------------------------------------------
// Mobile targets render the button shadow as an elevation level; everything
// else uses a soft drop shadow. Both resolve to an egui::Shadow in widgets.rs.

pub const SHADOW_OFFSET_Y: i8 = 2;
pub const SHADOW_BLUR: u8 = 4;
pub const SHADOW_ALPHA: u8 = 38;

pub const ELEVATION_LEVEL: u8 = 4;

// ----------------------------------------------------------------------------
// WINDOW SETTINGS
// ----------------------------------------------------------------------------

/// Default window size (width, height), a phone-sized portrait window
pub const WINDOW_SIZE: (f32, f32) = (390.0, 780.0);

/// Minimum window size (width, height)
pub const WINDOW_MIN_SIZE: (f32, f32) = (340.0, 640.0);

/// Default preview window size (width, height)
pub const PREVIEW_WINDOW_SIZE: (f32, f32) = (900.0, 600.0);

// ----------------------------------------------------------------------------
// LAUNCH ARGUMENTS
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Onboarding,
    BackgroundPreview,
    Help,
}

pub const USAGE: &str = "Usage: pango-onboarding [--background-preview] [--help]";

/// Parse command line arguments (without the program name)
pub fn parse_launch_mode<I, S>(args: I) -> Result<LaunchMode, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mode = LaunchMode::Onboarding;

    for arg in args {
        match arg.as_ref() {
            "--background-preview" | "-b" => mode = LaunchMode::BackgroundPreview,
            "--help" | "-h" => return Ok(LaunchMode::Help),
            other => return Err(format!("Unknown argument: {}\n{}", other, USAGE)),
        }
    }

    Ok(mode)
}
