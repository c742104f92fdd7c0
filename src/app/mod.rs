// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

// Module structure for the onboarding application:
//
// - state.rs: OnboardingScreen (connection state + navigator) and the OnboardingApp struct
// - theme.rs: Theme configuration
// - widgets.rs: Gradient, elevated surface and button painting
// - ui.rs: UI rendering (eframe::App implementation)

mod state;
mod theme;
mod ui;
mod widgets;

// Re-export public types so they can be used by other modules via super::
pub use state::{OnboardingApp, OnboardingScreen};
pub use widgets::paint_gradient;
