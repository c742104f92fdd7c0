// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

use crate::animation::EntranceAnimation;
use crate::connection::{ConnectionState, Platform};
use crate::debug::{self, Event};
use egui_thematic::ThemeEditorState;

/// Collaborator invoked when the user leaves onboarding
pub type Navigator = Box<dyn FnMut()>;

/// Connection state plus the navigation collaborator. No egui types, so the
/// screen's behaviour is testable without a window.
pub struct OnboardingScreen {
    connections: ConnectionState,
    navigate_home: Navigator,
}

impl OnboardingScreen {
    pub fn new(navigate_home: Navigator) -> Self {
        Self {
            connections: ConnectionState::default(),
            navigate_home,
        }
    }

    /// Stub navigator: home screen navigation only leaves a trace in the debug log
    pub fn with_logging_navigator() -> Self {
        Self::new(Box::new(|| debug::log_event(Event::Navigating)))
    }

    pub fn connections(&self) -> ConnectionState {
        self.connections
    }

    pub fn can_continue(&self) -> bool {
        self.connections.can_continue()
    }

    /// Mark `platform` connected. Returns false if it already was.
    pub fn connect(&mut self, platform: Platform) -> bool {
        if self.connections.is_connected(platform) {
            debug::log_event(Event::AlreadyConnected(platform));
            return false;
        }

        self.connections = self.connections.connected(platform);
        debug::log_event(Event::Connected {
            platform,
            region: self.connections.region(),
        });
        true
    }

    /// Invoke the navigator if progression is allowed. Returns whether it ran.
    pub fn press_continue(&mut self) -> bool {
        if !self.can_continue() {
            debug::log_event(Event::ContinueGated(self.connections));
            return false;
        }

        (self.navigate_home)();
        true
    }
}

pub struct OnboardingApp {
    pub(super) screen: OnboardingScreen,

    // Entrance animation, clocked from the first frame
    pub(super) entrance: EntranceAnimation,
    pub(super) mounted_at: Option<f64>,

    // Theme editor
    pub(super) theme_state: ThemeEditorState,
    pub(super) show_theme_editor: bool,
}

impl OnboardingApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_screen(cc, OnboardingScreen::with_logging_navigator())
    }

    pub fn with_screen(cc: &eframe::CreationContext<'_>, screen: OnboardingScreen) -> Self {
        // Needed for loading the logo by URL
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            screen,
            entrance: EntranceAnimation::default(),
            mounted_at: None,
            theme_state: ThemeEditorState::default(),
            show_theme_editor: false,
        };

        let theme = app.get_theme_config();
        cc.egui_ctx.set_visuals(theme.to_visuals());
        app.theme_state.current_config = theme;

        debug::log_event(Event::Mounted);
        app
    }

    /// Milliseconds since the first rendered frame
    pub(super) fn elapsed_ms(&mut self, now: f64) -> f64 {
        let mounted_at = *self.mounted_at.get_or_insert(now);
        ((now - mounted_at) * 1000.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_screen() -> (OnboardingScreen, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let screen = OnboardingScreen::new(Box::new(move || counter.set(counter.get() + 1)));
        (screen, calls)
    }

    #[test]
    fn test_continue_disabled_initially() {
        let (mut screen, calls) = counting_screen();
        assert!(!screen.can_continue());
        assert!(!screen.press_continue());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_continue_requires_telegram() {
        let (mut screen, calls) = counting_screen();
        screen.connect(Platform::Instagram);
        screen.connect(Platform::LinkedIn);
        assert!(!screen.press_continue());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_continue_navigates_once_per_press() {
        let (mut screen, calls) = counting_screen();
        screen.connect(Platform::Telegram);
        assert!(!screen.press_continue());

        screen.connect(Platform::LinkedIn);
        let before = screen.connections();
        assert!(screen.press_continue());
        assert_eq!(calls.get(), 1);
        assert!(screen.press_continue());
        assert_eq!(calls.get(), 2);
        assert_eq!(screen.connections(), before);
    }

    #[test]
    fn test_connect_twice_is_noop() {
        let (mut screen, _) = counting_screen();
        assert!(screen.connect(Platform::Telegram));
        let after_first = screen.connections();
        assert!(!screen.connect(Platform::Telegram));
        assert_eq!(screen.connections(), after_first);
    }

    #[test]
    fn test_connect_all_three() {
        let (mut screen, calls) = counting_screen();
        for platform in Platform::ALL {
            assert!(screen.connect(platform));
        }
        assert!(screen.can_continue());
        assert!(Platform::ALL.iter().all(|&p| screen.connections().is_connected(p)));
        assert!(screen.press_continue());
        assert_eq!(calls.get(), 1);
    }
}
