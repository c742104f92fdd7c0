// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

//! Which external platforms the user has connected, and whether that is
//! enough to leave the onboarding screen.

use eframe::egui::Color32;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Telegram,
    LinkedIn,
    Instagram,
}

impl Platform {
    /// All platforms in the order their buttons are laid out
    pub const ALL: [Platform; 3] = [Platform::Telegram, Platform::LinkedIn, Platform::Instagram];

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Telegram => "Telegram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Instagram => "Instagram",
        }
    }

    /// Telegram is the only platform that gates progression on its own
    pub fn is_required(self) -> bool {
        matches!(self, Platform::Telegram)
    }

    /// Background tint of the platform's connect button
    pub fn accent(self) -> Color32 {
        match self {
            Platform::Telegram => Color32::from_rgb(0x4c, 0x80, 0xf0),
            Platform::LinkedIn => Color32::from_rgb(0xf0, 0xc1, 0x4c),
            Platform::Instagram => Color32::from_rgb(0xf0, 0x7c, 0x4c),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Observable state of the continue button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueRegion {
    Disabled,
    Enabled,
}

/// Connection flags, replaced wholesale on every transition.
///
/// Flags only ever go from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub telegram: bool,
    pub linkedin: bool,
    pub instagram: bool,
}

impl ConnectionState {
    pub fn is_connected(&self, platform: Platform) -> bool {
        match platform {
            Platform::Telegram => self.telegram,
            Platform::LinkedIn => self.linkedin,
            Platform::Instagram => self.instagram,
        }
    }

    /// Returns a copy with `platform` marked connected. Connecting twice is a no-op.
    #[must_use]
    pub fn connected(self, platform: Platform) -> Self {
        match platform {
            Platform::Telegram => Self { telegram: true, ..self },
            Platform::LinkedIn => Self { linkedin: true, ..self },
            Platform::Instagram => Self { instagram: true, ..self },
        }
    }

    pub fn can_continue(&self) -> bool {
        self.telegram && (self.linkedin || self.instagram)
    }

    pub fn region(&self) -> ContinueRegion {
        if self.can_continue() {
            ContinueRegion::Enabled
        } else {
            ContinueRegion::Disabled
        }
    }
}

/// Button label for a platform in the given connection state
pub fn connect_label(platform: Platform, is_connected: bool) -> String {
    if is_connected {
        format!("Connected to {}", platform)
    } else if platform.is_required() {
        format!("Connect {} (Required)", platform)
    } else {
        format!("Connect {}", platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(presses: &[Platform]) -> ConnectionState {
        presses
            .iter()
            .fold(ConnectionState::default(), |state, &p| state.connected(p))
    }

    #[test]
    fn test_initial_state() {
        let state = ConnectionState::default();
        for platform in Platform::ALL {
            assert!(!state.is_connected(platform));
        }
        assert!(!state.can_continue());
        assert_eq!(state.region(), ContinueRegion::Disabled);
    }

    #[test]
    fn test_can_continue_for_every_subset() {
        for mask in 0u8..8 {
            let presses: Vec<Platform> = Platform::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| *p)
                .collect();
            let state = state_after(&presses);

            let has = |p| presses.contains(&p);
            let expected =
                has(Platform::Telegram) && (has(Platform::LinkedIn) || has(Platform::Instagram));
            assert_eq!(state.can_continue(), expected, "presses: {:?}", presses);
        }
    }

    #[test]
    fn test_enabled_combinations() {
        let enabled = (0u8..8)
            .map(|mask| ConnectionState {
                telegram: mask & 1 != 0,
                linkedin: mask & 2 != 0,
                instagram: mask & 4 != 0,
            })
            .filter(|s| s.region() == ContinueRegion::Enabled)
            .count();
        // telegram+linkedin, telegram+instagram, all three
        assert_eq!(enabled, 3);
    }

    #[test]
    fn test_connect_is_idempotent() {
        let once = state_after(&[Platform::LinkedIn]);
        let twice = once.connected(Platform::LinkedIn);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_connect_leaves_other_flags() {
        let state = ConnectionState::default().connected(Platform::Instagram);
        assert!(state.instagram);
        assert!(!state.telegram);
        assert!(!state.linkedin);
    }

    #[test]
    fn test_scenarios() {
        assert!(!state_after(&[Platform::Telegram]).can_continue());
        assert!(state_after(&[Platform::Telegram, Platform::LinkedIn]).can_continue());
        assert!(state_after(&[Platform::LinkedIn, Platform::Telegram]).can_continue());
        assert!(!state_after(&[Platform::Instagram]).can_continue());
        assert!(!state_after(&[Platform::Instagram, Platform::LinkedIn]).can_continue());

        let all = state_after(&Platform::ALL);
        assert!(all.can_continue());
        for platform in Platform::ALL {
            assert!(all.is_connected(platform));
        }
    }

    #[test]
    fn test_connect_label() {
        assert_eq!(connect_label(Platform::Telegram, false), "Connect Telegram (Required)");
        assert_eq!(connect_label(Platform::Telegram, true), "Connected to Telegram");
        assert_eq!(connect_label(Platform::LinkedIn, false), "Connect LinkedIn");
        assert_eq!(connect_label(Platform::Instagram, true), "Connected to Instagram");
    }

    #[test]
    fn test_only_telegram_is_required() {
        let required: Vec<_> = Platform::ALL.into_iter().filter(|p| p.is_required()).collect();
        assert_eq!(required, vec![Platform::Telegram]);
    }
}
