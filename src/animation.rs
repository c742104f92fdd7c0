// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

//! Entrance animation and press ripple timing as pure functions of elapsed
//! time. The UI samples these every frame from egui's input clock.

use crate::config::{RIPPLE_ALPHA, RIPPLE_DURATION_MS};

/// Linear interpolation from `from` to `to`, starting `delay_ms` after mount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub const fn new(from: f32, to: f32, delay_ms: f64, duration_ms: f64) -> Self {
        Self { from, to, delay_ms, duration_ms }
    }

    /// Fraction of the tween completed at `t_ms`, clamped to [0, 1]
    pub fn progress(&self, t_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return if t_ms >= self.delay_ms { 1.0 } else { 0.0 };
        }
        ((t_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, t_ms: f64) -> f32 {
        self.from + (self.to - self.from) * self.progress(t_ms)
    }

    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms.max(0.0)
    }
}

/// Values of the entrance animation at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub logo_scale: f32,
    pub title_opacity: f32,
    pub buttons_translate_y: f32,
    pub buttons_opacity: f32,
}

/// Button group slide and fade, driven as one joint animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGroupTween {
    pub translate_y: Tween,
    pub opacity: Tween,
}

impl ButtonGroupTween {
    fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            translate_y: Tween::new(50.0, 0.0, delay_ms, duration_ms),
            opacity: Tween::new(0.0, 1.0, delay_ms, duration_ms),
        }
    }

    fn end_ms(&self) -> f64 {
        self.translate_y.end_ms().max(self.opacity.end_ms())
    }
}

/// One-shot animation played when the onboarding screen mounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimation {
    pub logo_scale: Tween,
    pub title_opacity: Tween,
    pub buttons: ButtonGroupTween,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            logo_scale: Tween::new(0.5, 1.0, 0.0, 500.0),
            title_opacity: Tween::new(0.0, 1.0, 200.0, 500.0),
            buttons: ButtonGroupTween::new(400.0, 500.0),
        }
    }
}

impl EntranceAnimation {
    pub fn sample(&self, t_ms: f64) -> EntranceFrame {
        EntranceFrame {
            logo_scale: self.logo_scale.sample(t_ms),
            title_opacity: self.title_opacity.sample(t_ms),
            buttons_translate_y: self.buttons.translate_y.sample(t_ms),
            buttons_opacity: self.buttons.opacity.sample(t_ms),
        }
    }

    pub fn total_ms(&self) -> f64 {
        self.logo_scale
            .end_ms()
            .max(self.title_opacity.end_ms())
            .max(self.buttons.end_ms())
    }

    pub fn is_finished(&self, t_ms: f64) -> bool {
        t_ms >= self.total_ms()
    }
}

/// Ripple painted over a button at `elapsed_ms` after the press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFrame {
    /// Fraction of the button's half-diagonal covered by the ripple
    pub radius_fraction: f32,
    pub alpha: f32,
}

/// Returns `None` once the ripple has faded out
pub fn ripple_at(elapsed_ms: f64) -> Option<RippleFrame> {
    if !(0.0..RIPPLE_DURATION_MS).contains(&elapsed_ms) {
        return None;
    }
    let progress = (elapsed_ms / RIPPLE_DURATION_MS) as f32;
    Some(RippleFrame {
        radius_fraction: progress,
        alpha: RIPPLE_ALPHA * (1.0 - progress),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_entrance_start_values() {
        let frame = EntranceAnimation::default().sample(0.0);
        assert_eq!(
            frame,
            EntranceFrame {
                logo_scale: 0.5,
                title_opacity: 0.0,
                buttons_translate_y: 50.0,
                buttons_opacity: 0.0,
            }
        );
    }

    #[test]
    fn test_entrance_end_values() {
        let anim = EntranceAnimation::default();
        let expected = EntranceFrame {
            logo_scale: 1.0,
            title_opacity: 1.0,
            buttons_translate_y: 0.0,
            buttons_opacity: 1.0,
        };
        for t in [900.0, 901.0, 5_000.0] {
            assert_eq!(anim.sample(t), expected);
        }
        assert_eq!(anim.total_ms(), 900.0);
        assert!(anim.is_finished(900.0));
        assert!(!anim.is_finished(899.0));
    }

    #[test]
    fn test_entrance_midpoints() {
        let anim = EntranceAnimation::default();

        // Logo halfway, title and buttons not started
        let frame = anim.sample(250.0);
        assert!(close(frame.logo_scale, 0.75));
        assert!(close(frame.title_opacity, 0.1));
        assert!(close(frame.buttons_opacity, 0.0));
        assert!(close(frame.buttons_translate_y, 50.0));

        // Logo done, title 60% in, buttons 20% in
        let frame = anim.sample(500.0);
        assert!(close(frame.logo_scale, 1.0));
        assert!(close(frame.title_opacity, 0.6));
        assert!(close(frame.buttons_opacity, 0.2));
        assert!(close(frame.buttons_translate_y, 40.0));
    }

    #[test]
    fn test_button_group_moves_together() {
        let anim = EntranceAnimation::default();
        for step in 0..=20 {
            let t = step as f64 * 50.0;
            let frame = anim.sample(t);
            assert!(close(frame.buttons_opacity, 1.0 - frame.buttons_translate_y / 50.0));
        }
        assert_eq!(anim.buttons.translate_y.end_ms(), anim.buttons.opacity.end_ms());
    }

    #[test]
    fn test_tween_matches_formula() {
        let tween = Tween::new(-3.0, 7.0, 120.0, 300.0);
        for step in 0..=60 {
            let t = step as f64 * 10.0;
            let fraction = ((t - 120.0) / 300.0).clamp(0.0, 1.0) as f32;
            assert!(close(tween.sample(t), -3.0 + 10.0 * fraction));
        }
    }

    #[test]
    fn test_tween_is_monotonic() {
        let tween = EntranceAnimation::default().buttons.translate_y;
        let mut last = tween.sample(0.0);
        for step in 1..=100 {
            let value = tween.sample(step as f64 * 10.0);
            assert!(value <= last);
            last = value;
        }
    }

    #[test]
    fn test_zero_duration_tween() {
        let tween = Tween::new(0.0, 1.0, 100.0, 0.0);
        assert_eq!(tween.sample(99.0), 0.0);
        assert_eq!(tween.sample(100.0), 1.0);
    }

    #[test]
    fn test_ripple_timing() {
        let start = ripple_at(0.0).unwrap();
        assert_eq!(start.radius_fraction, 0.0);
        assert!(close(start.alpha, RIPPLE_ALPHA));

        let mid = ripple_at(RIPPLE_DURATION_MS / 2.0).unwrap();
        assert!(close(mid.radius_fraction, 0.5));
        assert!(close(mid.alpha, RIPPLE_ALPHA / 2.0));

        assert!(ripple_at(RIPPLE_DURATION_MS).is_none());
        assert!(ripple_at(-1.0).is_none());
    }
}
