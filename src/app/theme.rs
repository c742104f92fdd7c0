// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

use super::OnboardingApp;
use egui_thematic::ThemeConfig;

impl OnboardingApp {
    /// White text over the gradient; widget fills are painted by hand in widgets.rs
    pub(super) fn get_theme_config(&self) -> ThemeConfig {
        ThemeConfig {
            name: "Pango".to_string(),
            dark_mode: true,
            override_text_color: Some([255, 255, 255, 255]),
            override_weak_text_color: Some([255, 255, 255, 180]),
            override_hyperlink_color: Some([240, 193, 76, 255]),
            override_faint_bg_color: Some([255, 255, 255, 26]),
            override_extreme_bg_color: Some([40, 32, 72, 255]),
            override_code_bg_color: Some([40, 32, 72, 255]),
            override_warn_fg_color: Some([240, 124, 76, 255]),
            override_error_fg_color: Some([233, 76, 137, 255]),
            override_window_fill: Some([52, 40, 92, 245]),
            override_window_stroke_color: None,
            override_window_stroke_width: None,
            override_window_corner_radius: None,
            override_window_shadow_size: None,
            override_panel_fill: Some([76, 128, 240, 255]),
            override_popup_shadow_size: None,
            override_selection_bg: Some([156, 85, 224, 255]),
            override_selection_stroke_color: None,
            override_selection_stroke_width: None,
            override_widget_noninteractive_bg_fill: None,
            override_widget_noninteractive_weak_bg_fill: None,
            override_widget_noninteractive_bg_stroke_color: None,
            override_widget_noninteractive_bg_stroke_width: None,
            override_widget_noninteractive_corner_radius: None,
            override_widget_noninteractive_fg_stroke_color: Some([255, 255, 255, 255]),
            override_widget_noninteractive_fg_stroke_width: None,
            override_widget_noninteractive_expansion: None,
            override_widget_inactive_bg_fill: None,
            override_widget_inactive_weak_bg_fill: None,
            override_widget_inactive_bg_stroke_color: None,
            override_widget_inactive_bg_stroke_width: None,
            override_widget_inactive_corner_radius: None,
            override_widget_inactive_fg_stroke_color: Some([255, 255, 255, 255]),
            override_widget_inactive_fg_stroke_width: None,
            override_widget_inactive_expansion: None,
            override_widget_hovered_bg_fill: Some([255, 255, 255, 40]),
            override_widget_hovered_weak_bg_fill: None,
            override_widget_hovered_bg_stroke_color: None,
            override_widget_hovered_bg_stroke_width: None,
            override_widget_hovered_corner_radius: None,
            override_widget_hovered_fg_stroke_color: Some([255, 255, 255, 255]),
            override_widget_hovered_fg_stroke_width: None,
            override_widget_hovered_expansion: None,
            override_widget_active_bg_fill: Some([255, 255, 255, 77]),
            override_widget_active_weak_bg_fill: None,
            override_widget_active_bg_stroke_color: None,
            override_widget_active_bg_stroke_width: None,
            override_widget_active_corner_radius: None,
            override_widget_active_fg_stroke_color: Some([255, 255, 255, 255]),
            override_widget_active_fg_stroke_width: None,
            override_widget_active_expansion: None,
            override_widget_open_bg_fill: None,
            override_widget_open_weak_bg_fill: None,
            override_widget_open_bg_stroke_color: None,
            override_widget_open_bg_stroke_width: None,
            override_widget_open_corner_radius: None,
            override_widget_open_fg_stroke_color: None,
            override_widget_open_fg_stroke_width: None,
            override_widget_open_expansion: None,
            override_resize_corner_size: None,
            override_text_cursor_width: None,
            override_clip_rect_margin: None,
            override_button_frame: None,
            override_collapsing_header_frame: None,
            override_indent_has_left_vline: None,
            override_striped: None,
            override_slider_trailing_fill: None,
        }
    }
}
