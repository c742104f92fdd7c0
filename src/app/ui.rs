// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

use super::widgets::{connect_button, continue_button, paint_gradient, ButtonLayout};
use super::OnboardingApp;
use crate::animation::EntranceFrame;
use crate::config::{
    BUTTON_GROUP_MARGIN_BOTTOM, BUTTON_GROUP_MAX_WIDTH, CONTENT_PADDING_X, CONTENT_PADDING_Y,
    GRADIENT_STOPS, LOGO_MARGIN_BOTTOM, LOGO_MARGIN_TOP, LOGO_SIZE, LOGO_URL, TITLE_FONT_SIZE,
    WELCOME_TITLE,
};
use crate::connection::Platform;
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Vec2};
use egui_thematic::render_theme_panel;

/// Button column anchored to the bottom of the padded content area
fn button_layout(content: Rect, translate_y: f32) -> ButtonLayout {
    ButtonLayout::new(
        content.center().x,
        content.bottom() - BUTTON_GROUP_MARGIN_BOTTOM,
        content.width().min(BUTTON_GROUP_MAX_WIDTH),
        translate_y,
    )
}

impl eframe::App for OnboardingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl OnboardingApp {
    pub(super) fn show(&mut self, ctx: &egui::Context) {
        // Theme editor panel, for design review
        render_theme_panel(ctx, &mut self.theme_state, &mut self.show_theme_editor);

        // Keyboard shortcut to toggle theme editor (Ctrl+T)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::CTRL, egui::Key::T))) {
            self.show_theme_editor = !self.show_theme_editor;
        }

        let elapsed = self.elapsed_ms(ctx.input(|i| i.time));
        let frame = self.entrance.sample(elapsed);
        let mut animating = !self.entrance.is_finished(elapsed);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let full = ui.max_rect();
                paint_gradient(ui, full, &GRADIENT_STOPS);

                let content = full.shrink2(Vec2::new(CONTENT_PADDING_X, CONTENT_PADDING_Y));
                self.render_header(ui, content, &frame);
                animating |= self.render_buttons(ui, content, &frame);
            });

        // Keep repainting until the entrance and any ripple have settled
        if animating {
            ctx.request_repaint();
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, content: Rect, frame: &EntranceFrame) {
        let center_x = content.center().x;
        let logo_top = content.top() + LOGO_MARGIN_TOP;

        // Logo scales around the centre of its fixed box
        let logo_center = Pos2::new(center_x, logo_top + LOGO_SIZE / 2.0);
        let logo_rect = Rect::from_center_size(logo_center, Vec2::splat(LOGO_SIZE * frame.logo_scale));
        ui.put(
            logo_rect,
            egui::Image::new(LOGO_URL).fit_to_exact_size(logo_rect.size()),
        );

        ui.painter().text(
            Pos2::new(center_x, logo_top + LOGO_SIZE + LOGO_MARGIN_BOTTOM),
            Align2::CENTER_TOP,
            WELCOME_TITLE,
            FontId::proportional(TITLE_FONT_SIZE),
            Color32::WHITE.gamma_multiply(frame.title_opacity),
        );
    }

    /// Returns true while a button ripple needs repainting
    fn render_buttons(&mut self, ui: &mut egui::Ui, content: Rect, frame: &EntranceFrame) -> bool {
        let layout = button_layout(content, frame.buttons_translate_y);

        ui.scope(|ui| {
            ui.set_opacity(frame.buttons_opacity);
            let mut animating = false;

            for (platform, rect) in Platform::ALL.into_iter().zip(layout.connect) {
                let is_connected = self.screen.connections().is_connected(platform);
                let response = connect_button(ui, rect, platform, is_connected);
                if response.clicked {
                    self.screen.connect(platform);
                }
                animating |= response.animating;
            }

            let response = continue_button(ui, layout.continue_button, self.screen.can_continue());
            if response.clicked {
                self.screen.press_continue();
            }
            animating | response.animating
        })
        .inner
    }
}
