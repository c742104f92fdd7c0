// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

// Background preview harness: the onboarding gradient behind a translucent
// card, for checking the gradient without stepping through the screen.

use crate::app::paint_gradient;
use crate::config::{
    PREVIEW_BODY, PREVIEW_BODY_MARGIN_TOP, PREVIEW_BODY_SIZE, PREVIEW_CARD_FILL,
    PREVIEW_CARD_PADDING, PREVIEW_CARD_RADIUS, PREVIEW_GRADIENT_STOPS, PREVIEW_HEADING,
    PREVIEW_HEADING_SIZE,
};
use eframe::egui::{self, Color32, CornerRadius, FontId, Rect, Vec2};

pub struct BackgroundPreviewApp;

impl BackgroundPreviewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self
    }
}

impl eframe::App for BackgroundPreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        show(ctx);
    }
}

/// Card centred on `screen`, sized to hold `content` plus padding
pub fn card_rect(screen: Rect, content: Vec2) -> Rect {
    Rect::from_center_size(screen.center(), content + Vec2::splat(2.0 * PREVIEW_CARD_PADDING))
}

pub fn show(ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let full = ui.max_rect();
            paint_gradient(ui, full, &PREVIEW_GRADIENT_STOPS);

            let painter = ui.painter();
            let heading = painter.layout_no_wrap(
                PREVIEW_HEADING.to_string(),
                FontId::proportional(PREVIEW_HEADING_SIZE),
                Color32::WHITE,
            );
            // Wrap the body line on narrow windows
            let max_body_width = (full.width() - 4.0 * PREVIEW_CARD_PADDING).max(heading.size().x);
            let body = painter.layout(
                PREVIEW_BODY.to_string(),
                FontId::proportional(PREVIEW_BODY_SIZE),
                Color32::WHITE,
                max_body_width,
            );

            let content = Vec2::new(
                heading.size().x.max(body.size().x),
                heading.size().y + PREVIEW_BODY_MARGIN_TOP + body.size().y,
            );
            let card = card_rect(full, content);
            painter.rect_filled(card, CornerRadius::same(PREVIEW_CARD_RADIUS), PREVIEW_CARD_FILL);

            let text_min = card.min + Vec2::splat(PREVIEW_CARD_PADDING);
            let body_min = text_min + Vec2::new(0.0, heading.size().y + PREVIEW_BODY_MARGIN_TOP);
            painter.galley(text_min, heading, Color32::WHITE);
            painter.galley(body_min, body, Color32::WHITE);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Pos2;

    #[test]
    fn test_card_is_centred_with_padding() {
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(900.0, 600.0));
        let card = card_rect(screen, Vec2::new(300.0, 60.0));
        assert_eq!(card.center(), screen.center());
        assert_eq!(card.width(), 300.0 + 2.0 * PREVIEW_CARD_PADDING);
        assert_eq!(card.height(), 60.0 + 2.0 * PREVIEW_CARD_PADDING);
    }

    #[test]
    fn test_renders_without_error() {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), show);
        assert!(!output.shapes.is_empty());
    }
}
