// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

// Hand-painted pieces of the onboarding screen:
// - the diagonal three-stop gradient (shared with the background preview)
// - the elevated surface shadow token
// - rounded buttons with press ripple feedback

use crate::animation::ripple_at;
use crate::config::{
    BUTTON_CORNER_RADIUS, BUTTON_FONT_SIZE, BUTTON_HEIGHT, BUTTON_SPACING, CHECKMARK_FILL,
    CHECKMARK_FONT_SIZE, CHECKMARK_GLYPH, CHECKMARK_MARGIN_LEFT, CHECKMARK_SIZE, CONNECTED_OPACITY,
    CONTINUE_FILL, CONTINUE_MARGIN_TOP, DISABLED_OPACITY,
};
#[cfg(target_os = "android")]
use crate::config::ELEVATION_LEVEL;
#[cfg(not(target_os = "android"))]
use crate::config::{SHADOW_ALPHA, SHADOW_BLUR, SHADOW_OFFSET_Y};
use crate::connection::{connect_label, Platform};
use eframe::egui::{
    self, Align2, Color32, CornerRadius, CursorIcon, FontId, Mesh, Pos2, Rect, Sense, Shadow,
    Vec2,
};

// ============================================================================
// GRADIENT
// ============================================================================

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Colour of the top-left to bottom-right gradient at normalized (u, v)
fn gradient_color_at(stops: &[Color32; 3], u: f32, v: f32) -> Color32 {
    let t = ((u + v) / 2.0).clamp(0.0, 1.0);
    if t <= 0.5 {
        lerp_color(stops[0], stops[1], t * 2.0)
    } else {
        lerp_color(stops[1], stops[2], (t - 0.5) * 2.0)
    }
}

/// Two triangles split along the anti-diagonal. The middle stop sits on the
/// top-right and bottom-left corners, so vertex interpolation reproduces the
/// three-stop gradient exactly.
pub fn diagonal_gradient_mesh(rect: Rect, stops: &[Color32; 3]) -> Mesh {
    let mut mesh = Mesh::default();
    for (pos, u, v) in [
        (rect.left_top(), 0.0, 0.0),
        (rect.right_top(), 1.0, 0.0),
        (rect.left_bottom(), 0.0, 1.0),
        (rect.right_bottom(), 1.0, 1.0),
    ] {
        mesh.colored_vertex(pos, gradient_color_at(stops, u, v));
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    mesh
}

pub fn paint_gradient(ui: &egui::Ui, rect: Rect, stops: &[Color32; 3]) {
    ui.painter().add(egui::Shape::mesh(diagonal_gradient_mesh(rect, stops)));
}

// ============================================================================
// ELEVATED SURFACE
// ============================================================================

/// Shadow under raised surfaces, resolved for the target platform
pub fn elevated_surface() -> Shadow {
    #[cfg(target_os = "android")]
    {
        Shadow {
            offset: [0, (ELEVATION_LEVEL / 2) as i8],
            blur: ELEVATION_LEVEL * 2,
            spread: 0,
            color: Color32::from_black_alpha(60),
        }
    }
    #[cfg(not(target_os = "android"))]
    {
        Shadow {
            offset: [0, SHADOW_OFFSET_Y],
            blur: SHADOW_BLUR,
            spread: 0,
            color: Color32::from_black_alpha(SHADOW_ALPHA),
        }
    }
}

fn paint_surface(ui: &egui::Ui, rect: Rect, fill: Color32, opacity: f32) {
    let radius = CornerRadius::same(BUTTON_CORNER_RADIUS);
    let mut shadow = elevated_surface();
    shadow.color = shadow.color.gamma_multiply(opacity);

    let painter = ui.painter();
    painter.add(shadow.as_shape(rect, radius));
    painter.rect_filled(rect, radius, fill.gamma_multiply(opacity));
}

// ============================================================================
// BUTTON LAYOUT
// ============================================================================

/// Rects of the button column, top to bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    pub connect: [Rect; 3],
    pub continue_button: Rect,
}

impl ButtonLayout {
    pub const GROUP_HEIGHT: f32 =
        3.0 * (BUTTON_HEIGHT + BUTTON_SPACING) + CONTINUE_MARGIN_TOP + BUTTON_HEIGHT;

    /// Lay the column out with its bottom edge at `bottom`, centred on `center_x`
    pub fn new(center_x: f32, bottom: f32, width: f32, translate_y: f32) -> Self {
        let top = bottom - Self::GROUP_HEIGHT + translate_y;
        let left = center_x - width / 2.0;
        let size = Vec2::new(width, BUTTON_HEIGHT);

        let connect = std::array::from_fn(|i| {
            let y = top + i as f32 * (BUTTON_HEIGHT + BUTTON_SPACING);
            Rect::from_min_size(Pos2::new(left, y), size)
        });
        let continue_top = top + 3.0 * (BUTTON_HEIGHT + BUTTON_SPACING) + CONTINUE_MARGIN_TOP;

        Self {
            connect,
            continue_button: Rect::from_min_size(Pos2::new(left, continue_top), size),
        }
    }
}

// ============================================================================
// BUTTONS
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonResponse {
    pub clicked: bool,
    /// A ripple is still fading and needs another frame
    pub animating: bool,
}

#[derive(Debug, Clone, Copy)]
struct Ripple {
    origin: Pos2,
    started: f64,
}

/// Start a ripple on press and paint the current one. Returns true while it is visible.
fn ripple(ui: &egui::Ui, rect: Rect, response: &egui::Response, enabled: bool) -> bool {
    let now = ui.input(|i| i.time);

    if enabled && response.is_pointer_button_down_on() && ui.input(|i| i.pointer.any_pressed()) {
        if let Some(origin) = response.interact_pointer_pos() {
            ui.data_mut(|d| d.insert_temp(response.id, Ripple { origin, started: now }));
        }
    }

    let Some(active) = ui.data(|d| d.get_temp::<Ripple>(response.id)) else {
        return false;
    };

    match ripple_at((now - active.started) * 1000.0) {
        Some(frame) => {
            let radius = rect.size().length() * frame.radius_fraction;
            let color = Color32::WHITE.gamma_multiply(frame.alpha);
            ui.painter()
                .with_clip_rect(rect.intersect(ui.clip_rect()))
                .circle_filled(active.origin, radius, color);
            true
        }
        None => {
            ui.data_mut(|d| d.remove::<Ripple>(response.id));
            false
        }
    }
}

fn surface_button(
    ui: &egui::Ui,
    id: egui::Id,
    rect: Rect,
    label: String,
    fill: Color32,
    opacity: f32,
    enabled: bool,
    checkmark: bool,
) -> ButtonResponse {
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let mut response = ui.interact(rect, id, sense);
    if enabled {
        response = response.on_hover_cursor(CursorIcon::PointingHand);
    }

    paint_surface(ui, rect, fill, opacity);
    let animating = ripple(ui, rect, &response, enabled);

    let text_color = Color32::WHITE.gamma_multiply(opacity);
    let painter = ui.painter();
    let galley = painter.layout_no_wrap(label, FontId::proportional(BUTTON_FONT_SIZE), text_color);

    // Label and checkmark are centred together as one row
    let badge_width = if checkmark { CHECKMARK_MARGIN_LEFT + CHECKMARK_SIZE } else { 0.0 };
    let row_width = galley.size().x + badge_width;
    let left = rect.center().x - row_width / 2.0;
    let text_pos = Pos2::new(left, rect.center().y - galley.size().y / 2.0);
    let text_width = galley.size().x;
    painter.galley(text_pos, galley, text_color);

    if checkmark {
        let center = Pos2::new(
            left + text_width + CHECKMARK_MARGIN_LEFT + CHECKMARK_SIZE / 2.0,
            rect.center().y,
        );
        painter.circle_filled(center, CHECKMARK_SIZE / 2.0, CHECKMARK_FILL.gamma_multiply(opacity));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            CHECKMARK_GLYPH,
            FontId::proportional(CHECKMARK_FONT_SIZE),
            text_color,
        );
    }

    ButtonResponse {
        clicked: enabled && response.clicked(),
        animating,
    }
}

/// Connect button for one platform. Connected buttons are dimmed and inert.
pub fn connect_button(
    ui: &egui::Ui,
    rect: Rect,
    platform: Platform,
    is_connected: bool,
) -> ButtonResponse {
    let opacity = if is_connected { CONNECTED_OPACITY } else { 1.0 };
    surface_button(
        ui,
        ui.id().with(("connect", platform)),
        rect,
        connect_label(platform, is_connected),
        platform.accent(),
        opacity,
        !is_connected,
        is_connected,
    )
}

pub fn continue_button(ui: &egui::Ui, rect: Rect, enabled: bool) -> ButtonResponse {
    let opacity = if enabled { 1.0 } else { DISABLED_OPACITY };
    surface_button(
        ui,
        ui.id().with("continue"),
        rect,
        "Continue".to_string(),
        CONTINUE_FILL,
        opacity,
        enabled,
        false,
    )
}
