//! Colors, sizes and widget styling for the editor window
//!
//! History rows get their colors from [`row_style`] so every view that lists
//! operations dims redo entries the same way.

use crate::types::ItemState;
use eframe::egui::{self, Color32, CornerRadius, Stroke};

// Palette (zinc greys with a teal accent)
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b);
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a);
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf);
pub const ON_ACCENT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e);
pub const WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24);

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a);

pub const BORDER: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a);
pub const BORDER_STRONG: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46);

const BUTTON_FILL: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46);
const BUTTON_FILL_HOVER: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b);
const BUTTON_FILL_PRESSED: Color32 = Color32::from_rgb(0x2e, 0x2e, 0x33);

/// Background behind the row the cursor points at
const ROW_CURSOR_FILL: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19);

// Type scale
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;

// Layout
pub const TOOLBAR_WIDTH: f32 = 220.0;
pub const TOP_BAR_HEIGHT: f32 = 44.0;
pub const ROW_HEIGHT: f32 = 32.0;
pub const MENU_ROW_HEIGHT: f32 = 24.0;
pub const CHECKBOX_SIZE: f32 = 16.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;

pub const RADIUS: u8 = 4;
pub const RADIUS_LARGE: u8 = 8;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

/// Colors for one history row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub text: Color32,
    pub icon: Color32,
    pub fill: Color32,
}

pub fn row_style(state: ItemState) -> RowStyle {
    match state {
        ItemState::Selected => RowStyle {
            text: TEXT_PRIMARY,
            icon: ACCENT,
            fill: ROW_CURSOR_FILL,
        },
        ItemState::Plain => RowStyle {
            text: TEXT_SECONDARY,
            icon: TEXT_MUTED,
            fill: Color32::TRANSPARENT,
        },
        ItemState::Disabled => RowStyle {
            text: TEXT_DIM,
            icon: TEXT_DIM,
            fill: Color32::TRANSPARENT,
        },
    }
}

/// Install the dark palette on the whole context
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_BASE;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.window_stroke = Stroke::new(1.0, BORDER_STRONG);
    visuals.window_corner_radius = CornerRadius::same(RADIUS_LARGE);
    visuals.menu_corner_radius = CornerRadius::same(RADIUS_LARGE);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    let widgets = &mut visuals.widgets;
    style_widget(&mut widgets.noninteractive, BG_ELEVATED, TEXT_PRIMARY);
    style_widget(&mut widgets.inactive, BUTTON_FILL, TEXT_SECONDARY);
    style_widget(&mut widgets.hovered, BUTTON_FILL_HOVER, TEXT_PRIMARY);
    style_widget(&mut widgets.active, BUTTON_FILL_PRESSED, TEXT_PRIMARY);
    style_widget(&mut widgets.open, BG_SURFACE, TEXT_PRIMARY);
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);

    ctx.set_visuals(visuals);
    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
    });
}

fn style_widget(widget: &mut egui::style::WidgetVisuals, fill: Color32, text: Color32) {
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::NONE;
    widget.fg_stroke = Stroke::new(1.0, text);
    widget.corner_radius = CornerRadius::same(RADIUS);
    widget.expansion = 0.0;
}

/// Side panels and the top bar
pub fn panel_frame(fill: Color32, margin: egui::Margin) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, BORDER))
        .inner_margin(margin)
}

/// Summary card in the central view
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(CornerRadius::same(RADIUS_LARGE))
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn toast_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(Stroke::new(1.0, WARNING.gamma_multiply(0.5)))
        .corner_radius(CornerRadius::same(RADIUS_LARGE))
        .inner_margin(egui::Margin::symmetric(SPACING_LG as i8, SPACING_MD as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(80),
        })
}

/// Toolbar and undo/redo buttons take their fill from the widget visuals
pub fn tool_button(text: String) -> egui::Button<'static> {
    egui::Button::new(text).corner_radius(CornerRadius::same(RADIUS))
}

pub fn primary_button(text: String) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(ON_ACCENT))
        .fill(ACCENT)
        .corner_radius(CornerRadius::same(RADIUS))
}

/// Context menu row: accent icon, then the label. Returns true if clicked.
pub fn menu_row(ui: &mut egui::Ui, icon: &str, label: &str) -> bool {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, MENU_ROW_HEIGHT), egui::Sense::click());
    let enabled = ui.is_enabled();

    if enabled && response.hovered() {
        ui.painter()
            .rect_filled(rect, CornerRadius::same(RADIUS), BG_SURFACE);
    }

    let (icon_color, text_color) = if enabled {
        (ACCENT, TEXT_SECONDARY)
    } else {
        (TEXT_DIM, TEXT_DIM)
    };
    let font = egui::FontId::proportional(FONT_LABEL);
    let painter = ui.painter();
    painter.text(
        rect.left_center() + egui::vec2(SPACING_MD, 0.0),
        egui::Align2::LEFT_CENTER,
        icon,
        font.clone(),
        icon_color,
    );
    painter.text(
        rect.left_center() + egui::vec2(SPACING_MD + MENU_ICON_COLUMN, 0.0),
        egui::Align2::LEFT_CENTER,
        label,
        font,
        text_color,
    );

    enabled && response.clicked()
}

const MENU_ICON_COLUMN: f32 = 22.0;

/// Size a context menu so its widest label fits next to the icon column
pub fn fit_menu_width(ui: &mut egui::Ui, labels: &[&str]) {
    let font = egui::FontId::proportional(FONT_LABEL);
    let widest = labels
        .iter()
        .map(|label| {
            ui.painter()
                .layout_no_wrap(label.to_string(), font.clone(), TEXT_SECONDARY)
                .size()
                .x
        })
        .fold(0.0_f32, f32::max);
    let width = menu_width(widest);
    ui.set_min_width(width);
    ui.set_max_width(width);
}

fn menu_width(widest_label: f32) -> f32 {
    SPACING_MD * 2.0 + MENU_ICON_COLUMN + widest_label + SPACING_XL
}
