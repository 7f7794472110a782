//! Small widgets shared by the history panel header and toolbar

use crate::theme;
use eframe::egui;

/// Checkbox painted in the app palette with its label in the same hit area.
/// Flips `value` and returns true when clicked.
pub fn toggle(ui: &mut egui::Ui, value: &mut bool, label: &str) -> bool {
    let font = egui::FontId::proportional(theme::FONT_LABEL);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font, theme::TEXT_SECONDARY);
    let box_size = theme::CHECKBOX_SIZE;
    let size = egui::vec2(
        box_size + theme::SPACING_SM * 1.5 + galley.size().x,
        box_size.max(galley.size().y),
    );
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if response.clicked() {
        *value = !*value;
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let check_rect = egui::Rect::from_min_size(
            rect.left_center() - egui::vec2(0.0, box_size / 2.0),
            egui::vec2(box_size, box_size),
        );
        let radius = egui::CornerRadius::same(3);

        if *value {
            painter.rect_filled(check_rect, radius, theme::ACCENT);
            painter.text(
                check_rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::CHECK,
                egui::FontId::proportional(box_size * 0.7),
                theme::ON_ACCENT,
            );
        } else {
            let stroke_color = if response.hovered() {
                theme::TEXT_MUTED
            } else {
                theme::BORDER_STRONG
            };
            painter.rect_stroke(
                check_rect,
                radius,
                egui::Stroke::new(1.5, stroke_color),
                egui::StrokeKind::Inside,
            );
        }

        let text_pos = egui::pos2(
            check_rect.right() + theme::SPACING_SM * 1.5,
            rect.center().y - galley.size().y / 2.0,
        );
        painter.galley(text_pos, galley, theme::TEXT_SECONDARY);
    }

    response.clicked()
}
