//! Central view: summary of the current session and the toast overlay

use super::App;
use crate::history::icons;
use crate::theme;
use eframe::egui;

const TOAST_SECONDS: f32 = 2.5;

impl App {
    pub(crate) fn render_session_view(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                let summary = self.document.session().summary();

                let Some(image_name) = summary.image_name.as_deref() else {
                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.locale.localize("No image loaded"))
                                    .size(theme::FONT_HEADING)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                    return;
                };

                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(icons::phosphor_icon(icons::LOAD))
                                    .size(theme::FONT_TITLE)
                                    .color(theme::ACCENT),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(image_name)
                                    .size(theme::FONT_TITLE)
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                    });
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{} {}  ·  {} {}",
                                summary.applied.len(),
                                self.locale.localize("applied"),
                                summary.undone.len(),
                                self.locale.localize("undone"),
                            ))
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });

                ui.add_space(theme::SPACING_LG);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let applied = summary.applied.iter().map(|op| (op, true));
                        let undone = summary.undone.iter().map(|op| (op, false));
                        for (step, (op, is_applied)) in applied.chain(undone).enumerate() {
                            let color = if is_applied {
                                theme::TEXT_SECONDARY
                            } else {
                                theme::TEXT_DIM
                            };
                            let mut text = format!(
                                "{:>3}.  {}  {}",
                                step + 1,
                                icons::phosphor_icon(op.name),
                                self.locale.localize(op.name)
                            );
                            if let Some(detail) = &op.detail {
                                text.push_str(&format!(" ({})", self.locale.localize(detail)));
                            }
                            let mut rich = egui::RichText::new(text)
                                .size(theme::FONT_BODY)
                                .color(color);
                            if !is_applied {
                                rich = rich.strikethrough();
                            }
                            ui.add(egui::Label::new(rich).selectable(false));
                        }
                    });
            });
    }

    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(start) = self.toast_start else {
            return;
        };
        let elapsed = start.elapsed().as_secs_f32();
        if elapsed > TOAST_SECONDS {
            self.toast_message = None;
            self.toast_start = None;
            return;
        }
        let Some(message) = &self.toast_message else {
            return;
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -theme::SPACING_XL * 2.0))
            .interactable(false)
            .show(ctx, |ui| {
                theme::toast_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::WARNING)
                                    .color(theme::WARNING),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(message).color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                    });
                });
            });
        ctx.request_repaint();
    }
}
