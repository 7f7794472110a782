//! Top bar (undo/redo) and the left operations toolbar

use super::App;
use crate::constants::APP_NAME;
use crate::editor::TOOLBAR_OPERATIONS;
use crate::history::icons;
use crate::theme;
use eframe::egui;

impl App {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .exact_height(theme::TOP_BAR_HEIGHT)
            .frame(
                theme::panel_frame(
                    theme::BG_ELEVATED,
                    egui::Margin::symmetric(theme::SPACING_LG as i8, 0),
                ),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME)
                                .size(theme::FONT_HEADING)
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let redo_label = format!(
                            "{}  {}",
                            egui_phosphor::regular::ARROW_U_UP_RIGHT,
                            self.locale.localize("Redo")
                        );
                        let redo = ui
                            .add_enabled(self.document.can_redo(), theme::tool_button(redo_label))
                            .on_hover_text("Ctrl+Shift+Z");
                        if redo.clicked() {
                            self.redo();
                        }

                        let undo_label = format!(
                            "{}  {}",
                            egui_phosphor::regular::ARROW_U_UP_LEFT,
                            self.locale.localize("Undo")
                        );
                        let undo = ui
                            .add_enabled(self.document.can_undo(), theme::tool_button(undo_label))
                            .on_hover_text("Ctrl+Z");
                        if undo.clicked() {
                            self.undo();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("toolbar")
            .exact_width(theme::TOOLBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                theme::panel_frame(theme::BG_BASE, egui::Margin::same(theme::SPACING_LG as i8)),
            )
            .show(ctx, |ui| {
                let full_width = ui.available_width();

                let load_label = format!(
                    "{}  {}",
                    icons::phosphor_icon(icons::LOAD),
                    self.locale.localize("Load image")
                );
                if ui
                    .add_sized(
                        [full_width, theme::BUTTON_HEIGHT_LARGE],
                        theme::primary_button(load_label),
                    )
                    .clicked()
                {
                    self.load_next_image();
                }

                ui.add_space(theme::SPACING_LG);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.locale.localize("Edit").to_uppercase())
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);

                let enabled = self.document.has_image();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for &(name, detail) in TOOLBAR_OPERATIONS {
                            let text = match detail {
                                Some(d) => format!(
                                    "{}  {} ({})",
                                    icons::phosphor_icon(name),
                                    self.locale.localize(name),
                                    self.locale.localize(d)
                                ),
                                None => format!(
                                    "{}  {}",
                                    icons::phosphor_icon(name),
                                    self.locale.localize(name)
                                ),
                            };
                            let button = ui.add_enabled(
                                enabled,
                                theme::tool_button(text).min_size(egui::vec2(full_width, theme::BUTTON_HEIGHT)),
                            );
                            if button.clicked() {
                                self.apply(name, detail);
                            }
                        }
                    });
            });
    }
}
