//! History side panel: header, display toggles and the item rows

use super::context_menu::HistoryAction;
use super::App;
use crate::constants::HISTORY_TITLE;
use crate::history::icons::CHECK_ICON;
use crate::theme;
use crate::types::{HistoryItem, ItemState};
use crate::ui::components;
use crate::utils::format_elapsed;
use eframe::egui;

impl App {
    pub(crate) fn render_history_panel(&mut self, ctx: &egui::Context) {
        let mut pending: Option<HistoryAction> = None;

        let panel = egui::SidePanel::right("history_panel")
            .default_width(self.history_panel_width)
            .min_width(200.0)
            .max_width(480.0)
            .resizable(true)
            .show_separator_line(false)
            .frame(theme::panel_frame(theme::BG_BASE, egui::Margin::ZERO))
            .show(ctx, |ui| {
                ui.add_space(theme::SPACING_LG);
                self.render_history_header(ui);
                ui.add_space(theme::SPACING_MD);
                ui.separator();

                if self.document.history().is_empty() {
                    ui.add_space(theme::SPACING_XL);
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.locale.localize("No history"))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                } else {
                    pending = self.render_history_rows(ui);
                }
            });

        self.history_panel_width = panel.response.rect.width();

        if let Some(action) = pending {
            self.apply_history_action(action);
        }
    }

    fn render_history_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(theme::SPACING_LG);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.locale.localize(HISTORY_TITLE).to_uppercase())
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(theme::SPACING_LG);
                let position = self.document.history().cursor().map_or(0, |c| c + 1);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{} / {}", position, self.document.history().len()))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
        });

        ui.add_space(theme::SPACING_SM);
        ui.horizontal(|ui| {
            ui.add_space(theme::SPACING_LG);
            let details = self.locale.localize("Details");
            let times = self.locale.localize("Times");
            components::toggle(ui, &mut self.show_detail, &details);
            ui.add_space(theme::SPACING_MD);
            components::toggle(ui, &mut self.show_timestamp, &times);
        });
    }

    /// Returns the action picked by a click or the context menu
    fn render_history_rows(&mut self, ui: &mut egui::Ui) -> Option<HistoryAction> {
        use egui_extras::{Column, TableBuilder};

        let rows: Vec<(HistoryItem, ItemState)> = self
            .document
            .history()
            .list()
            .iter()
            .map(|(item, state)| (item.clone(), state))
            .collect();
        let scroll_target = if std::mem::take(&mut self.scroll_to_cursor) {
            self.document.history().cursor()
        } else {
            None
        };
        let now = chrono::Local::now();
        let ctx = ui.ctx().clone();
        let mut action = None;

        let mut table = TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click())
            .min_scrolled_height(0.0)
            .column(Column::exact(36.0))
            .column(Column::remainder().clip(true))
            .column(Column::exact(28.0));

        if let Some(row) = scroll_target {
            table = table.scroll_to_row(row, None);
        }

        table.body(|mut body| {
            body.ui_mut().visuals_mut().selection.bg_fill =
                theme::row_style(ItemState::Selected).fill;

            body.rows(theme::ROW_HEIGHT, rows.len(), |mut row| {
                let index = row.index();
                let (item, state) = &rows[index];
                let style = theme::row_style(*state);

                row.set_selected(*state == ItemState::Selected);

                row.col(|ui| {
                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(item.icon).size(16.0).color(style.icon),
                            )
                            .selectable(false),
                        );
                    });
                });

                row.col(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&item.label)
                                .size(theme::FONT_BODY)
                                .color(style.text),
                        )
                        .truncate()
                        .selectable(false),
                    );
                    if let Some(detail) = item.detail.as_ref().filter(|_| self.show_detail) {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("({})", detail))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    }
                });

                row.col(|ui| {
                    if *state == ItemState::Selected {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(CHECK_ICON).size(14.0).color(theme::ACCENT),
                            )
                            .selectable(false),
                        );
                    }
                });

                let mut response = row.response();
                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if self.show_timestamp {
                    response = response.on_hover_text(format!(
                        "{}  ·  {}",
                        item.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                        format_elapsed(item.recorded_at, now)
                    ));
                }

                if response.clicked_by(egui::PointerButton::Primary) {
                    action = Some(HistoryAction::Jump(index));
                }

                response.context_menu(|ui| {
                    if let Some(picked) = self.history_context_menu(ui, index) {
                        action = Some(picked);
                    }
                });
            });
        });

        action
    }
}
