//! Context menu for history rows

use super::App;
use crate::theme;
use crate::types::ItemState;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryAction {
    Jump(usize),
    Reset,
    Clear,
}

impl App {
    pub(crate) fn history_context_menu(
        &self,
        ui: &mut egui::Ui,
        index: usize,
    ) -> Option<HistoryAction> {
        let mut action = None;
        ui.spacing_mut().item_spacing.y = 2.0;

        let jump_label = self.locale.localize("Jump here");
        let reset_label = self.locale.localize("Reset history");
        let clear_label = self.locale.localize("Clear history");
        theme::fit_menu_width(
            ui,
            &[jump_label.as_str(), reset_label.as_str(), clear_label.as_str()],
        );

        let is_cursor = self.document.history().state_of(index) == Some(ItemState::Selected);
        ui.add_enabled_ui(!is_cursor, |ui| {
            if theme::menu_row(ui, egui_phosphor::regular::ARROW_BEND_UP_LEFT, &jump_label) {
                action = Some(HistoryAction::Jump(index));
                ui.close_menu();
            }
        });
        ui.separator();
        if theme::menu_row(ui, egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE, &reset_label) {
            action = Some(HistoryAction::Reset);
            ui.close_menu();
        }
        if theme::menu_row(ui, egui_phosphor::regular::TRASH, &clear_label) {
            action = Some(HistoryAction::Clear);
            ui.close_menu();
        }

        action
    }

    pub(crate) fn apply_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Jump(index) => self.jump_to(index),
            HistoryAction::Reset => self.reset_history(),
            HistoryAction::Clear => self.clear_history(),
        }
    }
}
