//! App module - contains the main application state and logic

mod context_menu;
mod history_view;
mod toolbar;
mod views;

use crate::document::Document;
use crate::error::HistoryError;
use crate::history::icons;
use crate::locale::Locale;
use crate::settings::Settings;
use crate::theme;
use crate::types::Jump;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) document: Document,
    pub(crate) locale: Locale,
    // History panel display
    pub(crate) history_panel_width: f32,
    pub(crate) show_detail: bool,
    pub(crate) show_timestamp: bool,
    pub(crate) scroll_to_cursor: bool,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        locale: Locale,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut document = Document::new(
            locale.clone(),
            icons::phosphor_icon,
            settings.last_image_name.clone(),
        );
        let first_image = document
            .last_image_name()
            .map(str::to_string)
            .unwrap_or_else(|| document.next_image_name());
        document.load_image(&first_image);

        Self {
            document,
            locale,
            history_panel_width: settings.history_panel_width_clamped(),
            show_detail: settings.show_detail,
            show_timestamp: settings.show_timestamp,
            scroll_to_cursor: true,
            toast_message: None,
            toast_start: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            history_panel_width: self.history_panel_width,
            show_detail: self.show_detail,
            show_timestamp: self.show_timestamp,
            last_image_name: self.document.last_image_name().map(str::to_string),
        };
        settings.save(&self.data_dir);
    }

    /// Tear down the history panel before the app exits
    pub fn shutdown(&mut self) {
        self.document.close();
    }

    pub(crate) fn load_next_image(&mut self) {
        let name = self.document.next_image_name();
        self.document.load_image(&name);
        self.scroll_to_cursor = true;
    }

    /// Apply an edit operation and record it in the history
    pub(crate) fn apply(&mut self, name: &'static str, detail: Option<&str>) {
        match self.document.apply(name, detail) {
            Ok(()) => self.scroll_to_cursor = true,
            Err(HistoryError::NoImage) => {
                self.show_toast(self.locale.localize("Load an image first"));
            }
            Err(e) => {
                warn!(error = %e, "Edit failed");
                self.show_toast(e.to_string());
            }
        }
    }

    pub(crate) fn undo(&mut self) {
        if self.document.undo() {
            self.scroll_to_cursor = true;
        }
    }

    pub(crate) fn redo(&mut self) {
        if self.document.redo() {
            self.scroll_to_cursor = true;
        }
    }

    /// Click-to-jump from the history list
    pub(crate) fn jump_to(&mut self, index: usize) {
        match self.document.jump_to(index) {
            Ok(Jump::Stay) => {}
            Ok(jump) => {
                let target = self
                    .document
                    .history()
                    .item(index)
                    .map(|item| item.display_text())
                    .unwrap_or_default();
                debug!(index, ?jump, target = %target, "Jumped in history");
            }
            Err(e) => {
                warn!(error = %e, index, "History jump failed");
                self.show_toast(e.to_string());
            }
        }
    }

    pub(crate) fn reset_history(&mut self) {
        self.document.reset();
        self.scroll_to_cursor = true;
    }

    pub(crate) fn clear_history(&mut self) {
        self.document.clear();
    }

    pub(crate) fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }
}
