//! Common types and data structures

use chrono::{DateTime, Local};

/// Visual state of a single row in the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Plain,
    /// The row under the cursor
    Selected,
    /// A "future" row after the cursor (redoable)
    Disabled,
}

/// A rendered history row
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    /// Untranslated history name, used for icon lookup
    pub name: String,
    pub label: String,
    pub detail: Option<String>,
    pub icon: &'static str,
    pub recorded_at: DateTime<Local>,
}

impl HistoryItem {
    /// Label with the detail in parentheses, e.g. "Flip (Flip X)"
    pub fn display_text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} ({})", self.label, detail),
            None => self.label.clone(),
        }
    }
}

/// Outcome of a bounds-checked cursor step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Moved(usize),
    /// Already at the first/last item (or empty); nothing changed
    AtBoundary,
}

impl CursorMove {
    pub fn moved(self) -> bool {
        matches!(self, CursorMove::Moved(_))
    }
}

/// Outcome of a click-to-jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    /// Target was already the cursor
    Stay,
    Undo(usize),
    Redo(usize),
}
