//! History panel - a cursor over the list of past edit operations
//!
//! Items after the cursor are "future" entries: they stay visible but are
//! disabled until the user either redoes them or records a new operation,
//! which drops them.

pub mod icons;
pub mod list;
pub mod template;

use crate::error::{HistoryError, Result};
use crate::locale::Locale;
use crate::types::{CursorMove, HistoryItem, ItemState, Jump};
use icons::IconResolver;
use list::{ItemList, ListView};
use tracing::debug;

/// Undo/redo hooks the host binds with [`HistoryPanel::add_event`]
pub trait HistoryActions {
    fn undo(&mut self);
    fn redo(&mut self);
}

pub struct HistoryPanel<L: ListView = ItemList> {
    list: L,
    cursor: Option<usize>,
    locale: Locale,
    icons: IconResolver,
    actions: Option<Box<dyn HistoryActions>>,
}

impl Default for HistoryPanel<ItemList> {
    fn default() -> Self {
        Self::new(Locale::default(), icons::phosphor_icon)
    }
}

impl HistoryPanel<ItemList> {
    pub fn new(locale: Locale, icons: IconResolver) -> Self {
        Self::with_list(ItemList::new(), locale, icons)
    }
}

impl<L: ListView> HistoryPanel<L> {
    /// Wrap an existing list. A non-empty list starts with its last row selected.
    pub fn with_list(list: L, locale: Locale, icons: IconResolver) -> Self {
        let mut panel = Self {
            list,
            cursor: None,
            locale,
            icons,
            actions: None,
        };
        if let Some(last) = panel.list.len().checked_sub(1) {
            panel.move_to(last);
        }
        panel
    }

    /// Record a new operation. Any disabled (rewound) rows are dropped first.
    pub fn add(&mut self, name: &str, detail: Option<&str>) {
        if self.has_disabled_items() {
            let start = self.cursor.map_or(0, |c| c + 1);
            let len = self.list.len();
            self.list.delete_items(start, len);
            debug!(dropped = len - start, "Dropped redo entries");
        }

        let item = template::render_item(&self.locale, self.icons, name, detail);
        self.list.push_item(item);

        let index = self.list.len() - 1;
        self.move_to(index);
        debug!(index, history = name, detail = detail.unwrap_or(""), "History item added");
    }

    /// Collapse back to the first row and select it
    pub fn init(&mut self) {
        let len = self.list.len();
        self.list.delete_items(1, len);
        if self.list.is_empty() {
            self.cursor = None;
        } else {
            self.move_to(0);
        }
        debug!(dropped = len.saturating_sub(1), "History reset to first item");
    }

    pub fn clear(&mut self) {
        let len = self.list.len();
        self.list.delete_items(0, len);
        self.cursor = None;
        debug!(dropped = len, "History cleared");
    }

    /// Step the cursor back one row
    pub fn prev(&mut self) -> CursorMove {
        match self.cursor {
            Some(c) if c > 0 => self.move_to(c - 1),
            _ => {
                debug!("History prev at boundary");
                CursorMove::AtBoundary
            }
        }
    }

    /// Step the cursor forward one row
    pub fn next(&mut self) -> CursorMove {
        match self.cursor {
            Some(c) if c + 1 < self.list.len() => self.move_to(c + 1),
            _ => {
                debug!("History next at boundary");
                CursorMove::AtBoundary
            }
        }
    }

    /// Jump to `index`, running undo or redo once per row crossed
    pub fn jump_to(&mut self, index: usize) -> Result<Jump> {
        let len = self.list.len();
        let cursor = match self.cursor {
            Some(c) if index < len => c,
            _ => return Err(HistoryError::OutOfRange { index, len }),
        };
        if index == cursor {
            return Ok(Jump::Stay);
        }

        let actions = self.actions.as_mut().ok_or(HistoryError::ActionsUnbound)?;
        let jump = if index < cursor {
            let steps = cursor - index;
            for _ in 0..steps {
                actions.undo();
            }
            Jump::Undo(steps)
        } else {
            let steps = index - cursor;
            for _ in 0..steps {
                actions.redo();
            }
            Jump::Redo(steps)
        };

        self.move_to(index);
        debug!(from = cursor, to = index, ?jump, "History jump");
        Ok(jump)
    }

    pub fn add_event(&mut self, actions: impl HistoryActions + 'static) {
        self.actions = Some(Box::new(actions));
    }

    /// Tear the panel down, dropping its rows and bound actions
    pub fn destroy(mut self) {
        let len = self.list.len();
        self.list.delete_items(0, len);
        self.cursor = None;
        self.actions = None;
        debug!("History panel destroyed");
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn item(&self, index: usize) -> Option<&HistoryItem> {
        self.list.item(index)
    }

    pub fn state_of(&self, index: usize) -> Option<ItemState> {
        self.list.state(index)
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn has_disabled_items(&self) -> bool {
        match self.cursor {
            Some(c) => self.list.len() > c + 1,
            None => !self.list.is_empty(),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.has_disabled_items()
    }

    fn move_to(&mut self, index: usize) -> CursorMove {
        self.cursor = Some(index);
        self.select_item(index);
        CursorMove::Moved(index)
    }

    fn select_item(&mut self, index: usize) {
        for i in 0..self.list.len() {
            let state = if i > index {
                ItemState::Disabled
            } else if i == index {
                ItemState::Selected
            } else {
                ItemState::Plain
            };
            self.list.set_state(i, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Counts {
        undo: Rc<Cell<usize>>,
        redo: Rc<Cell<usize>>,
    }

    impl HistoryActions for Counts {
        fn undo(&mut self) {
            self.undo.set(self.undo.get() + 1);
        }

        fn redo(&mut self) {
            self.redo.set(self.redo.get() + 1);
        }
    }

    /// Wraps `ItemList` and records every range deletion
    #[derive(Default)]
    struct RecordingList {
        inner: ItemList,
        deletes: Vec<(usize, usize)>,
    }

    impl ListView for RecordingList {
        fn len(&self) -> usize {
            self.inner.len()
        }

        fn push_item(&mut self, item: HistoryItem) {
            self.inner.push_item(item);
        }

        fn delete_items(&mut self, start: usize, end: usize) {
            self.deletes.push((start, end));
            self.inner.delete_items(start, end);
        }

        fn set_state(&mut self, index: usize, state: ItemState) {
            self.inner.set_state(index, state);
        }

        fn item(&self, index: usize) -> Option<&HistoryItem> {
            self.inner.item(index)
        }

        fn state(&self, index: usize) -> Option<ItemState> {
            self.inner.state(index)
        }
    }

    fn panel_with(names: &[&str]) -> HistoryPanel {
        let mut panel = HistoryPanel::default();
        for name in names {
            panel.add(name, None);
        }
        panel
    }

    fn states(panel: &HistoryPanel) -> Vec<ItemState> {
        (0..panel.len()).filter_map(|i| panel.state_of(i)).collect()
    }

    fn labels(panel: &HistoryPanel) -> Vec<String> {
        panel.list().iter().map(|(item, _)| item.label.clone()).collect()
    }

    use ItemState::{Disabled, Plain, Selected};

    #[test]
    fn add_selects_newest() {
        let panel = panel_with(&["Load", "Crop", "Flip"]);
        assert_eq!(panel.cursor(), Some(2));
        assert_eq!(states(&panel), vec![Plain, Plain, Selected]);
        assert!(panel.can_undo());
        assert!(!panel.can_redo());
    }

    #[test]
    fn prev_disables_future_items() {
        let mut panel = panel_with(&["Load", "Crop", "Flip"]);

        assert_eq!(panel.prev(), CursorMove::Moved(1));
        assert_eq!(states(&panel), vec![Plain, Selected, Disabled]);

        assert_eq!(panel.prev(), CursorMove::Moved(0));
        assert_eq!(states(&panel), vec![Selected, Disabled, Disabled]);
        assert!(panel.can_redo());
    }

    #[test]
    fn prev_and_next_stop_at_bounds() {
        let mut panel = panel_with(&["Load", "Crop"]);

        assert_eq!(panel.next(), CursorMove::AtBoundary);
        assert_eq!(panel.cursor(), Some(1));

        panel.prev();
        assert_eq!(panel.prev(), CursorMove::AtBoundary);
        assert_eq!(panel.cursor(), Some(0));
        assert_eq!(states(&panel), vec![Selected, Disabled]);

        assert_eq!(panel.next(), CursorMove::Moved(1));
        assert_eq!(states(&panel), vec![Plain, Selected]);
    }

    #[test]
    fn empty_panel_never_moves() {
        let mut panel = HistoryPanel::default();
        assert_eq!(panel.prev(), CursorMove::AtBoundary);
        assert_eq!(panel.next(), CursorMove::AtBoundary);
        assert_eq!(panel.cursor(), None);
        assert!(!panel.can_undo());
        assert!(!panel.can_redo());
    }

    #[test]
    fn add_after_rewind_drops_disabled_tail() {
        let mut panel = panel_with(&["Load", "Crop", "Flip", "Rotate"]);
        panel.prev();
        panel.prev();

        panel.add("Text", Some("Hello"));

        assert_eq!(labels(&panel), vec!["Load", "Crop", "Text"]);
        assert_eq!(panel.cursor(), Some(2));
        assert_eq!(states(&panel), vec![Plain, Plain, Selected]);
        assert_eq!(panel.item(2).and_then(|i| i.detail.clone()).as_deref(), Some("Hello"));
    }

    #[test]
    fn add_deletes_exact_tail_range() {
        let mut panel = HistoryPanel::with_list(
            RecordingList::default(),
            Locale::default(),
            icons::phosphor_icon,
        );
        for name in ["Load", "Crop", "Flip"] {
            panel.add(name, None);
        }
        assert!(panel.list().deletes.is_empty());

        panel.prev();
        panel.prev();
        panel.add("Shape", None);

        assert_eq!(panel.list().deletes, vec![(1, 3)]);
        assert_eq!(panel.len(), 2);
    }

    #[test]
    fn init_keeps_only_first_item() {
        let mut panel = panel_with(&["Load", "Crop", "Flip"]);
        panel.prev();

        panel.init();

        assert_eq!(labels(&panel), vec!["Load"]);
        assert_eq!(panel.cursor(), Some(0));
        assert_eq!(states(&panel), vec![Selected]);
    }

    #[test]
    fn init_on_empty_list_stays_empty() {
        let mut panel = HistoryPanel::default();
        panel.init();
        assert!(panel.is_empty());
        assert_eq!(panel.cursor(), None);
    }

    #[test]
    fn clear_empties_list_and_cursor() {
        let mut panel = panel_with(&["Load", "Crop"]);
        panel.clear();
        assert!(panel.is_empty());
        assert_eq!(panel.cursor(), None);

        // adding after clear starts a fresh list
        panel.add("Load", None);
        assert_eq!(panel.cursor(), Some(0));
        assert_eq!(states(&panel), vec![Selected]);
    }

    #[test]
    fn exactly_one_selected_after_every_step() {
        let mut panel = panel_with(&["Load", "Crop", "Flip", "Rotate"]);
        let check = |panel: &HistoryPanel| {
            let selected = states(panel).iter().filter(|s| **s == Selected).count();
            assert_eq!(selected, 1);
            let cursor = panel.cursor().unwrap();
            for i in 0..panel.len() {
                assert_eq!(panel.state_of(i) == Some(Disabled), i > cursor);
            }
        };

        check(&panel);
        panel.prev();
        check(&panel);
        panel.prev();
        check(&panel);
        panel.next();
        check(&panel);
        panel.add("Mask", None);
        check(&panel);
        panel.init();
        check(&panel);
    }

    #[test]
    fn jump_runs_undo_then_redo() {
        let mut panel = panel_with(&["Load", "Crop", "Flip", "Rotate"]);
        let counts = Counts::default();
        panel.add_event(counts.clone());

        assert_eq!(panel.jump_to(1).unwrap(), Jump::Undo(2));
        assert_eq!(counts.undo.get(), 2);
        assert_eq!(states(&panel), vec![Plain, Selected, Disabled, Disabled]);

        assert_eq!(panel.jump_to(3).unwrap(), Jump::Redo(2));
        assert_eq!(counts.redo.get(), 2);
        assert_eq!(panel.cursor(), Some(3));

        assert_eq!(panel.jump_to(3).unwrap(), Jump::Stay);
        assert_eq!(counts.undo.get() + counts.redo.get(), 4);
    }

    #[test]
    fn jump_errors() {
        let mut panel = panel_with(&["Load", "Crop"]);

        assert!(matches!(
            panel.jump_to(5),
            Err(HistoryError::OutOfRange { index: 5, len: 2 })
        ));
        assert!(matches!(panel.jump_to(0), Err(HistoryError::ActionsUnbound)));
        // a failed jump leaves the cursor alone
        assert_eq!(panel.cursor(), Some(1));
        // staying put needs no actions
        assert_eq!(panel.jump_to(1).unwrap(), Jump::Stay);
    }

    #[test]
    fn with_list_selects_last_existing_row() {
        let mut seeded = ItemList::new();
        let locale = Locale::default();
        for name in ["Load", "Crop"] {
            seeded.push_item(template::render_item(&locale, icons::phosphor_icon, name, None));
        }

        let panel = HistoryPanel::with_list(seeded, locale, icons::phosphor_icon);

        assert_eq!(panel.cursor(), Some(1));
        assert_eq!(states(&panel), vec![Plain, Selected]);
    }

    #[test]
    fn destroy_drops_actions() {
        let mut panel = panel_with(&["Load"]);
        let counts = Counts::default();
        panel.add_event(counts.clone());
        assert_eq!(Rc::strong_count(&counts.undo), 2);

        panel.destroy();
        assert_eq!(Rc::strong_count(&counts.undo), 1);
    }
}
