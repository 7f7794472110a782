//! List-rendering interface the history panel is composed over

use crate::types::{HistoryItem, ItemState};

/// Storage and per-row styling for a rendered list.
///
/// Index arguments are forgiving: ranges are clamped to the list and
/// out-of-range state changes are ignored, so callers only have to keep
/// their own cursor consistent.
pub trait ListView {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_item(&mut self, item: HistoryItem);

    /// Delete rows in `start..end`
    fn delete_items(&mut self, start: usize, end: usize);

    fn set_state(&mut self, index: usize, state: ItemState);

    fn item(&self, index: usize) -> Option<&HistoryItem>;

    fn state(&self, index: usize) -> Option<ItemState>;
}

#[derive(Debug, Clone)]
struct Row {
    item: HistoryItem,
    state: ItemState,
}

/// `Vec`-backed list rendered by the egui history view
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    rows: Vec<Row>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HistoryItem, ItemState)> {
        self.rows.iter().map(|r| (&r.item, r.state))
    }
}

impl ListView for ItemList {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn push_item(&mut self, item: HistoryItem) {
        self.rows.push(Row {
            item,
            state: ItemState::Plain,
        });
    }

    fn delete_items(&mut self, start: usize, end: usize) {
        let end = end.min(self.rows.len());
        if start >= end {
            return;
        }
        self.rows.drain(start..end);
    }

    fn set_state(&mut self, index: usize, state: ItemState) {
        if let Some(row) = self.rows.get_mut(index) {
            row.state = state;
        }
    }

    fn item(&self, index: usize) -> Option<&HistoryItem> {
        self.rows.get(index).map(|r| &r.item)
    }

    fn state(&self, index: usize) -> Option<ItemState> {
        self.rows.get(index).map(|r| r.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn item(name: &str) -> HistoryItem {
        HistoryItem {
            name: name.to_string(),
            label: name.to_string(),
            detail: None,
            icon: "",
            recorded_at: Local::now(),
        }
    }

    fn names(list: &ItemList) -> Vec<String> {
        list.iter().map(|(i, _)| i.name.clone()).collect()
    }

    #[test]
    fn delete_clamps_to_list() {
        let mut list = ItemList::new();
        for n in ["Load", "Crop", "Flip"] {
            list.push_item(item(n));
        }

        list.delete_items(1, 99);
        assert_eq!(names(&list), vec!["Load"]);

        // empty and inverted ranges do nothing
        list.delete_items(1, 1);
        list.delete_items(3, 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn set_state_ignores_missing_rows() {
        let mut list = ItemList::new();
        list.push_item(item("Load"));

        list.set_state(0, ItemState::Selected);
        list.set_state(5, ItemState::Disabled);

        assert_eq!(list.state(0), Some(ItemState::Selected));
        assert_eq!(list.state(5), None);
    }

    #[test]
    fn pushed_rows_start_plain() {
        let mut list = ItemList::new();
        list.push_item(item("Load"));
        assert_eq!(list.state(0), Some(ItemState::Plain));
        assert_eq!(list.item(0).map(|i| i.name.as_str()), Some("Load"));
    }
}
