//! The open image: editor session and history panel kept in step
//!
//! Every edit goes to the session first, then the panel mirrors it, so the
//! panel cursor always sits on the last applied operation.

use crate::editor::{self, EditorSession, Operation, SessionActions, SharedSession};
use crate::error::{HistoryError, Result};
use crate::history::icons::IconResolver;
use crate::history::HistoryPanel;
use crate::locale::Locale;
use crate::types::Jump;
use std::sync::MutexGuard;
use tracing::{debug, info, warn};

pub struct Document {
    history: HistoryPanel,
    session: SharedSession,
    images_loaded: u32,
    last_image_name: Option<String>,
}

impl Document {
    /// `last_image_name` is the name restored from settings; new image names
    /// continue counting after it.
    pub fn new(locale: Locale, icons: IconResolver, last_image_name: Option<String>) -> Self {
        let session = SharedSession::default();
        let mut history = HistoryPanel::new(locale, icons);
        history.add_event(SessionActions {
            session: session.clone(),
        });

        Self {
            history,
            session,
            images_loaded: last_image_name.as_deref().and_then(image_number).unwrap_or(0),
            last_image_name,
        }
    }

    pub fn history(&self) -> &HistoryPanel {
        &self.history
    }

    pub fn session(&self) -> MutexGuard<'_, EditorSession> {
        editor::lock(&self.session)
    }

    pub fn last_image_name(&self) -> Option<&str> {
        self.last_image_name.as_deref()
    }

    pub fn next_image_name(&mut self) -> String {
        self.images_loaded += 1;
        format!("image-{}.png", self.images_loaded)
    }

    pub fn has_image(&self) -> bool {
        self.session().image_name().is_some()
    }

    /// Load a new image: the history restarts with a single Load entry
    pub fn load_image(&mut self, image_name: &str) {
        let op = self.session().load(image_name);
        self.history.clear();
        self.history.add(op.name, op.detail.as_deref());
        self.last_image_name = Some(image_name.to_string());
        info!(image = image_name, "Image loaded");
    }

    /// Apply an edit and record it. Fails with `NoImage` when nothing is loaded.
    pub fn apply(&mut self, name: &'static str, detail: Option<&str>) -> Result<()> {
        {
            let mut session = self.session();
            if session.image_name().is_none() {
                return Err(HistoryError::NoImage);
            }
            session.execute(Operation::new(name, detail));
        }
        self.history.add(name, detail);
        Ok(())
    }

    /// Returns false when there was nothing to undo
    pub fn undo(&mut self) -> bool {
        if !self.session().undo() {
            debug!("Nothing to undo");
            return false;
        }
        if !self.history.prev().moved() {
            warn!("Session undo had no matching history entry");
        }
        true
    }

    /// Returns false when there was nothing to redo
    pub fn redo(&mut self) -> bool {
        if !self.session().redo() {
            debug!("Nothing to redo");
            return false;
        }
        if !self.history.next().moved() {
            warn!("Session redo had no matching history entry");
        }
        true
    }

    /// Jump through the panel; the bound actions step the session
    pub fn jump_to(&mut self, index: usize) -> Result<Jump> {
        self.history.jump_to(index)
    }

    /// Drop every edit after the initial load
    pub fn reset(&mut self) {
        self.session().reset();
        self.history.init();
        info!("History reset");
    }

    /// Close the image and empty the history
    pub fn clear(&mut self) {
        self.session().close();
        self.history.clear();
        self.last_image_name = None;
        info!("History cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Tear down the panel and the session. The document stays usable but
    /// has no undo/redo binding afterwards.
    pub fn close(&mut self) {
        std::mem::take(&mut self.history).destroy();
        self.session().close();
    }
}

/// `image-7.png` -> 7
fn image_number(name: &str) -> Option<u32> {
    name.strip_prefix("image-")?.strip_suffix(".png")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::icons;

    fn document() -> Document {
        let mut doc = Document::new(Locale::default(), icons::phosphor_icon, None);
        doc.load_image("photo.png");
        doc
    }

    /// Session and panel agree on length and on where the cursor is
    fn assert_in_step(doc: &Document) {
        let session = doc.session();
        let history = doc.history();
        assert_eq!(
            session.applied().len() + session.undone().len(),
            history.len(),
            "session and panel lengths differ"
        );
        assert_eq!(
            session.applied().len(),
            history.cursor().map_or(0, |c| c + 1),
            "cursor is not on the last applied operation"
        );
        for (i, op) in session.applied().iter().chain(session.undone()).enumerate() {
            assert_eq!(history.item(i).map(|item| item.name.as_str()), Some(op.name));
        }
    }

    #[test]
    fn undo_at_load_changes_nothing() {
        let mut doc = document();
        assert!(!doc.undo());
        assert_eq!(doc.history().len(), 1);
        assert_eq!(doc.history().cursor(), Some(0));
        assert_in_step(&doc);
    }

    #[test]
    fn undo_and_redo_move_both() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.apply(icons::FLIP, Some("Flip X")).unwrap();

        assert!(doc.undo());
        assert_eq!(doc.history().cursor(), Some(1));
        assert_in_step(&doc);

        assert!(doc.redo());
        assert!(!doc.redo());
        assert_eq!(doc.history().cursor(), Some(2));
        assert_in_step(&doc);
    }

    #[test]
    fn apply_after_rewind_drops_tail_in_both() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.apply(icons::FLIP, Some("Flip X")).unwrap();
        doc.undo();
        doc.undo();
        assert_eq!(doc.session().undone().len(), 2);
        assert!(doc.history().has_disabled_items());
        assert_in_step(&doc);

        doc.apply(icons::TEXT, None).unwrap();
        assert_eq!(doc.history().len(), 2);
        assert_eq!(doc.history().cursor(), Some(1));
        assert!(doc.session().undone().is_empty());
        assert!(!doc.can_redo());
        assert_in_step(&doc);
    }

    #[test]
    fn reset_leaves_only_the_load() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.apply(icons::RESIZE, None).unwrap();
        doc.undo();

        doc.reset();
        assert_eq!(doc.history().len(), 1);
        assert_eq!(doc.session().applied().len(), 1);
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
        assert_in_step(&doc);
    }

    #[test]
    fn apply_after_clear_is_refused() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.clear();

        let err = doc.apply(icons::DRAW, Some("Free")).unwrap_err();
        assert!(matches!(err, HistoryError::NoImage));
        assert!(doc.history().is_empty());
        assert_eq!(doc.history().cursor(), None);
        assert!(doc.session().applied().is_empty());
        assert!(!doc.has_image());
        assert_eq!(doc.last_image_name(), None);
    }

    #[test]
    fn jump_keeps_session_in_step() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.apply(icons::ROTATE, Some("90")).unwrap();

        assert_eq!(doc.jump_to(0).unwrap(), Jump::Undo(2));
        assert_in_step(&doc);
        assert_eq!(doc.jump_to(2).unwrap(), Jump::Redo(2));
        assert_in_step(&doc);

        doc.apply(icons::MASK, None).unwrap();
        assert_eq!(doc.history().len(), 4);
        assert_in_step(&doc);
    }

    #[test]
    fn load_restarts_history() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.load_image("other.png");
        assert_eq!(doc.history().len(), 1);
        assert_eq!(doc.session().image_name(), Some("other.png"));
        assert_eq!(doc.last_image_name(), Some("other.png"));
        assert_in_step(&doc);
    }

    #[test]
    fn image_names_continue_after_restored_name() {
        let mut doc = Document::new(
            Locale::default(),
            icons::phosphor_icon,
            Some("image-3.png".to_string()),
        );
        assert_eq!(doc.next_image_name(), "image-4.png");

        let mut fresh = Document::new(Locale::default(), icons::phosphor_icon, None);
        assert_eq!(fresh.next_image_name(), "image-1.png");

        let mut custom = Document::new(
            Locale::default(),
            icons::phosphor_icon,
            Some("holiday.jpg".to_string()),
        );
        assert_eq!(custom.next_image_name(), "image-1.png");
    }

    #[test]
    fn close_empties_both() {
        let mut doc = document();
        doc.apply(icons::CROP, None).unwrap();
        doc.close();
        assert!(doc.history().is_empty());
        assert!(!doc.has_image());
    }
}
