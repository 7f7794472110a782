//! Stub editing session driven by the history panel
//!
//! Only operation records are kept; nothing is rendered or applied to pixels.

use crate::history::icons;
use crate::history::HistoryActions;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub detail: Option<String>,
}

impl Operation {
    pub fn new(name: &'static str, detail: Option<&str>) -> Self {
        Self {
            name,
            detail: detail.map(str::to_string),
        }
    }
}

/// Operations offered by the toolbar: (history name, detail)
pub const TOOLBAR_OPERATIONS: &[(&str, Option<&str>)] = &[
    (icons::CROP, None),
    (icons::FLIP, Some("Flip X")),
    (icons::FLIP, Some("Flip Y")),
    (icons::ROTATE, Some("90")),
    (icons::RESIZE, None),
    (icons::DRAW, Some("Free")),
    (icons::SHAPE, Some("Rect")),
    (icons::SHAPE, Some("Circle")),
    (icons::TEXT, None),
    (icons::ICON, Some("Arrow")),
    (icons::MASK, None),
    (icons::FILTER, Some("Grayscale")),
    (icons::FILTER, Some("Sepia")),
    (icons::DELETE, None),
];

#[derive(Debug, Default)]
pub struct EditorSession {
    ops: Vec<Operation>,
    applied: usize,
    image_name: Option<String>,
}

impl EditorSession {
    /// Start over with a freshly loaded image
    pub fn load(&mut self, image_name: &str) -> Operation {
        let op = Operation::new(icons::LOAD, Some(image_name));
        self.ops.clear();
        self.ops.push(op.clone());
        self.applied = 1;
        self.image_name = Some(image_name.to_string());
        debug!(image = image_name, "Session loaded");
        op
    }

    /// Apply an operation, discarding anything that was undone
    pub fn execute(&mut self, op: Operation) {
        self.ops.truncate(self.applied);
        self.ops.push(op);
        self.applied = self.ops.len();
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.applied -= 1;
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.applied += 1;
        true
    }

    /// Drop everything after the initial load
    pub fn reset(&mut self) {
        self.ops.truncate(1);
        self.applied = self.ops.len();
    }

    pub fn close(&mut self) {
        self.ops.clear();
        self.applied = 0;
        self.image_name = None;
    }

    /// The load operation is never undone
    pub fn can_undo(&self) -> bool {
        self.applied > 1
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.ops.len()
    }

    pub fn applied(&self) -> &[Operation] {
        &self.ops[..self.applied]
    }

    pub fn undone(&self) -> &[Operation] {
        &self.ops[self.applied..]
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image_name.as_deref()
    }

    /// Owned copy for drawing without holding the session lock
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            image_name: self.image_name.clone(),
            applied: self.applied().to_vec(),
            undone: self.undone().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub image_name: Option<String>,
    pub applied: Vec<Operation>,
    pub undone: Vec<Operation>,
}

pub type SharedSession = Arc<Mutex<EditorSession>>;

pub fn lock(session: &SharedSession) -> MutexGuard<'_, EditorSession> {
    session
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Binds the panel's undo/redo to a shared session
pub struct SessionActions {
    pub session: SharedSession,
}

impl HistoryActions for SessionActions {
    fn undo(&mut self) {
        if !lock(&self.session).undo() {
            warn!("Session refused undo requested by the history panel");
        }
    }

    fn redo(&mut self) {
        if !lock(&self.session).redo() {
            warn!("Session refused redo requested by the history panel");
        }
    }
}
