//! Undo/redo.

use std::sync::Arc;

use super::DesignerState;
use crate::interaction::DragState;
use crate::project::Project;

impl DesignerState {
    /// Restores the previous snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                tracing::debug!("Undo to history entry {}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    /// Re-applies the next snapshot. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                tracing::debug!("Redo to history entry {}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn restore(&mut self, snapshot: Arc<Project>) {
        self.project = Project::clone(&snapshot);
        self.selection.clear();
        self.drag = DragState::Idle;
        self.is_modified = true;
    }
}
