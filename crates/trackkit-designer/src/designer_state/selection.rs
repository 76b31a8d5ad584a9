//! Selection operations.

use super::DesignerState;
use crate::model::{PieceId, Point};

impl DesignerState {
    /// Selects a piece; with `multi` its membership is toggled instead.
    pub fn select_piece(&mut self, id: &PieceId, multi: bool) -> bool {
        if !self.project.contains(id) {
            tracing::warn!("Cannot select unknown piece {}", id);
            return false;
        }
        self.selection.select(id.clone(), multi);
        true
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.project);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selects pieces whose start connector lies in the world rectangle `a..b`.
    pub fn select_in_rect(&mut self, a: Point, b: Point, additive: bool) -> usize {
        self.selection.select_in_rect(&self.project, a, b, additive)
    }

    /// Topmost piece under a world point.
    pub fn piece_at(&self, point: Point) -> Option<PieceId> {
        self.project.piece_at(&point).map(|p| p.id.clone())
    }
}
