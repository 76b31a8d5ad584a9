//! Selection tracking for the track editor.
//!
//! The selection is a set of piece ids. It never owns pieces; ids whose
//! piece has been removed are dropped by [`SelectionManager::retain_existing`].

use std::collections::HashSet;

use crate::model::{Piece, PieceId, Point};
use crate::project::Project;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: HashSet<PieceId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &PieceId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> &HashSet<PieceId> {
        &self.selected
    }

    /// Selects a piece by id.
    ///
    /// # Arguments
    /// * `id` - The piece to select
    /// * `multi` - When true the piece's membership is toggled and the rest
    ///   of the selection is kept; otherwise it becomes the only selected piece
    pub fn select(&mut self, id: PieceId, multi: bool) {
        if multi {
            if !self.selected.remove(&id) {
                self.selected.insert(id);
            }
        } else {
            self.selected.clear();
            self.selected.insert(id);
        }
    }

    /// Replaces the selection with `ids`.
    pub fn replace<I: IntoIterator<Item = PieceId>>(&mut self, ids: I) {
        self.selected = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn select_all(&mut self, project: &Project) {
        self.replace(project.pieces.iter().map(|p| p.id.clone()));
    }

    /// Selects pieces whose start connector lies inside the rectangle spanned
    /// by `a` and `b` (any two opposite corners).
    ///
    /// # Arguments
    /// * `additive` - Add to the existing selection instead of replacing it
    ///
    /// # Returns
    /// The number of pieces inside the rectangle
    pub fn select_in_rect(&mut self, project: &Project, a: Point, b: Point, additive: bool) -> usize {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

        let hits: Vec<PieceId> = project
            .pieces
            .iter()
            .filter(|p| {
                let s = p.start_point();
                s.x >= min_x && s.x <= max_x && s.y >= min_y && s.y <= max_y
            })
            .map(|p| p.id.clone())
            .collect();

        let count = hits.len();
        if !additive {
            self.selected.clear();
        }
        self.selected.extend(hits);
        count
    }

    /// Drops ids that no longer name a piece in `project`.
    pub fn retain_existing(&mut self, project: &Project) {
        self.selected.retain(|id| project.contains(id));
    }

    /// Selected pieces in project (drawing) order.
    pub fn selected_pieces<'a>(&self, project: &'a Project) -> Vec<&'a Piece> {
        project
            .pieces
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .collect()
    }
}
