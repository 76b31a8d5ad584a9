//! Piece creation, deletion, property edits and the clipboard.

use super::DesignerState;
use crate::catalog;
use crate::error::{DesignerError, DesignerResult};
use crate::interaction::DragState;
use crate::model::{Piece, PieceId, PieceKind, Point};
use crate::project::Boundary;
use crate::quick_text;
use trackkit_core::constants;
use trackkit_core::LengthUnit;

/// Partial edit of a piece's placement
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PieceUpdate {
    pub position: Option<Point>,
    pub rotation_deg: Option<f64>,
}

impl DesignerState {
    /// Appends a piece and records history.
    pub fn add_piece(&mut self, piece: Piece) -> PieceId {
        let id = piece.id.clone();
        self.project.pieces.push(piece);
        self.commit("Add piece");
        id
    }

    /// Adds a catalogue piece at the toolbox drop position.
    pub fn add_from_catalog(&mut self, catalog_id: &str) -> DesignerResult<PieceId> {
        let definition =
            catalog::find(catalog_id).ok_or_else(|| DesignerError::UnknownCatalogPiece {
                id: catalog_id.to_string(),
            })?;
        let (x, y) = constants::TOOLBOX_DROP_CM;
        Ok(self.add_piece(definition.instantiate(Point::new(x, y))))
    }

    /// Parses quick text (`L100`, `R50-90`) and adds the piece.
    ///
    /// Malformed input leaves the project untouched.
    pub fn add_quick_text(&mut self, input: &str) -> DesignerResult<PieceId> {
        let kind = quick_text::parse_piece(input)?;
        let (x, y) = match kind {
            PieceKind::Straight { .. } => constants::QUICK_STRAIGHT_CM,
            PieceKind::Curve { .. } => constants::QUICK_CURVE_CM,
        };
        Ok(self.add_piece(Piece::new(kind, Point::new(x, y), 0.0)))
    }

    /// Removes the named pieces. Unknown ids are skipped.
    ///
    /// Clears the selection and records history when anything was removed.
    pub fn delete_pieces(&mut self, ids: &[PieceId]) -> usize {
        for id in ids.iter().filter(|id| !self.project.contains(id)) {
            tracing::warn!("Skipping delete of unknown piece {}", id);
        }

        let removed = self.project.remove_pieces(ids);
        if removed > 0 {
            if self.drag.piece().is_some_and(|id| ids.contains(id)) {
                self.drag = DragState::Idle;
            }
            self.selection.clear();
            self.commit("Delete pieces");
        }
        removed
    }

    /// Removes every selected piece.
    pub fn delete_selected(&mut self) -> usize {
        let ids: Vec<PieceId> = self.selection.ids().iter().cloned().collect();
        self.delete_pieces(&ids)
    }

    /// Updates a piece's position and/or rotation and records history.
    ///
    /// Returns false for an unknown id.
    pub fn update_piece(&mut self, id: &PieceId, update: PieceUpdate) -> bool {
        let Some(piece) = self.project.piece_mut(id) else {
            tracing::warn!("Skipping update of unknown piece {}", id);
            return false;
        };
        if let Some(position) = update.position {
            piece.position = position;
        }
        if let Some(rotation) = update.rotation_deg {
            piece.rotation_deg = 0.0;
            piece.rotate_by(rotation);
        }
        self.commit("Update piece");
        true
    }

    /// Copies the selected pieces, in drawing order, to the clipboard.
    pub fn copy_selected(&mut self) -> usize {
        self.clipboard = self
            .selection
            .selected_pieces(&self.project)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!("Copied {} pieces", self.clipboard.len());
        self.clipboard.len()
    }

    /// Pastes the clipboard at the configured offset with fresh ids.
    ///
    /// The pasted pieces become the selection.
    pub fn paste(&mut self) -> Vec<PieceId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }

        let (dx, dy) = self.config.interaction.paste_offset_cm;
        let pasted: Vec<Piece> = self
            .clipboard
            .iter()
            .map(|p| {
                Piece::new(
                    p.kind,
                    Point::new(p.position.x + dx, p.position.y + dy),
                    p.rotation_deg,
                )
            })
            .collect();
        let ids: Vec<PieceId> = pasted.iter().map(|p| p.id.clone()).collect();

        self.project.pieces.extend(pasted);
        self.selection.replace(ids.iter().cloned());
        self.commit("Paste pieces");
        ids
    }

    /// Replaces (or removes) the field boundary and records history.
    pub fn set_boundary(&mut self, boundary: Option<Boundary>) {
        self.project.boundary = boundary;
        self.commit("Set boundary");
    }

    /// Appends a boundary vertex given in centimetres.
    ///
    /// Creates an open centimetre boundary if there is none.
    pub fn add_boundary_point(&mut self, point: Point) {
        let boundary = self
            .project
            .boundary
            .get_or_insert_with(|| Boundary::new(LengthUnit::Cm));
        let unit = boundary.unit;
        boundary.push_point(unit.from_cm(point.x), unit.from_cm(point.y));
        self.commit("Add boundary point");
    }

    /// Parses `x, y` and appends it as a boundary vertex.
    pub fn add_boundary_point_text(&mut self, input: &str) -> DesignerResult<()> {
        let point = quick_text::parse_point(input)?;
        self.add_boundary_point(point);
        Ok(())
    }
}
