//! Group transforms over the selected pieces.

use std::collections::HashSet;

use crate::model::{Piece, PieceId, Point};
use crate::snap::{SnapEngine, SnapResult};

/// Mean of the start positions, `None` for an empty iterator.
pub fn centroid<'a, I>(pieces: I) -> Option<Point>
where
    I: IntoIterator<Item = &'a Piece>,
{
    let (sum, count) = pieces
        .into_iter()
        .fold((Point::default(), 0usize), |(sum, n), p| {
            (sum + p.position, n + 1)
        });
    (count > 0).then(|| sum * (1.0 / count as f64))
}

/// Rotates the pieces named in `ids` by `delta_deg`.
///
/// A lone piece spins in place about its start connector. Two or more pieces
/// also orbit their centroid, so the group turns rigidly.
///
/// # Returns
/// The number of pieces rotated
pub fn rotate_pieces(pieces: &mut [Piece], ids: &HashSet<PieceId>, delta_deg: f64) -> usize {
    if !delta_deg.is_finite() {
        return 0;
    }
    let count = pieces.iter().filter(|p| ids.contains(&p.id)).count();
    match count {
        0 => {}
        1 => {
            for piece in pieces.iter_mut().filter(|p| ids.contains(&p.id)) {
                piece.rotate_by(delta_deg);
            }
        }
        _ => {
            let Some(center) = centroid(pieces.iter().filter(|p| ids.contains(&p.id))) else {
                return 0;
            };
            for piece in pieces.iter_mut().filter(|p| ids.contains(&p.id)) {
                piece.position = piece.position.rotated_about(&center, delta_deg);
                piece.rotate_by(delta_deg);
            }
        }
    }
    count
}

/// Translates the pieces named in `ids`.
pub fn translate_pieces(pieces: &mut [Piece], ids: &HashSet<PieceId>, dx: f64, dy: f64) -> usize {
    let mut moved = 0;
    for piece in pieces.iter_mut().filter(|p| ids.contains(&p.id)) {
        piece.translate(dx, dy);
        moved += 1;
    }
    moved
}

/// Moves `dragged` toward `candidate` with snapping.
///
/// When `dragged` belongs to a multi-piece selection, every selected piece
/// receives the same delta as the dragged one. Returns `None` if `dragged`
/// is not in `pieces`.
pub fn drag_to(
    pieces: &mut [Piece],
    selection: &HashSet<PieceId>,
    dragged: &PieceId,
    candidate: Point,
    snap: &SnapEngine,
) -> Option<SnapResult> {
    let piece = pieces.iter().find(|p| &p.id == dragged)?;
    let result = snap.find_snap(piece, candidate, pieces);
    let delta = result.position - piece.position;

    if selection.len() > 1 && selection.contains(dragged) {
        translate_pieces(pieces, selection, delta.x, delta.y);
    } else if let Some(piece) = pieces.iter_mut().find(|p| &p.id == dragged) {
        piece.position = result.position;
    }
    Some(result)
}
