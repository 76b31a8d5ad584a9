//! Built-in piece catalogue.

use crate::model::{Piece, PieceKind, Point};

/// A catalogue entry: a named piece shape that can be placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: PieceKind,
}

impl PieceDefinition {
    /// Creates a new piece of this shape at `position`, rotation 0.
    pub fn instantiate(&self, position: Point) -> Piece {
        Piece::new(self.kind, position, 0.0)
    }
}

const fn straight(id: &'static str, name: &'static str, length_cm: f64) -> PieceDefinition {
    PieceDefinition {
        id,
        name,
        kind: PieceKind::Straight { length_cm },
    }
}

const fn curve(
    id: &'static str,
    name: &'static str,
    radius_cm: f64,
    angle_deg: f64,
) -> PieceDefinition {
    PieceDefinition {
        id,
        name,
        kind: PieceKind::Curve {
            radius_cm,
            angle_deg,
        },
    }
}

pub const STRAIGHT_PIECES: &[PieceDefinition] = &[
    straight("L25", "Straight 25cm", 25.0),
    straight("L37.5", "Straight 37.5cm", 37.5),
    straight("L50", "Straight 50cm", 50.0),
    straight("L75", "Straight 75cm", 75.0),
    straight("L100", "Straight 100cm", 100.0),
];

pub const CURVE_PIECES: &[PieceDefinition] = &[
    curve("R50-30", "Curve R50 30°", 50.0, 30.0),
    curve("R50-45", "Curve R50 45°", 50.0, 45.0),
    curve("R50-60", "Curve R50 60°", 50.0, 60.0),
    curve("R50-90", "Curve R50 90°", 50.0, 90.0),
    curve("R60-30", "Curve R60 30°", 60.0, 30.0),
    curve("R60-45", "Curve R60 45°", 60.0, 45.0),
    curve("R60-60", "Curve R60 60°", 60.0, 60.0),
    curve("R60-90", "Curve R60 90°", 60.0, 90.0),
    curve("R70-45", "Curve R70 45°", 70.0, 45.0),
];

/// Every catalogue entry, straights first.
pub fn all() -> impl Iterator<Item = &'static PieceDefinition> {
    STRAIGHT_PIECES.iter().chain(CURVE_PIECES.iter())
}

/// Looks up an entry by id, ignoring ASCII case.
pub fn find(id: &str) -> Option<&'static PieceDefinition> {
    let id = id.trim();
    all().find(|def| def.id.eq_ignore_ascii_case(id))
}
