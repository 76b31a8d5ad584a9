//! Bill of materials.
//!
//! Pieces are grouped by their canonical key (`L100`, `R50-90`, ...).
//! Straights are listed before curves; straights by length, curves by radius
//! then angle.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{Piece, PieceKind};
use crate::project::Project;
use trackkit_core::units::format_meters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BomCategory {
    Straight,
    Curve,
}

/// One BOM line
#[derive(Debug, Clone, PartialEq)]
pub struct BomEntry {
    pub key: String,
    pub category: BomCategory,
    /// Parameters of the first piece seen with this key
    pub kind: PieceKind,
    pub count: usize,
    /// Centerline length of one piece
    pub unit_length_cm: f64,
}

impl BomEntry {
    pub fn total_length_cm(&self) -> f64 {
        self.unit_length_cm * self.count as f64
    }

    fn sort_params(&self) -> (f64, f64) {
        match self.kind {
            PieceKind::Straight { length_cm } => (length_cm, 0.0),
            PieceKind::Curve {
                radius_cm,
                angle_deg,
            } => (radius_cm, angle_deg),
        }
    }
}

/// Aggregated bill of materials for a project
#[derive(Debug, Clone, PartialEq)]
pub struct BomSummary {
    pub entries: Vec<BomEntry>,
    pub total_pieces: usize,
    pub total_length_cm: f64,
    /// Boundary perimeter, when the project has a boundary
    pub boundary_length_cm: Option<f64>,
}

impl BomSummary {
    /// Total track length in metres, two decimals.
    pub fn total_length_m(&self) -> String {
        format_meters(self.total_length_cm)
    }

    pub fn entry(&self, key: &str) -> Option<&BomEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Groups `pieces` by canonical key.
pub fn aggregate_pieces(pieces: &[Piece]) -> Vec<BomEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<BomEntry> = Vec::new();

    for piece in pieces {
        let key = piece.canonical_key();
        match index.get(&key) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(BomEntry {
                    key,
                    category: if piece.kind.is_straight() {
                        BomCategory::Straight
                    } else {
                        BomCategory::Curve
                    },
                    kind: piece.kind,
                    count: 1,
                    unit_length_cm: piece.length_cm(),
                });
            }
        }
    }

    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &BomEntry, b: &BomEntry) -> Ordering {
    let (a_primary, a_secondary) = a.sort_params();
    let (b_primary, b_secondary) = b.sort_params();
    a.category
        .cmp(&b.category)
        .then_with(|| a_primary.total_cmp(&b_primary))
        .then_with(|| a_secondary.total_cmp(&b_secondary))
        .then_with(|| a.key.cmp(&b.key))
}

/// Bill of materials for a whole project.
pub fn summarize(project: &Project) -> BomSummary {
    let entries = aggregate_pieces(&project.pieces);
    let total_pieces = entries.iter().map(|e| e.count).sum();
    let total_length_cm = project.pieces.iter().map(Piece::length_cm).sum();

    BomSummary {
        entries,
        total_pieces,
        total_length_cm,
        boundary_length_cm: project.boundary.as_ref().map(|b| b.perimeter_cm()),
    }
}
