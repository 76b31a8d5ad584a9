//! Project: the ordered piece list plus optional boundary and skin.

use crate::model::{Piece, PieceId, Point};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trackkit_core::constants;
use trackkit_core::LengthUnit;

/// One vertex of the field boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub idx: usize,
    pub x: f64,
    pub y: f64,
}

/// Field boundary polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub unit: LengthUnit,
    pub points: Vec<BoundaryPoint>,
    #[serde(default)]
    pub closed: bool,
}

impl Boundary {
    pub fn new(unit: LengthUnit) -> Self {
        Self {
            unit,
            points: Vec::new(),
            closed: false,
        }
    }

    /// Append a vertex in the boundary's own unit, numbering it after the last.
    pub fn push_point(&mut self, x: f64, y: f64) {
        let idx = self.points.last().map_or(0, |p| p.idx + 1);
        self.points.push(BoundaryPoint { idx, x, y });
    }

    /// Vertices converted to centimetres
    pub fn points_cm(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| Point::new(self.unit.to_cm(p.x), self.unit.to_cm(p.y)))
            .collect()
    }

    /// Polyline length in centimetres, including the closing edge when closed.
    pub fn perimeter_cm(&self) -> f64 {
        let points = self.points_cm();
        let mut total: f64 = points.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
        if self.closed && points.len() > 2 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                total += last.distance_to(first);
            }
        }
        total
    }
}

/// Track rendering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSkin {
    pub track_width_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for TrackSkin {
    fn default() -> Self {
        Self {
            track_width_cm: constants::DEFAULT_TRACK_WIDTH_CM,
            color: Some(constants::DEFAULT_TRACK_COLOR.to_string()),
        }
    }
}

/// A track layout
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Document-level id, kept as read
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    /// Drawing order; the last piece is topmost
    pub pieces: Vec<Piece>,
    pub boundary: Option<Boundary>,
    pub skin: TrackSkin,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Project {
    fn default() -> Self {
        Self::new("New Track")
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            version: crate::serialization::DOCUMENT_VERSION.to_string(),
            pieces: Vec::new(),
            boundary: None,
            skin: TrackSkin::default(),
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    pub fn piece(&self, id: &PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| &p.id == id)
    }

    pub fn piece_mut(&mut self, id: &PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PieceId) -> bool {
        self.piece(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Remove every piece whose id is in `ids`. Returns how many were removed.
    pub fn remove_pieces(&mut self, ids: &[PieceId]) -> usize {
        let before = self.pieces.len();
        self.pieces.retain(|p| !ids.contains(&p.id));
        before - self.pieces.len()
    }

    /// Topmost piece whose footprint contains `point`.
    pub fn piece_at(&self, point: &Point) -> Option<&Piece> {
        let width = self.skin.track_width_cm;
        self.pieces
            .iter()
            .rev()
            .find(|p| p.footprint(width).contains(point))
    }
}
