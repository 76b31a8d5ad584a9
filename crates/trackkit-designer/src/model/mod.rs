//! Track geometry model.
//!
//! A [`Piece`] is a straight or a curve placed by its start connector and a
//! rotation. Everything else (end connector, turn center, footprint, BOM key,
//! physical length) is derived on demand and never stored.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use uuid::Uuid;

pub mod curve;
pub mod footprint;
pub mod straight;

pub use footprint::Footprint;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotate this point about `center` by `angle_deg` (counter-clockwise).
    pub fn rotated_about(&self, center: &Point, angle_deg: f64) -> Point {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Opaque piece identifier, unique within a project.
///
/// Stored documents may carry numeric ids; they are read as their decimal
/// text and always written back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(String);

impl PieceId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PieceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PieceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for PieceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PieceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Shape of a track piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PieceKind {
    /// Straight section
    Straight { length_cm: f64 },
    /// Circular arc; a positive angle turns counter-clockwise
    Curve { radius_cm: f64, angle_deg: f64 },
}

impl PieceKind {
    pub fn is_straight(&self) -> bool {
        matches!(self, Self::Straight { .. })
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, Self::Curve { .. })
    }

    /// Document type tag (`"straight"` or `"curve"`)
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Straight { .. } => "straight",
            Self::Curve { .. } => "curve",
        }
    }

    /// Physical length along the centerline in centimetres.
    pub fn length_cm(&self) -> f64 {
        match *self {
            Self::Straight { length_cm } => straight::length(length_cm),
            Self::Curve {
                radius_cm,
                angle_deg,
            } => curve::arc_length(radius_cm, angle_deg),
        }
    }

    /// BOM grouping key, e.g. `L100` or `R50-90`.
    pub fn canonical_key(&self) -> String {
        match *self {
            Self::Straight { length_cm } => straight::canonical_key(length_cm),
            Self::Curve {
                radius_cm,
                angle_deg,
            } => curve::canonical_key(radius_cm, angle_deg),
        }
    }
}

/// A placed track piece
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    /// Start connector in world centimetres
    pub position: Point,
    /// Degrees in `[0, 360)`
    pub rotation_deg: f64,
}

impl Piece {
    /// Create a piece with a fresh id
    pub fn new(kind: PieceKind, position: Point, rotation_deg: f64) -> Self {
        Self::with_id(PieceId::new(), kind, position, rotation_deg)
    }

    pub fn with_id(id: PieceId, kind: PieceKind, position: Point, rotation_deg: f64) -> Self {
        Self {
            id,
            kind,
            position,
            rotation_deg: normalize_degrees(rotation_deg),
        }
    }

    pub fn start_point(&self) -> Point {
        self.position
    }

    pub fn end_point(&self) -> Point {
        self.end_point_from(self.position)
    }

    /// End connector if the piece started at `start` with its current rotation.
    pub fn end_point_from(&self, start: Point) -> Point {
        match self.kind {
            PieceKind::Straight { length_cm } => {
                straight::end_point(start, self.rotation_deg, length_cm)
            }
            PieceKind::Curve {
                radius_cm,
                angle_deg,
            } => curve::end_point(start, self.rotation_deg, radius_cm, angle_deg),
        }
    }

    /// Start and end connectors
    pub fn connectors(&self) -> [Point; 2] {
        [self.start_point(), self.end_point()]
    }

    /// Center of the arc for curves, `None` for straights.
    pub fn turn_center(&self) -> Option<Point> {
        match self.kind {
            PieceKind::Straight { .. } => None,
            PieceKind::Curve { radius_cm, .. } => Some(curve::turn_center(
                self.position,
                self.rotation_deg,
                radius_cm,
            )),
        }
    }

    /// Area covered by the piece for a given track width.
    pub fn footprint(&self, track_width_cm: f64) -> Footprint {
        match self.kind {
            PieceKind::Straight { length_cm } => {
                straight::footprint(self.position, self.rotation_deg, length_cm, track_width_cm)
            }
            PieceKind::Curve {
                radius_cm,
                angle_deg,
            } => curve::footprint(
                self.position,
                self.rotation_deg,
                radius_cm,
                angle_deg,
                track_width_cm,
            ),
        }
    }

    pub fn length_cm(&self) -> f64 {
        self.kind.length_cm()
    }

    pub fn canonical_key(&self) -> String {
        self.kind.canonical_key()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position = Point::new(self.position.x + dx, self.position.y + dy);
    }

    /// Add `delta_deg` to the rotation, keeping it in `[0, 360)`.
    pub fn rotate_by(&mut self, delta_deg: f64) {
        self.rotation_deg = normalize_degrees(self.rotation_deg + delta_deg);
    }
}

/// Map any angle into `[0, 360)`. Non-finite input maps to `0`.
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    if !angle_deg.is_finite() {
        return 0.0;
    }
    let normalized = angle_deg.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Replace NaN and infinities with zero so derived geometry stays finite.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
