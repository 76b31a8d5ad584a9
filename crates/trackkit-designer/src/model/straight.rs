//! Straight piece geometry.

use super::{finite_or_zero, Footprint, Point};
use trackkit_core::units::format_compact;

/// End connector: `start + length * (cos θ, sin θ)`.
pub fn end_point(start: Point, rotation_deg: f64, length_cm: f64) -> Point {
    let length = finite_or_zero(length_cm);
    let (sin, cos) = finite_or_zero(rotation_deg).to_radians().sin_cos();
    Point::new(start.x + length * cos, start.y + length * sin)
}

pub fn length(length_cm: f64) -> f64 {
    finite_or_zero(length_cm)
}

pub fn canonical_key(length_cm: f64) -> String {
    format!("L{}", format_compact(length_cm))
}

/// Rectangle of `length × track_width` centered on the segment start to end.
pub fn footprint(start: Point, rotation_deg: f64, length_cm: f64, track_width_cm: f64) -> Footprint {
    Footprint::Rectangle {
        start,
        end: end_point(start, rotation_deg, length_cm),
        half_width: finite_or_zero(track_width_cm).abs() / 2.0,
    }
}
