//! Curve piece geometry.
//!
//! A curve's start connector lies on its arc at angle θ (the piece rotation)
//! as seen from the turn center. The arc sweeps `angle` degrees from there.

use super::{finite_or_zero, Footprint, Point};
use trackkit_core::units::format_compact;

/// Turn center: `start - radius * (cos θ, sin θ)`.
pub fn turn_center(start: Point, rotation_deg: f64, radius_cm: f64) -> Point {
    let radius = finite_or_zero(radius_cm);
    let (sin, cos) = finite_or_zero(rotation_deg).to_radians().sin_cos();
    Point::new(start.x - radius * cos, start.y - radius * sin)
}

/// End connector: `center + radius * (cos(θ + angle), sin(θ + angle))`.
pub fn end_point(start: Point, rotation_deg: f64, radius_cm: f64, angle_deg: f64) -> Point {
    let radius = finite_or_zero(radius_cm);
    let center = turn_center(start, rotation_deg, radius);
    let end_angle = (finite_or_zero(rotation_deg) + finite_or_zero(angle_deg)).to_radians();
    Point::new(
        center.x + radius * end_angle.cos(),
        center.y + radius * end_angle.sin(),
    )
}

/// Centerline arc length, `|r · a|` rather than the signed `r · a`.
///
/// Right-hand curves (negative angle) and negative radii yield a positive
/// length.
pub fn arc_length(radius_cm: f64, angle_deg: f64) -> f64 {
    (finite_or_zero(radius_cm) * finite_or_zero(angle_deg).to_radians()).abs()
}

pub fn canonical_key(radius_cm: f64, angle_deg: f64) -> String {
    format!(
        "R{}-{}",
        format_compact(radius_cm),
        format_compact(angle_deg)
    )
}

/// Annular sector between `radius ∓ track_width / 2`, inner radius clamped at 0.
pub fn footprint(
    start: Point,
    rotation_deg: f64,
    radius_cm: f64,
    angle_deg: f64,
    track_width_cm: f64,
) -> Footprint {
    let radius = finite_or_zero(radius_cm).abs();
    let half_width = finite_or_zero(track_width_cm).abs() / 2.0;
    // A negative radius puts the center on the other side of the start connector.
    let start_deg = if radius_cm < 0.0 {
        finite_or_zero(rotation_deg) + 180.0
    } else {
        finite_or_zero(rotation_deg)
    };
    Footprint::AnnularSector {
        center: turn_center(start, rotation_deg, radius_cm),
        inner_radius: (radius - half_width).max(0.0),
        outer_radius: radius + half_width,
        start_deg,
        sweep_deg: finite_or_zero(angle_deg),
    }
}
