//! Piece footprints for hit testing and rendering.

use super::{normalize_degrees, Point};

/// Area occupied by a placed piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// Straight: a band of `2 * half_width` around the segment `start..end`
    Rectangle {
        start: Point,
        end: Point,
        half_width: f64,
    },
    /// Curve: the ring between two radii, limited to an angular sweep
    AnnularSector {
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_deg: f64,
        sweep_deg: f64,
    },
}

impl Footprint {
    /// Corner points of a straight's rectangle, in drawing order.
    pub fn corners(&self) -> Option<[Point; 4]> {
        match *self {
            Footprint::Rectangle {
                start,
                end,
                half_width,
            } => {
                let length = start.distance_to(&end);
                if length == 0.0 {
                    return Some([start; 4]);
                }
                let normal = Point::new(-(end.y - start.y) / length, (end.x - start.x) / length)
                    * half_width;
                Some([
                    start + normal,
                    end + normal,
                    end - normal,
                    start - normal,
                ])
            }
            Footprint::AnnularSector { .. } => None,
        }
    }

    /// Whether `point` lies inside the footprint (boundary inclusive).
    pub fn contains(&self, point: &Point) -> bool {
        match *self {
            Footprint::Rectangle {
                start,
                end,
                half_width,
            } => {
                let axis = end - start;
                let length_sq = axis.x * axis.x + axis.y * axis.y;
                if length_sq == 0.0 {
                    return false;
                }
                let rel = *point - start;
                let t = (rel.x * axis.x + rel.y * axis.y) / length_sq;
                if !(0.0..=1.0).contains(&t) {
                    return false;
                }
                let cross = (rel.x * axis.y - rel.y * axis.x).abs() / length_sq.sqrt();
                cross <= half_width
            }
            Footprint::AnnularSector {
                center,
                inner_radius,
                outer_radius,
                start_deg,
                sweep_deg,
            } => {
                if sweep_deg == 0.0 {
                    return false;
                }
                let distance = point.distance_to(&center);
                if distance < inner_radius || distance > outer_radius {
                    return false;
                }
                let bearing = (point.y - center.y).atan2(point.x - center.x).to_degrees();
                if sweep_deg.abs() >= 360.0 {
                    return true;
                }
                if sweep_deg > 0.0 {
                    normalize_degrees(bearing - start_deg) <= sweep_deg
                } else {
                    normalize_degrees(start_deg - bearing) <= -sweep_deg
                }
            }
        }
    }
}
