//! Connector snapping.
//!
//! While a piece is dragged, its start and end connectors are compared with
//! every connector of every other piece. The closest target strictly inside
//! the threshold wins; on equal distances the first one found in piece order
//! (start before end, the moving start before the moving end) is kept.

use crate::model::{Piece, Point};

/// Which connector of the moving piece was aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAnchor {
    Start,
    End,
}

/// Outcome of a snap query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// Position to give the moving piece
    pub position: Point,
    /// Connector that was snapped onto, if any
    pub target: Option<Point>,
    pub anchor: Option<SnapAnchor>,
}

impl SnapResult {
    fn unsnapped(position: Point) -> Self {
        Self {
            position,
            target: None,
            anchor: None,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.target.is_some()
    }
}

/// Snap query configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapEngine {
    threshold_cm: f64,
    enabled: bool,
}

impl SnapEngine {
    pub fn new(threshold_cm: f64) -> Self {
        Self {
            threshold_cm,
            enabled: true,
        }
    }

    pub fn threshold_cm(&self) -> f64 {
        self.threshold_cm
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Find where `moving` should go if placed at `candidate`.
    ///
    /// `pieces` is the whole project; `moving` itself is skipped by id.
    /// Nothing is mutated.
    pub fn find_snap(&self, moving: &Piece, candidate: Point, pieces: &[Piece]) -> SnapResult {
        if !self.enabled || !candidate.is_finite() {
            return SnapResult::unsnapped(candidate);
        }

        let candidate_end = moving.end_point_from(candidate);
        let mut best_distance = self.threshold_cm;
        let mut best: Option<(Point, SnapAnchor)> = None;

        for other in pieces.iter().filter(|p| p.id != moving.id) {
            for target in other.connectors() {
                let to_start = candidate.distance_to(&target);
                if to_start < best_distance {
                    best_distance = to_start;
                    best = Some((target, SnapAnchor::Start));
                }
                let to_end = candidate_end.distance_to(&target);
                if to_end < best_distance {
                    best_distance = to_end;
                    best = Some((target, SnapAnchor::End));
                }
            }
        }

        match best {
            None => SnapResult::unsnapped(candidate),
            Some((target, SnapAnchor::Start)) => SnapResult {
                position: target,
                target: Some(target),
                anchor: Some(SnapAnchor::Start),
            },
            Some((target, SnapAnchor::End)) => SnapResult {
                // Shift so the end connector lands on the target.
                position: target - (candidate_end - candidate),
                target: Some(target),
                anchor: Some(SnapAnchor::End),
            },
        }
    }
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new(trackkit_core::constants::SNAP_THRESHOLD_CM)
    }
}
