//! Quick-text piece and boundary input.
//!
//! Grammar (case-insensitive, surrounding whitespace ignored):
//! ```text
//! straight := "L" number
//! curve    := "R" number "-" number
//! point    := number "," number
//! number   := digits [ "." [ digits ] ]
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DesignerError, DesignerResult};
use crate::model::{PieceKind, Point};

static STRAIGHT_RE: OnceLock<Regex> = OnceLock::new();
static CURVE_RE: OnceLock<Regex> = OnceLock::new();
static POINT_RE: OnceLock<Regex> = OnceLock::new();

fn straight_re() -> &'static Regex {
    STRAIGHT_RE.get_or_init(|| Regex::new(r"^L(\d+\.?\d*)$").expect("invalid regex pattern"))
}

fn curve_re() -> &'static Regex {
    CURVE_RE.get_or_init(|| {
        Regex::new(r"^R(\d+\.?\d*)-(\d+\.?\d*)$").expect("invalid regex pattern")
    })
}

fn point_re() -> &'static Regex {
    POINT_RE.get_or_init(|| {
        Regex::new(r"^(-?\d+\.?\d*)\s*,\s*(-?\d+\.?\d*)$").expect("invalid regex pattern")
    })
}

/// Parses `L<length>` or `R<radius>-<angle>` into a piece shape.
pub fn parse_piece(input: &str) -> DesignerResult<PieceKind> {
    let text = input.trim().to_ascii_uppercase();
    let invalid = || DesignerError::InvalidQuickText {
        input: input.trim().to_string(),
    };

    if let Some(caps) = straight_re().captures(&text) {
        let length_cm = caps[1].parse::<f64>().map_err(|_| invalid())?;
        return Ok(PieceKind::Straight { length_cm });
    }

    if let Some(caps) = curve_re().captures(&text) {
        let radius_cm = caps[1].parse::<f64>().map_err(|_| invalid())?;
        let angle_deg = caps[2].parse::<f64>().map_err(|_| invalid())?;
        return Ok(PieceKind::Curve {
            radius_cm,
            angle_deg,
        });
    }

    Err(invalid())
}

/// Parses a boundary vertex written as `x, y`.
pub fn parse_point(input: &str) -> DesignerResult<Point> {
    let text = input.trim();
    let invalid = || DesignerError::InvalidPointText {
        input: text.to_string(),
    };

    let caps = point_re().captures(text).ok_or_else(invalid)?;
    let x = caps[1].parse::<f64>().map_err(|_| invalid())?;
    let y = caps[2].parse::<f64>().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}
