//! Project document format.
//!
//! Track layouts are stored as camelCase JSON:
//! ```text
//! { name, version, pieces: [{ id, type, params: { length?, radius?, angle? },
//!   x, y, rotation }], boundary?: { unit, points: [{ idx, x, y }], closed },
//!   skin?: { trackWidthCm, color? } }
//! ```
//! Piece ids may be numbers or strings on input and are always written as
//! strings. Missing numeric parameters read as zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DesignerError, DesignerResult};
use crate::model::{Piece, PieceId, PieceKind, Point};
use crate::project::{Boundary, Project, TrackSkin};

/// Document format version written by this crate
pub const DOCUMENT_VERSION: &str = "1.0";

fn default_name() -> String {
    "New Track".to_string()
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

/// Stored project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub pieces: Vec<PieceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<TrackSkin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Stored piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub id: PieceId,
    #[serde(rename = "type")]
    pub piece_type: String,
    #[serde(default)]
    pub params: PieceParams,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// Shape parameters; which ones are present depends on the piece type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PieceParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl PieceRecord {
    pub fn from_piece(piece: &Piece) -> Self {
        let params = match piece.kind {
            PieceKind::Straight { length_cm } => PieceParams {
                length: Some(length_cm),
                ..PieceParams::default()
            },
            PieceKind::Curve {
                radius_cm,
                angle_deg,
            } => PieceParams {
                radius: Some(radius_cm),
                angle: Some(angle_deg),
                ..PieceParams::default()
            },
        };

        Self {
            id: piece.id.clone(),
            piece_type: piece.kind.type_name().to_string(),
            params,
            x: piece.position.x,
            y: piece.position.y,
            rotation: piece.rotation_deg,
        }
    }

    pub fn into_piece(self) -> DesignerResult<Piece> {
        let kind = match self.piece_type.as_str() {
            "straight" => PieceKind::Straight {
                length_cm: self.params.length.unwrap_or(0.0),
            },
            "curve" => PieceKind::Curve {
                radius_cm: self.params.radius.unwrap_or(0.0),
                angle_deg: self.params.angle.unwrap_or(0.0),
            },
            other => {
                return Err(DesignerError::UnknownPieceType {
                    piece_type: other.to_string(),
                })
            }
        };

        Ok(Piece::with_id(
            self.id,
            kind,
            Point::new(self.x, self.y),
            self.rotation,
        ))
    }
}

impl ProjectDocument {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            version: project.version.clone(),
            pieces: project.pieces.iter().map(PieceRecord::from_piece).collect(),
            boundary: project.boundary.clone(),
            skin: Some(project.skin.clone()),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }

    /// Converts to a project. Fails on the first piece with an unknown type.
    pub fn into_project(self) -> DesignerResult<Project> {
        let pieces = self
            .pieces
            .into_iter()
            .map(PieceRecord::into_piece)
            .collect::<DesignerResult<Vec<_>>>()?;

        Ok(Project {
            id: self.id,
            name: self.name,
            description: self.description,
            version: self.version,
            pieces,
            boundary: self.boundary,
            skin: self.skin.unwrap_or_default(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    pub fn from_json(json: &str) -> DesignerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> DesignerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> DesignerResult<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> DesignerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
}
