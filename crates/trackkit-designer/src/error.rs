//! Error types for the designer crate.

use thiserror::Error;

/// Errors raised by designer operations.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// Quick-text piece input did not match the grammar.
    #[error("Invalid piece '{input}': expected L<length> or R<radius>-<angle>, e.g. L100 or R50-90")]
    InvalidQuickText { input: String },

    /// Boundary point input did not match `<x>, <y>`.
    #[error("Invalid point '{input}': expected <x>, <y>, e.g. 120, 80")]
    InvalidPointText { input: String },

    /// A document piece has a type other than straight or curve.
    #[error("Unknown piece type: {piece_type}")]
    UnknownPieceType { piece_type: String },

    /// A catalogue id was not found.
    #[error("Unknown catalog piece: {id}")]
    UnknownCatalogPiece { id: String },

    /// A stored document could not be decoded or encoded.
    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    /// I/O error while reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;
