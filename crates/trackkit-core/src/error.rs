//! Error types shared across TrackKit crates.

use thiserror::Error;

/// Raised when a length unit name cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit name is not recognised
    #[error("Unknown length unit: {unit}")]
    UnknownUnit {
        /// The unit text as given.
        unit: String,
    },
}
