//! # TrackKit Core
//!
//! Shared building blocks for the TrackKit workspace:
//! - Unit errors
//! - Length units and centimetre/pixel conversion
//! - Editor-wide default constants

pub mod constants;
pub mod error;
pub mod units;

pub use error::UnitError;
pub use units::{cm_to_px, px_to_cm, LengthUnit};
