//! # TrackKit
//!
//! Layout editor engine for modular track: straight and curved pieces placed
//! on a 2D field, snapped together connector to connector, and counted into a
//! bill of materials.
//!
//! ## Architecture
//!
//! TrackKit is organized as a workspace with multiple crates:
//!
//! 1. **trackkit-core** - Shared errors, units and layout constants
//! 2. **trackkit-settings** - Editor configuration (JSON/TOML)
//! 3. **trackkit-designer** - Geometry, view transform, snapping, selection,
//!    history and BOM
//! 4. **trackkit** - Command-line binary that integrates all crates

pub use trackkit_designer as designer;

pub use trackkit_core::{cm_to_px, px_to_cm, LengthUnit, UnitError};

pub use trackkit_designer::{
    BomCategory, BomEntry, BomSummary, DesignerError, DesignerResult, DesignerState,
    HistoryManager, Piece, PieceId, PieceKind, Point, Project, ProjectDocument, SnapEngine,
    ViewTransform,
};

pub use trackkit_settings::{EditorConfig, SettingsError, SettingsResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Renders a bill of materials as a plain-text table.
pub fn format_bom(summary: &BomSummary) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if summary.is_empty() {
        out.push_str("No pieces.\n");
    }
    for entry in &summary.entries {
        let _ = writeln!(
            out,
            "{:<10} {:>4} x  {:>9.2} cm",
            entry.key,
            entry.count,
            entry.total_length_cm()
        );
    }
    let _ = writeln!(out, "Pieces: {}", summary.total_pieces);
    let _ = writeln!(out, "Track length: {} m", summary.total_length_m());
    if let Some(boundary) = summary.boundary_length_cm {
        let _ = writeln!(
            out,
            "Boundary length: {} m",
            trackkit_core::units::format_meters(boundary)
        );
    }
    out
}
