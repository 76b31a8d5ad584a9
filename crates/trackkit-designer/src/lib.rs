//! # TrackKit Designer
//!
//! Interaction engine for laying out modular track on a 2D field. Pieces
//! are straights and curves placed by their start connector and a rotation;
//! everything else is derived from those.
//!
//! ## Core Components
//!
//! - **Model**: pieces, connectors, turn centers and footprints
//! - **Viewport**: screen/world mapping with Y flip, zoom and pan
//! - **Snap**: connector-to-connector snapping while dragging
//! - **Selection & Transforms**: click, toggle and box selection; rigid
//!   group rotation and drag
//! - **History**: bounded snapshot undo/redo
//! - **BOM**: bill of materials grouped by piece type
//!
//! [`DesignerState`] ties these together behind pointer, keyboard and
//! document entry points.
//!
//! ## Coordinates
//!
//! World coordinates are centimetres with Y up. Screen coordinates are
//! pixels with Y down. Rotations are degrees, counter-clockwise.

pub mod bom;
pub mod catalog;
pub mod designer_state;
pub mod error;
pub mod history;
pub mod interaction;
pub mod keyboard;
pub mod model;
pub mod project;
pub mod quick_text;
pub mod selection_manager;
pub mod serialization;
pub mod snap;
pub mod transforms;
pub mod viewport;

pub use bom::{BomCategory, BomEntry, BomSummary};
pub use catalog::PieceDefinition;
pub use designer_state::{DesignerState, PieceUpdate};
pub use error::{DesignerError, DesignerResult};
pub use history::HistoryManager;
pub use interaction::{
    DragState, Modifiers, PointerButton, PointerInput, PointerOutcome, WheelInput,
};
pub use keyboard::{Key, KeyInput, ShortcutAction};
pub use model::{Footprint, Piece, PieceId, PieceKind, Point};
pub use project::{Boundary, BoundaryPoint, Project, TrackSkin};
pub use selection_manager::SelectionManager;
pub use serialization::{PieceParams, PieceRecord, ProjectDocument};
pub use snap::{SnapAnchor, SnapEngine, SnapResult};
pub use viewport::{ViewTransform, ViewWindow};
