//! Pointer input types and the drag state machine.
//!
//! ```text
//! Idle --press on piece--> Armed --travel > threshold--> Dragging --release--> Idle
//!   |                        \--release (click)--> Idle
//!   +--press on empty--> BoxSelecting --release--> Idle
//!   +--middle press--> Panning --release--> Idle
//! ```

use crate::model::{PieceId, Point};

/// Keyboard modifiers held during an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        meta: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// A pointer press, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub screen: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerInput {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            screen: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A wheel notch, in screen pixels. Negative `delta_y` scrolls up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub screen: Point,
    pub delta_y: f64,
    pub modifiers: Modifiers,
}

/// Transient pointer state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed on a piece; not yet past the drag threshold
    Armed {
        piece: PieceId,
        press_screen: Point,
        /// World offset from the piece's start connector to the press point
        grab_offset: Point,
    },
    Dragging {
        piece: PieceId,
        grab_offset: Point,
        snap_target: Option<Point>,
    },
    Panning {
        last_screen: Point,
    },
    /// Rubber-band selection in world coordinates
    BoxSelecting {
        start: Point,
        end: Point,
        additive: bool,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Piece pressed or dragged by the gesture in progress.
    pub fn piece(&self) -> Option<&PieceId> {
        match self {
            DragState::Armed { piece, .. } | DragState::Dragging { piece, .. } => Some(piece),
            _ => None,
        }
    }

    pub fn snap_target(&self) -> Option<Point> {
        match self {
            DragState::Dragging { snap_target, .. } => *snap_target,
            _ => None,
        }
    }

    /// Selection rectangle corners while box selecting.
    pub fn selection_rect(&self) -> Option<(Point, Point)> {
        match self {
            DragState::BoxSelecting { start, end, .. } => Some((*start, *end)),
            _ => None,
        }
    }
}

/// What a pointer release did
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// Nothing to report
    None,
    /// Press and release without passing the drag threshold
    Clicked(PieceId),
    /// Multi-select toggle on press
    Toggled(PieceId),
    /// A drag finished and was recorded
    Moved { piece: PieceId, count: usize },
    /// Box selection finished with this many pieces inside
    BoxSelected(usize),
    PanFinished,
}

/// Whether pointer travel from `press` to `current` passes the threshold.
pub fn exceeds_drag_threshold(press: Point, current: Point, threshold_px: f64) -> bool {
    press.distance_to(&current) >= threshold_px
}
