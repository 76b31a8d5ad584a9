//! Editor-wide default constants.
//!
//! All lengths are centimetres unless the name says otherwise.

/// Pixels per centimetre in the legacy document encoding.
pub const CM_TO_PX: f64 = 2.0;

/// Width of the design field.
pub const FIELD_WIDTH_CM: f64 = 1170.0;
/// Height of the design field.
pub const FIELD_HEIGHT_CM: f64 = 827.0;
/// Margin shown around the field in the initial view.
pub const VIEW_MARGIN_CM: f64 = 50.0;

/// Default canvas size in screen pixels.
pub const CANVAS_WIDTH_PX: f64 = 1270.0;
pub const CANVAS_HEIGHT_PX: f64 = 927.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
/// Fractional zoom change per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Connector snap radius.
pub const SNAP_THRESHOLD_CM: f64 = 15.0;

/// Pointer travel (screen pixels) before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Rotation applied by the rotate shortcut, in degrees.
pub const ROTATE_STEP_DEG: f64 = 15.0;

/// Offset applied to pasted pieces.
pub const PASTE_OFFSET_CM: (f64, f64) = (25.0, 25.0);

pub const HISTORY_CAPACITY: usize = 50;

pub const DEFAULT_TRACK_WIDTH_CM: f64 = 45.0;
pub const DEFAULT_TRACK_COLOR: &str = "#333";

/// Placement of pieces added from the toolbox.
pub const TOOLBOX_DROP_CM: (f64, f64) = (200.0, 200.0);
/// Placement of straights added via quick text.
pub const QUICK_STRAIGHT_CM: (f64, f64) = (100.0, 100.0);
/// Placement of curves added via quick text.
pub const QUICK_CURVE_CM: (f64, f64) = (200.0, 100.0);
