//! View transform between screen pixels and world centimetres.
//!
//! The visible area is a window over the world expressed in screen
//! orientation (y grows downward). World coordinates are y-up, so the
//! window's `y` is the negated world y of the top edge.
//!
//! Formula:
//! ```text
//! world_x =   window.x + screen_x * window.width  / canvas_width
//! world_y = -(window.y + screen_y * window.height / canvas_height)
//! ```

use std::fmt;

use crate::model::Point;
use trackkit_settings::ViewSettings;

/// Visible world window, screen-oriented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewWindow {
    /// Window showing a `width × height` field with `margin` on every side.
    pub fn around_field(width: f64, height: f64, margin: f64) -> Self {
        Self {
            x: -margin,
            y: -height - margin,
            width: width + 2.0 * margin,
            height: height + 2.0 * margin,
        }
    }
}

/// Screen/world mapping with zoom and pan.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    window: ViewWindow,
    initial: ViewWindow,
    canvas_width: f64,
    canvas_height: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl ViewTransform {
    /// Creates a transform showing `window` on a canvas of the given pixel size.
    pub fn new(canvas_width: f64, canvas_height: f64, window: ViewWindow) -> Self {
        Self {
            window,
            initial: window,
            canvas_width,
            canvas_height,
            min_zoom: trackkit_core::constants::MIN_ZOOM,
            max_zoom: trackkit_core::constants::MAX_ZOOM,
        }
    }

    /// Builds the initial view described by the editor settings.
    pub fn from_settings(settings: &ViewSettings) -> Self {
        let window = ViewWindow::around_field(
            settings.field_width_cm,
            settings.field_height_cm,
            settings.margin_cm,
        );
        let mut view = Self::new(settings.canvas_width_px, settings.canvas_height_px, window);
        view.set_zoom_limits(settings.min_zoom, settings.max_zoom);
        view
    }

    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if min_zoom > 0.0 && min_zoom <= max_zoom {
            self.min_zoom = min_zoom;
            self.max_zoom = max_zoom;
        }
    }

    pub fn window(&self) -> ViewWindow {
        self.window
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.canvas_width = width;
            self.canvas_height = height;
        }
    }

    /// Current zoom relative to the initial window (1.0 = initial view).
    pub fn zoom(&self) -> f64 {
        self.initial.width / self.window.width
    }

    /// Restores the initial window.
    pub fn reset(&mut self) {
        self.window = self.initial;
    }

    fn scale_x(&self) -> f64 {
        self.window.width / self.canvas_width
    }

    fn scale_y(&self) -> f64 {
        self.window.height / self.canvas_height
    }

    /// Converts screen pixel coordinates to world centimetres.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let x = self.window.x + screen.x * self.scale_x();
        let y = self.window.y + screen.y * self.scale_y();
        Point::new(x, -y)
    }

    /// Converts world centimetres to screen pixel coordinates.
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            (world.x - self.window.x) / self.scale_x(),
            (-world.y - self.window.y) / self.scale_y(),
        )
    }

    /// Multiplies zoom by `factor`, keeping the world point under `screen` fixed.
    ///
    /// The resulting zoom is clamped to the configured limits. Returns the
    /// factor actually applied (1.0 when already at a limit).
    pub fn zoom_at(&mut self, screen: Point, factor: f64) -> f64 {
        if !(factor.is_finite() && factor > 0.0) {
            return 1.0;
        }
        let old_zoom = self.zoom();
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() <= 1e-9 * old_zoom {
            return 1.0;
        }

        // Window scales inversely to zoom.
        let scale = old_zoom / new_zoom;
        let anchor_x = self.window.x + screen.x * self.scale_x();
        let anchor_y = self.window.y + screen.y * self.scale_y();

        self.window = ViewWindow {
            x: anchor_x - (anchor_x - self.window.x) * scale,
            y: anchor_y - (anchor_y - self.window.y) * scale,
            width: self.window.width * scale,
            height: self.window.height * scale,
        };

        new_zoom / old_zoom
    }

    /// Applies one wheel notch at `screen`: scrolling up zooms in by `step`,
    /// scrolling down zooms out by `step`.
    pub fn wheel_zoom(&mut self, screen: Point, delta_y: f64, step: f64) -> f64 {
        let factor = if delta_y < 0.0 {
            1.0 + step
        } else if delta_y > 0.0 {
            1.0 - step
        } else {
            return 1.0;
        };
        self.zoom_at(screen, factor)
    }

    /// Pans by a screen-space delta. The content follows the pointer.
    pub fn pan_by(&mut self, screen_dx: f64, screen_dy: f64) {
        let ratio = self.window.width / self.canvas_width;
        self.window.x -= screen_dx * ratio;
        self.window.y -= screen_dy * ratio;
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::from_settings(&ViewSettings::default())
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ViewTransform {{ zoom: {:.2}x, window: ({:.1}, {:.1}) {:.1}x{:.1}, canvas: {}x{} }}",
            self.zoom(),
            self.window.x,
            self.window.y,
            self.window.width,
            self.window.height,
            self.canvas_width,
            self.canvas_height
        )
    }
}
