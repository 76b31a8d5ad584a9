//! Editor configuration for TrackKit
//!
//! Configuration is organized into sections:
//! - Snapping (radius, on/off)
//! - History depth
//! - Pointer interaction (drag threshold, rotate step, paste offset, wheel zoom)
//! - Initial view (canvas size, zoom limits, design field)
//! - Default track skin
//!
//! Every section defaults independently, so a file may set only the values
//! it cares about.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trackkit_core::constants;

/// Connector snapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Snap radius in centimetres
    pub threshold_cm: f64,
    /// Snap while dragging
    pub enabled: bool,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            threshold_cm: constants::SNAP_THRESHOLD_CM,
            enabled: true,
        }
    }
}

/// Undo/redo history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of retained snapshots
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: constants::HISTORY_CAPACITY,
        }
    }
}

/// Pointer and keyboard interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Screen pixels of travel before a press becomes a drag
    pub drag_threshold_px: f64,
    /// Degrees applied by the rotate shortcut
    pub rotate_step_deg: f64,
    /// Offset applied to pasted pieces, in centimetres
    pub paste_offset_cm: (f64, f64),
    /// Fractional zoom change per wheel notch
    pub wheel_zoom_step: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: constants::DRAG_THRESHOLD_PX,
            rotate_step_deg: constants::ROTATE_STEP_DEG,
            paste_offset_cm: constants::PASTE_OFFSET_CM,
            wheel_zoom_step: constants::WHEEL_ZOOM_STEP,
        }
    }
}

/// Initial view and zoom limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub canvas_width_px: f64,
    pub canvas_height_px: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Design field width in centimetres
    pub field_width_cm: f64,
    /// Design field height in centimetres
    pub field_height_cm: f64,
    /// Margin around the field in the initial view
    pub margin_cm: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            canvas_width_px: constants::CANVAS_WIDTH_PX,
            canvas_height_px: constants::CANVAS_HEIGHT_PX,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            field_width_cm: constants::FIELD_WIDTH_CM,
            field_height_cm: constants::FIELD_HEIGHT_CM,
            margin_cm: constants::VIEW_MARGIN_CM,
        }
    }
}

/// Default track rendering for new projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinSettings {
    pub track_width_cm: f64,
    pub color: String,
}

impl Default for SkinSettings {
    fn default() -> Self {
        Self {
            track_width_cm: constants::DEFAULT_TRACK_WIDTH_CM,
            color: constants::DEFAULT_TRACK_COLOR.to_string(),
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub snap: SnapSettings,
    pub history: HistorySettings,
    pub interaction: InteractionSettings,
    pub view: ViewSettings,
    pub skin: SkinSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory for TrackKit
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("trackkit"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Default location of the config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from file (JSON or TOML, by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(
                    ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into(),
                )
            }
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or fall back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML, by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(
                    ConfigError::UnsupportedFormat(other.unwrap_or_default().to_string()).into(),
                )
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.snap.threshold_cm.is_finite() && self.snap.threshold_cm > 0.0) {
            return Err(ConfigError::out_of_range(
                "snap.threshold_cm",
                self.snap.threshold_cm,
            ));
        }

        if self.history.capacity == 0 {
            return Err(ConfigError::out_of_range(
                "history.capacity",
                self.history.capacity,
            ));
        }

        let interaction = &self.interaction;
        if !(interaction.drag_threshold_px.is_finite() && interaction.drag_threshold_px > 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.drag_threshold_px",
                interaction.drag_threshold_px,
            ));
        }
        if !interaction.rotate_step_deg.is_finite() {
            return Err(ConfigError::out_of_range(
                "interaction.rotate_step_deg",
                interaction.rotate_step_deg,
            ));
        }
        let (dx, dy) = interaction.paste_offset_cm;
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(ConfigError::out_of_range(
                "interaction.paste_offset_cm",
                format!("({}, {})", dx, dy),
            ));
        }
        if !(interaction.wheel_zoom_step > 0.0 && interaction.wheel_zoom_step < 1.0) {
            return Err(ConfigError::out_of_range(
                "interaction.wheel_zoom_step",
                interaction.wheel_zoom_step,
            ));
        }

        let view = &self.view;
        if !(view.canvas_width_px > 0.0 && view.canvas_height_px > 0.0) {
            return Err(ConfigError::out_of_range(
                "view.canvas",
                format!("{}x{}", view.canvas_width_px, view.canvas_height_px),
            ));
        }
        if !(view.min_zoom > 0.0 && view.min_zoom < view.max_zoom && view.max_zoom.is_finite())
        {
            return Err(ConfigError::out_of_range(
                "view.zoom",
                format!("{}..{}", view.min_zoom, view.max_zoom),
            ));
        }
        if !(view.field_width_cm > 0.0 && view.field_height_cm > 0.0) {
            return Err(ConfigError::out_of_range(
                "view.field",
                format!("{}x{}", view.field_width_cm, view.field_height_cm),
            ));
        }
        if !(view.margin_cm.is_finite() && view.margin_cm >= 0.0) {
            return Err(ConfigError::out_of_range("view.margin_cm", view.margin_cm));
        }

        if !(self.skin.track_width_cm.is_finite() && self.skin.track_width_cm > 0.0) {
            return Err(ConfigError::out_of_range(
                "skin.track_width_cm",
                self.skin.track_width_cm,
            ));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
