//! TrackKit Settings Crate
//!
//! Editor configuration: snapping, history, pointer interaction, the initial
//! view and the default track skin. Loaded from JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    EditorConfig, HistorySettings, InteractionSettings, SkinSettings, SnapSettings, ViewSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
