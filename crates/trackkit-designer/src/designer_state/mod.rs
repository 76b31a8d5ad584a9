//! Designer state manager for UI integration.
//!
//! Owns the project, selection, view and history, and exposes every editor
//! operation as a method. Handlers run one at a time; nothing here blocks.
//!
//! Submodules:
//! - `pieces`: add, delete, update, clipboard
//! - `selection`: selection and hit testing
//! - `transforms`: rotation
//! - `history`: undo/redo
//! - `pointer`: pointer, wheel and keyboard input
//! - `file_io`: document load/save

mod file_io;
mod history;
mod pieces;
mod pointer;
mod selection;
mod transforms;

use std::path::PathBuf;

use crate::bom::{self, BomSummary};
use crate::history::HistoryManager;
use crate::interaction::DragState;
use crate::model::Piece;
use crate::project::{Project, TrackSkin};
use crate::selection_manager::SelectionManager;
use crate::snap::SnapEngine;
use crate::viewport::ViewTransform;
use trackkit_settings::EditorConfig;

pub use pieces::PieceUpdate;

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) project: Project,
    pub(crate) selection: SelectionManager,
    pub(crate) history: HistoryManager,
    pub(crate) drag: DragState,
    pub(crate) snap: SnapEngine,
    pub(crate) config: EditorConfig,
    pub viewport: ViewTransform,
    pub clipboard: Vec<Piece>,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Creates a designer state from editor settings.
    pub fn with_config(config: EditorConfig) -> Self {
        let mut project = Project::default();
        project.skin = TrackSkin {
            track_width_cm: config.skin.track_width_cm,
            color: Some(config.skin.color.clone()),
        };

        let mut snap = SnapEngine::new(config.snap.threshold_cm);
        snap.set_enabled(config.snap.enabled);

        Self {
            history: HistoryManager::new(project.clone(), config.history.capacity),
            project,
            selection: SelectionManager::new(),
            drag: DragState::Idle,
            snap,
            viewport: ViewTransform::from_settings(&config.view),
            clipboard: Vec::new(),
            current_file_path: None,
            is_modified: false,
            config,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap.is_enabled()
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap.set_enabled(enabled);
    }

    /// Replaces the project wholesale.
    ///
    /// Clears the selection and any drag in progress, and reseeds history
    /// with the new project as its only entry.
    pub fn load_project(&mut self, project: Project) {
        tracing::debug!(
            "Loading project '{}' with {} pieces",
            project.name,
            project.pieces.len()
        );
        self.history.reset(project.clone());
        self.project = project;
        self.selection.clear();
        self.drag = DragState::Idle;
        self.is_modified = false;
    }

    /// Starts an empty project.
    pub fn new_project(&mut self) {
        let mut project = Project::default();
        project.skin = self.project.skin.clone();
        self.load_project(project);
        self.current_file_path = None;
    }

    /// Bill of materials for the current project.
    pub fn bom(&self) -> BomSummary {
        bom::summarize(&self.project)
    }

    /// Title for the window or tab.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.project.name.clone());
        if self.is_modified {
            format!("{}*", name)
        } else {
            name
        }
    }

    /// Snapshots the project into history after a committed change.
    pub(crate) fn commit(&mut self, action: &str) {
        self.history.record(self.project.clone());
        self.is_modified = true;
        tracing::debug!(
            "{}: {} pieces, history {}/{}",
            action,
            self.project.pieces.len(),
            self.history.cursor() + 1,
            self.history.len()
        );
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
