//! File I/O operations (save, load) for designer state.

use anyhow::Context;
use chrono::Utc;

use super::DesignerState;
use crate::error::DesignerResult;
use crate::serialization::ProjectDocument;

impl DesignerState {
    /// Current project as a storable document.
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument::from_project(&self.project)
    }

    /// Replaces the project with a decoded document.
    ///
    /// Nothing changes if any piece fails to convert.
    pub fn load_document(&mut self, document: ProjectDocument) -> DesignerResult<()> {
        let project = document.into_project()?;
        self.load_project(project);
        Ok(())
    }

    /// Save project to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        self.project.updated_at = Some(Utc::now());
        self.to_document()
            .save_to_file(&path)
            .with_context(|| format!("Failed to save project to {}", path.as_ref().display()))?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        tracing::debug!("Saved project to {}", path.as_ref().display());

        Ok(())
    }

    /// Load project from file.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let document = ProjectDocument::load_from_file(&path)
            .with_context(|| format!("Failed to read project from {}", path.as_ref().display()))?;
        self.load_document(document)
            .with_context(|| format!("Failed to load project from {}", path.as_ref().display()))?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        tracing::debug!("Loaded project from {}", path.as_ref().display());

        Ok(())
    }
}
