//! Rotation of the selection.

use super::DesignerState;
use crate::transforms;

impl DesignerState {
    /// Rotates the selection by `delta_deg` and records history.
    ///
    /// A single piece spins in place; a group rotates rigidly about the
    /// centroid of its start connectors.
    pub fn rotate_selected(&mut self, delta_deg: f64) -> usize {
        self.selection.retain_existing(&self.project);
        let rotated =
            transforms::rotate_pieces(&mut self.project.pieces, self.selection.ids(), delta_deg);
        if rotated > 0 {
            self.commit("Rotate pieces");
        }
        rotated
    }

    /// Rotates the selection by the configured shortcut step.
    pub fn rotate_selected_step(&mut self) -> usize {
        self.rotate_selected(self.config.interaction.rotate_step_deg)
    }
}
