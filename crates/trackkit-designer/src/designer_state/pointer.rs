//! Pointer, wheel and keyboard handlers.
//!
//! Drag frames move pieces live but never touch history; the move is
//! recorded once, on release.

use super::DesignerState;
use crate::interaction::{
    exceeds_drag_threshold, DragState, PointerButton, PointerInput, PointerOutcome, WheelInput,
};
use crate::keyboard::{resolve_shortcut, KeyInput, ShortcutAction};
use crate::model::{PieceId, Point};
use crate::transforms;

impl DesignerState {
    pub fn pointer_down(&mut self, input: PointerInput) -> PointerOutcome {
        match input.button {
            PointerButton::Middle => {
                self.drag = DragState::Panning {
                    last_screen: input.screen,
                };
                PointerOutcome::None
            }
            PointerButton::Secondary => PointerOutcome::None,
            PointerButton::Primary => {
                let world = self.viewport.screen_to_world(input.screen);
                let multi = input.modifiers.command();

                match self.project.piece_at(&world).map(|p| (p.id.clone(), p.position)) {
                    Some((id, _)) if multi => {
                        // Toggle only; a multi-select press never starts a drag.
                        self.selection.select(id.clone(), true);
                        self.drag = DragState::Idle;
                        PointerOutcome::Toggled(id)
                    }
                    Some((id, position)) => {
                        self.drag = DragState::Armed {
                            piece: id,
                            press_screen: input.screen,
                            grab_offset: world - position,
                        };
                        PointerOutcome::None
                    }
                    None => {
                        if !multi {
                            self.selection.clear();
                        }
                        self.drag = DragState::BoxSelecting {
                            start: world,
                            end: world,
                            additive: multi,
                        };
                        PointerOutcome::None
                    }
                }
            }
        }
    }

    pub fn pointer_move(&mut self, screen: Point) {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => {}
            DragState::Panning { last_screen } => {
                self.viewport
                    .pan_by(screen.x - last_screen.x, screen.y - last_screen.y);
                self.drag = DragState::Panning {
                    last_screen: screen,
                };
            }
            DragState::BoxSelecting {
                start, additive, ..
            } => {
                self.drag = DragState::BoxSelecting {
                    start,
                    end: self.viewport.screen_to_world(screen),
                    additive,
                };
            }
            DragState::Armed {
                piece,
                press_screen,
                grab_offset,
            } => {
                let threshold = self.config.interaction.drag_threshold_px;
                if !exceeds_drag_threshold(press_screen, screen, threshold) {
                    self.drag = DragState::Armed {
                        piece,
                        press_screen,
                        grab_offset,
                    };
                    return;
                }
                if !self.selection.contains(&piece) {
                    self.selection.select(piece.clone(), false);
                }
                let snap_target = self.drag_frame(&piece, screen, grab_offset);
                self.drag = DragState::Dragging {
                    piece,
                    grab_offset,
                    snap_target,
                };
            }
            DragState::Dragging {
                piece, grab_offset, ..
            } => {
                let snap_target = self.drag_frame(&piece, screen, grab_offset);
                self.drag = DragState::Dragging {
                    piece,
                    grab_offset,
                    snap_target,
                };
            }
        }
    }

    /// Moves the dragged piece (and the rest of a multi-selection) for one frame.
    fn drag_frame(
        &mut self,
        piece: &PieceId,
        screen: Point,
        grab_offset: Point,
    ) -> Option<Point> {
        let candidate = self.viewport.screen_to_world(screen) - grab_offset;
        transforms::drag_to(
            &mut self.project.pieces,
            self.selection.ids(),
            piece,
            candidate,
            &self.snap,
        )
        .and_then(|result| result.target)
    }

    pub fn pointer_up(&mut self) -> PointerOutcome {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => PointerOutcome::None,
            DragState::Armed { piece, .. } | DragState::Dragging { piece, .. }
                if !self.project.contains(&piece) =>
            {
                tracing::warn!("Dropping gesture on removed piece {}", piece);
                PointerOutcome::None
            }
            DragState::Armed { piece, .. } => {
                self.selection.select(piece.clone(), false);
                PointerOutcome::Clicked(piece)
            }
            DragState::Dragging { piece, .. } => {
                let count = if self.selection.len() > 1 && self.selection.contains(&piece) {
                    self.selection.len()
                } else {
                    1
                };
                self.commit("Move pieces");
                PointerOutcome::Moved { piece, count }
            }
            DragState::Panning { .. } => PointerOutcome::PanFinished,
            DragState::BoxSelecting {
                start,
                end,
                additive,
            } => {
                let hits = self
                    .selection
                    .select_in_rect(&self.project, start, end, additive);
                PointerOutcome::BoxSelected(hits)
            }
        }
    }

    /// The pointer left the canvas; finishes whatever gesture was in progress.
    pub fn pointer_leave(&mut self) -> PointerOutcome {
        self.pointer_up()
    }

    /// Zooms around the pointer when Ctrl (or Cmd) is held. Returns whether
    /// the event was consumed.
    pub fn wheel(&mut self, input: WheelInput) -> bool {
        if !input.modifiers.command() {
            return false;
        }
        self.viewport.wheel_zoom(
            input.screen,
            input.delta_y,
            self.config.interaction.wheel_zoom_step,
        );
        true
    }

    /// Connector currently snapped to by the drag in progress.
    pub fn snap_target(&self) -> Option<Point> {
        self.drag.snap_target()
    }

    /// Resolves and applies a keyboard shortcut.
    pub fn handle_key(&mut self, input: KeyInput) -> Option<ShortcutAction> {
        let action = resolve_shortcut(&input, !self.selection.is_empty())?;
        match action {
            ShortcutAction::RotateSelection => {
                self.rotate_selected_step();
            }
            ShortcutAction::DeleteSelection => {
                self.delete_selected();
            }
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::Copy => {
                self.copy_selected();
            }
            ShortcutAction::Paste => {
                self.paste();
            }
            ShortcutAction::SelectAll => self.select_all(),
            ShortcutAction::ClearSelection => self.clear_selection(),
        }
        Some(action)
    }
}
