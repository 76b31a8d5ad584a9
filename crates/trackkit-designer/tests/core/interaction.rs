use trackkit_designer::interaction::exceeds_drag_threshold;
use trackkit_designer::keyboard::{Key, KeyInput};
use trackkit_designer::model::{Piece, PieceId, PieceKind, Point};
use trackkit_designer::{
    DesignerState, DragState, Modifiers, PointerButton, PointerInput, PointerOutcome, WheelInput,
};

/// Two straights on the default view (1 px per cm): A at the origin and B
/// 300 cm to its right.
fn two_straights() -> (DesignerState, PieceId, PieceId) {
    let mut state = DesignerState::new();
    let a = state.add_piece(Piece::new(
        PieceKind::Straight { length_cm: 100.0 },
        Point::new(0.0, 0.0),
        0.0,
    ));
    let b = state.add_piece(Piece::new(
        PieceKind::Straight { length_cm: 100.0 },
        Point::new(300.0, 0.0),
        0.0,
    ));
    (state, a, b)
}

fn press_at(state: &DesignerState, world: Point) -> PointerInput {
    let screen = state.viewport.world_to_screen(world);
    PointerInput::primary(screen.x, screen.y)
}

fn move_to(state: &mut DesignerState, world: Point) {
    let screen = state.viewport.world_to_screen(world);
    state.pointer_move(screen);
}

fn assert_near(actual: Point, expected: Point) {
    assert!(
        actual.distance_to(&expected) < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_drag_threshold() {
    let press = Point::new(10.0, 10.0);
    assert!(!exceeds_drag_threshold(press, Point::new(13.0, 13.0), 5.0));
    assert!(exceeds_drag_threshold(press, Point::new(13.0, 14.0), 5.0));
    assert!(exceeds_drag_threshold(press, Point::new(20.0, 10.0), 5.0));
}

#[test]
fn test_click_selects_without_history() {
    let (mut state, a, _) = two_straights();
    let history_len = state.history().len();

    let input = press_at(&state, Point::new(50.0, 0.0));
    assert_eq!(state.pointer_down(input), PointerOutcome::None);
    assert!(matches!(state.drag_state(), DragState::Armed { .. }));

    assert_eq!(state.pointer_up(), PointerOutcome::Clicked(a.clone()));
    assert!(state.selection().contains(&a));
    assert_eq!(state.selection().len(), 1);
    assert_eq!(state.history().len(), history_len);
    assert!(state.drag_state().is_idle());
}

#[test]
fn test_small_move_is_still_a_click() {
    let (mut state, a, _) = two_straights();
    let history_len = state.history().len();

    let input = press_at(&state, Point::new(50.0, 0.0));
    state.pointer_down(input);
    state.pointer_move(Point::new(input.screen.x + 3.0, input.screen.y));
    assert!(!state.drag_state().is_dragging());

    assert_eq!(state.pointer_up(), PointerOutcome::Clicked(a.clone()));
    assert_eq!(state.project().piece(&a).unwrap().position, Point::new(0.0, 0.0));
    assert_eq!(state.history().len(), history_len);
}

#[test]
fn test_drag_snaps_and_records_once() {
    let (mut state, a, b) = two_straights();
    let history_len = state.history().len();

    // Grab B 50 cm along its length and drop its start near A's end.
    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(250.0, 40.0));
    assert!(state.drag_state().is_dragging());
    assert_eq!(state.snap_target(), None);

    move_to(&mut state, Point::new(160.0, 5.0));
    assert_eq!(state.snap_target(), Some(Point::new(100.0, 0.0)));
    assert_eq!(state.history().len(), history_len);

    let outcome = state.pointer_up();
    assert_eq!(
        outcome,
        PointerOutcome::Moved {
            piece: b.clone(),
            count: 1
        }
    );
    assert_near(state.project().piece(&b).unwrap().position, Point::new(100.0, 0.0));
    assert_eq!(state.project().piece(&a).unwrap().position, Point::new(0.0, 0.0));
    assert_eq!(state.history().len(), history_len + 1);
    assert_eq!(state.snap_target(), None);

    // A single undo restores the pre-drag layout.
    state.undo();
    assert_eq!(state.project().piece(&b).unwrap().position, Point::new(300.0, 0.0));
}

#[test]
fn test_drag_without_snap() {
    let (mut state, _, b) = two_straights();
    state.set_snap_enabled(false);

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(160.0, 5.0));
    assert_eq!(state.snap_target(), None);
    state.pointer_up();

    assert_near(state.project().piece(&b).unwrap().position, Point::new(110.0, 5.0));
}

#[test]
fn test_dragging_unselected_piece_selects_only_it() {
    let (mut state, a, b) = two_straights();
    state.select_piece(&a, false);

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(350.0, 200.0));
    state.pointer_up();

    assert!(state.selection().contains(&b));
    assert!(!state.selection().contains(&a));
    assert_eq!(state.project().piece(&a).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn test_drag_moves_whole_selection() {
    let (mut state, a, b) = two_straights();
    state.select_all();

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(350.0, -100.0));
    move_to(&mut state, Point::new(350.0, -200.0));
    let outcome = state.pointer_up();

    assert_eq!(
        outcome,
        PointerOutcome::Moved {
            piece: b.clone(),
            count: 2
        }
    );
    assert_near(state.project().piece(&a).unwrap().position, Point::new(0.0, -200.0));
    assert_near(state.project().piece(&b).unwrap().position, Point::new(300.0, -200.0));
    assert_eq!(state.selection().len(), 2);
}

#[test]
fn test_ctrl_click_toggles_without_drag() {
    let (mut state, a, b) = two_straights();
    state.select_piece(&a, false);

    let input = press_at(&state, Point::new(350.0, 0.0)).with_modifiers(Modifiers::ctrl());
    assert_eq!(state.pointer_down(input), PointerOutcome::Toggled(b.clone()));
    assert_eq!(state.selection().len(), 2);

    // Moving after a toggle press does not drag.
    move_to(&mut state, Point::new(350.0, 300.0));
    assert_eq!(state.pointer_up(), PointerOutcome::None);
    assert_eq!(state.project().piece(&b).unwrap().position, Point::new(300.0, 0.0));

    // Second toggle removes it again.
    state.pointer_down(input);
    state.pointer_up();
    assert!(!state.selection().contains(&b));
    assert!(state.selection().contains(&a));
}

#[test]
fn test_box_select_from_empty_area() {
    let (mut state, a, b) = two_straights();

    let input = press_at(&state, Point::new(-40.0, 60.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(350.0, -60.0));
    assert_eq!(
        state.drag_state().selection_rect(),
        Some((Point::new(-40.0, 60.0), Point::new(350.0, -60.0)))
    );

    assert_eq!(state.pointer_up(), PointerOutcome::BoxSelected(2));
    assert!(state.selection().contains(&a));
    assert!(state.selection().contains(&b));
}

#[test]
fn test_press_on_empty_area_clears_selection() {
    let (mut state, a, _) = two_straights();
    state.select_piece(&a, false);

    let input = press_at(&state, Point::new(600.0, 400.0));
    state.pointer_down(input);
    assert!(state.selection().is_empty());
    assert_eq!(state.pointer_up(), PointerOutcome::BoxSelected(0));
}

#[test]
fn test_ctrl_box_select_is_additive() {
    let (mut state, a, b) = two_straights();
    state.select_piece(&a, false);

    let input = press_at(&state, Point::new(250.0, 60.0)).with_modifiers(Modifiers::ctrl());
    state.pointer_down(input);
    move_to(&mut state, Point::new(450.0, -60.0));
    assert_eq!(state.pointer_up(), PointerOutcome::BoxSelected(1));
    assert!(state.selection().contains(&a));
    assert!(state.selection().contains(&b));
}

#[test]
fn test_middle_button_pans() {
    let (mut state, _, _) = two_straights();
    let history_len = state.history().len();
    let before = state.viewport.window();

    let input = PointerInput {
        screen: Point::new(400.0, 300.0),
        button: PointerButton::Middle,
        modifiers: Modifiers::NONE,
    };
    state.pointer_down(input);
    state.pointer_move(Point::new(500.0, 300.0));
    assert_eq!(state.pointer_up(), PointerOutcome::PanFinished);

    let after = state.viewport.window();
    assert!((after.x - (before.x - 100.0)).abs() < 1e-9);
    assert_eq!(after.y, before.y);
    assert_eq!(state.history().len(), history_len);
}

#[test]
fn test_wheel_requires_command_modifier() {
    let mut state = DesignerState::new();
    let screen = Point::new(400.0, 300.0);

    let plain = WheelInput {
        screen,
        delta_y: -1.0,
        modifiers: Modifiers::NONE,
    };
    assert!(!state.wheel(plain));
    assert!((state.viewport.zoom() - 1.0).abs() < 1e-9);

    let world_before = state.viewport.screen_to_world(screen);
    let ctrl = WheelInput {
        modifiers: Modifiers::ctrl(),
        ..plain
    };
    assert!(state.wheel(ctrl));
    assert!((state.viewport.zoom() - 1.1).abs() < 1e-9);
    assert_near(state.viewport.screen_to_world(screen), world_before);
}

#[test]
fn test_pointer_leave_commits_drag() {
    let (mut state, _, b) = two_straights();
    let history_len = state.history().len();

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(350.0, 200.0));

    assert!(matches!(state.pointer_leave(), PointerOutcome::Moved { .. }));
    assert!(state.drag_state().is_idle());
    assert_eq!(state.history().len(), history_len + 1);
    assert_near(state.project().piece(&b).unwrap().position, Point::new(300.0, 200.0));
}

#[test]
fn test_pointer_up_when_idle() {
    let mut state = DesignerState::new();
    assert_eq!(state.pointer_up(), PointerOutcome::None);
    state.pointer_move(Point::new(10.0, 10.0));
    assert!(state.drag_state().is_idle());
}

#[test]
fn test_delete_during_drag_records_nothing_on_release() {
    let (mut state, a, b) = two_straights();

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(350.0, 40.0));
    assert!(state.drag_state().is_dragging());

    state.handle_key(KeyInput::new(Key::Delete, Modifiers::NONE));
    assert!(!state.project().contains(&b));
    assert!(state.drag_state().is_idle());
    let history_len = state.history().len();

    assert_eq!(state.pointer_up(), PointerOutcome::None);
    assert_eq!(state.history().len(), history_len);

    // Undo restores the deleted piece, not a phantom move.
    assert!(state.undo());
    assert!(state.project().contains(&b));
    assert!(state.project().contains(&a));
}

#[test]
fn test_delete_while_armed_does_not_select_removed_piece() {
    let (mut state, _, b) = two_straights();

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    assert_eq!(state.delete_pieces(&[b.clone()]), 1);

    assert_eq!(state.pointer_up(), PointerOutcome::None);
    assert!(state.selection().is_empty());
}

#[test]
fn test_deleting_other_piece_keeps_drag() {
    let (mut state, a, b) = two_straights();

    let input = press_at(&state, Point::new(350.0, 0.0));
    state.pointer_down(input);
    move_to(&mut state, Point::new(350.0, 200.0));
    state.delete_pieces(&[a]);
    assert!(state.drag_state().is_dragging());

    assert!(matches!(state.pointer_up(), PointerOutcome::Moved { .. }));
    assert_near(state.project().piece(&b).unwrap().position, Point::new(300.0, 200.0));
}
