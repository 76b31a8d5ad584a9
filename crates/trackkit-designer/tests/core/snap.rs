use trackkit_designer::model::{Piece, PieceKind, Point};
use trackkit_designer::snap::{SnapAnchor, SnapEngine};

fn straight(x: f64, y: f64, rotation: f64) -> Piece {
    Piece::new(PieceKind::Straight { length_cm: 100.0 }, Point::new(x, y), rotation)
}

#[test]
fn test_snaps_just_inside_threshold() {
    let fixed = straight(0.0, 0.0, 0.0);
    let moving = straight(500.0, 500.0, 90.0);
    let pieces = vec![fixed, moving.clone()];
    let engine = SnapEngine::new(15.0);

    let result = engine.find_snap(&moving, Point::new(100.0 + 15.0 - 1e-6, 0.0), &pieces);
    assert!(result.is_snapped());
    assert_eq!(result.position, Point::new(100.0, 0.0));
    assert_eq!(result.target, Some(Point::new(100.0, 0.0)));
    assert_eq!(result.anchor, Some(SnapAnchor::Start));
}

#[test]
fn test_no_snap_just_outside_threshold() {
    let fixed = straight(0.0, 0.0, 0.0);
    let moving = straight(500.0, 500.0, 90.0);
    let pieces = vec![fixed, moving.clone()];
    let engine = SnapEngine::new(15.0);

    let candidate = Point::new(100.0 + 15.0 + 1e-6, 0.0);
    let result = engine.find_snap(&moving, candidate, &pieces);
    assert!(!result.is_snapped());
    assert_eq!(result.position, candidate);
    assert_eq!(result.target, None);
}

#[test]
fn test_end_connector_lands_on_target() {
    // Moving piece points along +x, so its end is 100cm right of its start.
    let fixed = straight(0.0, 0.0, 90.0);
    let moving = straight(500.0, 500.0, 0.0);
    let pieces = vec![fixed, moving.clone()];

    let result = SnapEngine::default().find_snap(&moving, Point::new(-105.0, 4.0), &pieces);
    assert_eq!(result.anchor, Some(SnapAnchor::End));
    assert!((result.position.x + 100.0).abs() < 1e-9);
    assert!(result.position.y.abs() < 1e-9);

    let mut placed = moving.clone();
    placed.position = result.position;
    assert!(placed.end_point().distance_to(&Point::new(0.0, 0.0)) < 1e-9);
    assert_eq!(placed.rotation_deg, moving.rotation_deg);
}

#[test]
fn test_curve_end_snap() {
    let fixed = straight(0.0, 0.0, 0.0);
    let moving = Piece::new(
        PieceKind::Curve {
            radius_cm: 50.0,
            angle_deg: 90.0,
        },
        Point::new(400.0, 400.0),
        0.0,
    );
    let pieces = vec![fixed, moving.clone()];

    // The curve's end sits at start + (-50, 50); aim it at the straight's start.
    let result = SnapEngine::default().find_snap(&moving, Point::new(52.0, -47.0), &pieces);
    assert_eq!(result.anchor, Some(SnapAnchor::End));
    let mut placed = moving.clone();
    placed.position = result.position;
    assert!(placed.end_point().distance_to(&Point::new(0.0, 0.0)) < 1e-9);
}

#[test]
fn test_ties_resolve_in_piece_order() {
    let a = straight(0.0, 0.0, 0.0); // end at (100, 0)
    let b = straight(120.0, 0.0, 90.0); // start at (120, 0)
    let moving = straight(500.0, 500.0, 45.0);
    let candidate = Point::new(110.0, 0.0);
    let engine = SnapEngine::default();

    let forward = vec![a.clone(), b.clone(), moving.clone()];
    let result = engine.find_snap(&moving, candidate, &forward);
    assert_eq!(result.target, Some(Point::new(100.0, 0.0)));

    let reversed = vec![b, a, moving.clone()];
    let result = engine.find_snap(&moving, candidate, &reversed);
    assert_eq!(result.target, Some(Point::new(120.0, 0.0)));
}

#[test]
fn test_closest_target_wins() {
    let a = straight(0.0, 0.0, 0.0); // end at (100, 0)
    let b = straight(108.0, 0.0, 90.0); // start at (108, 0)
    let moving = straight(500.0, 500.0, 45.0);
    let pieces = vec![a, b, moving.clone()];

    let result = SnapEngine::default().find_snap(&moving, Point::new(106.0, 0.0), &pieces);
    assert_eq!(result.target, Some(Point::new(108.0, 0.0)));
}

#[test]
fn test_ignores_own_connectors() {
    let moving = straight(0.0, 0.0, 0.0);
    let pieces = vec![moving.clone()];
    let result = SnapEngine::default().find_snap(&moving, Point::new(3.0, 0.0), &pieces);
    assert!(!result.is_snapped());
}

#[test]
fn test_does_not_mutate_pieces() {
    let pieces = vec![straight(0.0, 0.0, 0.0), straight(300.0, 0.0, 0.0)];
    let before = pieces.clone();
    let _ = SnapEngine::default().find_snap(&pieces[1], Point::new(101.0, 1.0), &pieces);
    assert_eq!(pieces, before);
}
