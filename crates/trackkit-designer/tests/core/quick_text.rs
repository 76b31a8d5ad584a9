use trackkit_designer::model::{PieceKind, Point};
use trackkit_designer::quick_text::{parse_piece, parse_point};
use trackkit_designer::{DesignerError, DesignerState};

#[test]
fn test_curve_lowercase() {
    assert_eq!(
        parse_piece("r50-90").unwrap(),
        PieceKind::Curve {
            radius_cm: 50.0,
            angle_deg: 90.0
        }
    );
}

#[test]
fn test_bare_letter_rejected() {
    let err = parse_piece("L").unwrap_err();
    assert!(matches!(err, DesignerError::InvalidQuickText { .. }));
    assert!(err.to_string().contains("L100 or R50-90"));
}

#[test]
fn test_whitespace_trimmed() {
    assert_eq!(
        parse_piece("\t L100 \n").unwrap(),
        PieceKind::Straight { length_cm: 100.0 }
    );
}

#[test]
fn test_malformed_input_leaves_state_unchanged() {
    let mut state = DesignerState::new();
    let history_len = state.history().len();

    assert!(state.add_quick_text("R50").is_err());
    assert!(state.project().is_empty());
    assert_eq!(state.history().len(), history_len);
}

#[test]
fn test_quick_text_placement() {
    let mut state = DesignerState::new();
    let straight = state.add_quick_text("L37.5").unwrap();
    let curve = state.add_quick_text("R60-45").unwrap();

    let project = state.project();
    assert_eq!(project.piece(&straight).unwrap().position, Point::new(100.0, 100.0));
    assert_eq!(project.piece(&curve).unwrap().position, Point::new(200.0, 100.0));
    assert_eq!(project.piece(&curve).unwrap().canonical_key(), "R60-45");
}

#[test]
fn test_boundary_point_text() {
    assert_eq!(parse_point("100,50").unwrap(), Point::new(100.0, 50.0));
    assert!(matches!(
        parse_point("100;50"),
        Err(DesignerError::InvalidPointText { .. })
    ));

    let mut state = DesignerState::new();
    state.add_boundary_point_text("0, 0").unwrap();
    state.add_boundary_point_text("120, 0").unwrap();
    let boundary = state.project().boundary.as_ref().unwrap();
    assert_eq!(boundary.points.len(), 2);
    assert!((boundary.perimeter_cm() - 120.0).abs() < 1e-9);
}
