use tempfile::tempdir;
use trackkit_core::LengthUnit;
use trackkit_designer::model::{PieceKind, Point};
use trackkit_designer::serialization::ProjectDocument;
use trackkit_designer::{DesignerError, DesignerState};

const LEGACY_DOCUMENT: &str = r##"{
  "id": "proj-1",
  "name": "Club layout",
  "version": "1.0",
  "pieces": [
    { "id": 1712345678901, "type": "straight", "params": { "length": 100 }, "x": 0, "y": 0, "rotation": 0 },
    { "id": "c-2", "type": "curve", "params": { "radius": 50, "angle": 90 }, "x": 100, "y": 0, "rotation": 90 }
  ],
  "boundary": { "unit": "px", "points": [ { "idx": 0, "x": 0, "y": 0 }, { "idx": 1, "x": 400, "y": 0 } ], "closed": false },
  "skin": { "trackWidthCm": 40, "color": "#555" }
}"##;

#[test]
fn test_decode_legacy_document() {
    let project = ProjectDocument::from_json(LEGACY_DOCUMENT)
        .unwrap()
        .into_project()
        .unwrap();

    assert_eq!(project.name, "Club layout");
    assert_eq!(project.id.as_deref(), Some("proj-1"));
    assert_eq!(project.pieces.len(), 2);
    assert_eq!(project.pieces[0].id.as_str(), "1712345678901");
    assert_eq!(
        project.pieces[1].kind,
        PieceKind::Curve {
            radius_cm: 50.0,
            angle_deg: 90.0
        }
    );
    assert_eq!(project.pieces[1].position, Point::new(100.0, 0.0));
    assert_eq!(project.skin.track_width_cm, 40.0);

    let boundary = project.boundary.as_ref().unwrap();
    assert_eq!(boundary.unit, LengthUnit::Px);
    assert!((boundary.perimeter_cm() - 200.0).abs() < 1e-9);
}

#[test]
fn test_ids_written_as_strings() {
    let document = ProjectDocument::from_json(LEGACY_DOCUMENT).unwrap();
    let json = document.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["pieces"][0]["id"], "1712345678901");
    assert_eq!(value["pieces"][0]["type"], "straight");
    assert_eq!(value["pieces"][0]["params"]["length"], 100.0);
    assert!(value["pieces"][0]["params"].get("radius").is_none());
    assert_eq!(value["skin"]["trackWidthCm"], 40.0);
}

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let mut state = DesignerState::new();
    state.add_quick_text("L100").unwrap();
    state.add_quick_text("R50-90").unwrap();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.display_name(), "layout");

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.project().pieces, state.project().pieces);
    assert_eq!(loaded.project().skin, state.project().skin);
    assert_eq!(loaded.current_file_path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_load_resets_selection_and_history() {
    let mut state = DesignerState::new();
    let id = state.add_quick_text("L50").unwrap();
    state.select_piece(&id, false);
    assert!(state.can_undo());

    let document = ProjectDocument::from_json(LEGACY_DOCUMENT).unwrap();
    state.load_document(document).unwrap();

    assert!(state.selection().is_empty());
    assert!(!state.can_undo());
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.project().pieces.len(), 2);
}

#[test]
fn test_bad_document_keeps_current_project() {
    let mut state = DesignerState::new();
    state.add_quick_text("L50").unwrap();

    let bad = r#"{"name":"x","version":"1.0","pieces":[{"id":"a","type":"turnout","x":0,"y":0,"rotation":0}]}"#;
    let err = state
        .load_document(ProjectDocument::from_json(bad).unwrap())
        .unwrap_err();
    assert!(matches!(err, DesignerError::UnknownPieceType { .. }));
    assert_eq!(state.project().pieces.len(), 1);

    assert!(matches!(
        ProjectDocument::from_json("{ not json"),
        Err(DesignerError::Document(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let mut state = DesignerState::new();
    assert!(state.load_from_file(dir.path().join("absent.json")).is_err());
}
