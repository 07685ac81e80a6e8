//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use intake::core::models::{Collection, EditorState};
use intake::output::{OperationResult, OutputMode, StateView};

use crate::common::sample_snapshot;

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn state_view_full_serialization() {
    let state = EditorState::from_snapshot(sample_snapshot());
    let view = StateView::full(&state, Some("2026-01-01T00:00:00+00:00".to_string()));
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["contributions"][0]["description"], "Filed prototype sketches");
    assert_eq!(json["contributors"][1]["name"], "Grace");
    assert_eq!(json["saved_at"], "2026-01-01T00:00:00+00:00");
}

#[test]
fn state_view_single_collection_omits_other() {
    let state = EditorState::from_snapshot(sample_snapshot());
    let json = serde_json::to_value(StateView::only(&state, Collection::Contributors)).unwrap();
    assert!(json.get("contributions").is_none());
    assert!(json.get("saved_at").is_none());
    assert_eq!(json["contributors"].as_array().unwrap().len(), 2);
}

#[test]
fn state_view_human_marks_blank_fields() {
    let state = EditorState::new().append(Collection::Contributors);
    let text = StateView::only(&state, Collection::Contributors).to_human();
    assert!(text.contains("Contributor 1"));
    assert!(text.contains("Name:         -"));
}

#[test]
fn state_view_human_empty_lists() {
    let text = StateView::full(&EditorState::new(), None).to_human();
    assert!(text.contains("Contributions:\n  (none)"));
    assert!(text.contains("Contributors:\n  (none)"));
    assert!(!text.contains("Last saved"));
}

#[test]
fn operation_result_serialization() {
    let json = serde_json::to_value(OperationResult::ok("Draft cleared.")).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Draft cleared.");
}

#[test]
fn state_view_human_full_layout() {
    let state = EditorState::from_snapshot(sample_snapshot());
    let text = StateView::full(&state, Some("2026-01-01T00:00:00+00:00".to_string())).to_human();
    assert_eq!(
        text,
        "Contributions:\n\
         \x20 Contribution 1\n\
         \x20   Filed prototype sketches\n\
         \x20 Contribution 2\n\
         \x20   Ran the bench tests\n\
         \n\
         Contributors:\n\
         \x20 Contributor 1\n\
         \x20   Name:         Ada\n\
         \x20   Expertise:    Mathematics\n\
         \x20   Contribution: Engine notes\n\
         \x20 Contributor 2\n\
         \x20   Name:         Grace\n\
         \x20   Expertise:    Compilers\n\
         \x20   Contribution: Toolchain\n\
         \n\
         Last saved: 2026-01-01T00:00:00+00:00\n"
    );
}
