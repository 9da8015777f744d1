//! Integration tests for term/period conflict detection

use course_planner::core::calendar::TimeModel;
use course_planner::core::conflicts::ConflictDetector;
use course_planner::core::planner::load_offerings;
use std::path::PathBuf;

fn offerings_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/offerings.json")
}

#[test]
fn sample_offerings_have_two_conflicts() {
    let offerings = load_offerings(offerings_path()).expect("Failed to load offerings");
    assert_eq!(offerings.len(), 8);

    let model = TimeModel::standard();
    let conflicts = ConflictDetector::new(&model)
        .detect(&offerings)
        .expect("Sample slots are all known");

    assert_eq!(conflicts.len(), 2);

    assert_eq!(conflicts[0].offering_id1, 1);
    assert_eq!(conflicts[0].offering_id2, 2);
    assert_eq!(conflicts[0].reason, "Both scheduled for Block A");

    assert_eq!(conflicts[1].offering_id1, 3);
    assert_eq!(conflicts[1].offering_id2, 4);
    assert_eq!(conflicts[1].reason, "Both scheduled for Skinny B1");
}

#[test]
fn conflicts_for_single_offering() {
    let offerings = load_offerings(offerings_path()).expect("Failed to load offerings");
    let model = TimeModel::standard();
    let detector = ConflictDetector::new(&model);

    let for_band = detector
        .conflicts_for(4, &offerings)
        .expect("Sample slots are all known");
    assert_eq!(for_band.len(), 1);
    assert!(for_band[0].involves(3));

    let for_drawing = detector
        .conflicts_for(8, &offerings)
        .expect("Sample slots are all known");
    assert!(for_drawing.is_empty());
}

#[test]
fn conflicts_serialize_camel_case() {
    let offerings = load_offerings(offerings_path()).expect("Failed to load offerings");
    let model = TimeModel::standard();
    let conflicts = ConflictDetector::new(&model)
        .detect(&offerings)
        .expect("Sample slots are all known");

    let json = serde_json::to_value(&conflicts).expect("Failed to serialize");
    assert_eq!(json[0]["offeringId1"], 1);
    assert_eq!(json[0]["name2"], "Spanish 2");
}
