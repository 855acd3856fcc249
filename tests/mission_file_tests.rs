use wro_mission_planner::{
    load_mission_file, parse_mission, save_mission_file, write_mission, PointReference,
};

#[test]
fn test_parse_fixture_defaults() {
    let mission = parse_mission(include_str!("fixtures/simple_mission.json"))
        .expect("Fixture muss parsen");

    assert_eq!(mission.name, "Einfache Testmission");
    assert_eq!(mission.sections.len(), 4);
    assert_eq!(mission.point_count(), 5);

    let p1 = &mission.sections[0].points[0];
    assert!(!p1.reverse);
    assert_eq!(p1.reference, PointReference::Center);
    assert_eq!(mission.sections[0].points[1].reference, PointReference::Front);
    assert!(mission.sections[1].points[1].reverse);
    assert!(mission.sections[2].points.is_empty());
    assert_eq!(mission.sections[3].color, None);
}

#[test]
fn test_json_roundtrip_erhaelt_mission() {
    let parsed = parse_mission(include_str!("fixtures/simple_mission.json"))
        .expect("Initiales Parsing fehlgeschlagen");
    let written = write_mission(&parsed).expect("JSON-Export fehlgeschlagen");
    let reparsed = parse_mission(&written).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(parsed, reparsed);
}

#[test]
fn test_datei_speichern_und_laden() {
    let mission = parse_mission(include_str!("fixtures/simple_mission.json"))
        .expect("Fixture muss parsen");
    let path = std::env::temp_dir().join(format!(
        "wro_mission_planner_test_{}.json",
        std::process::id()
    ));

    save_mission_file(&path, &mission).expect("Speichern fehlgeschlagen");
    let loaded = load_mission_file(&path).expect("Laden fehlgeschlagen");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, mission);
}

#[test]
fn test_fehlende_datei_liefert_fehler_mit_pfad() {
    let err = load_mission_file(std::path::Path::new("/nonexistent/mission.json"))
        .expect_err("Fehler erwartet");
    assert!(format!("{:#}", err).contains("/nonexistent/mission.json"));
}

#[test]
fn test_fehlende_sections_liste() {
    let err = parse_mission(r#"{"name": "x", "initialPose": {"x": 0, "y": 0, "theta": 0}}"#)
        .expect_err("Import ohne sections muss fehlschlagen");
    assert!(err.to_string().contains("sections"));
}
