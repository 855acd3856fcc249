//! Integrationstests für die Routenberechnung über die öffentliche API:
//! - Missions-Fixture → Anweisungen, Segmente, Posen
//! - Gruppierung und Summen
//! - Playback-Aktionen

use approx::assert_relative_eq;
use wro_mission_planner::route::{
    calculate_total_path_length, calculate_total_rotation, format_instruction,
    group_instructions_by_section,
};
use wro_mission_planner::{
    calculate_final_pose, flatten_sections_to_waypoints, parse_mission, InstructionDirection,
    InstructionKind, PlannerOptions, PlaybackAction,
};

fn fixture_mission() -> wro_mission_planner::Mission {
    parse_mission(include_str!("fixtures/simple_mission.json")).expect("Fixture muss parsen")
}

#[test]
fn test_fixture_route_anweisungen() {
    let mission = fixture_mission();
    let route = mission.route(&PlannerOptions::default());

    let summary: Vec<(InstructionKind, InstructionDirection, &str)> = route
        .instructions
        .iter()
        .map(|i| (i.kind, i.direction, i.waypoint_id.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (InstructionKind::Move, InstructionDirection::Forward, "p1"),
            (InstructionKind::Turn, InstructionDirection::Right, "p2"),
            (InstructionKind::Move, InstructionDirection::Forward, "p2"),
            (InstructionKind::Move, InstructionDirection::Reverse, "p4"),
            (InstructionKind::Turn, InstructionDirection::Right, "p5"),
            (InstructionKind::Move, InstructionDirection::Forward, "p5"),
        ]
    );

    // 1181 px Canvas auf 2362 mm → 5 px/cm
    assert_relative_eq!(route.instructions[0].value, 100.0);
    assert_relative_eq!(route.instructions[1].value, 90.0);
    assert_relative_eq!(route.instructions[2].value, 50.0);
    assert_relative_eq!(route.instructions[3].value, 50.0);

    assert_eq!(route.poses.len(), mission.point_count() + 1);
    assert_eq!(route.path_segments.len(), 4);
    assert_eq!(route.path_segments[3].color, "#808080");
}

#[test]
fn test_fixture_endpose_und_summen() {
    let mission = fixture_mission();
    let route = mission.route(&PlannerOptions::default());
    let waypoints = flatten_sections_to_waypoints(&mission.sections);

    let final_pose = calculate_final_pose(&mission.start_pose(), &waypoints);
    assert_eq!(Some(&final_pose), route.poses.last());
    assert_eq!((final_pose.x, final_pose.y), (0.0, 0.0));

    assert_relative_eq!(calculate_total_path_length(&route.instructions), 300.0);
    assert_relative_eq!(calculate_total_rotation(&route.instructions), 180.0);
}

#[test]
fn test_fixture_gruppierung_und_text() {
    let route = fixture_mission().route(&PlannerOptions::default());
    let groups = group_instructions_by_section(&route.instructions);

    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["start", "back", "home"]);

    let lines: Vec<String> = groups["start"].iter().map(format_instruction).collect();
    assert_eq!(
        lines,
        vec!["MOVE FORWARD 100.0 cm", "TURN RIGHT 90.0°", "MOVE FORWARD 50.0 cm"]
    );
    assert_eq!(
        format_instruction(&groups["back"][0]),
        "MOVE REVERSE 50.0 cm"
    );
}

#[test]
fn test_fixture_playback() {
    let mission = fixture_mission();
    let actions = mission.playback(&PlannerOptions::default());

    assert_eq!(actions.len(), 6);
    match &actions[3] {
        PlaybackAction::Move {
            distance,
            is_reverse,
            section_id,
            waypoint_id,
        } => {
            assert_relative_eq!(*distance, -50.0);
            assert!(*is_reverse);
            assert_eq!(section_id.as_deref(), Some("back"));
            assert_eq!(waypoint_id, "p4");
        }
        other => panic!("Move erwartet, erhalten: {:?}", other),
    }
    assert!(matches!(actions[1], PlaybackAction::Rotate { angle, .. } if angle > 0.0));
}

#[test]
fn test_anweisungen_als_json() {
    let route = fixture_mission().route(&PlannerOptions::default());
    let json = serde_json::to_value(&route.instructions[1]).expect("Serialisierung erwartet");

    assert_eq!(json["type"], "TURN");
    assert_eq!(json["direction"], "right");
    assert_eq!(json["sectionId"], "start");
    assert_eq!(json["waypointId"], "p2");

    let action = serde_json::to_value(&fixture_mission().playback(&PlannerOptions::default())[3])
        .expect("Serialisierung erwartet");
    assert_eq!(action["type"], "move");
    assert_eq!(action["isReverse"], true);
}
