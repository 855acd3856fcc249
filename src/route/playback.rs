//! Projektion der Anweisungen auf Rotate/Move-Aktionen für die Animation.

use super::calculator::calculate_route_instructions;
use crate::core::{Instruction, InstructionKind, PlaybackAction, Pose, Waypoint};

/// Berechnet die Route und wandelt jede Anweisung in eine Playback-Aktion um.
///
/// Reihenfolge und Sektions-/Wegpunkt-Tags bleiben erhalten.
pub fn generate_playback_actions(
    initial_pose: &Pose,
    waypoints: &[Waypoint],
    pixels_per_unit: Option<f64>,
) -> Vec<PlaybackAction> {
    let route = calculate_route_instructions(initial_pose, waypoints, pixels_per_unit);
    route.instructions.iter().map(playback_action).collect()
}

/// TURN → Rotate, MOVE → Move (Distanz negativ bei Rückwärtsfahrt).
pub fn playback_action(instruction: &Instruction) -> PlaybackAction {
    match instruction.kind {
        InstructionKind::Turn => PlaybackAction::Rotate {
            angle: instruction.value,
            section_id: instruction.section_id.clone(),
            waypoint_id: instruction.waypoint_id.clone(),
        },
        InstructionKind::Move => {
            let is_reverse = instruction.is_reverse_move();
            let distance = if is_reverse {
                -instruction.value
            } else {
                instruction.value
            };
            PlaybackAction::Move {
                distance,
                is_reverse,
                section_id: instruction.section_id.clone(),
                waypoint_id: instruction.waypoint_id.clone(),
            }
        }
    }
}
