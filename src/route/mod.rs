//! Routen-Kern: Flattening, Simulation, Playback und Auswertung.
//!
//! Schichtung: `flatten` → `calculator` → `playback`/`report`.
//! Die `*_from_sections`-Funktionen sind reine Komposition ohne eigene Logik.

pub mod calculator;
pub mod flatten;
pub mod playback;
pub mod report;

pub use calculator::{calculate_final_pose, calculate_route_instructions};
pub use flatten::{flatten_sections_to_waypoints, flatten_sections_with_color};
pub use playback::{generate_playback_actions, playback_action};
pub use report::{
    calculate_total_path_length, calculate_total_rotation, format_instruction,
    group_instructions_by_section,
};

use crate::core::{PlaybackAction, Pose, RouteCalculationResult, Section};

/// Flacht die Sektionen ab und berechnet die Route.
pub fn calculate_route_from_sections(
    initial_pose: &Pose,
    sections: &[Section],
    pixels_per_unit: Option<f64>,
) -> RouteCalculationResult {
    let waypoints = flatten_sections_to_waypoints(sections);
    calculate_route_instructions(initial_pose, &waypoints, pixels_per_unit)
}

/// Flacht die Sektionen ab und erzeugt die Playback-Aktionen.
pub fn generate_playback_from_sections(
    initial_pose: &Pose,
    sections: &[Section],
    pixels_per_unit: Option<f64>,
) -> Vec<PlaybackAction> {
    let waypoints = flatten_sections_to_waypoints(sections);
    generate_playback_actions(initial_pose, &waypoints, pixels_per_unit)
}
