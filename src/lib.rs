//! WRO Mission Planner Library.
//! Routen-Kern als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod mission;
pub mod route;
pub mod shared;

pub use crate::core::{
    Instruction, InstructionDirection, InstructionKind, PathSegment, PlaybackAction,
    PointReference, Pose, RouteCalculationResult, Section, SectionPoint, Waypoint,
};
pub use mission::{load_mission_file, parse_mission, save_mission_file, write_mission, Mission};
pub use route::{
    calculate_final_pose, calculate_route_from_sections, calculate_route_instructions,
    flatten_sections_to_waypoints, generate_playback_actions, generate_playback_from_sections,
};
pub use shared::{FieldScale, PlannerOptions};
