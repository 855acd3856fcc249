//! Geteilte Bausteine für layer-übergreifende Verträge.
//!
//! Enthält Geometrie-Primitive und Konfiguration, die von `route`
//! und `mission` gemeinsam genutzt werden.

pub mod geometry;
pub mod options;

pub use geometry::{
    deg_to_rad, normalize_angle, rad_to_deg, round_to_hundredths, shortest_turn_angle, FieldScale,
};
pub use options::PlannerOptions;
pub use options::{
    DEFAULT_SECTION_COLOR, DEGENERATE_DISTANCE_PX, TURN_THRESHOLD_DEG, UNGROUPED_SECTION_KEY,
};
