//! Core-Domänentypen: Pose, Wegpunkte, Sektionen und abgeleitete Routen-Daten.

pub mod instruction;
pub mod path_segment;
pub mod pose;
/// Eingabe-Datenmodelle der Missionsplanung
///
/// - Section: farbige, geordnete Gruppe von Punkten
/// - SectionPoint: Punkt innerhalb einer Sektion (ohne Sektions-Tags)
/// - Waypoint: flacher Wegpunkt mit Sektions-Herkunft
pub mod waypoint;

pub use instruction::{Instruction, InstructionDirection, InstructionKind, PlaybackAction};
pub use path_segment::PathSegment;
pub use pose::Pose;
pub use waypoint::{PointReference, Section, SectionPoint, Waypoint};

use serde::{Deserialize, Serialize};

/// Ergebnis einer Routenberechnung.
///
/// `poses` enthält die Startpose plus eine Pose pro Wegpunkt,
/// `instructions`/`path_segments` können kürzer sein (deckungsgleiche Punkte).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCalculationResult {
    /// TURN/MOVE-Anweisungen in Ausführungsreihenfolge
    pub instructions: Vec<Instruction>,
    /// Zeichenbare Segmente, eines pro Bewegung
    pub path_segments: Vec<PathSegment>,
    /// Posen-Verlauf inklusive Startpose
    pub poses: Vec<Pose>,
}
