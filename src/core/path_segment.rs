//! Zeichenbares Routen-Segment.

use serde::{Deserialize, Serialize};

/// Gerades Segment zwischen zwei Roboterpositionen.
/// Gefärbt nach der Sektion des Ziel-Wegpunkts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Sektionsfarbe des Ziels (grau, falls keine)
    pub color: String,
    pub section_id: Option<String>,
    pub waypoint_id: String,
    /// Segment wird rückwärts gefahren
    pub is_reverse: bool,
}

impl PathSegment {
    /// Länge des Segments in Pixeln
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}
