//! Wandelt Sektionen in eine flache Wegpunkt-Folge um.

use crate::core::{Section, Waypoint};
use crate::shared::DEFAULT_SECTION_COLOR;

/// Verkettet alle Sektions-Punkte zu einer globalen Ausführungsreihenfolge.
///
/// Sektionen in gegebener Reihenfolge, innerhalb jeder Sektion die Punkte
/// in gegebener Reihenfolge. Jeder Wegpunkt erhält Sektions-ID und -Farbe
/// (grau, wenn die Sektion keine Farbe hat). Sektionen ohne Punkte tragen nichts bei.
pub fn flatten_sections_to_waypoints(sections: &[Section]) -> Vec<Waypoint> {
    flatten_sections_with_color(sections, DEFAULT_SECTION_COLOR)
}

/// Wie [`flatten_sections_to_waypoints`], mit eigener Fallback-Farbe für Sektionen ohne Farbe.
pub fn flatten_sections_with_color(sections: &[Section], default_color: &str) -> Vec<Waypoint> {
    let total: usize = sections.iter().map(|s| s.points.len()).sum();
    let mut waypoints = Vec::with_capacity(total);

    for section in sections {
        let color = section
            .color
            .clone()
            .unwrap_or_else(|| default_color.to_string());

        waypoints.extend(section.points.iter().map(|point| Waypoint {
            id: point.id.clone(),
            x: point.x,
            y: point.y,
            reverse: point.reverse,
            reference: point.reference,
            section_id: Some(section.id.clone()),
            section_color: Some(color.clone()),
        }));
    }

    waypoints
}
