//! Missions-Datei: JSON Import/Export der Sektionen samt Startpose und Canvas-Größe.

use crate::core::{PlaybackAction, Pose, RouteCalculationResult, Section, Waypoint};
use crate::route::{
    calculate_route_instructions, flatten_sections_with_color, generate_playback_actions,
};
use crate::shared::{FieldScale, PlannerOptions};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gespeicherte Mission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Anzeigename
    #[serde(default)]
    pub name: String,
    /// Startpose des Roboters (Standard: Ursprung, Blick entlang +X)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_pose: Option<Pose>,
    /// Canvas-Breite in Pixeln, auf der die Punkte gezeichnet wurden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<f64>,
    /// Sektionen in Ausführungsreihenfolge
    pub sections: Vec<Section>,
}

impl Mission {
    /// Startpose oder Ursprung
    pub fn start_pose(&self) -> Pose {
        self.initial_pose.unwrap_or_default()
    }

    /// Feld-Skala aus der gespeicherten Canvas-Größe
    pub fn field_scale(&self, options: &PlannerOptions) -> Option<FieldScale> {
        let (width, height) = (self.canvas_width?, self.canvas_height?);
        Some(FieldScale::with_field(
            options.field_size_mm(),
            glam::DVec2::new(width, height),
        ))
    }

    /// Pixel pro Distanz-Einheit: aus der Canvas-Größe, sonst aus den Optionen.
    pub fn pixels_per_unit(&self, options: &PlannerOptions) -> f64 {
        self.field_scale(options)
            .and_then(|scale| scale.pixels_per_unit(options.distance_unit_mm))
            .unwrap_or(options.pixels_per_unit)
    }

    /// Flache Wegpunkt-Folge; Sektionen ohne Farbe erhalten `default_section_color`.
    pub fn waypoints(&self, options: &PlannerOptions) -> Vec<Waypoint> {
        flatten_sections_with_color(&self.sections, &options.default_section_color)
    }

    /// Berechnet die Route der Mission.
    pub fn route(&self, options: &PlannerOptions) -> RouteCalculationResult {
        calculate_route_instructions(
            &self.start_pose(),
            &self.waypoints(options),
            Some(self.pixels_per_unit(options)),
        )
    }

    /// Erzeugt die Playback-Aktionen der Mission.
    pub fn playback(&self, options: &PlannerOptions) -> Vec<PlaybackAction> {
        generate_playback_actions(
            &self.start_pose(),
            &self.waypoints(options),
            Some(self.pixels_per_unit(options)),
        )
    }

    /// Anzahl aller Punkte über alle Sektionen
    pub fn point_count(&self) -> usize {
        self.sections.iter().map(|s| s.points.len()).sum()
    }
}

/// Parsed eine Mission aus einem JSON-String.
///
/// Fehlt die `sections`-Liste oder ist sie keine Liste, schlägt der Import fehl.
/// Sektionen ohne `points` werden akzeptiert.
pub fn parse_mission(json_content: &str) -> Result<Mission> {
    let value: serde_json::Value =
        serde_json::from_str(json_content).context("Missions-Datei ist kein gültiges JSON")?;

    match value.get("sections") {
        Some(serde_json::Value::Array(_)) => {}
        Some(_) => bail!("Ungültige Missions-Datei: 'sections' muss eine Liste sein"),
        None => bail!("Ungültige Missions-Datei: Liste 'sections' fehlt"),
    }

    let mission: Mission =
        serde_json::from_value(value).context("Missions-Datei hat ein ungültiges Format")?;

    log::debug!(
        "Mission '{}' geparst: {} Sektionen, {} Punkte",
        mission.name,
        mission.sections.len(),
        mission.point_count()
    );
    Ok(mission)
}

/// Serialisiert eine Mission als formatiertes JSON.
pub fn write_mission(mission: &Mission) -> Result<String> {
    serde_json::to_string_pretty(mission).context("Mission konnte nicht serialisiert werden")
}

/// Lädt eine Mission von der Platte.
pub fn load_mission_file(path: &Path) -> Result<Mission> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Missions-Datei nicht lesbar: {}", path.display()))?;
    let mission = parse_mission(&content)
        .with_context(|| format!("Missions-Datei fehlerhaft: {}", path.display()))?;
    log::info!(
        "Mission geladen: {} ({} Sektionen, {} Punkte)",
        path.display(),
        mission.sections.len(),
        mission.point_count()
    );
    Ok(mission)
}

/// Speichert eine Mission auf die Platte.
pub fn save_mission_file(path: &Path, mission: &Mission) -> Result<()> {
    let content = write_mission(mission)?;
    std::fs::write(path, content)
        .with_context(|| format!("Missions-Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Mission gespeichert nach: {}", path.display());
    Ok(())
}
