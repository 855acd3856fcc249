//! Sektionen, Sektions-Punkte und flache Wegpunkte.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Welcher Teil des Roboters auf dem Punkt stehen soll.
///
/// Wird nur von Aufrufern ausgewertet, nicht von der Routengeometrie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointReference {
    /// Roboter-Mittelpunkt
    #[default]
    Center,
    /// Vordere Spitze
    Front,
}

/// Punkt innerhalb einer Sektion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPoint {
    /// Eindeutige ID (vom Aufrufer vergeben)
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Punkt wird rückwärts angefahren
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub reference: PointReference,
}

impl SectionPoint {
    /// Erstellt einen vorwärts anzufahrenden Punkt mit Mittelpunkt-Referenz
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            reverse: false,
            reference: PointReference::Center,
        }
    }

    /// Markiert den Punkt als Rückwärts-Ziel
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Farbige, geordnete Gruppe von Punkten (logischer Teilpfad)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Anzeigefarbe (z.B. `#ff0000`), ohne Angabe grau
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Punkte in Ausführungsreihenfolge
    #[serde(default)]
    pub points: Vec<SectionPoint>,
}

impl Section {
    /// Erstellt eine leere Sektion
    pub fn new(id: impl Into<String>, color: Option<String>) -> Self {
        Self {
            id: id.into(),
            color,
            points: Vec::new(),
        }
    }
}

/// Flacher Wegpunkt mit Sektions-Herkunft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub reference: PointReference,
    /// `None` = keiner Sektion zugeordnet
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub section_color: Option<String>,
}

impl Waypoint {
    /// Erstellt einen ungruppierten Vorwärts-Wegpunkt
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            reverse: false,
            reference: PointReference::Center,
            section_id: None,
            section_color: None,
        }
    }

    /// Markiert den Wegpunkt als Rückwärts-Ziel
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Setzt die Sektions-Herkunft
    pub fn in_section(mut self, section_id: impl Into<String>, color: impl Into<String>) -> Self {
        self.section_id = Some(section_id.into());
        self.section_color = Some(color.into());
        self
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
