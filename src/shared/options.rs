//! Zentrale Konfiguration für den WRO Mission Planner.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Spielfeld ───────────────────────────────────────────────────────

/// Breite des WRO-Spielfelds (mm).
pub const FIELD_WIDTH_MM: f64 = 2362.0;
/// Höhe des WRO-Spielfelds (mm).
pub const FIELD_HEIGHT_MM: f64 = 1143.0;
/// Distanz-Einheit der MOVE-Anweisungen in mm (10 = Zentimeter).
pub const DISTANCE_UNIT_MM: f64 = 10.0;

// ── Routenberechnung ────────────────────────────────────────────────

/// Wegpunkte näher als dieser Abstand (Pixel) gelten als deckungsgleich.
pub const DEGENERATE_DISTANCE_PX: f64 = 1e-6;
/// Drehungen bis einschließlich dieses Betrags (Grad) werden nicht ausgegeben.
pub const TURN_THRESHOLD_DEG: f64 = 0.1;
/// Standard-Skala, wenn der Aufrufer keine angibt.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 1.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbe für Wegpunkte ohne Sektionsfarbe (Grau).
pub const DEFAULT_SECTION_COLOR: &str = "#808080";
/// Gruppierungs-Schlüssel für Anweisungen ohne Sektion.
pub const UNGROUPED_SECTION_KEY: &str = "ungrouped";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planer-Optionen.
/// Wird als `wro_mission_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    // ── Spielfeld ───────────────────────────────────────────────
    /// Feldbreite in mm
    pub field_width_mm: f64,
    /// Feldhöhe in mm
    pub field_height_mm: f64,
    /// Distanz-Einheit in mm (10 = cm)
    #[serde(default = "default_distance_unit_mm")]
    pub distance_unit_mm: f64,

    // ── Skalierung ──────────────────────────────────────────────
    /// Pixel pro Einheit, falls die Mission keine Canvas-Größe mitbringt
    pub pixels_per_unit: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Fallback-Farbe für Sektionen ohne Farbe
    #[serde(default = "default_section_color")]
    pub default_section_color: String,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            field_width_mm: FIELD_WIDTH_MM,
            field_height_mm: FIELD_HEIGHT_MM,
            distance_unit_mm: DISTANCE_UNIT_MM,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            default_section_color: DEFAULT_SECTION_COLOR.to_string(),
        }
    }
}

/// Serde-Default für `distance_unit_mm` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_distance_unit_mm() -> f64 {
    DISTANCE_UNIT_MM
}

fn default_section_color() -> String {
    DEFAULT_SECTION_COLOR.to_string()
}

/// Endlich und größer null (NaN fällt durch).
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("wro_mission_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("wro_mission_planner.toml")
    }

    /// Ersetzt nicht-positive Skalenwerte durch die Standardwerte.
    ///
    /// Der Rechenkern validiert `pixels_per_unit` nicht, daher hier.
    pub fn sanitized(mut self) -> Self {
        if !is_positive(self.pixels_per_unit) {
            log::warn!(
                "pixels_per_unit = {} ungültig, verwende {}",
                self.pixels_per_unit,
                DEFAULT_PIXELS_PER_UNIT
            );
            self.pixels_per_unit = DEFAULT_PIXELS_PER_UNIT;
        }
        if !is_positive(self.distance_unit_mm) {
            self.distance_unit_mm = DISTANCE_UNIT_MM;
        }
        if !is_positive(self.field_width_mm) || !is_positive(self.field_height_mm) {
            self.field_width_mm = FIELD_WIDTH_MM;
            self.field_height_mm = FIELD_HEIGHT_MM;
        }
        self
    }

    /// Feldgröße als Vektor (mm)
    pub fn field_size_mm(&self) -> glam::DVec2 {
        glam::DVec2::new(self.field_width_mm, self.field_height_mm)
    }
}
