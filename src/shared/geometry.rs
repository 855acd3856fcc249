//! Reine Geometrie-Funktionen: Winkel-Normalisierung und Pixel/Feld-Umrechnung.
//!
//! Layer-neutral: wird von `route` und `mission` genutzt, ohne Zirkel-Abhängigkeiten.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

use super::options::{FIELD_HEIGHT_MM, FIELD_WIDTH_MM};

/// Normalisiert einen Winkel (Radiant) auf das halboffene Intervall (-π, π].
///
/// Geschlossene Form statt Schleife: `π` bleibt `π`, `-π` wird zu `π`.
/// Nicht-endliche Werte werden unverändert zurückgegeben.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    // rem_euclid liefert [0, 2π); bei Rundung kann exakt 2π entstehen
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

/// Vorzeichenbehaftete kürzeste Drehung von `from` nach `to`, in (-π, π].
///
/// Positiv = rechts (im Uhrzeigersinn bei nach unten wachsendem Y).
pub fn shortest_turn_angle(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Grad → Radiant
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Radiant → Grad
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Rundet auf zwei Nachkommastellen.
///
/// Halbe Werte runden von null weg, Links- und Rechtsdrehungen also symmetrisch.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Umrechnung zwischen Canvas-Pixeln und Spielfeld-Millimetern.
///
/// Pro Achse gleichförmige Skalierung `field_mm / canvas_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScale {
    /// Physische Feldgröße (mm)
    pub field_size_mm: DVec2,
    /// Gerenderte Canvas-Größe (Pixel)
    pub canvas_size_px: DVec2,
}

impl FieldScale {
    /// Skala für das Standard-WRO-Feld bei gegebener Canvas-Größe
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self::with_field(
            DVec2::new(FIELD_WIDTH_MM, FIELD_HEIGHT_MM),
            DVec2::new(canvas_width, canvas_height),
        )
    }

    pub fn with_field(field_size_mm: DVec2, canvas_size_px: DVec2) -> Self {
        Self {
            field_size_mm,
            canvas_size_px,
        }
    }

    /// Beide Canvas-Dimensionen positiv
    pub fn is_valid(&self) -> bool {
        self.canvas_size_px.x > 0.0 && self.canvas_size_px.y > 0.0
    }

    /// Pixel → Millimeter. Ungültige Canvas-Größe liefert den Ursprung.
    pub fn pixel_to_field(&self, point: DVec2) -> DVec2 {
        if !self.is_valid() {
            log::debug!(
                "Ungültige Canvas-Größe {:?}, Umrechnung liefert Ursprung",
                self.canvas_size_px
            );
            return DVec2::ZERO;
        }
        point * self.field_size_mm / self.canvas_size_px
    }

    /// Millimeter → Pixel. Ungültige Canvas-Größe liefert den Ursprung.
    pub fn field_to_pixel(&self, point: DVec2) -> DVec2 {
        if !self.is_valid() {
            log::debug!(
                "Ungültige Canvas-Größe {:?}, Umrechnung liefert Ursprung",
                self.canvas_size_px
            );
            return DVec2::ZERO;
        }
        point * self.canvas_size_px / self.field_size_mm
    }

    /// Pixel pro Distanz-Einheit (`unit_mm` = 10 für Zentimeter), bezogen auf die X-Achse.
    ///
    /// `None` bei ungültiger Canvas-Größe oder Feldbreite.
    pub fn pixels_per_unit(&self, unit_mm: f64) -> Option<f64> {
        if !self.is_valid() || self.field_size_mm.x <= 0.0 {
            return None;
        }
        Some(self.canvas_size_px.x / self.field_size_mm.x * unit_mm)
    }
}
