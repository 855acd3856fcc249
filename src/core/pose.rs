//! Roboter-Pose in Canvas-Koordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position und Ausrichtung des Roboters.
///
/// `theta` in Radiant: 0 zeigt entlang +X, positive Winkel drehen Richtung +Y
/// (Y wächst nach unten, positiv liest sich also im Uhrzeigersinn).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X-Position (Pixel)
    pub x: f64,
    /// Y-Position (Pixel)
    pub y: f64,
    /// Ausrichtung (Radiant)
    pub theta: f64,
}

impl Pose {
    /// Erstellt eine neue Pose
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Position als Vektor
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
