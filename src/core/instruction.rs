//! Roboter-Anweisungen und daraus abgeleitete Playback-Aktionen.

use serde::{Deserialize, Serialize};

/// Art der Anweisung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstructionKind {
    /// Drehung auf der Stelle (Grad)
    Turn,
    /// Geradeausfahrt (physische Einheit)
    Move,
}

/// Richtungs-Tag einer Anweisung.
///
/// TURN nutzt `Left`/`Right`, MOVE nutzt `Forward`/`Reverse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionDirection {
    Left,
    Right,
    Forward,
    Reverse,
}

/// Atomare Roboter-Anweisung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(rename = "type")]
    pub kind: InstructionKind,
    /// TURN: vorzeichenbehaftete Grad in (-180, 180], MOVE: Distanz >= 0
    pub value: f64,
    pub direction: InstructionDirection,
    pub section_id: Option<String>,
    pub waypoint_id: String,
}

impl Instruction {
    /// Erstellt eine TURN-Anweisung; Richtung folgt aus dem Vorzeichen.
    pub fn turn(degrees: f64, section_id: Option<String>, waypoint_id: String) -> Self {
        let direction = if degrees >= 0.0 {
            InstructionDirection::Right
        } else {
            InstructionDirection::Left
        };
        Self {
            kind: InstructionKind::Turn,
            value: degrees,
            direction,
            section_id,
            waypoint_id,
        }
    }

    /// Erstellt eine MOVE-Anweisung
    pub fn movement(
        distance: f64,
        reverse: bool,
        section_id: Option<String>,
        waypoint_id: String,
    ) -> Self {
        let direction = if reverse {
            InstructionDirection::Reverse
        } else {
            InstructionDirection::Forward
        };
        Self {
            kind: InstructionKind::Move,
            value: distance,
            direction,
            section_id,
            waypoint_id,
        }
    }

    pub fn is_turn(&self) -> bool {
        self.kind == InstructionKind::Turn
    }

    pub fn is_move(&self) -> bool {
        self.kind == InstructionKind::Move
    }

    /// MOVE-Anweisung in Rückwärtsrichtung
    pub fn is_reverse_move(&self) -> bool {
        self.is_move() && self.direction == InstructionDirection::Reverse
    }
}

/// Vereinfachte Aktion für Animations-Konsumenten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlaybackAction {
    /// Drehung um `angle` Grad (vorzeichenbehaftet)
    #[serde(rename_all = "camelCase")]
    Rotate {
        angle: f64,
        section_id: Option<String>,
        waypoint_id: String,
    },
    /// Fahrt um `distance`; negativ bei Rückwärtsfahrt
    #[serde(rename_all = "camelCase")]
    Move {
        distance: f64,
        is_reverse: bool,
        section_id: Option<String>,
        waypoint_id: String,
    },
}

impl PlaybackAction {
    pub fn waypoint_id(&self) -> &str {
        match self {
            Self::Rotate { waypoint_id, .. } | Self::Move { waypoint_id, .. } => waypoint_id,
        }
    }

    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Rotate { section_id, .. } | Self::Move { section_id, .. } => {
                section_id.as_deref()
            }
        }
    }
}
