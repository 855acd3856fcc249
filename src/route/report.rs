//! Auswertung von Anweisungsfolgen: Gruppierung, Textausgabe, Summen.

use crate::core::{Instruction, InstructionKind};
use crate::shared::UNGROUPED_SECTION_KEY;
use indexmap::IndexMap;

/// Gruppiert Anweisungen nach Sektion.
///
/// Gruppen erscheinen in der Reihenfolge ihres ersten Auftretens, innerhalb
/// jeder Gruppe bleibt die relative Reihenfolge erhalten. Anweisungen ohne
/// Sektion landen unter [`UNGROUPED_SECTION_KEY`].
pub fn group_instructions_by_section(
    instructions: &[Instruction],
) -> IndexMap<String, Vec<Instruction>> {
    let mut groups: IndexMap<String, Vec<Instruction>> = IndexMap::new();
    for instruction in instructions {
        let key = instruction
            .section_id
            .as_deref()
            .unwrap_or(UNGROUPED_SECTION_KEY);
        groups
            .entry(key.to_string())
            .or_default()
            .push(instruction.clone());
    }
    groups
}

/// Formatiert eine Anweisung als Klartext, z.B. `TURN RIGHT 12.5°` oder `MOVE FORWARD 34.2 cm`.
///
/// Passen Art und Richtung nicht zusammen, wird ein Diagnose-Text geliefert.
pub fn format_instruction(instruction: &Instruction) -> String {
    use crate::core::InstructionDirection::{Forward, Left, Reverse, Right};

    let magnitude = instruction.value.abs();
    match (instruction.kind, instruction.direction) {
        (InstructionKind::Turn, Right) => format!("TURN RIGHT {:.1}°", magnitude),
        (InstructionKind::Turn, Left) => format!("TURN LEFT {:.1}°", magnitude),
        (InstructionKind::Move, Forward) => format!("MOVE FORWARD {:.1} cm", magnitude),
        (InstructionKind::Move, Reverse) => format!("MOVE REVERSE {:.1} cm", magnitude),
        (kind, direction) => format!(
            "UNKNOWN INSTRUCTION ({:?} {:?} {})",
            kind, direction, instruction.value
        ),
    }
}

/// Summe aller MOVE-Distanzen.
pub fn calculate_total_path_length(instructions: &[Instruction]) -> f64 {
    instructions
        .iter()
        .filter(|i| i.is_move())
        .map(|i| i.value)
        .sum()
}

/// Summe der Beträge aller TURN-Winkel (Grad).
pub fn calculate_total_rotation(instructions: &[Instruction]) -> f64 {
    instructions
        .iter()
        .filter(|i| i.is_turn())
        .map(|i| i.value.abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InstructionDirection;
    use approx::assert_relative_eq;

    fn sample() -> Vec<Instruction> {
        vec![
            Instruction::turn(12.5, Some("s1".into()), "a".into()),
            Instruction::movement(34.2, false, Some("s1".into()), "a".into()),
            Instruction::turn(-90.0, None, "b".into()),
            Instruction::movement(10.0, true, None, "b".into()),
            Instruction::movement(5.0, false, Some("s1".into()), "c".into()),
        ]
    }

    #[test]
    fn test_format_instruction() {
        let instr = sample();
        assert_eq!(format_instruction(&instr[0]), "TURN RIGHT 12.5°");
        assert_eq!(format_instruction(&instr[1]), "MOVE FORWARD 34.2 cm");
        assert_eq!(format_instruction(&instr[2]), "TURN LEFT 90.0°");
        assert_eq!(format_instruction(&instr[3]), "MOVE REVERSE 10.0 cm");
    }

    #[test]
    fn test_format_instruction_unpassende_richtung_liefert_diagnose() {
        let mut odd = Instruction::turn(15.0, None, "x".into());
        odd.direction = InstructionDirection::Forward;
        let text = format_instruction(&odd);
        assert!(text.starts_with("UNKNOWN INSTRUCTION"), "{}", text);
    }

    #[test]
    fn test_group_by_section_erhaelt_reihenfolge() {
        let groups = group_instructions_by_section(&sample());
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["s1", UNGROUPED_SECTION_KEY]);

        let s1: Vec<&str> = groups["s1"].iter().map(|i| i.waypoint_id.as_str()).collect();
        assert_eq!(s1, vec!["a", "a", "c"]);
        assert_eq!(groups[UNGROUPED_SECTION_KEY].len(), 2);
    }

    #[test]
    fn test_totals() {
        let instr = sample();
        assert_relative_eq!(calculate_total_path_length(&instr), 49.2, epsilon = 1e-9);
        assert_relative_eq!(calculate_total_rotation(&instr), 102.5, epsilon = 1e-9);
        assert_eq!(calculate_total_path_length(&[]), 0.0);
    }
}
