//! WRO Mission Planner.
//!
//! Kommandozeile: lädt eine Missions-Datei und gibt die berechneten
//! Roboter-Anweisungen (oder Playback-Aktionen als JSON) aus.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wro_mission_planner::route::{
    calculate_total_path_length, calculate_total_rotation, format_instruction,
    group_instructions_by_section,
};
use wro_mission_planner::{load_mission_file, PlannerOptions};

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "WRO Mission Planner v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args = CliArgs::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let options = PlannerOptions::load_from_file(&PlannerOptions::config_path());
    let mission = load_mission_file(&args.mission_path)?;

    if args.playback {
        let actions = mission.playback(&options);
        let json = serde_json::to_string_pretty(&actions)
            .context("Playback-Aktionen konnten nicht serialisiert werden")?;
        println!("{}", json);
        return Ok(());
    }

    let route = mission.route(&options);
    for (section_id, instructions) in group_instructions_by_section(&route.instructions) {
        println!("[{}]", section_id);
        for instruction in &instructions {
            println!("  {}", format_instruction(instruction));
        }
    }
    println!(
        "Gesamt: {:.1} cm Strecke, {:.1}° Drehung, {} Anweisungen",
        calculate_total_path_length(&route.instructions),
        calculate_total_rotation(&route.instructions),
        route.instructions.len()
    );

    Ok(())
}

/// Kommandozeilen-Argumente
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Missions-Datei (JSON)
    mission_path: PathBuf,

    /// Playback-Aktionen als JSON statt Anweisungen ausgeben
    #[arg(long)]
    playback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_ist_gueltig() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_cli_mission_und_playback() {
        let args = CliArgs::try_parse_from(["wro-mission-planner", "mission.json", "--playback"])
            .expect("Argumente erwartet");
        assert_eq!(args.mission_path, PathBuf::from("mission.json"));
        assert!(args.playback);

        let args = CliArgs::try_parse_from(["wro-mission-planner", "mission.json"])
            .expect("Argumente erwartet");
        assert!(!args.playback);
    }

    #[test]
    fn test_cli_ohne_mission_schlaegt_fehl() {
        assert!(CliArgs::try_parse_from(["wro-mission-planner"]).is_err());
        assert!(
            CliArgs::try_parse_from(["wro-mission-planner", "a.json", "--unbekannt"]).is_err()
        );
    }

    #[test]
    fn test_cli_hilfe() {
        let err = CliArgs::try_parse_from(["wro-mission-planner", "--help"])
            .expect_err("Hilfe-Ausgabe erwartet");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
