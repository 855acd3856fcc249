//! Routenberechnung: simuliert einen virtuellen Roboter entlang der Wegpunkte.
//!
//! Zustandslos nach außen. Der virtuelle Roboter ist ein lokaler Akkumulator,
//! der bei jedem Aufruf neu aus der Startpose entsteht.

use crate::core::{Instruction, PathSegment, Pose, RouteCalculationResult, Waypoint};
use crate::shared::options::DEFAULT_PIXELS_PER_UNIT;
use crate::shared::{
    normalize_angle, rad_to_deg, round_to_hundredths, shortest_turn_angle, DEFAULT_SECTION_COLOR,
    DEGENERATE_DISTANCE_PX, TURN_THRESHOLD_DEG,
};
use glam::DVec2;
use std::f64::consts::PI;

/// Bewegung des virtuellen Roboters zu einem Wegpunkt
#[derive(Debug, Clone, Copy)]
struct Motion {
    /// Position vor der Bewegung
    from: DVec2,
    /// Exakte Drehung (Radiant), vor Unterdrückung
    turn: f64,
    /// Fahrstrecke in Pixeln
    distance_px: f64,
}

/// Transienter Simulationszustand
#[derive(Debug, Clone, Copy)]
struct VirtualRobot {
    position: DVec2,
    heading: f64,
}

impl VirtualRobot {
    fn new(initial_pose: &Pose) -> Self {
        Self {
            position: initial_pose.position(),
            heading: normalize_angle(initial_pose.theta),
        }
    }

    fn pose(&self) -> Pose {
        Pose::new(self.position.x, self.position.y, self.heading)
    }

    /// Fährt den Wegpunkt an.
    ///
    /// `None` bei deckungsgleichem Wegpunkt: Position rastet ein, Ausrichtung bleibt.
    fn advance(&mut self, waypoint: &Waypoint) -> Option<Motion> {
        let target = waypoint.position();
        let delta = target - self.position;
        let distance_px = delta.length();

        if distance_px < DEGENERATE_DISTANCE_PX {
            self.position = target;
            return None;
        }

        let mut target_heading = delta.y.atan2(delta.x);
        if waypoint.reverse {
            target_heading = normalize_angle(target_heading + PI);
        }

        let turn = shortest_turn_angle(self.heading, target_heading);
        let motion = Motion {
            from: self.position,
            turn,
            distance_px,
        };

        // Exakte Zielausrichtung, unabhängig von Rundung/Unterdrückung der Anweisung
        self.heading = target_heading;
        self.position = target;
        Some(motion)
    }
}

/// Rundet eine Drehung auf Hundertstel Grad und hält sie in (-180, 180].
fn rounded_turn_degrees(degrees: f64) -> f64 {
    let rounded = round_to_hundredths(degrees);
    // knapp über -180° darf nicht auf die ausgeschlossene Grenze runden
    if rounded <= -180.0 {
        180.0
    } else {
        rounded
    }
}

/// Berechnet Anweisungen, Pfad-Segmente und Posen für eine Wegpunkt-Folge.
///
/// `pixels_per_unit` rechnet Pixel-Distanzen in physische Einheiten um (Standard 1).
/// Nicht-positive Werte sind Aufruferfehler und werden nicht geprüft.
pub fn calculate_route_instructions(
    initial_pose: &Pose,
    waypoints: &[Waypoint],
    pixels_per_unit: Option<f64>,
) -> RouteCalculationResult {
    let pixels_per_unit = pixels_per_unit.unwrap_or(DEFAULT_PIXELS_PER_UNIT);
    let mut robot = VirtualRobot::new(initial_pose);

    let mut result = RouteCalculationResult {
        instructions: Vec::with_capacity(waypoints.len() * 2),
        path_segments: Vec::with_capacity(waypoints.len()),
        poses: Vec::with_capacity(waypoints.len() + 1),
    };
    result.poses.push(robot.pose());

    for waypoint in waypoints {
        let Some(motion) = robot.advance(waypoint) else {
            log::trace!(
                "Wegpunkt {} deckungsgleich mit Roboterposition, keine Bewegung",
                waypoint.id
            );
            result.poses.push(robot.pose());
            continue;
        };

        let turn_deg = rad_to_deg(motion.turn);
        if turn_deg.abs() > TURN_THRESHOLD_DEG {
            result.instructions.push(Instruction::turn(
                rounded_turn_degrees(turn_deg),
                waypoint.section_id.clone(),
                waypoint.id.clone(),
            ));
        }

        result.instructions.push(Instruction::movement(
            round_to_hundredths(motion.distance_px / pixels_per_unit),
            waypoint.reverse,
            waypoint.section_id.clone(),
            waypoint.id.clone(),
        ));

        result.path_segments.push(PathSegment {
            x1: motion.from.x,
            y1: motion.from.y,
            x2: waypoint.x,
            y2: waypoint.y,
            color: waypoint
                .section_color
                .clone()
                .unwrap_or_else(|| DEFAULT_SECTION_COLOR.to_string()),
            section_id: waypoint.section_id.clone(),
            waypoint_id: waypoint.id.clone(),
            is_reverse: waypoint.reverse,
        });

        result.poses.push(robot.pose());
    }

    log::debug!(
        "Route berechnet: {} Wegpunkte, {} Anweisungen, {} Segmente",
        waypoints.len(),
        result.instructions.len(),
        result.path_segments.len()
    );

    result
}

/// Ermittelt nur die Endpose, ohne Anweisungen oder Segmente zu erzeugen.
///
/// Stimmt exakt mit der letzten Pose aus [`calculate_route_instructions`] überein.
pub fn calculate_final_pose(initial_pose: &Pose, waypoints: &[Waypoint]) -> Pose {
    let mut robot = VirtualRobot::new(initial_pose);
    for waypoint in waypoints {
        robot.advance(waypoint);
    }
    robot.pose()
}
