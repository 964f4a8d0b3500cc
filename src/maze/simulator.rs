use log::{debug, info};

use crate::maze::direction::Direction;
use crate::maze::error::MazeError;
use crate::maze::explorer::RangeSensor;
use crate::maze::labyrinth::{Labyrinth, SimulatedSensor};
use crate::maze::session::MouseSession;
use crate::maze::wall_follower::WallFollower;

/// Nombre de pas par défaut.
pub const DEFAULT_STEPS: usize = 250;
/// Cellule d'entrée, au coin Sud-Ouest.
pub const START_CELL: usize = 0;

/// Façon dont la souris décide de chaque pas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorMode {
    /// Une seule mesure par pas, réutilisée après chaque rotation.
    Literal,
    /// Une nouvelle mesure après chaque rotation.
    Polling,
    /// Explorateur par suivi de murs, qui préfère les cellules non visitées.
    WallFollower,
}

/// Résultat d'une simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub steps: usize,
    pub reached_center: bool,
    pub position: Option<usize>,
    pub heading: Direction,
    /// Cellules successives occupées par la souris.
    pub path: Vec<usize>,
    /// Culs-de-sac notés par l'explorateur par suivi de murs.
    pub dead_ends: Vec<usize>,
}

/// Fait explorer `labyrinth` par la souris de `session`.
///
/// La souris est posée sur la cellule 0 face au Nord (entrée par le Sud)
/// et la carte est réinitialisée. `on_step` est appelé après chaque pas.
/// Le chemin est relevé ici : la session elle-même ne garde aucun historique.
pub fn run<F>(
    session: &mut MouseSession,
    labyrinth: &Labyrinth,
    mode: SensorMode,
    max_steps: usize,
    mut on_step: F,
) -> Result<SimulationReport, MazeError>
where
    F: FnMut(usize, &MouseSession),
{
    session.initialize_maze();
    session.mouse.heading = Direction::North;
    session.set_position(START_CELL)?;

    let mut sensor = SimulatedSensor::new(labyrinth);
    let mut follower = WallFollower::new();
    let mut path = vec![START_CELL];
    let mut steps = 0;
    let mut reached_center = false;

    info!(
        "Simulating '{}' ({:?} mode, {} steps max)",
        labyrinth.name(),
        mode,
        max_steps
    );

    while steps < max_steps {
        steps += 1;
        reached_center = match mode {
            SensorMode::Literal => {
                let reading = sensor.read(session.position(), session.mouse.heading);
                session.step(reading)
            }
            SensorMode::Polling => session.step_with_sensor(&mut sensor),
            SensorMode::WallFollower => {
                follower.step(&mut session.grid, &mut session.mouse, &mut sensor)
            }
        };
        if let Some(position) = session.position() {
            if path.last() != Some(&position) {
                path.push(position);
            }
        }
        debug!(
            "Step {}/{}: position {:?}, heading {:?}",
            steps,
            max_steps,
            session.position(),
            session.mouse.heading
        );
        on_step(steps, session);
        if reached_center {
            info!("Reached the center of the maze after {} steps", steps);
            break;
        }
    }

    Ok(SimulationReport {
        steps,
        reached_center,
        position: session.position(),
        heading: session.mouse.heading,
        path,
        dead_ends: follower.dead_ends().to_vec(),
    })
}
