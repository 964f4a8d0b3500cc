use serde::Serialize;

use crate::maze::direction::Direction;
use crate::maze::error::MazeError;
use crate::maze::explorer::{self, RangeSensor};
use crate::maze::map::CellGrid;
use crate::maze::mouse::Mouse;
use crate::maze::walls::WallState;

/// Vue d'une cellule telle qu'exposée à l'hôte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    /// Octet brut : 2 bits par direction, Nord en bits de poids faible.
    pub wall_info: u8,
    pub visited: bool,
    pub distance: u8,
}

/// Une simulation indépendante : la carte découverte et la souris.
///
/// Toutes les opérations exposées à l'hôte passent par ici. Une session
/// n'est pas partagée entre threads ; l'appelant sérialise ses appels.
#[derive(Debug, Clone, Default)]
pub struct MouseSession {
    pub grid: CellGrid,
    pub mouse: Mouse,
}

impl MouseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remet la carte à son état initial. La souris n'est pas touchée.
    pub fn initialize_maze(&mut self) {
        self.grid.initialize();
    }

    pub fn position(&self) -> Option<usize> {
        self.mouse.position()
    }

    pub fn set_position(&mut self, position: usize) -> Result<(), MazeError> {
        self.mouse.set_position(position)
    }

    pub fn clear_position(&mut self) {
        self.mouse.clear_position();
    }

    pub fn heading(&self) -> u8 {
        self.mouse.heading.index()
    }

    pub fn set_heading(&mut self, value: u8) -> Result<(), MazeError> {
        self.mouse.heading = Direction::try_from(value)?;
        Ok(())
    }

    pub fn get_wall(&self, index: usize, direction: u8) -> Result<WallState, MazeError> {
        self.grid.get_wall(index, Direction::try_from(direction)?)
    }

    pub fn set_wall(&mut self, index: usize, direction: u8, value: u8) -> Result<(), MazeError> {
        let direction = Direction::try_from(direction)?;
        let value = WallState::try_from(value)?;
        self.grid.set_wall(index, direction, value)
    }

    /// Copie des 16 cellules, dans l'ordre des index.
    pub fn maze_data(&self) -> Vec<CellRecord> {
        self.grid
            .cells()
            .iter()
            .map(|cell| CellRecord {
                wall_info: cell.walls.bits(),
                visited: cell.visited,
                distance: cell.distance,
            })
            .collect()
    }

    pub fn turn_right(&mut self) {
        self.mouse.turn_right();
    }

    pub fn turn_left(&mut self) {
        self.mouse.turn_left();
    }

    pub fn turn_around(&mut self) {
        self.mouse.turn_around();
    }

    pub fn move_forward(&mut self) -> bool {
        self.mouse.move_forward()
    }

    pub fn is_at_center(&self) -> bool {
        self.mouse.is_at_center()
    }

    /// Un cycle de décision avec une seule mesure frontale.
    pub fn step(&mut self, sensor_reading: f32) -> bool {
        explorer::step(&mut self.grid, &mut self.mouse, sensor_reading)
    }

    /// Un cycle de décision qui interroge le capteur après chaque rotation.
    pub fn step_with_sensor<S: RangeSensor + ?Sized>(&mut self, sensor: &mut S) -> bool {
        explorer::step_with_sensor(&mut self.grid, &mut self.mouse, sensor)
    }
}
