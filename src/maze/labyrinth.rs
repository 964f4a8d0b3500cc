/*!
 * # Labyrinthes de référence
 *
 * Murs réels des trois labyrinthes 4x4 utilisés pour la simulation, et un
 * capteur simulé qui lit ces murs. La souris ne voit jamais ces données
 * directement : elle ne reçoit que des distances.
 */

use rand::Rng;

use crate::maze::direction::Direction;
use crate::maze::error::MazeError;
use crate::maze::explorer::RangeSensor;
use crate::maze::map::{Coord, CELL_COUNT};
use crate::maze::walls::{WallState, Walls};

/// Distance renvoyée par le capteur simulé devant un mur.
pub const WALL_DISTANCE: f32 = 5.0;
/// Distance renvoyée quand rien n'est à portée.
pub const OPEN_DISTANCE: f32 = 30.0;
/// Distance renvoyée quand la souris n'est pas dans la grille.
pub const OUT_OF_MAZE_DISTANCE: f32 = 999.0;

/// Passages (ligne, colonne, direction) ouverts dans chaque labyrinthe.
/// L'entrée au sud de la cellule 0 n'en fait pas partie : la souris est
/// posée directement sur la cellule 0.
const DEFAULT_OPENINGS: &[(usize, usize, Direction)] = &[
    (0, 0, Direction::East),
    (0, 1, Direction::East),
    (0, 2, Direction::East),
    (0, 3, Direction::North),
    (1, 2, Direction::North),
    (1, 3, Direction::North),
    (2, 2, Direction::West),
    (2, 3, Direction::North),
    (2, 1, Direction::South),
    (1, 1, Direction::East),
    (1, 1, Direction::North),
    (1, 2, Direction::East),
];

const SIMPLE_OPENINGS: &[(usize, usize, Direction)] = &[
    (0, 0, Direction::East),
    (0, 1, Direction::North),
    (1, 1, Direction::East),
    (1, 2, Direction::East),
    (1, 1, Direction::North),
    (1, 2, Direction::North),
    (2, 0, Direction::East),
    (3, 1, Direction::South),
];

const COMPLEX_OPENINGS: &[(usize, usize, Direction)] = &[
    (0, 0, Direction::East),
    (0, 1, Direction::North),
    (1, 1, Direction::West),
    (1, 0, Direction::North),
    (2, 0, Direction::East),
    (2, 1, Direction::East),
    (1, 2, Direction::North),
    (2, 2, Direction::East),
    (2, 3, Direction::South),
    (1, 3, Direction::West),
    (2, 1, Direction::North),
    (2, 2, Direction::South),
];

type Openings = &'static [(usize, usize, Direction)];

const LAYOUTS: [(&str, Openings); 3] = [
    ("default", DEFAULT_OPENINGS),
    ("simple", SIMPLE_OPENINGS),
    ("complex", COMPLEX_OPENINGS),
];

/// Noms des labyrinthes de référence disponibles.
pub fn available_layouts() -> impl Iterator<Item = &'static str> {
    LAYOUTS.iter().map(|(name, _)| *name)
}

/// Murs réels d'un labyrinthe 4x4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labyrinth {
    name: String,
    cells: [Walls; CELL_COUNT],
}

impl Labyrinth {
    /// Labyrinthe fermé : tous les murs présents.
    fn closed(name: &str) -> Self {
        let mut walls = Walls::unknown();
        for direction in Direction::ALL {
            walls.set(direction, WallState::Wall);
        }
        Self {
            name: name.to_string(),
            cells: [walls; CELL_COUNT],
        }
    }

    /// Ouvre un passage des deux côtés. Un passage vers l'extérieur
    /// n'ouvre que la cellule elle-même.
    fn open(&mut self, coord: Coord, direction: Direction) {
        self.cells[coord.index()].set(direction, WallState::Open);
        if let Some(neighbor) = coord.step(direction) {
            self.cells[neighbor.index()].set(direction.opposite(), WallState::Open);
        }
    }

    fn carve(name: &str, openings: Openings) -> Self {
        let mut labyrinth = Labyrinth::closed(name);
        for &(row, col, direction) in openings {
            labyrinth.open(Coord { row, col }, direction);
        }
        labyrinth
    }

    pub fn from_layout(name: &str) -> Result<Self, MazeError> {
        LAYOUTS
            .iter()
            .find(|(layout, _)| *layout == name)
            .map(|&(layout, openings)| Labyrinth::carve(layout, openings))
            .ok_or_else(|| MazeError::UnknownLayout(name.to_string()))
    }

    /// Un des labyrinthes de référence, au hasard.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (name, openings) = LAYOUTS[rng.random_range(0..LAYOUTS.len())];
        Labyrinth::carve(name, openings)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vrai s'il y a un mur ; hors de la grille compte comme un mur.
    pub fn has_wall(&self, index: usize, direction: Direction) -> bool {
        self.cells
            .get(index)
            .map_or(true, |walls| walls.get(direction) != WallState::Open)
    }
}

/// Capteur de distance frontal qui lit les murs d'un `Labyrinth`.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSensor<'a> {
    labyrinth: &'a Labyrinth,
}

impl<'a> SimulatedSensor<'a> {
    pub fn new(labyrinth: &'a Labyrinth) -> Self {
        Self { labyrinth }
    }
}

impl RangeSensor for SimulatedSensor<'_> {
    fn read(&mut self, position: Option<usize>, heading: Direction) -> f32 {
        match position {
            None => OUT_OF_MAZE_DISTANCE,
            Some(index) if self.labyrinth.has_wall(index, heading) => WALL_DISTANCE,
            Some(_) => OPEN_DISTANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::map::neighbor_index;

    #[test]
    fn every_layout_is_consistent() {
        for name in available_layouts() {
            let labyrinth = Labyrinth::from_layout(name).unwrap();
            for index in 0..CELL_COUNT {
                for d in Direction::ALL {
                    match neighbor_index(index, d) {
                        Some(n) => assert_eq!(
                            labyrinth.has_wall(index, d),
                            labyrinth.has_wall(n, d.opposite()),
                            "{name}: {index} {d:?}"
                        ),
                        None => assert!(labyrinth.has_wall(index, d)),
                    }
                }
            }
        }
    }

    #[test]
    fn simple_layout_passages() {
        let labyrinth = Labyrinth::from_layout("simple").unwrap();
        assert!(!labyrinth.has_wall(0, Direction::East));
        assert!(!labyrinth.has_wall(1, Direction::North));
        assert!(!labyrinth.has_wall(5, Direction::South));
        assert!(labyrinth.has_wall(0, Direction::North));
        assert!(labyrinth.has_wall(0, Direction::South));
        assert!(!labyrinth.has_wall(13, Direction::South));
    }

    #[test]
    fn unknown_layout_is_an_error() {
        assert_eq!(
            Labyrinth::from_layout("competition"),
            Err(MazeError::UnknownLayout("competition".to_string()))
        );
    }

    #[test]
    fn random_picks_a_known_layout() {
        let mut rng = rand::rng();
        for _ in 0..10 {
            let labyrinth = Labyrinth::random(&mut rng);
            assert!(available_layouts().any(|name| name == labyrinth.name()));
        }
    }

    #[test]
    fn sensor_distances() {
        let labyrinth = Labyrinth::from_layout("default").unwrap();
        let mut sensor = SimulatedSensor::new(&labyrinth);
        assert_eq!(sensor.read(Some(0), Direction::North), WALL_DISTANCE);
        assert_eq!(sensor.read(Some(0), Direction::East), OPEN_DISTANCE);
        assert_eq!(sensor.read(Some(3), Direction::East), WALL_DISTANCE);
        assert_eq!(sensor.read(None, Direction::North), OUT_OF_MAZE_DISTANCE);
    }
}
