/*!
 * # Explorateur par suivi de murs
 *
 * Mode de démonstration du simulateur, indépendant de la politique réactive
 * de `explorer`. À chaque pas la souris mesure devant elle, puis liste les
 * sorties possibles de sa cellule dans l'ordre devant, droite, derrière,
 * gauche. Un côté jamais observé compte comme ouvert. Elle prend la première
 * sortie vers une cellule pas encore visitée, sinon la première sortie tout
 * court. Une cellule à une seule sortie est notée comme cul-de-sac.
 */

use log::{debug, info};

use crate::maze::direction::Direction;
use crate::maze::explorer::{check_front, RangeSensor};
use crate::maze::map::{neighbor_index, CellGrid};
use crate::maze::mouse::Mouse;
use crate::maze::walls::WallState;

/// Rotation relative à l'orientation courante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Ahead,
    Right,
    Back,
    Left,
}

impl Turn {
    /// Ordre de préférence des sorties.
    const ORDER: [Turn; 4] = [Turn::Ahead, Turn::Right, Turn::Back, Turn::Left];

    fn heading(self, heading: Direction) -> Direction {
        match self {
            Turn::Ahead => heading,
            Turn::Right => heading.turn_right(),
            Turn::Back => heading.turn_back(),
            Turn::Left => heading.turn_left(),
        }
    }

    fn apply(self, mouse: &mut Mouse) {
        match self {
            Turn::Ahead => {}
            Turn::Right => mouse.turn_right(),
            Turn::Back => mouse.turn_around(),
            Turn::Left => mouse.turn_left(),
        }
    }
}

/// Sortie candidate : la rotation à faire et si la cellule visée a déjà été visitée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exit {
    turn: Turn,
    visited: bool,
}

/// Sorties de `position` que la carte n'interdit pas.
fn possible_exits(
    grid: &CellGrid,
    position: usize,
    heading: Direction,
    wall_ahead: bool,
) -> Vec<Exit> {
    Turn::ORDER
        .iter()
        .filter_map(|&turn| {
            let direction = turn.heading(heading);
            let neighbor = neighbor_index(position, direction)?;
            let blocked = match turn {
                Turn::Ahead => wall_ahead,
                _ => grid.get_wall(position, direction).ok()? == WallState::Wall,
            };
            if blocked {
                return None;
            }
            let visited = grid.cell(neighbor).ok()?.visited;
            Some(Exit { turn, visited })
        })
        .collect()
}

/// Explorateur à mémoire : garde la liste des culs-de-sac rencontrés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallFollower {
    dead_ends: Vec<usize>,
}

impl WallFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cellules à une seule sortie, dans l'ordre de découverte.
    pub fn dead_ends(&self) -> &[usize] {
        &self.dead_ends
    }

    /// Un pas d'exploration ; renvoie `true` quand la souris est au centre.
    ///
    /// Si la sortie choisie se révèle fermée après la rotation, le mur est
    /// enregistré et la souris reste sur place, tournée vers lui.
    pub fn step<S: RangeSensor + ?Sized>(
        &mut self,
        grid: &mut CellGrid,
        mouse: &mut Mouse,
        sensor: &mut S,
    ) -> bool {
        let Some(position) = mouse.position() else {
            return false;
        };

        let front = sensor.read(Some(position), mouse.heading);
        let wall_ahead = check_front(grid, mouse, front);

        if mouse.is_at_center() {
            info!("Found the center! (cell {})", position);
            return true;
        }

        let exits = possible_exits(grid, position, mouse.heading, wall_ahead);
        if exits.len() == 1 && !self.dead_ends.contains(&position) {
            debug!("Dead end at cell {}", position);
            self.dead_ends.push(position);
        }

        let Some(exit) = exits
            .iter()
            .find(|exit| !exit.visited)
            .or_else(|| exits.first())
        else {
            debug!("No possible move from cell {}, turning around", position);
            mouse.turn_around();
            return false;
        };

        debug!("Choosing move {:?} from cell {}", exit.turn, position);
        exit.turn.apply(mouse);
        if exit.turn != Turn::Ahead {
            let reading = sensor.read(Some(position), mouse.heading);
            if check_front(grid, mouse, reading) {
                return false;
            }
        }
        mouse.move_forward();
        false
    }
}
