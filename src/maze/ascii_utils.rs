/*!
 * # Visualisation de la carte découverte
 *
 * Ce module convertit une `CellGrid` (et la souris) en représentation ASCII,
 * Nord en haut :
 * - `+` aux coins, `---` / `|` pour un mur connu, espace pour un passage,
 *   `?` pour un mur encore inconnu ;
 * - la souris est dessinée par une flèche selon son orientation ;
 * - `.` marque une cellule visitée, `C` une cellule centrale non visitée.
 */

use crate::maze::direction::Direction;
use crate::maze::map::{is_center, CellGrid, MAZE_SIZE};
use crate::maze::mouse::Mouse;
use crate::maze::walls::{WallState, Walls};

fn horizontal(state: WallState) -> &'static str {
    match state {
        WallState::Wall => "---",
        WallState::Open => "   ",
        WallState::Unknown => " ? ",
    }
}

fn vertical(state: WallState) -> char {
    match state {
        WallState::Wall => '|',
        WallState::Open => ' ',
        WallState::Unknown => '?',
    }
}

fn arrow(heading: Direction) -> char {
    match heading {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

/// Génère une représentation ASCII de la carte.
///
/// # Arguments
///
/// * `grid` - La carte découverte.
/// * `mouse` - La souris à dessiner, si elle est placée.
///
/// # Retour
///
/// Une `String` de 9 lignes (4 rangées de cellules et 5 rangées de murs).
pub fn visualize_maze_ascii(grid: &CellGrid, mouse: Option<&Mouse>) -> String {
    let cells = grid.cells();
    let walls_at = |row: usize, col: usize| -> Walls { cells[row * MAZE_SIZE + col].walls };
    let mut out = String::new();

    for row in (0..MAZE_SIZE).rev() {
        for col in 0..MAZE_SIZE {
            out.push('+');
            out.push_str(horizontal(walls_at(row, col).get(Direction::North)));
        }
        out.push_str("+\n");

        for col in 0..MAZE_SIZE {
            let index = row * MAZE_SIZE + col;
            out.push(vertical(walls_at(row, col).get(Direction::West)));
            let content = match mouse {
                Some(m) if m.position() == Some(index) => arrow(m.heading),
                _ if cells[index].visited => '.',
                _ if is_center(index) => 'C',
                _ => ' ',
            };
            out.push(' ');
            out.push(content);
            out.push(' ');
        }
        out.push(vertical(walls_at(row, MAZE_SIZE - 1).get(Direction::East)));
        out.push('\n');
    }

    for col in 0..MAZE_SIZE {
        out.push('+');
        out.push_str(horizontal(walls_at(0, col).get(Direction::South)));
    }
    out.push_str("+\n");
    out
}
