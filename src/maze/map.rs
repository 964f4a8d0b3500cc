use crate::maze::cell::{MazeCell, UNKNOWN_DISTANCE};
use crate::maze::direction::Direction;
use crate::maze::error::MazeError;
use crate::maze::walls::WallState;

/// Côté de la grille.
pub const MAZE_SIZE: usize = 4;
pub const CELL_COUNT: usize = MAZE_SIZE * MAZE_SIZE;
/// Les 4 cellules centrales (objectif).
pub const CENTER_CELLS: [usize; 4] = [5, 6, 9, 10];

pub fn is_center(index: usize) -> bool {
    CENTER_CELLS.contains(&index)
}

/// Coordonnées (ligne, colonne) d'une cellule ; ligne 0 en bas (Sud).
///
/// L'index linéaire `row * 4 + col` n'est utilisé qu'au stockage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Coord {
            row: index / MAZE_SIZE,
            col: index % MAZE_SIZE,
        })
    }

    pub fn index(self) -> usize {
        self.row * MAZE_SIZE + self.col
    }

    /// Cellule voisine dans `direction`, `None` si on sort du carré 4x4.
    /// Un pas vers l'Est depuis la colonne 3 sort de la grille au lieu de
    /// passer sur la ligne suivante.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        let in_range = |v: i32| (0..MAZE_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Coord {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

/// Index de la cellule voisine de `index` dans `heading`.
pub fn neighbor_index(index: usize, heading: Direction) -> Option<usize> {
    Coord::from_index(index)?.step(heading).map(Coord::index)
}

/// Carte du labyrinthe : 16 cellules indexées 0..15.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: [MazeCell; CELL_COUNT],
}

impl CellGrid {
    /// Crée une carte déjà initialisée.
    pub fn new() -> Self {
        let mut grid = Self {
            cells: [MazeCell::new(); CELL_COUNT],
        };
        grid.initialize();
        grid
    }

    /// Remet les 16 cellules à zéro : murs inconnus, non visitées,
    /// distance 0 au centre et 255 ailleurs.
    pub fn initialize(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            *cell = MazeCell::new();
            if is_center(index) {
                cell.distance = 0;
            } else {
                cell.distance = UNKNOWN_DISTANCE;
            }
        }
    }

    /// Récupère une cellule en lecture seule.
    pub fn cell(&self, index: usize) -> Result<&MazeCell, MazeError> {
        self.cells.get(index).ok_or(MazeError::InvalidCell(index))
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut MazeCell, MazeError> {
        self.cells.get_mut(index).ok_or(MazeError::InvalidCell(index))
    }

    pub fn cells(&self) -> &[MazeCell] {
        &self.cells
    }

    pub fn get_wall(&self, index: usize, direction: Direction) -> Result<WallState, MazeError> {
        Ok(self.cell(index)?.walls.get(direction))
    }

    pub fn set_wall(
        &mut self,
        index: usize,
        direction: Direction,
        value: WallState,
    ) -> Result<(), MazeError> {
        self.cell_mut(index)?.walls.set(direction, value);
        Ok(())
    }

    /// Enregistre ce que le capteur a vu depuis `position` en regardant
    /// vers `heading`, des deux côtés du mur.
    ///
    /// Sans position (souris pas encore placée) on ne fait rien. Seule la
    /// cellule courante est marquée visitée, pas la voisine.
    pub fn record_observation(
        &mut self,
        position: Option<usize>,
        heading: Direction,
        wall_detected: bool,
    ) {
        let Some(position) = position else {
            return;
        };
        let value = WallState::from_detection(wall_detected);
        let Ok(cell) = self.cell_mut(position) else {
            return;
        };
        cell.visited = true;
        cell.walls.set(heading, value);

        if let Some(neighbor) = neighbor_index(position, heading) {
            self.cells[neighbor].walls.set(heading.opposite(), value);
        }
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        CellGrid::new()
    }
}
