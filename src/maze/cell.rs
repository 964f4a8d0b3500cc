use crate::maze::walls::Walls;

/// Distance inconnue (champ réservé au flood-fill).
pub const UNKNOWN_DISTANCE: u8 = 255;

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une configuration de murs, un indicateur de visite
/// et une distance au centre (255 tant qu'elle n'est pas calculée).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeCell {
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// Vrai dès que la souris a occupé la cellule ou mesuré depuis elle.
    pub visited: bool,
    pub distance: u8,
}

impl MazeCell {
    /// Crée une nouvelle instance de `MazeCell`.
    ///
    /// Initialise les murs à `Unknown`, non visitée, distance inconnue.
    pub fn new() -> Self {
        Self {
            walls: Walls::unknown(),
            visited: false,
            distance: UNKNOWN_DISTANCE,
        }
    }
}

impl Default for MazeCell {
    fn default() -> Self {
        MazeCell::new()
    }
}
