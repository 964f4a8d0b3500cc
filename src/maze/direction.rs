use crate::maze::error::MazeError;

/// Représente l'orientation possible de la souris.
///
/// Les valeurs numériques croissent dans le sens horaire depuis le Nord,
/// comme l'attend l'hôte (0=North, 1=East, 2=South, 3=West).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Valeur brute 0..3.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Rotation de `quarter_turns` quarts de tour dans le sens horaire.
    fn rotate(self, quarter_turns: u8) -> Self {
        Direction::ALL[((self.index() + quarter_turns) % 4) as usize]
    }

    /// Tourne à droite (par ex. North -> East)
    pub fn turn_right(self) -> Self {
        self.rotate(1)
    }

    /// Tourne à gauche (par ex. North -> West)
    pub fn turn_left(self) -> Self {
        self.rotate(3)
    }

    /// Fait demi tour (par ex. North -> South)
    pub fn turn_back(self) -> Self {
        self.rotate(2)
    }

    /// Direction du mur vu depuis la cellule voisine.
    pub fn opposite(self) -> Self {
        self.turn_back()
    }

    /// Déplacement (ligne, colonne) d'un pas dans cette direction.
    /// Le Nord fait monter la ligne : l'index linéaire augmente de 4.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::North
    }
}

impl TryFrom<u8> for Direction {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::South),
            3 => Ok(Direction::West),
            other => Err(MazeError::InvalidDirection(other)),
        }
    }
}
