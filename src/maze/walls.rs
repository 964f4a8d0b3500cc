use crate::maze::direction::Direction;
use crate::maze::error::MazeError;

/// Connaissance d'un mur dans une direction donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallState {
    Open = 0,
    Wall = 1,
    Unknown = 2,
}

impl WallState {
    pub fn from_detection(wall_detected: bool) -> Self {
        if wall_detected {
            WallState::Wall
        } else {
            WallState::Open
        }
    }
}

impl TryFrom<u8> for WallState {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WallState::Open),
            1 => Ok(WallState::Wall),
            2 => Ok(WallState::Unknown),
            other => Err(MazeError::InvalidWallState(other)),
        }
    }
}

const FIELD_MASK: u8 = 0b11;

/// Les 4 murs d'une cellule, compactés sur un octet (2 bits par direction,
/// le Nord sur les bits 0-1, puis Est, Sud, Ouest).
///
/// Seuls `get` et `set` manipulent les bits ; le reste du code ne voit que
/// des `WallState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    /// Les 4 directions à `Unknown`.
    pub fn unknown() -> Self {
        let mut walls = Walls(0);
        for direction in Direction::ALL {
            walls.set(direction, WallState::Unknown);
        }
        walls
    }

    pub fn get(self, direction: Direction) -> WallState {
        let shift = direction.index() * 2;
        match (self.0 >> shift) & FIELD_MASK {
            0 => WallState::Open,
            1 => WallState::Wall,
            // 0b11 n'est jamais écrit par `set`
            _ => WallState::Unknown,
        }
    }

    /// Remplace uniquement le champ de `direction`.
    pub fn set(&mut self, direction: Direction, value: WallState) {
        let shift = direction.index() * 2;
        self.0 &= !(FIELD_MASK << shift);
        self.0 |= (value as u8 & FIELD_MASK) << shift;
    }

    /// Octet brut, tel qu'exposé à l'hôte.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [WallState; 3] = [WallState::Open, WallState::Wall, WallState::Unknown];

    #[test]
    fn unknown_packs_to_0xaa() {
        assert_eq!(Walls::unknown().bits(), 0b1010_1010);
    }

    #[test]
    fn set_only_touches_target_field() {
        for target in Direction::ALL {
            for value in STATES {
                let mut walls = Walls::unknown();
                walls.set(Direction::East, WallState::Wall);
                let before = walls;
                walls.set(target, value);
                assert_eq!(walls.get(target), value);
                for other in Direction::ALL.into_iter().filter(|d| *d != target) {
                    assert_eq!(walls.get(other), before.get(other));
                }
            }
        }
    }

    #[test]
    fn raw_wall_codes() {
        assert_eq!(WallState::try_from(1), Ok(WallState::Wall));
        assert_eq!(WallState::try_from(3), Err(MazeError::InvalidWallState(3)));
        assert_eq!(WallState::from_detection(false), WallState::Open);
    }
}
