use crate::maze::direction::Direction;
use crate::maze::error::MazeError;
use crate::maze::map::{is_center, neighbor_index, CELL_COUNT};

/// Position et orientation supposées de la souris.
///
/// `position` vaut `None` tant que l'hôte n'a pas placé la souris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mouse {
    position: Option<usize>,
    pub heading: Direction,
}

impl Default for Mouse {
    fn default() -> Self {
        Self {
            position: None,
            heading: Direction::North,
        }
    }
}

impl Mouse {
    pub fn new(position: usize, heading: Direction) -> Result<Self, MazeError> {
        let mut mouse = Mouse {
            heading,
            ..Mouse::default()
        };
        mouse.set_position(position)?;
        Ok(mouse)
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Place la souris.
    pub fn set_position(&mut self, position: usize) -> Result<(), MazeError> {
        if position >= CELL_COUNT {
            return Err(MazeError::InvalidCell(position));
        }
        self.position = Some(position);
        Ok(())
    }

    /// Retour à l'état "pas encore placée".
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    pub fn turn_around(&mut self) {
        self.heading = self.heading.turn_back();
    }

    /// Avance d'une cellule dans l'orientation courante.
    ///
    /// Renvoie `false` sans rien changer si la souris n'est pas placée ou si
    /// le pas sortirait de la grille. L'orientation n'est jamais modifiée.
    pub fn move_forward(&mut self) -> bool {
        let Some(next) = self
            .position
            .and_then(|position| neighbor_index(position, self.heading))
        else {
            return false;
        };
        self.position = Some(next);
        true
    }

    pub fn is_at_center(&self) -> bool {
        self.position.is_some_and(is_center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset_facing_north() {
        let mouse = Mouse::default();
        assert_eq!(mouse.position(), None);
        assert_eq!(mouse.heading, Direction::North);
        assert!(!mouse.is_at_center());
    }

    #[test]
    fn set_position_validates_range() {
        let mut mouse = Mouse::default();
        assert_eq!(mouse.set_position(16), Err(MazeError::InvalidCell(16)));
        assert_eq!(mouse.position(), None);
        mouse.set_position(15).unwrap();
        assert_eq!(mouse.position(), Some(15));
    }

    #[test]
    fn move_forward_keeps_heading() {
        let mut mouse = Mouse::new(0, Direction::North).unwrap();
        assert!(mouse.move_forward());
        assert_eq!(mouse.position(), Some(4));
        assert_eq!(mouse.heading, Direction::North);
        mouse.turn_right();
        assert!(mouse.move_forward());
        assert_eq!(mouse.position(), Some(5));
    }

    #[test]
    fn blocked_moves_fail_without_side_effects() {
        let mut mouse = Mouse::new(3, Direction::East).unwrap();
        assert!(!mouse.move_forward());
        assert_eq!(mouse.position(), Some(3));
        assert_eq!(mouse.heading, Direction::East);

        let mut unset = Mouse::default();
        assert!(!unset.move_forward());
        assert_eq!(unset.position(), None);
    }

    #[test]
    fn center_detection() {
        for index in 0..CELL_COUNT {
            let mouse = Mouse::new(index, Direction::North).unwrap();
            assert_eq!(mouse.is_at_center(), [5, 6, 9, 10].contains(&index));
        }
    }

    #[test]
    fn turning() {
        let mut mouse = Mouse::default();
        mouse.turn_left();
        assert_eq!(mouse.heading, Direction::West);
        mouse.turn_around();
        assert_eq!(mouse.heading, Direction::East);
        mouse.turn_right();
        assert_eq!(mouse.heading, Direction::South);
    }
}
