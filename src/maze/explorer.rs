/*!
 * # Politique d'exploration réactive
 *
 * À chaque échantillon du capteur frontal, la souris enregistre le mur vu,
 * s'arrête si elle est au centre, avance si la voie est libre, sinon tourne
 * à droite, puis fait demi-tour, puis tourne à gauche en re-vérifiant entre
 * chaque rotation. Aucun état n'est gardé entre deux appels : toute la
 * continuité vit dans la `Mouse` et la `CellGrid`.
 */

use log::{debug, info};

use crate::maze::direction::Direction;
use crate::maze::map::CellGrid;
use crate::maze::mouse::Mouse;

/// En dessous de cette distance (cm), on considère qu'il y a un mur devant.
pub const WALL_THRESHOLD: f32 = 10.0;

/// Source de mesures de distance frontale.
pub trait RangeSensor {
    /// Distance mesurée devant la souris pour cette position et orientation.
    fn read(&mut self, position: Option<usize>, heading: Direction) -> f32;
}

/// Capteur qui renvoie toujours la même valeur, quelle que soit l'orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedReading(pub f32);

impl RangeSensor for FixedReading {
    fn read(&mut self, _position: Option<usize>, _heading: Direction) -> f32 {
        self.0
    }
}

pub fn is_wall(distance: f32) -> bool {
    distance < WALL_THRESHOLD
}

/// Classe la mesure et l'enregistre pour l'orientation courante.
pub(crate) fn check_front(grid: &mut CellGrid, mouse: &Mouse, distance: f32) -> bool {
    let wall = is_wall(distance);
    if wall {
        debug!("Obstacle detected! Distance: {} cm", distance);
    }
    grid.record_observation(mouse.position(), mouse.heading, wall);
    wall
}

/// Un cycle de décision avec une seule mesure.
///
/// La même mesure sert aussi aux vérifications après chaque rotation,
/// sans nouvelle lecture du capteur ; voir `step_with_sensor` pour
/// une mesure par orientation.
pub fn step(grid: &mut CellGrid, mouse: &mut Mouse, reading: f32) -> bool {
    step_with_sensor(grid, mouse, &mut FixedReading(reading))
}

/// Un cycle de décision, en interrogeant `sensor` après chaque rotation.
///
/// Renvoie `true` quand la souris est sur une cellule centrale.
pub fn step_with_sensor<S: RangeSensor + ?Sized>(
    grid: &mut CellGrid,
    mouse: &mut Mouse,
    sensor: &mut S,
) -> bool {
    let front = sensor.read(mouse.position(), mouse.heading);
    let wall_ahead = check_front(grid, mouse, front);

    if mouse.is_at_center() {
        info!("Found the center! (cell {:?})", mouse.position());
        return true;
    }

    if !wall_ahead {
        mouse.move_forward();
        return false;
    }

    mouse.turn_right();
    let right = sensor.read(mouse.position(), mouse.heading);
    if check_front(grid, mouse, right) {
        mouse.turn_around();
        let back = sensor.read(mouse.position(), mouse.heading);
        if check_front(grid, mouse, back) {
            mouse.turn_left();
        }
    }

    false
}
