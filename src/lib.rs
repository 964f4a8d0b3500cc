pub mod maze;
pub mod server;

pub use maze::direction::Direction;
pub use maze::error::MazeError;
pub use maze::explorer::{RangeSensor, WALL_THRESHOLD};
pub use maze::map::{CellGrid, CENTER_CELLS};
pub use maze::mouse::Mouse;
pub use maze::session::{CellRecord, MouseSession};
pub use maze::walls::WallState;

pub const ADDRESS: &str = "localhost:8778";
