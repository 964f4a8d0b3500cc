pub mod ascii_utils;
pub mod cell;
pub mod direction;
pub mod error;
pub mod explorer;
pub mod json_utils;
pub mod labyrinth;
pub mod map;
pub mod mouse;
pub mod network;
pub mod session;
pub mod simulator;
pub mod wall_follower;
pub mod walls;
