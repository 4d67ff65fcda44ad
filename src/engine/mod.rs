pub mod game;
pub mod procedures;

pub use self::game::*;
pub use self::procedures::*;
