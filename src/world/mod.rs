pub mod entities;
pub mod game_state;
pub mod rooms;

pub use self::entities::*;
pub use self::game_state::*;
pub use self::rooms::*;
