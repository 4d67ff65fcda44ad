pub mod consume;
pub mod conversation;
pub mod dispatcher;
pub mod meta;
pub mod objects;
pub mod places;

pub use self::dispatcher::*;
