pub mod display_crossterm;
pub mod display_headless;
pub mod display_logging;
pub mod display_trait;

pub use self::display_crossterm::*;
pub use self::display_headless::*;
pub use self::display_logging::*;
pub use self::display_trait::*;
