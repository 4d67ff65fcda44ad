pub mod line_editor;
pub mod terminal_input;

pub use self::line_editor::*;
pub use self::terminal_input::*;
