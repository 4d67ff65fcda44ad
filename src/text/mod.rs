pub mod grammar;
pub mod normalizer;
pub mod parser_engine;
pub mod reference;
pub mod resolver;
pub mod scrolls;
pub mod tokenizer;
pub mod vocabulary;

pub use self::grammar::*;
pub use self::normalizer::*;
pub use self::parser_engine::*;
pub use self::reference::*;
pub use self::resolver::*;
pub use self::tokenizer::*;
pub use self::vocabulary::*;
