pub mod config;
pub mod engine;
pub mod error;
pub mod logger;

pub use engine::tictactoe;
pub use error::{ConfigError, GameError, IllegalMove};
