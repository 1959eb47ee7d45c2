//! CLI command implementations.

pub mod game;
pub mod list;

pub use game::GameCommand;
pub use list::ListCommand;
