mod action;
mod adjacency;
mod board;
mod display;
mod game_state;
mod history;
mod intent;
mod options;
mod pathing;
mod player;
mod position;
mod rejection;
mod resolver;
mod serde;
mod snapshot;

pub mod constants;
pub mod engine;

pub use action::*;
pub use adjacency::*;
pub use board::*;
pub use game_state::*;
pub use history::*;
pub use intent::*;
pub use options::*;
pub use pathing::*;
pub use player::*;
pub use position::*;
pub use rejection::*;
pub use resolver::*;
pub use snapshot::*;

#[cfg(test)]
mod game_state_test;
