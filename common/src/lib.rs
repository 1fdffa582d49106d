pub mod config;
pub mod fs;

pub use config::*;
pub use fs::*;
