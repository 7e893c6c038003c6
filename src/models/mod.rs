pub mod config;
pub mod coordinate;

pub use config::{Config, RunnerConfig};
pub use coordinate::{Coordinate, Day, Part, Year};
