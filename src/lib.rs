pub mod challenges;
pub mod clean;
pub mod cli;
pub mod error;
pub mod fetch;
pub mod models;
pub mod paths;
pub mod registry;
pub mod runner;
pub mod scaffold;
pub mod templates;
pub mod testrun;

pub use error::{AdventError, Result};
