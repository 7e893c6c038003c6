//! Puzzle solutions compiled into the binary.
//!
//! `advent --generate` only writes the stub files. To make a day runnable,
//! declare it in its year's `mod.rs` and register it from that year's
//! `register` function.

#[path = "2024/mod.rs"]
pub mod y2024;

use crate::models::{Coordinate, Day, Year};
use crate::registry::{Registry, Solution, Variant};

/// Every solution known to this build.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    y2024::register(&mut registry);
    registry
}

fn register_day(registry: &mut Registry, year: u16, day: u8, variant: Variant, solution: Solution) {
    match Day::new(day) {
        Some(day) => {
            registry.register(Coordinate::new(Year::new(year), day), variant, solution);
        }
        None => log::warn!("ignoring {year} solution registered for invalid day {day}"),
    }
}
