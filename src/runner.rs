use std::any::Any;
use std::fs;
use std::panic;
use std::time::{Duration, Instant};

use anyhow::anyhow;

use crate::error::{AdventError, Result};
use crate::models::{Coordinate, Part};
use crate::paths::{ChallengePaths, SOLUTION_FILE};
use crate::registry::{Answer, Registry, Variant};

const REFACTORED_FILE: &str = "solution_refactored.rs";

#[derive(Debug)]
pub struct RunReport {
    pub coordinate: Coordinate,
    pub part: Part,
    pub answer: Answer,
    pub elapsed: Duration,
}

/// Runs one registered entry point against `<day dir>/<input_name>`.
///
/// The entry point is resolved before the input is read, so a missing part
/// is reported as [`AdventError::Contract`] even when the input is absent.
pub fn run_solution(
    registry: &Registry,
    paths: &ChallengePaths,
    coordinate: Coordinate,
    part: Part,
    input_name: &str,
    variant: Variant,
) -> Result<RunReport> {
    let Coordinate { year, day } = coordinate;
    let source_file = match variant {
        Variant::Canonical => SOLUTION_FILE,
        Variant::Refactored => REFACTORED_FILE,
    };
    let solution_path = paths.day_file(year, day, source_file);

    let entry = registry
        .get(coordinate, variant)
        .and_then(|solution| solution.entry_point(part))
        .ok_or_else(|| AdventError::Contract {
            part,
            path: solution_path.clone(),
        })?;
    log::debug!(
        "resolved {} in {}",
        part.function_name(),
        solution_path.display()
    );

    let input_path = paths.day_file(year, day, input_name);
    let input = fs::read_to_string(&input_path).map_err(|e| AdventError::io(&input_path, e))?;

    let start = Instant::now();
    let answer = panic::catch_unwind(|| entry(&input))
        .unwrap_or_else(|payload| Err(anyhow!("panicked: {}", panic_message(&*payload))))
        .map_err(|source| AdventError::Solution { part, source })?;
    let elapsed = start.elapsed();
    log::info!("{coordinate}, Part {part} finished in {elapsed:?}");

    Ok(RunReport {
        coordinate,
        part,
        answer,
        elapsed,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
