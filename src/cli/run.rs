use std::process::ExitCode;

use crate::challenges;
use crate::error::Result;
use crate::models::{Coordinate, Part};
use crate::registry::Variant;
use crate::runner;

use super::Workspace;

pub fn run_solution(
    workspace: &Workspace,
    coordinate: Coordinate,
    part: Part,
    input: &str,
    variant: Variant,
) -> Result<ExitCode> {
    let registry = challenges::registry();
    log::debug!("{} solutions registered", registry.len());

    let report = runner::run_solution(&registry, &workspace.paths, coordinate, part, input, variant)?;
    println!(
        "Result for Year {}, Day {}, Part {}: {}",
        report.coordinate.year, report.coordinate.day, report.part, report.answer
    );
    Ok(ExitCode::SUCCESS)
}
