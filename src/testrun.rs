use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::{AdventError, Result};
use crate::models::{Coordinate, RunnerConfig};
use crate::paths::{ChallengePaths, BENCH_FILE, TEST_FILE};

/// Exit code reported when the child ended without one (killed by a signal).
const NO_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    Test,
    Bench,
}

impl Suite {
    pub fn file_name(&self) -> &'static str {
        match self {
            Suite::Test => TEST_FILE,
            Suite::Bench => BENCH_FILE,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Suite::Test => "tests",
            Suite::Bench => "benchmarks",
        }
    }
}

/// Spawns the configured runner for one day's test or bench file inside the
/// project `root` and returns the child's exit code unchanged. Stdio is
/// inherited.
pub fn run_suite(
    runner: &RunnerConfig,
    root: &Path,
    paths: &ChallengePaths,
    coordinate: Coordinate,
    suite: Suite,
) -> Result<i32> {
    let target = paths.day_file(coordinate.year, coordinate.day, suite.file_name());
    let args = expand_args(&runner.args, &target, coordinate);

    log::info!(
        "running {} for {}: {} {}",
        suite.display_name(),
        coordinate,
        runner.program,
        args.join(" ")
    );

    let status = Command::new(&runner.program)
        .args(&args)
        .current_dir(root)
        .status()
        .map_err(|source| AdventError::Spawn {
            program: runner.program.clone(),
            source,
        })?;

    Ok(exit_code(status))
}

fn expand_args(args: &[String], target: &Path, coordinate: Coordinate) -> Vec<String> {
    let path = target.to_string_lossy();
    let year = coordinate.year.to_string();
    let day = format!("{:02}", coordinate.day.get());

    args.iter()
        .map(|arg| {
            arg.replace("{path}", &path)
                .replace("{year}", &year)
                .replace("{day}", &day)
        })
        .collect()
}

fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => {
            log::warn!("runner terminated without an exit code: {status}");
            NO_EXIT_CODE
        }
    }
}
