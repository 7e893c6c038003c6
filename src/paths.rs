use std::path::{Path, PathBuf};

use crate::models::{Config, Day, Year};

pub const SOLUTION_FILE: &str = "solution.rs";
pub const TEST_FILE: &str = "solution_test.rs";
pub const BENCH_FILE: &str = "solution_bench.rs";
pub const QUESTION_FILE: &str = "question.md";
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

/// Maps puzzle coordinates onto `<root>/<challenges>/<year>/dayNN/`.
#[derive(Debug, Clone)]
pub struct ChallengePaths {
    base: PathBuf,
}

impl ChallengePaths {
    pub fn new(root: impl AsRef<Path>, challenges: impl AsRef<Path>) -> Self {
        Self {
            base: root.as_ref().join(challenges),
        }
    }

    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self::new(root, &config.challenges_dir)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn year_dir(&self, year: Year) -> PathBuf {
        self.base.join(year.to_string())
    }

    pub fn day_dir(&self, year: Year, day: Day) -> PathBuf {
        self.year_dir(year).join(day.dir_name())
    }

    pub fn day_file(&self, year: Year, day: Day, name: &str) -> PathBuf {
        self.day_dir(year, day).join(name)
    }
}
