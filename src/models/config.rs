use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AdventError, Result};

const PROJECT_CONFIG_FILE: &str = "advent.json";

pub const DEFAULT_CHALLENGES_DIR: &str = "src/challenges";
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
pub const DEFAULT_SESSION_ENV: &str = "SESSION_COOKIE";

/// External command used by the test and bench proxies.
///
/// Arguments may contain `{path}`, `{year}` and `{day}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl RunnerConfig {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn default_test() -> Self {
        Self::new("cargo", &["test", "--quiet", "--", "y{year}::day{day}::"])
    }

    fn default_bench() -> Self {
        Self::new(
            "cargo",
            &[
                "bench",
                "--features",
                "bench",
                "--bench",
                "solutions",
                "--",
                "{year}/day{day}/",
            ],
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub challenges_dir: PathBuf,
    pub base_url: String,
    /// Name of the environment variable holding the session token.
    pub session_env: String,
    pub test_runner: RunnerConfig,
    pub bench_runner: RunnerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            challenges_dir: PathBuf::from(DEFAULT_CHALLENGES_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            session_env: DEFAULT_SESSION_ENV.to_string(),
            test_runner: RunnerConfig::default_test(),
            bench_runner: RunnerConfig::default_bench(),
        }
    }
}

pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("advent").join("config.json"))
}

/// Loads `<root>/advent.json`, falling back to the user config, then defaults.
pub fn load_config(root: &Path) -> Result<Config> {
    let project = root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return read_config(&project);
    }

    match get_user_config_path() {
        Some(user) if user.is_file() => read_config(&user),
        _ => {
            log::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|e| AdventError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| AdventError::Config {
        path: path.to_path_buf(),
        source,
    })
}
