mod clean;
mod fetch;
mod generate;
mod run;

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, ArgGroup, CommandFactory, Parser};

use crate::error::{AdventError, Result};
use crate::fetch::{FetchRequest, FetchTarget};
use crate::models::config::load_config;
use crate::models::{Config, Coordinate, Day, Part, Year};
use crate::paths::{ChallengePaths, DEFAULT_INPUT_FILE};
use crate::registry::Variant;
use crate::testrun::Suite;

const NO_COMMAND_ERROR: &str = "Error: No command specified. Use --help for usage instructions.";
const FETCH_TARGET_ERROR: &str =
    "Error: Please specify either the --data flag or the --question flag.";

const EXAMPLES: &str = "\
Generate:
  $ advent --generate --year 2020
  $ advent --generate            # omit the year to stub for current year

Run:
  $ advent --run --year 2020 --day 1 --part 1
  $ advent --run --year 2020 --day 1 --part 1 --input input_sample.txt

Test:
  $ advent --test --year 2020 --day 1

Bench:
  $ advent --bench --year 2020 --day 1

Clean:
  $ advent --clean --year 2020
  $ advent --clean --year 2020 --day 1

Fetch (requires the session cookie in SESSION_COOKIE):
  $ advent --fetch --data --year 2020 --day 1
  $ advent --fetch --question 1 --year 2020 --day 1";

#[derive(Parser, Debug)]
#[command(name = "advent")]
#[command(before_help = "Advent of Code CLI")]
#[command(about = "Scaffold, run, test and fetch daily Advent of Code puzzles", long_about = None)]
#[command(disable_help_flag = true, after_help = EXAMPLES)]
#[command(group(
    ArgGroup::new("command")
        .args(["generate", "run", "test", "bench", "clean", "fetch", "help"])
        .multiple(false)
))]
pub struct Cli {
    /// Generate directories and files for the given year
    #[arg(short, long, help_heading = "Commands")]
    pub generate: bool,

    /// Execute the solution
    #[arg(short, long, help_heading = "Commands")]
    pub run: bool,

    /// Run tests for the specified day
    #[arg(short, long, help_heading = "Commands")]
    pub test: bool,

    /// Run benchmarks for the specified day
    #[arg(short, long, help_heading = "Commands")]
    pub bench: bool,

    /// Remove the directory of <year>, or only <day> within it
    #[arg(short, long, help_heading = "Commands")]
    pub clean: bool,

    /// Download puzzle data for <day> (needs --data or --question)
    #[arg(short, long, help_heading = "Commands")]
    pub fetch: bool,

    /// Show this help message
    #[arg(short, long, help_heading = "Commands")]
    pub help: bool,

    /// Year of the challenge (default: current year)
    #[arg(short, long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Day of the challenge (1-25)
    #[arg(short, long, value_name = "DAY")]
    pub day: Option<String>,

    /// Part of the challenge to run (1 or 2)
    #[arg(short, long, value_name = "PART")]
    pub part: Option<String>,

    /// Input file inside the day directory
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input: String,

    /// With --fetch: download the puzzle input
    #[arg(long)]
    pub data: bool,

    /// With --fetch: download the description of part 1 or 2
    #[arg(short, long, value_name = "1|2")]
    pub question: Option<String>,

    /// With --run: use the refactored implementation
    #[arg(long)]
    pub refactored: bool,

    /// Project root (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A validated command, ready to execute.
#[derive(Debug)]
pub enum Request {
    Help,
    Generate {
        year: Year,
    },
    Run {
        coordinate: Coordinate,
        part: Part,
        input: String,
        variant: Variant,
    },
    Suite {
        coordinate: Coordinate,
        suite: Suite,
    },
    Clean {
        year: Year,
        day: Option<Day>,
    },
    Fetch(FetchRequest),
}

impl Request {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.help {
            return Ok(Request::Help);
        }

        if cli.generate {
            return Ok(Request::Generate {
                year: year_or_current(cli)?,
            });
        }

        if cli.test || cli.bench {
            let day = required_day(cli)?;
            let year = year_or_current(cli)?;
            let suite = if cli.test { Suite::Test } else { Suite::Bench };
            return Ok(Request::Suite {
                coordinate: Coordinate::new(year, day),
                suite,
            });
        }

        if cli.run {
            let day = required_day(cli)?;
            let part = Part::parse(cli.part.as_deref().unwrap_or_default())?;
            let year = year_or_current(cli)?;
            let variant = if cli.refactored {
                Variant::Refactored
            } else {
                Variant::Canonical
            };
            return Ok(Request::Run {
                coordinate: Coordinate::new(year, day),
                part,
                input: cli.input.clone(),
                variant,
            });
        }

        if cli.clean {
            let year = year_or_current(cli)?;
            let day = cli.day.as_deref().map(Day::parse).transpose()?;
            return Ok(Request::Clean { year, day });
        }

        if cli.fetch {
            let year = year_or_current(cli)?;
            let day = required_day(cli)?;
            let target = match (cli.data, cli.question.as_deref()) {
                (true, _) => FetchTarget::Input,
                (false, Some(question)) => FetchTarget::Question(Part::parse_question(question)?),
                (false, None) => return Err(AdventError::Validation(FETCH_TARGET_ERROR.to_string())),
            };
            return Ok(Request::Fetch(FetchRequest {
                coordinate: Coordinate::new(year, day),
                target,
            }));
        }

        Err(AdventError::Validation(NO_COMMAND_ERROR.to_string()))
    }
}

fn year_or_current(cli: &Cli) -> Result<Year> {
    match cli.year.as_deref() {
        Some(raw) => Year::parse(raw),
        None => Ok(Year::current()),
    }
}

fn required_day(cli: &Cli) -> Result<Day> {
    Day::parse(cli.day.as_deref().unwrap_or_default())
}

/// Project root, its configuration and the resolved challenge paths.
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub paths: ChallengePaths,
}

impl Workspace {
    pub fn load(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => env::current_dir().map_err(|e| AdventError::io(".", e))?,
        };
        let config = load_config(&root)?;
        let paths = ChallengePaths::from_config(&root, &config);
        log::debug!("challenges live in {}", paths.base().display());

        Ok(Self {
            root,
            config,
            paths,
        })
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let request = match Request::from_cli(&cli) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e);
            if cli.test || cli.bench {
                let flag = if cli.test { "--test" } else { "--bench" };
                println!("ex: `advent {} --year 2020 --day 1`", flag);
            }
            return ExitCode::FAILURE;
        }
    };

    match execute(cli.root.as_deref(), request) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Help never touches the project; every other command loads it first.
fn execute(root: Option<&Path>, request: Request) -> Result<ExitCode> {
    let workspace = || Workspace::load(root);

    match request {
        Request::Help => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }
        Request::Generate { year } => generate::generate_year(&workspace()?, year),
        Request::Run {
            coordinate,
            part,
            input,
            variant,
        } => run::run_solution(&workspace()?, coordinate, part, &input, variant),
        Request::Suite { coordinate, suite } => test::run_suite(&workspace()?, coordinate, suite),
        Request::Clean { year, day } => clean::clean(&workspace()?, year, day),
        Request::Fetch(request) => fetch::fetch(&workspace()?, request),
    }
}

pub fn print_help() {
    if let Err(e) = Cli::command().print_help() {
        log::error!("failed to print help: {e}");
    }
}
