use std::fmt;

use chrono::{Datelike, Local};

use crate::error::{AdventError, Result};

pub const YEAR_ERROR: &str = "Error: Please provide a valid year using the -y or --year flag.";
pub const DAY_ERROR: &str = "Error: Please provide a valid day (1-25) using the -d or --day flag.";
pub const PART_ERROR: &str = "Error: Please specify part 1 or 2 using the -p or --part flag.";
pub const QUESTION_ERROR: &str =
    "Error: Please specify the question part as 1 or 2 using the --question flag.";

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(u16);

impl Year {
    pub const fn new(year: u16) -> Self {
        Year(year)
    }

    pub fn current() -> Self {
        Year(Local::now().year().clamp(0, u16::MAX as i32) as u16)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u16>()
            .map(Year)
            .map_err(|_| AdventError::Validation(YEAR_ERROR.to_string()))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A puzzle day, always within 1..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(u8);

impl Day {
    pub fn new(day: u8) -> Option<Self> {
        (FIRST_DAY..=LAST_DAY).contains(&day).then_some(Day(day))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(Day::new)
            .ok_or_else(|| AdventError::Validation(DAY_ERROR.to_string()))
    }

    pub fn all() -> impl Iterator<Item = Day> {
        (FIRST_DAY..=LAST_DAY).map(Day)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Directory name for the day, zero-padded to two digits.
    pub fn dir_name(self) -> String {
        format!("day{:02}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn parse(raw: &str) -> Result<Self> {
        Part::from_number(raw.trim()).ok_or_else(|| AdventError::Validation(PART_ERROR.to_string()))
    }

    fn from_number(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Part::One),
            "2" => Some(Part::Two),
            _ => None,
        }
    }

    /// Parses the `--question` value, which carries its own error message.
    pub fn parse_question(raw: &str) -> Result<Self> {
        Part::from_number(raw.trim())
            .ok_or_else(|| AdventError::Validation(QUESTION_ERROR.to_string()))
    }

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub fn function_name(self) -> &'static str {
        match self {
            Part::One => "part_one",
            Part::Two => "part_two",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Identifies one puzzle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub year: Year,
    pub day: Day,
}

impl Coordinate {
    pub fn new(year: Year, day: Day) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}, Day {}", self.year, self.day)
    }
}
