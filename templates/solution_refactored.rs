//! Alternate implementation, registered as the refactored variant.

use anyhow::Result;

use crate::registry::Answer;

pub fn part_one(input: &str) -> Result<Answer> {
    let _lines: Vec<&str> = input.lines().collect();
    Ok(0)
}

pub fn part_two(input: &str) -> Result<Answer> {
    let _lines: Vec<&str> = input.lines().collect();
    Ok(0)
}
