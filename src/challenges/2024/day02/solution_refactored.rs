use anyhow::Result;

use super::solution::{is_safe, parse_reports};
use crate::registry::Answer;

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let dampened: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, level)| *level)
                .collect();
            is_safe(&dampened)
        })
}

pub fn part_one(input: &str) -> Result<Answer> {
    Ok(parse_reports(input)?
        .iter()
        .filter(|levels| is_safe(levels))
        .count() as Answer)
}

pub fn part_two(input: &str) -> Result<Answer> {
    Ok(parse_reports(input)?
        .iter()
        .filter(|levels| is_safe_dampened(levels))
        .count() as Answer)
}
