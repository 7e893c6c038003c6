use std::collections::HashMap;

use anyhow::Result;

use super::solution::parse_columns;
use crate::registry::Answer;

pub fn part_one(input: &str) -> Result<Answer> {
    let (mut left, mut right) = parse_columns(input)?;
    left.sort_unstable();
    right.sort_unstable();

    Ok(left.iter().zip(&right).map(|(l, r)| (l - r).abs()).sum())
}

pub fn part_two(input: &str) -> Result<Answer> {
    let (left, right) = parse_columns(input)?;

    let mut frequency: HashMap<Answer, Answer> = HashMap::new();
    for r in right {
        *frequency.entry(r).or_default() += 1;
    }

    Ok(left
        .iter()
        .map(|l| l * frequency.get(l).copied().unwrap_or(0))
        .sum())
}
