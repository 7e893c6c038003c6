use anyhow::{bail, Context, Result};

use crate::registry::Answer;

pub(super) fn parse_columns(input: &str) -> Result<(Vec<Answer>, Vec<Answer>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(a), Some(b)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected two columns, got {:?}", index + 1, line);
        };
        let context = || format!("line {}: {:?}", index + 1, line);
        left.push(a.parse::<Answer>().with_context(context)?);
        right.push(b.parse::<Answer>().with_context(context)?);
    }

    Ok((left, right))
}

pub fn part_one(input: &str) -> Result<Answer> {
    let (mut left, mut right) = parse_columns(input)?;
    left.sort_unstable();
    right.sort_unstable();

    let mut total = 0;
    for (l, r) in left.iter().zip(&right) {
        total += (l - r).abs();
    }
    Ok(total)
}

pub fn part_two(input: &str) -> Result<Answer> {
    let (left, right) = parse_columns(input)?;

    let mut total = 0;
    for l in &left {
        let count = right.iter().filter(|r| *r == l).count() as Answer;
        total += l * count;
    }
    Ok(total)
}
