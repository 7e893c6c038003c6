use anyhow::{Context, Result};

use crate::registry::Answer;

pub(super) fn parse_reports(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            line.split_whitespace()
                .map(|level| {
                    level
                        .parse::<i64>()
                        .with_context(|| format!("report {}: {:?}", index + 1, level))
                })
                .collect::<Result<Vec<i64>>>()
        })
        .collect()
}

/// Levels must move in one direction, by 1 to 3 each step.
pub(super) fn is_safe(levels: &[i64]) -> bool {
    let mut increasing = true;
    let mut decreasing = true;

    for i in 1..levels.len() {
        let diff = levels[i] - levels[i - 1];
        if diff == 0 || diff.abs() > 3 {
            return false;
        }
        if diff > 0 {
            decreasing = false;
        } else {
            increasing = false;
        }
    }

    increasing || decreasing
}

pub fn part_one(input: &str) -> Result<Answer> {
    let reports = parse_reports(input)?;

    let mut safe = 0;
    for levels in &reports {
        if is_safe(levels) {
            safe += 1;
        }
    }
    Ok(safe)
}

pub fn part_two(input: &str) -> Result<Answer> {
    let reports = parse_reports(input)?;

    let mut safe = 0;
    for levels in &reports {
        if is_safe(levels) {
            safe += 1;
            continue;
        }

        for skip in 0..levels.len() {
            let mut dampened = levels.clone();
            dampened.remove(skip);
            if is_safe(&dampened) {
                safe += 1;
                break;
            }
        }
    }
    Ok(safe)
}
