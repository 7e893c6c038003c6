use anyhow::Result;
use regex::Regex;

use crate::registry::Answer;

const MUL: &str = r"mul\((\d{1,3}),(\d{1,3})\)";

fn product(a: &str, b: &str) -> Result<Answer> {
    Ok(a.parse::<Answer>()? * b.parse::<Answer>()?)
}

pub fn part_one(input: &str) -> Result<Answer> {
    let re = Regex::new(MUL)?;

    let mut sum = 0;
    for caps in re.captures_iter(input) {
        sum += product(&caps[1], &caps[2])?;
    }
    Ok(sum)
}

/// Like part one, but `don't()` disables later `mul`s until the next `do()`.
pub fn part_two(input: &str) -> Result<Answer> {
    let re = Regex::new(&format!(r"{MUL}|do\(\)|don't\(\)"))?;

    let mut enabled = true;
    let mut sum = 0;
    for caps in re.captures_iter(input) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ if enabled => sum += product(&caps[1], &caps[2])?,
            _ => {}
        }
    }
    Ok(sum)
}
