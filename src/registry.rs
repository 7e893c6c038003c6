use std::collections::BTreeMap;

use crate::models::{Coordinate, Part};

pub type Answer = i64;

/// One puzzle part: raw input text in, numeric answer out.
pub type PartFn = fn(&str) -> anyhow::Result<Answer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Canonical,
    Refactored,
}

/// Entry points registered for one day. Either part may still be missing.
#[derive(Clone, Copy, Default)]
pub struct Solution {
    pub part_one: Option<PartFn>,
    pub part_two: Option<PartFn>,
}

impl Solution {
    pub fn new(part_one: PartFn, part_two: PartFn) -> Self {
        Self {
            part_one: Some(part_one),
            part_two: Some(part_two),
        }
    }

    pub fn part_one_only(part_one: PartFn) -> Self {
        Self {
            part_one: Some(part_one),
            part_two: None,
        }
    }

    pub fn entry_point(&self, part: Part) -> Option<PartFn> {
        match part {
            Part::One => self.part_one,
            Part::Two => self.part_two,
        }
    }
}

/// Static lookup from a puzzle day to its compiled-in solutions.
#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<(u16, u8, Variant), Solution>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        coordinate: Coordinate,
        variant: Variant,
        solution: Solution,
    ) -> &mut Self {
        let key = (coordinate.year.get(), coordinate.day.get(), variant);
        if self.entries.insert(key, solution).is_some() {
            log::warn!("{coordinate} ({variant:?}) registered twice, keeping the last one");
        }
        self
    }

    pub fn get(&self, coordinate: Coordinate, variant: Variant) -> Option<&Solution> {
        self.entries
            .get(&(coordinate.year.get(), coordinate.day.get(), variant))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
