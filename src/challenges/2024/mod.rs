//! Advent of Code 2024.

use crate::registry::{Registry, Solution, Variant};

pub mod day01 {
    pub mod solution;
    pub mod solution_refactored;
    #[cfg(feature = "bench")]
    pub mod solution_bench;
    #[cfg(test)]
    mod solution_test;
}

pub mod day02 {
    pub mod solution;
    pub mod solution_refactored;
    #[cfg(feature = "bench")]
    pub mod solution_bench;
    #[cfg(test)]
    mod solution_test;
}

pub mod day03 {
    pub mod solution;
    #[cfg(feature = "bench")]
    pub mod solution_bench;
    #[cfg(test)]
    mod solution_test;
}

pub const YEAR: u16 = 2024;

pub(crate) fn register(registry: &mut Registry) {
    use Variant::{Canonical, Refactored};

    let mut add = |day: u8, variant: Variant, solution: Solution| {
        super::register_day(&mut *registry, YEAR, day, variant, solution)
    };

    add(1, Canonical, Solution::new(day01::solution::part_one, day01::solution::part_two));
    add(
        1,
        Refactored,
        Solution::new(
            day01::solution_refactored::part_one,
            day01::solution_refactored::part_two,
        ),
    );
    add(2, Canonical, Solution::new(day02::solution::part_one, day02::solution::part_two));
    add(
        2,
        Refactored,
        Solution::new(
            day02::solution_refactored::part_one,
            day02::solution_refactored::part_two,
        ),
    );
    add(3, Canonical, Solution::new(day03::solution::part_one, day03::solution::part_two));
}
