use std::hint::black_box;

use criterion::Criterion;

use super::{solution, solution_refactored};

const INPUT: &str = include_str!("input.txt");

pub fn bench(c: &mut Criterion, prefix: &str) {
    c.bench_function(&format!("{prefix}/part_one"), |b| {
        b.iter(|| solution::part_one(black_box(INPUT)))
    });
    c.bench_function(&format!("{prefix}/part_two"), |b| {
        b.iter(|| solution::part_two(black_box(INPUT)))
    });
    c.bench_function(&format!("{prefix}/part_one_refactored"), |b| {
        b.iter(|| solution_refactored::part_one(black_box(INPUT)))
    });
    c.bench_function(&format!("{prefix}/part_two_refactored"), |b| {
        b.iter(|| solution_refactored::part_two(black_box(INPUT)))
    });
}
