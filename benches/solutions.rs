use criterion::{criterion_group, criterion_main, Criterion};

use advent::challenges::y2024;

fn bench_2024(c: &mut Criterion) {
    y2024::day01::solution_bench::bench(c, "2024/day01");
    y2024::day02::solution_bench::bench(c, "2024/day02");
    y2024::day03::solution_bench::bench(c, "2024/day03");
}

criterion_group!(benches, bench_2024);
criterion_main!(benches);
