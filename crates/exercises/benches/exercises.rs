use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use exercises::list::{from_slice, merge_two_lists};
use exercises::lookup::two_sum;

const LEN: i32 = 1_000;

fn bench_merge(c: &mut Criterion) {
    let evens: Vec<i32> = (0..LEN).map(|i| i * 2).collect();
    let odds: Vec<i32> = (0..LEN).map(|i| i * 2 + 1).collect();

    c.bench_function("merge_two_lists_1k", |b| {
        b.iter(|| {
            let merged = merge_two_lists(
                black_box(from_slice(&evens)),
                black_box(from_slice(&odds)),
            );
            black_box(merged)
        })
    });
}

fn bench_two_sum(c: &mut Criterion) {
    let nums: Vec<i32> = (0..LEN).collect();
    // Worst case: the matching pair sits at the very end.
    let target = 2 * LEN - 3;

    c.bench_function("two_sum_1k", |b| {
        b.iter(|| two_sum(black_box(&nums), black_box(target)))
    });
}

criterion_group!(benches, bench_merge, bench_two_sum);
criterion_main!(benches);
