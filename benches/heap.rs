use criterion::{Criterion, black_box, criterion_group, criterion_main};
use double_ended_collections::MinMaxHeap;
use heapless::binary_heap::Min;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic scrambled input so every run sees the same sequence.
fn scrambled(n: usize) -> Vec<i32> {
    (0..n as u64)
        .map(|i| (i.wrapping_mul(2_654_435_761) % 10_007) as i32)
        .collect()
}

fn bench_minmax_heap(c: &mut Criterion) {
    let n = 1000;
    let input = scrambled(n);
    {
        let mut group = c.benchmark_group("BinaryHeap vs MinMaxHeap (Push 1000)");
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::new();
                for &v in &input {
                    h.push(black_box(v));
                }
                h
            })
        });

        group.bench_function("MinMaxHeap<i32>", |b| {
            b.iter(|| {
                let mut h = MinMaxHeap::new();
                for &v in &input {
                    h.push(black_box(v));
                }
                h
            })
        });

        group.bench_function("heapless::BinaryHeap<i32, Min, 1024>", |b| {
            b.iter(|| {
                let mut h: heapless::BinaryHeap<i32, Min, 1024> = heapless::BinaryHeap::new();
                for &v in &input {
                    let _ = h.push(black_box(v));
                }
                h
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs MinMaxHeap (Heapify 1000)");
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| BinaryHeap::from(black_box(input.clone())))
        });

        group.bench_function("MinMaxHeap<i32>", |b| {
            b.iter(|| MinMaxHeap::from(black_box(input.clone())))
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs MinMaxHeap (Drain min 1000)");
        let h_std: BinaryHeap<Reverse<i32>> = input.iter().copied().map(Reverse).collect();
        let h_mm: MinMaxHeap<i32> = input.iter().copied().collect();

        group.bench_function("std::collections::BinaryHeap<Reverse>", |b| {
            b.iter(|| {
                let mut h = h_std.clone();
                while let Some(Reverse(v)) = h.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_function("MinMaxHeap<i32>", |b| {
            b.iter(|| {
                let mut h = h_mm.clone();
                while let Ok(v) = h.pop_min() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }

    {
        // A plain binary heap has no cheap access to the opposite end.
        let mut group = c.benchmark_group("MinMaxHeap (Alternating pops 1000)");
        let h_mm: MinMaxHeap<i32> = input.iter().copied().collect();
        group.bench_function("MinMaxHeap<i32>", |b| {
            b.iter(|| {
                let mut h = h_mm.clone();
                loop {
                    let Ok(lo) = h.pop_min() else { break };
                    black_box(lo);
                    let Ok(hi) = h.pop_max() else { break };
                    black_box(hi);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs MinMaxHeap (Peek)");
        let h_std: BinaryHeap<i32> = input.iter().copied().collect();
        let h_mm: MinMaxHeap<i32> = input.iter().copied().collect();

        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                black_box(h_std.peek());
            })
        });

        group.bench_function("MinMaxHeap<i32> peek_min", |b| {
            b.iter(|| {
                black_box(h_mm.peek_min().ok());
            })
        });

        group.bench_function("MinMaxHeap<i32> peek_max", |b| {
            b.iter(|| {
                black_box(h_mm.peek_max().ok());
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_minmax_heap);
criterion_main!(benches);
