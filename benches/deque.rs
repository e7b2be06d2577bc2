use criterion::{Criterion, black_box, criterion_group, criterion_main};
use double_ended_collections::{Deque, DequeOptions};
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs Deque (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                let mut d = Deque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("heapless::Deque<i32, 1024>", |b| {
            b.iter(|| {
                let mut d: heapless::Deque<i32, 1024> = heapless::Deque::new();
                for i in 0..n {
                    let _ = d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Push/Pop both ends 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                    d.push_back(black_box(i as i32));
                }
                while let Some(v) = d.pop_front() {
                    black_box(v);
                    black_box(d.pop_back());
                }
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                let mut d = Deque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                    d.push_back(black_box(i as i32));
                }
                while let Ok(v) = d.pop_front() {
                    black_box(v);
                    black_box(d.pop_back().ok());
                }
            })
        });

        group.bench_function("Deque<i32> (no shrink)", |b| {
            b.iter(|| {
                let mut d = DequeOptions::new().shrink(false).build();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                    d.push_back(black_box(i as i32));
                }
                while let Ok(v) = d.pop_front() {
                    black_box(v);
                    black_box(d.pop_back().ok());
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Bounded window 64)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::with_capacity(64);
                for i in 0..n {
                    if d.len() == 64 {
                        d.pop_front();
                    }
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("Deque<i32> maxlen 64", |b| {
            b.iter(|| {
                let mut d = DequeOptions::new().maxlen(64).build();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Get 1024)");
        let d_std: VecDeque<i32> = (0..n as i32).collect();
        let d_ring: Deque<i32> = (0..n as i32).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_ring.get(black_box(i)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Rotate 1024)");
        let mut d_std: VecDeque<i32> = (0..n as i32).collect();
        let mut d_ring: Deque<i32> = (0..n as i32).collect();

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| d_std.rotate_right(black_box(100)))
        });

        group.bench_function("Deque<i32>", |b| b.iter(|| d_ring.rotate(black_box(100))));
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
