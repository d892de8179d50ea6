use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cycle_start::{build_list, CycleStartStrategy};

fn bench_cycle_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_start");

    for &len in &[16usize, 256, 1024] {
        // Cycle covers the back half of the list.
        let (head, _nodes) = build_list(0..len, Some(len / 2)).unwrap();

        for strategy in CycleStartStrategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &head, |b, head| {
                b.iter(|| strategy.find(black_box(head)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_cycle_start);
criterion_main!(benches);
