use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fitness_tracker::Training;
use fitness_tracker::package::sample_packages;

fn bench_summarize_samples(c: &mut Criterion) {
    let packages = sample_packages();
    c.bench_function("read_and_summarize_samples", |b| {
        b.iter(|| {
            for package in &packages {
                let workout = package.read().expect("sample package");
                black_box(workout.summarize().get_message());
            }
        })
    });
}

criterion_group!(benches, bench_summarize_samples);
criterion_main!(benches);
