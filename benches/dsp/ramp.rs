//! Benchmarks for linear parameter ramps (fades and glides).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonedeck::dsp::ramp::LinearRamp;

use crate::BLOCK_SIZES;

pub fn bench_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ramp");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Restart a 0.3 s fade every iteration so it never settles
        let mut ramp = LinearRamp::new(0.0);
        group.bench_with_input(BenchmarkId::new("fade", size), &size, |b, _| {
            b.iter(|| {
                ramp.set(0.0);
                ramp.ramp_to(0.15, 0.3, 48_000.0);
                for sample in buffer.iter_mut() {
                    *sample = ramp.next_value();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
