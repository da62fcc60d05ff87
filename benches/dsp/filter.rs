//! Benchmarks for the state-variable low-pass at the player's settings.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonedeck::dsp::filter::SVFilter;
use tonedeck::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let ctx = RenderCtx::new(48_000.0);

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Darkest and brightest genre cutoffs, both at Q = 5
        for cutoff in [400.0, 1500.0] {
            let mut filter = SVFilter::lowpass(cutoff);
            filter.set_q(5.0);
            let mut buffer = input.clone();
            group.bench_with_input(
                BenchmarkId::new(format!("lowpass_{}hz", cutoff), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        buffer.copy_from_slice(&input);
                        filter.render(black_box(&mut buffer), black_box(&ctx));
                    })
                },
            );
        }
    }

    group.finish();
}
