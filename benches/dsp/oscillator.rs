//! Oscillator cost per waveform.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonedeck::dsp::{oscillator::OscillatorBlock, OscillatorWaveform};
use tonedeck::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

const WAVEFORMS: [OscillatorWaveform; 4] = [
    OscillatorWaveform::Sine,
    OscillatorWaveform::Saw,
    OscillatorWaveform::Square,
    OscillatorWaveform::Triangle,
];

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let ctx = RenderCtx::from_freq(48_000.0, 220.0);

    for waveform in WAVEFORMS {
        let mut osc = OscillatorBlock::new(waveform);

        for &size in BLOCK_SIZES {
            let mut buffer = vec![0.0f32; size];
            group.bench_with_input(BenchmarkId::new(waveform.label(), size), &size, |b, _| {
                b.iter(|| osc.render(black_box(&mut buffer), black_box(&ctx)))
            });
        }
    }

    group.finish();
}
