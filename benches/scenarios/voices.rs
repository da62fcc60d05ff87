//! Benchmarks for the tone voice, one per genre.
//!
//! Oscillator with vibrato → low-pass → gain, fed through the message path
//! the engine uses.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonedeck::{profile::PROFILES, ToneMessage, ToneVoice};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for profile in PROFILES.iter() {
            let mut voice = ToneVoice::new(SAMPLE_RATE);
            voice.handle(ToneMessage::Start {
                session: 1,
                waveform: profile.waveform,
                base_hz: profile.base_frequency,
                lfo_hz: profile.lfo_rate,
                vibrato_depth_hz: profile.vibrato_depth(0.05),
                cutoff_hz: profile.filter_cutoff,
                q: 5.0,
                level: 0.075,
                fade_in_secs: 0.3,
            });

            group.bench_with_input(BenchmarkId::new(profile.name, size), &size, |b, _| {
                b.iter(|| {
                    voice.render(black_box(&mut buffer));
                })
            });
        }

        // === GLIDING VOICE ===
        // A glide per block, as if ticks arrived constantly
        let lofi = &PROFILES[1];
        let mut voice = ToneVoice::new(SAMPLE_RATE);
        voice.handle(ToneMessage::Start {
            session: 1,
            waveform: lofi.waveform,
            base_hz: lofi.base_frequency,
            lfo_hz: lofi.lfo_rate,
            vibrato_depth_hz: lofi.vibrato_depth(0.05),
            cutoff_hz: lofi.filter_cutoff,
            q: 5.0,
            level: 0.075,
            fade_in_secs: 0.3,
        });
        let mut step = 0usize;
        group.bench_with_input(BenchmarkId::new("gliding", size), &size, |b, _| {
            b.iter(|| {
                step += 1;
                voice.handle(ToneMessage::Glide {
                    session: 1,
                    frequency_hz: lofi.note_frequency(step),
                    secs: 0.1,
                });
                voice.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
