//! Real-world scenario benchmarks.
//!
//! The tone voice exactly as the audio callback drives it.

mod voices;

pub use voices::bench_voices;
