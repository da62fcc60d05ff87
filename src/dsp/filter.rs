use std::f32::consts::PI;

use crate::graph::node::RenderCtx;

/*
Resonant Low-pass (state-variable, trapezoidal)
===============================================

Two integrators in a loop. The signal comes out of the second one:

    g = tan(π · cutoff / sample_rate)      prewarped cutoff
    k = 1 / Q                              damping

    v1 = (s1 + g·(x - s2)) / (1 + g·(g + k))
    v2 = s2 + g·v1                         ← low-pass output
    s1 = 2·v1 - s1
    s2 = 2·v2 - s2

Q shapes the corner:

    Q = 0.5    k = 2      no peak, gentle roll-off
    Q = 0.707  k = 1.41   flat (Butterworth)
    Q = 5      k = 0.2    clear peak at the cutoff, the player's setting

Q below 0.5 adds nothing, so it is floored there. The cutoff is held under
0.49 × sample_rate, where tan() is still well behaved.
*/

const MIN_Q: f32 = 0.5;

pub struct SVFilter {
    s1: f32, // First integrator's memory
    s2: f32, // Second integrator's memory

    cutoff_hz: f32,
    q: f32,
}

impl SVFilter {
    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self {
            s1: 0.0,
            s2: 0.0,
            cutoff_hz,
            q: MIN_Q,
        }
    }

    #[inline]
    fn prewarp(&self, ctx: &RenderCtx) -> f32 {
        let cutoff = self.cutoff_hz.clamp(1.0, 0.49 * ctx.sample_rate);
        (PI * cutoff / ctx.sample_rate).tan()
    }

    /// Filter one sample with precomputed `g` and damping `k`.
    #[inline]
    pub fn next_sample(&mut self, input: f32, g: f32, k: f32) -> f32 {
        let v1 = (self.s1 + g * (input - self.s2)) / (1.0 + g * (g + k));
        let v2 = self.s2 + g * v1;

        self.s1 = 2.0 * v1 - self.s1;
        self.s2 = 2.0 * v2 - self.s2;
        v2
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        let g = self.prewarp(ctx);
        let k = 1.0 / self.q;

        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample, g, k);
        }
    }

    pub fn reset(&mut self) {
        self.s1 = 0.0;
        self.s2 = 0.0;
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.cutoff_hz = cutoff_hz;
    }

    pub fn q(&self) -> f32 {
        self.q
    }

    pub fn set_q(&mut self, q: f32) {
        self.q = q.max(MIN_Q);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::OscillatorBlock;

    /// Peak of a filtered sine, ignoring the start-up transient.
    fn sine_peak(filter: &mut SVFilter, freq: f32, len: usize) -> f32 {
        let ctx = RenderCtx::from_freq(48_000.0, freq);
        let mut osc = OscillatorBlock::sine();
        let mut buffer = vec![0.0f32; len];
        osc.render(&mut buffer, &ctx);
        filter.render(&mut buffer, &ctx);
        buffer[len / 2..]
            .iter()
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn test_passes_dc() {
        let mut filter = SVFilter::lowpass(400.0);
        let mut buffer = vec![1.0; 1024];
        filter.render(&mut buffer, &RenderCtx::new(48_000.0));
        assert!((buffer[1023] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_attenuates_above_cutoff() {
        let mut filter = SVFilter::lowpass(600.0);
        let peak = sine_peak(&mut filter, 6_000.0, 1024);
        assert!(peak < 0.05, "6 kHz through a 600 Hz low-pass peaked at {}", peak);
    }

    #[test]
    fn test_passes_below_cutoff() {
        let mut filter = SVFilter::lowpass(1_500.0);
        let peak = sine_peak(&mut filter, 100.0, 4096);
        assert!((peak - 1.0).abs() < 0.05, "peak {}", peak);
    }

    #[test]
    fn test_q_rings_at_cutoff() {
        let mut flat = SVFilter::lowpass(800.0);
        flat.set_q(0.707);
        let mut peaky = SVFilter::lowpass(800.0);
        peaky.set_q(5.0);

        let flat_peak = sine_peak(&mut flat, 800.0, 4096);
        let peaky_peak = sine_peak(&mut peaky, 800.0, 4096);

        // Gain at the cutoff is Q
        assert!((flat_peak - 0.707).abs() < 0.05, "flat {}", flat_peak);
        assert!((peaky_peak - 5.0).abs() < 0.25, "peaky {}", peaky_peak);
    }

    #[test]
    fn test_q_is_floored() {
        let mut filter = SVFilter::lowpass(800.0);
        filter.set_q(0.0);
        assert_eq!(filter.q(), 0.5);
    }

    #[test]
    fn test_cutoff_above_nyquist_stays_finite() {
        let mut filter = SVFilter::lowpass(40_000.0);
        let mut buffer = vec![0.5; 256];
        filter.render(&mut buffer, &RenderCtx::new(48_000.0));
        assert!(buffer.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_reset_clears_memory() {
        let mut filter = SVFilter::lowpass(400.0);
        let mut buffer = vec![1.0; 256];
        filter.render(&mut buffer, &RenderCtx::new(48_000.0));

        filter.reset();
        let mut silence = vec![0.0; 8];
        filter.render(&mut silence, &RenderCtx::new(48_000.0));
        assert!(silence.iter().all(|&s| s == 0.0));
    }
}
