//! Parameter modulation primitives.

/*
Parameter Modulation
====================

    modulated_value = base_value + (modulator × depth)

The player's only modulation is vibrato: a sine LFO pushes the oscillator
frequency up and down by 5% of the genre's base frequency.

    base = 196 Hz (Lo-Fi), depth = 9.8 Hz
    LFO = -1.0  →  186.2 Hz
    LFO =  0.0  →  196.0 Hz
    LFO = +1.0  →  205.8 Hz

Block-Rate Modulation
---------------------

The modulator is averaged over each audio block and applied once per
block. An LFO at 6 Hz (the fastest genre) with 512-sample blocks at 48 kHz
still gets ~16 updates per cycle, which is smooth for vibrato.
*/

/// Calculate the average of a modulator signal over a block.
#[inline]
pub fn block_average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
