use crate::MIN_TIME;

/*
Linear Parameter Ramp
=====================

A ramp moves one value toward a target in a straight line over a fixed
time, then holds it. The player uses it for every smooth change:

  fade in         level   0 → volume × 0.15   over 0.3 s
  fade out        level   current → 0         over 0.1 s
  note glide      freq    current → next note over 0.1 s
  volume change   level   current → new level over 0.1 s

Time to Increment
-----------------

    samples   = round(seconds × sample_rate)
    increment = (target - start) / samples

Each sample adds the increment; the last one lands exactly on the target,
so float error never leaves the value a hair off where it was sent.

A new ramp always starts from the CURRENT value, not the old target. Calling
`ramp_to` halfway through a fade continues smoothly from wherever the value
is, which avoids clicks when the listener drags the volume mid-fade.
*/

#[derive(Debug, Clone, Copy)]
pub struct LinearRamp {
    value: f32,
    target: f32,
    increment: f32,
    remaining: u32,
}

impl LinearRamp {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            increment: 0.0,
            remaining: 0,
        }
    }

    /// Jump straight to `value`, cancelling any ramp in flight.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.increment = 0.0;
        self.remaining = 0;
    }

    /// Start a ramp from the current value to `target` over `seconds`.
    pub fn ramp_to(&mut self, target: f32, seconds: f32, sample_rate: f32) {
        let samples = (seconds.max(0.0) * sample_rate).round() as u32;
        if seconds < MIN_TIME || samples == 0 {
            self.set(target);
            return;
        }

        self.target = target;
        self.remaining = samples;
        self.increment = (target - self.value) / samples as f32;
    }

    /// Advance one sample and return the new value.
    #[inline]
    pub fn next_value(&mut self) -> f32 {
        if self.remaining > 0 {
            self.remaining -= 1;
            self.value = if self.remaining == 0 {
                self.target
            } else {
                self.value + self.increment
            };
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_ramping(&self) -> bool {
        self.remaining > 0
    }
}

impl Default for LinearRamp {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target_exactly() {
        let mut ramp = LinearRamp::new(0.0);
        ramp.ramp_to(0.075, 0.3, 48_000.0);

        for _ in 0..14_399 {
            ramp.next_value();
        }
        assert!(ramp.is_ramping());
        assert_eq!(ramp.next_value(), 0.075);
        assert!(!ramp.is_ramping());
        // holds afterwards
        assert_eq!(ramp.next_value(), 0.075);
    }

    #[test]
    fn test_midpoint_is_linear() {
        let mut ramp = LinearRamp::new(100.0);
        ramp.ramp_to(200.0, 0.1, 1_000.0); // 100 samples

        let mut value = 0.0;
        for _ in 0..50 {
            value = ramp.next_value();
        }
        assert!((value - 150.0).abs() < 1e-3, "got {value}");
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut ramp = LinearRamp::new(0.0);
        ramp.ramp_to(1.0, 0.1, 1_000.0);
        for _ in 0..50 {
            ramp.next_value();
        }
        let halfway = ramp.value();

        ramp.ramp_to(0.0, 0.1, 1_000.0);
        let first = ramp.next_value();
        assert!(first < halfway && first > halfway - 0.02);
    }

    #[test]
    fn test_zero_time_jumps() {
        let mut ramp = LinearRamp::new(3.0);
        ramp.ramp_to(7.0, 0.0, 48_000.0);
        assert_eq!(ramp.value(), 7.0);
        assert!(!ramp.is_ramping());
    }
}
