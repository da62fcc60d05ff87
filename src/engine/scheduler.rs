use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

/// Shared cancellation flag for a scheduled task.
///
/// Clones observe the same flag, so whoever holds a copy sees a cancel the
/// moment it happens.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Fires every `interval` of simulated time fed in through `advance`.
///
/// Time left over after the last fire is carried into the next call, so
/// irregular frame times still average out to the exact interval.
#[derive(Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    accumulated: Duration,
    token: CancelToken,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            token: CancelToken::new(),
        }
    }

    /// Feed `dt` of elapsed time; returns how many times the timer fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.token.is_cancelled() || self.interval.is_zero() {
            return 0;
        }

        self.accumulated += dt;
        let mut fires = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fires += 1;
        }
        fires
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time carried toward the next fire.
    pub fn pending(&self) -> Duration {
        self.accumulated
    }
}
