//! Timer and jitter abstractions.
//!
//! Controllers never sleep on their own; they ask a [`Timer`] so the web app
//! can plug in browser timeouts while tests use a fake or tokio's paused
//! clock.

use std::future::Future;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Something that can wait for a duration
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Wraps a timer so sleeps are extended while `is_paused` reports true.
///
/// Used to hold animations while the document is hidden.
pub struct Pausable<T, P> {
    inner: T,
    is_paused: P,
    poll: Duration,
}

impl<T, P> Pausable<T, P>
where
    T: Timer,
    P: Fn() -> bool,
{
    pub fn new(inner: T, is_paused: P, poll: Duration) -> Self {
        Self {
            inner,
            is_paused,
            poll,
        }
    }
}

impl<T, P> Timer for Pausable<T, P>
where
    T: Timer,
    P: Fn() -> bool,
{
    async fn sleep(&self, duration: Duration) {
        self.inner.sleep(duration).await;
        while (self.is_paused)() {
            self.inner.sleep(self.poll).await;
        }
    }
}

/// Source of the small random offset added to per-character delays
pub trait Jitter {
    /// Offset in milliseconds, uniform in `[-spread_ms, spread_ms)`
    fn offset_ms(&mut self, spread_ms: u64) -> f64;
}

/// Jitter that always returns zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn offset_ms(&mut self, _spread_ms: u64) -> f64 {
        0.0
    }
}

/// Deterministic pseudo-random jitter
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: SmallRng,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Jitter for SeededJitter {
    fn offset_ms(&mut self, spread_ms: u64) -> f64 {
        if spread_ms == 0 {
            return 0.0;
        }
        let spread = spread_ms as f64;
        self.rng.random_range(-spread..spread)
    }
}

/// `base_ms + offset_ms`, never negative
pub(crate) fn jittered(base_ms: u64, offset_ms: f64) -> Duration {
    let ms = (base_ms as f64 + offset_ms).max(0.0);
    Duration::from_secs_f64(ms / 1000.0)
}
