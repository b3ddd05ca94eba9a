//! Sources of simulated health readings

use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;

/// Exclusive upper bound of a single reading.
pub const READING_BOUND: u8 = 100;

pub trait MetricSource {
    /// Next reading, uniform in `[0, 100)`.
    fn next_reading(&mut self) -> u8;
}

/// Draws readings from any [`Rng`]. Seed a `StdRng` for reproducible runs.
#[derive(Debug, Clone)]
pub struct RandomMetrics<R = ThreadRng> {
    rng: R,
}

impl RandomMetrics<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomMetrics<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMetrics<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MetricSource for RandomMetrics<R> {
    fn next_reading(&mut self) -> u8 {
        self.rng.gen_range(0..READING_BOUND)
    }
}

/// Replays a fixed list of readings in order, cycling when exhausted.
///
/// Values at or above 100 are folded back into range so the source never
/// breaks the `[0, 100)` contract.
#[derive(Debug, Clone)]
pub struct FixedMetrics {
    readings: VecDeque<u8>,
}

impl FixedMetrics {
    pub fn new(readings: impl IntoIterator<Item = u8>) -> Self {
        let mut readings: VecDeque<u8> = readings
            .into_iter()
            .map(|r| r % READING_BOUND)
            .collect();
        if readings.is_empty() {
            readings.push_back(0);
        }
        Self { readings }
    }
}

impl MetricSource for FixedMetrics {
    fn next_reading(&mut self) -> u8 {
        let value = self.readings.pop_front().unwrap_or(0);
        self.readings.push_back(value);
        value
    }
}

impl<S: MetricSource + ?Sized> MetricSource for Box<S> {
    fn next_reading(&mut self) -> u8 {
        (**self).next_reading()
    }
}
