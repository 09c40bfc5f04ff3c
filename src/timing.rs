// src/timing.rs
//
// Named elapsed-time accumulators for instrumenting matching runs.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::info;

use crate::error::{Result, SoundalikeError};

#[derive(Debug, Default)]
pub struct TimingHelper {
    /// Accumulated time per name, in first-stopped order
    timings: Vec<(String, Duration)>,
    start_times: HashMap<String, Instant>,
}

impl TimingHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock for `name`.
    pub fn start(&mut self, name: &str) {
        self.start_times.insert(name.to_string(), Instant::now());
    }

    /// Stop the clock for `name` and add the elapsed time to its total.
    pub fn stop(&mut self, name: &str) -> Result<Duration> {
        let started = self
            .start_times
            .remove(name)
            .ok_or_else(|| SoundalikeError::TimingNotStarted(name.to_string()))?;
        let elapsed = started.elapsed();
        self.accumulate(name, elapsed);
        Ok(elapsed)
    }

    /// Time a closure under `name`.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let value = f();
        self.accumulate(name, started.elapsed());
        value
    }

    fn accumulate(&mut self, name: &str, elapsed: Duration) {
        let position = self.timings.iter().position(|(existing, _)| existing == name);
        match position {
            Some(position) => self.timings[position].1 += elapsed,
            None => self.timings.push((name.to_string(), elapsed)),
        }
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn total(&self, name: &str) -> Option<Duration> {
        self.timings
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, total)| *total)
    }

    /// Log every accumulated timing and reset.
    pub fn report(&mut self) {
        for (name, elapsed) in self.timings.drain(..) {
            info!("[Timing] {} took {:.4} seconds.", name, elapsed.as_secs_f64());
        }
    }
}
