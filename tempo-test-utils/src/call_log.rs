// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tempo_runtime::TimeSource;

/// Records the clock reading of every callback invocation.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    times: Arc<Mutex<Vec<f64>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer callback that appends `clock.now()` on each invocation.
    pub fn callback<C: TimeSource>(&self, clock: C) -> Arc<dyn Fn() + Send + Sync + 'static> {
        let times = self.times.clone();
        Arc::new(move || times.lock().push(clock.now()))
    }

    pub fn count(&self) -> usize {
        self.times.lock().len()
    }

    pub fn times(&self) -> Vec<f64> {
        self.times.lock().clone()
    }

    pub fn intervals(&self) -> Vec<f64> {
        self.times
            .lock()
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }

    /// Average time between consecutive invocations. `None` with fewer than two.
    pub fn mean_interval(&self) -> Option<f64> {
        let times = self.times.lock();
        match (times.first(), times.last()) {
            (Some(first), Some(last)) if times.len() > 1 => {
                Some((last - first) / (times.len() - 1) as f64)
            }
            _ => None,
        }
    }
}
