// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
use std::time::Duration;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
use tempo_core::CancellationToken;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
use crate::{runtime::Runtime, scheduler::SchedulingPrimitive, scheduler::Tick, time_source::TimeSource};

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
#[derive(Debug)]
pub struct TokioRuntime;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl Runtime for TokioRuntime {
    type Clock = TokioClock;
    type Scheduler = TokioScheduler;

    fn parts() -> (Self::Clock, Self::Scheduler) {
        (TokioClock::default(), TokioScheduler::default())
    }
}

/// Seconds since construction, read from tokio's clock so paused test time applies.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
#[derive(Clone, Copy, Debug)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl Default for TokioClock {
    fn default() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl TimeSource for TokioClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Scheduling primitive backed by spawned tokio tasks.
///
/// A headless host has no redraw cadence, so frame sync is off unless a frame interval
/// is configured; frames are then emulated on fixed boundaries from construction time.
///
/// # Panics
///
/// Scheduling panics when called outside a tokio runtime.
#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    origin: tokio::time::Instant,
    frame_interval: Option<Duration>,
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl TokioScheduler {
    /// Emulate a redraw cadence of `hz` frames per second.
    #[must_use]
    pub fn with_frame_rate(hz: u32) -> Self {
        Self::with_frame_interval(Duration::from_secs(1) / hz.max(1))
    }

    #[must_use]
    pub fn with_frame_interval(interval: Duration) -> Self {
        Self {
            frame_interval: Some(interval).filter(|i| !i.is_zero()),
            ..Self::default()
        }
    }

    fn until_next_frame(&self, interval: Duration) -> Duration {
        let into_frame = self.origin.elapsed().as_nanos() % interval.as_nanos();
        interval - Duration::from_nanos(into_frame as u64)
    }

    fn spawn_after(&self, delay: Duration, tick: Tick) -> TokioTickHandle {
        let token = CancellationToken::new();
        let guard = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !guard.is_cancelled() {
                        tick();
                    }
                }
            }
        });

        TokioTickHandle { token }
    }
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl Default for TokioScheduler {
    fn default() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
            frame_interval: None,
        }
    }
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
#[derive(Debug)]
pub struct TokioTickHandle {
    token: CancellationToken,
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl TokioTickHandle {
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
impl SchedulingPrimitive for TokioScheduler {
    type Handle = TokioTickHandle;

    fn frame_sync_available(&self) -> bool {
        self.frame_interval.is_some()
    }

    fn request_frame(&self, tick: Tick) -> Self::Handle {
        let interval = self
            .frame_interval
            .unwrap_or(crate::impls::manual::DEFAULT_FRAME_INTERVAL);
        self.spawn_after(self.until_next_frame(interval), tick)
    }

    fn set_timeout(&self, delay: Duration, tick: Tick) -> Self::Handle {
        self.spawn_after(delay, tick)
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.token.cancel();
    }
}
