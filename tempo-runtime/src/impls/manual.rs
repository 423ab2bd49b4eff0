// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Virtual-time clock and scheduling primitive, stepped explicitly by the caller.
//!
//! Useful for headless fixed-step simulation and for deterministic tests. Time is kept
//! in integer nanoseconds so repeated steps do not accumulate rounding error.

use crate::{runtime::Runtime, scheduler::SchedulingPrimitive, scheduler::Tick, time_source::TimeSource};
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Frame interval of a 60 Hz display.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

#[derive(Debug)]
pub struct ManualRuntime;

impl Runtime for ManualRuntime {
    type Clock = ManualClock;
    type Scheduler = ManualScheduler;

    fn parts() -> (Self::Clock, Self::Scheduler) {
        let scheduler = ManualScheduler::new();
        (scheduler.clock(), scheduler)
    }
}

/// Clock that only moves when told to. Clones share the same reading.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the clock's origin.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }

    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(as_nanos(by), Ordering::AcqRel);
    }

    /// Move the clock forward to `at`. Never moves it backwards.
    pub fn advance_to(&self, at: Duration) {
        self.nanos.fetch_max(as_nanos(at), Ordering::AcqRel);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.nanos.load(Ordering::Acquire) as f64 / 1e9
    }
}

/// Cancellable reference to a tick queued in a [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManualHandle {
    due: u64,
    id: u64,
}

impl ManualHandle {
    /// Virtual time at which the tick becomes due.
    pub fn due(&self) -> Duration {
        Duration::from_nanos(self.due)
    }
}

struct Queue {
    next_id: u64,
    ticks: BTreeMap<(u64, u64), Tick>,
}

/// Scheduling primitive that queues ticks against a [`ManualClock`] and runs them only
/// when the caller steps time with [`advance`](Self::advance) or
/// [`fire_next`](Self::fire_next).
///
/// Ticks due at the same instant run in the order they were scheduled. Frame requests
/// land on the next multiple of the frame interval.
#[derive(Clone)]
pub struct ManualScheduler {
    clock: ManualClock,
    frame_interval: Option<Duration>,
    queue: Arc<Mutex<Queue>>,
}

impl ManualScheduler {
    /// A primitive with a 60 Hz frame cadence.
    pub fn new() -> Self {
        Self::with_frame_interval(DEFAULT_FRAME_INTERVAL)
    }

    pub fn with_frame_interval(interval: Duration) -> Self {
        Self::build(Some(interval).filter(|i| !i.is_zero()))
    }

    /// A primitive with no frame cadence, forcing timers onto the timeout strategy.
    pub fn without_frame_sync() -> Self {
        Self::build(None)
    }

    fn build(frame_interval: Option<Duration>) -> Self {
        Self {
            clock: ManualClock::new(),
            frame_interval,
            queue: Arc::new(Mutex::new(Queue {
                next_id: 0,
                ticks: BTreeMap::new(),
            })),
        }
    }

    /// The clock this primitive schedules against.
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    pub fn now(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Number of ticks queued and not yet run or cancelled.
    pub fn pending_count(&self) -> usize {
        self.queue.lock().ticks.len()
    }

    /// Due time of the earliest queued tick.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue
            .lock()
            .ticks
            .keys()
            .next()
            .map(|&(due, _)| Duration::from_nanos(due))
    }

    /// Step virtual time forward by `by`, running every tick that falls due on the way,
    /// including ticks scheduled by ticks run during this call. Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = as_nanos(self.clock.elapsed()).saturating_add(as_nanos(by));
        let mut ran = 0;

        while let Some((due, tick)) = self.pop_due(Some(target)) {
            self.clock.advance_to(Duration::from_nanos(due));
            tick();
            ran += 1;
        }

        self.clock.advance_to(Duration::from_nanos(target));
        ran
    }

    /// Run the earliest queued tick, moving the clock to its due time if that lies
    /// ahead. Returns `false` if nothing was queued.
    pub fn fire_next(&self) -> bool {
        match self.pop_due(None) {
            Some((due, tick)) => {
                self.clock.advance_to(Duration::from_nanos(due));
                tick();
                true
            }
            None => false,
        }
    }

    fn pop_due(&self, limit: Option<u64>) -> Option<(u64, Tick)> {
        let mut queue = self.queue.lock();
        let &(due, id) = queue.ticks.keys().next()?;
        if limit.is_some_and(|limit| due > limit) {
            return None;
        }
        queue.ticks.remove(&(due, id)).map(|tick| (due, tick))
    }

    fn enqueue(&self, due: u64, tick: Tick) -> ManualHandle {
        let mut queue = self.queue.lock();
        let id = queue.next_id;
        queue.next_id += 1;
        queue.ticks.insert((due, id), tick);
        ManualHandle { due, id }
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.clock.elapsed())
            .field("frame_interval", &self.frame_interval)
            .field("pending", &self.pending_count())
            .finish()
    }
}

impl SchedulingPrimitive for ManualScheduler {
    type Handle = ManualHandle;

    fn frame_sync_available(&self) -> bool {
        self.frame_interval.is_some()
    }

    fn request_frame(&self, tick: Tick) -> Self::Handle {
        let interval = as_nanos(self.frame_interval.unwrap_or(DEFAULT_FRAME_INTERVAL));
        let now = as_nanos(self.clock.elapsed());
        let due = (now / interval + 1) * interval;
        self.enqueue(due, tick)
    }

    fn set_timeout(&self, delay: Duration, tick: Tick) -> Self::Handle {
        let due = as_nanos(self.clock.elapsed()).saturating_add(as_nanos(delay));
        self.enqueue(due, tick)
    }

    fn cancel(&self, handle: Self::Handle) {
        self.queue.lock().ticks.remove(&(handle.due, handle.id));
    }
}

fn as_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
