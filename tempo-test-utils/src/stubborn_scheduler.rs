// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tempo_runtime::impls::manual::{ManualClock, ManualHandle, ManualScheduler};
use tempo_runtime::runtime::Runtime;
use tempo_runtime::{SchedulingPrimitive, Tick};

/// A [`ManualScheduler`] whose `cancel` is ignored, so cancelled ticks still fire.
///
/// Models a host that delivers a callback already in flight when it was cancelled.
#[derive(Clone, Debug)]
pub struct StubbornScheduler {
    inner: ManualScheduler,
    ignored: Arc<Mutex<Vec<ManualHandle>>>,
}

impl StubbornScheduler {
    pub fn new(inner: ManualScheduler) -> Self {
        Self {
            inner,
            ignored: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn manual(&self) -> &ManualScheduler {
        &self.inner
    }

    /// Handles passed to `cancel` that were left queued.
    pub fn ignored_cancels(&self) -> Vec<ManualHandle> {
        self.ignored.lock().clone()
    }
}

impl SchedulingPrimitive for StubbornScheduler {
    type Handle = ManualHandle;

    fn frame_sync_available(&self) -> bool {
        self.inner.frame_sync_available()
    }

    fn request_frame(&self, tick: Tick) -> Self::Handle {
        self.inner.request_frame(tick)
    }

    fn set_timeout(&self, delay: Duration, tick: Tick) -> Self::Handle {
        self.inner.set_timeout(delay, tick)
    }

    fn cancel(&self, handle: Self::Handle) {
        self.ignored.lock().push(handle);
    }
}

#[derive(Debug)]
pub struct StubbornRuntime;

impl Runtime for StubbornRuntime {
    type Clock = ManualClock;
    type Scheduler = StubbornScheduler;

    fn parts() -> (Self::Clock, Self::Scheduler) {
        let inner = ManualScheduler::new();
        (inner.clock(), StubbornScheduler::new(inner))
    }
}
