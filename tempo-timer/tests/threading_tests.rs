// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;
use tempo_runtime::impls::manual::{ManualRuntime, ManualScheduler};
use tempo_timer::{Timer, TimerOptions};

fn frame_timer(interval: Duration) -> (Timer<ManualRuntime>, ManualScheduler) {
    let scheduler = ManualScheduler::with_frame_interval(interval);
    let timer = Timer::with_parts(scheduler.clock(), scheduler.clone(), TimerOptions::default());
    (timer, scheduler)
}

/// Tracks how many invocations are running at once; the second one blocks until the
/// test thread has seen it start.
#[derive(Clone)]
struct SlowCallback {
    calls: Arc<AtomicUsize>,
    active: Arc<AtomicUsize>,
    overlapped: Arc<AtomicBool>,
    entered: Arc<Barrier>,
}

impl SlowCallback {
    fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            active: Arc::new(AtomicUsize::new(0)),
            overlapped: Arc::new(AtomicBool::new(false)),
            entered: Arc::new(Barrier::new(2)),
        }
    }

    fn install(&self, timer: &Timer<ManualRuntime>) {
        let this = self.clone();
        timer.on_fire(move || {
            if this.active.fetch_add(1, Ordering::SeqCst) > 0 {
                this.overlapped.store(true, Ordering::SeqCst);
            }
            if this.calls.fetch_add(1, Ordering::SeqCst) == 1 {
                this.entered.wait();
                thread::sleep(Duration::from_millis(50));
            }
            this.active.fetch_sub(1, Ordering::SeqCst);
        });
    }

    fn is_running(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }
}

#[test]
fn test_stop_from_another_thread_waits_for_running_callback() -> anyhow::Result<()> {
    // Arrange
    let (timer, scheduler) = frame_timer(Duration::from_millis(100));
    let callback = SlowCallback::new();
    callback.install(&timer);
    timer.start_firing();

    // Act
    let stepper = thread::spawn(move || scheduler.advance(Duration::from_secs(1)));
    callback.entered.wait();
    timer.stop_firing();

    // Assert
    assert!(!callback.is_running());
    let ran = stepper
        .join()
        .map_err(|_| anyhow::anyhow!("stepper thread panicked"))?;
    assert_eq!(ran, 1);
    assert_eq!(callback.calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn test_restart_from_another_thread_never_overlaps_callbacks() -> anyhow::Result<()> {
    // Arrange
    let (timer, scheduler) = frame_timer(Duration::from_millis(100));
    let callback = SlowCallback::new();
    callback.install(&timer);
    timer.start_firing();

    // Act
    let stepper = thread::spawn(move || scheduler.advance(Duration::from_secs(1)));
    callback.entered.wait();
    timer.stop_firing();
    timer.start_firing();
    stepper
        .join()
        .map_err(|_| anyhow::anyhow!("stepper thread panicked"))?;
    timer.stop_firing();

    // Assert
    assert!(!callback.overlapped.load(Ordering::SeqCst));
    assert!(callback.calls.load(Ordering::SeqCst) >= 3);
    Ok(())
}
