// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tempo_runtime::impls::manual::{ManualRuntime, ManualScheduler, DEFAULT_FRAME_INTERVAL};
use tempo_test_utils::CallLog;
use tempo_timer::{Timer, TimerOptions};

fn frame_timer(interval: Duration) -> (Timer<ManualRuntime>, ManualScheduler) {
    let scheduler = ManualScheduler::with_frame_interval(interval);
    let timer = Timer::with_parts(scheduler.clock(), scheduler.clone(), TimerOptions::default());
    (timer, scheduler)
}

#[test]
fn test_zero_period_fires_on_every_tick() {
    let (timer, scheduler) = frame_timer(DEFAULT_FRAME_INTERVAL);
    let log = CallLog::new();
    timer.set_callback(Some(log.callback(scheduler.clock())));
    timer.start_firing();

    for tick in 1..=100 {
        assert!(scheduler.fire_next());
        assert_eq!(log.count(), tick + 1);
        assert_eq!(timer.drift(), 0.0);
    }
}

#[test]
fn test_slow_period_fires_every_tenth_tick() -> anyhow::Result<()> {
    let (timer, scheduler) = frame_timer(Duration::from_millis(100));
    let log = CallLog::new();
    timer.set_period(1.0)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));
    timer.start_firing();

    let mut firing_ticks = Vec::new();
    for tick in 1..=1000 {
        let before = log.count();
        scheduler.fire_next();
        if log.count() > before {
            firing_ticks.push(tick);
        }
    }

    assert_eq!(firing_ticks.len(), 100);
    assert!(firing_ticks.iter().all(|tick| tick % 10 == 0), "{firing_ticks:?}");

    let mean = log.mean_interval().unwrap();
    assert!((mean - 1.0).abs() < 0.1, "mean interval {mean}");
    Ok(())
}

#[test]
fn test_overshoot_is_carried_forward() -> anyhow::Result<()> {
    // 0.3s ticks never line up with a 1s period; without correction every
    // interval would stretch to 1.2s
    let (timer, scheduler) = frame_timer(Duration::from_millis(300));
    let log = CallLog::new();
    timer.set_period(1.0)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));
    timer.start_firing();

    while scheduler.now() < Duration::from_secs(100) {
        scheduler.fire_next();
        assert!(timer.drift() >= 0.0);
        assert!(timer.drift() < timer.period());
    }

    assert!((99..=101).contains(&log.count()), "fired {} times", log.count());

    let mean = log.mean_interval().unwrap();
    assert!((mean - 1.0).abs() < 0.05, "mean interval {mean}");
    for interval in log.intervals() {
        assert!(interval > 0.6 && interval < 1.4, "interval {interval}");
    }
    Ok(())
}

#[test]
fn test_drift_bounded_by_period() -> anyhow::Result<()> {
    let (timer, scheduler) = frame_timer(Duration::from_millis(70));
    let log = CallLog::new();
    timer.set_period(0.25)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));
    timer.start_firing();

    for _ in 0..2000 {
        scheduler.fire_next();
        assert!(timer.drift() < 0.25, "drift {}", timer.drift());
    }

    let elapsed = scheduler.now().as_secs_f64();
    let expected = elapsed / 0.25;
    let fired = log.count() as f64;
    assert!((fired - expected).abs() <= 2.0, "fired {fired}, expected ~{expected}");
    Ok(())
}

#[test]
fn test_period_change_keeps_stale_baseline_for_one_interval() -> anyhow::Result<()> {
    let (timer, scheduler) = frame_timer(Duration::from_millis(100));
    let log = CallLog::new();
    timer.set_period(1.0)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));
    timer.start_firing();
    scheduler.advance(Duration::from_millis(500));
    assert_eq!(log.count(), 1);

    timer.set_period(0.2)?;
    assert!(timer.is_firing());

    // Measured from the last invocation at t=0, not from the change at t=0.5
    scheduler.advance(Duration::from_millis(100));
    assert_eq!(log.count(), 2);
    assert_eq!(timer.last_fired_at(), Some(0.6));

    scheduler.advance(Duration::from_millis(100));
    assert_eq!(log.count(), 2);
    scheduler.advance(Duration::from_millis(100));
    assert_eq!(log.count(), 3);
    Ok(())
}
