// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tempo_runtime::impls::manual::{ManualRuntime, ManualScheduler};
use tempo_test_utils::CallLog;
use tempo_timer::{Strategy, Timer, TimerOptions, DEFAULT_TIMEOUT};

fn timer_on(scheduler: &ManualScheduler, options: TimerOptions) -> Timer<ManualRuntime> {
    Timer::with_parts(scheduler.clock(), scheduler.clone(), options)
}

#[test]
fn test_frame_sync_selected_when_available() {
    let scheduler = ManualScheduler::new();
    let timer = timer_on(&scheduler, TimerOptions::default());
    assert_eq!(timer.strategy(), Strategy::FrameSynchronized);
}

#[test]
fn test_missing_frame_sync_falls_back_to_timeouts() {
    let scheduler = ManualScheduler::without_frame_sync();
    let timer = timer_on(&scheduler, TimerOptions::default());
    assert_eq!(timer.strategy(), Strategy::Timeout);
}

#[test]
fn test_legacy_forces_timeouts() {
    let scheduler = ManualScheduler::new();
    let timer = timer_on(&scheduler, TimerOptions::default().legacy(true));
    assert_eq!(timer.strategy(), Strategy::Timeout);
}

#[test]
fn test_timeout_delay_is_period_in_rounded_millis() -> anyhow::Result<()> {
    let scheduler = ManualScheduler::without_frame_sync();
    let timer = timer_on(&scheduler, TimerOptions::default());
    let log = CallLog::new();
    timer.set_period(0.0996)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));

    timer.start_firing();

    assert_eq!(scheduler.next_due(), Some(Duration::from_millis(100)));
    Ok(())
}

#[test]
fn test_zero_period_uses_default_timeout() {
    let scheduler = ManualScheduler::without_frame_sync();
    let timer = timer_on(&scheduler, TimerOptions::default());
    let log = CallLog::new();
    timer.set_callback(Some(log.callback(scheduler.clock())));

    timer.start_firing();

    assert_eq!(scheduler.next_due(), Some(DEFAULT_TIMEOUT));
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_millis(17));
}

#[test]
fn test_custom_default_timeout() {
    let scheduler = ManualScheduler::without_frame_sync();
    let options = TimerOptions::default().default_timeout(Duration::from_millis(33));
    let timer = timer_on(&scheduler, options);
    let log = CallLog::new();
    timer.set_callback(Some(log.callback(scheduler.clock())));

    timer.start_firing();
    scheduler.advance(Duration::from_millis(99));

    assert_eq!(log.count(), 4);
}

#[test]
fn test_timeout_strategy_fires_once_per_period() -> anyhow::Result<()> {
    let scheduler = ManualScheduler::without_frame_sync();
    let timer = timer_on(&scheduler, TimerOptions::default());
    let log = CallLog::new();
    timer.set_period(0.25)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));

    timer.start_firing();
    scheduler.advance(Duration::from_secs(1));

    assert_eq!(log.times(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(scheduler.pending_count(), 1);
    Ok(())
}

#[test]
fn test_frame_strategy_requests_next_frame() -> anyhow::Result<()> {
    let scheduler = ManualScheduler::with_frame_interval(Duration::from_millis(50));
    let timer = timer_on(&scheduler, TimerOptions::default());
    let log = CallLog::new();
    timer.set_period(5.0)?;
    timer.set_callback(Some(log.callback(scheduler.clock())));

    timer.start_firing();

    // The period does not affect when the next frame is requested
    assert_eq!(scheduler.next_due(), Some(Duration::from_millis(50)));
    Ok(())
}
