// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempo_runtime::impls::tokio::{TokioClock, TokioScheduler};
use tempo_runtime::{SchedulingPrimitive, TimeSource};
use tokio::time::{pause, sleep};

fn counting_tick(count: &Arc<AtomicUsize>) -> Box<dyn FnOnce() + Send> {
    let count = count.clone();
    Box::new(move || {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

#[tokio::test]
async fn test_clock_follows_paused_time() {
    pause();
    let clock = TokioClock::default();

    sleep(Duration::from_millis(1500)).await;

    let now = clock.now();
    assert!((1.5..1.51).contains(&now), "clock read {now}");
}

#[tokio::test]
async fn test_timeout_fires_after_delay() {
    pause();
    let scheduler = TokioScheduler::default();
    let count = Arc::new(AtomicUsize::new(0));

    scheduler.set_timeout(Duration::from_millis(100), counting_tick(&count));

    sleep(Duration::from_millis(50)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(60)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cancelled_timeout_never_fires() {
    pause();
    let scheduler = TokioScheduler::default();
    let count = Arc::new(AtomicUsize::new(0));

    let handle = scheduler.set_timeout(Duration::from_millis(100), counting_tick(&count));
    scheduler.cancel(handle);

    sleep(Duration::from_millis(500)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_frame_sync_only_when_configured() {
    assert!(!TokioScheduler::default().frame_sync_available());
    assert!(TokioScheduler::with_frame_rate(60).frame_sync_available());
    assert!(!TokioScheduler::with_frame_interval(Duration::ZERO).frame_sync_available());
}

#[tokio::test]
async fn test_emulated_frame_fires_within_one_interval() {
    pause();
    let scheduler = TokioScheduler::with_frame_interval(Duration::from_millis(100));
    let count = Arc::new(AtomicUsize::new(0));

    sleep(Duration::from_millis(30)).await;
    scheduler.request_frame(counting_tick(&count));

    sleep(Duration::from_millis(50)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(30)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
