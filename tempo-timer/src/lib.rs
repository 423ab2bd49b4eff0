// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A configurable-rate heartbeat built on an unreliable "fire roughly N times per
//! second" primitive.
//!
//! [`Timer`] asks its [`SchedulingPrimitive`](tempo_runtime::SchedulingPrimitive) for
//! one tick at a time, decides on each tick whether a full period has elapsed, and
//! corrects for the lateness of each invocation so the long-run rate stays on target.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `Timer::new()` uses tokio tasks and tokio's clock
//! - `runtime-wasm` - `Timer::new()` uses `requestAnimationFrame`/`setTimeout`
//! - [`ManualRuntime`](tempo_runtime::impls::manual::ManualRuntime) - virtual time,
//!   stepped by the caller
//!
//! Enable `tracing` to route lifecycle logging through the `tracing` crate.

mod options;
mod timer;

pub use options::{TimerOptions, DEFAULT_TIMEOUT};
pub use tempo_runtime::Strategy;
pub use timer::{Callback, Timer};
