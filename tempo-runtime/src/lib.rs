// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host abstractions the tempo timer rides on.
//!
//! - [`TimeSource`](time_source::TimeSource) - monotonic clock in seconds
//! - [`SchedulingPrimitive`](scheduler::SchedulingPrimitive) - "run this once, soon",
//!   either at the next frame or after an explicit delay, with a cancellable handle
//! - [`Runtime`](runtime::Runtime) - bundles a default clock and primitive
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`TokioRuntime`](impls::tokio::TokioRuntime)
//! - `runtime-wasm` - [`WasmRuntime`](impls::wasm::WasmRuntime), browser
//!   `requestAnimationFrame`/`setTimeout`
//! - always available - [`ManualRuntime`](impls::manual::ManualRuntime), virtual time
//!   stepped by the caller

pub mod impls;
pub mod runtime;
pub mod scheduler;
pub mod strategy;
pub mod time_source;

pub use scheduler::{SchedulingPrimitive, Tick};
pub use strategy::Strategy;
pub use time_source::TimeSource;

#[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
pub type DefaultRuntime = impls::tokio::TokioRuntime;

#[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
pub type DefaultRuntime = impls::wasm::WasmRuntime;

#[cfg(not(any(
    all(feature = "runtime-tokio", not(target_arch = "wasm32")),
    all(feature = "runtime-wasm", target_arch = "wasm32")
)))]
pub type DefaultRuntime = impls::manual::ManualRuntime;
