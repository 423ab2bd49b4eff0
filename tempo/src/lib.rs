// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tempo
//!
//! Periodic callbacks for simulation loops that keep their long-run rate even when the
//! host only ticks at frame or timeout granularity.
//!
//! ## Overview
//!
//! A [`Timer`] sits on top of a scheduling primitive supplied by the runtime: animation
//! frames where the host has them, plain timeouts otherwise. Each tick measures the time
//! since the last invocation and fires once a full period has elapsed, carrying the
//! overshoot forward so the next interval is shortened to match.
//!
//! The display side is deliberately thin. Models expose their trail through
//! [`PathSource`], a [`PathLayer`] follows an [`ObservableList`] of models, and the
//! render loop strokes everything onto whatever implements [`Canvas`].
//!
//! ## Runtimes
//!
//! - `runtime-tokio` (default): timeouts on the tokio timer, optional emulated frames
//! - `runtime-wasm`: `requestAnimationFrame` with a `setTimeout` fallback
//! - [`ManualRuntime`](crate::runtime::manual::ManualRuntime): virtual time stepped by the
//!   caller, always available
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use tempo::prelude::*;
//! use tempo::runtime::manual::ManualRuntime;
//!
//! # fn main() -> tempo::Result<()> {
//! let timer = Timer::<ManualRuntime>::new();
//! timer.set_period(1.0 / 30.0)?;
//! timer.on_fire(|| {
//!     // step the simulation
//! });
//! timer.start_firing();
//!
//! timer.scheduler().advance(Duration::from_secs(1));
//! timer.stop_firing();
//! # Ok(())
//! # }
//! ```

pub use tempo_core::CancellationToken;
pub use tempo_error::{Result, TempoError};
pub use tempo_display::{
    Canvas, CanvasOp, Drawable, LineDisplay, ListEvent, ObservableList, PathDisplay, PathLayer,
    PathSource, Point, RecordingCanvas, StrokeStyle, SubscriptionId,
};
pub use tempo_runtime::{DefaultRuntime, SchedulingPrimitive, Strategy, Tick, TimeSource};
pub use tempo_timer::{Callback, Timer, TimerOptions, DEFAULT_TIMEOUT};

/// Host runtimes and their clocks and primitives.
pub mod runtime {
    pub use tempo_runtime::impls::manual;
    #[cfg(all(feature = "runtime-tokio", not(target_arch = "wasm32")))]
    pub use tempo_runtime::impls::tokio;
    #[cfg(all(feature = "runtime-wasm", target_arch = "wasm32"))]
    pub use tempo_runtime::impls::wasm;
    pub use tempo_runtime::runtime::Runtime;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::runtime::Runtime;
    pub use tempo_display::{Canvas, Drawable, ObservableList, PathLayer, PathSource, Point};
    pub use tempo_runtime::{SchedulingPrimitive, TimeSource};
    pub use tempo_timer::{Timer, TimerOptions};
}
