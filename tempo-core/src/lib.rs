// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Primitives shared by every tempo crate.
//!
//! - [`CancellationToken`] marks a self-rescheduling tick chain as dead, so a tick that
//!   the host delivers after cancellation can recognise itself as stale.
//! - The `trace!`, `debug!` and `warn!` macros forward to `tracing` when the `tracing`
//!   feature is enabled.

pub mod cancellation_token;
pub mod logging;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

pub use cancellation_token::{CancellationToken, Cancelled};
pub use tempo_error::{Result, TempoError};
