// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;

/// A one-shot unit of work handed to a [`SchedulingPrimitive`].
pub type Tick = Box<dyn FnOnce() + Send + 'static>;

/// Host mechanism that runs a [`Tick`] once, approximately some time from now.
///
/// Two flavours exist. Frame-synchronized scheduling fires at the host's natural redraw
/// cadence with no explicit delay; timeout scheduling fires after a requested delay.
/// A primitive that cannot do the former reports it through
/// [`frame_sync_available`](Self::frame_sync_available), and callers fall back to
/// timeouts.
///
/// Implementations must never run the tick synchronously from inside `request_frame` or
/// `set_timeout`.
pub trait SchedulingPrimitive: Clone + Send + Sync + Debug + 'static {
    /// Cancellable reference to one scheduled tick.
    type Handle: Send + Debug + 'static;

    /// Whether [`request_frame`](Self::request_frame) is backed by a real frame cadence.
    fn frame_sync_available(&self) -> bool;

    /// Run `tick` at the next frame.
    fn request_frame(&self, tick: Tick) -> Self::Handle;

    /// Run `tick` after roughly `delay`.
    fn set_timeout(&self, delay: Duration, tick: Tick) -> Self::Handle;

    /// Cancel a tick that has not fired yet. No-op if it already fired.
    fn cancel(&self, handle: Self::Handle);
}
