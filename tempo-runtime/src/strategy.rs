// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// How a timer asks its primitive for the next tick. Chosen once, at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Ride the host's redraw cadence; no explicit delay.
    FrameSynchronized,
    /// Coarse timeouts with an explicit millisecond delay.
    Timeout,
}

impl Strategy {
    /// Frame-synchronized when the primitive supports it and legacy mode is off.
    #[must_use]
    pub const fn select(legacy: bool, frame_sync_available: bool) -> Self {
        if !legacy && frame_sync_available {
            Self::FrameSynchronized
        } else {
            Self::Timeout
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSynchronized => write!(f, "frame-synchronized"),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}
