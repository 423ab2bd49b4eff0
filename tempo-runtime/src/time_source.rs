// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;

/// Monotonic clock, read in seconds.
///
/// Readings never decrease. The origin is arbitrary; only differences matter.
pub trait TimeSource: Clone + Send + Sync + Debug + 'static {
    fn now(&self) -> f64;
}
