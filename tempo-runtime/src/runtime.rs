// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{scheduler::SchedulingPrimitive, time_source::TimeSource};

pub trait Runtime: 'static {
    type Clock: TimeSource;
    type Scheduler: SchedulingPrimitive;

    /// A clock and a primitive that agree on the passage of time.
    fn parts() -> (Self::Clock, Self::Scheduler);
}
