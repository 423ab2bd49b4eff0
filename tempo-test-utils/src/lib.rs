// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod call_log;
pub mod stubborn_scheduler;

pub use call_log::CallLog;
pub use stubborn_scheduler::{StubbornRuntime, StubbornScheduler};
