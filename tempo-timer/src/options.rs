// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use tempo_core::{Result, TempoError};

/// Delay used by the timeout strategy when the period is zero (about 60 Hz).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(17);

/// Construction-time configuration for a [`Timer`](crate::Timer).
///
/// ```
/// use std::time::Duration;
/// use tempo_timer::TimerOptions;
///
/// let options = TimerOptions::default()
///     .legacy(true)
///     .default_timeout(Duration::from_millis(33))
///     .period(0.5)?;
///
/// assert!(options.is_legacy());
/// assert_eq!(options.initial_period(), 0.5);
/// # Ok::<(), tempo_core::TempoError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimerOptions {
    legacy: bool,
    default_timeout: Duration,
    period: f64,
}

impl TimerOptions {
    /// Force the timeout strategy even when the primitive offers frame sync.
    #[must_use]
    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Delay requested per tick under the timeout strategy while the period is zero.
    #[must_use]
    pub fn default_timeout(mut self, delay: Duration) -> Self {
        self.default_timeout = delay;
        self
    }

    /// Initial period in seconds.
    ///
    /// # Errors
    /// Returns [`TempoError::Configuration`] for a negative or non-finite period.
    pub fn period(mut self, seconds: f64) -> Result<Self> {
        self.period = validate_period(seconds)?;
        Ok(self)
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    pub fn timeout(&self) -> Duration {
        self.default_timeout
    }

    pub fn initial_period(&self) -> f64 {
        self.period
    }
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            legacy: false,
            default_timeout: DEFAULT_TIMEOUT,
            period: 0.0,
        }
    }
}

pub(crate) fn validate_period(seconds: f64) -> Result<f64> {
    if seconds.is_nan() || seconds < 0.0 {
        return Err(TempoError::configuration_error(format!(
            "period must be a non-negative number of seconds, got {seconds}"
        )));
    }
    if seconds.is_infinite() {
        return Err(TempoError::configuration_error("period must be finite"));
    }
    Ok(seconds)
}
