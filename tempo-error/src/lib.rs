// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the tempo scheduler.
//!
//! Scheduling itself never fails: a missing frame-synchronized primitive falls back to
//! timeouts and a tick without a callback is a no-op. The only surfaced failure is a
//! rejected configuration value.
//!
//! # Examples
//!
//! ```
//! use tempo_error::{Result, TempoError};
//!
//! fn validate(seconds: f64) -> Result<f64> {
//!     if seconds < 0.0 {
//!         return Err(TempoError::configuration_error("period must not be negative"));
//!     }
//!     Ok(seconds)
//! }
//!
//! assert!(validate(-1.0).is_err());
//! ```

/// Root error type for tempo operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TempoError {
    /// A configuration value was rejected, e.g. a negative or non-finite period.
    #[error("Configuration error: {context}")]
    Configuration {
        /// Description of the rejected value
        context: String,
    },
}

impl TempoError {
    /// Create a configuration error with the given context
    pub fn configuration_error(context: impl Into<String>) -> Self {
        Self::Configuration {
            context: context.into(),
        }
    }

    /// Check if this error was raised while validating configuration
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Specialized Result type for tempo operations
pub type Result<T> = std::result::Result<T, TempoError>;

