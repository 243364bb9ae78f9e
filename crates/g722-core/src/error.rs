//! Error handling for the G.722 codec
//!
//! The codec core is pure arithmetic over caller-supplied buffers, so the
//! only failures are configuration mistakes and malformed or undersized
//! buffers. Every check runs before any coder state is touched.

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Invalid codec configuration
    #[error("Invalid codec configuration: {details}")]
    InvalidConfig { details: String },

    /// Unrecognized bit rate
    #[error("Invalid bitrate: {bitrate}bps (supported: {supported:?})")]
    InvalidBitrate { bitrate: u32, supported: Vec<u32> },

    /// Malformed input data
    #[error("Invalid audio format: {details}")]
    InvalidFormat { details: String },

    /// Output buffer cannot hold the result
    #[error("Buffer too small: need {needed} elements, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

impl CodecError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new invalid format error
    pub fn invalid_format(details: impl Into<String>) -> Self {
        Self::InvalidFormat {
            details: details.into(),
        }
    }

    /// Check if this error is recoverable
    ///
    /// Configuration errors require building a new coder; buffer errors can be
    /// retried with corrected input against the same, untouched coder.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidConfig { .. } | Self::InvalidBitrate { .. } => false,
            Self::InvalidFormat { .. } | Self::BufferTooSmall { .. } => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig { .. } | Self::InvalidBitrate { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidFormat { .. } => ErrorCategory::Processing,
            Self::BufferTooSmall { .. } => ErrorCategory::Memory,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration and parameter errors
    Configuration,
    /// Audio processing errors
    Processing,
    /// Buffer sizing errors
    Memory,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Processing => write!(f, "Processing"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CodecError::invalid_config("test message");
        assert!(matches!(err, CodecError::InvalidConfig { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_error_recoverability() {
        let recoverable = CodecError::BufferTooSmall {
            needed: 40,
            actual: 10,
        };
        assert!(recoverable.is_recoverable());

        let non_recoverable = CodecError::InvalidBitrate {
            bitrate: 32000,
            supported: vec![64000, 56000, 48000],
        };
        assert!(!non_recoverable.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            CodecError::invalid_format("odd length").category(),
            ErrorCategory::Processing
        );
        assert_eq!(
            CodecError::BufferTooSmall { needed: 100, actual: 50 }.category(),
            ErrorCategory::Memory
        );
        assert_eq!(ErrorCategory::Memory.to_string(), "Memory");
    }

    #[test]
    fn test_error_display() {
        let err = CodecError::InvalidBitrate {
            bitrate: 32000,
            supported: vec![64000, 56000, 48000],
        };
        let display = format!("{}", err);
        assert!(display.contains("32000bps"));
        assert!(display.contains("64000"));

        let err = CodecError::BufferTooSmall { needed: 40, actual: 8 };
        assert_eq!(err.to_string(), "Buffer too small: need 40 elements, got 8");
    }
}
