//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to initialize platform
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// Scale factor must be finite and positive
    #[error("Invalid scale factor: {0}")]
    InvalidScaleFactor(f64),

    /// Unrecognized layout direction name
    #[error("Unknown layout direction '{0}' (expected 'ltr' or 'rtl')")]
    UnknownLayoutDirection(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
