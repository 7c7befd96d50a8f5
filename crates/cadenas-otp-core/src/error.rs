//! Error types for `cadenas-otp-core`.

use thiserror::Error;

/// Errors produced by one-time-code operations.
#[derive(Debug, Error)]
pub enum OtpError {
    /// OCRA suite string fails the grammar or its semantic bounds.
    #[error("invalid OCRA suite: {0}")]
    Suite(String),

    /// An input required by the suite (PIN, session, counter) was not supplied.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Malformed Base32 secret or malformed hex challenge/session value.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid generation parameters (empty secret, zero period, bad digit count).
    #[error("OTP error: {0}")]
    Otp(String),
}
