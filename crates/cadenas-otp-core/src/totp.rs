//! RFC 6238 TOTP generation engine.
//!
//! Time-based codes are HOTP codes whose counter is the number of
//! elapsed time steps, `floor(time / period)`. Verification checks the
//! exact step and, when leeway is enabled, the single previous step —
//! never a forward step and never a wider window.

use crate::encoding::constant_time_eq;
use crate::error::OtpError;
use crate::hotp::{generate_hotp, OtpAlgorithm};

/// Default TOTP period in seconds (RFC 6238 §4).
pub const DEFAULT_PERIOD: u32 = 30;

/// Generate a TOTP code per RFC 6238.
///
/// # Arguments
/// - `secret`: Shared secret key bytes
/// - `time`: Unix timestamp in seconds
/// - `digits`: Number of output digits
/// - `period`: Time step in seconds (typically [`DEFAULT_PERIOD`])
/// - `algorithm`: HMAC algorithm to use
///
/// # Errors
/// Returns [`OtpError::Otp`] if `period` is 0, the secret is empty, or
/// `digits` is out of range.
#[must_use = "OTP code should be used or stored"]
pub fn generate_totp(
    secret: &[u8],
    time: u64,
    digits: u32,
    period: u32,
    algorithm: OtpAlgorithm,
) -> Result<String, OtpError> {
    if period == 0 {
        return Err(OtpError::Otp("period must be > 0".to_owned()));
    }

    // T = floor(time / period) per RFC 6238 §4.
    // period is validated non-zero above.
    let period_u64 = u64::from(period);
    #[allow(clippy::arithmetic_side_effects)]
    let time_step = time / period_u64;
    generate_hotp(secret, time_step, digits, algorithm)
}

/// Verify a TOTP code, optionally accepting the previous time step.
///
/// The exact window is checked first. On mismatch, and only when
/// `leeway` is set, the window at `time - period` is also checked —
/// tolerating a code generated just before a step boundary. Both
/// comparisons are constant-time.
///
/// # Errors
/// Returns [`OtpError::Otp`] if `period` is 0, the secret is empty, or
/// `digits` is out of range.
#[must_use = "verification result should be checked"]
pub fn verify_totp(
    secret: &[u8],
    time: u64,
    code: &str,
    digits: u32,
    period: u32,
    algorithm: OtpAlgorithm,
    leeway: bool,
) -> Result<bool, OtpError> {
    let expected = generate_totp(secret, time, digits, period, algorithm)?;
    if constant_time_eq(expected.as_bytes(), code.as_bytes()) {
        return Ok(true);
    }

    if leeway {
        // Saturating at zero keeps the window at step 0 for times
        // earlier than one period after the epoch.
        let previous = time.saturating_sub(u64::from(period));
        let expected = generate_totp(secret, previous, digits, period, algorithm)?;
        return Ok(constant_time_eq(expected.as_bytes(), code.as_bytes()));
    }

    Ok(false)
}
