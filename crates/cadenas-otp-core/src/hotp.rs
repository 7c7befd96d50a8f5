//! RFC 4226 HOTP generation engine.
//!
//! Counter-based one-time codes using `ring::hmac` for HMAC-SHA1,
//! HMAC-SHA256, and HMAC-SHA512. The time-based (TOTP) and
//! challenge-response (OCRA) generators both build on this module's
//! algorithm mapping and truncation path.

use ring::{digest, hmac};
use serde::{Deserialize, Serialize};

use crate::encoding::constant_time_eq;
use crate::error::OtpError;
use crate::truncate::dynamic_truncation;

/// Highest digit count the decimal code surface supports.
pub const MAX_DIGITS: u32 = 10;

/// HMAC algorithm used for code generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpAlgorithm {
    /// HMAC-SHA1 (default for most authenticator apps).
    Sha1,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl OtpAlgorithm {
    /// Map to the corresponding `ring::hmac::Algorithm`.
    pub(crate) fn to_hmac_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }

    /// Map to the corresponding raw `ring::digest::Algorithm` (PIN hashing).
    pub(crate) fn to_digest_algorithm(self) -> &'static digest::Algorithm {
        match self {
            Self::Sha1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
            Self::Sha256 => &digest::SHA256,
            Self::Sha512 => &digest::SHA512,
        }
    }

    /// Digest width in bytes (20/32/64).
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }
}

/// Generate an HOTP code per RFC 4226.
///
/// # Arguments
/// - `secret`: Shared secret key bytes (decoded, never Base32 text)
/// - `counter`: Counter value, encoded as 8 big-endian bytes (RFC 4226 §5.2)
/// - `digits`: Number of output digits (`1..=10`; 6 is the common choice)
/// - `algorithm`: HMAC algorithm to use
///
/// # Errors
/// Returns [`OtpError::Otp`] if the secret is empty or `digits` is out
/// of range.
#[must_use = "OTP code should be used or stored"]
pub fn generate_hotp(
    secret: &[u8],
    counter: u64,
    digits: u32,
    algorithm: OtpAlgorithm,
) -> Result<String, OtpError> {
    if secret.is_empty() {
        return Err(OtpError::Otp("secret must not be empty".to_owned()));
    }
    if digits == 0 || digits > MAX_DIGITS {
        return Err(OtpError::Otp(format!(
            "digits must be between 1 and {MAX_DIGITS}, got {digits}"
        )));
    }

    // HMAC(K, C) where C is the counter as 8-byte big-endian.
    let key = hmac::Key::new(algorithm.to_hmac_algorithm(), secret);
    let counter_bytes = counter.to_be_bytes();
    let tag = hmac::sign(&key, &counter_bytes);

    Ok(dynamic_truncation(tag.as_ref(), digits))
}

/// Verify an HOTP code against an exact counter value.
///
/// The comparison is constant-time. There is no look-ahead window —
/// counter resynchronization is the caller's bookkeeping, not the
/// engine's.
///
/// # Errors
/// Returns [`OtpError::Otp`] if the secret is empty or `digits` is out
/// of range.
#[must_use = "verification result should be checked"]
pub fn verify_hotp(
    secret: &[u8],
    code: &str,
    counter: u64,
    digits: u32,
    algorithm: OtpAlgorithm,
) -> Result<bool, OtpError> {
    let expected = generate_hotp(secret, counter, digits, algorithm)?;
    Ok(constant_time_eq(expected.as_bytes(), code.as_bytes()))
}
