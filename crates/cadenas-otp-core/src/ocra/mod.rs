//! RFC 6287 OCRA challenge-response code generation.
//!
//! A parsed [`OcraSuite`] plus per-call [`OcraInputs`] produce a code:
//! the suite is parsed once and reused; the inputs are supplied fresh
//! for every call and never stored. This replaces the
//! set-then-generate object style of older OTP libraries — there is no
//! order-of-call to get wrong and nothing to forget to reset.

pub mod message;
pub mod suite;

use data_encoding::HEXLOWER;
use ring::hmac;

use crate::error::OtpError;
use crate::truncate::dynamic_truncation;

pub use message::build_message;
pub use suite::{parse_suite, ChallengeFormat, OcraSuite, OptionalInput};

/// Per-call inputs for one OCRA computation.
///
/// Which fields are required is decided by the suite: `counter` when
/// it declares `C`, `pin` for `P`, `session` for `S`. `timestamp`
/// overrides the system clock for `T` suites (verifiers replaying a
/// window, tests pinning a vector time).
#[derive(Clone, Copy, Debug, Default)]
pub struct OcraInputs<'a> {
    /// Counter value for `C` suites.
    pub counter: Option<u64>,
    /// Plaintext PIN/password for `P` suites; hashed at use, never stored.
    pub pin: Option<&'a str>,
    /// Session information for `S` suites, as a hex string.
    pub session: Option<&'a str>,
    /// Unix-time override for `T` suites.
    pub timestamp: Option<u64>,
}

/// Generate an OCRA code string.
///
/// Builds the DataInput message, HMACs it under the suite's algorithm,
/// and truncates to the suite's digit count. For the unusual suites
/// that declare truncation length 0, the string surface returns the
/// whole digest hex-encoded; [`generate_digest`] is the byte-exact
/// form.
///
/// # Errors
///
/// Returns [`OtpError::Otp`] for an empty key, plus everything
/// [`build_message`] can return.
#[must_use = "OTP code should be used or stored"]
pub fn generate(
    suite: &OcraSuite,
    key: &[u8],
    challenge: &str,
    inputs: &OcraInputs<'_>,
) -> Result<String, OtpError> {
    let digest = generate_digest(suite, key, challenge, inputs)?;
    if suite.truncation_digits() == 0 {
        return Ok(HEXLOWER.encode(&digest));
    }
    Ok(dynamic_truncation(&digest, suite.truncation_digits()))
}

/// Compute the raw, untruncated HMAC digest for an OCRA message.
///
/// This is the "no truncation" contract for zero-digit suites, and a
/// building block for callers that apply their own output encoding.
///
/// # Errors
///
/// Same as [`generate`].
#[must_use = "digest should be used or stored"]
pub fn generate_digest(
    suite: &OcraSuite,
    key: &[u8],
    challenge: &str,
    inputs: &OcraInputs<'_>,
) -> Result<Vec<u8>, OtpError> {
    if key.is_empty() {
        return Err(OtpError::Otp("shared key must not be empty".to_owned()));
    }

    let message = build_message(suite, challenge, inputs)?;
    let hmac_key = hmac::Key::new(suite.algorithm().to_hmac_algorithm(), key);
    let tag = hmac::sign(&hmac_key, &message);
    Ok(tag.as_ref().to_vec())
}
