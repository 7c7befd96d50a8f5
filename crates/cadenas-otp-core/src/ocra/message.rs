//! OCRA DataInput assembly (RFC 6287 §5.1).
//!
//! The message that gets HMAC'd is a fixed concatenation:
//!
//! ```text
//! suite text | NUL | [counter 8B] | challenge 128B | [optionals…]
//! ```
//!
//! The suite text is embedded verbatim — both parties must HMAC the
//! byte-identical string, so it is never re-derived from parsed
//! fields. The challenge field is always exactly 128 bytes regardless
//! of the declared challenge length, which bounds only the textual
//! challenge. Optional components follow in suite-string order:
//! hashed PIN, left-padded session bytes, big-endian time step.
//!
//! Every absent-but-required input is a hard [`OtpError::MissingInput`]
//! — nothing is defaulted, a message silently built from a zero
//! counter or an empty PIN verifies against nothing.

use ring::digest;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::encoding::{decimal_to_binary, hex_to_binary, pad_left, pad_right};
use crate::error::OtpError;
use crate::ocra::suite::{ChallengeFormat, OcraSuite, OptionalInput};
use crate::ocra::OcraInputs;

/// Packed width of the challenge field in bytes.
const CHALLENGE_FIELD: usize = 128;

/// Longest textual hex challenge accepted (decodes to the full field).
const MAX_HEX_CHARS: usize = 256;

/// Assemble the exact byte message to HMAC for one OCRA computation.
///
/// # Errors
///
/// - [`OtpError::MissingInput`] if the suite declares a counter, PIN,
///   or session and `inputs` does not supply it.
/// - [`OtpError::Decode`] for malformed numeric/hex challenges, for
///   malformed session hex, or for a session value longer than the
///   suite's declared width.
pub fn build_message(
    suite: &OcraSuite,
    challenge: &str,
    inputs: &OcraInputs<'_>,
) -> Result<Vec<u8>, OtpError> {
    let mut message = Vec::with_capacity(
        suite
            .as_str()
            .len()
            .saturating_add(1)
            .saturating_add(8)
            .saturating_add(CHALLENGE_FIELD)
            .saturating_add(optional_width(suite)),
    );

    // Suite text plus the mandatory NUL delimiter.
    message.extend_from_slice(suite.as_str().as_bytes());
    message.push(0);

    if suite.use_counter() {
        let counter = inputs.counter.ok_or_else(|| {
            OtpError::MissingInput("counter (suite declares C)".to_owned())
        })?;
        message.extend_from_slice(&counter.to_be_bytes());
    }

    message.extend_from_slice(&encode_challenge(suite.challenge_format(), challenge)?);

    for component in suite.optionals() {
        match *component {
            OptionalInput::Pin(algorithm) => {
                let pin = inputs.pin.ok_or_else(|| {
                    OtpError::MissingInput("PIN (suite declares P)".to_owned())
                })?;
                let hashed = digest::digest(algorithm.to_digest_algorithm(), pin.as_bytes());
                message.extend_from_slice(hashed.as_ref());
            }
            OptionalInput::Session { width } => {
                let session = inputs.session.ok_or_else(|| {
                    OtpError::MissingInput("session (suite declares S)".to_owned())
                })?;
                let bytes = hex_to_binary(session)?;
                if bytes.len() > width {
                    return Err(OtpError::Decode(format!(
                        "session value is {} bytes, suite declares width {width}",
                        bytes.len()
                    )));
                }
                message.extend_from_slice(&pad_left(&bytes, width));
            }
            OptionalInput::Timestep { seconds } => {
                let timestamp = inputs.timestamp.unwrap_or_else(now_unix);
                // The parser rejects zero-length time steps.
                #[allow(clippy::arithmetic_side_effects)]
                let step = timestamp / seconds;
                message.extend_from_slice(&step.to_be_bytes());
            }
        }
    }

    Ok(message)
}

/// Pack a textual challenge into the fixed 128-byte field.
fn encode_challenge(format: ChallengeFormat, challenge: &str) -> Result<Vec<u8>, OtpError> {
    let packed = match format {
        ChallengeFormat::Numeric => decimal_to_binary(challenge)?,
        ChallengeFormat::Alphanumeric => {
            // Raw challenge bytes, at most one field's worth.
            let bytes = challenge.as_bytes();
            bytes[..bytes.len().min(CHALLENGE_FIELD)].to_vec()
        }
        ChallengeFormat::Hex => {
            if !challenge.is_ascii() {
                return Err(OtpError::Decode("invalid hex value: non-ASCII".to_owned()));
            }
            let text = &challenge[..challenge.len().min(MAX_HEX_CHARS)];
            hex_to_binary(text)?
        }
    };
    Ok(pad_right(packed, CHALLENGE_FIELD))
}

/// Byte width the optional components add, for pre-allocation only.
fn optional_width(suite: &OcraSuite) -> usize {
    suite
        .optionals()
        .iter()
        .map(|component| match *component {
            OptionalInput::Pin(algorithm) => algorithm.digest_len(),
            OptionalInput::Session { width } => width,
            OptionalInput::Timestep { .. } => 8,
        })
        .sum()
}

/// Current Unix time in seconds; pre-epoch clocks read as zero.
fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
