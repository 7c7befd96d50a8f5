//! Byte codecs shared by the code generators.
//!
//! This module provides:
//! - fixed-width zero padding (left for session fields, right for
//!   challenge fields)
//! - decimal-to-binary conversion for numeric OCRA challenges
//! - permissive hex decoding with odd-nibble handling
//! - [`constant_time_eq`] — the comparison every verify path uses
//!
//! The challenge/session codecs reproduce the byte layout hardware and
//! software OCRA tokens expect: a numeric challenge is the hex form of
//! its value (no leading zeros, a trailing `0` nibble when the hex
//! string is odd), packed to bytes and right-padded into its field.

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::error::OtpError;

/// Constant-time byte comparison for OTP codes.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks.
///
/// Note: The early return on length mismatch is acceptable for OTP codes
/// because the expected digit count is public information — it is not
/// secret. The constant-time property protects the *code value*, not
/// its length.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ---------------------------------------------------------------------------
// Fixed-width padding
// ---------------------------------------------------------------------------

/// Right-pad `bytes` with zero bytes to exactly `width`.
///
/// Input longer than `width` is truncated on the right. Used for the
/// 128-byte challenge field, where the value is left-justified.
#[must_use]
pub fn pad_right(mut bytes: Vec<u8>, width: usize) -> Vec<u8> {
    bytes.truncate(width);
    bytes.resize(width, 0);
    bytes
}

/// Left-pad `bytes` with zero bytes to exactly `width`.
///
/// Callers must ensure `bytes.len() <= width`; the session encoder
/// rejects over-length values before reaching this point.
#[must_use]
pub fn pad_left(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width.saturating_sub(bytes.len())];
    out.extend_from_slice(bytes);
    out.truncate(width);
    out
}

// ---------------------------------------------------------------------------
// Challenge codecs
// ---------------------------------------------------------------------------

/// Convert a decimal numeral of any length to its packed-hex binary form.
///
/// The value is accumulated in base 256 (no 64-bit shortcut, so
/// numerals longer than 19 digits convert exactly), then normalized to
/// the canonical hex form: leading zeros stripped, `"0"` for zero, and
/// a trailing `'0'` nibble appended when the hex string is odd. The
/// normalized hex is packed to bytes.
///
/// # Errors
///
/// Returns [`OtpError::Decode`] if `numeral` is empty or contains a
/// non-digit character.
pub fn decimal_to_binary(numeral: &str) -> Result<Vec<u8>, OtpError> {
    if numeral.is_empty() {
        return Err(OtpError::Decode("empty numeric challenge".into()));
    }

    // Big-endian base-256 accumulation: bytes = bytes * 10 + digit.
    let mut bytes: Vec<u8> = Vec::new();
    for c in numeral.bytes() {
        if !c.is_ascii_digit() {
            return Err(OtpError::Decode(format!(
                "invalid numeric challenge character: {}",
                c as char
            )));
        }
        // Digit value is 0..=9 by the check above; per-byte products
        // fit u16 (255 * 10 + 9 < 65536).
        #[allow(clippy::arithmetic_side_effects)]
        {
            let mut carry = u16::from(c - b'0');
            for b in bytes.iter_mut().rev() {
                let v = u16::from(*b) * 10 + carry;
                *b = (v & 0xFF) as u8;
                carry = v >> 8;
            }
            if carry > 0 {
                bytes.insert(0, (carry & 0xFF) as u8);
            }
        }
    }

    // Canonical hex form of the value: no leading zeros, "0" for zero.
    let hex = HEXLOWER.encode(&bytes);
    let mut hex = hex.trim_start_matches('0').to_owned();
    if hex.is_empty() {
        hex.push('0');
    }
    if hex.len() % 2 == 1 {
        hex.push('0');
    }

    HEXLOWER
        .decode(hex.as_bytes())
        .map_err(|e| OtpError::Decode(format!("numeric challenge packing failed: {e}")))
}

/// Decode a hex string to bytes, tolerating mixed case and odd length.
///
/// An odd-length input is padded with a trailing `'0'` nibble, matching
/// the packing behavior OCRA challenge and session values rely on.
///
/// # Errors
///
/// Returns [`OtpError::Decode`] if `text` contains a non-hex character.
pub fn hex_to_binary(text: &str) -> Result<Vec<u8>, OtpError> {
    let mut normalized = String::with_capacity(text.len().saturating_add(1));
    normalized.push_str(text);
    if normalized.len() % 2 == 1 {
        normalized.push('0');
    }

    HEXLOWER_PERMISSIVE
        .decode(normalized.as_bytes())
        .map_err(|e| OtpError::Decode(format!("invalid hex value: {e}")))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
