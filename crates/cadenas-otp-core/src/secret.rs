//! Shared-secret generation and Base32 text codec.
//!
//! Secrets travel as RFC 4648 Base32 text (uppercase, unpadded) — the
//! form authenticator apps accept — and are decoded to raw bytes
//! exactly once at this boundary. Every generator takes raw bytes.

use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::OtpError;

/// Raw length of a generated secret in bytes (512 bits).
pub const SECRET_LENGTH: usize = 64;

/// Generate a fresh shared secret as unpadded uppercase Base32 text.
///
/// Draws [`SECRET_LENGTH`] bytes from the OS CSPRNG — one draw per
/// secret, never reused. The raw bytes are wiped once encoded.
#[must_use = "a generated secret must be stored by the caller"]
pub fn generate_secret() -> String {
    let mut bytes = Zeroizing::new([0u8; SECRET_LENGTH]);
    OsRng.fill_bytes(&mut *bytes);
    BASE32_NOPAD.encode(&*bytes)
}

/// Decode a Base32 secret to raw key bytes.
///
/// Accepts RFC 4648 uppercase Base32; trailing `=` padding is
/// tolerated and stripped. The returned buffer zeroes itself on drop.
///
/// # Errors
///
/// Returns [`OtpError::Decode`] for any non-Base32 input.
pub fn decode_secret(text: &str) -> Result<Zeroizing<Vec<u8>>, OtpError> {
    let trimmed = text.trim_end_matches('=');
    BASE32_NOPAD
        .decode(trimmed.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| OtpError::Decode(format!("invalid base32 secret: {e}")))
}
