//! RFC 4226 §5.3 dynamic truncation.
//!
//! Shared by the HOTP/TOTP generators and the OCRA generator, which
//! all reduce an HMAC digest to a fixed-width decimal code the same
//! way. Zero-digit ("no truncation") OCRA suites never reach this
//! module — the OCRA generator surfaces the raw digest instead.

/// Reduce an HMAC digest to a left-zero-padded decimal code.
///
/// `digits` must be in `1..=10`; callers validate before the HMAC is
/// computed. The offset is the low nibble of the last digest byte, so
/// `offset + 4` stays within any supported digest (20 bytes minimum,
/// offset at most 15).
#[must_use]
pub fn dynamic_truncation(digest: &[u8], digits: u32) -> String {
    // offset = low-order 4 bits of last byte.
    let offset = usize::from(digest[digest.len().wrapping_sub(1)] & 0x0F);

    // Extract 4 bytes starting at offset, mask high bit (0x7FFFFFFF).
    let binary_code = u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset.wrapping_add(1)],
        digest[offset.wrapping_add(2)],
        digest[offset.wrapping_add(3)],
    ]);

    // code = binary_code mod 10^digits, in u64 so that digits = 10
    // (modulus 10_000_000_000 > u32::MAX) is exact.
    // digits <= 10 is validated by callers; the modulus is never zero.
    #[allow(clippy::arithmetic_side_effects)]
    let code = u64::from(binary_code) % 10u64.pow(digits);
    let width = digits as usize;

    format!("{code:0>width$}")
}
