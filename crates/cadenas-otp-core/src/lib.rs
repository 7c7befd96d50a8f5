//! `cadenas-otp-core` — Pure one-time-code primitives for CADENAS.
//!
//! This crate is the audit target: zero network, zero async, zero
//! stored state. It implements the three OATH code families over a
//! shared HMAC-and-truncate engine:
//!
//! - HOTP (RFC 4226) — counter-based codes
//! - TOTP (RFC 6238) — time-based codes with backward-only leeway
//! - OCRA (RFC 6287) — challenge-response codes from a parsed suite
//!   descriptor and per-call inputs
//!
//! Everything is a pure function over immutable inputs: parse an
//! [`OcraSuite`] once, call the generators from as many threads as you
//! like. Secrets enter as raw bytes ([`decode_secret`] handles the
//! Base32 text form); codes leave as fixed-width decimal strings.
//! Verification helpers compare in constant time.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod encoding;

pub mod truncate;

pub mod hotp;

pub mod totp;

pub mod secret;

pub mod ocra;

pub use encoding::constant_time_eq;
pub use error::OtpError;
pub use hotp::{generate_hotp, verify_hotp, OtpAlgorithm, MAX_DIGITS};
pub use ocra::{
    build_message, parse_suite, ChallengeFormat, OcraInputs, OcraSuite, OptionalInput,
};
pub use secret::{decode_secret, generate_secret, SECRET_LENGTH};
pub use totp::{generate_totp, verify_totp, DEFAULT_PERIOD};
