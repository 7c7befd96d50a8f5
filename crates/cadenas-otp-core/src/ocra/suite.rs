//! OCRA suite descriptor parsing (RFC 6287 §6).
//!
//! A suite string names everything both parties must agree on before a
//! challenge-response exchange:
//!
//! ```text
//! OCRA-1:HOTP-SHA256-8:C-QN08-PSHA1
//! └─┬──┘ └────┬──────┘ └────┬─────┘
//! version  crypto fn     data input
//! ```
//!
//! The crypto function fixes the HMAC algorithm and truncation length
//! (0 = emit the raw digest). The data-input section declares, in
//! order: an optional counter flag `C`, the mandatory challenge format
//! and length `Q{A|N|H}{04..64}`, and any number of optional
//! components — `P<hash>` (PIN digest), `S<nnn>` (session, exact byte
//! width), `T<n>[S|M|H]` (time step).
//!
//! Parsing is an explicit descent over the `-`-separated tokens, in
//! two phases per token: structural shape first, then semantic bounds.
//! Out-of-range values are rejected, never clamped — a suite that
//! parses differently on the two ends of an exchange is worse than one
//! that fails loudly on both. Keywords match ASCII case-insensitively;
//! the raw text is preserved verbatim because it is embedded as the
//! literal prefix of every message HMAC'd under the suite.

use std::fmt;
use std::str::FromStr;

use crate::error::OtpError;
use crate::hotp::OtpAlgorithm;

/// Challenge encoding declared by the `Q` component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeFormat {
    /// `QN` — decimal numeral, packed via its hex form.
    Numeric,
    /// `QA` — raw challenge text bytes.
    Alphanumeric,
    /// `QH` — hex string, packed to binary.
    Hex,
}

/// One optional data-input component, in suite-string order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionalInput {
    /// `P<hash>` — digest of the PIN/password under the named algorithm.
    Pin(OtpAlgorithm),
    /// `S<nnn>` — session information, left-zero-padded to exactly
    /// `width` bytes.
    Session {
        /// Exact padded byte width from the 3-digit decimal field.
        width: usize,
    },
    /// `T<n>[S|M|H]` — number of elapsed time steps, normalized to
    /// seconds at parse time.
    Timestep {
        /// Step length in seconds.
        seconds: u64,
    },
}

/// A parsed, validated OCRA suite descriptor.
///
/// Immutable once parsed; safe to share across threads and reuse for
/// any number of generate calls. The raw text and the parsed fields
/// never diverge — the only constructor is the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OcraSuite {
    raw: String,
    algorithm: OtpAlgorithm,
    truncation_digits: u32,
    use_counter: bool,
    challenge_format: ChallengeFormat,
    challenge_length: u32,
    optionals: Vec<OptionalInput>,
}

impl OcraSuite {
    /// The suite text exactly as supplied, the literal message prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// HMAC algorithm of the crypto function.
    #[must_use]
    pub const fn algorithm(&self) -> OtpAlgorithm {
        self.algorithm
    }

    /// Truncation length: 0 (raw digest) or 4..=10 decimal digits.
    #[must_use]
    pub const fn truncation_digits(&self) -> u32 {
        self.truncation_digits
    }

    /// Whether the data input starts with an 8-byte counter.
    #[must_use]
    pub const fn use_counter(&self) -> bool {
        self.use_counter
    }

    /// Declared challenge format.
    #[must_use]
    pub const fn challenge_format(&self) -> ChallengeFormat {
        self.challenge_format
    }

    /// Declared challenge length (bounds the textual challenge, not
    /// the packed 128-byte field).
    #[must_use]
    pub const fn challenge_length(&self) -> u32 {
        self.challenge_length
    }

    /// Optional components in suite-string order.
    #[must_use]
    pub fn optionals(&self) -> &[OptionalInput] {
        &self.optionals
    }
}

impl FromStr for OcraSuite {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suite(s)
    }
}

impl fmt::Display for OcraSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse and validate an OCRA suite string.
///
/// # Errors
///
/// Returns [`OtpError::Suite`] for anything outside the RFC 6287
/// grammar or its semantic bounds: wrong section count, unknown
/// version or hash names, truncation digits outside `{0, 4..=10}`,
/// challenge lengths outside `4..=64`, malformed or duplicate optional
/// components, out-of-range or zero time steps.
pub fn parse_suite(text: &str) -> Result<OcraSuite, OtpError> {
    let sections: Vec<&str> = text.split(':').collect();
    if sections.len() != 3 {
        return Err(OtpError::Suite(format!(
            "expected 3 ':'-separated sections, got {}",
            sections.len()
        )));
    }

    if !sections[0].eq_ignore_ascii_case("OCRA-1") {
        return Err(OtpError::Suite(format!(
            "unsupported version '{}' (only OCRA-1)",
            sections[0]
        )));
    }

    let (algorithm, truncation_digits) = parse_crypto_function(sections[1])?;
    let (use_counter, challenge_format, challenge_length, optionals) =
        parse_data_input(sections[2])?;

    Ok(OcraSuite {
        raw: text.to_owned(),
        algorithm,
        truncation_digits,
        use_counter,
        challenge_format,
        challenge_length,
        optionals,
    })
}

/// Parse the `HOTP-SHA{1|256|512}-{0|4-9|10}` crypto-function section.
fn parse_crypto_function(section: &str) -> Result<(OtpAlgorithm, u32), OtpError> {
    let tokens: Vec<&str> = section.split('-').collect();
    if tokens.len() != 3 {
        return Err(OtpError::Suite(format!(
            "malformed crypto function '{section}'"
        )));
    }

    if !tokens[0].eq_ignore_ascii_case("HOTP") {
        return Err(OtpError::Suite(format!(
            "unsupported crypto function family '{}'",
            tokens[0]
        )));
    }

    let algorithm = parse_hash_name(tokens[1])
        .ok_or_else(|| OtpError::Suite(format!("unknown hash '{}'", tokens[1])))?;

    let digits = parse_canonical_u32(tokens[2])
        .ok_or_else(|| OtpError::Suite(format!("malformed truncation length '{}'", tokens[2])))?;
    if digits != 0 && !(4..=10).contains(&digits) {
        return Err(OtpError::Suite(format!(
            "truncation length must be 0 or 4-10, got {digits}"
        )));
    }

    Ok((algorithm, digits))
}

/// Parse the `[C-]Q{A|N|H}{04..64}(-P…|-S…|-T…)*` data-input section.
#[allow(clippy::type_complexity)]
fn parse_data_input(
    section: &str,
) -> Result<(bool, ChallengeFormat, u32, Vec<OptionalInput>), OtpError> {
    let mut tokens = section.split('-');

    let mut first = tokens.next().unwrap_or("");
    let use_counter = first.eq_ignore_ascii_case("C");
    if use_counter {
        first = tokens.next().ok_or_else(|| {
            OtpError::Suite("data input ends after counter flag, challenge missing".to_owned())
        })?;
    }

    let (challenge_format, challenge_length) = parse_challenge(first)?;

    let mut optionals = Vec::new();
    for token in tokens {
        let component = parse_optional(token)?;
        let duplicate = optionals
            .iter()
            .any(|seen| std::mem::discriminant(seen) == std::mem::discriminant(&component));
        if duplicate {
            return Err(OtpError::Suite(format!(
                "duplicate data-input component '{token}'"
            )));
        }
        optionals.push(component);
    }

    Ok((use_counter, challenge_format, challenge_length, optionals))
}

/// Parse a `Q{A|N|H}{04..64}` challenge declaration.
fn parse_challenge(token: &str) -> Result<(ChallengeFormat, u32), OtpError> {
    let bytes = token.as_bytes();
    if bytes.len() != 4 || !bytes[0].eq_ignore_ascii_case(&b'Q') {
        return Err(OtpError::Suite(format!(
            "expected challenge declaration Q<format><length>, got '{token}'"
        )));
    }

    let format = match bytes[1].to_ascii_uppercase() {
        b'N' => ChallengeFormat::Numeric,
        b'A' => ChallengeFormat::Alphanumeric,
        b'H' => ChallengeFormat::Hex,
        other => {
            return Err(OtpError::Suite(format!(
                "unknown challenge format '{}'",
                other as char
            )));
        }
    };

    if !bytes[2].is_ascii_digit() || !bytes[3].is_ascii_digit() {
        return Err(OtpError::Suite(format!(
            "malformed challenge length in '{token}'"
        )));
    }
    // Two validated ASCII digits.
    #[allow(clippy::arithmetic_side_effects)]
    let length = u32::from(bytes[2] - b'0') * 10 + u32::from(bytes[3] - b'0');
    if !(4..=64).contains(&length) {
        return Err(OtpError::Suite(format!(
            "challenge length must be 04-64, got {length:02}"
        )));
    }

    Ok((format, length))
}

/// Parse one optional component: `P<hash>`, `S<nnn>`, or `T<n>[S|M|H]`.
fn parse_optional(token: &str) -> Result<OptionalInput, OtpError> {
    if !token.is_ascii() {
        return Err(OtpError::Suite(format!(
            "unknown data-input component '{token}'"
        )));
    }
    let Some(kind) = token.as_bytes().first() else {
        return Err(OtpError::Suite(
            "empty data-input component (stray '-')".to_owned(),
        ));
    };
    let rest = &token[1..];

    match kind.to_ascii_uppercase() {
        b'P' => {
            let algorithm = parse_hash_name(rest).ok_or_else(|| {
                OtpError::Suite(format!("unknown PIN hash in '{token}'"))
            })?;
            Ok(OptionalInput::Pin(algorithm))
        }
        b'S' => {
            if rest.len() != 3 || !rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(OtpError::Suite(format!(
                    "session width must be exactly 3 digits, got '{token}'"
                )));
            }
            // Three validated digits parse infallibly and fit usize.
            let width = rest.parse::<usize>().map_err(|_| {
                OtpError::Suite(format!("session width out of range in '{token}'"))
            })?;
            Ok(OptionalInput::Session { width })
        }
        b'T' => parse_timestep(token, rest),
        _ => Err(OtpError::Suite(format!(
            "unknown data-input component '{token}'"
        ))),
    }
}

/// Parse the `<n>[S|M|H]` tail of a timestep component.
fn parse_timestep(token: &str, rest: &str) -> Result<OptionalInput, OtpError> {
    if rest.len() < 2 {
        return Err(OtpError::Suite(format!(
            "malformed time step '{token}'"
        )));
    }

    let (value_text, unit) = rest.split_at(rest.len().wrapping_sub(1));
    let value = parse_canonical_u32(value_text).ok_or_else(|| {
        OtpError::Suite(format!("malformed time-step value in '{token}'"))
    })?;

    let (multiplier, max) = match unit.as_bytes()[0].to_ascii_uppercase() {
        b'S' => (1u64, 59),
        b'M' => (60, 59),
        b'H' => (3600, 48),
        other => {
            return Err(OtpError::Suite(format!(
                "unknown time-step unit '{}' (use S, M or H)",
                other as char
            )));
        }
    };
    if value == 0 || value > max {
        return Err(OtpError::Suite(format!(
            "time-step value must be 1-{max} for unit {unit}, got {value}"
        )));
    }

    // value <= 59 and multiplier <= 3600: the product fits comfortably.
    #[allow(clippy::arithmetic_side_effects)]
    let seconds = u64::from(value) * multiplier;
    Ok(OptionalInput::Timestep { seconds })
}

/// Case-insensitive SHA1/SHA256/SHA512 name lookup.
fn parse_hash_name(name: &str) -> Option<OtpAlgorithm> {
    if name.eq_ignore_ascii_case("SHA1") {
        Some(OtpAlgorithm::Sha1)
    } else if name.eq_ignore_ascii_case("SHA256") {
        Some(OtpAlgorithm::Sha256)
    } else if name.eq_ignore_ascii_case("SHA512") {
        Some(OtpAlgorithm::Sha512)
    } else {
        None
    }
}

/// Parse a decimal field written with no sign and no leading zeros
/// (`"0"` itself is canonical). Returns `None` on any deviation, so
/// `"06"` or `"+6"` never sneak through `str::parse`.
fn parse_canonical_u32(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
