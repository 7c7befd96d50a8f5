#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for the OCRA suite parser and message builder.

use proptest::prelude::*;

use cadenas_otp_core::ocra::{build_message, parse_suite, OcraInputs, OcraSuite, OptionalInput};

/// Optional data-input components paired with the byte width each adds
/// to the message.
const OPTIONAL_POOL: [(&str, usize); 3] = [("PSHA1", 20), ("S064", 64), ("T1M", 8)];

/// Strategy producing a grammatical suite string plus the widths of
/// its chosen optional components.
fn suite_strategy() -> impl Strategy<Value = (String, bool, Vec<usize>)> {
    (
        prop_oneof![Just("SHA1"), Just("SHA256"), Just("SHA512")],
        4u32..=10,
        any::<bool>(),
        prop_oneof![Just('A'), Just('N'), Just('H')],
        4u32..=64,
        proptest::sample::subsequence(OPTIONAL_POOL.to_vec(), 0..=3).prop_shuffle(),
    )
        .prop_map(|(hash, digits, counter, format, q_len, optionals)| {
            let mut text = format!("OCRA-1:HOTP-{hash}-{digits}:");
            if counter {
                text.push_str("C-");
            }
            text.push_str(&format!("Q{format}{q_len:02}"));
            let mut widths = Vec::new();
            for (token, width) in optionals {
                text.push('-');
                text.push_str(token);
                widths.push(width);
            }
            (text, counter, widths)
        })
}

/// Runtime inputs satisfying any suite the strategy can produce.
fn full_inputs() -> OcraInputs<'static> {
    OcraInputs {
        counter: Some(7),
        pin: Some("1234"),
        session: Some("AABB"),
        timestamp: Some(1_206_446_790),
    }
}

/// A challenge acceptable under every format: decimal digits are also
/// valid hex and valid text.
const CHALLENGE: &str = "12345678";

proptest! {
    /// Every grammatical suite parses, and the raw text survives
    /// Display/parse round-trips unchanged.
    #[test]
    fn suite_round_trips((text, _, _) in suite_strategy()) {
        let suite = parse_suite(&text).expect("grammatical suite should parse");
        prop_assert_eq!(suite.as_str(), text.as_str());
        prop_assert_eq!(suite.to_string(), text.clone());

        let reparsed: OcraSuite = text.parse().expect("round-trip parse");
        prop_assert_eq!(reparsed, suite);
    }

    /// The assembled message has the exact declared layout width:
    /// suite text + NUL + optional counter + 128-byte challenge field
    /// + each optional component's fixed width.
    #[test]
    fn message_length_follows_layout((text, counter, widths) in suite_strategy()) {
        let suite = parse_suite(&text).expect("parse");
        let message = build_message(&suite, CHALLENGE, &full_inputs()).expect("build");

        let expected = text.len()
            + 1
            + if counter { 8 } else { 0 }
            + 128
            + widths.iter().sum::<usize>();
        prop_assert_eq!(message.len(), expected);
    }

    /// Message assembly is byte-reproducible for identical inputs.
    #[test]
    fn message_is_deterministic((text, _, _) in suite_strategy()) {
        let suite = parse_suite(&text).expect("parse");
        let first = build_message(&suite, CHALLENGE, &full_inputs()).expect("first");
        let second = build_message(&suite, CHALLENGE, &full_inputs()).expect("second");
        prop_assert_eq!(first, second);
    }

    /// Generated codes are decimal strings of the suite's digit count.
    #[test]
    fn code_width_matches_suite((text, _, _) in suite_strategy()) {
        let suite = parse_suite(&text).expect("parse");
        let code = cadenas_otp_core::ocra::generate(
            &suite,
            b"12345678901234567890",
            CHALLENGE,
            &full_inputs(),
        )
        .expect("generate");
        prop_assert_eq!(code.len(), suite.truncation_digits() as usize);
        prop_assert!(code.bytes().all(|b| b.is_ascii_digit()));
    }

    /// The parsed optional sequence matches the suite text order.
    #[test]
    fn optional_order_is_preserved((text, _, widths) in suite_strategy()) {
        let suite = parse_suite(&text).expect("parse");
        prop_assert_eq!(suite.optionals().len(), widths.len());
        for (component, width) in suite.optionals().iter().zip(&widths) {
            let got = match *component {
                OptionalInput::Pin(algorithm) => algorithm.digest_len(),
                OptionalInput::Session { width } => width,
                OptionalInput::Timestep { .. } => 8,
            };
            prop_assert_eq!(got, *width);
        }
    }

    /// Arbitrary junk essentially never parses; in particular nothing
    /// without the three-section shape does.
    #[test]
    fn junk_without_sections_never_parses(text in "[A-Za-z0-9-]{0,40}") {
        prop_assert!(parse_suite(&text).is_err());
    }
}
