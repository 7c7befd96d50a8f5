//! Known Answer Tests: RFC 4226 Appendix D, RFC 6238 Appendix B, and
//! RFC 6287 Appendix C vectors.

use cadenas_otp_core::ocra::{parse_suite, OcraInputs};
use cadenas_otp_core::{generate_hotp, generate_totp, ocra, OtpAlgorithm};

// ── Shared keys (ASCII, per the RFC test-vector conventions) ────────

const KEY_20: &[u8] = b"12345678901234567890";
const KEY_32: &[u8] = b"12345678901234567890123456789012";
const KEY_64: &[u8] = b"1234567890123456789012345678901234567890123456789012345678901234";

// ── RFC 4226 Appendix D — HOTP test vectors ─────────────────────────
// Secret: 20 bytes ASCII, SHA1, 6 digits.

const HOTP_EXPECTED: [(u64, &str); 10] = [
    (0, "755224"),
    (1, "287082"),
    (2, "359152"),
    (3, "969429"),
    (4, "338314"),
    (5, "254676"),
    (6, "287922"),
    (7, "162583"),
    (8, "399871"),
    (9, "520489"),
];

#[test]
fn rfc4226_appendix_d_hotp_sha1() {
    for (counter, expected) in &HOTP_EXPECTED {
        let code = generate_hotp(KEY_20, *counter, 6, OtpAlgorithm::Sha1)
            .expect("HOTP generation should succeed");
        assert_eq!(
            &code, expected,
            "RFC 4226 HOTP mismatch at counter {counter}"
        );
    }
}

// ── RFC 6238 Appendix B — TOTP test vectors ─────────────────────────
// Period: 30s, Digits: 8. Key length follows the algorithm.

struct TotpVector {
    time: u64,
    sha1: &'static str,
    sha256: &'static str,
    sha512: &'static str,
}

const TOTP_VECTORS: [TotpVector; 6] = [
    TotpVector {
        time: 59,
        sha1: "94287082",
        sha256: "46119246",
        sha512: "90693936",
    },
    TotpVector {
        time: 1_111_111_109,
        sha1: "07081804",
        sha256: "68084774",
        sha512: "25091201",
    },
    TotpVector {
        time: 1_111_111_111,
        sha1: "14050471",
        sha256: "67062674",
        sha512: "99943326",
    },
    TotpVector {
        time: 1_234_567_890,
        sha1: "89005924",
        sha256: "91819424",
        sha512: "93441116",
    },
    TotpVector {
        time: 2_000_000_000,
        sha1: "69279037",
        sha256: "90698825",
        sha512: "38618901",
    },
    TotpVector {
        time: 20_000_000_000,
        sha1: "65353130",
        sha256: "77737706",
        sha512: "47863826",
    },
];

#[test]
fn rfc6238_appendix_b_totp() {
    for v in &TOTP_VECTORS {
        let sha1 = generate_totp(KEY_20, v.time, 8, 30, OtpAlgorithm::Sha1).expect("sha1");
        assert_eq!(&sha1, v.sha1, "TOTP SHA1 mismatch at time {}", v.time);

        let sha256 = generate_totp(KEY_32, v.time, 8, 30, OtpAlgorithm::Sha256).expect("sha256");
        assert_eq!(&sha256, v.sha256, "TOTP SHA256 mismatch at time {}", v.time);

        let sha512 = generate_totp(KEY_64, v.time, 8, 30, OtpAlgorithm::Sha512).expect("sha512");
        assert_eq!(&sha512, v.sha512, "TOTP SHA512 mismatch at time {}", v.time);
    }
}

// ── RFC 6287 Appendix C.1 — one-way challenge-response ──────────────

#[test]
fn rfc6287_one_way_sha1_qn08() {
    let suite = parse_suite("OCRA-1:HOTP-SHA1-6:QN08").expect("parse");
    let expected = [
        ("00000000", "237653"),
        ("11111111", "243178"),
        ("22222222", "653583"),
        ("33333333", "740991"),
        ("44444444", "608993"),
        ("55555555", "388898"),
        ("66666666", "816933"),
        ("77777777", "224598"),
        ("88888888", "750600"),
        ("99999999", "294470"),
    ];
    for (challenge, code) in expected {
        let got = ocra::generate(&suite, KEY_20, challenge, &OcraInputs::default())
            .expect("OCRA generation should succeed");
        assert_eq!(got, code, "OCRA mismatch for challenge {challenge}");
    }
}

#[test]
fn rfc6287_counter_pin_sha256() {
    let suite = parse_suite("OCRA-1:HOTP-SHA256-8:C-QN08-PSHA1").expect("parse");
    let expected = [
        "65347737", "86775851", "78192410", "71565254", "10104329", "65983500", "70069104",
        "91771096", "75011558", "08522129",
    ];
    for (counter, code) in expected.iter().enumerate() {
        let inputs = OcraInputs {
            counter: Some(counter as u64),
            pin: Some("1234"),
            ..OcraInputs::default()
        };
        let got = ocra::generate(&suite, KEY_32, "12345678", &inputs)
            .expect("OCRA generation should succeed");
        assert_eq!(&got, code, "OCRA mismatch at counter {counter}");
    }
}

#[test]
fn rfc6287_pin_sha256() {
    let suite = parse_suite("OCRA-1:HOTP-SHA256-8:QN08-PSHA1").expect("parse");
    let expected = [
        ("00000000", "83238735"),
        ("11111111", "01501458"),
        ("22222222", "17957585"),
        ("33333333", "86776967"),
        ("44444444", "86807031"),
    ];
    let inputs = OcraInputs {
        pin: Some("1234"),
        ..OcraInputs::default()
    };
    for (challenge, code) in expected {
        let got =
            ocra::generate(&suite, KEY_32, challenge, &inputs).expect("OCRA generation");
        assert_eq!(got, code, "OCRA mismatch for challenge {challenge}");
    }
}

#[test]
fn rfc6287_counter_sha512() {
    let suite = parse_suite("OCRA-1:HOTP-SHA512-8:C-QN08").expect("parse");
    let expected = [
        ("00000000", 0, "07016083"),
        ("11111111", 1, "63947962"),
        ("22222222", 2, "70123924"),
        ("33333333", 3, "25341727"),
        ("44444444", 4, "33203315"),
        ("55555555", 5, "34205738"),
        ("66666666", 6, "44343969"),
        ("77777777", 7, "51946085"),
        ("88888888", 8, "20403879"),
        ("99999999", 9, "31409299"),
    ];
    for (challenge, counter, code) in expected {
        let inputs = OcraInputs {
            counter: Some(counter),
            ..OcraInputs::default()
        };
        let got =
            ocra::generate(&suite, KEY_64, challenge, &inputs).expect("OCRA generation");
        assert_eq!(got, code, "OCRA mismatch at counter {counter}");
    }
}

#[test]
fn rfc6287_timestamp_sha512() {
    let suite = parse_suite("OCRA-1:HOTP-SHA512-8:QN08-T1M").expect("parse");
    // Mar 25 2008, 12:06:30 GMT.
    let inputs = OcraInputs {
        timestamp: Some(1_206_446_790),
        ..OcraInputs::default()
    };
    let expected = [
        ("00000000", "95209754"),
        ("11111111", "55907591"),
        ("22222222", "22048402"),
        ("33333333", "24218844"),
        ("44444444", "36209546"),
    ];
    for (challenge, code) in expected {
        let got =
            ocra::generate(&suite, KEY_64, challenge, &inputs).expect("OCRA generation");
        assert_eq!(got, code, "OCRA mismatch for challenge {challenge}");
    }
}

// ── RFC 6287 Appendix C.2 — mutual challenge-response (server side) ─
// The concatenated client+server challenge exceeds the declared QA08
// length; the declared length bounds one party's challenge, not the
// packed field.

#[test]
fn rfc6287_mutual_sha256_qa08() {
    let suite = parse_suite("OCRA-1:HOTP-SHA256-8:QA08").expect("parse");
    let expected = [
        ("CLI22220SRV11110", "28247970"),
        ("CLI22221SRV11111", "01984843"),
        ("CLI22222SRV11112", "65387857"),
        ("CLI22223SRV11113", "03351211"),
        ("CLI22224SRV11114", "83412541"),
    ];
    for (challenge, code) in expected {
        let got = ocra::generate(&suite, KEY_32, challenge, &OcraInputs::default())
            .expect("OCRA generation");
        assert_eq!(got, code, "OCRA mismatch for challenge {challenge}");
    }
}
