use std::str::FromStr;

use assert_matches::assert_matches;

use crate::{
    Decimal128,
    error::{Decimal128ErrorKind, ErrorKind},
};

fn parse(s: &str) -> Decimal128 {
    Decimal128::from_str(s).unwrap()
}

fn parse_err(s: &str) -> Decimal128ErrorKind {
    match Decimal128::from_str(s).unwrap_err().kind {
        ErrorKind::Decimal128 { kind } => kind,
        other => panic!("expected a Decimal128 error for {s:?}, got {other:?}"),
    }
}

#[test]
fn special_values() {
    assert!(parse("NaN").is_nan());
    assert!(parse("-nan").is_nan());
    assert!(parse("Inf").is_infinite());
    assert!(parse("-infinity").is_sign_negative());
    assert_eq!(parse("Infinity"), Decimal128::INFINITY);
    assert_eq!(parse("-Infinity").to_string(), "-Infinity");
    assert_eq!(Decimal128::NAN.to_string(), "NaN");
}

#[test]
fn finite_values() {
    assert!(parse("0").is_zero());
    assert!(!parse("12").is_nan());

    let d = parse("12.70");
    assert_eq!(d.coefficient(), Some(1270));
    assert_eq!(d.exponent(), Some(-2));

    assert_eq!(parse("+0.003").to_string(), "0.003");
    assert_eq!(parse("017.").to_string(), "17");
    assert_eq!(parse(".5").to_string(), "0.5");
    assert_eq!(parse("-76").to_string(), "-76");
}

#[test]
fn scale_is_preserved() {
    assert_eq!(parse("1.00").to_string(), "1.00");
    assert_ne!(parse("1.00"), parse("1.0"));
    assert_eq!(parse("-0.0").to_string(), "-0.0");
}

#[test]
fn scientific_notation() {
    assert_eq!(parse("4E+9").to_string(), "4E+9");
    assert_eq!(parse("1.0E+10").to_string(), "1.0E+10");
    assert_eq!(parse("0.73e-7").to_string(), "7.3E-8");
    assert_eq!(parse("0.000001").to_string(), "0.000001");
    assert_eq!(parse("0.0000001").to_string(), "1E-7");
    assert_eq!(parse("0E+3").to_string(), "0E+3");
}

#[test]
fn extreme_exponents() {
    assert_eq!(parse("1E+6111").exponent(), Some(6111));
    assert_eq!(parse("1E-6176").exponent(), Some(-6176));

    // clamped by folding zeros into the coefficient
    let d = parse("1E+6112");
    assert_eq!(d.coefficient(), Some(10));
    assert_eq!(d.exponent(), Some(6111));

    assert_eq!(parse("0E+9999").exponent(), Some(6111));
    assert_eq!(parse("0E-9999").exponent(), Some(-6176));
}

#[test]
fn invalid_strings() {
    assert!(Decimal128::from_str("").unwrap_err().is_decimal128_unparseable());
    assert_matches!(parse_err("."), Decimal128ErrorKind::Unparseable { .. });
    assert_matches!(parse_err("1.2.3"), Decimal128ErrorKind::Unparseable { .. });
    assert_matches!(parse_err("abc"), Decimal128ErrorKind::Unparseable { .. });
    assert_matches!(parse_err("1E"), Decimal128ErrorKind::EmptyExponent { .. });
    assert_matches!(parse_err("1E+"), Decimal128ErrorKind::EmptyExponent { .. });
    assert_matches!(parse_err("1Ex"), Decimal128ErrorKind::InvalidExponent { .. });
    assert_matches!(
        parse_err("12345678901234567890123456789012345"),
        Decimal128ErrorKind::InvalidCoefficient { .. }
    );
    assert_matches!(parse_err("1E+7000"), Decimal128ErrorKind::Overflow { .. });
    assert_matches!(parse_err("1E-7000"), Decimal128ErrorKind::Underflow { .. });
    assert_matches!(parse_err("1E5E3"), Decimal128ErrorKind::InvalidExponent { .. });
    assert_matches!(
        parse_err("0.1E-9223372036854775808"),
        Decimal128ErrorKind::Underflow { .. }
    );
    assert_matches!(
        parse_err(&format!("1{}E9223372036854775807", "0".repeat(40))),
        Decimal128ErrorKind::Overflow { .. }
    );
    assert_matches!(
        parse_err("1E9223372036854775808"),
        Decimal128ErrorKind::InvalidExponent { .. }
    );
}

#[test]
fn zero_with_exponent_at_i64_bounds_is_clamped() {
    let d = parse("0.0E-9223372036854775808");
    assert_eq!(d.coefficient(), Some(0));
    assert_eq!(d.exponent(), Some(-6176));

    let d = parse(&format!("{}E9223372036854775807", "0".repeat(40)));
    assert_eq!(d.coefficient(), Some(0));
    assert_eq!(d.exponent(), Some(6111));
}

#[test]
fn trailing_zeros_beyond_precision_fold_into_exponent() {
    let d = parse("1234567890123456789012345678901234000");
    assert_eq!(d.coefficient(), Some(1_234_567_890_123_456_789_012_345_678_901_234));
    assert_eq!(d.exponent(), Some(3));
}

#[test]
fn from_parts() {
    let d = Decimal128::from_parts(true, 12345, -2).unwrap();
    assert_eq!(d.to_string(), "-123.45");
    assert!(Decimal128::from_parts(false, 1, 6112).is_err());
    assert!(Decimal128::from_parts(false, 10u128.pow(34), 0).is_err());
}

#[test]
fn bytes() {
    for s in ["0", "-1.5", "1E+6111", "1E-6176", "9999999999999999999999999999999999", "NaN", "-Infinity"] {
        let d = parse(s);
        let back = Decimal128::from_bytes(d.bytes());
        if d.is_nan() {
            assert!(back.is_nan());
        } else {
            assert_eq!(back, d, "{s}");
        }
    }

    // 1 with exponent 0 in the BID layout
    let one = parse("1").bytes();
    assert_eq!(
        one,
        [0x01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x40, 0x30]
    );
}

#[test]
fn from_integers() {
    assert_eq!(Decimal128::from(-42i32).to_string(), "-42");
    assert_eq!(Decimal128::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(Decimal128::default().to_string(), "0");
}
