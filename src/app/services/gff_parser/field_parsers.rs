//! Field coercion utilities for GFF3 records
//!
//! Strict text-to-number conversion with `None` as the missing sentinel.
//! Malformed or out-of-range content never raises an error: it is stored as
//! missing, indistinguishable from a literal `.` field.

use crate::constants::MISSING_FIELD;

/// Whitespace as understood by the C locale (`' '`, `\t`, `\n`, `\v`, `\f`, `\r`)
pub fn is_c_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum IntState {
    LeadingSpace,
    Number,
    TrailingSpace,
}

/// Parse `^[space]*[+-]?[digit]+[space]*$` into an `i32`
///
/// Digits are accumulated with checked arithmetic; any intermediate overflow
/// yields `None`. Because the magnitude is accumulated before the sign is
/// applied, `-2147483648` is also `None`.
pub fn parse_integer(val: &[u8]) -> Option<i32> {
    let mut n: i32 = 0;
    let mut ndigit = 0usize;
    let mut negative = false;
    let mut state = IntState::LeadingSpace;

    for &c in val {
        if c.is_ascii_digit() {
            if state == IntState::TrailingSpace {
                return None;
            }
            state = IntState::Number;
            ndigit += 1;
            n = n.checked_mul(10)?.checked_add(i32::from(c - b'0'))?;
            continue;
        }
        if c == b'+' || c == b'-' {
            if state != IntState::LeadingSpace {
                return None;
            }
            state = IntState::Number;
            negative = c == b'-';
            continue;
        }
        if !is_c_space(c) {
            return None;
        }
        if state == IntState::Number {
            if ndigit == 0 {
                return None;
            }
            state = IntState::TrailingSpace;
        }
    }

    if ndigit == 0 {
        return None;
    }
    Some(if negative { -n } else { n })
}

/// Length of the longest prefix of `val` that forms a decimal floating-point
/// number, leading whitespace included; 0 if there is none
///
/// Accepts `[space]*[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` as well
/// as `inf`, `infinity` and `nan` in any case. Hexadecimal floats and
/// `nan(...)` payloads are not recognized, so they end up missing.
fn float_prefix_len(val: &[u8]) -> usize {
    let mut i = 0;
    while i < val.len() && is_c_space(val[i]) {
        i += 1;
    }
    if i < val.len() && (val[i] == b'+' || val[i] == b'-') {
        i += 1;
    }

    let rest = &val[i..];
    for word in [&b"infinity"[..], b"inf", b"nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
            return i + word.len();
        }
    }

    let mut ndigit = 0;
    while i < val.len() && val[i].is_ascii_digit() {
        i += 1;
        ndigit += 1;
    }
    if i < val.len() && val[i] == b'.' {
        let mut j = i + 1;
        while j < val.len() && val[j].is_ascii_digit() {
            j += 1;
            ndigit += 1;
        }
        if ndigit > 0 {
            i = j;
        }
    }
    if ndigit == 0 {
        return 0;
    }

    // Exponent only counts when it carries at least one digit
    if i < val.len() && (val[i] == b'e' || val[i] == b'E') {
        let mut j = i + 1;
        if j < val.len() && (val[j] == b'+' || val[j] == b'-') {
            j += 1;
        }
        let digits_start = j;
        while j < val.len() && val[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits_start {
            i = j;
        }
    }
    i
}

/// Parse a real number, locale-independently
///
/// The longest numeric prefix is consumed; `None` if nothing was consumed or
/// if anything other than whitespace follows it.
pub fn parse_real(val: &[u8]) -> Option<f64> {
    let end = float_prefix_len(val);
    if end == 0 {
        return None;
    }
    if !val[end..].iter().all(|&c| is_c_space(c)) {
        return None;
    }
    let number = std::str::from_utf8(&val[..end]).ok()?;
    number.trim_start_matches(|c: char| c.is_ascii() && is_c_space(c as u8)).parse::<f64>().ok()
}

/// Check whether a text field denotes a missing value
pub fn is_missing_text(val: &[u8]) -> bool {
    val == MISSING_FIELD
}

/// Decode raw field bytes into an owned string
pub fn decode_text(val: &[u8]) -> String {
    String::from_utf8_lossy(val).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_well_formed() {
        assert_eq!(parse_integer(b"100"), Some(100));
        assert_eq!(parse_integer(b"  42  "), Some(42));
        assert_eq!(parse_integer(b"+7"), Some(7));
        assert_eq!(parse_integer(b"-15"), Some(-15));
        assert_eq!(parse_integer(b"\t0\r\n"), Some(0));
        assert_eq!(parse_integer(b"0007"), Some(7));
        assert_eq!(parse_integer(b"2147483647"), Some(i32::MAX));
        assert_eq!(parse_integer(b"-2147483647"), Some(-i32::MAX));
    }

    #[test]
    fn test_parse_integer_malformed() {
        assert_eq!(parse_integer(b""), None);
        assert_eq!(parse_integer(b"."), None);
        assert_eq!(parse_integer(b"   "), None);
        assert_eq!(parse_integer(b"+"), None);
        assert_eq!(parse_integer(b"+ 5"), None);
        assert_eq!(parse_integer(b"5 5"), None);
        assert_eq!(parse_integer(b"5-"), None);
        assert_eq!(parse_integer(b"--5"), None);
        assert_eq!(parse_integer(b"1.5"), None);
        assert_eq!(parse_integer(b"12a"), None);
        assert_eq!(parse_integer(b"1e3"), None);
    }

    #[test]
    fn test_parse_integer_overflow_is_missing() {
        assert_eq!(parse_integer(b"2147483648"), None);
        assert_eq!(parse_integer(b"-2147483648"), None);
        assert_eq!(parse_integer(b"99999999999999999999"), None);
    }

    #[test]
    fn test_parse_integer_round_trips_in_range() {
        for value in [1, 9, 10, 12345, 999_999_999, -1, -987_654_321, i32::MAX] {
            let text = value.to_string();
            assert_eq!(parse_integer(text.as_bytes()), Some(value), "value {}", value);
        }
    }

    #[test]
    fn test_parse_real_well_formed() {
        assert_eq!(parse_real(b"1.5"), Some(1.5));
        assert_eq!(parse_real(b"  -2.25 "), Some(-2.25));
        assert_eq!(parse_real(b"3"), Some(3.0));
        assert_eq!(parse_real(b"1e3"), Some(1000.0));
        assert_eq!(parse_real(b"2.5E-1"), Some(0.25));
        assert_eq!(parse_real(b".5"), Some(0.5));
        assert_eq!(parse_real(b"5."), Some(5.0));
        assert_eq!(parse_real(b"+0.125\n"), Some(0.125));
        assert_eq!(parse_real(b"inf"), Some(f64::INFINITY));
        assert_eq!(parse_real(b"-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_real(b"NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn test_parse_real_malformed() {
        assert_eq!(parse_real(b""), None);
        assert_eq!(parse_real(b"."), None);
        assert_eq!(parse_real(b"abc"), None);
        assert_eq!(parse_real(b"1.5x"), None);
        assert_eq!(parse_real(b"1.5 2"), None);
        assert_eq!(parse_real(b"-"), None);
        assert_eq!(parse_real(b"   "), None);
        // Exponent without digits is not part of the number
        assert_eq!(parse_real(b"1e"), None);
        assert_eq!(parse_real(b"1e+"), None);
    }

    #[test]
    fn test_parse_real_rejects_hex_and_nan_payloads() {
        assert_eq!(parse_real(b"0x1p3"), None);
        assert_eq!(parse_real(b"0X10"), None);
        assert_eq!(parse_real(b"-0x1.8p1"), None);
        assert_eq!(parse_real(b"nan(123)"), None);
        assert_eq!(parse_real(b"NAN()"), None);
    }

    #[test]
    fn test_missing_text() {
        assert!(is_missing_text(b"."));
        assert!(!is_missing_text(b".."));
        assert!(!is_missing_text(b""));
        assert!(!is_missing_text(b" ."));
    }
}
