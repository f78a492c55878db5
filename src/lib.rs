// Word counting, addition, and string reversal.
// The reusable core exercised by the unit-test and property-test binaries.

use std::ops::Add;

/// Adds two values of one numeric kind using the native `+` operator.
///
/// Integer wraparound and IEEE-754 float behavior are left to the host
/// semantics; nothing is guarded.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Counts the words in `s`.
///
/// A word is a maximal run of non-blank bytes, and the only blank is the
/// ASCII space (0x20). Tabs, newlines, and non-ASCII bytes are all ordinary
/// word bytes, so the function is total over any `&str`.
pub fn count(s: &str) -> usize {
    let mut rest = s.as_bytes();
    let mut words = 0;
    while let Some(&first) = rest.first() {
        if first == b' ' {
            rest = skip(rest, |b| b == b' ');
        } else {
            words += 1;
            rest = skip(rest, |b| b != b' ');
        }
    }
    words
}

// Narrows the slice past its longest prefix of bytes matching `pred`.
fn skip(mut bytes: &[u8], pred: impl Fn(u8) -> bool) -> &[u8] {
    while let Some(&b) = bytes.first() {
        if !pred(b) {
            break;
        }
        bytes = &bytes[1..];
    }
    bytes
}

/// Reverses the character order of `s`.
///
/// Used by the property suite to build adversarial inputs; reversing twice
/// yields the original string.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

// ============================================================================
// Testing the private skip helper
// ============================================================================

#[cfg(test)]
mod skip_tests {
    use super::*;

    #[test]
    fn skips_matching_prefix() {
        assert_eq!(skip(b"   abc", |b| b == b' '), b"abc".as_slice());
    }

    #[test]
    fn stops_at_first_mismatch() {
        assert_eq!(skip(b"abc def", |b| b != b' '), b" def".as_slice());
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(skip(b"", |b| b == b' '), b"".as_slice());
    }

    #[test]
    fn consumes_everything_when_all_match() {
        assert_eq!(skip(b"    ", |b| b == b' '), b"".as_slice());
    }
}
