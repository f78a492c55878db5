// Pattern 2: Property-Based Testing with proptest
// Universally-quantified invariants over randomly generated inputs for the
// word counter, adder, and reverser.

use proptest::prelude::*;
use wordcount_properties::{add, count, reverse};

// ============================================================================
// Example: Custom Generators
// ============================================================================

// Fixed-length strings with every byte drawn independently from a small
// alphabet, the way a hand-rolled generator would produce them.
prop_compose! {
    fn small_alphabet_string()(
        bytes in prop::collection::vec(prop::sample::select(b"abcxyz ".to_vec()), 16)
    ) -> String {
        String::from_utf8(bytes).unwrap()
    }
}

// NaN never equals itself and `inf + -inf` is NaN from either order, so
// commutativity is only checkable over finite floats.
fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
}

// ============================================================================
// Example: Commutativity of Addition
// ============================================================================

proptest! {
    // Debug builds panic on i64 overflow, so keep each operand in the half
    // range where the sum always fits.
    #[test]
    fn add_is_commutative_for_integers(
        a in (i64::MIN / 2)..=(i64::MAX / 2),
        b in (i64::MIN / 2)..=(i64::MAX / 2),
    ) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn add_is_commutative_for_floats(a in finite_f64(), b in finite_f64()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }
}

// ============================================================================
// Example: Word Count Invariants
// ============================================================================

proptest! {
    // `count` returns usize, so non-negativity is structural; the byte-length
    // bound is the part left worth checking.
    #[test]
    fn count_is_non_negative_and_bounded(s in "[a-zA-Z ]+") {
        let n = count(&s);
        prop_assert!(n <= s.len());
    }

    #[test]
    fn reversal_preserves_word_count(s in "[a-zA-Z ]+") {
        prop_assert_eq!(count(&s), count(&reverse(&s)));
    }

    #[test]
    fn reversal_preserves_word_count_small_alphabet(s in small_alphabet_string()) {
        prop_assert_eq!(count(&s), count(&reverse(&s)));
    }

    // Doubling fails when s both starts and ends with a non-blank byte: the
    // runs at the seam merge into one word and count(s + s) comes out one
    // short. The precondition below filters those inputs explicitly rather
    // than weakening the claim; p1_unit_tests pins the falsifying case.
    #[test]
    fn concatenation_doubles_word_count(
        s in "[a-zA-Z ]+".prop_filter(
            "seam needs a blank on at least one side",
            |s| s.starts_with(' ') || s.ends_with(' '),
        )
    ) {
        let doubled = format!("{}{}", s, s);
        prop_assert_eq!(count(&doubled), 2 * count(&s));
    }

    #[test]
    fn double_reversal_is_identity(s in ".*") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }
}

fn main() {
    println!("Property-based tests for the word counter core - run with: cargo test");
    println!("proptest generates hundreds of random inputs and shrinks failures.");
    println!("count(\"hello world\") = {}", count("hello world"));
    println!("add(3, 4) = {}", add(3, 4));
    println!("reverse(\"abc\") = {}", reverse("abc"));
}
