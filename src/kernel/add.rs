//! Digit-by-digit addition and subtraction of equal-length, non-negative
//! magnitude strings (no separator, no sign).

use alloc::string::String;
use alloc::vec::Vec;

use crate::system::{NumeralSystem, Side};

/// Adds two non-negative, separator-free digit strings of the same or
/// different lengths (the shorter is left-padded with identity glyphs
/// first). The result has the same length as the padded inputs; any
/// out-carry past the most significant digit is returned separately so the
/// caller can decide whether to grow the string.
pub(crate) fn base_add(system: &NumeralSystem, a: &str, b: &str) -> (String, bool) {
    log::trace!(target: "sifr::kernel::add", "base_add({a}, {b})");
    let (a, b) = system.pad(a, b, Side::Left);
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut result: Vec<char> = Vec::with_capacity(a_chars.len());
    let mut carry = false;
    for i in (0..a_chars.len()).rev() {
        let mut digit = a_chars[i];
        let mut step_carry = false;
        if carry {
            let (d, c) = system.successor(digit).expect("glyph validated by caller");
            digit = d;
            step_carry = c;
        }
        let idx = system.position(b_chars[i]).expect("glyph validated by caller");
        let (d, c2) = system.advance(digit, idx);
        result.push(d);
        carry = step_carry || c2;
    }
    result.reverse();
    (result.into_iter().collect(), carry)
}

/// Subtracts `b` from `a` (both non-negative, separator-free digit strings),
/// padding the shorter with identity glyphs first. The out-borrow is `true`
/// when `b`'s magnitude exceeds `a`'s at this width, in which case the
/// result is the radix complement (caller composes sign/zero-crossing).
pub(crate) fn base_subtract(system: &NumeralSystem, a: &str, b: &str) -> (String, bool) {
    log::trace!(target: "sifr::kernel::add", "base_subtract({a}, {b})");
    let (a, b) = system.pad(a, b, Side::Left);
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut result: Vec<char> = Vec::with_capacity(a_chars.len());
    let mut borrow = false;
    for i in (0..a_chars.len()).rev() {
        let mut digit = a_chars[i];
        let mut step_borrow = false;
        if borrow {
            let (d, b2) = system.predecessor(digit).expect("glyph validated by caller");
            digit = d;
            step_borrow = b2;
        }
        let idx = system.position(b_chars[i]).expect("glyph validated by caller");
        let (d, b2) = system.retreat(digit, idx);
        result.push(d);
        borrow = step_borrow || b2;
    }
    result.reverse();
    (result.into_iter().collect(), borrow)
}

/// Adds one unit to a non-negative, separator-free digit string, growing the
/// string by one leading unit glyph if the addition carries out.
pub(crate) fn increment(system: &NumeralSystem, s: &str) -> String {
    let (sum, carry) = base_add(system, s, &system.unit().to_string());
    if carry {
        let mut out = String::with_capacity(sum.len() + 1);
        out.push(system.unit());
        out.push_str(&sum);
        out
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundingMode;

    fn decimal() -> NumeralSystem {
        NumeralSystem::default()
    }

    #[test]
    fn adds_without_carry() {
        let ns = decimal();
        assert_eq!(base_add(&ns, "12", "34"), ("46".into(), false));
    }

    #[test]
    fn adds_with_carry() {
        let ns = decimal();
        assert_eq!(base_add(&ns, "99", "01"), ("00".into(), true));
    }

    #[test]
    fn pads_unequal_lengths() {
        let ns = decimal();
        assert_eq!(base_add(&ns, "9", "12"), ("21".into(), false));
    }

    #[test]
    fn subtracts_without_borrow() {
        let ns = decimal();
        assert_eq!(base_subtract(&ns, "46", "12"), ("34".into(), false));
    }

    #[test]
    fn subtracts_with_borrow() {
        let ns = decimal();
        assert_eq!(base_subtract(&ns, "10", "19"), ("91".into(), true));
    }

    #[test]
    fn increment_grows_string_on_overflow() {
        let ns = decimal();
        assert_eq!(increment(&ns, "99"), "100");
        assert_eq!(increment(&ns, "8"), "9");
    }

    #[test]
    fn arbitrary_alphabet_wraps_correctly() {
        let ns = NumeralSystem::new(['a', 'b', 'c'], '|', '~', 5, RoundingMode::HalfAway).unwrap();
        // base 3: "bc" + "a" (i.e. 12 + 0) -- exercise a non-decimal alphabet
        assert_eq!(base_add(&ns, "cc", "a"), ("cc".into(), false));
        assert_eq!(base_add(&ns, "cc", "b"), ("aa".into(), true));
    }
}
