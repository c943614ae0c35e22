//! Multiplication by repeated addition (a Knuth-up style accumulator driven
//! by the multiplier's own digit sequence) and the generic driver it is
//! built from.

use alloc::format;
use alloc::string::String;

use super::combine::{decimal_combine, CombineOp};
use crate::system::NumeralSystem;

/// Walks `multiplier`'s digits least-significant first; at each position
/// `i`, applies `op` to the accumulator and `raise_by_base(base_value, i)`
/// once per unit of that digit's value (i.e. its alphabet index). The
/// accumulator starts at `identity_of_op` (the identity element of `op`:
/// additive identity for addition, the multiplicative unit for
/// multiplication).
pub(crate) fn knuth_up(
    system: &NumeralSystem,
    base_value: &str,
    multiplier: &str,
    op: &dyn Fn(&NumeralSystem, &str, &str) -> String,
    identity_of_op: char,
) -> String {
    let mut acc = identity_of_op.to_string();
    for (i, digit) in multiplier.chars().rev().enumerate() {
        let idx = system.position(digit).expect("glyph validated by caller");
        if idx == 0 {
            continue;
        }
        let shifted = system.raise_by_base(base_value, i);
        for _ in 0..idx {
            acc = op(system, &acc, &shifted);
        }
    }
    acc
}

fn full_add(system: &NumeralSystem, a: &str, b: &str) -> String {
    decimal_combine(system, a, b, CombineOp::Add).0
}

/// Multiplies two non-negative, full `"int.frac"` magnitude strings,
/// splitting `a` at its separator, running [`knuth_up`] over each half
/// against `b`, re-placing the fractional-half product's separator to
/// account for its positional weight, and combining the two partial
/// products. Rounds the result to `system`'s configured precision.
pub(crate) fn base_multiply(system: &NumeralSystem, a: &str, b: &str) -> String {
    log::debug!(target: "sifr::kernel::mul", "base_multiply({a}, {b})");

    let (a_int, a_frac) = system.split(a);
    let identity = system.identity();

    let p1 = knuth_up(system, b, &a_int, &full_add, identity);
    let p2 = knuth_up(system, b, &a_frac, &full_add, identity);

    let (p2_int, p2_frac) = system.split(&p2);
    let reduce = a_frac.chars().count();
    let p2_int_chars: alloc::vec::Vec<char> = p2_int.chars().collect();
    let sep = system.separator();

    let p2_scaled = if reduce >= p2_int_chars.len() {
        let pad_len = reduce - p2_int_chars.len();
        let pad: String = core::iter::repeat(identity).take(pad_len).collect();
        format!("{identity}{sep}{pad}{p2_int}{p2_frac}")
    } else {
        let split_at = p2_int_chars.len() - reduce;
        let head: String = p2_int_chars[..split_at].iter().collect();
        let tail: String = p2_int_chars[split_at..].iter().collect();
        format!("{head}{sep}{tail}{p2_frac}")
    };

    let (product, _) = decimal_combine(system, &p1, &p2_scaled, CombineOp::Add);
    system.rounding().round(system, &product, system.precision())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal() -> NumeralSystem {
        NumeralSystem::default()
    }

    #[test]
    fn multiplies_integers() {
        let ns = decimal();
        let raw = base_multiply(&ns, "7.0", "6.0");
        assert_eq!(ns.normalize(&raw).unwrap(), "42.0");
    }

    #[test]
    fn multiplies_with_fractional_operand() {
        let ns = decimal();
        let raw = base_multiply(&ns, "2.5", "4.0");
        assert_eq!(ns.normalize(&raw).unwrap(), "10.0");
    }

    #[test]
    fn multiplies_two_fractional_operands() {
        let ns = decimal();
        let raw = base_multiply(&ns, "1.5", "1.5");
        assert_eq!(ns.normalize(&raw).unwrap(), "2.25");
    }

    #[test]
    fn knuth_up_drives_repeated_addition() {
        let ns = decimal();
        let result = knuth_up(&ns, "3.0", "4", &full_add, ns.identity());
        assert_eq!(result, "12.0");
    }
}
