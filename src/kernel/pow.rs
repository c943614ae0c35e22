//! Integer exponentiation.
//!
//! A literal reuse of [`knuth_up`](super::mul::knuth_up) (as used for
//! multiplication) does not generalize correctly to exponents with more
//! than one digit: `raise_by_base` adds positional weight additively, which
//! is the right shape for multiplication's shift-and-add but not for
//! exponentiation's shift-and-*raise-to-a-power*. Instead this walks the
//! exponent's digits most-significant first with the arbitrary-base
//! generalization of square-and-multiply: at each digit, raise the
//! accumulator to the `base()`-th power, then fold in the base value once
//! per unit of that digit's index.

use alloc::string::String;
use alloc::vec::Vec;

use super::mul::base_multiply;
use crate::error::OutOfScopeError;
use crate::system::NumeralSystem;

/// Raises a non-negative `base` magnitude to the non-negative integer power
/// `exponent` (a full magnitude string). Rejects a non-zero fractional part
/// in `exponent`; the caller is responsible for negative exponents and the
/// sign of a negative base.
pub(crate) fn integer_exponent(system: &NumeralSystem, base: &str, exponent: &str) -> Result<String, OutOfScopeError> {
    let (exp_int, exp_frac) = system.split(exponent);
    if !system.is_identity(&exp_frac) {
        return Err(OutOfScopeError::NonIntegerExponent);
    }
    log::debug!(target: "sifr::kernel::pow", "integer_exponent({base}, {exp_int})");

    let exp_int = system.trim_leading_identity(&exp_int);
    let digits: Vec<char> = exp_int.chars().collect();
    let radix = system.base();

    let mut acc = system.unit().to_string();
    for digit in digits {
        let mut raised = system.unit().to_string();
        for _ in 0..radix {
            raised = base_multiply(system, &raised, &acc);
        }
        acc = raised;

        let idx = system.position(digit).expect("glyph validated by caller");
        for _ in 0..idx {
            acc = base_multiply(system, &acc, base);
        }
    }
    Ok(acc)
}
