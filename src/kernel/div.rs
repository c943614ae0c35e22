//! Integer quotient/remainder and long division by repeated subtraction.

use alloc::format;
use alloc::string::String;

use super::cmp::magnitude_compare;
use super::combine::{decimal_combine, CombineOp};
use crate::error::OutOfScopeError;
use crate::system::NumeralSystem;

/// Repeatedly adds `denom` to a running product and one unit to a running
/// quotient until the next product would exceed `numer` (by magnitude
/// comparison). Returns the integer quotient and the remainder
/// `numer - quotient * denom`. Both `numer` and `denom` may carry a
/// fractional part; the quotient is always an integer string.
pub(crate) fn times_in_num(system: &NumeralSystem, numer: &str, denom: &str) -> (String, String) {
    log::trace!(target: "sifr::kernel::div", "times_in_num({numer}, {denom})");

    let mut quot = system.identity().to_string();
    let mut prod = system.identity().to_string();
    loop {
        let (new_prod, _) = decimal_combine(system, &prod, denom, CombineOp::Add);
        let (greater, equal) = magnitude_compare(system, &new_prod, numer);
        if greater && !equal {
            break;
        }
        let (new_quot, _) = decimal_combine(system, &quot, &system.unit().to_string(), CombineOp::Add);
        prod = new_prod;
        quot = new_quot;
    }
    let (remainder, _) = decimal_combine(system, numer, &prod, CombineOp::Subtract);
    let (int_quot, _) = system.split(&quot);
    (int_quot, remainder)
}

/// Long division of `numer` by `denom` (both non-negative full magnitude
/// strings), producing one fractional digit per step via [`times_in_num`]
/// until the remainder is zero or `precision + 1` digits have been
/// produced, then rounding to `precision`. Rejects division by the identity
/// glyph before doing any work.
pub(crate) fn base_divide(system: &NumeralSystem, numer: &str, denom: &str) -> Result<String, OutOfScopeError> {
    if system.is_identity(denom) {
        return Err(OutOfScopeError::DivisionByIdentity);
    }
    log::debug!(target: "sifr::kernel::div", "base_divide({numer}, {denom})");

    let (q0, mut remainder) = times_in_num(system, numer, denom);
    let mut digits = String::new();
    let mut produced = 0usize;
    while !system.is_identity(&remainder) && produced < system.precision() + 1 {
        let shifted = system.raise_by_base(&remainder, 1);
        let (digit, new_remainder) = times_in_num(system, &shifted, denom);
        digits.push_str(&digit);
        remainder = new_remainder;
        produced += 1;
    }
    if digits.is_empty() {
        digits.push(system.identity());
    }
    let raw = format!("{q0}{sep}{digits}", sep = system.separator());
    Ok(system.rounding().round(system, &raw, system.precision()))
}
