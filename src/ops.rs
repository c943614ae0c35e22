//! Arithmetic on [`Number`].
//!
//! Every binary operation first checks both operands share a
//! [`NumeralSystem`](crate::system::NumeralSystem), then dispatches to a
//! [`crate::kernel`] magnitude routine and composes the result's sign from a
//! small, fully-enumerated table. The `checked_*` methods return a
//! `Result` for every way an operation can fail (system mismatch, division
//! by the identity glyph, a non-integer exponent); the operator overloads
//! (`+ - * /`) and their named counterparts (`floor_div`, `rem`, `powi`)
//! panic, treating an invalid operand (mismatched system, zero divisor) as a
//! programmer error rather than a `Result`.

use alloc::string::ToString;

use crate::error::{Error, OutOfScopeError};
use crate::kernel::{self, base_divide, base_multiply, decimal_combine, integer_exponent, times_in_num, CombineOp};
use crate::number::Number;

impl<'ns> Number<'ns> {
    /// Checked addition.
    pub fn checked_add(&self, other: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.require_same_system(other)?;
        let system = self.system;

        if self.is_negative() == other.is_negative() {
            let (sum, _) = decimal_combine(system, self.magnitude(), other.magnitude(), CombineOp::Add);
            Ok(Number::from_signed_magnitude(system, self.is_negative(), &sum))
        } else {
            let (diff, zero_crossed) = decimal_combine(system, self.magnitude(), other.magnitude(), CombineOp::Subtract);
            let negative = self.is_negative() ^ zero_crossed;
            Ok(Number::from_signed_magnitude(system, negative, &diff))
        }
    }

    /// Checked subtraction, defined as `self + (-other)`.
    pub fn checked_sub(&self, other: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.checked_add(&(-other))
    }

    /// Checked multiplication.
    pub fn checked_mul(&self, other: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.require_same_system(other)?;
        let system = self.system;
        let product = base_multiply(system, self.magnitude(), other.magnitude());
        let negative = self.is_negative() != other.is_negative();
        Ok(Number::from_signed_magnitude(system, negative, &product))
    }

    /// Checked true division. Fails if `other` is zero.
    pub fn checked_div(&self, other: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.require_same_system(other)?;
        let system = self.system;
        let quotient = base_divide(system, self.magnitude(), other.magnitude())?;
        let negative = self.is_negative() != other.is_negative();
        Ok(Number::from_signed_magnitude(system, negative, &quotient))
    }

    /// Floor division and modulus in one pass (they share the same
    /// magnitude-level quotient/remainder). The modulus takes the sign of
    /// `other`, matching floor-division convention: `self == other *
    /// floor_div + modulus` with `0 <= |modulus| < |other|`.
    pub fn div_rem(&self, other: &Number<'ns>) -> Result<(Number<'ns>, Number<'ns>), Error> {
        self.require_same_system(other)?;
        let system = self.system;
        if system.is_identity(other.magnitude()) {
            return Err(OutOfScopeError::DivisionByIdentity.into());
        }

        let (quot_digits, remainder_mag) = times_in_num(system, self.magnitude(), other.magnitude());
        let same_sign = self.is_negative() == other.is_negative();
        let other_negative = other.is_negative();

        if same_sign {
            let floor = Number::from_signed_magnitude(system, false, &quot_digits);
            let modulus = Number::from_signed_magnitude(system, other_negative, &remainder_mag);
            Ok((floor, modulus))
        } else if !system.is_identity(&remainder_mag) {
            let quot_plus_one = kernel::add::increment(system, &quot_digits);
            let floor = Number::from_signed_magnitude(system, true, &quot_plus_one);
            let (modulus_mag, _) = decimal_combine(system, other.magnitude(), &remainder_mag, CombineOp::Subtract);
            let modulus = Number::from_signed_magnitude(system, other_negative, &modulus_mag);
            Ok((floor, modulus))
        } else {
            let floor = Number::from_signed_magnitude(system, true, &quot_digits);
            let modulus = Number::zero(system);
            Ok((floor, modulus))
        }
    }

    /// Checked floor division.
    pub fn checked_floor_div(&self, other: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Checked modulus (sign follows `other`, per [`Number::div_rem`]).
    pub fn checked_rem(&self, other: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.div_rem(other).map(|(_, r)| r)
    }

    /// Checked integer exponentiation. Fails if `exponent` has a non-zero
    /// fractional part, or (for a negative exponent) if `self` is zero.
    pub fn checked_powi(&self, exponent: &Number<'ns>) -> Result<Number<'ns>, Error> {
        self.require_same_system(exponent)?;
        let system = self.system;

        if exponent.is_negative() {
            let reciprocal_exponent = exponent.abs();
            let powered = self.checked_powi(&reciprocal_exponent)?;
            return Number::one(system).checked_div(&powered);
        }

        let magnitude = integer_exponent(system, self.magnitude(), exponent.magnitude())?;
        let negative = self.is_negative() && is_exponent_odd(system, exponent.magnitude());
        Ok(Number::from_signed_magnitude(system, negative, &magnitude))
    }

    /// Panicking floor division; see [`Number::checked_floor_div`].
    pub fn floor_div(&self, other: &Number<'ns>) -> Number<'ns> {
        self.checked_floor_div(other).expect("floor division failed")
    }

    /// Panicking modulus; see [`Number::checked_rem`].
    pub fn rem(&self, other: &Number<'ns>) -> Number<'ns> {
        self.checked_rem(other).expect("modulus failed")
    }

    /// Panicking exponentiation; see [`Number::checked_powi`].
    pub fn powi(&self, exponent: &Number<'ns>) -> Number<'ns> {
        self.checked_powi(exponent).expect("exponentiation failed")
    }
}

/// Whether the integer value named by `exponent_magnitude` is odd, decided
/// without ever reading a glyph's last-digit parity (a last-digit check only
/// works when the alphabet's base itself is even). Instead this divides by
/// `unit + unit` ("two", spelled out in whatever alphabet `system` uses) and
/// checks whether anything is left over.
fn is_exponent_odd(system: &crate::system::NumeralSystem, exponent_magnitude: &str) -> bool {
    let unit = system.unit().to_string();
    let (two, _) = decimal_combine(system, &unit, &unit, CombineOp::Add);
    let (_, remainder) = times_in_num(system, exponent_magnitude, &two);
    !system.is_identity(&remainder)
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident, $verb:expr) => {
        impl<'ns> core::ops::$trait<Number<'ns>> for Number<'ns> {
            type Output = Number<'ns>;
            fn $method(self, rhs: Number<'ns>) -> Number<'ns> {
                core::ops::$trait::$method(&self, &rhs)
            }
        }
        impl<'ns> core::ops::$trait<&Number<'ns>> for Number<'ns> {
            type Output = Number<'ns>;
            fn $method(self, rhs: &Number<'ns>) -> Number<'ns> {
                core::ops::$trait::$method(&self, rhs)
            }
        }
        impl<'ns> core::ops::$trait<Number<'ns>> for &Number<'ns> {
            type Output = Number<'ns>;
            fn $method(self, rhs: Number<'ns>) -> Number<'ns> {
                core::ops::$trait::$method(self, &rhs)
            }
        }
        impl<'ns> core::ops::$trait<&Number<'ns>> for &Number<'ns> {
            type Output = Number<'ns>;
            fn $method(self, rhs: &Number<'ns>) -> Number<'ns> {
                self.$checked(rhs).expect($verb)
            }
        }
    };
}

forward_binop!(Add, add, checked_add, "addition failed");
forward_binop!(Sub, sub, checked_sub, "subtraction failed");
forward_binop!(Mul, mul, checked_mul, "multiplication failed");
forward_binop!(Div, div, checked_div, "division failed");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::NumeralSystem;

    fn decimal() -> NumeralSystem {
        NumeralSystem::default()
    }

    fn n<'ns>(system: &'ns NumeralSystem, s: &str) -> Number<'ns> {
        Number::new(system, s).unwrap()
    }

    #[test]
    fn adds_same_sign() {
        let ns = decimal();
        let sum = n(&ns, "2.5").checked_add(&n(&ns, "3.25")).unwrap();
        assert_eq!(sum.as_str(), "5.75");
        let sum = n(&ns, "-2.5").checked_add(&n(&ns, "-3.25")).unwrap();
        assert_eq!(sum.as_str(), "-5.75");
    }

    #[test]
    fn adds_mixed_sign() {
        let ns = decimal();
        let sum = n(&ns, "1.00").checked_add(&n(&ns, "-1.05")).unwrap();
        assert_eq!(sum.as_str(), "-0.05");
        let sum = n(&ns, "-1.0").checked_add(&n(&ns, "2.0")).unwrap();
        assert_eq!(sum.as_str(), "1.0");
    }

    #[test]
    fn subtracts_via_negation() {
        let ns = decimal();
        let diff = n(&ns, "5.0") - n(&ns, "8.0");
        assert_eq!(diff.as_str(), "-3.0");
    }

    #[test]
    fn multiplies_with_sign() {
        let ns = decimal();
        let product = &n(&ns, "-2.0") * &n(&ns, "3.0");
        assert_eq!(product.as_str(), "-6.0");
        let product = &n(&ns, "-2.0") * &n(&ns, "-3.0");
        assert_eq!(product.as_str(), "6.0");
    }

    #[test]
    fn divides_with_sign() {
        let ns = decimal();
        let quotient = n(&ns, "7.0").checked_div(&n(&ns, "2.0")).unwrap();
        assert_eq!(quotient.as_str(), "3.5");
    }

    #[test]
    fn rejects_division_by_zero() {
        let ns = decimal();
        assert_eq!(
            n(&ns, "1.0").checked_div(&Number::zero(&ns)),
            Err(OutOfScopeError::DivisionByIdentity.into())
        );
    }

    #[test]
    fn floor_division_matches_worked_scenario() {
        let ns = decimal();
        let q = n(&ns, "219.8459").checked_floor_div(&n(&ns, "4.0")).unwrap();
        assert_eq!(q.as_str(), "54.0");
    }

    #[test]
    fn modulus_takes_divisor_sign_on_mixed_signs() {
        let ns = decimal();
        let (q, r) = n(&ns, "-31.261234").div_rem(&n(&ns, "4.0")).unwrap();
        assert_eq!(q.as_str(), "-8.0");
        assert_eq!(r.as_str(), "0.738766");
    }

    #[test]
    fn modulus_is_zero_when_evenly_divisible() {
        let ns = decimal();
        let (q, r) = n(&ns, "-8.0").div_rem(&n(&ns, "4.0")).unwrap();
        assert_eq!(q.as_str(), "-2.0");
        assert_eq!(r.as_str(), "0.0");
    }

    #[test]
    fn raises_to_integer_powers() {
        let ns = decimal();
        let p = n(&ns, "2.0").checked_powi(&n(&ns, "10.0")).unwrap();
        assert_eq!(p.as_str(), "1024.0");
    }

    #[test]
    fn odd_power_of_negative_base_is_negative() {
        let ns = decimal();
        let p = n(&ns, "-2.0").checked_powi(&n(&ns, "3.0")).unwrap();
        assert_eq!(p.as_str(), "-8.0");
        let p = n(&ns, "-2.0").checked_powi(&n(&ns, "4.0")).unwrap();
        assert_eq!(p.as_str(), "16.0");
    }

    #[test]
    fn negative_exponent_is_a_reciprocal() {
        let ns = decimal();
        let p = n(&ns, "2.0").checked_powi(&n(&ns, "-1.0")).unwrap();
        assert_eq!(p.as_str(), "0.5");
    }

    #[test]
    fn rejects_non_integer_exponent() {
        let ns = decimal();
        assert_eq!(
            n(&ns, "2.0").checked_powi(&n(&ns, "1.5")),
            Err(OutOfScopeError::NonIntegerExponent.into())
        );
    }

    #[test]
    #[should_panic(expected = "division failed")]
    fn operator_division_panics_on_divide_by_zero() {
        let ns = decimal();
        let _ = n(&ns, "1.0") / Number::zero(&ns);
    }
}
