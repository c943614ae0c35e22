//! Driving a series to a requested number of terms.
//!
//! [`SeriesDriver`] owns the per-term closure and walks an index `Number`
//! from a configurable lower bound, by a configurable step, up to a
//! required upper bound, accumulating terms along the way.
//! [`SeriesDriver::arithmetic_series`] sums terms and stops the moment one
//! rounds to zero (the natural terminator for a series like `e`'s `1/k!`,
//! whose terms shrink below the configured precision, and a no-op for a
//! series like Leibniz's whose terms never hit zero, where the upper bound
//! alone ends the loop). [`SeriesDriver::rational_series`] is a *product*
//! series, seeded at the multiplicative unit and never stopping early on a
//! zero term (a zero factor is a meaningful answer, not evidence the tail
//! is exhausted).

use crate::number::Number;
use crate::system::NumeralSystem;

/// Drives a numeric series term by term under a single [`NumeralSystem`].
pub struct SeriesDriver<'ns, F>
where
    F: Fn(&Number<'ns>) -> Number<'ns>,
{
    system: &'ns NumeralSystem,
    term: F,
    lower_bound: Number<'ns>,
    upper_bound: Number<'ns>,
    step: Number<'ns>,
}

impl<'ns, F> SeriesDriver<'ns, F>
where
    F: Fn(&Number<'ns>) -> Number<'ns>,
{
    /// Builds a driver over `term`, an index-to-term function, bounded above
    /// by `upper_bound` (required: a series is never driven to infinity).
    /// Defaults to a lower bound of `0` and a step of `1`.
    pub fn new(system: &'ns NumeralSystem, term: F, upper_bound: Number<'ns>) -> Self {
        SeriesDriver {
            system,
            term,
            lower_bound: Number::zero(system),
            upper_bound,
            step: Number::one(system),
        }
    }

    /// Sets the starting index (default `0`).
    pub fn lower_bound(mut self, bound: Number<'ns>) -> Self {
        self.lower_bound = bound;
        self
    }

    /// Sets the index increment between terms (default `1`).
    pub fn step(mut self, step: Number<'ns>) -> Self {
        self.step = step;
        self
    }

    /// Sums `T(k)` for `k` from the lower bound to the upper bound (inclusive)
    /// stepping by `step`, stopping as soon as a term is exactly zero.
    pub fn arithmetic_series(&self) -> Number<'ns> {
        let mut sum = Number::zero(self.system);
        let mut index = self.lower_bound.clone();
        while index <= self.upper_bound {
            let term_value = (self.term)(&index);
            if term_value.is_zero() {
                break;
            }
            sum = sum.checked_add(&term_value).expect("series terms share a numeral system");
            index = index.checked_add(&self.step).expect("series index advances within its own system");
        }
        sum
    }

    /// Multiplies `T(k)` for `k` from the lower bound to the upper bound
    /// (inclusive) stepping by `step`. A zero-valued term does not end the
    /// product early.
    pub fn rational_series(&self) -> Number<'ns> {
        let mut product = Number::one(self.system);
        let mut index = self.lower_bound.clone();
        while index <= self.upper_bound {
            let term_value = (self.term)(&index);
            product = product.checked_mul(&term_value).expect("series terms share a numeral system");
            index = index.checked_add(&self.step).expect("series index advances within its own system");
        }
        product
    }
}

/// A handful of classic series, expressed as term factories for
/// [`SeriesDriver::arithmetic_series`].
pub mod constants {
    use super::*;

    /// The `e` series term `1 / k!`.
    pub fn e_term<'ns>(system: &'ns NumeralSystem) -> impl Fn(&Number<'ns>) -> Number<'ns> + 'ns {
        move |index: &Number<'ns>| {
            let one = Number::one(system);
            let mut factorial = Number::one(system);
            let mut k = Number::one(system);
            while &k <= index {
                factorial = (&factorial * &k);
                k = k.checked_add(&one).expect("loop counter advances within its own system");
            }
            one.checked_div(&factorial).expect("factorial of a non-negative integer is never zero")
        }
    }

    /// The Leibniz series term `4 * (-1)^k / (2k + 1)`, whose partial sums
    /// converge (slowly) to pi.
    pub fn pi_leibniz_term<'ns>(system: &'ns NumeralSystem) -> impl Fn(&Number<'ns>) -> Number<'ns> + 'ns {
        move |index: &Number<'ns>| {
            let neg_one = Number::new(system, "-1").expect("built-in literal is well-formed");
            let two = Number::new(system, "2").expect("built-in literal is well-formed");
            let four = Number::new(system, "4").expect("built-in literal is well-formed");
            let one = Number::one(system);

            let sign = neg_one.checked_powi(index).expect("series index is a non-negative integer");
            let denom = (&two * index)
                .checked_add(&one)
                .expect("series arithmetic shares one numeral system");
            let magnitude = four
                .checked_div(&denom)
                .expect("2k + 1 is never zero for a non-negative index");
            &sign * &magnitude
        }
    }

    /// The Bailey-Borwein-Plouffe series term for pi:
    /// `(1/16^k) * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))`.
    pub fn pi_bbp_term<'ns>(system: &'ns NumeralSystem) -> impl Fn(&Number<'ns>) -> Number<'ns> + 'ns {
        move |index: &Number<'ns>| {
            let sixteen = Number::new(system, "16").expect("built-in literal is well-formed");
            let eight = Number::new(system, "8").expect("built-in literal is well-formed");
            let one = Number::one(system);
            let two = Number::new(system, "2").expect("built-in literal is well-formed");
            let four = Number::new(system, "4").expect("built-in literal is well-formed");
            let five = Number::new(system, "5").expect("built-in literal is well-formed");
            let six = Number::new(system, "6").expect("built-in literal is well-formed");

            let eight_k = &eight * index;
            let a = four.checked_div(&(&eight_k + &one)).expect("8k + 1 is never zero");
            let b = &two / &(&eight_k + &four);
            let c = &one / &(&eight_k + &five);
            let d = &one / &(&eight_k + &six);
            let bracket = &(&a - &b) - &(&c + &d);

            let pow16 = sixteen.checked_powi(index).expect("series index is a non-negative integer");
            bracket.checked_div(&pow16).expect("16^k is never zero")
        }
    }
}
