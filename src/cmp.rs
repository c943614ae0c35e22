//! Ordering and equality for [`Number`].
//!
//! Two `Number`s drawn from different `NumeralSystem`s are never equal and
//! never ordered relative to each other; `PartialEq`/`PartialOrd` report that
//! honestly (`false` / `None`) rather than panicking, since neither trait
//! promises totality. `Ord`, which does promise totality, panics on a system
//! mismatch instead of lying about an order that doesn't exist.

use core::cmp::Ordering;

use crate::kernel::magnitude_compare;
use crate::number::Number;

impl<'ns> PartialEq for Number<'ns> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.system, other.system) && total_cmp(self, other) == Ordering::Equal
    }
}

impl<'ns> Eq for Number<'ns> {}

impl<'ns> PartialOrd for Number<'ns> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if core::ptr::eq(self.system, other.system) {
            Some(total_cmp(self, other))
        } else {
            None
        }
    }
}

impl<'ns> Ord for Number<'ns> {
    fn cmp(&self, other: &Self) -> Ordering {
        assert!(
            core::ptr::eq(self.system, other.system),
            "cannot order numbers from different numeral systems"
        );
        total_cmp(self, other)
    }
}

/// Orders two same-system numbers: any positive value is greater than any
/// negative value; among two positives the greater magnitude wins; among two
/// negatives the *smaller* magnitude wins (closer to zero is greater).
fn total_cmp(a: &Number, b: &Number) -> Ordering {
    match (a.is_negative(), b.is_negative()) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => magnitude_ordering(a, b),
        (true, true) => magnitude_ordering(a, b).reverse(),
    }
}

fn magnitude_ordering(a: &Number, b: &Number) -> Ordering {
    let (greater, equal) = magnitude_compare(a.system, a.magnitude(), b.magnitude());
    if equal {
        Ordering::Equal
    } else if greater {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::NumeralSystem;

    fn decimal() -> NumeralSystem {
        NumeralSystem::default()
    }

    #[test]
    fn positive_outranks_negative() {
        let ns = decimal();
        let pos = Number::new(&ns, "0.01").unwrap();
        let neg = Number::new(&ns, "-100.0").unwrap();
        assert!(pos > neg);
    }

    #[test]
    fn among_negatives_smaller_magnitude_is_greater() {
        let ns = decimal();
        let a = Number::new(&ns, "-1.0").unwrap();
        let b = Number::new(&ns, "-2.0").unwrap();
        assert!(a > b);
    }

    #[test]
    fn equal_values_compare_equal() {
        let ns = decimal();
        let a = Number::new(&ns, "7.10").unwrap();
        let b = Number::new(&ns, "7.1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_systems_are_never_equal_or_ordered() {
        let ns_a = decimal();
        let ns_b = decimal();
        let a = Number::new(&ns_a, "1.0").unwrap();
        let b = Number::new(&ns_b, "1.0").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    #[should_panic(expected = "different numeral systems")]
    fn ord_panics_on_system_mismatch() {
        let ns_a = decimal();
        let ns_b = decimal();
        let a = Number::new(&ns_a, "1.0").unwrap();
        let b = Number::new(&ns_b, "1.0").unwrap();
        let _ = a.cmp(&b);
    }
}
