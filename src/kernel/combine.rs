//! The decimal combine: lines up two full `"int.frac"` magnitudes at their
//! separator and runs [`base_add`] or [`base_subtract`] across both halves,
//! folding the fractional carry/borrow into the integer half.

use alloc::format;
use alloc::string::String;

use super::add::{base_add, base_subtract};
use crate::system::{NumeralSystem, Side};

/// Which digit-level primitive a [`decimal_combine`] call is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CombineOp {
    Add,
    Subtract,
}

fn apply(system: &NumeralSystem, op: CombineOp, a: &str, b: &str) -> (String, bool) {
    match op {
        CombineOp::Add => base_add(system, a, b),
        CombineOp::Subtract => base_subtract(system, a, b),
    }
}

fn identity_run(identity: char, len: usize) -> String {
    core::iter::repeat(identity).take(len).collect()
}

/// Combines two full, non-negative `"int.frac"` magnitude strings with
/// `op`. Returns the combined magnitude and a `zero_crossed` flag that is
/// only ever `true` for `op = Subtract`, meaning `b`'s magnitude exceeded
/// `a`'s and the returned string is the absolute value of the (negative)
/// difference.
pub(crate) fn decimal_combine(system: &NumeralSystem, a: &str, b: &str, op: CombineOp) -> (String, bool) {
    log::debug!(target: "sifr::kernel::combine", "decimal_combine({a}, {b}, {op:?})");

    let unit = system.unit();
    let identity = system.identity();
    let sep = system.separator();

    let (n_str, _) = apply(system, op, &identity.to_string(), &unit.to_string());
    let n = n_str.chars().next_back().expect("non-empty result");

    let (ip_a, fp_a) = system.split(a);
    let (ip_b, fp_b) = system.split(b);
    let (fp_a, fp_b) = system.pad(&fp_a, &fp_b, Side::Right);
    let (frac, frac_carry) = apply(system, op, &fp_a, &fp_b);

    let (int_part, out_carry) = if frac_carry {
        let (tmp, tmp_carry) = apply(system, op, &ip_a, &unit.to_string());
        let tmp = if tmp_carry { format!("{n}{tmp}") } else { tmp };
        apply(system, op, &tmp, &ip_b)
    } else {
        apply(system, op, &ip_a, &ip_b)
    };

    if out_carry && n == unit {
        let sum = format!("{unit}{int_part}{sep}{frac}");
        (sum, false)
    } else if out_carry {
        let (mut diff_int, _) = apply(system, op, &identity_run(identity, int_part.chars().count()), &int_part);
        let (diff_frac, frac_borrowed) = apply(system, op, &identity_run(identity, frac.chars().count()), &frac);
        if frac_borrowed {
            let (adjusted, _) = apply(system, op, &diff_int, &unit.to_string());
            diff_int = adjusted;
        }
        (format!("{diff_int}{sep}{diff_frac}"), true)
    } else {
        (format!("{int_part}{sep}{frac}"), false)
    }
}
