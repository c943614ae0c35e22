//! Magnitude (sign-less) comparison of two full `"int.frac"` strings.

use crate::system::{NumeralSystem, Side};

/// Compares two non-negative magnitude strings lexicographically by
/// canonical weight: integer-part length first, then digit-by-digit on the
/// integer part, then digit-by-digit on the (right-padded) fractional part.
/// Returns `(a_is_greater, a_equals_b)`.
pub(crate) fn magnitude_compare(system: &NumeralSystem, a: &str, b: &str) -> (bool, bool) {
    let (ip_a, fp_a) = system.split(a);
    let (ip_b, fp_b) = system.split(b);
    let ip_a = system.trim_leading_identity(&ip_a);
    let ip_b = system.trim_leading_identity(&ip_b);

    let len_a = ip_a.chars().count();
    let len_b = ip_b.chars().count();
    if len_a != len_b {
        return (len_a > len_b, false);
    }
    if let Some(result) = compare_digit_strings(system, &ip_a, &ip_b) {
        return result;
    }

    let (fp_a, fp_b) = system.pad(&fp_a, &fp_b, Side::Right);
    compare_digit_strings(system, &fp_a, &fp_b).unwrap_or((false, true))
}

/// Compares two equal-length digit strings left to right. Returns `None` if
/// they're identical, otherwise `Some((a_is_greater, false))`.
fn compare_digit_strings(system: &NumeralSystem, a: &str, b: &str) -> Option<(bool, bool)> {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            let ia = system.position(ca).expect("glyph validated by caller");
            let ib = system.position(cb).expect("glyph validated by caller");
            return Some((ia > ib, false));
        }
    }
    None
}
