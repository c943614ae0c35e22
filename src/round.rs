//! Rounding modes.
//!
//! Only half-away-from-zero is implemented, but rounding is routed through
//! the [`Round`] trait so a second mode is a trait impl away rather than a
//! rewrite of every call site.

use alloc::string::String;

use crate::system::NumeralSystem;

/// A rounding mode a [`NumeralSystem`](crate::NumeralSystem) can be
/// configured with.
///
/// This is a runtime enum rather than a compile-time type parameter because
/// a `NumeralSystem` is built from caller-supplied values at runtime; the
/// base and alphabet aren't known until then either, so there is no type to
/// parameterize over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum RoundingMode {
    HalfAway,
}

impl RoundingMode {
    pub(crate) fn round(self, system: &NumeralSystem, magnitude: &str, places: usize) -> String {
        match self {
            RoundingMode::HalfAway => HalfAway::round(system, magnitude, places),
        }
    }
}

/// A concrete rounding algorithm, keyed on a [`NumeralSystem`].
///
/// Implementors operate on non-negative canonical magnitude strings and
/// truncate or round them to a target fractional length.
pub trait Round {
    /// Rounds `magnitude` (a non-negative canonical `"int.frac"` string) to
    /// `places` fractional digits.
    fn round(system: &NumeralSystem, magnitude: &str, places: usize) -> String;
}

/// Round half away from zero: a tie (the first discarded digit sits exactly
/// at the alphabet's midpoint) rounds the kept digits away from zero.
#[derive(Clone, Copy, Debug)]
pub struct HalfAway;

impl Round for HalfAway {
    fn round(system: &NumeralSystem, magnitude: &str, places: usize) -> String {
        let (ip, fp) = system.split(magnitude);
        let fp_chars: alloc::vec::Vec<char> = fp.chars().collect();
        let sep = system.separator();

        if fp_chars.len() <= places {
            return format_parts(&ip, &fp, sep);
        }

        let boundary_digit = fp_chars[places];
        let idx = system.position(boundary_digit).expect("digit from validated string");
        let round_up = idx * 2 >= system.base();

        if !round_up {
            let kept: String = fp_chars[..places].iter().collect();
            let kept = if places == 0 { system.identity().to_string() } else { kept };
            return format_parts(&ip, &kept, sep);
        }

        if places == 0 {
            let new_ip = crate::kernel::add::increment(system, &ip);
            return format_parts(&new_ip, &system.identity().to_string(), sep);
        }

        let kept: String = fp_chars[..places].iter().collect();
        let (frac_sum, frac_carry) = crate::kernel::add::base_add(system, &kept, &system.unit().to_string());
        let new_ip = if frac_carry {
            crate::kernel::add::increment(system, &ip)
        } else {
            ip
        };
        format_parts(&new_ip, &frac_sum, sep)
    }
}

fn format_parts(ip: &str, fp: &str, sep: char) -> String {
    let mut out = String::with_capacity(ip.len() + 1 + fp.len());
    out.push_str(ip);
    out.push(sep);
    out.push_str(fp);
    out
}
