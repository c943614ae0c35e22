//! [`Number`]: a signed value bound to a particular [`NumeralSystem`].
//!
//! A `Number` owns nothing but its canonical digit string and a reference to
//! the system it was parsed under; all of the arithmetic in [`crate::ops`]
//! dispatches on sign here and hands non-negative magnitudes down to
//! [`crate::kernel`].

use alloc::string::{String, ToString};

use crate::error::{Error, InputError};
use crate::system::NumeralSystem;

/// A value expressed as a glyph sequence under a specific [`NumeralSystem`].
///
/// `Number` never reaches for a native integer or float: its only state is
/// the canonical signed digit string (`"-7.5"`, `"0.0"`, `"200.04"`, ...) and
/// a borrow of the system that gives that string meaning. Two `Number`s can
/// only be combined when they share the exact same `NumeralSystem` (compared
/// by reference identity, not by structural equality, since two systems with
/// identical configuration are still considered distinct universes of
/// discourse).
#[derive(Clone)]
pub struct Number<'ns> {
    pub(crate) digits: String,
    pub(crate) system: &'ns NumeralSystem,
}

impl<'ns> Number<'ns> {
    /// Parses `text` as a `Number` under `system`, validating the grammar
    /// (optional leading sign, digits, at most one separator, no empty
    /// integer or fractional part) and normalizing it to canonical form.
    pub fn new(system: &'ns NumeralSystem, text: &str) -> Result<Self, Error> {
        validate_grammar(system, text)?;
        let digits = system.normalize(text)?;
        Ok(Number { digits, system })
    }

    /// The canonical zero value of `system`.
    pub fn zero(system: &'ns NumeralSystem) -> Self {
        Number {
            digits: system.zero_string(),
            system,
        }
    }

    /// The canonical multiplicative unit (`1`) of `system`.
    pub fn one(system: &'ns NumeralSystem) -> Self {
        let mut digits = String::with_capacity(3);
        digits.push(system.unit());
        digits.push(system.separator());
        digits.push(system.identity());
        Number { digits, system }
    }

    /// The `NumeralSystem` this value is expressed under.
    pub fn system(&self) -> &'ns NumeralSystem {
        self.system
    }

    /// The canonical signed digit string, e.g. `"-7.5"`.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The unsigned magnitude, e.g. `"7.5"` for both `7.5` and `-7.5`.
    pub fn magnitude(&self) -> &str {
        self.digits.strip_prefix(self.system.sign()).unwrap_or(&self.digits)
    }

    /// Whether this value carries a negative sign.
    pub fn is_negative(&self) -> bool {
        self.digits.starts_with(self.system.sign())
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.system.is_identity(self.magnitude())
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Number {
            digits: self.magnitude().to_string(),
            system: self.system,
        }
    }

    /// Unary plus: returns a clone unchanged. Exists to round out the sign
    /// operators alongside [`core::ops::Neg`].
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Rounds to `places` fractional glyphs using the system's configured
    /// rounding mode. Idempotent: rounding an already-rounded value to the
    /// same number of places returns an equal value.
    pub fn round(&self, places: usize) -> Self {
        let system = self.system;
        let rounded = system.rounding().round(system, self.magnitude(), places);
        Number::from_signed_magnitude(system, self.is_negative(), &rounded)
    }

    /// Builds a `Number` from a sign flag and a non-negative magnitude
    /// string, normalizing the result (which also collapses a negative zero
    /// to an unsigned one).
    pub(crate) fn from_signed_magnitude(system: &'ns NumeralSystem, negative: bool, magnitude: &str) -> Self {
        let raw = if negative {
            let mut s = String::with_capacity(magnitude.len() + 1);
            s.push(system.sign());
            s.push_str(magnitude);
            s
        } else {
            magnitude.to_string()
        };
        let digits = system
            .normalize(&raw)
            .expect("magnitude built from kernel output is always well-formed");
        Number { digits, system }
    }

    /// Checks that `self` and `other` share the same `NumeralSystem` by
    /// reference identity.
    pub(crate) fn require_same_system(&self, other: &Number<'ns>) -> Result<(), Error> {
        if core::ptr::eq(self.system, other.system) {
            Ok(())
        } else {
            Err(InputError::IncompatibleSystems.into())
        }
    }
}

impl<'ns> core::ops::Neg for Number<'ns> {
    type Output = Number<'ns>;
    fn neg(self) -> Number<'ns> {
        -&self
    }
}

impl<'ns> core::ops::Neg for &Number<'ns> {
    type Output = Number<'ns>;
    fn neg(self) -> Number<'ns> {
        if self.is_zero() {
            self.clone()
        } else {
            Number::from_signed_magnitude(self.system, !self.is_negative(), self.magnitude())
        }
    }
}

/// Validates the surface grammar of a `Number` literal before handing it to
/// `NumeralSystem::normalize`, which assumes well-formed input.
fn validate_grammar(system: &NumeralSystem, text: &str) -> Result<(), InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let mut separators = 0usize;
    for (i, c) in text.chars().enumerate() {
        if c == system.sign() {
            if i != 0 {
                return Err(InputError::MisplacedSign);
            }
        } else if c == system.separator() {
            separators += 1;
        } else if system.position(c).is_none() {
            return Err(InputError::InvalidGlyph(c));
        }
    }
    if separators > 1 {
        return Err(InputError::MultipleSeparators);
    }

    let rest = text.strip_prefix(system.sign()).unwrap_or(text);
    if rest.is_empty() {
        return Err(InputError::Empty);
    }
    let (ip, fp) = system.split(rest);
    if ip.is_empty() || fp.is_empty() {
        return Err(InputError::MissingDigits);
    }
    Ok(())
}
