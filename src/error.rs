//! Error types surfaced by this crate.
//!
//! Three leaf families, mirroring the three ways a caller can misuse the
//! engine: bad configuration of a [`NumeralSystem`](crate::NumeralSystem),
//! bad input text, or an operation that is mathematically out of scope (a
//! non-integer exponent, division by the identity glyph). They are unified
//! by [`Error`] so `?` composes across all three.

use core::fmt;

/// Top-level error type returned by fallible entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    Configuration(ConfigurationError),
    Input(InputError),
    OutOfScope(OutOfScopeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(e) => fmt::Display::fmt(e, f),
            Error::Input(e) => fmt::Display::fmt(e, f),
            Error::OutOfScope(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Error::Configuration(e)
    }
}
impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}
impl From<OutOfScopeError> for Error {
    fn from(e: OutOfScopeError) -> Self {
        Error::OutOfScope(e)
    }
}

/// A [`NumeralSystem`](crate::NumeralSystem) was asked to configure itself
/// with a malformed alphabet, separator, or sign glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The alphabet must contain at least two distinct glyphs (an identity
    /// and a unit).
    AlphabetTooShort,
    /// The same glyph appears more than once in the alphabet.
    DuplicateGlyph(char),
    /// The separator glyph also appears in the alphabet.
    SeparatorCollision,
    /// The sign glyph also appears in the alphabet, or coincides with the
    /// separator.
    SignCollision,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::AlphabetTooShort => {
                write!(f, "alphabet must contain at least two distinct glyphs")
            }
            ConfigurationError::DuplicateGlyph(c) => {
                write!(f, "glyph {c:?} appears more than once in the alphabet")
            }
            ConfigurationError::SeparatorCollision => {
                write!(f, "separator glyph also appears in the alphabet")
            }
            ConfigurationError::SignCollision => {
                write!(f, "sign glyph collides with the alphabet or the separator")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigurationError {}

/// A string failed to parse as a [`Number`](crate::Number) under some
/// [`NumeralSystem`](crate::NumeralSystem).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// The input (or the magnitude that follows a sign glyph) is empty.
    Empty,
    /// A character outside the alphabet and not the separator was found.
    InvalidGlyph(char),
    /// The sign glyph appears somewhere other than the first position.
    MisplacedSign,
    /// More than one separator glyph was found.
    MultipleSeparators,
    /// The integer or fractional part is missing a digit next to the
    /// separator (e.g. `".5"` or `"5."`).
    MissingDigits,
    /// The two operands of a binary operation reference different
    /// `NumeralSystem`s.
    IncompatibleSystems,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "input is empty"),
            InputError::InvalidGlyph(c) => write!(f, "glyph {c:?} is not in the alphabet"),
            InputError::MisplacedSign => write!(f, "sign glyph must be the first character"),
            InputError::MultipleSeparators => write!(f, "more than one separator glyph"),
            InputError::MissingDigits => {
                write!(f, "integer and fractional parts must each have at least one digit")
            }
            InputError::IncompatibleSystems => {
                write!(f, "operands reference different numeral systems")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// The requested operation is mathematically out of scope for this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutOfScopeError {
    /// Exponentiation by a non-integer value was requested.
    NonIntegerExponent,
    /// Division (true, floor, or modulus) by the identity glyph.
    DivisionByIdentity,
}

impl fmt::Display for OutOfScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfScopeError::NonIntegerExponent => {
                write!(f, "exponent must have a zero fractional part")
            }
            OutOfScopeError::DivisionByIdentity => write!(f, "division by the identity glyph"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfScopeError {}
