//! Arbitrary-precision, arbitrary-base positional arithmetic over
//! user-defined digit alphabets.
//!
//! Every value is a sequence of glyphs from a caller-chosen alphabet (not
//! necessarily `0`-`9`, not necessarily base ten); every operation works
//! glyph by glyph. Nothing here ever converts a magnitude to a native
//! integer or float, so the size of a value is bounded only by memory, and a
//! [`NumeralSystem`] with a wholly invented alphabet is exactly as usable as
//! the built-in Western decimal one.
//!
//! ```
//! use sifr::{Number, NumeralSystem};
//!
//! let decimal = NumeralSystem::default();
//! let a = Number::new(&decimal, "219.8459").unwrap();
//! let b = Number::new(&decimal, "4").unwrap();
//! assert_eq!((a.floor_div(&b)).to_string(), "54.0");
//! ```
//!
//! # Features
//!
//! * `std` (default): enables `std::error::Error` impls for this crate's
//!   error types. Disable for `no_std` + `alloc` environments.
//! * `serde`: `Serialize`/`Deserialize` for [`NumeralSystem`], `Serialize`
//!   for [`Number`], and `serde::NumberSeed` for deserializing a `Number`
//!   against a caller-supplied system.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cmp;
mod error;
mod fmt;
mod kernel;
mod number;
mod ops;
mod round;
mod series;
mod system;
mod third_party;

pub use error::{ConfigurationError, Error, InputError, OutOfScopeError};
pub use number::Number;
pub use round::{HalfAway, Round, RoundingMode};
pub use series::{constants, SeriesDriver};
pub use system::NumeralSystem;

#[cfg(feature = "serde")]
pub use third_party::serde;
