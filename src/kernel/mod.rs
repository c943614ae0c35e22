//! Pure digit-sequence algorithms keyed on a [`NumeralSystem`](crate::system::NumeralSystem).
//!
//! Every function here operates on non-negative magnitude strings and never
//! looks at sign; [`Number`](crate::number::Number) is the layer that
//! decides which kernel routine to call for a given sign combination and
//! composes the sign back on afterward.

pub(crate) mod add;
pub(crate) mod cmp;
pub(crate) mod combine;
pub(crate) mod div;
pub(crate) mod mul;
pub(crate) mod pow;

pub(crate) use add::{base_add, base_subtract};
pub(crate) use cmp::magnitude_compare;
pub(crate) use combine::{decimal_combine, CombineOp};
pub(crate) use div::{base_divide, times_in_num};
pub(crate) use mul::{base_multiply, knuth_up};
pub(crate) use pow::integer_exponent;
