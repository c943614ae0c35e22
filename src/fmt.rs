//! `Display` and `Debug` for [`Number`].

use core::fmt;

use crate::number::Number;

impl<'ns> fmt::Display for Number<'ns> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl<'ns> fmt::Debug for Number<'ns> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Number").field("digits", &self.digits).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::NumeralSystem;
    use alloc::string::ToString;

    #[test]
    fn displays_canonical_digits() {
        let ns = NumeralSystem::default();
        let n = Number::new(&ns, "-007.10").unwrap();
        assert_eq!(n.to_string(), "-7.1");
    }
}
