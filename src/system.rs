//! Positional numeral systems: the alphabet, separator, and sign glyphs that
//! give meaning to a [`Number`](crate::Number)'s digit sequence, plus the
//! primitive glyph-walking operations every [`Kernel`](crate::kernel)
//! algorithm is built from.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::InputError;
use crate::round::RoundingMode;

/// Which side of a string to pad with identity glyphs in [`NumeralSystem::pad`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A positional numeral system: an ordered alphabet of digit glyphs (index 0
/// is the additive identity, index 1 is the multiplicative unit), a
/// fractional separator glyph, a negative-sign glyph, a fractional
/// precision, and a rounding mode.
///
/// All three glyph classes (alphabet, separator, sign) are pairwise
/// disjoint; this is enforced once at construction so every later operation
/// can assume it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumeralSystem {
    alphabet: Vec<char>,
    separator: char,
    sign: char,
    precision: usize,
    rounding: RoundingMode,
}

impl NumeralSystem {
    /// Builds a numeral system from an explicit alphabet.
    ///
    /// `alphabet` is ordered: position 0 is the additive identity, position 1
    /// the multiplicative unit, and so on. Fails if the alphabet has fewer
    /// than two glyphs, contains a duplicate, or collides with `separator`
    /// or `sign`.
    pub fn new(
        alphabet: impl Into<Vec<char>>,
        separator: char,
        sign: char,
        precision: usize,
        rounding: RoundingMode,
    ) -> Result<Self, crate::error::ConfigurationError> {
        use crate::error::ConfigurationError as E;

        let alphabet = alphabet.into();
        if alphabet.len() < 2 {
            return Err(E::AlphabetTooShort);
        }
        for (i, &g) in alphabet.iter().enumerate() {
            if alphabet[..i].contains(&g) {
                return Err(E::DuplicateGlyph(g));
            }
        }
        if alphabet.contains(&separator) {
            return Err(E::SeparatorCollision);
        }
        if alphabet.contains(&sign) || sign == separator {
            return Err(E::SignCollision);
        }

        Ok(NumeralSystem {
            alphabet,
            separator,
            sign,
            precision,
            rounding,
        })
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    pub fn sign(&self) -> char {
        self.sign
    }

    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    #[inline]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Number of glyphs in the alphabet (the numeral system's base).
    #[inline]
    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    /// The additive identity glyph (alphabet position 0).
    #[inline]
    pub fn identity(&self) -> char {
        self.alphabet[0]
    }

    /// The multiplicative unit glyph (alphabet position 1).
    #[inline]
    pub fn unit(&self) -> char {
        self.alphabet[1]
    }

    /// The last glyph in the alphabet (base - 1).
    #[inline]
    pub fn last(&self) -> char {
        self.alphabet[self.alphabet.len() - 1]
    }

    /// Canonical zero magnitude, e.g. `"0.0"`.
    pub(crate) fn zero_string(&self) -> String {
        let mut s = String::with_capacity(3);
        s.push(self.identity());
        s.push(self.separator);
        s.push(self.identity());
        s
    }

    /// Whether `s` is the canonical (or loosely-formed) representation of
    /// zero: every glyph in it is the identity glyph.
    pub(crate) fn is_identity(&self, s: &str) -> bool {
        s.chars().all(|c| c == self.identity() || c == self.separator)
    }

    /// Index of `glyph` in the alphabet, or `None` if it is not a digit of
    /// this system.
    #[inline]
    pub(crate) fn position(&self, glyph: char) -> Option<usize> {
        self.alphabet.iter().position(|&g| g == glyph)
    }

    /// The glyph one greater than `glyph`, and whether advancing past it
    /// wrapped back to the identity glyph (an out-carry).
    pub(crate) fn successor(&self, glyph: char) -> Option<(char, bool)> {
        let idx = self.position(glyph)?;
        if idx + 1 == self.alphabet.len() {
            Some((self.identity(), true))
        } else {
            Some((self.alphabet[idx + 1], false))
        }
    }

    /// The glyph one less than `glyph`, and whether the decrement wrapped
    /// past the identity glyph (an out-borrow).
    pub(crate) fn predecessor(&self, glyph: char) -> Option<(char, bool)> {
        let idx = self.position(glyph)?;
        if idx == 0 {
            Some((self.last(), true))
        } else {
            Some((self.alphabet[idx - 1], false))
        }
    }

    /// Advances `glyph` by `steps` successor applications, accumulating any
    /// wrap-around carry across all of them.
    pub(crate) fn advance(&self, glyph: char, steps: usize) -> (char, bool) {
        let mut digit = glyph;
        let mut carry = false;
        for _ in 0..steps {
            let (d, c) = self.successor(digit).expect("glyph validated by caller");
            digit = d;
            carry |= c;
        }
        (digit, carry)
    }

    /// Retreats `glyph` by `steps` predecessor applications, accumulating
    /// any wrap-around borrow across all of them.
    pub(crate) fn retreat(&self, glyph: char, steps: usize) -> (char, bool) {
        let mut digit = glyph;
        let mut borrow = false;
        for _ in 0..steps {
            let (d, b) = self.predecessor(digit).expect("glyph validated by caller");
            digit = d;
            borrow |= b;
        }
        (digit, borrow)
    }

    /// Splits a magnitude string at its separator into (integer, fractional)
    /// parts. If no separator is present the whole string is the integer
    /// part and the fractional part defaults to a single identity glyph.
    pub(crate) fn split(&self, s: &str) -> (String, String) {
        match s.find(self.separator) {
            Some(idx) => {
                let ip = s[..idx].to_string();
                let fp = s[idx + self.separator.len_utf8()..].to_string();
                (ip, fp)
            }
            None => (s.to_string(), self.identity().to_string()),
        }
    }

    /// Pads the shorter of `a` and `b` with identity glyphs on `side` so
    /// both have equal length.
    pub(crate) fn pad(&self, a: &str, b: &str, side: Side) -> (String, String) {
        let a_len = a.chars().count();
        let b_len = b.chars().count();
        let target = a_len.max(b_len);
        (self.pad_one(a, target, side), self.pad_one(b, target, side))
    }

    fn pad_one(&self, s: &str, target: usize, side: Side) -> String {
        let len = s.chars().count();
        if len >= target {
            return s.to_string();
        }
        let filler: String = core::iter::repeat(self.identity()).take(target - len).collect();
        match side {
            Side::Left => {
                let mut out = filler;
                out.push_str(s);
                out
            }
            Side::Right => {
                let mut out = String::with_capacity(target);
                out.push_str(s);
                out.push_str(&filler);
                out
            }
        }
    }

    /// Multiplies a non-negative magnitude by `base^k` by moving the
    /// separator `k` places to the right, appending identity glyphs past the
    /// end of the fractional part as needed.
    pub(crate) fn raise_by_base(&self, s: &str, k: usize) -> String {
        if k == 0 {
            return s.to_string();
        }
        let (ip, fp) = self.split(s);
        let mut fp_chars: Vec<char> = fp.chars().collect();
        while fp_chars.len() < k {
            fp_chars.push(self.identity());
        }
        let moved: String = fp_chars[..k].iter().collect();
        let remaining: String = fp_chars[k..].iter().collect();
        let mut new_ip = String::with_capacity(ip.len() + moved.len());
        new_ip.push_str(&ip);
        new_ip.push_str(&moved);
        let new_fp = if remaining.is_empty() {
            self.identity().to_string()
        } else {
            remaining
        };
        let mut out = String::with_capacity(new_ip.len() + 1 + new_fp.len());
        out.push_str(&new_ip);
        out.push(self.separator);
        out.push_str(&new_fp);
        out
    }

    /// Strips leading identity glyphs from an integer-part string, keeping
    /// at least one glyph.
    pub(crate) fn trim_leading_identity(&self, s: &str) -> String {
        let trimmed = s.trim_start_matches(self.identity());
        if trimmed.is_empty() {
            self.identity().to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Strips trailing identity glyphs from a fractional-part string,
    /// keeping at least one glyph.
    pub(crate) fn trim_trailing_identity(&self, s: &str) -> String {
        let trimmed = s.trim_end_matches(self.identity());
        if trimmed.is_empty() {
            self.identity().to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Enforces canonical form on a (possibly signed) magnitude string:
    /// trims the integer part's leading identities down to one, trims the
    /// fractional part's trailing identities down to one, guarantees the
    /// separator is present, and collapses a signed zero to an unsigned one.
    ///
    /// Assumes `s`'s glyphs have already been validated against the
    /// alphabet; this is a structural pass, not a grammar check.
    pub(crate) fn normalize(&self, s: &str) -> Result<String, InputError> {
        if s.is_empty() {
            return Err(InputError::Empty);
        }
        let (negative, rest) = if let Some(r) = s.strip_prefix(self.sign) {
            (true, r)
        } else {
            (false, s)
        };
        if rest.is_empty() {
            return Err(InputError::Empty);
        }

        let (ip, fp) = self.split(rest);
        let ip = self.trim_leading_identity(&ip);
        let fp = self.trim_trailing_identity(&fp);
        let is_zero = ip == self.identity().to_string() && fp == self.identity().to_string();

        let mut magnitude = String::with_capacity(ip.len() + 1 + fp.len());
        magnitude.push_str(&ip);
        magnitude.push(self.separator);
        magnitude.push_str(&fp);

        if negative && !is_zero {
            let mut out = String::with_capacity(magnitude.len() + self.sign.len_utf8());
            out.push(self.sign);
            out.push_str(&magnitude);
            Ok(out)
        } else {
            Ok(magnitude)
        }
    }
}

impl Default for NumeralSystem {
    /// The Western decimal system: digits `'0'..='9'`, `'.'` separator,
    /// `'-'` sign, 40 fractional digits of precision, rounding half away
    /// from zero.
    fn default() -> Self {
        NumeralSystem::new(
            ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            '.',
            '-',
            40,
            RoundingMode::HalfAway,
        )
        .expect("the built-in Western decimal system is well-formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal() -> NumeralSystem {
        NumeralSystem::default()
    }

    #[test]
    fn rejects_short_alphabet() {
        assert_eq!(
            NumeralSystem::new(['0'], '.', '-', 10, RoundingMode::HalfAway),
            Err(crate::error::ConfigurationError::AlphabetTooShort)
        );
    }

    #[test]
    fn rejects_duplicate_glyph() {
        assert_eq!(
            NumeralSystem::new(['0', '1', '1'], '.', '-', 10, RoundingMode::HalfAway),
            Err(crate::error::ConfigurationError::DuplicateGlyph('1'))
        );
    }

    #[test]
    fn rejects_separator_collision() {
        assert_eq!(
            NumeralSystem::new(['0', '1', '.'], '.', '-', 10, RoundingMode::HalfAway),
            Err(crate::error::ConfigurationError::SeparatorCollision)
        );
    }

    #[test]
    fn successor_wraps_with_carry() {
        let ns = decimal();
        assert_eq!(ns.successor('9'), Some(('0', true)));
        assert_eq!(ns.successor('4'), Some(('5', false)));
    }

    #[test]
    fn predecessor_wraps_with_borrow() {
        let ns = decimal();
        assert_eq!(ns.predecessor('0'), Some(('9', true)));
        assert_eq!(ns.predecessor('5'), Some(('4', false)));
    }

    #[test]
    fn split_defaults_missing_fraction_to_identity() {
        let ns = decimal();
        assert_eq!(ns.split("42"), ("42".to_string(), "0".to_string()));
        assert_eq!(ns.split("42.195"), ("42".to_string(), "195".to_string()));
    }

    #[test]
    fn raise_by_base_shifts_separator() {
        let ns = decimal();
        assert_eq!(ns.raise_by_base("1.5", 1), "15.0");
        assert_eq!(ns.raise_by_base("1.5", 2), "150.0");
        assert_eq!(ns.raise_by_base("1.5", 0), "1.5");
    }

    #[test]
    fn normalize_collapses_signed_zero() {
        let ns = decimal();
        assert_eq!(ns.normalize("-0.00").unwrap(), "0.0");
        assert_eq!(ns.normalize("-007.10").unwrap(), "-7.1");
        assert_eq!(ns.normalize("007.100").unwrap(), "7.1");
    }
}
