//! Canonical bases named in a modification group header.

/// The wildcard base that matches any base in a sequence.
pub const WILDCARD: char = 'N';

/// An error related to the parsing of a base.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError(char);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected one of `A`, `C`, `G`, `T`, or `N`, found `{}`",
            self.0
        )
    }
}

impl std::error::Error for ParseError {}

/// The canonical base that a modification group applies to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Base {
    /// Adenine (`A`).
    A,

    /// Cytosine (`C`).
    C,

    /// Guanine (`G`).
    G,

    /// Thymine (`T`).
    T,

    /// Any base (`N`).
    N,
}

impl Base {
    /// Gets the base as an uppercase ASCII byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::Base;
    ///
    /// assert_eq!(Base::C.as_byte(), b'C');
    /// assert_eq!(Base::N.as_byte(), b'N');
    /// ```
    pub fn as_byte(&self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
            Base::N => b'N',
        }
    }

    /// Returns whether a base from a read sequence is a candidate for this
    /// base.
    ///
    /// [`Base::N`] matches everything. Otherwise, the comparison is exact and
    /// case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::Base;
    ///
    /// assert!(Base::C.matches(b'C'));
    /// assert!(!Base::C.matches(b'c'));
    /// assert!(!Base::C.matches(b'G'));
    /// assert!(Base::N.matches(b'G'));
    /// ```
    pub fn matches(&self, base: u8) -> bool {
        match self {
            Base::N => true,
            _ => self.as_byte() == base,
        }
    }
}

impl TryFrom<char> for Base {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            WILDCARD => Ok(Base::N),
            c => Err(ParseError(c)),
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.as_byte()))
    }
}

/// Complements a single base, preserving case.
///
/// Anything other than `A`, `C`, `G`, or `T` is returned unchanged.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Produces the reverse complement of a sequence.
///
/// # Examples
///
/// ```
/// use modtags::base::reverse_complement;
///
/// assert_eq!(reverse_complement(b"CCGTAN"), b"NTACGG".to_vec());
/// assert_eq!(reverse_complement(b"acgT"), b"Acgt".to_vec());
/// ```
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|b| complement(*b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_from_char() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Base::try_from('A')?, Base::A);
        assert_eq!(Base::try_from('C')?, Base::C);
        assert_eq!(Base::try_from('G')?, Base::G);
        assert_eq!(Base::try_from('T')?, Base::T);
        assert_eq!(Base::try_from('N')?, Base::N);

        let err = Base::try_from('U').unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected one of `A`, `C`, `G`, `T`, or `N`, found `U`"
        );

        let err = Base::try_from('c').unwrap_err();
        assert_eq!(err, ParseError('c'));

        Ok(())
    }

    #[test]
    fn base_display() {
        assert_eq!(Base::A.to_string(), "A");
        assert_eq!(Base::N.to_string(), "N");
    }

    #[test]
    fn reverse_complement_leaves_unknown_bases() {
        assert_eq!(reverse_complement(b""), Vec::<u8>::new());
        assert_eq!(reverse_complement(b"AXC"), b"GXT".to_vec());
    }
}
