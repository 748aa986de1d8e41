//! A modification group header.

use std::str::FromStr;

use nonempty::NonEmpty;
use omics::coordinate::Strand;

use crate::base;
use crate::modification::Code;
use crate::Base;

/// The suffix marking skipped bases as having a low probability of
/// modification.
pub const LOW_PROBABILITY_SUFFIX: char = '.';

/// The suffix marking skipped bases as having an unknown modification status.
pub const UNKNOWN_SUFFIX: char = '?';

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a header.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The header was empty.
    MissingBase,

    /// An invalid base letter.
    InvalidBase(base::ParseError),

    /// The header ended before the strand marker.
    MissingStrand,

    /// An invalid strand marker.
    InvalidStrand(char),

    /// The header has no modification codes.
    MissingCode,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingBase => write!(f, "missing base letter"),
            ParseError::InvalidBase(err) => write!(f, "invalid base letter: {err}"),
            ParseError::MissingStrand => write!(f, "missing strand marker"),
            ParseError::InvalidStrand(c) => write!(
                f,
                "invalid strand marker: expected `+` or `-`, found `{c}`"
            ),
            ParseError::MissingCode => write!(f, "missing modification code"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to a [`Header`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A parse error.
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Skip mode
////////////////////////////////////////////////////////////////////////////////////////

/// How bases that are passed over by a skip count should be interpreted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SkipMode {
    /// No suffix was given.
    #[default]
    Implicit,

    /// The `.` suffix: skipped bases are called as unmodified.
    LowProbability,

    /// The `?` suffix: nothing is known about skipped bases.
    Unknown,
}

impl SkipMode {
    /// Returns whether skipped bases are recorded as explicitly unmodified
    /// (with a likelihood of zero).
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::positions::group::header::SkipMode;
    ///
    /// assert!(SkipMode::LowProbability.records_skipped());
    /// assert!(!SkipMode::Unknown.records_skipped());
    /// assert!(!SkipMode::Implicit.records_skipped());
    /// ```
    pub fn records_skipped(&self) -> bool {
        matches!(self, SkipMode::LowProbability)
    }

    /// Gets the suffix character for the skip mode, if any.
    pub fn suffix(&self) -> Option<char> {
        match self {
            SkipMode::Implicit => None,
            SkipMode::LowProbability => Some(LOW_PROBABILITY_SUFFIX),
            SkipMode::Unknown => Some(UNKNOWN_SUFFIX),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Header
////////////////////////////////////////////////////////////////////////////////////////

/// The header of a modification group (e.g., `C+m?` or `C+mh`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// The canonical base.
    base: Base,

    /// The strand the modification calls pertain to.
    strand: Strand,

    /// The skip mode.
    skip_mode: SkipMode,

    /// The modification codes.
    codes: NonEmpty<Code>,
}

impl Header {
    /// Gets the canonical base.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::Base;
    /// use modtags::positions::group::Header;
    ///
    /// let header = "A-a.".parse::<Header>()?;
    /// assert_eq!(header.base(), Base::A);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn base(&self) -> Base {
        self.base
    }

    /// Gets the strand.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::positions::group::Header;
    /// use omics::coordinate::Strand;
    ///
    /// let header = "A-a.".parse::<Header>()?;
    /// assert_eq!(header.strand(), Strand::Negative);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Gets the skip mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::positions::group::Header;
    /// use modtags::positions::group::header::SkipMode;
    ///
    /// let header = "A-a.".parse::<Header>()?;
    /// assert_eq!(header.skip_mode(), SkipMode::LowProbability);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn skip_mode(&self) -> SkipMode {
        self.skip_mode
    }

    /// Gets the modification codes.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::modification::Code;
    /// use modtags::positions::group::Header;
    ///
    /// let header = "C+mh".parse::<Header>()?;
    /// assert_eq!(
    ///     header.codes().iter().collect::<Vec<_>>(),
    ///     vec![&Code::Short('m'), &Code::Short('h')]
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn codes(&self) -> &NonEmpty<Code> {
        &self.codes
    }
}

impl FromStr for Header {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();

        let base = chars
            .next()
            .ok_or(Error::Parse(ParseError::MissingBase))
            .and_then(|c| {
                Base::try_from(c).map_err(|err| Error::Parse(ParseError::InvalidBase(err)))
            })?;

        let strand = match chars.next() {
            Some('+') => Strand::Positive,
            Some('-') => Strand::Negative,
            Some(c) => return Err(Error::Parse(ParseError::InvalidStrand(c))),
            None => return Err(Error::Parse(ParseError::MissingStrand)),
        };

        let rest = chars.as_str();
        let (codes, skip_mode) = if let Some(codes) = rest.strip_suffix(LOW_PROBABILITY_SUFFIX) {
            (codes, SkipMode::LowProbability)
        } else if let Some(codes) = rest.strip_suffix(UNKNOWN_SUFFIX) {
            (codes, SkipMode::Unknown)
        } else {
            (rest, SkipMode::Implicit)
        };

        let codes = Code::resolve(codes).ok_or(Error::Parse(ParseError::MissingCode))?;

        Ok(Header {
            base,
            strand,
            skip_mode,
            codes,
        })
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strand = match self.strand {
            Strand::Positive => '+',
            Strand::Negative => '-',
        };

        write!(f, "{}{}", self.base, strand)?;

        for code in self.codes.iter() {
            write!(f, "{code}")?;
        }

        if let Some(suffix) = self.skip_mode.suffix() {
            write!(f, "{suffix}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let header = "C+m?".parse::<Header>()?;

        assert_eq!(header.base(), Base::C);
        assert_eq!(header.strand(), Strand::Positive);
        assert_eq!(header.skip_mode(), SkipMode::Unknown);
        assert_eq!(header.codes(), &NonEmpty::new(Code::Short('m')));

        let header = "N-76792".parse::<Header>()?;

        assert_eq!(header.base(), Base::N);
        assert_eq!(header.strand(), Strand::Negative);
        assert_eq!(header.skip_mode(), SkipMode::Implicit);
        assert_eq!(
            header.codes(),
            &NonEmpty::new(Code::ChEBI(String::from("76792")))
        );

        Ok(())
    }

    #[test]
    fn suffix_is_excluded_from_codes() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let header = "C+mh.".parse::<Header>()?;

        assert_eq!(header.skip_mode(), SkipMode::LowProbability);
        assert_eq!(
            header.codes().iter().cloned().collect::<Vec<_>>(),
            vec![Code::Short('m'), Code::Short('h')]
        );

        let header = "C+76792?".parse::<Header>()?;
        assert_eq!(
            header.codes(),
            &NonEmpty::new(Code::ChEBI(String::from("76792")))
        );

        Ok(())
    }

    #[test]
    fn missing_base() {
        let err = "".parse::<Header>().unwrap_err();

        assert_eq!(err, Error::Parse(ParseError::MissingBase));
        assert_eq!(err.to_string(), "parse error: missing base letter");
    }

    #[test]
    fn invalid_base() {
        let err = "U+m".parse::<Header>().unwrap_err();

        assert!(matches!(err, Error::Parse(ParseError::InvalidBase(_))));
        assert_eq!(
            err.to_string(),
            "parse error: invalid base letter: expected one of `A`, `C`, `G`, `T`, or `N`, \
             found `U`"
        );
    }

    #[test]
    fn missing_strand() {
        let err = "C".parse::<Header>().unwrap_err();

        assert_eq!(err, Error::Parse(ParseError::MissingStrand));
        assert_eq!(err.to_string(), "parse error: missing strand marker");
    }

    #[test]
    fn invalid_strand() {
        let err = "C*m".parse::<Header>().unwrap_err();

        assert_eq!(err, Error::Parse(ParseError::InvalidStrand('*')));
        assert_eq!(
            err.to_string(),
            "parse error: invalid strand marker: expected `+` or `-`, found `*`"
        );
    }

    #[test]
    fn missing_code() {
        let err = "C+".parse::<Header>().unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::MissingCode));

        let err = "C+.".parse::<Header>().unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::MissingCode));
        assert_eq!(err.to_string(), "parse error: missing modification code");
    }

    #[test]
    fn display() -> std::result::Result<(), Box<dyn std::error::Error>> {
        for value in ["C+m", "C+mh.", "A-a?", "N+76792"] {
            assert_eq!(value.parse::<Header>()?.to_string(), value);
        }

        Ok(())
    }
}
