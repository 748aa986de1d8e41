//! A modification group within a positions tag.

pub mod header;

use std::num::ParseIntError;
use std::str::FromStr;

use nonempty::NonEmpty;

pub use header::Header;

/// The delimiter between the header and the skip counts of a group.
pub const DELIMITER: char = ',';

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a group.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An invalid skip count at the given (zero-based) index.
    InvalidSkipCount(usize, ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidSkipCount(index, err) => {
                write!(f, "invalid skip count at index {index}: {err}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to a [`Group`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// A header error.
    Header(header::Error),

    /// A parse error.
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Header(err) => write!(f, "header error: {err}"),
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Group
////////////////////////////////////////////////////////////////////////////////////////

/// A modification group: a header followed by zero or more skip counts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
    /// The header.
    header: Header,

    /// The skip counts.
    skip_counts: Option<NonEmpty<usize>>,
}

impl Group {
    /// Gets the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::positions::Group;
    ///
    /// let group = "C+m?,5,12,0".parse::<Group>()?;
    /// assert_eq!(group.header().to_string(), "C+m?");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Gets the skip counts.
    ///
    /// [`None`] is returned when the group consists of only a header. Such a
    /// group states that the modification is absent from the read and
    /// produces no calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::positions::Group;
    ///
    /// let group = "C+m?,5,12,0".parse::<Group>()?;
    /// assert_eq!(
    ///     group.skip_counts().map(|counts| counts.iter().copied().collect::<Vec<_>>()),
    ///     Some(vec![5, 12, 0])
    /// );
    ///
    /// let group = "A+a".parse::<Group>()?;
    /// assert!(group.skip_counts().is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn skip_counts(&self) -> Option<&NonEmpty<usize>> {
        self.skip_counts.as_ref()
    }

    /// Returns whether the group consists of only a header.
    pub fn is_header_only(&self) -> bool {
        self.skip_counts.is_none()
    }
}

impl FromStr for Group {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Trailing empty skip counts are ignored (e.g., `C+m,5,`).
        let s = s.trim_end_matches(DELIMITER);

        let (header, counts) = match s.split_once(DELIMITER) {
            Some((header, counts)) => (header, Some(counts)),
            None => (s, None),
        };

        let header = header.parse::<Header>().map_err(Error::Header)?;

        let skip_counts = counts
            .into_iter()
            .flat_map(|counts| counts.split(DELIMITER))
            .enumerate()
            .map(|(index, part)| {
                part.parse::<usize>()
                    .map_err(|err| Error::Parse(ParseError::InvalidSkipCount(index, err)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Group {
            header,
            skip_counts: NonEmpty::from_vec(skip_counts),
        })
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header)?;

        if let Some(skip_counts) = &self.skip_counts {
            for count in skip_counts.iter() {
                write!(f, "{DELIMITER}{count}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let group = "C+mh,0,0".parse::<Group>()?;

        assert_eq!(group.header().codes().len(), 2);
        assert_eq!(group.skip_counts(), NonEmpty::from_vec(vec![0, 0]).as_ref());
        assert!(!group.is_header_only());

        Ok(())
    }

    #[test]
    fn header_only() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let group = "A+a".parse::<Group>()?;
        assert!(group.is_header_only());

        let group = "A+a.,".parse::<Group>()?;
        assert!(group.is_header_only());

        Ok(())
    }

    #[test]
    fn trailing_delimiters_are_ignored() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let group = "C+m,5,12,,".parse::<Group>()?;
        assert_eq!(group.skip_counts(), NonEmpty::from_vec(vec![5, 12]).as_ref());
        Ok(())
    }

    #[test]
    fn single_skip_count() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let group = "C+m.,7,".parse::<Group>()?;

        assert_eq!(group.header().to_string(), "C+m.");
        assert_eq!(group.skip_counts(), NonEmpty::from_vec(vec![7]).as_ref());

        Ok(())
    }

    #[test]
    fn trailing_delimiter_on_invalid_header() {
        let err = "C*m,".parse::<Group>().unwrap_err();
        assert!(matches!(err, Error::Header(_)));
    }

    #[test]
    fn invalid_header() {
        let err = "X+m,1".parse::<Group>().unwrap_err();

        assert!(matches!(err, Error::Header(_)));
        assert_eq!(
            err.to_string(),
            "header error: parse error: invalid base letter: expected one of `A`, `C`, `G`, \
             `T`, or `N`, found `X`"
        );
    }

    #[test]
    fn invalid_skip_count() {
        let err = "C+m,1,x,3".parse::<Group>().unwrap_err();

        assert!(matches!(
            err,
            Error::Parse(ParseError::InvalidSkipCount(1, _))
        ));
        assert_eq!(
            err.to_string(),
            "parse error: invalid skip count at index 1: invalid digit found in string"
        );
    }

    #[test]
    fn negative_skip_count() {
        let err = "C+m,-1".parse::<Group>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "parse error: invalid skip count at index 0: invalid digit found in string"
        );
    }

    #[test]
    fn empty_skip_count() {
        let err = "C+m,1,,3".parse::<Group>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "parse error: invalid skip count at index 1: cannot parse integer from empty string"
        );
    }

    #[test]
    fn display() -> std::result::Result<(), Box<dyn std::error::Error>> {
        for value in ["C+m?,5,12,0", "A+a", "C+76792,3,0"] {
            assert_eq!(value.parse::<Group>()?.to_string(), value);
        }

        Ok(())
    }
}
