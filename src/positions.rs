//! The positions (`MM`) tag.
//!
//! A positions tag is a series of groups delimited by `;`, where each group is
//! a header (e.g., `C+m?`) followed by comma-delimited skip counts (e.g.,
//! `C+m?,5,12,0`). The tag typically ends with a trailing `;`.

pub mod group;

use std::str::FromStr;

pub use group::Group;

/// The delimiter between groups.
pub const DELIMITER: char = ';';

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with splitting a positions tag into groups.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A non-empty tag did not contain any groups.
    NoGroups,

    /// An empty group was found at the given (zero-based) index.
    EmptyGroup(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::NoGroups => write!(f, "no modification groups found"),
            ParseError::EmptyGroup(index) => {
                write!(f, "empty modification group at index {index}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to a [`Positions`] tag.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An invalid group.
    InvalidGroup(group::Error, String),

    /// A parse error.
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGroup(err, group) => {
                write!(f, "invalid group: {err}\n\ngroup: {group}")
            }
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Positions
////////////////////////////////////////////////////////////////////////////////////////

/// A parsed positions tag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Positions(Vec<Group>);

impl Positions {
    /// Gets the groups in the order they were declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::positions::Positions;
    ///
    /// let positions = "C+m,5,12,0;C+h,5,12,0;".parse::<Positions>()?;
    /// assert_eq!(positions.groups().len(), 2);
    ///
    /// let positions = "".parse::<Positions>()?;
    /// assert!(positions.groups().is_empty());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn groups(&self) -> &[Group] {
        &self.0
    }

    /// Returns an iterator over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.0.iter()
    }

    /// Gets the number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Positions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let mut segments = s.split(DELIMITER).collect::<Vec<_>>();

        while segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        if segments.is_empty() {
            return Err(Error::Parse(ParseError::NoGroups));
        }

        segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| {
                if segment.is_empty() {
                    return Err(Error::Parse(ParseError::EmptyGroup(index)));
                }

                segment
                    .parse::<Group>()
                    .map_err(|err| Error::InvalidGroup(err, segment.into()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl IntoIterator for Positions {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Positions {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Positions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for group in &self.0 {
            write!(f, "{group}{DELIMITER}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_groups() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let positions = "C+m,5,12,0;C+h,5,12,0;A+a;".parse::<Positions>()?;

        assert_eq!(positions.len(), 3);
        assert_eq!(positions.groups()[0].to_string(), "C+m,5,12,0");
        assert_eq!(positions.groups()[1].to_string(), "C+h,5,12,0");
        assert!(positions.groups()[2].is_header_only());

        Ok(())
    }

    #[test]
    fn trailing_delimiter_is_optional() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let with = "C+m,1;A-a,0;".parse::<Positions>()?;
        let without = "C+m,1;A-a,0".parse::<Positions>()?;

        assert_eq!(with, without);

        Ok(())
    }

    #[test]
    fn empty_input_has_no_groups() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let positions = "".parse::<Positions>()?;
        assert!(positions.is_empty());
        Ok(())
    }

    #[test]
    fn only_delimiters() {
        let err = ";".parse::<Positions>().unwrap_err();

        assert_eq!(err, Error::Parse(ParseError::NoGroups));
        assert_eq!(err.to_string(), "parse error: no modification groups found");

        let err = ";;".parse::<Positions>().unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::NoGroups));
    }

    #[test]
    fn empty_group_in_the_middle() {
        let err = "C+m,1;;A+a,0;".parse::<Positions>().unwrap_err();

        assert_eq!(err, Error::Parse(ParseError::EmptyGroup(1)));
        assert_eq!(
            err.to_string(),
            "parse error: empty modification group at index 1"
        );
    }

    #[test]
    fn invalid_group() {
        let err = "C+m,1;A/a,0;".parse::<Positions>().unwrap_err();

        assert!(matches!(err, Error::InvalidGroup(_, _)));
        assert_eq!(
            err.to_string(),
            "invalid group: header error: parse error: invalid strand marker: expected `+` or \
             `-`, found `/`\n\ngroup: A/a,0"
        );
    }

    #[test]
    fn display() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let positions = "C+m?,5,12,0;C+76792,3,0;A+a.".parse::<Positions>()?;
        assert_eq!(positions.to_string(), "C+m?,5,12,0;C+76792,3,0;A+a.;");
        Ok(())
    }
}
