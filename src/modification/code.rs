//! Modification codes.

use nonempty::NonEmpty;

use crate::modification::label;

/// Returns whether a code string is a ChEBI identifier.
///
/// A ChEBI identifier is a non-empty string made up entirely of the decimal
/// digits `0` through `9`.
///
/// # Examples
///
/// ```
/// use modtags::modification::code::is_chebi;
///
/// assert!(is_chebi(Some("12345")));
/// assert!(!is_chebi(Some("m")));
/// assert!(!is_chebi(Some("")));
/// assert!(!is_chebi(None));
/// ```
pub fn is_chebi(value: Option<&str>) -> bool {
    value.is_some_and(is_chebi_str)
}

/// Returns whether a code string is a ChEBI identifier.
///
/// This is the same as [`is_chebi()`] for a value that is known to be present.
pub fn is_chebi_str(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// A modification code.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Code {
    /// A single character code (e.g., `m` for 5-methylcytosine).
    Short(char),

    /// A ChEBI numeric identifier (e.g., `76792`).
    ChEBI(String),
}

impl Code {
    /// Resolves the code portion of a group header into one or more codes.
    ///
    /// A single character is one code. A longer string is one ChEBI code if
    /// it is made up entirely of digits. Otherwise, every character is its own
    /// code, and all of the codes share the same positions. [`None`] is
    /// returned if `value` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::modification::Code;
    ///
    /// let codes = Code::resolve("m").unwrap();
    /// assert_eq!(codes.len(), 1);
    /// assert_eq!(codes.head, Code::Short('m'));
    ///
    /// let codes = Code::resolve("76792").unwrap();
    /// assert_eq!(codes.len(), 1);
    /// assert_eq!(codes.head, Code::ChEBI(String::from("76792")));
    ///
    /// let codes = Code::resolve("mh").unwrap();
    /// assert_eq!(
    ///     codes.into_iter().collect::<Vec<_>>(),
    ///     vec![Code::Short('m'), Code::Short('h')]
    /// );
    ///
    /// assert!(Code::resolve("").is_none());
    /// ```
    pub fn resolve(value: &str) -> Option<NonEmpty<Code>> {
        if value.chars().count() > 1 && is_chebi_str(value) {
            return Some(NonEmpty::new(Code::ChEBI(value.to_string())));
        }

        NonEmpty::from_vec(value.chars().map(Code::Short).collect())
    }

    /// Gets the display name of the code.
    ///
    /// Short codes are looked up in the fixed code table and [`None`] is
    /// returned for codes that are not in the table. ChEBI codes are named by
    /// their identifier verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::modification::Code;
    ///
    /// assert_eq!(Code::Short('m').name(), Some("5mC"));
    /// assert_eq!(Code::Short('z').name(), None);
    /// assert_eq!(Code::ChEBI(String::from("76792")).name(), Some("76792"));
    /// ```
    pub fn name(&self) -> Option<&str> {
        match self {
            Code::Short(c) => {
                let mut buffer = [0u8; 4];
                label::lookup(c.encode_utf8(&mut buffer))
            }
            Code::ChEBI(id) => Some(id.as_str()),
        }
    }

    /// Returns whether this is a ChEBI code.
    pub fn is_chebi(&self) -> bool {
        matches!(self, Code::ChEBI(_))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Code::Short(c) => write!(f, "{c}"),
            Code::ChEBI(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebi_detection() {
        assert!(is_chebi(Some("12345")));
        assert!(is_chebi(Some("0")));
        assert!(!is_chebi(Some("m")));
        assert!(!is_chebi(Some("")));
        assert!(!is_chebi(Some("123a")));
        assert!(!is_chebi(Some("-12")));
        assert!(!is_chebi(None));
    }

    #[test]
    fn single_digit_is_a_short_code() {
        let codes = Code::resolve("7").unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.head, Code::Short('7'));
    }

    #[test]
    fn mixed_digits_and_letters_split_per_character() {
        let codes = Code::resolve("m1").unwrap();
        assert_eq!(
            codes.into_iter().collect::<Vec<_>>(),
            vec![Code::Short('m'), Code::Short('1')]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Code::Short('h').to_string(), "h");
        assert_eq!(Code::ChEBI(String::from("17802")).to_string(), "17802");
        assert!(Code::ChEBI(String::from("17802")).is_chebi());
        assert!(!Code::Short('h').is_chebi());
    }
}
