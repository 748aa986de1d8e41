//! Decoded modification calls for a single base, strand, and code.

use indexmap::IndexMap;
use omics::coordinate::Strand;

use crate::modification::label;
use crate::modification::Code;
use crate::Base;

/// The likelihood calls within a [`BaseModificationSet`], keyed by position.
pub(crate) type Calls = IndexMap<usize, u8>;

/// The decoded modification calls for one modification code within one
/// group of the positions tag.
///
/// Positions are expressed in the coordinate frame of the sequence that was
/// originally provided to the decoder (regardless of the read orientation).
/// Calls are kept in the order they were recorded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseModificationSet {
    /// The canonical base.
    base: Base,

    /// The strand named in the group header.
    strand: Strand,

    /// The modification code.
    code: Code,

    /// The likelihood for each position.
    calls: Calls,
}

impl BaseModificationSet {
    /// Creates a new [`BaseModificationSet`].
    pub(crate) fn new(base: Base, strand: Strand, code: Code, calls: Calls) -> Self {
        Self {
            base,
            strand,
            code,
            calls,
        }
    }

    /// Gets the canonical base.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::Base;
    ///
    /// let sets = modtags::decode("C+m,0;", None, b"ACGT", false)?;
    /// assert_eq!(sets[0].base(), Base::C);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn base(&self) -> Base {
        self.base
    }

    /// Gets the strand named in the group header.
    ///
    /// This is documentary only: it is unrelated to the orientation of the
    /// read that was used when decoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use omics::coordinate::Strand;
    ///
    /// let sets = modtags::decode("G-m,0;", None, b"ACGT", false)?;
    /// assert_eq!(sets[0].strand(), Strand::Negative);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Gets the modification code.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::modification::Code;
    ///
    /// let sets = modtags::decode("C+m,0;", None, b"ACGT", false)?;
    /// assert_eq!(sets[0].code(), &Code::Short('m'));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Gets the likelihood recorded at `position`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let sets = modtags::decode("C+m,1,0;", None, b"CCGTCG", false)?;
    ///
    /// assert_eq!(sets[0].get(0), None);
    /// assert_eq!(sets[0].get(1), Some(255));
    /// assert_eq!(sets[0].get(4), Some(255));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get(&self, position: usize) -> Option<u8> {
        self.calls.get(&position).copied()
    }

    /// Returns whether a call was recorded at `position`.
    pub fn contains(&self, position: usize) -> bool {
        self.calls.contains_key(&position)
    }

    /// Gets the number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns whether no calls were recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Returns an iterator over the `(position, likelihood)` calls in the order
    /// they were recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// let sets = modtags::decode("C+m,1,0;", Some(&[10, 20]), b"CCGTCG", false)?;
    /// let calls = sets[0].iter().collect::<Vec<_>>();
    ///
    /// assert_eq!(calls, vec![(1, 10), (4, 20)]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.calls.iter().map(|(position, likelihood)| (*position, *likelihood))
    }

    /// Returns an iterator over the recorded positions.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.calls.keys().copied()
    }

    /// Formats the call at `position` for display.
    ///
    /// Short codes use the code table (see [`label()`](crate::label())). ChEBI
    /// codes are labeled with their identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// let sets = modtags::decode("C+m,0;", None, b"ACGT", false)?;
    ///
    /// assert_eq!(
    ///     sets[0].label(1).as_deref(),
    ///     Some("Base modification: 5mC (100%)")
    /// );
    /// assert_eq!(sets[0].label(0), None);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn label(&self, position: usize) -> Option<String> {
        let likelihood = self.get(position)?;
        let name = self.code.name().unwrap_or(label::UNKNOWN);
        Some(label::format_name(name, likelihood))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> BaseModificationSet {
        let calls = Calls::from([(5, 0), (2, 128)]);
        BaseModificationSet::new(Base::C, Strand::Positive, Code::Short('h'), calls)
    }

    #[test]
    fn accessors() {
        let set = set();

        assert_eq!(set.base(), Base::C);
        assert_eq!(set.strand(), Strand::Positive);
        assert_eq!(set.code(), &Code::Short('h'));
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.contains(2));
        assert!(!set.contains(3));
    }

    #[test]
    fn keeps_first_write_order() {
        let set = set();

        assert_eq!(set.positions().collect::<Vec<_>>(), vec![5, 2]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![(5, 0), (2, 128)]);
    }

    #[test]
    fn labels() {
        let set = set();

        assert_eq!(
            set.label(2).as_deref(),
            Some("Base modification: 5hmC (50%)")
        );
        assert_eq!(
            set.label(5).as_deref(),
            Some("Base modification: 5hmC (0%)")
        );
        assert!(set.label(0).is_none());
    }

    #[test]
    fn chebi_labels_use_the_identifier() {
        let calls = Calls::from([(3, 255)]);
        let set = BaseModificationSet::new(
            Base::C,
            Strand::Positive,
            Code::ChEBI(String::from("76792")),
            calls,
        );

        assert_eq!(
            set.label(3).as_deref(),
            Some("Base modification: 76792 (100%)")
        );
        assert_eq!(
            label::label("76792", 255),
            "Base modification: Unknown (100%)"
        );
    }

    #[test]
    fn unknown_short_codes_are_labeled_unknown() {
        let calls = Calls::from([(0, 128)]);
        let set = BaseModificationSet::new(Base::A, Strand::Negative, Code::Short('z'), calls);

        assert_eq!(
            set.label(0).as_deref(),
            Some("Base modification: Unknown (50%)")
        );
    }
}
