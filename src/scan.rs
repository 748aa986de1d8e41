//! Scanning a read sequence for the occurrences named by a modification group.
//!
//! Each skip count in a group is the number of candidate bases to pass over
//! before the next modified base. The scanner walks the working sequence (the
//! read sequence, or its reverse complement for reverse reads) from left to
//! right and reports positions in the coordinate frame of the original
//! sequence.

use std::borrow::Cow;

use crate::base::reverse_complement;
use crate::likelihood;
use crate::likelihood::Likelihoods;
use crate::modification::BaseModificationSet;
use crate::modification::Calls;
use crate::positions::Group;

/// A [`Result`](std::result::Result) with a [`likelihood::Error`].
type Result<T> = std::result::Result<T, likelihood::Error>;

/// The orientation of a read relative to the sequence provided to the
/// decoder.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// The read is on the forward strand.
    #[default]
    Forward,

    /// The read is on the reverse strand.
    Reverse,
}

impl Orientation {
    /// Gets the orientation from an "is on the reverse strand" flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::scan::Orientation;
    ///
    /// assert_eq!(Orientation::from_is_reverse(false), Orientation::Forward);
    /// assert_eq!(Orientation::from_is_reverse(true), Orientation::Reverse);
    /// ```
    pub fn from_is_reverse(is_reverse: bool) -> Self {
        match is_reverse {
            true => Orientation::Reverse,
            false => Orientation::Forward,
        }
    }
}

/// Scans groups against a single read, consuming likelihoods as it goes.
///
/// The scanner owns the likelihood cursor for the whole read so that groups
/// consume the stream in declaration order.
#[derive(Debug)]
pub struct Scanner<'a> {
    /// The sequence that is walked.
    working: Cow<'a, [u8]>,

    /// The orientation of the read.
    orientation: Orientation,

    /// The likelihood cursor.
    likelihoods: Likelihoods<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a new [`Scanner`].
    pub fn new(sequence: &'a [u8], orientation: Orientation, likelihoods: Likelihoods<'a>) -> Self {
        let working = match orientation {
            Orientation::Forward => Cow::Borrowed(sequence),
            Orientation::Reverse => Cow::Owned(reverse_complement(sequence)),
        };

        Self {
            working,
            orientation,
            likelihoods,
        }
    }

    /// Maps an index within the working sequence to a position within the
    /// original sequence.
    fn position(&self, index: usize) -> usize {
        match self.orientation {
            Orientation::Forward => index,
            Orientation::Reverse => self.working.len() - 1 - index,
        }
    }

    /// Scans a single group, producing one [`BaseModificationSet`] per
    /// modification code in the group.
    ///
    /// Header-only groups produce nothing. An error is returned if the
    /// likelihood stream runs out.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::likelihood::Likelihoods;
    /// use modtags::positions::Group;
    /// use modtags::scan::Orientation;
    /// use modtags::scan::Scanner;
    ///
    /// let group = "C+m,1,0".parse::<Group>()?;
    /// let mut scanner = Scanner::new(b"CCGTCG", Orientation::Forward, Likelihoods::new(None));
    ///
    /// let sets = scanner.scan(&group)?;
    /// assert_eq!(sets.len(), 1);
    /// assert_eq!(sets[0].iter().collect::<Vec<_>>(), vec![(1, 255), (4, 255)]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn scan(&mut self, group: &Group) -> Result<Vec<BaseModificationSet>> {
        let skip_counts = match group.skip_counts() {
            Some(skip_counts) => skip_counts,
            None => return Ok(Vec::new()),
        };

        let header = group.header();
        let base = header.base();
        let records_skipped = header.skip_mode().records_skipped();

        let mut calls = header
            .codes()
            .iter()
            .map(|_| Calls::new())
            .collect::<Vec<_>>();

        let mut skip = skip_counts.head;
        let mut skip_counts = skip_counts.tail.iter().copied();
        let mut matched = 0usize;

        for index in 0..self.working.len() {
            if !base.matches(self.working[index]) {
                continue;
            }

            let position = self.position(index);

            if matched == skip {
                for code_calls in calls.iter_mut() {
                    code_calls.insert(position, self.likelihoods.next_value()?);
                }

                match skip_counts.next() {
                    Some(next) => {
                        skip = next;
                        matched = 0;
                    }
                    None => break,
                }
            } else {
                if records_skipped {
                    for code_calls in calls.iter_mut() {
                        code_calls.insert(position, likelihood::ABSENT);
                    }
                }

                matched += 1;
            }
        }

        Ok(header
            .codes()
            .iter()
            .cloned()
            .zip(calls)
            .map(|(code, calls)| {
                BaseModificationSet::new(base, header.strand(), code, calls)
            })
            .collect())
    }

    /// Gets the likelihood cursor by reference.
    pub fn likelihoods(&self) -> &Likelihoods<'a> {
        &self.likelihoods
    }

    /// Consumes `self` and returns the likelihood cursor.
    pub fn into_likelihoods(self) -> Likelihoods<'a> {
        self.likelihoods
    }
}
