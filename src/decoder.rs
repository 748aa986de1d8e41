//! Decoding positions and likelihood tags into modification calls.

pub mod builder;

pub use builder::Builder;

use crate::likelihood;
use crate::likelihood::Likelihoods;
use crate::modification::BaseModificationSet;
use crate::positions;
use crate::positions::Positions;
use crate::scan::Orientation;
use crate::scan::Scanner;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// A malformed positions tag or likelihood stream.
///
/// Any error aborts the whole decode: no partial results are returned.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An error in the positions tag.
    Positions(positions::Error),

    /// An error in the likelihood stream.
    Likelihood(likelihood::Error),

    /// Likelihood values were left over after every group was decoded.
    ///
    /// This is only reported when the [`Decoder`] was built with
    /// [`Builder::strict_likelihoods()`].
    UnconsumedLikelihoods(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Positions(err) => write!(f, "positions error: {err}"),
            Error::Likelihood(err) => write!(f, "likelihood error: {err}"),
            Error::UnconsumedLikelihoods(n) => {
                write!(f, "{n} likelihood value(s) were left unconsumed")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Decoder
////////////////////////////////////////////////////////////////////////////////////////

/// A reusable decoder for positions and likelihood tags.
///
/// Generally, you will want to use a [`Builder`] to construct one of these.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    /// The orientation of the reads being decoded.
    orientation: Orientation,

    /// Whether leftover likelihood values are an error.
    strict_likelihoods: bool,
}

impl Decoder {
    /// Gets the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Gets whether leftover likelihood values are an error.
    pub fn strict_likelihoods(&self) -> bool {
        self.strict_likelihoods
    }

    /// Decodes a positions tag and an optional likelihood stream against a
    /// read sequence.
    ///
    /// The returned sets are in the order that groups (and the codes within
    /// each group) were declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::decoder::Builder;
    /// use modtags::scan::Orientation;
    ///
    /// let decoder = Builder::default()
    ///     .orientation(Orientation::Reverse)
    ///     .build();
    ///
    /// let sets = decoder.decode("C+m,0;", Some(&[200]), b"AAGT")?;
    /// assert_eq!(sets[0].iter().collect::<Vec<_>>(), vec![(2, 200)]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn decode(
        &self,
        positions: &str,
        likelihoods: Option<&[u8]>,
        sequence: &[u8],
    ) -> Result<Vec<BaseModificationSet>> {
        let positions = positions.parse::<Positions>().map_err(Error::Positions)?;
        self.decode_positions(&positions, likelihoods, sequence)
    }

    /// Decodes an already parsed positions tag.
    pub fn decode_positions(
        &self,
        positions: &Positions,
        likelihoods: Option<&[u8]>,
        sequence: &[u8],
    ) -> Result<Vec<BaseModificationSet>> {
        let mut scanner = Scanner::new(sequence, self.orientation, Likelihoods::new(likelihoods));
        let mut sets = Vec::new();

        for group in positions {
            sets.extend(scanner.scan(group).map_err(Error::Likelihood)?);
        }

        let remaining = scanner.likelihoods().remaining();
        if self.strict_likelihoods && remaining > 0 {
            return Err(Error::UnconsumedLikelihoods(remaining));
        }

        Ok(sets)
    }
}

/// Decodes a positions tag and an optional likelihood stream against a read
/// sequence using the default [`Decoder`] settings.
///
/// `is_reverse` states whether the read is on the reverse strand, in which
/// case the positions tag describes the reverse complement of `sequence`.
/// Positions in the result are always relative to `sequence` as provided.
///
/// # Examples
///
/// ```
/// let sets = modtags::decode("C+m,1,0;", None, b"CCGTCG", false)?;
///
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].iter().collect::<Vec<_>>(), vec![(1, 255), (4, 255)]);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode(
    positions: &str,
    likelihoods: Option<&[u8]>,
    sequence: &[u8],
    is_reverse: bool,
) -> Result<Vec<BaseModificationSet>> {
    Builder::default()
        .orientation(Orientation::from_is_reverse(is_reverse))
        .build()
        .decode(positions, likelihoods, sequence)
}
