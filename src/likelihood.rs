//! The likelihood (`ML`) stream.

/// The likelihood used for every call when no likelihood stream is provided.
pub const CERTAIN: u8 = u8::MAX;

/// The likelihood recorded for a base that was explicitly called as
/// unmodified.
pub const ABSENT: u8 = 0;

/// An error related to [`Likelihoods`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// More likelihoods were requested than the stream contains.
    Exhausted(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Exhausted(len) => write!(
                f,
                "likelihood stream exhausted: all {len} values were already consumed"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A forward-only cursor over a likelihood stream.
///
/// Values must be consumed in exactly the order the calls are visited. When no
/// stream is provided, every call is given the [`CERTAIN`] likelihood.
#[derive(Clone, Debug)]
pub struct Likelihoods<'a> {
    /// The stream, if one was provided.
    stream: Option<&'a [u8]>,

    /// The number of values consumed so far.
    consumed: usize,
}

impl<'a> Likelihoods<'a> {
    /// Creates a new [`Likelihoods`] cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::likelihood::Likelihoods;
    ///
    /// let likelihoods = Likelihoods::new(Some(&[1, 2, 3]));
    /// assert_eq!(likelihoods.remaining(), 3);
    /// ```
    pub fn new(stream: Option<&'a [u8]>) -> Self {
        Self {
            stream,
            consumed: 0,
        }
    }

    /// Consumes the next likelihood.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::likelihood::Likelihoods;
    ///
    /// let mut likelihoods = Likelihoods::new(Some(&[7]));
    /// assert_eq!(likelihoods.next_value()?, 7);
    /// assert!(likelihoods.next_value().is_err());
    ///
    /// let mut likelihoods = Likelihoods::new(None);
    /// assert_eq!(likelihoods.next_value()?, 255);
    /// assert_eq!(likelihoods.next_value()?, 255);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn next_value(&mut self) -> Result<u8> {
        match self.stream {
            None => Ok(CERTAIN),
            Some(stream) => {
                let value = stream
                    .get(self.consumed)
                    .copied()
                    .ok_or(Error::Exhausted(stream.len()))?;
                self.consumed += 1;
                Ok(value)
            }
        }
    }

    /// Returns whether a stream was provided.
    pub fn is_present(&self) -> bool {
        self.stream.is_some()
    }

    /// Gets the number of values consumed from the stream.
    ///
    /// This is always zero when no stream was provided.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Gets the number of values left in the stream.
    ///
    /// This is always zero when no stream was provided.
    pub fn remaining(&self) -> usize {
        self.stream
            .map(|stream| stream.len() - self.consumed)
            .unwrap_or_default()
    }
}
