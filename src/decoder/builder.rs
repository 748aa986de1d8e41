//! A builder for a [`Decoder`].

use crate::decoder::Decoder;
use crate::scan::Orientation;

/// A builder for a [`Decoder`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The orientation of the reads being decoded.
    orientation: Option<Orientation>,

    /// Whether leftover likelihood values are an error.
    strict_likelihoods: bool,
}

impl Builder {
    /// Sets the orientation of the reads being decoded.
    ///
    /// Reads are assumed to be on the forward strand if this is not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::decoder::Builder;
    /// use modtags::scan::Orientation;
    ///
    /// let decoder = Builder::default().orientation(Orientation::Reverse).build();
    /// assert_eq!(decoder.orientation(), Orientation::Reverse);
    /// ```
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets whether likelihood values left over after decoding are an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::decoder::Builder;
    ///
    /// let decoder = Builder::default().strict_likelihoods(true).build();
    /// assert!(decoder.strict_likelihoods());
    /// ```
    pub fn strict_likelihoods(mut self, strict: bool) -> Self {
        self.strict_likelihoods = strict;
        self
    }

    /// Consumes `self` to build a [`Decoder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use modtags::decoder::Builder;
    /// use modtags::scan::Orientation;
    ///
    /// let decoder = Builder::default().build();
    ///
    /// assert_eq!(decoder.orientation(), Orientation::Forward);
    /// assert!(!decoder.strict_likelihoods());
    /// ```
    pub fn build(self) -> Decoder {
        Decoder {
            orientation: self.orientation.unwrap_or_default(),
            strict_likelihoods: self.strict_likelihoods,
        }
    }
}
