//! `modtags` is a crate for decoding base modification tags on sequencing
//! reads.
//!
//! Base modifications are stored on a read as a pair of tags: the positions
//! tag (`MM`), which lists, for each canonical base and modification, which
//! occurrences of that base in the read are modified, and the likelihood tag
//! (`ML`), which holds one byte of confidence per listed occurrence.
//!
//! ## Decoding
//!
//! Most users will want to call [`decode()`] with the positions tag, the
//! likelihood bytes (if any), the read sequence, and whether the read is on
//! the reverse strand. Each group in the positions tag yields one
//! [`BaseModificationSet`] per modification code, in declaration order.
//! Positions are always relative to the sequence as it was provided, even for
//! reverse reads.
//!
//! ```
//! use modtags::modification::Code;
//!
//! let sequence = b"CCGTCG";
//! let sets = modtags::decode("C+m,1,0;", Some(&[200, 10]), sequence, false)?;
//!
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].code(), &Code::Short('m'));
//! assert_eq!(sets[0].get(1), Some(200));
//! assert_eq!(sets[0].get(4), Some(10));
//!
//! for (position, likelihood) in sets[0].iter() {
//!     println!(
//!         "{}: {}",
//!         position,
//!         modtags::label(&sets[0].code().to_string(), likelihood)
//!     );
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! If you need to decode many reads with the same settings (or want leftover
//! likelihood bytes to be treated as an error), build a
//! [`decoder::Decoder`] with a [`decoder::Builder`].
//!
//! ## Parsing
//!
//! The positions tag can also be parsed on its own via
//! [`positions::Positions`], which exposes each
//! [group](positions::Group) and its [header](positions::group::Header).
//!
//! ```
//! use modtags::positions::Positions;
//! use modtags::positions::group::header::SkipMode;
//!
//! let positions = "C+mh.,5,12,0;A+a;".parse::<Positions>()?;
//!
//! let group = &positions.groups()[0];
//! assert_eq!(group.header().codes().len(), 2);
//! assert_eq!(group.header().skip_mode(), SkipMode::LowProbability);
//! assert!(positions.groups()[1].is_header_only());
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod base;
pub mod decoder;
pub mod likelihood;
pub mod modification;
pub mod positions;
pub mod scan;

pub use base::Base;
pub use decoder::decode;
pub use modification::label::label;
pub use modification::label::value_string;
pub use modification::BaseModificationSet;
