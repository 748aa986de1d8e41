//! Modification codes, labels, and decoded modification calls.

pub mod code;
pub mod label;
mod set;

pub use code::Code;
pub use set::BaseModificationSet;
pub(crate) use set::Calls;
