//! Hash-based collections.

pub mod set;

#[doc(inline)]
pub use set::HashSet;
