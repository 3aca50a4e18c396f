//! A module containing [`HashSet`] and associated types.
//!
//! The set resolves collisions by separate chaining: every bucket owns a singly linked chain of
//! the elements that hashed to it. The other types here configure the set ([`SetConfig`]), walk it
//! ([`Iter`], [`IntoIter`]) or report why it couldn't grow ([`ReserveError`]).
//!
//! There is no mutable iterator over the elements of a set because mutating the elements in place
//! could change their hash and strand them in the wrong bucket.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod chain;
mod config;
mod error;
mod hash_set;
mod iter;

pub use config::*;
pub use error::*;
pub use hash_set::*;
pub use iter::*;
