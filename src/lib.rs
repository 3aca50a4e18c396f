//! A hash set built on separate chaining.
//!
//! # Purpose
//! This crate provides a single container, [`HashSet`](collections::hash::HashSet), where every
//! stored element is its own key. Collisions are resolved by chaining: the table is an array of
//! buckets and every bucket owns a singly linked chain of the elements that hashed to it.
//!
//! # Method
//! Each node in a chain is owned by the link before it, starting at the bucket head. Nothing is
//! shared between two sets, so cloning a set produces an entirely separate ownership tree. Growth
//! doubles the table until the configured maximum load factor can be honoured, then moves every
//! node over to the new table without reallocating it.
//!
//! Iteration uses a cursor, [`Iter`](collections::hash::set::Iter), which borrows the set it
//! walks. The borrow is what keeps a cursor from outliving a mutation: inserting, erasing or
//! clearing while a cursor is alive doesn't compile.
//!
//! # Error Handling
//! As with most collections, the common operations panic on allocation failure or capacity
//! overflow rather than forcing every call site to handle an error. The fallible variants
//! ([`try_reserve`](collections::hash::HashSet::try_reserve),
//! [`try_rehash`](collections::hash::HashSet::try_rehash)) return strongly typed errors instead.
//! Either way, a failed growth leaves the set exactly as it was.
//!
//! # Logging
//! Table growth and clearing emit [`tracing`] events at the `trace` level. No subscriber is
//! installed by this crate.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
