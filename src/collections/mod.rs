//! Collection types.
//!
//! # Purpose
//! At the moment this holds a single hash-based collection, the chained
//! [`HashSet`](hash::HashSet). It lives under `hash` so that other hashing schemes have somewhere
//! to go.

pub mod hash;
