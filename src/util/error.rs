use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The requested number of buckets can't be represented as a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The allocator refused to provide memory for a bucket array of the given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocFailure {
    /// The length of the bucket array that couldn't be allocated.
    pub buckets: usize,
}

impl Display for AllocFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to allocate a table with {} buckets!", self.buckets)
    }
}

impl Error for AllocFailure {}
