use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{AllocFailure, CapacityOverflow};

/// The reason a [`HashSet`](super::HashSet) couldn't grow its table. When this is returned, the
/// set is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ReserveError {
    CapacityOverflow(CapacityOverflow),
    AllocFailure(AllocFailure),
}

/// The provided [`SetConfig`](super::SetConfig) values can't describe a working table.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error, From, IsVariant)]
pub enum ConfigError {
    ZeroCapacity(ZeroCapacity),
    InvalidLoadFactor(InvalidLoadFactor),
}

/// A table needs at least one bucket to hash into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCapacity;

impl Display for ZeroCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "A HashSet requires a minimum capacity of at least 1!")
    }
}

impl Error for ZeroCapacity {}

/// Load factors have to be finite and positive for growth to terminate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLoadFactor {
    pub value: f64,
}

impl Display for InvalidLoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Max load factor must be finite and greater than 0, got {}!", self.value)
    }
}

impl Error for InvalidLoadFactor {}
