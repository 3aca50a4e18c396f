use super::{CapacityOverflow, ConfigError, InvalidLoadFactor, ZeroCapacity};

/// The number of buckets a [`HashSet`](super::HashSet) starts with, unless configured otherwise.
pub const DEFAULT_MIN_CAP: usize = 7;

/// The highest ratio of elements to buckets a [`HashSet`](super::HashSet) allows before growing,
/// unless configured otherwise.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;

/// Construction-time settings for a [`HashSet`](super::HashSet). These are fixed for the lifetime
/// of the set.
///
/// - `min_cap`: the number of buckets the set starts with, and returns to when cleared. The table
///   never has fewer buckets than this.
/// - `max_load_factor`: the ratio of elements to buckets that triggers growth. Values above 1 are
///   allowed and just produce longer chains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetConfig {
    min_cap: usize,
    max_load_factor: f64,
}

impl SetConfig {
    /// Creates a new config, checking that `min_cap` is at least 1 and that `max_load_factor` is
    /// finite and positive.
    pub fn new(min_cap: usize, max_load_factor: f64) -> Result<SetConfig, ConfigError> {
        if min_cap == 0 {
            return Err(ZeroCapacity.into());
        }
        if !max_load_factor.is_finite() || max_load_factor <= 0.0 {
            return Err(InvalidLoadFactor { value: max_load_factor }.into());
        }

        Ok(SetConfig {
            min_cap,
            max_load_factor,
        })
    }

    /// Returns a copy of this config with the provided `min_cap`.
    pub fn with_min_cap(self, min_cap: usize) -> Result<SetConfig, ConfigError> {
        SetConfig::new(min_cap, self.max_load_factor)
    }

    /// Returns a copy of this config with the provided `max_load_factor`.
    pub fn with_max_load_factor(self, max_load_factor: f64) -> Result<SetConfig, ConfigError> {
        SetConfig::new(self.min_cap, max_load_factor)
    }

    pub const fn min_cap(&self) -> usize {
        self.min_cap
    }

    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns true if a table with `buckets` buckets can hold `elements` elements without
    /// exceeding the max load factor.
    pub(crate) fn fits(&self, buckets: usize, elements: usize) -> bool {
        buckets as f64 * self.max_load_factor >= elements as f64
    }

    /// Returns the fewest buckets that can hold `elements` elements, ignoring `min_cap`.
    pub(crate) fn buckets_for(&self, elements: usize) -> Result<usize, CapacityOverflow> {
        let buckets = (elements as f64 / self.max_load_factor).ceil();

        // usize::MAX isn't representable as f64, the comparison is against 2^64 (or 2^32).
        if buckets >= usize::MAX as f64 {
            return Err(CapacityOverflow);
        }
        Ok(buckets as usize)
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        SetConfig {
            min_cap: DEFAULT_MIN_CAP,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
