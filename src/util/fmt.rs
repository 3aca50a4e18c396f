use std::fmt::{self, Debug, Formatter};

/// Writes the contained string as-is when debug formatted, so pre-rendered text can be handed to
/// the `debug_*` builders without picking up quotes.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
