#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling an [`crate::registry::EnumRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Reject component enumerations whose values are not positive powers of two.
    ///
    /// Disabled by default: flag values are then only checked bit by bit when a bitmask is
    /// resolved, and a composite flag such as `3` is accepted as long as bits `1` and `2`
    /// are themselves declared.
    pub strict_flag_values: bool,

    /// Number of canonical instances to reserve room for up front.
    pub instance_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_flag_values: false,
            instance_capacity: 64,
        }
    }
}
