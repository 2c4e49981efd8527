//! Cart configuration.

/// Default namespaced key under which the serialized cart blob lives.
pub const DEFAULT_STORAGE_KEY: &str = "cart:items";

/// What `decrement` does when a quantity would drop below one.
///
/// The observed behavior of the system this container replaces enforced no
/// floor at all, so [`QuantityPolicy::AllowNegative`] is the default. The
/// intended behavior at zero was never specified there; the two plausible
/// readings are selectable per service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityPolicy {
    /// No floor: quantity may reach zero and go negative.
    #[default]
    AllowNegative,
    /// Quantity stops at zero; further decrements are no-ops.
    ClampAtZero,
    /// The item leaves the cart when its quantity would reach zero.
    RemoveAtZero,
}

/// Configuration for a cart service.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Storage key for the cart blob
    pub storage_key: String,
    /// Decrement floor policy
    pub quantity_policy: QuantityPolicy,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            quantity_policy: QuantityPolicy::default(),
        }
    }
}

impl CartConfig {
    /// Default configuration with an explicit decrement policy.
    pub fn with_policy(quantity_policy: QuantityPolicy) -> Self {
        Self {
            quantity_policy,
            ..Self::default()
        }
    }

    /// Default configuration with an explicit storage key.
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::default()
        }
    }
}
