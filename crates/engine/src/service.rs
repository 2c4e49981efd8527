//! The cart container.
//!
//! [`CartService`] owns the authoritative in-memory cart and mirrors it to
//! a [`CartStorage`] backend after every mutation. All mutations run under
//! one mutex: lock, apply, persist the post-mutation snapshot, release.
//! Two back-to-back mutations can therefore never compute from a stale
//! snapshot, and the blob reaching storage is always the state the caller
//! just observed.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use cartstore_core::{
    CartConfig, CartError, CartStorage, CartSummary, LineItem, NewItem, QuantityPolicy, Result,
};

/// The cart container: authoritative in-memory state plus storage mirror.
///
/// # Thread safety
///
/// `Send + Sync`; share one instance behind an `Arc` (or a `CartHandle`).
/// Mutations serialize through an internal mutex, so concurrent callers
/// never lose an update.
///
/// # Failure semantics
///
/// A storage write failure is returned to the caller, but the in-memory
/// update has already taken effect: memory is authoritative and storage is
/// a mirror that may lag by exactly the failed write.
pub struct CartService {
    items: Mutex<Vec<LineItem>>,
    storage: Arc<dyn CartStorage>,
    config: CartConfig,
}

impl std::fmt::Debug for CartService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartService")
            .field("items", &self.items)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CartService {
    /// Open a cart backed by `storage` with the default configuration.
    ///
    /// This performs the one-time load: an absent blob seeds an empty
    /// cart, a present blob is decoded into the cart, and a failed read or
    /// a malformed blob is an error. There is no silent empty-cart
    /// fallback for bad data.
    pub fn new(storage: Arc<dyn CartStorage>) -> Result<Self> {
        Self::with_config(storage, CartConfig::default())
    }

    /// Open a cart with an explicit configuration.
    pub fn with_config(storage: Arc<dyn CartStorage>, config: CartConfig) -> Result<Self> {
        let items: Vec<LineItem> = match storage.get(&config.storage_key)? {
            Some(blob) => serde_json::from_str(&blob).map_err(CartError::Deserialize)?,
            None => Vec::new(),
        };
        debug!(
            target: "cartstore::engine",
            key = %config.storage_key,
            items = items.len(),
            "loaded cart"
        );
        Ok(Self {
            items: Mutex::new(items),
            storage,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Current cart in insertion order. No side effects.
    pub fn list(&self) -> Vec<LineItem> {
        self.items.lock().clone()
    }

    /// Number of distinct line items (not units).
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Check whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Add a product to the cart.
    ///
    /// An existing id gets quantity existing+1 and takes the incoming
    /// item's title/image/price; a new id is appended with quantity 1.
    pub fn add_to_cart(&self, item: NewItem) -> Result<()> {
        let mut items = self.items.lock();
        match items.iter_mut().find(|p| p.id == item.id) {
            Some(existing) => {
                let quantity = existing.quantity + 1;
                *existing = item.with_quantity(quantity);
            }
            None => items.push(item.with_quantity(1)),
        }
        self.persist(&items)
    }

    /// Quantity +1 for the matching id; an absent id leaves the cart
    /// unchanged.
    pub fn increment(&self, id: &str) -> Result<()> {
        let mut items = self.items.lock();
        match items.iter_mut().find(|p| p.id == id) {
            Some(item) => item.quantity += 1,
            None => trace!(target: "cartstore::engine", id, "increment on absent id"),
        }
        self.persist(&items)
    }

    /// Quantity -1 for the matching id, subject to the configured
    /// [`QuantityPolicy`]; an absent id leaves the cart unchanged.
    pub fn decrement(&self, id: &str) -> Result<()> {
        let mut items = self.items.lock();
        if let Some(pos) = items.iter().position(|p| p.id == id) {
            match self.config.quantity_policy {
                QuantityPolicy::AllowNegative => items[pos].quantity -= 1,
                QuantityPolicy::ClampAtZero => {
                    let item = &mut items[pos];
                    item.quantity = (item.quantity - 1).max(0);
                }
                QuantityPolicy::RemoveAtZero => {
                    if items[pos].quantity <= 1 {
                        items.remove(pos);
                    } else {
                        items[pos].quantity -= 1;
                    }
                }
            }
        } else {
            trace!(target: "cartstore::engine", id, "decrement on absent id");
        }
        self.persist(&items)
    }

    /// Empty the cart and clear the persisted blob.
    pub fn clear(&self) -> Result<()> {
        let mut items = self.items.lock();
        items.clear();
        self.storage.clear(&self.config.storage_key)?;
        debug!(target: "cartstore::engine", key = %self.config.storage_key, "cleared cart");
        Ok(())
    }

    /// Totals over the current cart.
    pub fn summary(&self) -> CartSummary {
        let items = self.items.lock();
        items.iter().fold(CartSummary::default(), |mut acc, p| {
            acc.total_price += p.price * p.quantity as f64;
            acc.total_quantity += p.quantity;
            acc
        })
    }

    /// Serialize and write the post-mutation snapshot.
    ///
    /// Called with the mutation's lock still held so snapshots reach
    /// storage in mutation order.
    fn persist(&self, items: &[LineItem]) -> Result<()> {
        let blob = serde_json::to_string(items).map_err(CartError::Serialize)?;
        self.storage.set(&self.config.storage_key, &blob)?;
        debug!(
            target: "cartstore::engine",
            key = %self.config.storage_key,
            items = items.len(),
            "persisted cart"
        );
        Ok(())
    }
}
