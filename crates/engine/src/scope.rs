//! Provider scope for ambient cart access.
//!
//! Constructor injection of an `Arc<CartService>` is the primary way to
//! hand the cart to consumers. The scope keeps the provider/accessor shape
//! available for code that wants ambient lookup: [`CartScope::enter`]
//! installs a service for the current thread and [`CartScope::current`]
//! retrieves it, failing with [`CartError::NotInProviderScope`] when
//! nothing is installed. Scopes nest; dropping a guard restores the
//! previous scope.

use std::cell::RefCell;
use std::sync::Arc;

use cartstore_core::{CartError, LineItem, NewItem, Result};

use crate::service::CartService;

thread_local! {
    static CURRENT: RefCell<Option<Arc<CartService>>> = const { RefCell::new(None) };
}

/// Cheap-clone handle to a shared cart service.
///
/// This is the consumer-facing bundle: the product list plus the three
/// mutation operations, all delegating to one shared [`CartService`].
#[derive(Clone)]
pub struct CartHandle {
    service: Arc<CartService>,
}

impl std::fmt::Debug for CartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartHandle").finish_non_exhaustive()
    }
}

impl CartHandle {
    /// Wrap a shared service.
    pub fn new(service: Arc<CartService>) -> Self {
        Self { service }
    }

    /// The underlying service, for operations beyond the consumer bundle.
    pub fn service(&self) -> &CartService {
        &self.service
    }

    /// Current cart in insertion order.
    pub fn products(&self) -> Vec<LineItem> {
        self.service.list()
    }

    /// See [`CartService::add_to_cart`].
    pub fn add_to_cart(&self, item: NewItem) -> Result<()> {
        self.service.add_to_cart(item)
    }

    /// See [`CartService::increment`].
    pub fn increment(&self, id: &str) -> Result<()> {
        self.service.increment(id)
    }

    /// See [`CartService::decrement`].
    pub fn decrement(&self, id: &str) -> Result<()> {
        self.service.decrement(id)
    }
}

/// Thread-scoped provider for ambient cart lookup.
#[derive(Debug)]
pub struct CartScope;

impl CartScope {
    /// Install `service` as the current thread's cart until the returned
    /// guard drops.
    #[must_use = "dropping the guard immediately uninstalls the scope"]
    pub fn enter(service: Arc<CartService>) -> ScopeGuard {
        let previous = CURRENT.with(|cell| cell.borrow_mut().replace(service));
        ScopeGuard { previous }
    }

    /// The accessor: a handle to the innermost active scope's service.
    pub fn current() -> Result<CartHandle> {
        CURRENT.with(|cell| {
            cell.borrow()
                .as_ref()
                .map(|service| CartHandle::new(Arc::clone(service)))
                .ok_or(CartError::NotInProviderScope)
        })
    }
}

/// Restores the previously installed scope when dropped.
#[must_use]
pub struct ScopeGuard {
    previous: Option<Arc<CartService>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|cell| {
            *cell.borrow_mut() = previous;
        });
    }
}
