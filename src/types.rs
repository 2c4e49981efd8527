//! Public types for the cartstore unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// ============================================================================
// Data model
// ============================================================================

pub use cartstore_core::{CartSummary, LineItem, NewItem};

// ============================================================================
// Configuration
// ============================================================================

pub use cartstore_core::{CartConfig, QuantityPolicy, DEFAULT_STORAGE_KEY};

// ============================================================================
// Errors
// ============================================================================

pub use cartstore_core::{CartError, Result, StorageError};

// ============================================================================
// Storage contract and adapters
// ============================================================================

pub use cartstore_core::CartStorage;
pub use cartstore_storage::{FileStorage, MemoryStorage};

// ============================================================================
// Container, handle and provider scope
// ============================================================================

pub use cartstore_engine::{CartHandle, CartScope, CartService, ScopeGuard};
