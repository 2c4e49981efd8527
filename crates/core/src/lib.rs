//! Core types for the cartstore workspace.
//!
//! This crate defines everything the other members agree on:
//! - `item`: the cart data model ([`LineItem`], [`NewItem`], [`CartSummary`])
//! - `config`: service configuration ([`CartConfig`], [`QuantityPolicy`])
//! - `storage`: the key-value contract the engine persists through
//!   ([`CartStorage`])
//! - `error`: the error taxonomy ([`CartError`], [`StorageError`])
//!
//! No I/O happens here; adapters live in `cartstore-storage` and the
//! container itself in `cartstore-engine`.

pub mod config;
pub mod error;
pub mod item;
pub mod storage;

pub use config::{CartConfig, QuantityPolicy, DEFAULT_STORAGE_KEY};
pub use error::{CartError, Result, StorageError};
pub use item::{CartSummary, LineItem, NewItem};
pub use storage::CartStorage;
