//! Storage adapters for the cart blob.
//!
//! The contract lives in `cartstore-core` ([`cartstore_core::CartStorage`]);
//! this crate provides the backends:
//! - [`MemoryStorage`]: lock-guarded map, for tests and local development
//! - [`FileStorage`]: one file per key, atomic replace on write

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
