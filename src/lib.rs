//! cartstore: a client-side shopping cart state container.
//!
//! The container owns an ordered list of line items with quantities,
//! mirrors it to a pluggable key-value storage backend after every
//! mutation, and hands consumers either an injected service or a
//! thread-scoped handle.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cartstore::{CartService, MemoryStorage, NewItem};
//!
//! # fn main() -> cartstore::Result<()> {
//! let storage = Arc::new(MemoryStorage::new());
//! let cart = CartService::new(storage)?;
//!
//! cart.add_to_cart(NewItem {
//!     id: "p1".into(),
//!     title: "Shirt".into(),
//!     image_url: "https://example.com/shirt.png".into(),
//!     price: 10.0,
//! })?;
//! cart.increment("p1")?;
//!
//! assert_eq!(cart.list()[0].quantity, 2);
//! # Ok(())
//! # }
//! ```

pub mod types;

pub use types::*;
