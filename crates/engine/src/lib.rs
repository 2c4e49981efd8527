//! Cart container engine.
//!
//! - `service`: the cart container itself ([`CartService`])
//! - `scope`: consumer-facing handle and thread-scoped provider
//!   ([`CartHandle`], [`CartScope`])

pub mod scope;
pub mod service;

pub use scope::{CartHandle, CartScope, ScopeGuard};
pub use service::CartService;
