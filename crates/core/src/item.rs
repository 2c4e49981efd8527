//! Line item types for the cart.
//!
//! These are the only types that cross the storage boundary: the persisted
//! blob is a JSON array of [`LineItem`] records and nothing else.

use serde::{Deserialize, Serialize};

/// One product placed in the cart.
///
/// Exactly these five fields round-trip through the persisted blob:
/// `id`, `title`, `image_url`, `price`, `quantity`.
///
/// # Examples
///
/// ```
/// use cartstore_core::LineItem;
///
/// let item = LineItem {
///     id: "p1".into(),
///     title: "Shirt".into(),
///     image_url: "https://example.com/shirt.png".into(),
///     price: 10.0,
///     quantity: 1,
/// };
/// assert_eq!(item.quantity, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque unique product identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Display image reference
    pub image_url: String,
    /// Unit price
    pub price: f64,
    /// Units in the cart (signed: the default policy enforces no floor)
    pub quantity: i64,
}

/// A product about to enter the cart: a [`LineItem`] without a quantity.
///
/// This is the argument to `add_to_cart`; the container decides the
/// quantity (1 for a new id, existing+1 for a repeat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    /// Opaque unique product identifier
    pub id: String,
    /// Display name
    pub title: String,
    /// Display image reference
    pub image_url: String,
    /// Unit price
    pub price: f64,
}

impl NewItem {
    /// Promote to a line item carrying `quantity` units.
    pub fn with_quantity(self, quantity: i64) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

/// Totals derived from the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    /// Sum of unit price times quantity over all items
    pub total_price: f64,
    /// Sum of quantities over all items
    pub total_quantity: i64,
}
