use serde::{Deserialize, Serialize};

/// A sellable media product (book, CD, DVD, ...) as seen by carts and orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    pub id: i64,
    pub title: String,
    pub category: String,
    /// Unit price in minor currency units
    pub price: i64,
    /// Units currently in stock
    pub stock: u32,
}

impl Media {
    pub fn new(id: i64, title: impl Into<String>, category: impl Into<String>, price: i64, stock: u32) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            price,
            stock,
        }
    }

    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }
}
