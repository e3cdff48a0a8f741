use crate::StorageError;
use aims_shared::Media;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One media item sitting in the cart, with the price it was added at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    pub media: Media,
    pub quantity: u32,
    pub price: i64,
}

impl CartLineItem {
    pub fn new(media: Media, quantity: u32, price: i64) -> Self {
        Self { media, quantity, price }
    }
}

/// The customer's cart as seen by order placement
pub trait Cart {
    /// Line items in cart order
    fn line_items(&self) -> Result<Vec<CartLineItem>, StorageError>;

    /// Fails when any line item asks for more units than are in stock
    fn check_availability(&self) -> Result<(), StorageError>;
}

impl<C: Cart + ?Sized> Cart for &C {
    fn line_items(&self) -> Result<Vec<CartLineItem>, StorageError> {
        (**self).line_items()
    }

    fn check_availability(&self) -> Result<(), StorageError> {
        (**self).check_availability()
    }
}

/// Checks the cart against stock levels. Lines for the same media are
/// counted together, so splitting a request over several lines cannot
/// exceed the stock.
pub fn ensure_available(items: &[CartLineItem]) -> Result<(), StorageError> {
    let mut requested: HashMap<i64, u32> = HashMap::new();
    for item in items {
        let total = requested.entry(item.media.id).or_insert(0);
        *total = total.saturating_add(item.quantity);
        if !item.media.has_stock_for(*total) {
            return Err(StorageError::Unavailable {
                media_id: item.media.id,
                requested: *total,
                in_stock: item.media.stock,
            });
        }
    }
    Ok(())
}

/// Vector-backed cart for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    items: Vec<CartLineItem>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add media to the cart at its current price
    pub fn add(&mut self, media: Media, quantity: u32) {
        let price = media.price;
        self.items.push(CartLineItem::new(media, quantity, price));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Cart for InMemoryCart {
    fn line_items(&self) -> Result<Vec<CartLineItem>, StorageError> {
        tracing::debug!(count = self.items.len(), "reading in-memory cart");
        Ok(self.items.clone())
    }

    fn check_availability(&self) -> Result<(), StorageError> {
        ensure_available(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_items_keep_insertion_order() {
        let mut cart = InMemoryCart::new();
        cart.add(Media::new(2, "Abbey Road", "cd", 150, 5), 1);
        cart.add(Media::new(1, "Dune", "book", 120, 5), 2);

        let items = cart.line_items().unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.media.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(items[1].quantity, 2);
        assert_eq!(items[1].price, 120);
    }

    #[test]
    fn test_check_availability() {
        let mut cart = InMemoryCart::new();
        cart.add(Media::new(1, "Dune", "book", 120, 2), 2);
        assert!(cart.check_availability().is_ok());

        cart.add(Media::new(3, "Alien", "dvd", 90, 1), 4);
        match cart.check_availability() {
            Err(StorageError::Unavailable { media_id, requested, in_stock }) => {
                assert_eq!(media_id, 3);
                assert_eq!(requested, 4);
                assert_eq!(in_stock, 1);
            }
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_lines_count_against_stock() {
        let mut cart = InMemoryCart::new();
        let vinyl = Media::new(2, "Abbey Road", "lp", 150, 1);
        cart.add(vinyl.clone(), 1);
        assert!(cart.check_availability().is_ok());

        cart.add(Media::new(5, "Dune", "book", 120, 9), 3);
        cart.add(vinyl, 1);
        assert!(matches!(
            cart.check_availability(),
            Err(StorageError::Unavailable { media_id: 2, requested: 2, in_stock: 1 })
        ));
    }

    #[test]
    fn test_empty_cart_is_available() {
        let cart = InMemoryCart::new();
        assert!(cart.is_empty());
        assert!(cart.check_availability().is_ok());
        assert!(cart.line_items().unwrap().is_empty());
    }
}
