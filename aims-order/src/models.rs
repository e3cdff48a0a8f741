use aims_core::{CartLineItem, DeliveryInfo};
use aims_shared::Media;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the order is to be delivered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    Standard,
    Rush,
}

/// A customer's purchase, built from the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub kind: OrderKind,
    pub items: Vec<OrderLineItem>,
    pub delivery_info: Option<DeliveryInfo>,
    pub shipping_fee: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(kind: OrderKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            items: Vec::new(),
            delivery_info: None,
            shipping_fee: None,
            created_at: Utc::now(),
        }
    }

    pub fn add_item(&mut self, item: OrderLineItem) {
        self.items.push(item);
    }

    /// Total value of the line items (price × quantity), excluding shipping.
    /// Saturates at `i64::MAX`.
    pub fn amount(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.subtotal()))
    }

    pub fn attach_delivery_info(&mut self, info: DeliveryInfo) {
        self.delivery_info = Some(info);
    }

    pub fn set_shipping_fee(&mut self, fee: i64) {
        self.shipping_fee = Some(fee);
    }
}

/// A media item in an order. Quantity and price are copied from the cart
/// when the order is created and never re-read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLineItem {
    pub media: Media,
    pub quantity: u32,
    pub price: i64,
}

impl OrderLineItem {
    pub fn new(media: Media, quantity: u32, price: i64) -> Self {
        Self { media, quantity, price }
    }

    pub fn subtotal(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

impl From<CartLineItem> for OrderLineItem {
    fn from(item: CartLineItem) -> Self {
        Self::new(item.media, item.quantity, item.price)
    }
}

/// An order requiring expedited delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RushOrder {
    order: Order,
}

impl RushOrder {
    pub fn new() -> Self {
        Self {
            order: Order::new(OrderKind::Rush),
        }
    }

    /// Line items mirror the cart one-to-one, in cart order.
    pub fn from_cart_items(items: impl IntoIterator<Item = CartLineItem>) -> Self {
        let mut rush = Self::new();
        for item in items {
            rush.order.add_item(item.into());
        }
        rush
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut Order {
        &mut self.order
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.order.items
    }

    pub fn amount(&self) -> i64 {
        self.order.amount()
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}

impl Default for RushOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Order> for RushOrder {
    fn as_ref(&self) -> &Order {
        &self.order
    }
}

impl From<RushOrder> for Order {
    fn from(rush: RushOrder) -> Self {
        rush.order
    }
}

/// Billing document for one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(order: Order) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            created_at: Utc::now(),
        }
    }

    /// Order amount plus shipping, when a fee has been set
    pub fn total(&self) -> i64 {
        self.order.amount() + self.order.shipping_fee.unwrap_or(0)
    }
}
