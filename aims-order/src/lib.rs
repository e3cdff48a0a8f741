pub mod controller;
pub mod models;
pub mod shipping;

pub use controller::PlaceRushOrderController;
pub use models::{Invoice, Order, OrderKind, OrderLineItem, RushOrder};
pub use shipping::{ShippingConfig, ShippingFeeCalculator};
