use crate::models::{Invoice, Order, RushOrder};
use crate::shipping::ShippingFeeCalculator;
use aims_core::{delivery, Cart, DeliveryInfo, Notifier, PlaceOrderResult, StorageError};
use aims_shared::Masked;

/// Drives the "place rush order" use case: availability check, delivery
/// info validation, rush order and invoice creation, shipping fees.
///
/// The cart and the popup notifier are collaborators owned by the caller.
/// Logging goes through `tracing`; whichever subscriber the caller installs
/// receives the events.
pub struct PlaceRushOrderController<C, N> {
    cart: C,
    notifier: N,
    shipping: ShippingFeeCalculator,
}

impl<C: Cart, N: Notifier> PlaceRushOrderController<C, N> {
    pub fn new(cart: C, notifier: N, shipping: ShippingFeeCalculator) -> Self {
        Self {
            cart,
            notifier,
            shipping,
        }
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    /// Checks that everything in the cart is in stock
    pub fn place_order(&self) -> Result<(), StorageError> {
        self.cart.check_availability()
    }

    /// Builds a rush order whose line items copy the cart's, in cart order
    pub fn create_rush_order(&self) -> Result<RushOrder, StorageError> {
        let items = self.cart.line_items()?;
        tracing::debug!(count = items.len(), "creating rush order from cart");
        Ok(RushOrder::from_cart_items(items))
    }

    pub fn create_invoice(&self, order: Order) -> Invoice {
        Invoice::new(order)
    }

    /// Logs the submitted delivery info, then validates it
    pub fn process_delivery_info(&self, info: &DeliveryInfo) -> PlaceOrderResult<()> {
        tracing::info!(
            name = %info.name,
            phone = %Masked(&info.phone),
            address = %info.address,
            "processing delivery info"
        );
        self.validate_delivery_info(info)
    }

    /// Validates name, phone and address in that order. The first failure
    /// is shown to the user before it is returned.
    pub fn validate_delivery_info(&self, info: &DeliveryInfo) -> PlaceOrderResult<()> {
        if let Err(invalid) = info.validate() {
            tracing::warn!(field = %invalid.field, "delivery info rejected");
            self.notifier.error(invalid.message())?;
            return Err(invalid.into());
        }
        Ok(())
    }

    pub fn validate_name(&self, name: &str) -> bool {
        delivery::validate_name(name)
    }

    pub fn validate_phone_number(&self, phone: &str) -> bool {
        delivery::validate_phone_number(phone)
    }

    pub fn validate_address(&self, address: &str) -> bool {
        delivery::validate_address(address)
    }

    pub fn calculate_shipping_fee(&self, order: &Order) -> i64 {
        self.shipping.calculate(order)
    }
}
