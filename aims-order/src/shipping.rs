use crate::models::Order;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Upper bound (exclusive) of the random surcharge, as a percentage of
    /// the order amount
    #[serde(default = "default_surcharge_percent")]
    pub surcharge_percent: u32,

    /// Fixed part of the fee, as a multiple of the order amount
    #[serde(default = "default_amount_multiplier")]
    pub amount_multiplier: i64,
}

fn default_surcharge_percent() -> u32 { 10 }
fn default_amount_multiplier() -> i64 { 10 }

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            surcharge_percent: default_surcharge_percent(),
            amount_multiplier: default_amount_multiplier(),
        }
    }
}

/// Computes shipping fees for orders
#[derive(Debug, Clone, Default)]
pub struct ShippingFeeCalculator {
    config: ShippingConfig,
}

impl ShippingFeeCalculator {
    pub fn new(config: ShippingConfig) -> Self {
        Self { config }
    }

    /// Fee for `order` with a surcharge drawn from the thread-local RNG
    pub fn calculate(&self, order: &Order) -> i64 {
        self.calculate_with_rng(order, &mut rand::thread_rng())
    }

    /// `trunc(draw * amount * surcharge% / 100) + amount * multiplier`, with
    /// `draw` uniform in [0, 1).
    pub fn calculate_with_rng<R: Rng + ?Sized>(&self, order: &Order, rng: &mut R) -> i64 {
        let amount = order.amount();
        let draw: f64 = rng.gen();
        let fee = self
            .surcharge(amount, draw)
            .saturating_add(amount.saturating_mul(self.config.amount_multiplier));

        tracing::info!(order_id = %order.id, amount, fee, "calculated shipping fee");
        fee
    }

    fn surcharge(&self, amount: i64, draw: f64) -> i64 {
        // Dividing by 100 last keeps the ceiling exact whenever it is a whole
        // number, so the truncated surcharge stays strictly below it.
        let ceiling = amount.saturating_mul(i64::from(self.config.surcharge_percent)) as f64 / 100.0;
        (draw * ceiling) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderKind, OrderLineItem};
    use aims_shared::Media;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn order_with_amount(amount: i64) -> Order {
        let mut order = Order::new(OrderKind::Rush);
        if amount > 0 {
            order.add_item(OrderLineItem::new(Media::new(1, "Dune", "book", amount, 5), 1, amount));
        }
        order
    }

    #[test]
    fn test_fee_range_for_thousand() {
        let calculator = ShippingFeeCalculator::default();
        let order = order_with_amount(1000);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let fee = calculator.calculate_with_rng(&order, &mut rng);
            assert!((10_000..10_100).contains(&fee), "fee out of range: {}", fee);
        }
    }

    #[test]
    fn test_fee_bounds_across_amounts() {
        let calculator = ShippingFeeCalculator::default();
        let mut rng = StdRng::seed_from_u64(42);

        for amount in [0, 1, 9, 10, 30, 99, 12_345, 1_000_000] {
            let order = order_with_amount(amount);
            for _ in 0..200 {
                let fee = calculator.calculate_with_rng(&order, &mut rng);
                assert!(fee >= amount * 10);
                assert!((fee as f64) < amount as f64 * 10.0 + amount as f64 * 0.1 || amount == 0);
            }
        }
    }

    #[test]
    fn test_fee_with_extreme_draws() {
        let calculator = ShippingFeeCalculator::default();
        assert_eq!(calculator.surcharge(1000, 0.0), 0);
        assert_eq!(calculator.surcharge(1000, 0.5), 50);
        assert_eq!(calculator.surcharge(1000, 1.0 - f64::EPSILON), 99);
        assert_eq!(calculator.surcharge(30, 1.0 - f64::EPSILON), 2);

        // All-zero bits draw 0.0
        let mut rng = StepRng::new(0, 0);
        assert_eq!(calculator.calculate_with_rng(&order_with_amount(1000), &mut rng), 10_000);
    }

    #[test]
    fn test_empty_order_has_zero_fee() {
        let calculator = ShippingFeeCalculator::default();
        assert_eq!(calculator.calculate(&order_with_amount(0)), 0);
    }

    #[test]
    fn test_huge_amount_saturates() {
        let calculator = ShippingFeeCalculator::default();
        let order = order_with_amount(i64::MAX / 2);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(calculator.calculate_with_rng(&order, &mut rng), i64::MAX);
    }

    #[test]
    fn test_custom_config() {
        let calculator = ShippingFeeCalculator::new(ShippingConfig {
            surcharge_percent: 0,
            amount_multiplier: 2,
        });
        assert_eq!(calculator.calculate(&order_with_amount(500)), 1000);
    }
}
