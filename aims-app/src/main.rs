mod arguments;
mod notifier;

use aims_core::DeliveryInfo;
use aims_order::{PlaceRushOrderController, ShippingFeeCalculator};
use aims_store::{app_config::Config, SqliteCart};
use arguments::Arguments;
use clap::Parser;
use notifier::TerminalNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aims_app=debug,aims_order=info,aims_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    tracing::info!("placing rush order with arguments:\n{}", args);

    let cart = SqliteCart::open(&config.database.path)?;
    for entry in &args.items {
        cart.add_item(entry.media_id, entry.quantity)?;
    }

    let controller = PlaceRushOrderController::new(
        cart,
        TerminalNotifier,
        ShippingFeeCalculator::new(config.shipping.clone()),
    );

    controller.place_order()?;

    let info = DeliveryInfo::new(args.name, args.phone, args.address);
    controller.process_delivery_info(&info)?;

    let mut rush = controller.create_rush_order()?;
    let fee = controller.calculate_shipping_fee(rush.order());
    rush.order_mut().attach_delivery_info(info);
    rush.order_mut().set_shipping_fee(fee);

    let invoice = controller.create_invoice(rush.into_order());
    tracing::info!(invoice_id = %invoice.id, total = invoice.total(), "invoice created");

    controller.cart().clear()?;
    println!("{}", serde_json::to_string_pretty(&invoice)?);
    Ok(())
}
