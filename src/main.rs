use std::sync::Arc;

use eyre::{Result, WrapErr};
use stock_notifier::{
    notification_sink::{
        json::{JsonFileNotificationSink, FILE_PATH_ENV},
        log::LogNotificationSink,
        NotificationSink,
    },
    observer::stock_user::StockUser,
    price::Price,
    subject::StockTicker,
};

const STOCK_USERS_ENV: &str = "STOCK_USERS";
const DEFAULT_STOCK_USERS: &str = "Alice,Bob";
const DEFAULT_PRICE: f64 = 101.5;

fn build_sink() -> Result<Arc<dyn NotificationSink>> {
    // Assumes that NOTIFICATION_LOG_PATH is only set when a file record is wanted
    if std::env::var(FILE_PATH_ENV).is_ok() {
        return Ok(Arc::new(JsonFileNotificationSink::new(None)?));
    }
    Ok(Arc::new(LogNotificationSink::new()))
}

fn parse_prices() -> Result<Vec<Price>> {
    let prices = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<f64>()
                .map(Price::new)
                .wrap_err_with(|| format!("Invalid price argument: {}", arg))
        })
        .collect::<Result<Vec<Price>>>()?;
    if prices.is_empty() {
        return Ok(vec![Price::new(DEFAULT_PRICE)]);
    }
    Ok(prices)
}

fn main() -> Result<()> {
    env_logger::init();

    let names =
        std::env::var(STOCK_USERS_ENV).unwrap_or_else(|_| String::from(DEFAULT_STOCK_USERS));
    log::debug!("Stock users: {}", names);
    let prices = parse_prices()?;

    let sink = build_sink()?;
    log::info!("Initialized notification sink");

    let mut ticker = StockTicker::new();
    for name in names.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        ticker.attach(Arc::new(StockUser::new(name, sink.clone())));
    }
    log::info!("Attached {} stock users", ticker.observer_count());

    for price in prices {
        ticker
            .set_price(price)
            .wrap_err_with(|| format!("Failed to publish price {}", price))?;
    }

    Ok(())
}
