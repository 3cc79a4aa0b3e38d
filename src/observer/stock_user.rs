use std::sync::Arc;

use eyre::{Result, WrapErr};

use crate::notification_sink::NotificationSink;
use crate::observer::PriceObserver;
use crate::price::Price;

pub const SOURCE: &str = "StockUser";

/// A named user that emits one message per price update.
pub struct StockUser {
    name: String,
    sink: Arc<dyn NotificationSink>,
}

impl StockUser {
    pub fn new(name: &str, sink: Arc<dyn NotificationSink>) -> StockUser {
        StockUser {
            name: name.to_string(),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn format_message(&self, price: Price) -> String {
        format!("{} notified. New stock price: ${}", self.name, price)
    }
}

impl PriceObserver for StockUser {
    fn update(&self, price: Price) -> Result<()> {
        let message = self.format_message(price);
        self.sink
            .emit(SOURCE, &message)
            .wrap_err_with(|| format!("Failed to notify {}", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification_sink::memory::MemoryNotificationSink;

    struct BrokenSink {}

    impl NotificationSink for BrokenSink {
        fn emit(&self, _source: &str, _message: &str) -> Result<()> {
            eyre::bail!("sink unavailable")
        }
    }

    #[test]
    fn emits_one_message_per_update() {
        let sink = Arc::new(MemoryNotificationSink::new());
        let alice = StockUser::new("Alice", sink.clone());

        alice.update(Price::new(101.5)).unwrap();
        alice.update(Price::new(101.5)).unwrap();
        alice.update(Price::new(100.0)).unwrap();

        assert_eq!(
            sink.messages().unwrap(),
            vec![
                "Alice notified. New stock price: $101.5",
                "Alice notified. New stock price: $101.5",
                "Alice notified. New stock price: $100.0",
            ]
        );
        assert_eq!(sink.notifications().unwrap()[0].source, SOURCE);
    }

    #[test]
    fn empty_name_is_accepted() {
        let sink = Arc::new(MemoryNotificationSink::new());
        let nameless = StockUser::new("", sink.clone());
        assert_eq!(nameless.name(), "");

        nameless.update(Price::new(-1.0)).unwrap();
        assert_eq!(
            sink.messages().unwrap(),
            vec![" notified. New stock price: $-1.0"]
        );
    }

    #[test]
    fn sink_failure_names_the_user() {
        let bob = StockUser::new("Bob", Arc::new(BrokenSink {}));
        let err = bob.update(Price::new(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to notify Bob");
        assert_eq!(err.root_cause().to_string(), "sink unavailable");
    }
}
