use eyre::Result;

use crate::notification_sink::NotificationSink;

/// Forwards notifications to the `log` facade, using the source as log target.
#[derive(Clone, Debug, Default)]
pub struct LogNotificationSink {}

impl LogNotificationSink {
    pub fn new() -> Self {
        LogNotificationSink {}
    }
}

impl NotificationSink for LogNotificationSink {
    fn emit(&self, source: &str, message: &str) -> Result<()> {
        log::info!(target: source, "{}", message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_without_error() {
        let _ = env_logger::builder().is_test(true).try_init();
        let sink = LogNotificationSink::new();
        assert!(sink
            .emit("StockUser", "Alice notified. New stock price: $101.5")
            .is_ok());
    }
}
