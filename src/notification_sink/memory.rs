use std::sync::Mutex;

use eyre::Result;

use crate::notification_sink::{Notification, NotificationSink};

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryNotificationSink {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotificationSink {
    pub fn new() -> Self {
        MemoryNotificationSink {
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn notifications(&self) -> Result<Vec<Notification>> {
        let notifications = self
            .notifications
            .lock()
            .map_err(|_| eyre::eyre!("Notification buffer lock poisoned"))?;
        Ok(notifications.clone())
    }

    /// Only the message strings, which is what most callers compare against.
    pub fn messages(&self) -> Result<Vec<String>> {
        Ok(self
            .notifications()?
            .into_iter()
            .map(|notification| notification.message)
            .collect())
    }
}

impl NotificationSink for MemoryNotificationSink {
    fn emit(&self, source: &str, message: &str) -> Result<()> {
        self.notifications
            .lock()
            .map_err(|_| eyre::eyre!("Notification buffer lock poisoned"))?
            .push(Notification::new(source, message));
        Ok(())
    }
}
