//! Notification sinks receive the formatted messages listeners emit.
//! Listeners get their sink injected at construction instead of reaching for a global logger.
use chrono::{DateTime, Utc};
use eyre::Result;
use serde::{Deserialize, Serialize};

pub mod json;
pub mod log;
pub mod memory;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub message: String,
}

impl Notification {
    pub fn new(source: &str, message: &str) -> Self {
        Notification {
            timestamp: Utc::now(),
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait NotificationSink: Send + Sync {
    /// Writes one message. `source` names the kind of listener that produced it.
    fn emit(&self, source: &str, message: &str) -> Result<()>;
}
