use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use eyre::{Result, WrapErr};

use crate::notification_sink::{Notification, NotificationSink};

pub const FILE_PATH: &str = "notifications.jsonl";
pub const FILE_PATH_ENV: &str = "NOTIFICATION_LOG_PATH";

/// Appends every notification as one JSON object per line.
pub struct JsonFileNotificationSink {
    file_path: PathBuf,
    file: Mutex<File>,
}

impl JsonFileNotificationSink {
    pub fn new(file_path: Option<String>) -> Result<JsonFileNotificationSink> {
        let file_path = match file_path {
            Some(path) => path,
            None => std::env::var(FILE_PATH_ENV).unwrap_or_else(|_| String::from(FILE_PATH)),
        };
        let file_path = PathBuf::from(file_path);

        // Create parent directory if it doesn't exist yet
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .wrap_err_with(|| format!("Failed to open notification file {:?}", file_path))?;
        log::debug!("Appending notifications to file: {:?}", file_path);

        Ok(JsonFileNotificationSink {
            file_path,
            file: Mutex::new(file),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn write_line(&self, notification: &Notification) -> Result<()> {
        let mut line = serde_json::to_vec(notification)?;
        line.push(b'\n');
        let mut file = self
            .file
            .lock()
            .map_err(|_| eyre::eyre!("Notification file lock poisoned"))?;
        file.write_all(&line)
            .wrap_err("Failed to write notification")?;
        Ok(())
    }
}

impl NotificationSink for JsonFileNotificationSink {
    fn emit(&self, source: &str, message: &str) -> Result<()> {
        self.write_line(&Notification::new(source, message))
    }
}
