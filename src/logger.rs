//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a shared buffer, which state drains on each tick for display
//! in the debug overlay.

use log::{Level, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs into a shared buffer
///
pub struct CustomLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl CustomLogger {
    pub fn new(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        CustomLogger { buffer }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Allow all logs
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // If the lock fails the entry is dropped, which is non-critical
            if let Ok(mut buffer) = self.buffer.lock() {
                buffer.push(format_log(record));
            }
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_captures_to_buffer() {
        let buffer = Arc::new(Mutex::new(vec![]));
        let logger = CustomLogger::new(buffer.clone());
        logger.log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Info)
                .build(),
        );
        let entries = buffer.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].ends_with("INFO hello"));
    }
}
