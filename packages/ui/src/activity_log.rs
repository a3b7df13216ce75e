use dioxus::prelude::*;

use crate::components::{ToastOptions, Toasts};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Session-local record of what the pages did, shown in the activity panel.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.level == LogLevel::Error).count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

/// Log a failed action everywhere someone might look: tracing output and the
/// activity panel get the error, the toast gets `message`.
pub fn report_error(
    log: &mut Signal<ActivityLog>,
    toasts: &Toasts,
    message: &str,
    error: impl std::fmt::Display,
) {
    tracing::error!("{message}: {error}");
    log_activity(log, LogLevel::Error, &format!("{message}: {error}"));
    toasts.error(message.to_string(), ToastOptions::new());
}

/// Record and toast a successful action.
pub fn report_success(log: &mut Signal<ActivityLog>, toasts: &Toasts, message: &str) {
    log_activity(log, LogLevel::Success, message);
    toasts.success(message.to_string(), ToastOptions::new());
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

// UTC wall clock.
#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format_clock(secs)
}

#[cfg(not(target_arch = "wasm32"))]
fn format_clock(epoch_secs: u64) -> String {
    let day = epoch_secs % 86_400;
    format!("{:02}:{:02}:{:02}", day / 3600, (day % 3600) / 60, day % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_formatting() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(86_400 + 3 * 3600 + 25 * 60 + 7), "03:25:07");
    }

    #[test]
    fn test_push_and_count_errors() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "Loading notes");
        log.push(LogLevel::Error, "Error toggling like");
        log.push(LogLevel::Error, "Network error");
        assert_eq!(log.entries.len(), 3);
        assert_eq!(log.error_count(), 2);
        assert_eq!(log.entries[1].message, "Error toggling like");
    }
}
