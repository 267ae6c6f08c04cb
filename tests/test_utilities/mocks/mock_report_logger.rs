use report_opts::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Debug,
}

/// Mock ReportLogger for testing that captures messages in order
#[derive(Default, Clone)]
pub struct MockReportLogger {
    debug: bool,
    pub entries: std::sync::Arc<std::sync::Mutex<Vec<(LogLevel, String)>>>,
}

impl MockReportLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger at the debug threshold
    pub fn with_debug() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn get_entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }

    fn record(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl ReportLogger for MockReportLogger {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn debug(&self, message: &str) {
        if self.debug {
            self.record(LogLevel::Debug, message);
        }
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug
    }
}
