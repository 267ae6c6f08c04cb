use crate::ports::outbound::ReportLogger;
use owo_colors::OwoColorize;

/// StderrLogger adapter for reporting advisories to stderr
///
/// Writes to stderr so log lines never mix with a report written to stdout.
/// Debug lines are dropped unless debug output was requested.
pub struct StderrLogger {
    debug: bool,
}

impl StderrLogger {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    fn format_line(level: &str, message: &str) -> String {
        format!("{}\t{}", level, message)
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportLogger for StderrLogger {
    fn info(&self, message: &str) {
        eprintln!(
            "{}",
            Self::format_line(&"INFO".blue().bold().to_string(), message)
        );
    }

    fn warn(&self, message: &str) {
        eprintln!(
            "{}",
            Self::format_line(&"WARN".yellow().bold().to_string(), message)
        );
    }

    fn debug(&self, message: &str) {
        if self.debug {
            eprintln!(
                "{}",
                Self::format_line(&"DEBUG".dimmed().to_string(), message)
            );
        }
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug
    }
}
