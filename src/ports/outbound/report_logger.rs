/// ReportLogger port for advisory log lines emitted during resolution
///
/// Resolution only needs plain formatted messages at three levels, so the
/// port stays small enough to swap for an in-memory recorder in tests.
pub trait ReportLogger {
    /// Reports an informational message
    fn info(&self, message: &str);

    /// Reports a warning about an option that was ignored or corrected
    fn warn(&self, message: &str);

    /// Reports a diagnostic message; callers check `is_debug_enabled` first
    fn debug(&self, message: &str);

    /// Whether the logger is operating at the debug threshold
    fn is_debug_enabled(&self) -> bool;
}

impl<T: ReportLogger + ?Sized> ReportLogger for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    fn is_debug_enabled(&self) -> bool {
        (**self).is_debug_enabled()
    }
}
