use crate::report_options::domain::{OutputSink, ReportOption};
use crate::shared::Result;

/// ReportOptionPort - Inbound port for resolving report options
///
/// External adapters (CLI, config loaders) hand a draft record to this port
/// and receive it back normalized in place.
pub trait ReportOptionPort {
    /// Validates and normalizes `option` in place
    ///
    /// # Arguments
    /// * `option` - Draft record; resolved fields are overwritten
    /// * `default_sink` - Destination used when no output path was given
    ///
    /// # Errors
    /// Returns an error if:
    /// - List-all-packages mode is combined with the table format
    /// - The explicit output path cannot be used
    ///
    /// Fields normalized before the failing step keep their new values.
    fn resolve(&self, option: &mut ReportOption, default_sink: OutputSink) -> Result<()>;
}
