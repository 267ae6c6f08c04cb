use crate::report_options::domain::OutputSink;
use crate::shared::Result;
use std::path::Path;

/// SinkOpener port for turning an explicit output path into a destination
pub trait SinkOpener {
    /// Checks that `path` can receive the report and returns its descriptor
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory does not exist
    /// - The path is a symbolic link
    fn open(&self, path: &Path) -> Result<OutputSink>;
}
