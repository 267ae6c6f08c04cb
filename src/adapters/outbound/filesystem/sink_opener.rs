use crate::ports::outbound::SinkOpener;
use crate::report_options::domain::OutputSink;
use crate::shared::error::ReportOptionError;
use crate::shared::security::check_output_target;
use crate::shared::Result;
use std::path::Path;

/// FileSystemSinkOpener adapter for explicit `--output` paths
///
/// Checks that the report can be written to the path without creating the
/// file, so a rejected option set leaves nothing behind on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemSinkOpener;

impl FileSystemSinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl SinkOpener for FileSystemSinkOpener {
    fn open(&self, path: &Path) -> Result<OutputSink> {
        check_output_target(path).map_err(|e| ReportOptionError::OutputUnavailable {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(OutputSink::File(path.to_path_buf()))
    }
}
