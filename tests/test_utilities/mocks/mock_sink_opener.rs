use report_opts::prelude::*;
use std::path::Path;

/// Mock SinkOpener that never touches the file system
#[derive(Default, Clone)]
pub struct MockSinkOpener {
    failure: Option<String>,
}

impl MockSinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener that rejects every path with the given details
    pub fn failing(details: &str) -> Self {
        Self {
            failure: Some(details.to_string()),
        }
    }
}

impl SinkOpener for MockSinkOpener {
    fn open(&self, path: &Path) -> Result<OutputSink> {
        match &self.failure {
            Some(details) => Err(ReportOptionError::OutputUnavailable {
                path: path.to_path_buf(),
                details: details.clone(),
            }
            .into()),
            None => Ok(OutputSink::File(path.to_path_buf())),
        }
    }
}
