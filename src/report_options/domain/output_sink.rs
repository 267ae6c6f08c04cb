use serde::Serialize;
use std::path::PathBuf;

/// Where the rendered report goes
///
/// A descriptor rather than an open handle, so a resolved option record
/// stays comparable and printable. The filesystem adapter turns it into a
/// writer when the report is actually written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSink {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl std::fmt::Display for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputSink::Stdout => write!(f, "stdout"),
            OutputSink::Stderr => write!(f, "stderr"),
            OutputSink::File(path) => write!(f, "{}", path.display()),
        }
    }
}
