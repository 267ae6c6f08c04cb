/// Filesystem adapters for output destinations
mod file_writer;
mod sink_opener;

pub use file_writer::{FileSystemWriter, StderrPresenter, StdoutPresenter};
pub use sink_opener::FileSystemSinkOpener;
