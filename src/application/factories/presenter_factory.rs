use crate::adapters::outbound::filesystem::{FileSystemWriter, StderrPresenter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use crate::report_options::domain::OutputSink;

/// Factory for creating output presenters
///
/// Maps a resolved `OutputSink` to the adapter that writes to it.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter for the given destination
    ///
    /// # Examples
    /// ```
    /// use report_opts::application::factories::PresenterFactory;
    /// use report_opts::report_options::domain::OutputSink;
    ///
    /// let presenter = PresenterFactory::create(&OutputSink::Stdout);
    /// ```
    pub fn create(sink: &OutputSink) -> Box<dyn OutputPresenter> {
        match sink {
            OutputSink::Stdout => Box::new(StdoutPresenter::new()),
            OutputSink::Stderr => Box::new(StderrPresenter::new()),
            OutputSink::File(path) => Box::new(FileSystemWriter::new(path.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_file_presenter_writes_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resolved.json");

        let presenter = PresenterFactory::create(&OutputSink::File(path.clone()));
        presenter.present("{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_create_console_presenters() {
        assert!(PresenterFactory::create(&OutputSink::Stdout)
            .present("")
            .is_ok());
        assert!(PresenterFactory::create(&OutputSink::Stderr)
            .present("")
            .is_ok());
    }
}
