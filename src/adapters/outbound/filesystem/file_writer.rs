use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportOptionError;
use crate::shared::security::check_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> anyhow::Error {
        ReportOptionError::OutputUnavailable {
            path: self.output_path.clone(),
            details,
        }
        .into()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        // The destination may have changed since the sink was opened.
        check_output_target(&self.output_path).map_err(|e| self.write_error(e.to_string()))?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// StderrPresenter adapter for writing output to stderr
pub struct StderrPresenter;

impl StderrPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StderrPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stderr()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stderr: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("resolved.json");

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("{\"format\":\"json\"}").unwrap();

        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "{\"format\":\"json\"}");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/resolved.json");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.present("{}");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("test output\n").is_ok());
    }

    #[test]
    fn test_stderr_presenter_success() {
        assert!(StderrPresenter::default().present("test output\n").is_ok());
    }
}
