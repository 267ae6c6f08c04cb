use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a rejected option combination
/// apart from an environment problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Options resolved successfully
    Success = 0,
    /// Invalid command-line arguments or an invalid option combination
    InvalidArguments = 2,
    /// Application error (config file, output destination, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error raised while resolving options to an exit code
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ReportOptionError>() {
            Some(ReportOptionError::ListAllPkgsWithTable) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while resolving report options.
///
/// The list-all-packages conflict keeps a single-line message because
/// downstream tooling matches on it.
#[derive(Debug, Error)]
pub enum ReportOptionError {
    #[error("\"--list-all-pkgs\" cannot be used with \"--format table\". Try \"--format json\" or other formats.")]
    ListAllPkgsWithTable,

    #[error("Output destination is unavailable: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputUnavailable { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
