//! report-opts - report option resolver for vulnerability scanners
//!
//! Turns raw report flags (comma-separated lists, free text, booleans) into a
//! validated, normalized option record, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`report_options`): option record, vocabularies and pure checks
//! - **Application Layer** (`application`): the resolver use case and DTOs
//! - **Ports** (`ports`): logger, sink opener and presenter interfaces
//! - **Adapters** (`adapters`): stderr logger and filesystem implementations
//! - **Shared** (`shared`): error types and path checks
//!
//! # Example
//!
//! ```
//! use report_opts::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut option = ReportOption {
//!     format: Some(ReportFormat::CycloneDx),
//!     severity_list: "HIGH,CRITICAL".to_string(),
//!     vuln_type_list: "os,library".to_string(),
//!     security_check_list: "vuln".to_string(),
//!     ..Default::default()
//! };
//!
//! let use_case = ResolveReportOptionsUseCase::new(FileSystemSinkOpener::new(), StderrLogger::new(false));
//! use_case.execute(&mut option, OutputSink::Stdout)?;
//!
//! assert!(option.list_all_pkgs);
//! assert_eq!(option.severities, vec![Severity::High, Severity::Critical]);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod report_options;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrLogger;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSinkOpener, FileSystemWriter, StderrPresenter, StdoutPresenter,
    };
    pub use crate::application::dto::ResolvedReport;
    pub use crate::application::factories::PresenterFactory;
    pub use crate::application::use_cases::ResolveReportOptionsUseCase;
    pub use crate::ports::inbound::ReportOptionPort;
    pub use crate::ports::outbound::{OutputPresenter, ReportLogger, SinkOpener};
    pub use crate::report_options::domain::{
        OutputSink, ReportFormat, ReportOption, SecurityCheck, Severity, SeverityParseError,
        VulnType,
    };
    pub use crate::report_options::services::{Advisory, CompatibilityChecker, ListParser};
    pub use crate::shared::error::{ExitCode, ReportOptionError};
    pub use crate::shared::Result;
}
