use super::{OutputSink, ReportFormat, SecurityCheck, Severity, VulnType};
use serde::Serialize;

/// Report options for one invocation.
///
/// The same record carries the raw draft fields supplied by the caller and
/// the normalized fields filled in by resolution. It is resolved once and
/// treated as read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportOption {
    /// Destination file; empty means the caller's default sink
    pub output_path: String,
    /// Requested format, `None` when the caller did not pick one
    pub format: Option<ReportFormat>,
    /// Template reference, only meaningful with `--format template`
    pub template: String,
    /// Comma-separated vulnerability types, e.g. `os,library`
    pub vuln_type_list: String,
    /// Comma-separated security checks, e.g. `vuln,config`
    pub security_check_list: String,
    /// Comma-separated severities, e.g. `HIGH,CRITICAL`
    pub severity_list: String,
    pub ignore_file: String,
    pub ignore_unfixed: bool,
    pub exit_code: i32,
    pub list_all_pkgs: bool,

    pub severities: Vec<Severity>,
    pub vuln_types: Vec<VulnType>,
    pub security_checks: Vec<SecurityCheck>,
    /// Resolved destination; `None` until resolution has run
    pub output: Option<OutputSink>,
}

impl ReportOption {
    /// The format in effect: the requested one, or `table` when unset
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or(ReportFormat::Table)
    }

    /// Resolved severities joined with commas, e.g. `HIGH,CRITICAL`
    pub fn severity_summary(&self) -> String {
        self.severities
            .iter()
            .map(Severity::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
