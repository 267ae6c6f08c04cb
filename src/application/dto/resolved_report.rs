use crate::report_options::domain::{
    OutputSink, ReportFormat, ReportOption, SecurityCheck, Severity, VulnType,
};
use serde::Serialize;

/// ResolvedReport - Outward view of a resolved option record
///
/// Drops the raw comma-separated drafts and exposes the normalized values a
/// report generator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReport {
    pub format: ReportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub severities: Vec<Severity>,
    pub vuln_types: Vec<VulnType>,
    pub security_checks: Vec<SecurityCheck>,
    pub list_all_pkgs: bool,
    pub ignore_unfixed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_file: Option<String>,
    pub exit_code: i32,
    pub output: Option<OutputSink>,
}

impl ResolvedReport {
    /// Serializes the view as pretty-printed JSON
    pub fn to_json(&self) -> crate::shared::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize resolved options: {}", e))
    }
}

impl From<&ReportOption> for ResolvedReport {
    fn from(option: &ReportOption) -> Self {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self {
            format: option.effective_format(),
            template: non_empty(&option.template),
            severities: option.severities.clone(),
            vuln_types: option.vuln_types.clone(),
            security_checks: option.security_checks.clone(),
            list_all_pkgs: option.list_all_pkgs,
            ignore_unfixed: option.ignore_unfixed,
            ignore_file: non_empty(&option.ignore_file),
            exit_code: option.exit_code,
            output: option.output.clone(),
        }
    }
}
