use serde::{Deserialize, Serialize};

/// Report output format
///
/// `Table` is the default when no format is requested. `Template` renders
/// through a user-supplied template. The SBOM formats always list every
/// package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Table,
    Json,
    Template,
    Sarif,
    #[serde(rename = "cyclonedx")]
    CycloneDx,
    Spdx,
    #[serde(rename = "spdx-json")]
    SpdxJson,
    #[serde(rename = "github")]
    GitHub,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 8] = [
        ReportFormat::Table,
        ReportFormat::Json,
        ReportFormat::Template,
        ReportFormat::Sarif,
        ReportFormat::CycloneDx,
        ReportFormat::Spdx,
        ReportFormat::SpdxJson,
        ReportFormat::GitHub,
    ];

    /// Formats that force list-all-packages mode on
    pub const LIST_ALL_PKGS_FORMATS: [ReportFormat; 3] = [
        ReportFormat::CycloneDx,
        ReportFormat::Spdx,
        ReportFormat::SpdxJson,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
            ReportFormat::Template => "template",
            ReportFormat::Sarif => "sarif",
            ReportFormat::CycloneDx => "cyclonedx",
            ReportFormat::Spdx => "spdx",
            ReportFormat::SpdxJson => "spdx-json",
            ReportFormat::GitHub => "github",
        }
    }

    pub fn enables_list_all_pkgs(&self) -> bool {
        Self::LIST_ALL_PKGS_FORMATS.contains(self)
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    /// Exact, case-sensitive lookup of the lower-case format names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ReportFormat::ALL.iter().map(|f| f.as_str()).collect();
                format!(
                    "Invalid format: {}. Please specify one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
