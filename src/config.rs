//! Configuration file support for report-opts.
//!
//! Provides YAML-based configuration through `report-opts.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::ports::outbound::ReportLogger;
use crate::report_options::domain::ReportFormat;
use crate::shared::error::ReportOptionError;
use crate::shared::security::check_config_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "report-opts.config.yml";

/// A list given either as one comma-separated string or as a YAML sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    Joined(String),
    Items(Vec<String>),
}

impl ListValue {
    /// The comma-separated form the resolver parses
    pub fn to_list_string(&self) -> String {
        match self {
            ListValue::Joined(list) => list.clone(),
            ListValue::Items(items) => items.join(","),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub format: Option<String>,
    pub template: Option<String>,
    pub severity: Option<ListValue>,
    pub vuln_type: Option<ListValue>,
    pub security_checks: Option<ListValue>,
    pub ignore_file: Option<String>,
    pub ignore_unfixed: Option<bool>,
    pub exit_code: Option<i32>,
    pub list_all_pkgs: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured format; only meaningful after validation
    pub fn report_format(&self) -> Option<ReportFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path, logger: &impl ReportLogger) -> Result<ConfigFile> {
    check_config_file(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config, logger);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path, logger: &impl ReportLogger) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path, logger)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        format
            .parse::<ReportFormat>()
            .map_err(|reason| ReportOptionError::InvalidConfig {
                path: path.to_path_buf(),
                reason,
                hint: "Set 'format' to a supported report format, e.g. format: json".to_string(),
            })?;
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile, logger: &impl ReportLogger) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        logger.warn(&format!("Unknown config field '{}' will be ignored.", key));
    }
}
