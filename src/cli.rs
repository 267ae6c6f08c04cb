use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigFile, ListValue};
use crate::report_options::domain::{ReportFormat, ReportOption, Severity};

/// Default vulnerability types when neither a flag nor the config sets one
pub const DEFAULT_VULN_TYPES: &str = "os,library";

/// Default security checks when neither a flag nor the config sets one
pub const DEFAULT_SECURITY_CHECKS: &str = "vuln";

/// Validate and normalize report options for a vulnerability scan
#[derive(Parser, Debug, Default)]
#[command(name = "report-opts")]
#[command(version)]
#[command(
    about = "Validate report options and print the normalized option set",
    long_about = None
)]
pub struct Args {
    /// Output format: table, json, template, sarif, cyclonedx, spdx, spdx-json, github
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Template reference, used with --format template (e.g. "@contrib/html.tpl")
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Severities to report, comma-separated
    #[arg(short, long)]
    pub severity: Option<String>,

    /// Vulnerability types to report, comma-separated (os, library)
    #[arg(long)]
    pub vuln_type: Option<String>,

    /// Security checks to run, comma-separated (vuln, config, secret)
    #[arg(long)]
    pub security_checks: Option<String>,

    /// Path to the ignore file
    #[arg(long = "ignorefile")]
    pub ignore_file: Option<String>,

    /// Only report vulnerabilities that have a fix (`--ignore-unfixed=false` overrides the config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub ignore_unfixed: Option<bool>,

    /// Exit code to use when findings are reported
    #[arg(long)]
    pub exit_code: Option<i32>,

    /// List every package, not only the vulnerable ones (`--list-all-pkgs=false` overrides the config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub list_all_pkgs: Option<bool>,

    /// Path to a config file (defaults to ./report-opts.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the draft option record. Flags win over the config file, and
    /// the config file wins over built-in defaults.
    pub fn into_report_option(self, config: Option<&ConfigFile>) -> ReportOption {
        let default_config = ConfigFile::default();
        let config = config.unwrap_or(&default_config);
        let list = |flag: Option<String>, configured: &Option<ListValue>, default: &str| {
            flag.or_else(|| configured.as_ref().map(ListValue::to_list_string))
                .unwrap_or_else(|| default.to_string())
        };

        ReportOption {
            output_path: self
                .output
                .or_else(|| config.output.clone())
                .unwrap_or_default(),
            format: self
                .format
                .or_else(|| config.report_format())
                .or(Some(ReportFormat::Table)),
            template: self
                .template
                .or_else(|| config.template.clone())
                .unwrap_or_default(),
            severity_list: list(self.severity, &config.severity, &default_severities()),
            vuln_type_list: list(self.vuln_type, &config.vuln_type, DEFAULT_VULN_TYPES),
            security_check_list: list(
                self.security_checks,
                &config.security_checks,
                DEFAULT_SECURITY_CHECKS,
            ),
            ignore_file: self
                .ignore_file
                .or_else(|| config.ignore_file.clone())
                .unwrap_or_default(),
            ignore_unfixed: self.ignore_unfixed.or(config.ignore_unfixed).unwrap_or(false),
            exit_code: self.exit_code.or(config.exit_code).unwrap_or(0),
            list_all_pkgs: self.list_all_pkgs.or(config.list_all_pkgs).unwrap_or(false),
            ..Default::default()
        }
    }
}

/// Every severity, comma-separated
pub fn default_severities() -> String {
    Severity::ALL
        .iter()
        .map(Severity::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["report-opts"]).unwrap();
        assert!(args.format.is_none());
        assert!(args.list_all_pkgs.is_none());
        assert!(args.ignore_unfixed.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_parse_full_args() {
        let args = Args::try_parse_from([
            "report-opts",
            "-f",
            "cyclonedx",
            "-t",
            "@contrib/gitlab.tpl",
            "-o",
            "out.json",
            "-s",
            "HIGH,CRITICAL",
            "--vuln-type",
            "os",
            "--security-checks",
            "vuln,config",
            "--ignorefile",
            ".trivyignore",
            "--ignore-unfixed",
            "--exit-code",
            "1",
            "--list-all-pkgs",
            "-d",
        ])
        .unwrap();

        assert_eq!(args.format, Some(ReportFormat::CycloneDx));
        assert_eq!(args.template.as_deref(), Some("@contrib/gitlab.tpl"));
        assert_eq!(args.output.as_deref(), Some("out.json"));
        assert_eq!(args.severity.as_deref(), Some("HIGH,CRITICAL"));
        assert_eq!(args.security_checks.as_deref(), Some("vuln,config"));
        assert_eq!(args.ignore_file.as_deref(), Some(".trivyignore"));
        assert_eq!(args.ignore_unfixed, Some(true));
        assert_eq!(args.exit_code, Some(1));
        assert_eq!(args.list_all_pkgs, Some(true));
        assert!(args.debug);
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = Args::try_parse_from(["report-opts", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_explicit_false_flags() {
        let args = Args::try_parse_from([
            "report-opts",
            "--list-all-pkgs=false",
            "--ignore-unfixed=false",
        ])
        .unwrap();
        assert_eq!(args.list_all_pkgs, Some(false));
        assert_eq!(args.ignore_unfixed, Some(false));
    }

    #[test]
    fn test_parse_lowercase_format_only() {
        assert!(Args::try_parse_from(["report-opts", "-f", "JSON"]).is_err());
        assert!(Args::try_parse_from(["report-opts", "-f", "json"]).is_ok());
    }

    #[test]
    fn test_false_flags_override_config() {
        let config = ConfigFile {
            list_all_pkgs: Some(true),
            ignore_unfixed: Some(true),
            ..Default::default()
        };
        let args = Args {
            list_all_pkgs: Some(false),
            ignore_unfixed: Some(false),
            ..Default::default()
        };

        let option = args.into_report_option(Some(&config));

        assert!(!option.list_all_pkgs);
        assert!(!option.ignore_unfixed);
    }

    #[test]
    fn test_defaults_without_config() {
        let option = Args::default().into_report_option(None);
        assert_eq!(option.format, Some(ReportFormat::Table));
        assert_eq!(option.severity_list, "UNKNOWN,LOW,MEDIUM,HIGH,CRITICAL");
        assert_eq!(option.vuln_type_list, DEFAULT_VULN_TYPES);
        assert_eq!(option.security_check_list, DEFAULT_SECURITY_CHECKS);
        assert!(option.output_path.is_empty());
        assert!(option.template.is_empty());
        assert_eq!(option.exit_code, 0);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            severity: Some(ListValue::Items(vec![
                "HIGH".to_string(),
                "CRITICAL".to_string(),
            ])),
            list_all_pkgs: Some(true),
            exit_code: Some(5),
            ..Default::default()
        };

        let option = Args::default().into_report_option(Some(&config));

        assert_eq!(option.format, Some(ReportFormat::Json));
        assert_eq!(option.severity_list, "HIGH,CRITICAL");
        assert!(option.list_all_pkgs);
        assert_eq!(option.exit_code, 5);
    }

    #[test]
    fn test_flags_override_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            severity: Some(ListValue::Joined("LOW".to_string())),
            template: Some("@contrib/gitlab.tpl".to_string()),
            ..Default::default()
        };
        let args = Args {
            format: Some(ReportFormat::Sarif),
            severity: Some("CRITICAL".to_string()),
            ..Default::default()
        };

        let option = args.into_report_option(Some(&config));

        assert_eq!(option.format, Some(ReportFormat::Sarif));
        assert_eq!(option.severity_list, "CRITICAL");
        assert_eq!(option.template, "@contrib/gitlab.tpl");
    }
}
