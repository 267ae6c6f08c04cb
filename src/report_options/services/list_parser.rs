use super::Advisory;
use crate::report_options::domain::{ReportOption, SecurityCheck, Severity, VulnType};
use std::str::FromStr;

/// ListParser - Turns the comma-separated draft fields into typed sequences
///
/// Severities never lose a token: an unrecognized one becomes
/// `Severity::Unknown` and produces a warning. Vulnerability types and
/// security checks keep recognized tokens only and drop the rest silently.
pub struct ListParser;

impl ListParser {
    /// Splits a comma-separated list. An empty string yields no tokens;
    /// empty tokens between commas are kept.
    pub fn split(list: &str) -> Vec<&str> {
        if list.is_empty() {
            return Vec::new();
        }
        list.split(',').collect()
    }

    /// Parses severities in order, one entry per token
    pub fn parse_severities(list: &str) -> (Vec<Severity>, Vec<Advisory>) {
        let mut severities = Vec::new();
        let mut advisories = Vec::new();
        for token in Self::split(list) {
            match Severity::from_str(token) {
                Ok(severity) => severities.push(severity),
                Err(e) => {
                    advisories.push(Advisory::Warn(format!("unknown severity option: {}", e)));
                    severities.push(Severity::Unknown);
                }
            }
        }
        (severities, advisories)
    }

    pub fn parse_vuln_types(list: &str) -> Vec<VulnType> {
        Self::split(list)
            .into_iter()
            .filter_map(|token| VulnType::from_str(token).ok())
            .collect()
    }

    pub fn parse_security_checks(list: &str) -> Vec<SecurityCheck> {
        Self::split(list)
            .into_iter()
            .filter_map(|token| SecurityCheck::from_str(token).ok())
            .collect()
    }

    /// Fills the parsed list fields of `option` from its raw lists
    pub fn apply(option: &mut ReportOption) -> Vec<Advisory> {
        let (severities, advisories) = Self::parse_severities(&option.severity_list);
        option.severities = severities;
        option.vuln_types = Self::parse_vuln_types(&option.vuln_type_list);
        option.security_checks = Self::parse_security_checks(&option.security_check_list);
        advisories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty_string_yields_nothing() {
        assert!(ListParser::split("").is_empty());
    }

    #[test]
    fn test_split_keeps_empty_tokens() {
        assert_eq!(ListParser::split("a,,b"), vec!["a", "", "b"]);
        assert_eq!(ListParser::split("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_parse_severities_known() {
        let (severities, advisories) = ListParser::parse_severities("LOW,CRITICAL");
        assert_eq!(severities, vec![Severity::Low, Severity::Critical]);
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_parse_severities_unknown_token_becomes_unknown() {
        let (severities, advisories) = ListParser::parse_severities("CRITICAL,INVALID");
        assert_eq!(severities, vec![Severity::Critical, Severity::Unknown]);
        assert_eq!(
            advisories,
            vec![Advisory::Warn(
                "unknown severity option: unknown severity: INVALID".to_string()
            )]
        );
    }

    #[test]
    fn test_parse_severities_keeps_duplicates_and_order() {
        let (severities, _) = ListParser::parse_severities("HIGH,LOW,HIGH");
        assert_eq!(
            severities,
            vec![Severity::High, Severity::Low, Severity::High]
        );
    }

    #[test]
    fn test_parse_severities_length_matches_token_count() {
        for list in ["CRITICAL", "A,B,C", "HIGH,,LOW", "x,"] {
            let (severities, _) = ListParser::parse_severities(list);
            assert_eq!(severities.len(), list.split(',').count(), "{}", list);
        }
    }

    #[test]
    fn test_parse_vuln_types_drops_unknown_silently() {
        assert_eq!(
            ListParser::parse_vuln_types("os,library"),
            vec![VulnType::Os, VulnType::Library]
        );
        assert_eq!(ListParser::parse_vuln_types("os,kernel"), vec![VulnType::Os]);
        assert!(ListParser::parse_vuln_types("").is_empty());
    }

    #[test]
    fn test_parse_security_checks_drops_unknown_silently() {
        assert_eq!(
            ListParser::parse_security_checks("vuln,config,secret"),
            vec![
                SecurityCheck::Vuln,
                SecurityCheck::Config,
                SecurityCheck::Secret
            ]
        );
        assert_eq!(
            ListParser::parse_security_checks("license,config"),
            vec![SecurityCheck::Config]
        );
    }

    #[test]
    fn test_apply_fills_parsed_fields() {
        let mut option = ReportOption {
            severity_list: "CRITICAL".to_string(),
            vuln_type_list: "os".to_string(),
            security_check_list: "vuln".to_string(),
            ..Default::default()
        };
        let advisories = ListParser::apply(&mut option);
        assert!(advisories.is_empty());
        assert_eq!(option.severities, vec![Severity::Critical]);
        assert_eq!(option.vuln_types, vec![VulnType::Os]);
        assert_eq!(option.security_checks, vec![SecurityCheck::Vuln]);
    }
}
