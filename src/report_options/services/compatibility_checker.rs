use super::Advisory;
use crate::report_options::domain::{ReportFormat, ReportOption};
use crate::shared::error::ReportOptionError;

/// CompatibilityChecker - Cross-field rules between format, template and
/// list-all-packages mode
pub struct CompatibilityChecker;

impl CompatibilityChecker {
    /// Forces list-all-packages on for the SBOM formats and rejects it for
    /// the table format.
    ///
    /// # Errors
    /// `ReportOptionError::ListAllPkgsWithTable` when the effective format is
    /// `table` and list-all-packages is requested.
    pub fn check_list_all_pkgs(
        option: &mut ReportOption,
    ) -> Result<Vec<Advisory>, ReportOptionError> {
        let mut advisories = Vec::new();
        let format = option.effective_format();

        if format.enables_list_all_pkgs() && !option.list_all_pkgs {
            option.list_all_pkgs = true;
            advisories.push(Advisory::Info(Self::auto_list_all_pkgs_message()));
        }

        if format == ReportFormat::Table && option.list_all_pkgs {
            return Err(ReportOptionError::ListAllPkgsWithTable);
        }

        Ok(advisories)
    }

    /// Warns when a template is given without the template format, or the
    /// other way round. The template field is left untouched.
    pub fn check_template(option: &ReportOption) -> Vec<Advisory> {
        let has_template = !option.template.is_empty();

        match option.format {
            Some(ReportFormat::Template) if !has_template => vec![Advisory::Warn(
                "'--format template' is ignored because '--template' is not specified. Specify '--template' option when you use '--format template'.".to_string(),
            )],
            Some(ReportFormat::Template) => Vec::new(),
            None if has_template => vec![Advisory::Warn(
                "'--template' is ignored because '--format template' is not specified. Use '--template' option with '--format template' option.".to_string(),
            )],
            Some(format) if has_template => vec![Advisory::Warn(format!(
                "'--template' is ignored because '--format {}' is specified. Use '--template' option with '--format template' option.",
                format
            ))],
            _ => Vec::new(),
        }
    }

    fn auto_list_all_pkgs_message() -> String {
        let names: Vec<String> = ReportFormat::LIST_ALL_PKGS_FORMATS
            .iter()
            .map(|format| format!("'{}'", format))
            .collect();
        match names.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!(
                "{}, and {} automatically enables '--list-all-pkgs'.",
                rest.join(", "),
                last
            ),
            _ => format!("{} automatically enables '--list-all-pkgs'.", names.join(", ")),
        }
    }
}
