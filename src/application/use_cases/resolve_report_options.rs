use crate::ports::inbound::ReportOptionPort;
use crate::ports::outbound::{ReportLogger, SinkOpener};
use crate::report_options::domain::{OutputSink, ReportOption};
use crate::report_options::services::{Advisory, CompatibilityChecker, ListParser};
use crate::shared::Result;
use std::path::Path;

/// ResolveReportOptionsUseCase - Validates and normalizes report options
///
/// Runs a fixed pipeline over a draft `ReportOption`:
/// 1. parse the severity, vulnerability-type and security-check lists
/// 2. resolve the output destination
/// 3. reconcile the format with list-all-packages mode
/// 4. reconcile the format with the template
/// 5. echo the resolved severities at debug level
///
/// Advisories are logged in that order. Only steps 2 and 3 can fail, and
/// the pipeline stops at the first failure.
///
/// # Type Parameters
/// * `SO` - SinkOpener implementation
/// * `L` - ReportLogger implementation
pub struct ResolveReportOptionsUseCase<SO, L> {
    sink_opener: SO,
    logger: L,
}

impl<SO, L> ResolveReportOptionsUseCase<SO, L>
where
    SO: SinkOpener,
    L: ReportLogger,
{
    /// Creates a new ResolveReportOptionsUseCase with injected dependencies
    pub fn new(sink_opener: SO, logger: L) -> Self {
        Self {
            sink_opener,
            logger,
        }
    }

    /// Resolves `option` in place
    ///
    /// # Arguments
    /// * `option` - Draft record to normalize
    /// * `default_sink` - Destination used when `option.output_path` is empty
    pub fn execute(&self, option: &mut ReportOption, default_sink: OutputSink) -> Result<()> {
        let advisories = ListParser::apply(option);
        self.emit(&advisories);

        option.output = Some(self.resolve_sink(&option.output_path, default_sink)?);

        let advisories = CompatibilityChecker::check_list_all_pkgs(option)?;
        self.emit(&advisories);

        let advisories = CompatibilityChecker::check_template(option);
        self.emit(&advisories);

        if self.logger.is_debug_enabled() {
            self.emit(&[Advisory::Debug(format!(
                "Severities: {}",
                option.severity_summary()
            ))]);
        }

        Ok(())
    }

    fn resolve_sink(&self, output_path: &str, default_sink: OutputSink) -> Result<OutputSink> {
        if output_path.is_empty() {
            return Ok(default_sink);
        }
        self.sink_opener.open(Path::new(output_path))
    }

    fn emit(&self, advisories: &[Advisory]) {
        for advisory in advisories {
            match advisory {
                Advisory::Info(message) => self.logger.info(message),
                Advisory::Warn(message) => self.logger.warn(message),
                Advisory::Debug(message) => self.logger.debug(message),
            }
        }
    }
}

impl<SO, L> ReportOptionPort for ResolveReportOptionsUseCase<SO, L>
where
    SO: SinkOpener,
    L: ReportLogger,
{
    fn resolve(&self, option: &mut ReportOption, default_sink: OutputSink) -> Result<()> {
        self.execute(option, default_sink)
    }
}
