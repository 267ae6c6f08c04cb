pub mod output_sink;
pub mod report_format;
pub mod report_option;
pub mod scan_scope;
pub mod severity;

pub use output_sink::OutputSink;
pub use report_format::ReportFormat;
pub use report_option::ReportOption;
pub use scan_scope::{SecurityCheck, VulnType};
pub use severity::{Severity, SeverityParseError};
