/// Mock implementations for testing
mod mock_report_logger;
mod mock_sink_opener;

pub use mock_report_logger::{LogLevel, MockReportLogger};
pub use mock_sink_opener::MockSinkOpener;
