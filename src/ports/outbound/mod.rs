/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the resolver uses to reach the
/// console and the file system.
pub mod output_presenter;
pub mod report_logger;
pub mod sink_opener;

pub use output_presenter::OutputPresenter;
pub use report_logger::ReportLogger;
pub use sink_opener::SinkOpener;
