/// Use cases module containing application business logic orchestration
mod resolve_report_options;

pub use resolve_report_options::ResolveReportOptionsUseCase;
