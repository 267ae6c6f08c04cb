/// Console adapters for log output
mod stderr_logger;

pub use stderr_logger::StderrLogger;
