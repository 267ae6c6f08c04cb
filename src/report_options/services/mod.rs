mod advisory;
mod compatibility_checker;
mod list_parser;

pub use advisory::Advisory;
pub use compatibility_checker::CompatibilityChecker;
pub use list_parser::ListParser;
