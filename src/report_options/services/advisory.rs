/// A log line produced by a resolution check.
///
/// Checks return advisories instead of logging directly so the resolver
/// decides where and in which order they are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    Info(String),
    Warn(String),
    Debug(String),
}

impl Advisory {
    pub fn message(&self) -> &str {
        match self {
            Advisory::Info(message) | Advisory::Warn(message) | Advisory::Debug(message) => {
                message
            }
        }
    }
}
