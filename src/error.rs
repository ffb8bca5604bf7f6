use thiserror::Error;

/// Failures raised by the decoration layer itself.
///
/// A wrapped target's own failures never show up here: they travel inside
/// the target's output value, or unwind as panics, exactly as the target
/// produced them.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Sink(#[from] LoggingSinkError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
    #[error("log channel name must not be empty")]
    EmptyName,
    #[error("log message must not be empty")]
    EmptyMessage,
    #[error("logging is already configured with different settings")]
    AlreadyConfigured,
    #[error("cannot build log output: {0}")]
    Output(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingSinkError {
    #[error("logging has not been configured")]
    NotConfigured,
    #[error("logging has been shut down")]
    ShutDown,
    #[error("logging state lock poisoned")]
    Poisoned,
    #[error("log sink failed: {0}")]
    Other(String),
}
