use std::io;
use thiserror::Error;

///Ways logging can fail. Logging at `Level::Panic` is not one of them: that path always panics.
#[derive(Debug, Error)]
pub enum LogError {
    ///the sink refused the line.
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),
    ///another `log` logger got there first.
    #[error("could not install as the `log` logger: {0}")]
    Install(#[from] log::SetLoggerError),
}

pub type LogResult<T> = Result<T, LogError>;

///returned when a string names no level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);
