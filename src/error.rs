use thiserror::Error;

use crate::core::env::EnvError;
use crate::process::ProcessError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unable to read command. Terminating: {0}")]
    Read(#[source] std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("Process error: {0}")]
    ProcessError(#[from] ProcessError),
    #[error("Flag error: {0}")]
    FlagError(String),
}
