use thiserror::Error;

pub mod executor;
pub mod signal;

pub use executor::{Launch, ProcessLauncher};
pub use signal::InterruptFlag;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Fork failed: {0}")]
    Fork(#[source] std::io::Error),
    #[error("Wait failed: {0}")]
    Wait(#[source] std::io::Error),
    #[error("Invalid argument: {0:?}")]
    InvalidArgument(String),
    #[error("Signal error: {0}")]
    SignalError(#[source] std::io::Error),
}
