mod paths;

pub use paths::{home_from_account, DirectoryState};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("getcwd() error: {0}")]
    CurrentDir(#[from] std::io::Error),
}
