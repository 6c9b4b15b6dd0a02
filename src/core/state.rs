use crate::config::Config;
use crate::core::env::{DirectoryState, EnvError};
use crate::input::HistoryStore;

/// Everything the loop mutates between cycles.
pub struct ShellState {
    pub history: HistoryStore,
    pub dirs: DirectoryState,
}

impl ShellState {
    pub fn new(config: &Config, dirs: DirectoryState) -> Self {
        Self {
            history: HistoryStore::new(config.history_depth),
            dirs,
        }
    }

    pub fn from_process(config: &Config) -> Result<Self, EnvError> {
        Ok(Self::new(config, DirectoryState::from_process()?))
    }
}
