pub mod config;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod shell;
pub mod stats;

pub mod core;
pub mod input;
pub mod process;
