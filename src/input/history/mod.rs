pub mod resolver;

use std::io::{self, Write};

use log::debug;
use thiserror::Error;

pub use resolver::{resolve, Resolution, ResolveError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No commands in history")]
    Empty,
    #[error("Invalid command number")]
    InvalidNumber,
}

/// Fixed-capacity ring of past command lines with absolute numbering.
///
/// Entry `i` lives in slot `i % capacity`; only the newest `capacity`
/// entries can be retrieved.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    slots: Vec<String>,
    count: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![String::new(); capacity.max(1)],
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total number of commands appended since the last clear.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn append(&mut self, line: impl Into<String>) {
        let slot = self.count % self.capacity();
        self.slots[slot] = line.into();
        debug!("history[{}] = {:?}", self.count, self.slots[slot]);
        self.count += 1;
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        if index >= self.count || index < self.oldest() {
            return None;
        }
        Some(&self.slots[index % self.capacity()])
    }

    pub fn last(&self) -> Option<&str> {
        self.count.checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.slots.iter_mut().for_each(String::clear);
        debug!("history cleared");
    }

    /// The visible window, newest first.
    pub fn list_recent(&self) -> Vec<(usize, &str)> {
        (self.oldest()..self.count)
            .rev()
            .map(|index| (index, self.slots[index % self.capacity()].as_str()))
            .collect()
    }

    pub fn write_recent(&self, out: &mut dyn Write) -> io::Result<()> {
        for (index, line) in self.list_recent() {
            writeln!(out, "{}\t{}", index, line)?;
        }
        Ok(())
    }

    fn oldest(&self) -> usize {
        self.count.saturating_sub(self.capacity())
    }
}
