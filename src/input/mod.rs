pub mod history;
pub mod reader;
pub mod tokenizer;

pub use history::HistoryStore;
pub use reader::{LineReader, RawStdin, ReadOutcome};
pub use tokenizer::{tokenize, CommandLine};
