use crate::flags::Flags;

/// Input line budget including a terminator byte, so a single line holds at
/// most `LINE_LENGTH - 1` bytes. Also bounds `cd ~/...` targets.
pub const LINE_LENGTH: usize = 1024;

/// Number of history entries retrievable at any time.
pub const HISTORY_DEPTH: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub line_length: usize,
    pub history_depth: usize,
    pub color: bool,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_length: LINE_LENGTH,
            history_depth: HISTORY_DEPTH,
            color: true,
            debug: false,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            color: !flags.is_set("no-color"),
            debug: flags.is_set("debug"),
            ..Self::default()
        }
    }

    /// Longest line the reader hands to the tokenizer.
    pub fn max_line_bytes(&self) -> usize {
        self.line_length.saturating_sub(1)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_buffer_sizes() {
        let config = Config::default();
        assert_eq!(config.max_line_bytes(), 1023);
        assert_eq!(config.history_depth, 10);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_from_flags() {
        let mut flags = Flags::new();
        flags
            .parse(&["--debug".to_string(), "-n".to_string()])
            .unwrap();
        let config = Config::from_flags(&flags);
        assert!(config.debug);
        assert!(!config.color);
        assert_eq!(config.log_filter(), "debug");
    }
}
