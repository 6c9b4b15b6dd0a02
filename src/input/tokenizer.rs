const SEPARATORS: [char; 3] = [' ', '\t', '\n'];
const BACKGROUND_MARKER: &str = "&";

/// One parsed input line: the argument vector and whether it runs in the
/// background.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub args: Vec<String>,
    pub background: bool,
}

impl CommandLine {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Arguments after the program name.
    pub fn params(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    /// The form stored in history: tokens joined by single spaces, without
    /// the background marker.
    pub fn to_history_entry(&self) -> String {
        self.args.join(" ")
    }
}

pub fn tokenize(line: &str) -> CommandLine {
    let mut args: Vec<String> = line
        .split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();

    let background = args.last().is_some_and(|last| last == BACKGROUND_MARKER);
    if background {
        args.pop();
    }

    CommandLine { args, background }
}
