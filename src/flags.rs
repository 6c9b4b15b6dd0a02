use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        for (name, short, long, description) in [
            ("help", "-h", "--help", "Print this help message"),
            ("version", "-v", "--version", "Show version information"),
            ("debug", "-d", "--debug", "Enable debug logging"),
            ("no-color", "-n", "--no-color", "Disable colored error output"),
        ] {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    value: None,
                },
            );
        }

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;
            flag.value = Some("true".to_string());
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn print_help(&self) {
        println!("Usage: vesh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_and_long_forms() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-d", "--no-color"])).unwrap();
        assert!(flags.is_set("debug"));
        assert!(flags.is_set("no-color"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["--frobnicate"]));
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_nothing_set_by_default() {
        let flags = Flags::default();
        for name in ["help", "version", "debug", "no-color"] {
            assert!(!flags.is_set(name));
        }
    }
}
