use super::{Command, CommandContext, CommandError, Outcome};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// `cd`, `cd ~`, `cd -`, `cd ~/sub/dir` or `cd <path>`.
#[derive(Clone)]
pub struct CdCommand {
    line_length: usize,
}

impl CdCommand {
    pub fn new(line_length: usize) -> Self {
        Self { line_length }
    }

    fn under_home(&self, home: &Path, rest: &str) -> Result<PathBuf, CommandError> {
        let mut joined = OsString::from(home.as_os_str());
        joined.push("/");
        joined.push(rest);
        if joined.len() >= self.line_length {
            return Err(CommandError::PathTooLong);
        }
        Ok(PathBuf::from(joined))
    }
}

impl Command for CdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let dirs = &mut ctx.state.dirs;
        let target = match args {
            [] => dirs.home().to_path_buf(),
            [arg] if arg == "~" => dirs.home().to_path_buf(),
            [arg] if arg == "-" => {
                dirs.swap_previous().map_err(CommandError::ChangeDirectory)?;
                return Ok(Outcome::Continue);
            }
            [arg] => match arg.strip_prefix("~/") {
                Some(rest) => self.under_home(dirs.home(), rest)?,
                None => PathBuf::from(arg),
            },
            _ => {
                return Err(CommandError::InvalidArguments(
                    "cd takes exactly one argument",
                ))
            }
        };

        dirs.change_to(&target)
            .map_err(CommandError::ChangeDirectory)?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::env::DirectoryState;
    use crate::core::state::ShellState;
    use serial_test::serial;
    use std::env;

    struct Fixture {
        state: ShellState,
        start: PathBuf,
        home: tempfile::TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let start = env::current_dir().unwrap();
            let home = tempfile::tempdir().unwrap();
            let dirs = DirectoryState::new(home.path().canonicalize().unwrap(), start.clone());
            Self {
                state: ShellState::new(&Config::default(), dirs),
                start,
                home,
            }
        }

        fn cd(&mut self, args: &[&str]) -> Result<Outcome, CommandError> {
            let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            let mut out = Vec::new();
            let mut ctx = CommandContext {
                state: &mut self.state,
                out: &mut out,
            };
            CdCommand::new(1024).execute(&mut ctx, &args)
        }

        fn home(&self) -> PathBuf {
            self.home.path().canonicalize().unwrap()
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.start);
        }
    }

    #[test]
    #[serial]
    fn test_cd_home_forms() {
        let mut fx = Fixture::new();
        std::fs::create_dir(fx.home().join("sub")).unwrap();

        fx.cd(&[]).unwrap();
        assert_eq!(env::current_dir().unwrap(), fx.home());

        env::set_current_dir("/").unwrap();
        fx.cd(&["~"]).unwrap();
        assert_eq!(env::current_dir().unwrap(), fx.home());

        fx.cd(&["~/sub"]).unwrap();
        assert_eq!(env::current_dir().unwrap(), fx.home().join("sub"));
        assert_eq!(fx.state.dirs.previous(), fx.home());
    }

    #[test]
    #[serial]
    fn test_cd_dash_swaps() {
        let tmp = tempfile::tempdir().unwrap();
        let mut fx = Fixture::new();
        let a = fx.home();
        let b = tmp.path().canonicalize().unwrap();

        env::set_current_dir(&a).unwrap();
        fx.cd(&[b.to_str().unwrap()]).unwrap();

        fx.cd(&["-"]).unwrap();
        assert_eq!(env::current_dir().unwrap(), a);
        fx.cd(&["-"]).unwrap();
        assert_eq!(env::current_dir().unwrap(), b);
    }

    #[test]
    #[serial]
    fn test_cd_relative_path() {
        let mut fx = Fixture::new();
        std::fs::create_dir(fx.home().join("rel")).unwrap();
        env::set_current_dir(fx.home()).unwrap();

        fx.cd(&["rel"]).unwrap();
        assert_eq!(env::current_dir().unwrap(), fx.home().join("rel"));
    }

    #[test]
    #[serial]
    fn test_cd_failure_leaves_state() {
        let mut fx = Fixture::new();
        let before = env::current_dir().unwrap();
        let previous = fx.state.dirs.previous().to_path_buf();

        let result = fx.cd(&["/path/that/does/not/exist"]);
        assert!(matches!(result, Err(CommandError::ChangeDirectory(_))));
        assert_eq!(env::current_dir().unwrap(), before);
        assert_eq!(fx.state.dirs.previous(), previous);
    }

    #[test]
    #[serial]
    fn test_cd_argument_count_and_length() {
        let mut fx = Fixture::new();
        assert!(matches!(
            fx.cd(&["a", "b"]),
            Err(CommandError::InvalidArguments(_))
        ));

        let long = format!("~/{}", "d".repeat(1100));
        assert!(matches!(fx.cd(&[long.as_str()]), Err(CommandError::PathTooLong)));
    }
}
