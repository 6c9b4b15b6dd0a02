use std::ffi::CString;
use std::io;
use std::ptr;

use libc::{c_char, c_int, pid_t};
use log::{debug, warn};

use super::ProcessError;
use crate::input::CommandLine;

const EXEC_FAILED: &[u8] = b"Command execution failed\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// The child ran to completion.
    Foreground,
    /// The child is still running; it is collected by a later [`ProcessLauncher::reap`].
    Background(pid_t),
}

/// Forks and execs external commands, looked up through `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    pub fn launch(&self, command: &CommandLine) -> Result<Launch, ProcessError> {
        if command.is_empty() {
            return Err(ProcessError::InvalidArgument(String::new()));
        }

        // Everything the child needs is built before forking.
        let argv = command
            .args
            .iter()
            .map(|arg| {
                CString::new(arg.as_bytes()).map_err(|_| ProcessError::InvalidArgument(arg.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut argv_ptrs: Vec<*const c_char> = argv.iter().map(|arg| arg.as_ptr()).collect();
        argv_ptrs.push(ptr::null());

        let pid = unsafe { libc::fork() };
        match pid {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => unsafe { exec_child(&argv_ptrs) },
            pid => {
                debug!(
                    "spawned {} as pid {}{}",
                    command.args[0],
                    pid,
                    if command.background { " (background)" } else { "" }
                );
                if command.background {
                    return Ok(Launch::Background(pid));
                }
                self.wait_for(pid)?;
                Ok(Launch::Foreground)
            }
        }
    }

    fn wait_for(&self, pid: pid_t) -> Result<(), ProcessError> {
        let mut status: c_int = 0;
        loop {
            let rc = unsafe { libc::waitpid(pid, &mut status, 0) };
            if rc == pid {
                debug!("pid {} finished with raw status {}", pid, status);
                return Ok(());
            }

            let err = io::Error::last_os_error();
            match err.raw_os_error() {
                Some(libc::EINTR) => continue,
                Some(libc::ECHILD) => {
                    warn!("pid {} was collected elsewhere", pid);
                    return Ok(());
                }
                _ => return Err(ProcessError::Wait(err)),
            }
        }
    }

    /// Collects every child that has already exited, without blocking.
    pub fn reap(&self) -> usize {
        let mut reaped = 0;
        loop {
            let pid = unsafe { libc::waitpid(-1, ptr::null_mut(), libc::WNOHANG) };
            if pid <= 0 {
                break;
            }
            debug!("reaped pid {}", pid);
            reaped += 1;
        }
        reaped
    }
}

/// Runs in the forked child: only async-signal-safe calls from here on.
unsafe fn exec_child(argv: &[*const c_char]) -> ! {
    libc::execvp(argv[0], argv.as_ptr());
    libc::write(
        libc::STDERR_FILENO,
        EXEC_FAILED.as_ptr().cast(),
        EXEC_FAILED.len(),
    );
    libc::_exit(libc::EXIT_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tokenize;
    use std::thread;
    use std::time::Duration;

    fn is_gone(pid: pid_t) -> bool {
        let rc = unsafe { libc::kill(pid, 0) };
        rc == -1 && io::Error::last_os_error().raw_os_error() == Some(libc::ESRCH)
    }

    #[test]
    fn test_foreground_waits_for_child() {
        let launcher = ProcessLauncher::new();
        let result = launcher.launch(&tokenize("true")).unwrap();
        assert_eq!(result, Launch::Foreground);
    }

    #[test]
    fn test_missing_executable_does_not_affect_parent() {
        let launcher = ProcessLauncher::new();
        let result = launcher.launch(&tokenize("vesh-no-such-program-x7"));
        assert!(matches!(result, Ok(Launch::Foreground)));
    }

    #[test]
    fn test_nul_byte_rejected_before_fork() {
        let launcher = ProcessLauncher::new();
        let command = CommandLine {
            args: vec!["ec\0ho".to_string()],
            background: false,
        };
        assert!(matches!(
            launcher.launch(&command),
            Err(ProcessError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_background_child_is_reaped() {
        let launcher = ProcessLauncher::new();
        let pid = match launcher.launch(&tokenize("true &")).unwrap() {
            Launch::Background(pid) => pid,
            other => panic!("expected background launch, got {:?}", other),
        };

        let mut gone = false;
        for _ in 0..500 {
            launcher.reap();
            if is_gone(pid) {
                gone = true;
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(gone, "pid {} was never reaped", pid);
    }

    #[test]
    fn test_background_does_not_block() {
        let launcher = ProcessLauncher::new();
        let pid = match launcher.launch(&tokenize("sleep 30 &")).unwrap() {
            Launch::Background(pid) => pid,
            other => panic!("expected background launch, got {:?}", other),
        };

        // Still running, so a sweep must return without collecting it.
        assert!(!is_gone(pid));
        launcher.reap();
        assert!(!is_gone(pid));

        unsafe { libc::kill(pid, libc::SIGKILL) };
        unsafe { libc::waitpid(pid, ptr::null_mut(), 0) };
    }
}
