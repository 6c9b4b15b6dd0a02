use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use libc::c_int;
use signal_hook::consts::SIGINT;

use crate::process::ProcessError;

/// Set asynchronously when SIGINT arrives; read and cleared by the loop.
///
/// The handler installed by `signal_hook::flag` only stores `true`.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// A flag with no handler behind it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the SIGINT handler and makes SIGINT interrupt blocking reads.
    pub fn install() -> Result<Self, ProcessError> {
        let flag = Self::new();
        signal_hook::flag::register(SIGINT, Arc::clone(&flag.raised))
            .map_err(ProcessError::SignalError)?;
        interrupt_syscalls(SIGINT).map_err(ProcessError::SignalError)?;
        Ok(flag)
    }

    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }
}

/// Clears `SA_RESTART` on the current disposition of `signal`, keeping its
/// handler, so a blocked `read(2)` returns `EINTR`.
fn interrupt_syscalls(signal: c_int) -> io::Result<()> {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        if libc::sigaction(signal, std::ptr::null(), &mut action) != 0 {
            return Err(io::Error::last_os_error());
        }
        action.sa_flags &= !libc::SA_RESTART;
        if libc::sigaction(signal, &action, std::ptr::null_mut()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_take_clears() {
        let flag = InterruptFlag::new();
        assert!(!flag.take());
        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    #[serial]
    fn test_sigint_sets_flag_without_restart() {
        let flag = InterruptFlag::install().unwrap();
        signal_hook::low_level::raise(SIGINT).unwrap();
        assert!(flag.take());
        assert!(!flag.is_raised());

        let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::sigaction(SIGINT, std::ptr::null(), &mut action) };
        assert_eq!(rc, 0);
        assert_eq!(action.sa_flags & libc::SA_RESTART, 0);
    }
}
