use super::EnvError;
use log::{debug, warn};
use std::env;
use std::ffi::{CStr, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

const PASSWD_BUFFER: usize = 4096;

/// Home directory from the invoking user's account record, falling back to
/// the platform lookup when the record is unavailable.
pub fn home_from_account() -> Result<PathBuf, EnvError> {
    passwd_home()
        .or_else(dirs::home_dir)
        .ok_or(EnvError::HomeDirNotFound)
}

fn passwd_home() -> Option<PathBuf> {
    let mut buffer = vec![0 as libc::c_char; PASSWD_BUFFER];
    let mut record: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let rc = unsafe {
        libc::getpwuid_r(
            libc::getuid(),
            &mut record,
            buffer.as_mut_ptr(),
            buffer.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() || record.pw_dir.is_null() {
        return None;
    }

    // pw_dir points into `buffer`, which is still alive here.
    let dir = unsafe { CStr::from_ptr(record.pw_dir) };
    Some(PathBuf::from(OsStr::from_bytes(dir.to_bytes())))
}

/// Home and previous directory. The live working directory belongs to the
/// process and is always read back from the OS.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    home: PathBuf,
    previous: PathBuf,
}

impl DirectoryState {
    pub fn new(home: PathBuf, previous: PathBuf) -> Self {
        Self { home, previous }
    }

    /// Resolves home once and starts with `previous` at the current directory.
    pub fn from_process() -> Result<Self, EnvError> {
        let home = home_from_account()?;
        let previous = env::current_dir()?;
        Ok(Self::new(home, previous))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn previous(&self) -> &Path {
        &self.previous
    }

    /// Changes directory and, on success only, remembers where we came from.
    pub fn change_to(&mut self, target: &Path) -> io::Result<()> {
        let before = env::current_dir();
        env::set_current_dir(target)?;
        debug!("cd {}", target.display());
        match before {
            Ok(before) => self.previous = before,
            Err(e) => warn!(
                "previous directory left at {}: getcwd() error: {}",
                self.previous.display(),
                e
            ),
        }
        Ok(())
    }

    /// Goes back to the previous directory, swapping previous and current.
    pub fn swap_previous(&mut self) -> io::Result<()> {
        let target = self.previous.clone();
        self.change_to(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_home_lookup() {
        let home = home_from_account().unwrap();
        assert!(home.is_absolute());
    }

    #[test]
    #[serial]
    fn test_previous_tracks_successful_changes() {
        let start = env::current_dir().unwrap();
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let a_path = a.path().canonicalize().unwrap();
        let b_path = b.path().canonicalize().unwrap();

        let mut dirs = DirectoryState::new(PathBuf::from("/"), start.clone());
        dirs.change_to(&a_path).unwrap();
        dirs.change_to(&b_path).unwrap();
        assert_eq!(dirs.previous(), a_path);

        dirs.swap_previous().unwrap();
        assert_eq!(env::current_dir().unwrap(), a_path);
        assert_eq!(dirs.previous(), b_path);

        dirs.swap_previous().unwrap();
        assert_eq!(env::current_dir().unwrap(), b_path);
        assert_eq!(dirs.previous(), a_path);

        env::set_current_dir(start).unwrap();
    }

    #[test]
    #[serial]
    fn test_change_from_deleted_directory() {
        let start = env::current_dir().unwrap();
        let doomed = tempfile::tempdir().unwrap();
        let doomed_path = doomed.path().canonicalize().unwrap();
        env::set_current_dir(&doomed_path).unwrap();
        std::fs::remove_dir(&doomed_path).unwrap();

        let mut dirs = DirectoryState::new(PathBuf::from("/"), PathBuf::from("/kept"));
        let result = dirs.change_to(&start);
        env::set_current_dir(&start).unwrap();

        assert!(result.is_ok());
        assert_eq!(dirs.previous(), Path::new("/kept"));
        drop(doomed);
    }

    #[test]
    #[serial]
    fn test_failed_change_keeps_state() {
        let start = env::current_dir().unwrap();
        let mut dirs = DirectoryState::new(PathBuf::from("/"), PathBuf::from("/"));
        assert!(dirs.change_to(Path::new("/path/that/does/not/exist")).is_err());
        assert_eq!(dirs.previous(), Path::new("/"));
        assert_eq!(env::current_dir().unwrap(), start);
    }
}
