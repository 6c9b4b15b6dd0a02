use std::io::{self, Read};

const READ_CHUNK: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Unbuffered standard input. Reads go straight to `read(2)` so an
/// interrupting signal surfaces as `ErrorKind::Interrupted`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawStdin;

impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(n as usize)
    }
}

/// Splits a byte stream into lines of at most `max_len` bytes. Anything past
/// the budget is dropped up to the next newline.
pub struct LineReader<R> {
    source: R,
    pending: Vec<u8>,
    current_len: usize,
    max_len: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(source: R, max_len: usize) -> Self {
        Self {
            source,
            pending: Vec::new(),
            current_len: 0,
            max_len,
        }
    }

    pub fn read_line(&mut self) -> io::Result<ReadOutcome> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            if let Some(line) = self.take_line() {
                return Ok(ReadOutcome::Line(line));
            }

            match self.source.read(&mut chunk) {
                Ok(0) if self.pending.is_empty() => return Ok(ReadOutcome::Eof),
                Ok(0) => {
                    let rest = std::mem::take(&mut self.pending);
                    self.current_len = 0;
                    return Ok(ReadOutcome::Line(String::from_utf8_lossy(&rest).into_owned()));
                }
                Ok(n) => self.push(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    self.discard_partial();
                    return Ok(ReadOutcome::Interrupted);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn push(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == b'\n' {
                self.pending.push(byte);
                self.current_len = 0;
            } else if self.current_len < self.max_len {
                self.pending.push(byte);
                self.current_len += 1;
            }
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let end = self.pending.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.pending.drain(..=end).collect();
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    fn discard_partial(&mut self) {
        let keep = self
            .pending
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |pos| pos + 1);
        self.pending.truncate(keep);
        self.current_len = 0;
    }
}
