use std::io::{self, IsTerminal, Write};
use std::process;

/// An output stream the handler can write to and query for interactivity.
///
/// Splitting this out lets tests drive the handler with an in-memory stream
/// whose interactivity flag is under test control.
pub trait ConsoleStream: Write {
    /// Whether the destination is an interactive terminal.
    ///
    /// Streams that cannot answer the question report false; the check never
    /// fails.
    fn is_interactive(&self) -> bool;
}

/// Standard error stream (the default log destination)
pub struct StderrStream {
    stderr: io::Stderr,
}

impl StderrStream {
    pub fn new() -> Self {
        Self {
            stderr: io::stderr(),
        }
    }
}

impl Default for StderrStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StderrStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stderr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stderr.flush()
    }
}

impl ConsoleStream for StderrStream {
    fn is_interactive(&self) -> bool {
        self.stderr.is_terminal()
    }
}

/// Standard output stream, for hosts that log to stdout
pub struct StdoutStream {
    stdout: io::Stdout,
}

impl StdoutStream {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for StdoutStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl ConsoleStream for StdoutStream {
    fn is_interactive(&self) -> bool {
        self.stdout.is_terminal()
    }
}

/// Standard Unix exit codes used when a write hits a closed pipe
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    SignalPipe = 141, // 128 + SIGPIPE (13)
}

impl ExitCode {
    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}

/// Cross-platform broken pipe detection
pub(crate) fn is_broken_pipe(e: &io::Error) -> bool {
    #[cfg(unix)]
    {
        e.kind() == io::ErrorKind::BrokenPipe
    }
    #[cfg(windows)]
    {
        // On Windows, broken pipe manifests as different error codes
        e.kind() == io::ErrorKind::BrokenPipe
            || e.raw_os_error() == Some(232) // ERROR_NO_DATA "The pipe is being closed"
            || e.raw_os_error() == Some(109) // ERROR_BROKEN_PIPE "The pipe has been ended"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe_classification() {
        let pipe = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert!(is_broken_pipe(&pipe));
        let other = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(!is_broken_pipe(&other));
    }
}
