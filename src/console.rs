//! Console bridge
//!
//! `OUT` and `IN` talk to two narrow, synchronous traits instead of stdio
//! directly, so tests can swap in an in-memory sink/source and the engine
//! never has to know it is running under a test harness.

use std::io::{self, BufRead, Write};

/// Receives one output character at a time.
pub trait ConsoleOutput {
    /// Emit one 7-bit ASCII character code. Codes outside printable ASCII
    /// are passed through unchanged.
    fn emit(&mut self, code: u16) -> io::Result<()>;

    /// Flush any buffering. Called once per `OUT` of a newline and once
    /// more when the run halts.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Supplies one input character at a time, pulled from an internally
/// buffered line.
pub trait ConsoleInput {
    /// Return the next character code, reading (and buffering) another
    /// line from the underlying source if the buffer is empty.
    fn next_char(&mut self) -> io::Result<u16>;
}

/// Line-buffered stdout half of the reference console.
pub struct StdOutput {
    stdout: io::Stdout,
}

impl StdOutput {
    pub fn new() -> Self {
        Self { stdout: io::stdout() }
    }
}

impl Default for StdOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput for StdOutput {
    fn emit(&mut self, code: u16) -> io::Result<()> {
        self.stdout.write_all(&[code as u8])?;
        if code == b'\n' as u16 {
            self.stdout.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

/// Line-buffered stdin half of the reference console.
pub struct StdInput {
    stdin: io::BufReader<io::Stdin>,
    pending: std::collections::VecDeque<u16>,
}

impl StdInput {
    pub fn new() -> Self {
        Self {
            stdin: io::BufReader::new(io::stdin()),
            pending: std::collections::VecDeque::new(),
        }
    }
}

impl Default for StdInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInput for StdInput {
    fn next_char(&mut self) -> io::Result<u16> {
        if self.pending.is_empty() {
            let mut line = String::new();
            let n = self.stdin.read_line(&mut line)?;
            if n == 0 {
                // EOF: behave as an empty line terminated by a newline so
                // a program blocked on IN observes a definite character
                // rather than spinning.
                line.push('\n');
            }
            for b in line.bytes() {
                self.pending.push_back(b as u16);
            }
        }
        Ok(self.pending.pop_front().unwrap_or(b'\n' as u16))
    }
}

/// The reference console: stdout and stdin, kept as two independent fields
/// so both can be borrowed mutably at once (one as `&mut dyn ConsoleOutput`,
/// the other as `&mut dyn ConsoleInput`) for the duration of a run.
#[derive(Default)]
pub struct StdConsole {
    pub output: StdOutput,
    pub input: StdInput,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the output and input halves independently.
    pub fn split(&mut self) -> (&mut StdOutput, &mut StdInput) {
        (&mut self.output, &mut self.input)
    }
}

/// An in-memory output sink, for tests and embedders that want to capture
/// the guest program's output instead of printing it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedOutput {
    pub bytes: Vec<u8>,
}

impl ConsoleOutput for BufferedOutput {
    fn emit(&mut self, code: u16) -> io::Result<()> {
        self.bytes.push(code as u8);
        Ok(())
    }
}

impl BufferedOutput {
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// An in-memory input source that drains a fixed byte string, for tests.
#[derive(Debug, Default, Clone)]
pub struct BufferedInput {
    bytes: std::collections::VecDeque<u16>,
}

impl BufferedInput {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            bytes: text.as_ref().bytes().map(|b| b as u16).collect(),
        }
    }
}

impl ConsoleInput for BufferedInput {
    fn next_char(&mut self) -> io::Result<u16> {
        self.bytes.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input source exhausted")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_output_collects_bytes() {
        let mut out = BufferedOutput::default();
        out.emit('A' as u16).unwrap();
        out.emit('B' as u16).unwrap();
        assert_eq!(out.as_str(), "AB");
    }

    #[test]
    fn buffered_input_yields_characters_including_newline() {
        let mut input = BufferedInput::new("hi\n");
        assert_eq!(input.next_char().unwrap(), b'h' as u16);
        assert_eq!(input.next_char().unwrap(), b'i' as u16);
        assert_eq!(input.next_char().unwrap(), b'\n' as u16);
        assert!(input.next_char().is_err());
    }
}
