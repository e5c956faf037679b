//! Line-oriented terminal I/O.
//!
//! Wraps any `BufRead` + `Write` pair so the menu runs the same against a real
//! terminal and against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::error::{AppError, AppResult};

/// Prompt reader and message writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `prompt` and reads one line, without its line ending.
    ///
    /// Returns `None` at end of input. A line that isn't valid UTF-8 is
    /// consumed and reported as a validation error.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8(buf)
            .map_err(|_| AppError::validation("input is not valid UTF-8"))?;

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like [`read_line`](Self::read_line), but end of input is an error.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        self.read_line(prompt)?.ok_or_else(AppError::input_closed)
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
