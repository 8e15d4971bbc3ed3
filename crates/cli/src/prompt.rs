//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

/// Writes prompts to `output` and reads answers from `input`.
///
/// Every read returns `Ok(None)` at end of input so callers can end the
/// session instead of spinning on an exhausted stream.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one line, trimmed.
    pub fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Ask until the answer parses as `T`.
    pub fn parsed<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.line(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }
}
