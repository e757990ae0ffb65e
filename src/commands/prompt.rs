//! Line-based console for prompts and answers

use std::io::{self, BufRead, Write};

/// Paired input and output streams
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for game output
    pub const fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns `None` once input is exhausted. Bytes that are not UTF-8 are
    /// replaced rather than reported, so a garbled line is just a bad answer.
    ///
    /// # Errors
    /// Returns an I/O error if the prompt cannot be written or input read.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Ask a yes/no question; only "yes" (any case) counts as yes
    ///
    /// # Errors
    /// Returns an I/O error if the prompt cannot be written or input read.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
