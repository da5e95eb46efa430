//! Prompts
//!
//! Interactive terminal prompts for the setup wizard. A [`Console`] pairs
//! the operator-facing input and output streams, so the whole wizard can
//! be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::debug;

use super::validate::Validated;

/// The operator's terminal: one line-oriented input stream and one output
/// stream for prompts and messages.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// A console over the process's locked stdin/stdout.
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout().lock(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a status line to the operator.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to output stream")?;
        Ok(())
    }

    /// Prompt until `validate` accepts the operator's answer.
    ///
    /// Each round prints the prompt, reads one line (blocking), and runs
    /// the validator. A rejection prints the reason followed by one blank
    /// line and loops back; nothing else happens on rejection. There is no
    /// retry limit. A closed input stream is fatal, not retried.
    pub fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Validated<T>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{}", prompt).context("Failed to write prompt")?;
            self.output.flush().context("Failed to flush output stream")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from input stream")?;
            if read == 0 {
                bail!("Input stream closed before setup completed.");
            }

            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(reason = %rejection, "input rejected");
                    writeln!(self.output, "{}", rejection)
                        .context("Failed to write rejection message")?;
                    writeln!(self.output).context("Failed to write separator line")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::validate::Rejection;
    use std::io::Cursor;

    fn console(answers: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_returns_first_accepted_value() {
        let mut console = console("hello\n");
        let value = console
            .prompt_until_valid("Q: ", |raw| Ok::<_, Rejection>(raw.trim().to_string()))
            .unwrap();
        assert_eq!(value, "hello");
        assert_eq!(String::from_utf8(console.output).unwrap(), "Q: ");
    }

    #[test]
    fn test_retries_until_valid() {
        let mut console = console("\n\nanswer\n");
        let value = console
            .prompt_until_valid("Q: ", |raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Err(Rejection("This field is required.".to_string()))
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .unwrap();

        assert_eq!(value, "answer");
        assert_eq!(
            String::from_utf8(console.output).unwrap(),
            "Q: This field is required.\n\nQ: This field is required.\n\nQ: "
        );
    }

    #[test]
    fn test_closed_input_is_fatal() {
        let mut console = console("");
        let err = console
            .prompt_until_valid("Q: ", |raw| Ok::<_, Rejection>(raw.to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Input stream closed"));
    }
}
