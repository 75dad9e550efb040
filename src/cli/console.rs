//! Line-oriented terminal prompting and output.

use std::io::{BufRead, Write};

use crate::error::AppError;

/// Reads answers from `input` and writes prompts and messages to `output`.
#[derive(Debug)]
pub struct Console<Input, Output> {
    input: Input,
    output: Output,
}

impl<Input, Output> Console<Input, Output>
where
    Input: BufRead,
    Output: Write,
{
    /// Creates a console over the given streams.
    #[must_use]
    pub const fn new(input: Input, output: Output) -> Self {
        Self { input, output }
    }

    /// Shows `label` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Prompt`] when reading fails or input has ended, and
    /// [`AppError::Output`] when the prompt cannot be written.
    pub fn prompt(&mut self, label: &str) -> Result<String, AppError> {
        write!(self.output, "{label}: ").map_err(|error| output_error(&error))?;
        self.output.flush().map_err(|error| output_error(&error))?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|error| AppError::Prompt {
                message: error.to_string(),
            })?;
        if read == 0 {
            return Err(AppError::Prompt {
                message: format!("input ended while waiting for \"{label}\""),
            });
        }

        Ok(answer.trim().to_owned())
    }

    /// Shows `label` with `suggestion` in brackets; an empty answer accepts
    /// the suggestion.
    ///
    /// # Errors
    ///
    /// See [`Console::prompt`].
    pub fn prompt_with_suggestion(
        &mut self,
        label: &str,
        suggestion: &str,
    ) -> Result<String, AppError> {
        if suggestion.is_empty() {
            return self.prompt(label);
        }

        let answer = self.prompt(&format!("{label} [{suggestion}]"))?;
        if answer.is_empty() {
            Ok(suggestion.to_owned())
        } else {
            Ok(answer)
        }
    }

    /// Writes `message` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Output`] when writing fails.
    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{message}").map_err(|error| output_error(&error))
    }

    /// Writes `text` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Output`] when writing fails.
    pub fn print(&mut self, text: &str) -> Result<(), AppError> {
        self.output
            .write_all(text.as_bytes())
            .map_err(|error| output_error(&error))
    }

    /// Consumes the console, returning its streams.
    #[must_use]
    pub fn into_parts(self) -> (Input, Output) {
        (self.input, self.output)
    }
}

fn output_error(error: &std::io::Error) -> AppError {
    AppError::Output {
        message: error.to_string(),
    }
}
