use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, console_error},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Reads one line of console input for `door()`.
    ///
    /// The line is trimmed and parsed as a signed decimal integer; console
    /// input is always an integer. Pending output is flushed first so that
    /// any prompt printed with `show` is visible before the read blocks.
    ///
    /// # Errors
    /// - `InvalidInput` if the line is not an integer or the input is
    ///   exhausted.
    /// - `Console` if reading or flushing fails.
    pub(crate) fn read_input(&mut self, line: usize) -> EvalResult<Value> {
        self.output.flush().map_err(console_error(line))?;

        let mut buffer = String::new();
        self.input
            .read_line(&mut buffer)
            .map_err(console_error(line))?;

        let text = buffer.trim();
        tracing::debug!(input = text, line, "read console input");

        text.parse()
            .map(Value::Integer)
            .map_err(|_| RuntimeError::InvalidInput { input: text.to_string(),
                                                      line })
    }
}
