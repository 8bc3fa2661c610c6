use std::io::{BufRead, Write};

use crate::{
    ast::Statement,
    interpreter::evaluator::core::{Context, EvalResult, console_error},
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Executes a single statement.
    ///
    /// - A block runs its statements in order.
    /// - An assignment evaluates its value and binds it, replacing any
    ///   previous binding of the name whatever its type.
    /// - `show` writes the value's text form and a line break.
    /// - `until` checks its condition before every iteration and stops once
    ///   it is false. A condition that never becomes false loops forever.
    /// - `if` runs its `then` branch when the condition is true, otherwise
    ///   its `else` branch if there is one.
    ///
    /// Conditions must evaluate to booleans.
    ///
    /// # Errors
    /// Returns the first `RuntimeError`; nothing after it is executed.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        tracing::trace!(line = statement.line_number(), "executing statement");

        match statement {
            Statement::Block { statements, .. } => {
                statements.iter()
                          .try_for_each(|statement| self.execute(statement))
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value);
                Ok(())
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr)?;
                writeln!(self.output, "{value}").map_err(console_error(*line))
            },
            Statement::While { condition,
                               body,
                               line, } => {
                while self.eval(condition)?.as_condition(*line)? {
                    self.execute(body)?;
                }
                Ok(())
            },
            Statement::Condition { condition,
                                   then_branch,
                                   else_branch,
                                   line, } => {
                if self.eval(condition)?.as_condition(*line)? {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
        }
    }
}
