use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable [`Environment`]
/// and the console used by `show` and `door()`.
///
/// ## Usage
///
/// A `Context` is created once per program run and the root block is
/// executed against it. Tests build one over in-memory buffers:
///
/// ```
/// use doorlang::{
///     ast::Expr,
///     interpreter::{evaluator::core::Context, value::Value},
/// };
///
/// let mut context = Context::new("42\n".as_bytes(), Vec::<u8>::new());
/// let value = context.eval(&Expr::Input { line: 1 }).unwrap();
///
/// assert_eq!(value, Value::Integer(42));
/// ```
pub struct Context<R, W> {
    /// All variable bindings of the run.
    pub environment: Environment,
    pub(crate) input: R,
    pub(crate) output: W,
}

impl<R, W> Context<R, W> {
    /// Creates a context with an empty environment reading console input
    /// from `input` and writing console output to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { environment: Environment::new(),
               input,
               output }
    }

    /// The console output written so far.
    pub const fn output(&self) -> &W {
        &self.output
    }
}

impl Context<StdinLock<'static>, Stdout> {
    /// Creates a context attached to the process stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right and always both of them, including for `and`
    /// and `or`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Input { line } => self.read_input(*line),
        }
    }

    /// Looks up a variable in the environment.
    ///
    /// # Errors
    /// `UnknownVariable` if `name` was never assigned.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}

/// Maps a console I/O failure to a runtime error on `line`.
pub(crate) fn console_error(line: usize) -> impl Fn(io::Error) -> RuntimeError {
    move |e| RuntimeError::Console { details: e.to_string(),
                                     line }
}
