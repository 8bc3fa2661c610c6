use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The single variable store of a program run.
///
/// There is no scoping: loop bodies, branches and nested blocks all read and
/// write the same bindings. Assigning to an unbound name creates it, and a
/// binding may change type on every assignment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use doorlang::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Integer(1));
    /// env.assign("x", Value::Bool(true));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Bool(true)));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
