use std::collections::HashMap;

use crate::{
    ast::{Node, Variable, index_name},
    error::EvalError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the values of context-resolved variables.
///
/// The caller builds a context and passes it to evaluation; nothing is
/// looked up anywhere else. Variables are keyed by name, and positional
/// values are stored under the names `var0`, `var1`, and so on.
///
/// ## Example
/// ```
/// use polexpr::interpreter::evaluator::core::Context;
///
/// let mut context = Context::from_values([11.8, 15.0]);
/// context.bind("x", 2.0);
///
/// assert_eq!(context.lookup("var1"), Some(15.0));
/// assert_eq!(context.lookup("x"), Some(2.0));
/// assert_eq!(context.lookup("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: HashMap<String, f64>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context binding `var0`, `var1`, ... to `values` in order.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut context = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            context.bind_index(index, value);
        }
        context
    }

    /// Binds `name` to `value`, returning the previous value if there was
    /// one.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Binds the positional variable `var{index}` to `value`.
    pub fn bind_index(&mut self, index: usize, value: f64) -> Option<f64> {
        self.bind(index_name(index), value)
    }

    /// Gets the value bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Gets the number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Tests whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Evaluates a tree.
    ///
    /// Constants yield their value, variables their bound literal or their
    /// context entry, functions and operators apply to their evaluated
    /// children. The left operand is always evaluated before the right.
    ///
    /// # Errors
    /// Returns `UnboundVariable` for the first variable, in evaluation
    /// order, that has neither a bound literal nor a context entry.
    pub fn eval(&self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Constant(value) => Ok(value.into_inner()),
            Node::Variable(variable) => self.eval_variable(variable),
            Node::UnaryFunction { function, child } => Ok(function.apply(self.eval(child)?)),
            Node::BinaryOperator { operator, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(operator.apply(left, right))
            },
        }
    }

    fn eval_variable(&self, variable: &Variable) -> EvalResult<f64> {
        variable.value()
                .or_else(|| self.lookup(variable.name()))
                .ok_or_else(|| EvalError::UnboundVariable { name: variable.name().to_string() })
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Context {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self { values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}

impl Node {
    /// Evaluates this tree against `context`.
    ///
    /// # Errors
    /// Returns `UnboundVariable` if a variable cannot be resolved.
    ///
    /// ## Example
    /// ```
    /// use polexpr::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let tree = Node::binary(BinaryOperator::Plus, Node::constant(3.0), Node::variable("x")?);
    /// let context: Context = [("x", 4.0)].into_iter().collect();
    ///
    /// assert_eq!(tree.evaluate(&context).unwrap(), 7.0);
    /// assert!(tree.evaluate(&Context::new()).is_err());
    /// # Ok::<(), polexpr::error::NodeError>(())
    /// ```
    pub fn evaluate(&self, context: &Context) -> EvalResult<f64> {
        context.eval(self)
    }
}
