use ordered_float::OrderedFloat;

use crate::{
    error::NodeError,
    util::num::{NumberFormat, format_number, non_finite},
};

/// The four categories of node an expression tree is built from.
///
/// The kind alone fixes how many children a node owns, see
/// [`NodeKind::arity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A numeric literal.
    Constant,
    /// A named value, either bound to a literal or resolved through a context.
    Variable,
    /// A function of one argument such as `sin`.
    UnaryFunction,
    /// An arithmetic operator of two arguments such as `+`.
    BinaryOperator,
}

impl NodeKind {
    /// Gets the number of children a node of this kind owns.
    ///
    /// ## Example
    /// ```
    /// use polexpr::ast::NodeKind;
    ///
    /// assert_eq!(NodeKind::Constant.arity(), 0);
    /// assert_eq!(NodeKind::UnaryFunction.arity(), 1);
    /// assert_eq!(NodeKind::BinaryOperator.arity(), 2);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Constant | Self::Variable => 0,
            Self::UnaryFunction => 1,
            Self::BinaryOperator => 2,
        }
    }
}

/// Defines a symbol-backed operator enum together with its lookup table.
///
/// Each entry provides a variant and the symbol used for it in prefix
/// notation. The macro produces the enum, a `SYMBOLS` table and the
/// `symbol`/`from_symbol` conversions.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $symbol:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant paired with its symbol.
            pub const SYMBOLS: &[(&'static str, Self)] = &[
                $(($symbol, Self::$variant),)*
            ];

            /// Gets the symbol written in prefix notation.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }

            /// Looks up the variant written as `symbol`.
            #[must_use]
            pub fn from_symbol(symbol: &str) -> Option<Self> {
                Self::SYMBOLS.iter().find(|(s, _)| *s == symbol).map(|(_, v)| *v)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

symbol_table! {
    /// Functions of a single argument.
    pub enum UnaryFunction {
        /// Sine, argument in radians.
        Sin => "sin",
        /// Cosine, argument in radians.
        Cos => "cos",
    }
}

symbol_table! {
    /// Arithmetic operators of two arguments.
    ///
    /// Operands are always evaluated left before right.
    pub enum BinaryOperator {
        /// `+`
        Plus => "+",
        /// `-`
        Minus => "-",
        /// `*`
        Multiply => "*",
        /// `/`
        Divide => "/",
    }
}

/// A named value in an expression.
///
/// A variable either carries its own literal, in which case evaluation never
/// consults the context, or is resolved by name through the
/// [`Context`](crate::interpreter::evaluator::core::Context) supplied to
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name:  String,
    value: Option<OrderedFloat<f64>>,
}

impl Variable {
    /// Creates a variable that is resolved through the evaluation context.
    ///
    /// # Errors
    /// Returns `InvalidVariableName` unless `name` is an identifier
    /// (`[A-Za-z_][A-Za-z0-9_]*`) other than a function name, `inf` or `NaN`.
    ///
    /// ## Example
    /// ```
    /// use polexpr::ast::Variable;
    ///
    /// assert_eq!(Variable::new("x_1").unwrap().name(), "x_1");
    /// assert!(Variable::new("cos").is_err());
    /// assert!(Variable::new("2x").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, NodeError> {
        let name = name.into();
        if !is_variable_name(&name) {
            return Err(NodeError::InvalidVariableName { name });
        }
        Ok(Self { name, value: None })
    }

    /// Creates a variable that always evaluates to `value`.
    ///
    /// # Errors
    /// Returns `InvalidVariableName` for the names [`Variable::new`] rejects.
    pub fn bound(name: impl Into<String>, value: f64) -> Result<Self, NodeError> {
        Ok(Self { value: Some(OrderedFloat(value)),
                  ..Self::new(name)? })
    }

    /// Creates the context-resolved variable `var{index}`.
    ///
    /// ## Example
    /// ```
    /// use polexpr::ast::Variable;
    ///
    /// assert_eq!(Variable::indexed(3).name(), "var3");
    /// ```
    #[must_use]
    pub fn indexed(index: usize) -> Self {
        Self { name:  index_name(index),
               value: None, }
    }

    /// Gets the name of the variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the bound literal, if any.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value.map(OrderedFloat::into_inner)
    }
}

/// Tests whether `name` lexes back as a variable of that name.
fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_identifier = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_identifier
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    && UnaryFunction::from_symbol(name).is_none()
    && non_finite(name).is_none()
}

/// Gets the name used for the positional variable `index`.
#[must_use]
pub fn index_name(index: usize) -> String {
    format!("var{index}")
}

/// A node of an expression tree.
///
/// Every node exclusively owns its children, so a tree is released by
/// dropping its root. The number of children always equals
/// [`Node::arity`]; partially built nodes only exist as a [`Shell`].
///
/// Equality is structural. Constants compare by bit pattern through
/// [`OrderedFloat`], so `NaN` constants are equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A numeric literal.
    Constant(OrderedFloat<f64>),
    /// A named value.
    Variable(Variable),
    /// A function applied to a single child.
    UnaryFunction {
        /// The function to apply.
        function: UnaryFunction,
        /// The argument.
        child:    Box<Self>,
    },
    /// An operator applied to two children.
    BinaryOperator {
        /// The operator to apply.
        operator: BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Node {
    /// Creates a constant node.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant(OrderedFloat(value))
    }

    /// Creates a variable node resolved through the evaluation context.
    ///
    /// # Errors
    /// Returns `InvalidVariableName` for the names [`Variable::new`] rejects.
    pub fn variable(name: impl Into<String>) -> Result<Self, NodeError> {
        Variable::new(name).map(Self::Variable)
    }

    /// Creates the context-resolved variable node `var{index}`.
    #[must_use]
    pub fn indexed_variable(index: usize) -> Self {
        Self::Variable(Variable::indexed(index))
    }

    /// Creates a variable node that always evaluates to `value`.
    ///
    /// # Errors
    /// Returns `InvalidVariableName` for the names [`Variable::new`] rejects.
    pub fn bound_variable(name: impl Into<String>, value: f64) -> Result<Self, NodeError> {
        Variable::bound(name, value).map(Self::Variable)
    }

    /// Creates a unary function node owning `child`.
    #[must_use]
    pub fn unary(function: UnaryFunction, child: Self) -> Self {
        Self::UnaryFunction { function,
                              child: Box::new(child) }
    }

    /// Creates a binary operator node owning `left` and `right`.
    ///
    /// ## Example
    /// ```
    /// use polexpr::ast::{BinaryOperator, Node, NodeKind, UnaryFunction};
    ///
    /// let root = Node::binary(BinaryOperator::Plus,
    ///                         Node::unary(UnaryFunction::Sin, Node::indexed_variable(0)),
    ///                         Node::constant(2.0));
    ///
    /// assert_eq!(root.kind(), NodeKind::BinaryOperator);
    /// assert_eq!(root.size(), 4);
    /// assert_eq!(root.depth(), 3);
    /// ```
    #[must_use]
    pub fn binary(operator: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOperator { operator,
                               left: Box::new(left),
                               right: Box::new(right) }
    }

    /// Gets the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Constant(_) => NodeKind::Constant,
            Self::Variable(_) => NodeKind::Variable,
            Self::UnaryFunction { .. } => NodeKind::UnaryFunction,
            Self::BinaryOperator { .. } => NodeKind::BinaryOperator,
        }
    }

    /// Gets the number of children this node owns.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Gets the symbol of this node with constants in the default format.
    ///
    /// The label is what prefix notation writes for the node, and what the
    /// parser reads back to rebuild it.
    #[must_use]
    pub fn label(&self) -> String {
        self.label_with(NumberFormat::default())
    }

    /// Gets the symbol of this node with constants rendered in `format`.
    #[must_use]
    pub fn label_with(&self, format: NumberFormat) -> String {
        match self {
            Self::Constant(value) => format_number(value.into_inner(), format),
            Self::Variable(variable) => variable.name().to_string(),
            Self::UnaryFunction { function, .. } => function.symbol().to_string(),
            Self::BinaryOperator { operator, .. } => operator.symbol().to_string(),
        }
    }

    /// Gets the child in slot `index`.
    ///
    /// For binary operators slot 0 is the left operand and slot 1 the right.
    ///
    /// # Errors
    /// Returns `ChildIndexOutOfRange` if `index >= self.arity()`, which is
    /// always the case for constants and variables.
    pub fn child(&self, index: usize) -> Result<&Self, NodeError> {
        match (self, index) {
            (Self::UnaryFunction { child, .. }, 0) | (Self::BinaryOperator { left: child, .. }, 0) => {
                Ok(child.as_ref())
            },
            (Self::BinaryOperator { right, .. }, 1) => Ok(right.as_ref()),
            _ => Err(NodeError::ChildIndexOutOfRange { index,
                                                       arity: self.arity() }),
        }
    }

    /// Gets a mutable reference to the child in slot `index`.
    ///
    /// # Errors
    /// Returns `ChildIndexOutOfRange` if `index >= self.arity()`.
    pub fn child_mut(&mut self, index: usize) -> Result<&mut Self, NodeError> {
        let arity = self.arity();
        match (self, index) {
            (Self::UnaryFunction { child, .. }, 0) | (Self::BinaryOperator { left: child, .. }, 0) => {
                Ok(child.as_mut())
            },
            (Self::BinaryOperator { right, .. }, 1) => Ok(right.as_mut()),
            _ => Err(NodeError::ChildIndexOutOfRange { index, arity }),
        }
    }

    /// Replaces the child in slot `index`, returning the previous child.
    ///
    /// # Errors
    /// Returns `ChildIndexOutOfRange` if `index >= self.arity()`.
    pub fn set_child(&mut self, index: usize, node: Self) -> Result<Self, NodeError> {
        let slot = self.child_mut(index)?;
        Ok(std::mem::replace(slot, node))
    }

    /// Iterates over the children in slot order.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        let slots: [Option<&Self>; 2] = match self {
            Self::Constant(_) | Self::Variable(_) => [None, None],
            Self::UnaryFunction { child, .. } => [Some(child.as_ref()), None],
            Self::BinaryOperator { left, right, .. } => [Some(left.as_ref()), Some(right.as_ref())],
        };
        slots.into_iter().flatten()
    }

    /// Gets the number of nodes in this tree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children().map(Self::size).sum::<usize>()
    }

    /// Gets the number of nodes on the longest path from this node to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().map(Self::depth).max().unwrap_or(0)
    }

    /// Tests whether two trees have the same kind, label and child count at
    /// every node.
    ///
    /// Unlike `==`, this ignores literals bound to variables and compares
    /// constants by their default label, which is what survives a round trip
    /// through prefix notation.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.kind() == other.kind()
        && self.label() == other.label()
        && self.children().count() == other.children().count()
        && self.children().zip(other.children()).all(|(a, b)| a.same_shape(b))
    }
}

/// The symbol a [`Shell`] was created from.
#[derive(Debug, Clone, PartialEq)]
enum Head {
    Constant(OrderedFloat<f64>),
    Variable(Variable),
    UnaryFunction(UnaryFunction),
    BinaryOperator(BinaryOperator),
}

/// A node under construction.
///
/// A shell knows its kind and label but has empty child slots. Slots are
/// filled one at a time with [`Shell::set_child`], and [`Shell::finish`]
/// turns the shell into a [`Node`] once every slot holds a child. Shells can
/// not be evaluated or serialized.
///
/// ## Example
/// ```
/// use polexpr::ast::{BinaryOperator, Node, Shell};
///
/// let mut shell = Shell::binary(BinaryOperator::Minus);
/// assert_eq!(shell.label(), "-");
/// assert!(shell.set_child(2, Node::constant(1.0)).is_err());
///
/// shell.set_child(0, Node::constant(3.0)).unwrap();
/// shell.set_child(1, Node::constant(4.0)).unwrap();
/// let node = shell.finish().unwrap();
/// assert_eq!(node,
///            Node::binary(BinaryOperator::Minus, Node::constant(3.0), Node::constant(4.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    head:  Head,
    slots: [Option<Node>; 2],
}

impl Shell {
    const fn with_head(head: Head) -> Self {
        Self { head,
               slots: [None, None] }
    }

    /// Creates a complete constant shell.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::with_head(Head::Constant(OrderedFloat(value)))
    }

    /// Creates a complete variable shell.
    #[must_use]
    pub fn variable(variable: Variable) -> Self {
        Self::with_head(Head::Variable(variable))
    }

    /// Creates a unary function shell with an empty argument slot.
    #[must_use]
    pub const fn unary(function: UnaryFunction) -> Self {
        Self::with_head(Head::UnaryFunction(function))
    }

    /// Creates a binary operator shell with empty operand slots.
    #[must_use]
    pub const fn binary(operator: BinaryOperator) -> Self {
        Self::with_head(Head::BinaryOperator(operator))
    }

    /// Gets the kind of the node being built.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self.head {
            Head::Constant(_) => NodeKind::Constant,
            Head::Variable(_) => NodeKind::Variable,
            Head::UnaryFunction(_) => NodeKind::UnaryFunction,
            Head::BinaryOperator(_) => NodeKind::BinaryOperator,
        }
    }

    /// Gets the number of child slots.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Gets the label the finished node will have.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.head {
            Head::Constant(value) => format_number(value.into_inner(), NumberFormat::default()),
            Head::Variable(variable) => variable.name().to_string(),
            Head::UnaryFunction(function) => function.symbol().to_string(),
            Head::BinaryOperator(operator) => operator.symbol().to_string(),
        }
    }

    /// Fills slot `index` with `node`, replacing anything already there.
    ///
    /// # Errors
    /// Returns `ChildIndexOutOfRange` if `index >= self.arity()`.
    pub fn set_child(&mut self, index: usize, node: Node) -> Result<(), NodeError> {
        let arity = self.arity();
        if index >= arity {
            return Err(NodeError::ChildIndexOutOfRange { index, arity });
        }
        self.slots[index] = Some(node);
        Ok(())
    }

    /// Turns the shell into a node.
    ///
    /// # Errors
    /// Returns `MissingChild` naming the first empty slot if any slot below
    /// the arity is still empty.
    pub fn finish(self) -> Result<Node, NodeError> {
        let arity = self.arity();
        let missing = |index| NodeError::MissingChild { index, arity };
        let [first, second] = self.slots;

        match self.head {
            Head::Constant(value) => Ok(Node::Constant(value)),
            Head::Variable(variable) => Ok(Node::Variable(variable)),
            Head::UnaryFunction(function) => {
                let child = first.ok_or_else(|| missing(0))?;
                Ok(Node::unary(function, child))
            },
            Head::BinaryOperator(operator) => {
                let left = first.ok_or_else(|| missing(0))?;
                let right = second.ok_or_else(|| missing(1))?;
                Ok(Node::binary(operator, left, right))
            },
        }
    }
}
