use crate::ast::{BinaryOperator, UnaryFunction};

impl UnaryFunction {
    /// Applies the function to an already evaluated argument.
    ///
    /// ## Example
    /// ```
    /// use polexpr::ast::UnaryFunction;
    ///
    /// assert_eq!(UnaryFunction::Sin.apply(0.0), 0.0);
    /// assert_eq!(UnaryFunction::Cos.apply(0.0), 1.0);
    /// ```
    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
        }
    }
}

impl BinaryOperator {
    /// Applies the operator to already evaluated operands.
    ///
    /// Division follows IEEE 754: dividing by zero gives an infinity, or NaN
    /// for `0 / 0`.
    ///
    /// ## Example
    /// ```
    /// use polexpr::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Minus.apply(3.0, 4.0), -1.0);
    /// assert_eq!(BinaryOperator::Divide.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Divide.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}
