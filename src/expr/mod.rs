pub mod parser;

use crate::registry::VariableRegistry;
use std::fmt::{self, Display, Formatter};

/// Bit index of a registered variable.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

/// A truth value for every registered variable; bit `i` belongs to `Variable(i)`.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Assignment(pub u32);

impl Assignment {
    pub fn value(self, variable: Variable) -> bool {
        (self.0 >> variable.0) & 1 == 1
    }

    /// Pairs every registered variable with its value under this assignment.
    pub fn bindings<'a>(self, variables: &'a VariableRegistry) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        variables.iter().map(move |(variable, name)| (name, self.value(variable)))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl BinaryOp {
    pub fn apply(self, l: bool, r: bool) -> bool {
        match self {
            BinaryOp::And => l && r,
            BinaryOp::Or => l || r,
            BinaryOp::Xor => l ^ r,
            BinaryOp::Implies => !(l && !r),
            BinaryOp::Iff => l == r,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Implies => "=>",
            BinaryOp::Iff => "<=>",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Constant(bool),
    Variable(Variable),
    Not(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn not(e: Expr) -> Self {
        Expr::Not(Box::new(e))
    }

    pub fn binary(op: BinaryOp, l: Expr, r: Expr) -> Self {
        Expr::Binary(op, Box::new(l), Box::new(r))
    }

    pub fn eval(&self, assignment: Assignment) -> bool {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(variable) => assignment.value(*variable),
            Expr::Not(e) => !e.eval(assignment),
            Expr::Binary(op, l, r) => op.apply(l.eval(assignment), r.eval(assignment)),
        }
    }

    /// Renders the expression in input syntax, naming variables through `variables`.
    pub fn display<'a>(&'a self, variables: &'a VariableRegistry) -> Rendered<'a> {
        Rendered { expr: self, variables }
    }
}

pub struct Rendered<'a> {
    expr: &'a Expr,
    variables: &'a VariableRegistry,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.expr {
            Expr::Constant(true) => f.write_str("T"),
            Expr::Constant(false) => f.write_str("F"),
            Expr::Variable(v) => write!(f, "[{}]", self.variables.name(*v)),
            Expr::Not(e) => write!(f, "!{}", e.display(self.variables)),
            Expr::Binary(op, l, r) => write!(
                f,
                "({} {} {})",
                l.display(self.variables),
                op.symbol(),
                r.display(self.variables)
            ),
        }
    }
}

#[cfg(test)]
pub(crate) fn var(x: usize) -> Expr {
    Expr::Variable(Variable(x))
}

#[cfg(test)]
pub(crate) fn binary_op_strategy() -> impl proptest::strategy::Strategy<Value = BinaryOp> {
    use proptest::prelude::*;

    prop_oneof![
        Just(BinaryOp::And),
        Just(BinaryOp::Or),
        Just(BinaryOp::Xor),
        Just(BinaryOp::Implies),
        Just(BinaryOp::Iff),
    ]
}

/// Random trees over `Variable(0)..Variable(num_variables)`; `num_variables` must be non-zero.
#[cfg(test)]
pub(crate) fn expr_strategy(num_variables: usize) -> impl proptest::strategy::Strategy<Value = Expr> {
    use proptest::prelude::*;

    let leaf = prop_oneof![
        1 => any::<bool>().prop_map(Expr::Constant),
        4 => (0..num_variables).prop_map(var),
    ];
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::not),
            (binary_op_strategy(), inner.clone(), inner).prop_map(|(op, l, r)| Expr::binary(op, l, r)),
        ]
    })
}
