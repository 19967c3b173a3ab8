//! C IR.
//!
//! Only the items needed for a combinational scheduler function are
//! modeled: a `void` function over unsigned inputs and one output array,
//! with a body of cell assignments.

use crate::utils::indent;

const INDENT: usize = 4;

/// Function.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Function {
    /// Function name.
    pub name: String,

    /// Parameter declarations.
    pub params: Vec<ParamDeclaration>,

    /// Body of the function.
    pub body: Vec<Assign>,
}

impl ToString for Function {
    fn to_string(&self) -> String {
        let params = self.params.iter().map(|param| param.to_string()).collect::<Vec<_>>().join(", ");

        if self.body.is_empty() {
            format!("void {}({})\n{{\n}}", self.name, params)
        } else {
            format!("void {}({})\n{{\n{}\n}}", self.name, params, indent(gen_c_assigns(&self.body), INDENT))
        }
    }
}

/// Parameter declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParamDeclaration {
    /// Unsigned scalar input.
    Scalar(String),

    /// Output array pointer.
    OutArray(String),
}

impl ToString for ParamDeclaration {
    fn to_string(&self) -> String {
        match self {
            Self::Scalar(ident) => format!("unsigned int {}", ident),
            Self::OutArray(ident) => format!("int *{}", ident),
        }
    }
}

impl ParamDeclaration {
    /// Creates new scalar input declaration.
    pub fn scalar(ident: String) -> Self { Self::Scalar(ident) }

    /// Creates new output array declaration.
    pub fn out_array(ident: String) -> Self { Self::OutArray(ident) }
}

/// Assignment statement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Assign(pub Expression, pub Expression);

/// Generates C code for assignments.
pub fn gen_c_assigns(assigns: &[Assign]) -> String {
    assigns.iter().map(|assign| assign.to_string()).collect::<Vec<_>>().join("\n")
}

impl ToString for Assign {
    fn to_string(&self) -> String { format!("{} = {};", self.0.to_string(), self.1.to_string()) }
}

impl Assign {
    /// Creates new assignment.
    pub fn new(lvalue: Expression, expr: Expression) -> Self { Self(lvalue, expr) }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical negation.
    Not,
}

impl ToString for UnaryOp {
    fn to_string(&self) -> String {
        match self {
            UnaryOp::Not => "!",
        }
        .to_string()
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Bitwise and.
    BitAnd,

    /// Remainder.
    Mod,

    /// Bitwise exclusive or.
    Xor,
}

impl ToString for BinaryOp {
    fn to_string(&self) -> String {
        match self {
            BinaryOp::BitAnd => "&",
            BinaryOp::Mod => "%",
            BinaryOp::Xor => "^",
        }
        .to_string()
    }
}

/// Expression.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    /// Primary.
    Primary(Primary),

    /// Unary expression.
    Unary(UnaryOp, Primary),

    /// Binary expression.
    Binary(Box<Expression>, BinaryOp, Box<Expression>),

    /// Conjunction of pre-shaped operands, rendered with `&&`.
    Conjunction(Vec<Expression>),
}

/// Primary.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Primary {
    /// Number.
    Number(String),

    /// Identifier, optionally indexed: `ident` or `ident[index]`.
    Ident(String, Option<usize>),

    /// Parenthesized expression.
    Paren(Box<Expression>),
}

impl ToString for Expression {
    fn to_string(&self) -> String {
        match self {
            Self::Primary(prim) => prim.to_string(),
            Self::Unary(op, prim) => format!("{}{}", op.to_string(), prim.to_string()),
            Self::Binary(lhs, op, rhs) => format!("{} {} {}", lhs.to_string(), op.to_string(), rhs.to_string()),
            Self::Conjunction(exprs) => {
                assert!(!exprs.is_empty());
                exprs.iter().map(|expr| expr.to_string()).collect::<Vec<_>>().join(" && ")
            }
        }
    }
}

impl ToString for Primary {
    fn to_string(&self) -> String {
        match self {
            Self::Number(num) => num.clone(),
            Self::Ident(ident, Some(index)) => format!("{}[{}]", ident, index),
            Self::Ident(ident, None) => ident.clone(),
            Self::Paren(expr) => format!("({})", expr.to_string()),
        }
    }
}

impl Expression {
    /// Number.
    pub fn number(num: String) -> Self { Self::Primary(Primary::Number(num)) }

    /// Identifier.
    pub fn ident(ident: String) -> Self { Self::Primary(Primary::Ident(ident, None)) }

    /// Indexes an identifier expression.
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        if let Expression::Primary(Primary::Ident(ident, None)) = self {
            Expression::Primary(Primary::Ident(ident, Some(index)))
        } else {
            panic!("with_index: self is not an identifier")
        }
    }

    /// Unary operation.
    pub fn unary(op: UnaryOp, expr: Self) -> Self {
        Self::Unary(op, if let Self::Primary(prim) = expr { prim } else { Primary::Paren(Box::new(expr)) })
    }

    /// Binary operation.
    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        // Operands of binary operation should be primary.
        Self::Binary(Box::new(lhs.into_primary()), op, Box::new(rhs.into_primary()))
    }

    /// Conjunction of pre-shaped operands.
    pub fn conjunction(exprs: Vec<Expression>) -> Self {
        assert!(!exprs.is_empty(), "conjunction should have at least one operand");
        Self::Conjunction(exprs)
    }

    /// Returns `true` if the expression is primary.
    pub fn is_primary(&self) -> bool { matches!(self, Self::Primary(_)) }

    /// Converts into primary.
    #[must_use]
    pub fn into_primary(self) -> Self {
        if self.is_primary() {
            self
        } else {
            Self::Primary(Primary::Paren(Box::new(self)))
        }
    }
}
