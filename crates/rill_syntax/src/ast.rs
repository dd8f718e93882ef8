//! Abstract Syntax Tree definitions for the Rill language.
//!
//! Nodes form a strict tree: every child is owned exclusively by its parent
//! (`Box`/`Vec`, no sharing, no cycles), created once during parsing of its
//! syntactic span and immutable thereafter.
//!
//! The node set is closed: statements and expressions are tagged unions and
//! every consumer matches exhaustively.

use crate::tokenizer::tokens::TokenKind;

/// Identifier spelling. Kept as `String`; the front-end does no interning.
pub type Ident = String;

/// The parse root: an ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub statements: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Variable(Variable),
    Function(Function),
    /// A bare expression in statement position (e.g. a call).
    Expr(Expr),
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Value(Value),
    FunctionValue(FunctionValue),
    Call(Call),
    TypeConversion(TypeConversion),
    Binary(BinaryExpr),
}

impl Expr {
    /// The value kind inferred for this expression, used by short variable
    /// declarations and call arguments.
    ///
    /// ## Notes
    /// - A binary expression inherits the kind of its left operand.
    pub fn value_kind(&self) -> TokenKind {
        match self {
            Expr::Value(value) => value.kind,
            Expr::Binary(binary) => binary.left.value_kind(),
            Expr::TypeConversion(_) => TokenKind::Type,
            Expr::Call(_) => TokenKind::Identifier,
            Expr::FunctionValue(_) => TokenKind::Keyword,
        }
    }
}

/// A literal or bare reference, carried through from its token.
///
/// ```text
/// x := 42
///      ^^ Value { literal: "42", kind: Integer }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub literal: String,
    pub kind: TokenKind,
}

/// How a variable's type was established at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeHint {
    /// Explicit annotation from a long-form declaration (`var x int`).
    Declared(Ident),
    /// Inferred from the initializer's value kind (`x := 2`).
    Inferred(TokenKind),
    /// Neither annotated nor initialized (`var x`).
    Unspecified,
}

/// A variable declaration, long form or short form.
///
/// ```text
/// var greeting string = "hi"
/// count := 1
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: Ident,
    pub ty: TypeHint,
    pub value: Option<Expr>,
    /// Derived from the leading character of `name`, not separate syntax.
    pub exported: bool,
}

/// A named function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Ident,
    pub ret: Option<Ident>,
    pub args: Vec<FunctionArgument>,
    pub body: Vec<Stmt>,
    /// Derived from the leading character of `name`, not separate syntax.
    pub exported: bool,
}

/// One declared parameter: `name [...]type`.
///
/// At most one argument per list is variadic, and only the final one.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArgument {
    pub name: Ident,
    pub ty: Ident,
    pub variadic: bool,
}

/// An anonymous function literal in expression position.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionValue {
    pub args: Vec<FunctionArgument>,
    pub ret: Option<Ident>,
    pub body: Vec<Stmt>,
}

/// A function call: `print(1, x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: Ident,
    pub args: Vec<CallArgument>,
}

/// One call argument, paired with its inferred value kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgument {
    pub kind: TokenKind,
    pub value: Expr,
}

/// A type conversion: `int(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeConversion {
    pub target: Ident,
    pub value: Box<Expr>,
}

/// Binary operators, with the precedence the expression parser climbs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The lowest precedence any operator has; climbing starts here.
    pub const MIN_PRECEDENCE: u8 = 1;

    /// Resolve a separator spelling to an operator.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// The operator's source spelling.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Binding strength: additive operators bind weaker than multiplicative.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A binary expression.
///
/// `parenthesized` is set only when the expression was read from an
/// explicitly parenthesized source span, preserving grouping for downstream
/// consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
    pub parenthesized: bool,
}
