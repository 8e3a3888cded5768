//! PHP operator descriptors and the resolver seam.
//!
//! Every token the classifier tags [`OP`](crate::TokenKind::OP) is checked
//! against an [`OperatorResolver`]. A resolved token carries its
//! descriptor as payload. A token the resolver rejects loses the operator
//! bit and degrades to [`OTHER`](crate::TokenKind::OTHER).
//!
//! # Context
//!
//! Five spellings have two meanings, decided by the previous token:
//!
//! | text | after an operand | otherwise |
//! |------|------------------|-----------|
//! | `+`  | addition         | unary plus |
//! | `-`  | subtraction      | negation |
//! | `&`  | bitwise and      | reference |
//! | `++` | post-increment   | pre-increment |
//! | `--` | post-decrement   | pre-decrement |
//!
//! An operand is a literal, an identifier that is not itself an operator,
//! or a closing `)` / `]` (see [`Token::ends_operand`]).

use crate::Token;

use Arity::{Binary, Ternary, Unary};
use Assoc::{Left, NonAssoc, Right};
use OperatorId as O;

/// Operator identity.
///
/// The discriminant indexes [`OPERATORS`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum OperatorId {
    // Member access
    Arrow,
    DoubleColon,

    // Object operators
    New,
    Clone,

    // Unary
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    Negate,
    UnaryPlus,
    BitNot,
    Reference,
    Silence,
    CastInt,
    CastFloat,
    CastBool,
    CastString,
    CastArray,
    CastObject,
    CastUnset,
    Instanceof,
    Not,

    // Binary arithmetic
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Concat,
    Shl,
    Shr,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,
    NotEqAngle,
    Identical,
    NotIdentical,

    // Bitwise and logical
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Ternary,

    // Assignment
    Assign,
    AssignRef,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ConcatAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,

    Comma,
}

/// Associativity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Assoc {
    Left,
    Right,
    NonAssoc,
}

/// Number of operands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Unary,
    Binary,
    Ternary,
}

/// Static operator descriptor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Operator {
    pub id: OperatorId,
    /// Canonical spelling (lowercase for word operators and casts).
    pub text: &'static str,
    /// Binding strength. Lower values bind tighter.
    pub precedence: u8,
    pub assoc: Assoc,
    pub arity: Arity,
}

const fn op(
    id: OperatorId,
    text: &'static str,
    precedence: u8,
    assoc: Assoc,
    arity: Arity,
) -> Operator {
    Operator {
        id,
        text,
        precedence,
        assoc,
        arity,
    }
}

/// Every PHP operator, in [`OperatorId`] order.
pub static OPERATORS: [Operator; 59] = [
    op(O::Arrow, "->", 1, Left, Binary),
    op(O::DoubleColon, "::", 1, Left, Binary),
    op(O::New, "new", 2, NonAssoc, Unary),
    op(O::Clone, "clone", 2, NonAssoc, Unary),
    op(O::PreIncrement, "++", 3, Right, Unary),
    op(O::PreDecrement, "--", 3, Right, Unary),
    op(O::PostIncrement, "++", 3, Left, Unary),
    op(O::PostDecrement, "--", 3, Left, Unary),
    op(O::Negate, "-", 3, Right, Unary),
    op(O::UnaryPlus, "+", 3, Right, Unary),
    op(O::BitNot, "~", 3, Right, Unary),
    op(O::Reference, "&", 3, Right, Unary),
    op(O::Silence, "@", 3, Right, Unary),
    op(O::CastInt, "(int)", 3, Right, Unary),
    op(O::CastFloat, "(float)", 3, Right, Unary),
    op(O::CastBool, "(bool)", 3, Right, Unary),
    op(O::CastString, "(string)", 3, Right, Unary),
    op(O::CastArray, "(array)", 3, Right, Unary),
    op(O::CastObject, "(object)", 3, Right, Unary),
    op(O::CastUnset, "(unset)", 3, Right, Unary),
    op(O::Instanceof, "instanceof", 4, NonAssoc, Binary),
    op(O::Not, "!", 5, Right, Unary),
    op(O::Mul, "*", 6, Left, Binary),
    op(O::Div, "/", 6, Left, Binary),
    op(O::Mod, "%", 6, Left, Binary),
    op(O::Add, "+", 7, Left, Binary),
    op(O::Sub, "-", 7, Left, Binary),
    op(O::Concat, ".", 7, Left, Binary),
    op(O::Shl, "<<", 8, Left, Binary),
    op(O::Shr, ">>", 8, Left, Binary),
    op(O::Lt, "<", 9, NonAssoc, Binary),
    op(O::Gt, ">", 9, NonAssoc, Binary),
    op(O::LtEq, "<=", 9, NonAssoc, Binary),
    op(O::GtEq, ">=", 9, NonAssoc, Binary),
    op(O::Eq, "==", 10, NonAssoc, Binary),
    op(O::NotEq, "!=", 10, NonAssoc, Binary),
    op(O::NotEqAngle, "<>", 10, NonAssoc, Binary),
    op(O::Identical, "===", 10, NonAssoc, Binary),
    op(O::NotIdentical, "!==", 10, NonAssoc, Binary),
    op(O::BitAnd, "&", 11, Left, Binary),
    op(O::BitXor, "^", 12, Left, Binary),
    op(O::BitOr, "|", 13, Left, Binary),
    op(O::And, "&&", 14, Left, Binary),
    op(O::Or, "||", 15, Left, Binary),
    op(O::Ternary, "?", 16, Left, Ternary),
    op(O::Assign, "=", 17, Right, Binary),
    op(O::AssignRef, "=&", 17, Right, Binary),
    op(O::AddAssign, "+=", 17, Right, Binary),
    op(O::SubAssign, "-=", 17, Right, Binary),
    op(O::MulAssign, "*=", 17, Right, Binary),
    op(O::DivAssign, "/=", 17, Right, Binary),
    op(O::ModAssign, "%=", 17, Right, Binary),
    op(O::ConcatAssign, ".=", 17, Right, Binary),
    op(O::AndAssign, "&=", 17, Right, Binary),
    op(O::OrAssign, "|=", 17, Right, Binary),
    op(O::XorAssign, "^=", 17, Right, Binary),
    op(O::ShlAssign, "<<=", 17, Right, Binary),
    op(O::ShrAssign, ">>=", 17, Right, Binary),
    op(O::Comma, ",", 18, Left, Binary),
];

/// Descriptor for `id`.
#[inline]
pub fn operator(id: OperatorId) -> &'static Operator {
    &OPERATORS[id as usize]
}

/// Maps operator text to a descriptor.
///
/// `prev` is the last token already in the sink, used to tell unary from
/// binary spellings. Returning `None` rejects the token as an operator.
pub trait OperatorResolver {
    fn resolve(&self, text: &[u8], prev: Option<&Token>) -> Option<&'static Operator>;
}

/// The PHP operator table.
#[derive(Copy, Clone, Debug, Default)]
pub struct PhpOperators;

impl OperatorResolver for PhpOperators {
    fn resolve(&self, text: &[u8], prev: Option<&Token>) -> Option<&'static Operator> {
        let after_operand = prev.is_some_and(Token::ends_operand);
        let id = match text {
            b"+" if after_operand => O::Add,
            b"+" => O::UnaryPlus,
            b"-" if after_operand => O::Sub,
            b"-" => O::Negate,
            b"&" if after_operand => O::BitAnd,
            b"&" => O::Reference,
            b"++" if after_operand => O::PostIncrement,
            b"++" => O::PreIncrement,
            b"--" if after_operand => O::PostDecrement,
            b"--" => O::PreDecrement,
            _ => {
                return OPERATORS
                    .iter()
                    .find(|entry| entry.text.as_bytes().eq_ignore_ascii_case(text));
            }
        };
        Some(operator(id))
    }
}
