use crate::IMPL_NODE;

use super::ast::{NodeKind, NodeWrapper};

// LITERALS

/// Integer Expression
#[derive(Debug, Clone)]
pub struct IntExpr {
    pub value: i64,
}

IMPL_NODE!(IntExpr, NodeKind::Int);

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BoolExpr {
    pub value: bool,
}

IMPL_NODE!(BoolExpr, NodeKind::Bool);

/// String Expression
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
}

IMPL_NODE!(StringExpr, NodeKind::String);

/// Interpolated String Expression
/// Literal text interleaved with embedded expressions.
#[derive(Debug, Clone)]
pub struct IStringExpr {
    pub parts: Vec<NodeWrapper>,
}

IMPL_NODE!(IStringExpr, NodeKind::IString);

/// Void Expression
/// The value of something that produces no value.
#[derive(Debug, Clone)]
pub struct VoidExpr;

IMPL_NODE!(VoidExpr, NodeKind::Void);

/// Undefined Expression
#[derive(Debug, Clone)]
pub struct UndefinedExpr;

IMPL_NODE!(UndefinedExpr, NodeKind::Undefined);

// BINDINGS

/// Identifier Expression
/// A reference to a named binding.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
}

IMPL_NODE!(IdentifierExpr, NodeKind::Identifier);

/// Express Expression
/// Re-emits the value bound to an identifier as an expression.
#[derive(Debug, Clone)]
pub struct ExpressExpr {
    pub identifier: IdentifierExpr,
}

IMPL_NODE!(ExpressExpr, NodeKind::Express);

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    MemberIn,
    Add,
    Sub,
    Mul,
    Div,
    IDiv,
    Mod,
    Pow,
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
    LeftShift,
    RightShift,
}

impl BinaryOperator {
    pub fn get_node_kind(&self) -> NodeKind {
        match self {
            BinaryOperator::Less => NodeKind::Less,
            BinaryOperator::LessEqual => NodeKind::LessEqual,
            BinaryOperator::Greater => NodeKind::Greater,
            BinaryOperator::GreaterEqual => NodeKind::GreaterEqual,
            BinaryOperator::Equal => NodeKind::Equal,
            BinaryOperator::MemberIn => NodeKind::MemberIn,
            BinaryOperator::Add => NodeKind::Add,
            BinaryOperator::Sub => NodeKind::Sub,
            BinaryOperator::Mul => NodeKind::Mul,
            BinaryOperator::Div => NodeKind::Div,
            BinaryOperator::IDiv => NodeKind::IDiv,
            BinaryOperator::Mod => NodeKind::Mod,
            BinaryOperator::Pow => NodeKind::Pow,
            BinaryOperator::And => NodeKind::And,
            BinaryOperator::Or => NodeKind::Or,
            BinaryOperator::Xor => NodeKind::Xor,
            BinaryOperator::Nand => NodeKind::Nand,
            BinaryOperator::Nor => NodeKind::Nor,
            BinaryOperator::Xnor => NodeKind::Xnor,
            BinaryOperator::LeftShift => NodeKind::LeftShift,
            BinaryOperator::RightShift => NodeKind::RightShift,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Equal => "=?",
            BinaryOperator::MemberIn => "in",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::IDiv => "//",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "^",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::Xor => "xor",
            BinaryOperator::Nand => "nand",
            BinaryOperator::Nor => "nor",
            BinaryOperator::Xnor => "xnor",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
        }
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions.
///
/// The node kind is the operator's kind, so `a * b` is a `Mul` node.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: NodeWrapper,
    pub operator: BinaryOperator,
    pub right: NodeWrapper,
}

IMPL_NODE!(BinaryExpr, |node| node.operator.get_node_kind());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    UnaryPos,
    UnaryNeg,
    UnaryMul,
    UnaryDiv,
    /// `@x` - reflects/points at `x` rather than evaluating it
    AtHandle,
    CycleLeft,
    CycleRight,
    Suppress,
}

impl UnaryOperator {
    pub fn get_node_kind(&self) -> NodeKind {
        match self {
            UnaryOperator::Not => NodeKind::Not,
            UnaryOperator::UnaryPos => NodeKind::UnaryPos,
            UnaryOperator::UnaryNeg => NodeKind::UnaryNeg,
            UnaryOperator::UnaryMul => NodeKind::UnaryMul,
            UnaryOperator::UnaryDiv => NodeKind::UnaryDiv,
            UnaryOperator::AtHandle => NodeKind::AtHandle,
            UnaryOperator::CycleLeft => NodeKind::CycleLeft,
            UnaryOperator::CycleRight => NodeKind::CycleRight,
            UnaryOperator::Suppress => NodeKind::Suppress,
        }
    }
}

/// Unary Expression
/// Represents a prefix or postfix operation on an expression.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: NodeWrapper,
}

IMPL_NODE!(UnaryExpr, |node| node.operator.get_node_kind());

// USE

/// Call Expression
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: NodeWrapper,
    pub arguments: Vec<NodeWrapper>,
}

IMPL_NODE!(CallExpr, NodeKind::Call);

/// Access Expression
/// Member access (`a.b`).
#[derive(Debug, Clone)]
pub struct AccessExpr {
    pub left: NodeWrapper,
    pub member: IdentifierExpr,
}

IMPL_NODE!(AccessExpr, NodeKind::Access);

/// Index Expression
#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub left: NodeWrapper,
    pub right: NodeWrapper,
}

IMPL_NODE!(IndexExpr, NodeKind::Index);

// CONTAINERS

/// Group Expression
/// An ordered sequence of sub-expressions evaluated as one unit, without a
/// scope of its own.
#[derive(Debug, Clone)]
pub struct GroupExpr {
    pub items: Vec<NodeWrapper>,
}

IMPL_NODE!(GroupExpr, NodeKind::Group);

/// Array Expression
#[derive(Debug, Clone)]
pub struct ArrayExpr {
    pub items: Vec<NodeWrapper>,
}

IMPL_NODE!(ArrayExpr, NodeKind::Array);

/// Range Expression
/// Either bound may be left open.
#[derive(Debug, Clone)]
pub struct RangeExpr {
    pub start: Option<NodeWrapper>,
    pub end: Option<NodeWrapper>,
}

IMPL_NODE!(RangeExpr, NodeKind::Range);

/// Dictionary Expression
#[derive(Debug, Clone)]
pub struct DictExpr {
    pub pairs: Vec<(NodeWrapper, NodeWrapper)>,
}

IMPL_NODE!(DictExpr, NodeKind::Dict);

/// Object Literal Expression
#[derive(Debug, Clone)]
pub struct ObjectLiteralExpr {
    pub items: Vec<NodeWrapper>,
}

IMPL_NODE!(ObjectLiteralExpr, NodeKind::ObjectLiteral);
