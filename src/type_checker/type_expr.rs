use std::fmt::Display;

use crate::{
    ast::ast::{NodeKind, NodeWrapper},
    errors::errors::{Error, ErrorImpl},
};

/// The result of inferring the type of a node.
#[derive(Debug, Clone)]
pub enum TypeExpr {
    /// A concrete node kind, e.g. `Type(NodeKind::Int)`
    Type(NodeKind),
    // Type algebra. Nothing produces these yet.
    And(Box<TypeExpr>, Box<TypeExpr>),
    Or(Box<TypeExpr>, Box<TypeExpr>),
    Not(Box<TypeExpr>),
    /// A literal expression used as its own singleton type
    Literal(NodeWrapper),
    /// Underconstrained, not yet determined. Distinct from `Fail`.
    TBD,
    /// Not well-typed, with an optional human-readable reason
    Fail(Option<String>),
}

impl TypeExpr {
    /// The type of "no value produced".
    pub fn void() -> Self {
        TypeExpr::Type(NodeKind::Void)
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        TypeExpr::Fail(Some(reason.into()))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeExpr::Type(NodeKind::Void))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, TypeExpr::Fail(_))
    }

    /// Returns the node kind of a concrete `Type`, or fails the pass.
    ///
    /// Used where only concrete operand types are handled for now.
    pub fn concrete(&self) -> Result<NodeKind, Error> {
        self.as_concrete().copied().ok_or_else(|| {
            Error::new(ErrorImpl::NonConcreteOperand {
                operand: self.to_string(),
            })
        })
    }

    /// Returns the node kind if this is a concrete `Type`.
    pub fn as_concrete(&self) -> Option<&NodeKind> {
        match self {
            TypeExpr::Type(kind) => Some(kind),
            _ => None,
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Type(kind) => write!(f, "{}", kind),
            TypeExpr::And(left, right) => write!(f, "({} & {})", left, right),
            TypeExpr::Or(left, right) => write!(f, "({} | {})", left, right),
            TypeExpr::Not(operand) => write!(f, "!{}", operand),
            TypeExpr::Literal(node) => write!(f, "{:?}", node),
            TypeExpr::TBD => write!(f, "<TBD>"),
            TypeExpr::Fail(None) => write!(f, "<Fail>"),
            TypeExpr::Fail(Some(reason)) => write!(f, "<Fail: {}>", reason),
        }
    }
}
