//! Callable node kinds.
//!
//! Function literals and native-action prototypes arrive from the post-parse
//! layer with their signatures already resolved. The checker never looks
//! inside a body; it only needs to know these kinds are callable and what
//! shape they declare.

use crate::{type_checker::type_expr::TypeExpr, IMPL_NODE};

use super::ast::{NodeKind, NodeWrapper};

/// A declared parameter of a callable.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub param_type: TypeExpr,
    pub default: Option<NodeWrapper>,
}

/// Represents a native action prototype
///
/// The declared shape of a built-in action. The evaluator binds the name to
/// real native behavior; here only the signature matters.
#[derive(Debug, Clone)]
pub struct PrototypeNativeAction {
    pub parameters: Vec<Parameter>,
    pub return_type: TypeExpr,
}

IMPL_NODE!(PrototypeNativeAction, NodeKind::PrototypeNativeAction);

/// Represents a function literal
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub parameters: Vec<Parameter>,
    pub return_type: TypeExpr,
    pub body: NodeWrapper,
}

IMPL_NODE!(FunctionLiteral, NodeKind::FunctionLiteral);
