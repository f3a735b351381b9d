use crate::{type_checker::scope::DeclaredType, IMPL_NODE};

use super::ast::{DeclarationType, NodeKind, NodeWrapper};

/// Block Statement
/// A lexically scoped sequence. Typing it opens a child scope.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub items: Vec<NodeWrapper>,
}

IMPL_NODE!(BlockStmt, NodeKind::Block);

/// Declare Statement
/// `let x:int = 1` / `const y = 2`
#[derive(Debug, Clone)]
pub struct DeclareStmt {
    pub name: String,
    pub declaration_type: DeclarationType,
    pub declared_type: DeclaredType,
    pub value: NodeWrapper,
}

IMPL_NODE!(DeclareStmt, NodeKind::Declare);

/// Assign Statement
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub name: String,
    pub value: NodeWrapper,
}

IMPL_NODE!(AssignStmt, NodeKind::Assign);

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: NodeWrapper,
    pub then_body: NodeWrapper,
    pub else_body: Option<NodeWrapper>,
}

IMPL_NODE!(IfStmt, NodeKind::If);

#[derive(Debug, Clone)]
pub struct LoopStmt {
    pub condition: NodeWrapper,
    pub body: NodeWrapper,
}

IMPL_NODE!(LoopStmt, NodeKind::Loop);
