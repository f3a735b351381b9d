//! Validity checks for calls, indexing and dispatched operators.
//!
//! Judgements are made by capability membership, not by reasoning over a type
//! lattice. `Ok(false)` is an ordinary negative answer about the program;
//! `Err` means the checker hit something it cannot judge yet.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{downcast_node, Node, NodeKind, NodeWrapper},
        expressions::{BinaryExpr, CallExpr, IdentifierExpr, IndexExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    capabilities::{is_callable, is_indexable, is_indexer, Capability},
    dispatch::{is_dispatched, lookup_binary},
    scope::Scope,
    type_of::type_of,
};

/// Checks whether `node` is well-formed from a type perspective.
pub fn type_check(node: &dyn Node, scope: &Scope<'_>) -> Result<bool, Error> {
    match node.get_node_kind() {
        NodeKind::Call => type_check_call(downcast_node::<CallExpr>(node)?, scope),
        NodeKind::Index => type_check_index(downcast_node::<IndexExpr>(node)?, scope),
        kind => match node.as_any().downcast_ref::<BinaryExpr>() {
            Some(binary) if is_dispatched(binary.operator) => {
                type_check_binary_dispatch(binary, scope)
            }
            _ => Err(Error::new(ErrorImpl::NoChecker {
                kind: kind.to_string(),
            })),
        },
    }
}

/// Best-effort, single-step resolution of an expression to the node it stands for.
///
/// Identifiers resolve to their bound value and `@x` to `x`. Anything else
/// resolves to itself.
pub fn resolve_structure(node: &dyn Node, scope: &Scope<'_>) -> Result<Rc<NodeWrapper>, Error> {
    match node.get_node_kind() {
        NodeKind::Identifier => {
            let identifier = downcast_node::<IdentifierExpr>(node)?;
            Ok(scope.get(&identifier.name, true)?.value)
        }
        NodeKind::AtHandle => Ok(Rc::new(downcast_node::<UnaryExpr>(node)?.operand.clone())),
        kind @ (NodeKind::Group | NodeKind::Access) => {
            Err(Error::new(ErrorImpl::UnsupportedShape {
                shape: format!("structural resolution through {}", kind),
            }))
        }
        _ => Ok(Rc::new(node.clone_wrapper())),
    }
}

// Argument counts and types are not matched against the callee yet
fn type_check_call(call: &CallExpr, scope: &Scope<'_>) -> Result<bool, Error> {
    let callee = resolve_structure(&call.callee, scope)?;
    Ok(is_callable(&*callee))
}

fn type_check_index(index: &IndexExpr, scope: &Scope<'_>) -> Result<bool, Error> {
    let left = resolve_structure(&index.left, scope)?;
    let right = resolve_structure(&index.right, scope)?;
    if is_indexable(&*left) && is_indexer(&*right) {
        return Ok(true);
    }

    let left_type = type_of(&index.left, scope, false)?.concrete()?;
    let right_type = type_of(&index.right, scope, false)?.concrete()?;

    Ok(Capability::Indexable.admits(&left_type) && Capability::Indexer.admits(&right_type))
}

fn type_check_binary_dispatch(binary: &BinaryExpr, scope: &Scope<'_>) -> Result<bool, Error> {
    let left_type = type_of(&binary.left, scope, false)?.concrete()?;
    let right_type = type_of(&binary.right, scope, false)?.concrete()?;

    Ok(lookup_binary(binary.operator, &left_type, &right_type).is_some())
}
