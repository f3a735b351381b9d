//! Type inference without evaluation.
//!
//! `type_of` dispatches on node kind through a table built once on first use.
//! Node kinds with no entry are a coverage gap in the checker and abort the
//! pass with `NoResolver`; they are never reported as a typed `Fail`.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::{
    ast::{
        ast::{downcast_node, Node, NodeKind, NodeWrapper},
        expressions::{BinaryExpr, ExpressExpr, GroupExpr, IdentifierExpr, UnaryExpr},
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    MK_TYPE,
};

use super::{
    dispatch::{lookup_binary, BINARY_DISPATCH_LOOKUP, UNSYMMETRIC_BINARY_DISPATCH_LOOKUP},
    scope::{DeclaredType, Scope},
    type_expr::TypeExpr,
};

/// Resolves the type of one node kind.
///
/// `params` asks for fully parameterized typing (e.g. element types of a
/// container) instead of the shallow kind.
pub type Resolver =
    Box<dyn Fn(&dyn Node, &Scope<'_>, bool) -> Result<TypeExpr, Error> + Send + Sync>;

lazy_static! {
    static ref TYPE_OF_LOOKUP: HashMap<NodeKind, Resolver> = {
        let mut map: HashMap<NodeKind, Resolver> = HashMap::new();

        // Statements
        map.insert(NodeKind::Declare, short_circuit(NodeKind::Void, None));
        map.insert(NodeKind::Assign, short_circuit(NodeKind::Void, None));

        // Literals
        map.insert(NodeKind::Int, Box::new(identity));
        map.insert(NodeKind::Bool, Box::new(identity));
        map.insert(NodeKind::String, Box::new(identity));
        map.insert(NodeKind::IString, short_circuit(NodeKind::String, None));
        map.insert(NodeKind::Void, Box::new(identity));
        map.insert(NodeKind::Undefined, Box::new(identity));

        // Containers
        map.insert(NodeKind::Group, Box::new(type_of_group));
        map.insert(NodeKind::Block, Box::new(type_of_block));
        map.insert(
            NodeKind::Array,
            short_circuit(NodeKind::Array, Some(Box::new(parameterized_unsupported))),
        );

        // Bindings
        map.insert(NodeKind::Identifier, Box::new(type_of_identifier));
        map.insert(NodeKind::Express, Box::new(type_of_express));

        // Comparisons are boolean whatever the operands are
        map.insert(NodeKind::Less, short_circuit(NodeKind::Bool, None));
        map.insert(NodeKind::LessEqual, short_circuit(NodeKind::Bool, None));
        map.insert(NodeKind::Greater, short_circuit(NodeKind::Bool, None));
        map.insert(NodeKind::GreaterEqual, short_circuit(NodeKind::Bool, None));
        map.insert(NodeKind::Equal, short_circuit(NodeKind::Bool, None));

        // Every operator with a dispatch table entry
        for operator in BINARY_DISPATCH_LOOKUP
            .keys()
            .chain(UNSYMMETRIC_BINARY_DISPATCH_LOOKUP.keys())
        {
            map.insert(operator.get_node_kind(), Box::new(type_of_binary_dispatch));
        }

        // Rotation keeps the operand's type
        map.insert(NodeKind::CycleLeft, Box::new(type_of_operand));
        map.insert(NodeKind::CycleRight, Box::new(type_of_operand));

        map
    };
}

/// Returns the type of `node` as seen from `scope`.
pub fn type_of(node: &dyn Node, scope: &Scope<'_>, params: bool) -> Result<TypeExpr, Error> {
    let kind = node.get_node_kind();
    match TYPE_OF_LOOKUP.get(&kind) {
        Some(resolve) => resolve(node, scope, params),
        None => Err(Error::new(ErrorImpl::NoResolver {
            kind: kind.to_string(),
        })),
    }
}

fn identity(node: &dyn Node, _scope: &Scope<'_>, _params: bool) -> Result<TypeExpr, Error> {
    Ok(MK_TYPE!(node.get_node_kind()))
}

/// Always `ret`, unless parameterized typing is requested and a fallback exists.
fn short_circuit(ret: NodeKind, param_fallback: Option<Resolver>) -> Resolver {
    resolver(move |node, scope, params| match (&param_fallback, params) {
        (Some(fallback), true) => fallback(node, scope, params),
        _ => Ok(MK_TYPE!(ret)),
    })
}

fn resolver<F>(f: F) -> Resolver
where
    F: Fn(&dyn Node, &Scope<'_>, bool) -> Result<TypeExpr, Error> + Send + Sync + 'static,
{
    Box::new(f)
}

fn parameterized_unsupported(
    node: &dyn Node,
    _scope: &Scope<'_>,
    _params: bool,
) -> Result<TypeExpr, Error> {
    Err(Error::new(ErrorImpl::ParameterizedTyping {
        kind: node.get_node_kind().to_string(),
    }))
}

/// Types a sequence of items as one unit.
///
/// Void items are statements and drop out. What remains must be at most one
/// value.
fn type_of_items(
    items: &[NodeWrapper],
    scope: &Scope<'_>,
    params: bool,
) -> Result<TypeExpr, Error> {
    let mut expressed = vec![];
    for item in items {
        let ty = type_of(item, scope, params)?;
        if !ty.is_void() {
            expressed.push(ty);
        }
    }

    match expressed.len() {
        0 => Ok(TypeExpr::void()),
        1 => Ok(expressed.remove(0)),
        // TODO: multi-valued groups need a tuple-like TypeExpr before they can be typed
        n => Err(Error::new(ErrorImpl::UnsupportedShape {
            shape: format!(
                "group with {} expressed items ({})",
                n,
                expressed.iter().map(|ty| ty.to_string()).collect::<Vec<String>>().join(", ")
            ),
        })),
    }
}

fn type_of_group(node: &dyn Node, scope: &Scope<'_>, params: bool) -> Result<TypeExpr, Error> {
    let group = downcast_node::<GroupExpr>(node)?;
    type_of_items(&group.items, scope, params)
}

fn type_of_block(node: &dyn Node, scope: &Scope<'_>, params: bool) -> Result<TypeExpr, Error> {
    let block = downcast_node::<BlockStmt>(node)?;
    let scope = scope.child();
    type_of_items(&block.items, &scope, params)
}

fn type_of_identifier(node: &dyn Node, scope: &Scope<'_>, params: bool) -> Result<TypeExpr, Error> {
    let identifier = downcast_node::<IdentifierExpr>(node)?;

    scope.resolve_binding(&identifier.name, |var| match var.declared_type {
        DeclaredType::Typed(ty) => Ok(ty),
        DeclaredType::Untyped => type_of(&*var.value, scope, params),
    })
}

fn type_of_express(node: &dyn Node, scope: &Scope<'_>, params: bool) -> Result<TypeExpr, Error> {
    let express = downcast_node::<ExpressExpr>(node)?;

    scope.resolve_binding(&express.identifier.name, |var| {
        // A concrete declared type is the source of truth
        if let DeclaredType::Typed(ty @ TypeExpr::Type(_)) = var.declared_type {
            return Ok(ty);
        }

        type_of(&*var.value, scope, params)
    })
}

fn type_of_operand(node: &dyn Node, scope: &Scope<'_>, params: bool) -> Result<TypeExpr, Error> {
    let unary = downcast_node::<UnaryExpr>(node)?;
    type_of(&unary.operand, scope, params)
}

fn type_of_binary_dispatch(
    node: &dyn Node,
    scope: &Scope<'_>,
    params: bool,
) -> Result<TypeExpr, Error> {
    let binary = downcast_node::<BinaryExpr>(node)?;

    let left = type_of(&binary.left, scope, params)?;
    if left.is_fail() {
        return Ok(left);
    }
    let right = type_of(&binary.right, scope, params)?;
    if right.is_fail() {
        return Ok(right);
    }

    let left = left.concrete()?;
    let right = right.concrete()?;

    match lookup_binary(binary.operator, &left, &right) {
        Some(result) => Ok(MK_TYPE!(result)),
        None => Ok(TypeExpr::fail(format!(
            "no `{}` for {} and {}",
            binary.operator.symbol(),
            left,
            right
        ))),
    }
}
