use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::ast::{ast::NodeKind, expressions::BinaryOperator};

type PairTable = HashMap<(NodeKind, NodeKind), NodeKind>;

lazy_static! {
    /// Operand pairs whose result does not depend on operand order. A pair is
    /// listed once and also matches with the operands swapped.
    pub static ref BINARY_DISPATCH_LOOKUP: HashMap<BinaryOperator, PairTable> = {
        let mut map = HashMap::new();

        let mut mul = HashMap::new();
        mul.insert((NodeKind::Int, NodeKind::Int), NodeKind::Int);
        map.insert(BinaryOperator::Mul, mul);

        map
    };

    /// Operand pairs where order matters, e.g. a string repeated by a count.
    /// Consulted before the commutative table, by exact order only.
    pub static ref UNSYMMETRIC_BINARY_DISPATCH_LOOKUP: HashMap<BinaryOperator, PairTable> =
        HashMap::new();
}

/// Whether `operator` has any entries, i.e. is wired through dispatch at all.
pub fn is_dispatched(operator: BinaryOperator) -> bool {
    BINARY_DISPATCH_LOOKUP.contains_key(&operator)
        || UNSYMMETRIC_BINARY_DISPATCH_LOOKUP.contains_key(&operator)
}

/// Looks up the result kind of `left <operator> right`.
pub fn lookup_binary(
    operator: BinaryOperator,
    left: &NodeKind,
    right: &NodeKind,
) -> Option<NodeKind> {
    if let Some(result) = UNSYMMETRIC_BINARY_DISPATCH_LOOKUP
        .get(&operator)
        .and_then(|table| table.get(&(*left, *right)))
    {
        return Some(*result);
    }

    let table = BINARY_DISPATCH_LOOKUP.get(&operator)?;
    table
        .get(&(*left, *right))
        .or_else(|| table.get(&(*right, *left)))
        .copied()
}
