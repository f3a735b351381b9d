//! Capability sets.
//!
//! Each capability is an open set of node kinds: a fixed built-in core, plus
//! the abstract marker kind for the capability, plus every extension kind that
//! derives from that marker. Checks never consult a mutable registry.

use crate::ast::ast::{ExtensionKind, Node, NodeKind};

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Capability {
    Callable,
    Indexable,
    Indexer,
    Multipliable,
}

// Abstract marker kinds. A node reporting one of these is a member of exactly
// that capability set and nothing else.
pub static CALLABLE_BASE: ExtensionKind = ExtensionKind {
    name: "CallableBase",
    derives: &[Capability::Callable],
};
pub static INDEXABLE_BASE: ExtensionKind = ExtensionKind {
    name: "IndexableBase",
    derives: &[Capability::Indexable],
};
pub static INDEXER_BASE: ExtensionKind = ExtensionKind {
    name: "IndexerBase",
    derives: &[Capability::Indexer],
};
pub static MULTIPLIABLE_BASE: ExtensionKind = ExtensionKind {
    name: "MultipliableBase",
    derives: &[Capability::Multipliable],
};

impl Capability {
    /// The built-in members of the set.
    pub fn core(&self) -> &'static [NodeKind] {
        match self {
            Capability::Callable => &[NodeKind::PrototypeNativeAction, NodeKind::FunctionLiteral],
            Capability::Indexable => &[NodeKind::Array, NodeKind::Range],
            Capability::Indexer => &[NodeKind::Array, NodeKind::Range],
            Capability::Multipliable => &[NodeKind::Int, NodeKind::Array, NodeKind::Range],
        }
    }

    /// The abstract kind a host node reports to join only this set.
    pub fn marker(&self) -> NodeKind {
        match self {
            Capability::Callable => NodeKind::Extension(&CALLABLE_BASE),
            Capability::Indexable => NodeKind::Extension(&INDEXABLE_BASE),
            Capability::Indexer => NodeKind::Extension(&INDEXER_BASE),
            Capability::Multipliable => NodeKind::Extension(&MULTIPLIABLE_BASE),
        }
    }

    /// Whether nodes of `kind` belong to this capability set.
    pub fn admits(&self, kind: &NodeKind) -> bool {
        match kind {
            NodeKind::Extension(extension) => extension.derives_from(*self),
            kind => self.core().contains(kind),
        }
    }
}

pub fn is_callable(node: &dyn Node) -> bool {
    Capability::Callable.admits(&node.get_node_kind())
}

pub fn is_indexable(node: &dyn Node) -> bool {
    Capability::Indexable.admits(&node.get_node_kind())
}

pub fn is_indexer(node: &dyn Node) -> bool {
    Capability::Indexer.admits(&node.get_node_kind())
}

/// Multiplication is judged through the dispatch table, so `type_check` never
/// consults this set. It is here for front ends and host code.
pub fn is_multipliable(node: &dyn Node) -> bool {
    Capability::Multipliable.admits(&node.get_node_kind())
}
