//! Utility macros for the typing layer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `IMPL_NODE!` - Implements `Node` for a node struct
//! - `MK_TYPE!` - Creates a concrete `TypeExpr`
//!
//! These macros reduce boilerplate in the syntax model.

/// Implements the `Node` trait for a cloneable node struct.
///
/// # Arguments
///
/// * `$node` - The node struct (must implement `Clone`)
/// * `$kind` - The NodeKind it reports, or a closure-like `|self| expr`
///   for structs whose kind depends on a field
///
/// # Example
///
/// ```ignore
/// IMPL_NODE!(IntExpr, NodeKind::Int);
/// IMPL_NODE!(BinaryExpr, |node| node.operator.get_node_kind());
/// ```
#[macro_export]
macro_rules! IMPL_NODE {
    ($node:ty, |$this:ident| $kind:expr) => {
        impl $crate::ast::ast::Node for $node {
            fn get_node_kind(&self) -> $crate::ast::ast::NodeKind {
                let $this = self;
                $kind
            }
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn clone_wrapper(&self) -> $crate::ast::ast::NodeWrapper {
                $crate::ast::ast::NodeWrapper::new(self.clone())
            }
        }
    };
    ($node:ty, $kind:expr) => {
        $crate::IMPL_NODE!($node, |_node| $kind);
    };
}

/// Creates a concrete `TypeExpr` for a node kind.
///
/// # Example
///
/// ```ignore
/// assert!(matches!(MK_TYPE!(NodeKind::Int), TypeExpr::Type(NodeKind::Int)));
/// ```
#[macro_export]
macro_rules! MK_TYPE {
    ($kind:expr) => {
        $crate::type_checker::type_expr::TypeExpr::Type($kind)
    };
}
