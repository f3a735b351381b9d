use std::{any::Any, fmt::{Debug, Display}, ops::Deref};

use crate::{
    errors::errors::{Error, ErrorImpl},
    type_checker::capabilities::Capability,
};

/// Node Kinds
///
/// Every distinct kind of node the syntax layer can hand to the checker.
/// Host-defined kinds use `Extension`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum NodeKind {
    // Literals
    Int,
    Bool,
    String,
    IString,
    Void,
    Undefined,

    // Bindings
    Identifier,
    Express,
    Declare,
    Assign,

    // Containers
    Group,
    Block,
    Array,
    Range,
    Dict,
    ObjectLiteral,

    // Use
    Call,
    Access,
    Index,

    // Control flow
    If,
    Loop,

    // Callables
    FunctionLiteral,
    PrototypeNativeAction,

    // Binary operators
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

    // Unary operators
    Not,
    UnaryPos,
    UnaryNeg,
    UnaryMul,
    UnaryDiv,
    AtHandle,
    CycleLeft,
    CycleRight,
    Suppress,

    Extension(&'static ExtensionKind),
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Extension(extension) => write!(f, "{}", extension.name),
            kind => write!(f, "{:?}", kind),
        }
    }
}

/// A host-defined node kind.
///
/// Deriving from a capability marker (listing it in `derives`) is all it takes
/// for the kind to be accepted wherever that capability is checked.
///
/// ```ignore
/// static MATRIX: ExtensionKind = ExtensionKind {
///     name: "Matrix",
///     derives: &[Capability::Indexable, Capability::Multipliable],
/// };
/// ```
#[derive(PartialEq, Eq, Hash, Debug)]
pub struct ExtensionKind {
    pub name: &'static str,
    pub derives: &'static [Capability],
}

impl ExtensionKind {
    pub fn derives_from(&self, capability: Capability) -> bool {
        self.derives.contains(&capability)
    }
}

/// Mutability qualifier of a binding.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DeclarationType {
    Let,
    Const,
}

/// Node Trait
///
/// Defines the behavior of all node kinds in the syntax tree.
pub trait Node: Debug {
    /// Returns the kind of the node.
    fn get_node_kind(&self) -> NodeKind;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the node into a NodeWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> NodeWrapper;
}

/// Node Wrapper
///
/// A wrapper that allows for any node kind to be stored with helper methods
#[derive(Debug)]
pub struct NodeWrapper(Box<dyn Node>);

impl NodeWrapper {
    pub fn new<T: Node + 'static>(node: T) -> Self {
        NodeWrapper(Box::new(node))
    }

    /// Shorthand for `self.as_any().downcast_ref::<T>()`
    pub fn downcast_ref<T: Node + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Deref for NodeWrapper {
    type Target = Box<dyn Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Node for NodeWrapper {
    fn get_node_kind(&self) -> NodeKind {
        self.0.get_node_kind()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> NodeWrapper {
        self.0.clone_wrapper()
    }
}

impl Clone for NodeWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Downcasts a node to the struct its kind promises.
///
/// A mismatch means a node reported a kind it does not implement, which the
/// checker cannot recover from.
pub fn downcast_node<T: Node + 'static>(node: &dyn Node) -> Result<&T, Error> {
    node.as_any().downcast_ref::<T>().ok_or_else(|| {
        Error::new(ErrorImpl::UnsupportedShape {
            shape: format!(
                "{} node is not a {}",
                node.get_node_kind(),
                std::any::type_name::<T>()
            ),
        })
    })
}
