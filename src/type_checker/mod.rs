//! Static type analysis module.
//!
//! Determines the type of an expression without executing it, and judges
//! whether calls, index operations and dispatched operators are well-formed:
//!
//! - Lexical scopes with `let`/`const` bindings
//! - Type inference by per-node-kind resolvers
//! - Capability sets (callable, indexable, indexer, multipliable)
//! - The binary operator dispatch tables
//!
//! Each inference pass owns its own scope tree. The resolver and dispatch
//! tables are built once and shared read-only.

pub mod capabilities;
pub mod dispatch;
pub mod scope;
pub mod type_check;
pub mod type_expr;
pub mod type_of;
