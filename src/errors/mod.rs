//! Error types for the typing layer.
//!
//! Only the unrecoverable channel lives here:
//!
//! - Coverage gaps (no resolver or checker for a node kind)
//! - Explicitly unsupported shapes reached during resolution
//! - Constant bindings being reassigned or redeclared
//!
//! Ill-typed programs are not errors; they produce `TypeExpr::Fail` or `false`.

pub mod errors;

#[cfg(test)]
mod tests;
