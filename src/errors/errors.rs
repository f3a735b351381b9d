use std::fmt::Display;

use thiserror::Error;

/// An unrecoverable error raised during a typing pass.
///
/// These never describe a flaw in the analyzed program. They mean the checker
/// reached a node kind or shape it has no coverage for, or a scope invariant
/// (constants stay constant) was violated. User-facing outcomes travel as
/// `TypeExpr::Fail` or `false` instead.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::ConstantReassignment { .. } => "ConstantReassignment",
            ErrorImpl::ConstantRedeclaration { .. } => "ConstantRedeclaration",
            ErrorImpl::NoResolver { .. } => "NoResolver",
            ErrorImpl::NoChecker { .. } => "NoChecker",
            ErrorImpl::UnsupportedShape { .. } => "UnsupportedShape",
            ErrorImpl::ParameterizedTyping { .. } => "ParameterizedTyping",
            ErrorImpl::NonConcreteOperand { .. } => "NonConcreteOperand",
            ErrorImpl::CyclicBinding { .. } => "CyclicBinding",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::ConstantReassignment { variable } => ErrorTip::Suggestion(format!(
                "`{}` is const, declare it with `let` to allow assignment",
                variable
            )),
            ErrorImpl::ConstantRedeclaration { variable } => ErrorTip::Suggestion(format!(
                "`{}` is const in this scope, shadow it from an inner scope instead",
                variable
            )),
            ErrorImpl::NoResolver { kind } => ErrorTip::Suggestion(format!(
                "No type resolver is registered for `{}` nodes",
                kind
            )),
            ErrorImpl::NoChecker { kind } => ErrorTip::Suggestion(format!(
                "No validity check is implemented for `{}` nodes",
                kind
            )),
            ErrorImpl::UnsupportedShape { .. } => ErrorTip::None,
            ErrorImpl::ParameterizedTyping { kind } => ErrorTip::Suggestion(format!(
                "Parameterized typing of `{}` has not yet been implemented",
                kind
            )),
            ErrorImpl::NonConcreteOperand { .. } => ErrorTip::Suggestion(String::from(
                "Only operands with a concrete type can be checked for now",
            )),
            ErrorImpl::CyclicBinding { variable } => ErrorTip::Suggestion(format!(
                "`{}` is typed from its own value, give it a declared type",
                variable
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("variable {variable:?} not found in scope")]
    VariableNotDeclared { variable: String },
    #[error("attempted to assign to constant variable {variable:?}")]
    ConstantReassignment { variable: String },
    #[error("attempted to redeclare {variable:?}, which is const in the current scope")]
    ConstantRedeclaration { variable: String },
    #[error("INTERNAL ERROR: typeof not implemented for {kind}")]
    NoResolver { kind: String },
    #[error("INTERNAL ERROR: typecheck not implemented for {kind}")]
    NoChecker { kind: String },
    #[error("INTERNAL ERROR: unsupported shape: {shape}")]
    UnsupportedShape { shape: String },
    #[error("INTERNAL ERROR: parameterized typeof not implemented for {kind}")]
    ParameterizedTyping { kind: String },
    #[error("INTERNAL ERROR: expected a concrete type for operand, found {operand}")]
    NonConcreteOperand { operand: String },
    #[error("INTERNAL ERROR: the value bound to {variable:?} refers back to it")]
    CyclicBinding { variable: String },
}
