//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_name() {
    let error = Error::new(ErrorImpl::VariableNotDeclared {
        variable: "x".to_string(),
    });

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_error_from_impl() {
    let error: Error = ErrorImpl::ConstantReassignment {
        variable: "print".to_string(),
    }
    .into();

    assert_eq!(error.get_error_name(), "ConstantReassignment");
    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::ConstantReassignment { variable } if variable == "print"
    ));
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::NoResolver {
        kind: "Call".to_string(),
    });

    assert_eq!(
        error.to_string(),
        "INTERNAL ERROR: typeof not implemented for Call"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnsupportedShape {
        shape: "group with 2 expressed items".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::ConstantRedeclaration {
        variable: "x".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`x`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_cyclic_binding_error() {
    let error = Error::new(ErrorImpl::CyclicBinding {
        variable: "x".to_string(),
    });

    assert_eq!(error.get_error_name(), "CyclicBinding");
    assert_eq!(
        error.to_string(),
        "INTERNAL ERROR: the value bound to \"x\" refers back to it"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "`x` is typed from its own value, give it a declared type"
    );
}
