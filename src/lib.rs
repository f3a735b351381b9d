#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod type_checker;

/// Formats an error the way front ends print it.
///
/// ```text
/// Error: ConstantReassignment (`print` is const, declare it with `let` to allow assignment)
///   attempted to assign to constant variable "print"
/// ```
pub fn format_error(error: &Error) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n  {}", header, error)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_format_error_with_tip() {
        let error = Error::new(ErrorImpl::ConstantReassignment {
            variable: "print".to_string(),
        });

        assert_eq!(
            super::format_error(&error),
            "Error: ConstantReassignment (`print` is const, declare it with `let` to allow assignment)\n  attempted to assign to constant variable \"print\""
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(ErrorImpl::UnsupportedShape {
            shape: "structural resolution through Group".to_string(),
        });

        assert_eq!(
            super::format_error(&error),
            "Error: UnsupportedShape\n  INTERNAL ERROR: unsupported shape: structural resolution through Group"
        );
    }
}
