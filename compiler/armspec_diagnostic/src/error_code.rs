//! Error codes for front-end diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Parser errors
//! - E9xxx: Limits and internal errors

use std::fmt;

/// Error codes for all front-end diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// No token pattern matches the input
    E0001,
    /// Numeral that does not fit a 64-bit integer
    E0002,
    /// Block comment without a closing `*/`
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,

    // Limits (E9xxx)
    /// Too many errors, unit abandoned
    E9002,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Check if this is a lexer error.
    pub fn is_lexer_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003
        )
    }

    /// Check if this is a parser error.
    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_phases() {
        assert!(ErrorCode::E0001.is_lexer_error());
        assert!(ErrorCode::E1003.is_parser_error());
        assert!(!ErrorCode::E9002.is_parser_error());
        assert!(!ErrorCode::E9002.is_lexer_error());
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    }
}
