//! Parse error types.

use calf_lex::{LexError, Token, TokenKind};
use calf_util::Position;
use thiserror::Error;

/// Errors produced while folding tokens into forms.
///
/// Lex errors pass through transparently; the consumer of the form
/// stream sees a single error type at the pull point.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// An error surfaced by the underlying token stream.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A closing delimiter with no frame it can close. When the
    /// delimiter would close an outer frame, that frame's open token is
    /// carried as a hint.
    #[error(
        "UNEXPECTED_CLOSE at {}: unmatched {}{}",
        .token.location(),
        .token.text,
        close_hint(.matching_open)
    )]
    UnexpectedClose {
        /// The offending close token.
        token: Token,
        /// The outer open token this close would match, if any.
        matching_open: Option<Token>,
    },

    /// End of input with a frame still open.
    #[error(
        "MISSING_CLOSE at {}: expected {} to close {} opened here, got end of input",
        .open.location(),
        .expected.name(),
        .open.text
    )]
    MissingClose {
        /// The close kind that never arrived.
        expected: TokenKind,
        /// The token that opened the unterminated frame.
        open: Token,
    },

    /// A map literal closed with an odd number of child forms.
    #[error(
        "ODD_DICT at {}: map opened here holds an odd number of forms at {end}",
        .open.location()
    )]
    OddDict {
        /// The `{` token.
        open: Token,
        /// Position of the closing `}`.
        end: Position,
    },

    /// A string literal that is unterminated or carries a malformed
    /// escape sequence.
    #[error("BAD_STRING at {}: {reason}", .token.location())]
    BadString {
        /// The offending string token.
        token: Token,
        /// What was wrong with it.
        reason: String,
    },

    /// An integer literal outside the 64-bit signed range.
    #[error(
        "NUMERIC_OVERFLOW at {}: integer literal {} does not fit in 64 bits",
        .token.location(),
        .token.text
    )]
    NumericOverflow {
        /// The offending integer token.
        token: Token,
    },

    /// A float literal the grammar admits but IEEE-754 parsing rejects,
    /// such as an exponent marker with no digits.
    #[error(
        "BAD_NUMBER at {}: malformed float literal {}",
        .token.location(),
        .token.text
    )]
    BadNumber {
        /// The offending float token.
        token: Token,
    },
}

fn close_hint(matching_open: &Option<Token>) -> String {
    match matching_open {
        Some(open) => format!(" (possibly closing {})", open.location()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calf_lex::lex_str;

    fn token_for(text: &str) -> Token {
        lex_str(text).next().unwrap().unwrap()
    }

    #[test]
    fn test_unexpected_close_without_hint() {
        let err = ParseError::UnexpectedClose {
            token: token_for(")"),
            matching_open: None,
        };
        assert_eq!(
            err.to_string(),
            "UNEXPECTED_CLOSE at <buffer>:1:1: unmatched )"
        );
    }

    #[test]
    fn test_unexpected_close_with_hint() {
        let err = ParseError::UnexpectedClose {
            token: token_for(")"),
            matching_open: Some(token_for("(")),
        };
        assert!(err.to_string().contains("possibly closing <buffer>:1:1"));
    }

    #[test]
    fn test_missing_close_display() {
        let err = ParseError::MissingClose {
            expected: TokenKind::ParenRight,
            open: token_for("("),
        };
        assert_eq!(
            err.to_string(),
            "MISSING_CLOSE at <buffer>:1:1: expected PAREN_RIGHT to close ( opened here, got end of input"
        );
    }

    #[test]
    fn test_lex_error_passes_through() {
        let lex_err = LexError::IncompleteToken {
            source_name: std::sync::Arc::from("<buffer>"),
            position: Position::START,
            buffer: "x".to_string(),
        };
        let err = ParseError::from(lex_err.clone());
        assert_eq!(err.to_string(), lex_err.to_string());
    }
}
