//! Read error types.

use calf_lex::Token;
use calf_par::ParseError;
use thiserror::Error;

/// Errors produced while lowering forms to values.
///
/// Lex and parse errors pass through transparently.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReadError {
    /// An error surfaced by the underlying form stream.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A form kind the reader has no rule for, such as trivia kept by a
    /// non-discarding parser.
    #[error("UNSUPPORTED_FORM at {}: cannot read {kind} form", .token.location())]
    UnsupportedForm {
        /// Wire name of the unreadable kind.
        kind: &'static str,
        /// The offending token.
        token: Token,
    },

    /// A prefix marker with nothing after it to apply to.
    #[error(
        "DANGLING_PREFIX at {}: {} marker with no following form",
        .marker.location(),
        .marker.text
    )]
    DanglingPrefix {
        /// The marker token.
        marker: Token,
    },
}
