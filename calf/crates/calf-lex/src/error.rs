//! Lexical error types.

use std::sync::Arc;

use calf_util::Position;
use thiserror::Error;

use crate::token::TokenKind;

/// Errors produced while scanning tokens.
///
/// Every variant carries the source name and the position the failed
/// token started at (or, for [`LexError::NoCandidates`], the position of
/// the offending character).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    /// The first character of a token matched no rule in the table.
    #[error(
        "NO_CANDIDATES at {source_name}:{position}: character {character:?} matches no token pattern"
    )]
    NoCandidates {
        /// Source name.
        source_name: Arc<str>,
        /// Position of the unmatched character.
        position: Position,
        /// The character that matched nothing.
        character: char,
    },

    /// The buffer can no longer be extended, and no surviving rule
    /// matches it in full. Only reachable with token tables whose
    /// patterns are not prefix-closed.
    #[error(
        "AMBIGUOUS_TOKEN at {source_name}:{position}: buffer {buffer:?} is ambiguous between {}",
        kind_list(.candidates)
    )]
    AmbiguousToken {
        /// Source name.
        source_name: Arc<str>,
        /// Start position of the buffer.
        position: Position,
        /// The accumulated text.
        buffer: String,
        /// The rule kinds still alive when the scan got stuck.
        candidates: Vec<TokenKind>,
    },

    /// End of input with a buffer no surviving rule matches in full.
    #[error(
        "INCOMPLETE_TOKEN at {source_name}:{position}: end of input with incomplete token {buffer:?}"
    )]
    IncompleteToken {
        /// Source name.
        source_name: Arc<str>,
        /// Start position of the buffer.
        position: Position,
        /// The accumulated text.
        buffer: String,
    },
}

fn kind_list(kinds: &[TokenKind]) -> String {
    let names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
    names.join(", ")
}
