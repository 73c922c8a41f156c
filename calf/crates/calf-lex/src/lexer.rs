//! The longest-match lexer driver.
//!
//! The driver is table-agnostic: it grows a buffer one peeked character
//! at a time, keeping only the rules whose pattern still matches the
//! whole buffer. The moment no rule survives an extension, the buffer
//! is a finished token of the earliest surviving rule's kind. The
//! candidate set only ever shrinks, so there is no backtracking and no
//! rescanning.

use std::sync::Arc;

use calf_util::Position;

use crate::cursor::{CharSource, StrCursor};
use crate::error::LexError;
use crate::grammar::Grammar;
use crate::token::{Attributes, Token};

/// Default source name for in-memory buffers.
pub const DEFAULT_SOURCE_NAME: &str = "<buffer>";

/// A lazy tokenizer over a character source.
///
/// Implements `Iterator<Item = Result<Token, LexError>>`; the stream
/// fuses after the first error or end of input. Configuration follows
/// the builder style:
///
/// ```
/// use calf_lex::{lex_str, Lexer, StrCursor, TokenKind};
///
/// let tokens: Vec<_> = lex_str("(foo)").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Symbol);
///
/// let named = Lexer::new(StrCursor::new("x")).with_source_name("repl.calf");
/// for token in named {
///     assert_eq!(token.unwrap().location(), "repl.calf:1:1");
/// }
/// ```
pub struct Lexer<S> {
    source: S,
    grammar: Grammar,
    source_name: Arc<str>,
    metadata: Attributes,
    done: bool,
}

impl<'a> Lexer<StrCursor<'a>> {
    /// Lex an in-memory string with the canonical grammar.
    pub fn from_str(text: &'a str) -> Self {
        Self::new(StrCursor::new(text))
    }
}

impl<S: CharSource> Lexer<S> {
    /// Create a lexer over `source` with the canonical grammar and the
    /// default source name.
    pub fn new(source: S) -> Self {
        Self {
            source,
            grammar: Grammar::canonical().clone(),
            source_name: Arc::from(DEFAULT_SOURCE_NAME),
            metadata: Attributes::new(),
            done: false,
        }
    }

    /// Record `name` on every token and error.
    pub fn with_source_name(mut self, name: impl AsRef<str>) -> Self {
        self.source_name = Arc::from(name.as_ref());
        self
    }

    /// Replace the token table.
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Merge `metadata` into the attributes of every emitted token.
    /// Metadata wins over same-named pattern captures.
    pub fn with_metadata(mut self, metadata: Attributes) -> Self {
        self.metadata = metadata;
        self
    }

    /// Scan the next token off the source.
    ///
    /// Starting from the full table, an empty buffer and one peeked
    /// character, the scan extends the buffer while at least one rule
    /// still matches the extended buffer in full. When an extension
    /// kills every surviving rule (or input ends), the earliest
    /// surviving rule that matches the buffer wins and a token of its
    /// kind is emitted with the buffer as its text.
    ///
    /// Returns `Ok(None)` when the source is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let (start, peeked) = self.source.peek();
        if peeked.is_none() {
            return Ok(None);
        }

        let mut buffer = String::new();
        let mut candidates: Vec<usize> = (0..self.grammar.len()).collect();

        loop {
            let (position, peeked) = self.source.peek();
            let Some(c) = peeked else {
                return self.emit(buffer, start, &candidates, true).map(Some);
            };

            buffer.push(c);
            let survivors: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&i| self.grammar.rule(i).is_full_match(&buffer))
                .collect();

            if survivors.is_empty() {
                buffer.pop();
                if buffer.is_empty() {
                    return Err(LexError::NoCandidates {
                        source_name: self.source_name.clone(),
                        position,
                        character: c,
                    });
                }
                return self.emit(buffer, start, &candidates, false).map(Some);
            }

            candidates = survivors;
            self.source.advance();
        }
    }

    /// Emit the buffer as a token of the earliest candidate whose
    /// pattern matches it in full. With a prefix-closed table every
    /// candidate matches by construction and the first entry wins the
    /// tiebreak; the error paths cover tables without that property.
    fn emit(
        &self,
        buffer: String,
        start: Position,
        candidates: &[usize],
        at_end: bool,
    ) -> Result<Token, LexError> {
        for &index in candidates {
            let rule = self.grammar.rule(index);
            if !rule.is_full_match(&buffer) {
                continue;
            }
            let mut attrs = rule.captures(&buffer);
            for (key, value) in &self.metadata {
                attrs.insert(key.clone(), value.clone());
            }
            return Ok(Token {
                kind: rule.kind(),
                text: buffer,
                source: self.source_name.clone(),
                start,
                attrs,
            });
        }

        let kinds = candidates
            .iter()
            .map(|&i| self.grammar.rule(i).kind())
            .collect();
        if at_end {
            Err(LexError::IncompleteToken {
                source_name: self.source_name.clone(),
                position: start,
                buffer,
            })
        } else {
            Err(LexError::AmbiguousToken {
                source_name: self.source_name.clone(),
                position: start,
                buffer,
                candidates: kinds,
            })
        }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Lex an in-memory buffer with the canonical grammar.
///
/// # Examples
///
/// ```
/// use calf_lex::{lex_str, TokenKind};
///
/// let kinds: Vec<TokenKind> = lex_str(":foo 1")
///     .map(|t| t.unwrap().kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Keyword, TokenKind::Whitespace, TokenKind::Integer]
/// );
/// ```
pub fn lex_str(text: &str) -> Lexer<StrCursor<'_>> {
    Lexer::from_str(text)
}
