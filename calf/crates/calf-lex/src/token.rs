//! Flat tokens and their kind alphabet.

use std::fmt;
use std::sync::Arc;

use calf_util::Position;
use indexmap::IndexMap;

/// Named capture groups and lexer metadata attached to a token.
///
/// Insertion order is preserved so dumps and test output stay stable.
pub type Attributes = IndexMap<String, String>;

/// The fixed alphabet of lexical token kinds.
///
/// Composite kinds (`LIST`, `SQLIST`, `DICT`) are not part of this
/// alphabet; they only exist on parser output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    ParenLeft,
    /// `)`
    ParenRight,
    /// `[`
    BracketLeft,
    /// `]`
    BracketRight,
    /// `{`
    BraceLeft,
    /// `}`
    BraceRight,
    /// `^` prefix marker
    Meta,
    /// `'` prefix marker
    SingleQuote,
    /// `#` prefix marker
    MacroDispatch,
    /// A bare or namespaced symbol
    Symbol,
    /// `:name` or `:namespace/name`
    Keyword,
    /// Signed decimal integer literal
    Integer,
    /// Decimal-point or exponent float literal
    Float,
    /// Ordinary or triple-quoted string literal
    String,
    /// Horizontal whitespace, commas, and at most one line break
    Whitespace,
    /// `;` to end of line
    Comment,
}

impl TokenKind {
    /// The upper-case wire name of this kind, as used in dumps and
    /// diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ParenLeft => "PAREN_LEFT",
            TokenKind::ParenRight => "PAREN_RIGHT",
            TokenKind::BracketLeft => "BRACKET_LEFT",
            TokenKind::BracketRight => "BRACKET_RIGHT",
            TokenKind::BraceLeft => "BRACE_LEFT",
            TokenKind::BraceRight => "BRACE_RIGHT",
            TokenKind::Meta => "META",
            TokenKind::SingleQuote => "SINGLE_QUOTE",
            TokenKind::MacroDispatch => "MACRO_DISPATCH",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
        }
    }

    /// The closing delimiter kind matching an opening delimiter, or
    /// `None` for every other kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use calf_lex::TokenKind;
    ///
    /// assert_eq!(
    ///     TokenKind::ParenLeft.matching_close(),
    ///     Some(TokenKind::ParenRight)
    /// );
    /// assert_eq!(TokenKind::Symbol.matching_close(), None);
    /// ```
    pub fn matching_close(self) -> Option<TokenKind> {
        match self {
            TokenKind::ParenLeft => Some(TokenKind::ParenRight),
            TokenKind::BracketLeft => Some(TokenKind::BracketRight),
            TokenKind::BraceLeft => Some(TokenKind::BraceRight),
            _ => None,
        }
    }

    /// True for `)`, `]`, `}`.
    pub fn is_close_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::ParenRight | TokenKind::BracketRight | TokenKind::BraceRight
        )
    }

    /// True for whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A flat lexical token.
///
/// Carries the kind, the exact matched text, the name of the source it
/// was read from, the position of its first character, and the named
/// capture groups of the winning pattern merged with any lexer-supplied
/// metadata. Tokens are created by the lexer and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// The exact matched substring.
    pub text: String,
    /// Name of the originating source, shared across the stream.
    pub source: Arc<str>,
    /// Position of the first character of `text`.
    pub start: Position,
    /// Named sub-groups of the winning pattern plus lexer metadata.
    pub attrs: Attributes,
}

impl Token {
    /// `source:line:column` label for diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use calf_lex::lex_str;
    ///
    /// let token = lex_str("foo").next().unwrap().unwrap();
    /// assert_eq!(token.location(), "<buffer>:1:1");
    /// ```
    pub fn location(&self) -> String {
        format!("{}:{}", self.source, self.start)
    }

    /// A named attribute, if the winning pattern captured it.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
