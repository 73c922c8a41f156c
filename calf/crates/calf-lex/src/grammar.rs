//! The Calf token table.
//!
//! The grammar is data: an ordered list of `(pattern, kind)` rules. The
//! lexer driver knows nothing about any particular kind; it only asks
//! whether the accumulated buffer still fully matches a rule. Earlier
//! rules win ambiguous final states, which is how `+` stays a symbol
//! while `+5` becomes an integer and `1` prefers `INTEGER` over `FLOAT`.
//!
//! Every canonical pattern is *prefix-closed*: each prefix of a valid
//! token also matches the pattern in full. That property is what makes
//! the lexer's monotone candidate pruning sound, and it is why the
//! number and string patterns below are permissive. The strict final
//! shapes are enforced downstream (table order for numbers, the
//! parser's string transform for termination and escapes).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{Attributes, TokenKind};

/// One symbol segment: anything but whitespace, commas, delimiters,
/// quote characters, `:`, `;`, `#`, `^`, with the first character also
/// barred from starting like a number.
pub const SIMPLE_SYMBOL: &str =
    r#"(?:[^\s,\[\](){}:;#^"'+\-\d][^\s,\[\](){}:;#^"']*|[^\s,\[\](){}:;#^"'\d]+)"#;

/// `(namespace "/")? name`, splitting on the last slash.
pub static SYMBOL_PATTERN: Lazy<String> = Lazy::new(|| {
    format!(
        "(?:(?P<namespace>{ss})/)?(?P<name>{ss})",
        ss = SIMPLE_SYMBOL
    )
});

/// A colon followed by an optional symbol.
pub static KEYWORD_PATTERN: Lazy<String> = Lazy::new(|| format!(":(?:{})?", &*SYMBOL_PATTERN));

/// Optional sign then digits. Matches every prefix, including a bare
/// sign; table order keeps the bare sign a symbol.
pub const INTEGER_PATTERN: &str = r"[+-]?\d*";

/// Decimal-point and/or exponent float, prefix-closed: `1.`, `1e` and
/// `1e-` all match so that `1.5` and `1e-5` can be reached one
/// character at a time.
pub const FLOAT_PATTERN: &str = r"(?P<body>[+-]?\d*(?:\.\d*)?)(?:[eE](?P<exponent>[+-]?\d*))?";

/// Horizontal whitespace and commas around at most one line break.
/// `\r\n` and `\n\r` both count as a single break.
pub const WHITESPACE_PATTERN: &str = r"[ \t,]*(?:\r\n|\n\r|\r|\n)?[ \t,]*";

/// Semicolon to end of line, consuming the line break.
pub const COMMENT_PATTERN: &str = r";[^\n\r]*(?:\r\n|\n\r|\r|\n)?";

/// Ordinary and triple-quoted strings, terminated or not. An ordinary
/// string is escape-aware (a trailing lone backslash keeps the prefix
/// matching mid-escape); a triple-quoted string is verbatim and only
/// three `"` in a row end it. Termination is validated by the parser's
/// string transform, not here.
pub const STRING_PATTERN: &str = r#""(?:\\.|[^"\\])*(?:\\|")?|"""(?:"{0,2}[^"])*"{0,3}"#;

/// A single row of the token table: a kind plus its anchored pattern.
#[derive(Debug, Clone)]
pub struct TokenRule {
    kind: TokenKind,
    pattern: Regex,
}

impl TokenRule {
    /// Compile a rule. The pattern is anchored on both ends and given
    /// the `s` flag, so `.` inside patterns crosses line breaks and a
    /// match is always a whole-buffer match.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"\A(?s:{pattern})\z"))?;
        Ok(Self { kind, pattern })
    }

    /// The kind this rule produces.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Does the whole buffer match this rule's pattern?
    pub fn is_full_match(&self, buffer: &str) -> bool {
        self.pattern.is_match(buffer)
    }

    /// Re-apply the pattern to extract the named capture groups that
    /// participated in the match.
    pub fn captures(&self, text: &str) -> Attributes {
        let mut attrs = Attributes::new();
        if let Some(caps) = self.pattern.captures(text) {
            for name in self.pattern.capture_names().flatten() {
                if let Some(m) = caps.name(name) {
                    attrs.insert(name.to_string(), m.as_str().to_string());
                }
            }
        }
        attrs
    }
}

/// An ordered token table.
///
/// Most callers want [`Grammar::canonical`]; custom tables exist so the
/// same driver can lex other token alphabets.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<TokenRule>,
}

impl Grammar {
    /// Build a table from rules in priority order.
    ///
    /// # Panics
    ///
    /// An empty table is a programming error and panics.
    pub fn new(rules: Vec<TokenRule>) -> Self {
        assert!(!rules.is_empty(), "token table must not be empty");
        Self { rules }
    }

    /// The canonical Calf table, compiled once.
    pub fn canonical() -> &'static Grammar {
        &CANONICAL
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false; kept for the conventional pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at `index`.
    pub fn rule(&self, index: usize) -> &TokenRule {
        &self.rules[index]
    }
}

static CANONICAL: Lazy<Grammar> = Lazy::new(|| {
    let rule = |kind, pattern: &str| {
        TokenRule::new(kind, pattern).expect("canonical grammar pattern compiles")
    };
    Grammar::new(vec![
        // Paren (normal) lists
        rule(TokenKind::ParenLeft, r"\("),
        rule(TokenKind::ParenRight, r"\)"),
        // Bracket lists
        rule(TokenKind::BracketLeft, r"\["),
        rule(TokenKind::BracketRight, r"\]"),
        // Brace lists (maps)
        rule(TokenKind::BraceLeft, r"\{"),
        rule(TokenKind::BraceRight, r"\}"),
        // Prefix markers
        rule(TokenKind::Meta, r"\^"),
        rule(TokenKind::SingleQuote, r"'"),
        rule(TokenKind::MacroDispatch, r"#"),
        // Symbols before numbers: a bare sign is a symbol
        rule(TokenKind::Symbol, &SYMBOL_PATTERN),
        // Integers before floats: a bare digit run is an integer
        rule(TokenKind::Integer, INTEGER_PATTERN),
        rule(TokenKind::Float, FLOAT_PATTERN),
        rule(TokenKind::Keyword, &KEYWORD_PATTERN),
        rule(TokenKind::Whitespace, WHITESPACE_PATTERN),
        rule(TokenKind::Comment, COMMENT_PATTERN),
        rule(TokenKind::String, STRING_PATTERN),
    ])
});
