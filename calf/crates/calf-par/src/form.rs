//! The parse tree.
//!
//! A [`Form`] is either a flat token carried through from the lexer, a
//! refined scalar literal (the parser's singleton transforms), or a
//! composite with child forms and a closed source span. Forms are
//! built during reduction and never mutated afterwards.

use std::sync::Arc;

use calf_lex::Token;
use calf_util::Position;

/// The three composite shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeKind {
    /// `( ... )`
    List,
    /// `[ ... ]`
    SqList,
    /// `{ ... }`
    Dict,
}

impl CompositeKind {
    /// The upper-case wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            CompositeKind::List => "LIST",
            CompositeKind::SqList => "SQLIST",
            CompositeKind::Dict => "DICT",
        }
    }
}

/// A refined integer literal.
#[derive(Clone, Debug, PartialEq)]
pub struct IntLit {
    /// The parsed value.
    pub value: i64,
    /// The originating token.
    pub token: Token,
}

/// A refined float literal.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatLit {
    /// The parsed value.
    pub value: f64,
    /// The originating token.
    pub token: Token,
}

/// A refined string literal with quotes stripped and escapes applied.
#[derive(Clone, Debug, PartialEq)]
pub struct StrLit {
    /// The decoded content.
    pub value: String,
    /// The originating token.
    pub token: Token,
}

/// An ordered composite: a paren or bracket list.
#[derive(Clone, Debug, PartialEq)]
pub struct SeqForm {
    /// Child forms in source order.
    pub forms: Vec<Form>,
    /// Name of the originating source.
    pub source: Arc<str>,
    /// Position of the opening delimiter.
    pub start: Position,
    /// Position of the closing delimiter.
    pub end: Position,
}

/// A brace composite with its children paired positionally.
#[derive(Clone, Debug, PartialEq)]
pub struct DictForm {
    /// Key/value pairs in source order.
    pub pairs: Vec<(Form, Form)>,
    /// Name of the originating source.
    pub source: Arc<str>,
    /// Position of the opening delimiter.
    pub start: Position,
    /// Position of the closing delimiter.
    pub end: Position,
}

/// A top-level parser output node.
#[derive(Clone, Debug, PartialEq)]
pub enum Form {
    /// An untransformed flat token (symbols, keywords, prefix markers,
    /// and trivia when whitespace discarding is off).
    Atom(Token),
    /// A refined integer.
    Int(IntLit),
    /// A refined float.
    Float(FloatLit),
    /// A refined string.
    Str(StrLit),
    /// `( ... )`
    List(SeqForm),
    /// `[ ... ]`
    SqList(SeqForm),
    /// `{ ... }`
    Dict(DictForm),
}

impl Form {
    /// The upper-case wire name of this form's kind, matching token
    /// kind names for atoms and refined scalars.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Form::Atom(token) => token.kind.name(),
            Form::Int(_) => "INTEGER",
            Form::Float(_) => "FLOAT",
            Form::Str(_) => "STRING",
            Form::List(_) => CompositeKind::List.name(),
            Form::SqList(_) => CompositeKind::SqList.name(),
            Form::Dict(_) => CompositeKind::Dict.name(),
        }
    }

    /// Start position: the first character of an atom or scalar, the
    /// opening delimiter of a composite.
    pub fn start(&self) -> Position {
        match self {
            Form::Atom(token) => token.start,
            Form::Int(lit) => lit.token.start,
            Form::Float(lit) => lit.token.start,
            Form::Str(lit) => lit.token.start,
            Form::List(seq) | Form::SqList(seq) => seq.start,
            Form::Dict(dict) => dict.start,
        }
    }

    /// Closing delimiter position for composites, `None` otherwise.
    pub fn end(&self) -> Option<Position> {
        match self {
            Form::List(seq) | Form::SqList(seq) => Some(seq.end),
            Form::Dict(dict) => Some(dict.end),
            _ => None,
        }
    }

    /// Name of the source this form was read from.
    pub fn source(&self) -> &Arc<str> {
        match self {
            Form::Atom(token) => &token.source,
            Form::Int(lit) => &lit.token.source,
            Form::Float(lit) => &lit.token.source,
            Form::Str(lit) => &lit.token.source,
            Form::List(seq) | Form::SqList(seq) => &seq.source,
            Form::Dict(dict) => &dict.source,
        }
    }
}
