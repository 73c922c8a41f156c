//! calf-read - The Calf reader.
//!
//! Lowers the parser's form stream into host values by dispatching on
//! form kind through the replaceable [`ReadHooks`]. Collections read
//! their children recursively; the prefix markers `'`, `^` and `#`
//! consume the following form(s) from the same stream and hand them to
//! their hook. Unlike the lexer and parser, which preserve information,
//! the reader is where information is allowed to be reshaped or
//! dropped.
//!
//! ```
//! use calf_read::{read_str, Value};
//!
//! let values: Vec<Value> = read_str("'x").collect::<Result<_, _>>().unwrap();
//! assert_eq!(values[0].to_string(), "(quote x)");
//! ```

pub mod error;
pub mod hooks;
pub mod value;

pub use error::ReadError;
pub use hooks::{DefaultHooks, ReadHooks};
pub use value::{TaggedValue, Value, ValueMap};

use calf_lex::{Lexer, StrCursor, TokenKind};
use calf_par::{parse_str, Form, ParseError, Parser};

/// A lazy reader over a form stream.
///
/// Implements `Iterator<Item = Result<Value, ReadError>>`; the stream
/// fuses after the first error.
pub struct Reader<I, H = DefaultHooks> {
    forms: I,
    hooks: H,
    done: bool,
}

impl<I> Reader<I, DefaultHooks>
where
    I: Iterator<Item = Result<Form, ParseError>>,
{
    /// Read `forms` with the default hooks.
    pub fn new(forms: I) -> Self {
        Self::with_hooks(forms, DefaultHooks)
    }
}

impl<I, H> Reader<I, H>
where
    I: Iterator<Item = Result<Form, ParseError>>,
    H: ReadHooks,
{
    /// Read `forms` through a custom hook set.
    pub fn with_hooks(forms: I, hooks: H) -> Self {
        Self {
            forms,
            hooks,
            done: false,
        }
    }
}

impl<I, H> Iterator for Reader<I, H>
where
    I: Iterator<Item = Result<Form, ParseError>>,
    H: ReadHooks,
{
    type Item = Result<Value, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let form = match self.forms.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(Err(err)) => {
                self.done = true;
                return Some(Err(err.into()));
            }
            Some(Ok(form)) => form,
        };
        let result = read_form(&self.hooks, form, &mut self.forms);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Read one form, pulling further forms from `rest` when a prefix
/// marker needs them.
fn read_form<H: ReadHooks>(
    hooks: &H,
    form: Form,
    rest: &mut dyn Iterator<Item = Result<Form, ParseError>>,
) -> Result<Value, ReadError> {
    match form {
        Form::Int(lit) => Ok(Value::Int(lit.value)),
        Form::Float(lit) => Ok(Value::Float(lit.value)),
        Form::Str(lit) => Ok(Value::Str(lit.value)),
        Form::List(seq) | Form::SqList(seq) => Ok(Value::List(read_children(hooks, seq.forms)?)),
        Form::Dict(dict) => {
            let mut map = ValueMap::with_capacity(dict.pairs.len());
            for (key, value) in dict.pairs {
                let key = read_single(hooks, key)?;
                let value = read_single(hooks, value)?;
                // Duplicate keys: last value wins, first position kept.
                map.insert(key, value);
            }
            Ok(Value::Map(map))
        }
        Form::Atom(token) => match token.kind {
            TokenKind::Symbol => Ok(hooks.make_symbol(&token.text)),
            TokenKind::Keyword => {
                let text = token.text.strip_prefix(':').unwrap_or(&token.text);
                Ok(hooks.make_keyword(text))
            }
            TokenKind::SingleQuote => {
                let inner = pull_form(rest, &token)?;
                let inner = read_form(hooks, inner, rest)?;
                Ok(hooks.handle_quote(inner))
            }
            TokenKind::Meta => {
                let tag = pull_form(rest, &token)?;
                let tag = read_form(hooks, tag, rest)?;
                let form = pull_form(rest, &token)?;
                let form = read_form(hooks, form, rest)?;
                Ok(hooks.handle_meta(tag, form))
            }
            TokenKind::MacroDispatch => {
                let tag = pull_form(rest, &token)?;
                let tag = read_form(hooks, tag, rest)?;
                let form = pull_form(rest, &token)?;
                let form = read_form(hooks, form, rest)?;
                Ok(hooks.handle_dispatch(tag, form))
            }
            kind => Err(ReadError::UnsupportedForm {
                kind: kind.name(),
                token,
            }),
        },
    }
}

/// Read the children of a sequence, letting prefix markers consume
/// their following siblings.
fn read_children<H: ReadHooks>(hooks: &H, forms: Vec<Form>) -> Result<Vec<Value>, ReadError> {
    let mut rest = forms.into_iter().map(Ok::<Form, ParseError>);
    let mut values = Vec::new();
    while let Some(form) = rest.next() {
        let form = form?;
        values.push(read_form(hooks, form, &mut rest)?);
    }
    Ok(values)
}

/// Read a lone form; dict keys and values are paired positionally, so
/// there are no following siblings for a marker to consume.
fn read_single<H: ReadHooks>(hooks: &H, form: Form) -> Result<Value, ReadError> {
    read_form(hooks, form, &mut std::iter::empty())
}

fn pull_form(
    rest: &mut dyn Iterator<Item = Result<Form, ParseError>>,
    marker: &calf_lex::Token,
) -> Result<Form, ReadError> {
    match rest.next() {
        Some(Ok(form)) => Ok(form),
        Some(Err(err)) => Err(err.into()),
        None => Err(ReadError::DanglingPrefix {
            marker: marker.clone(),
        }),
    }
}

/// Read an in-memory buffer with the canonical grammar and default
/// hooks.
///
/// # Examples
///
/// ```
/// use calf_read::{read_str, Value};
///
/// let values: Vec<Value> = read_str("{:a 1}").collect::<Result<_, _>>().unwrap();
/// assert_eq!(values[0].to_string(), "{:a 1}");
/// ```
pub fn read_str(text: &str) -> Reader<Parser<Lexer<StrCursor<'_>>>, DefaultHooks> {
    Reader::new(parse_str(text))
}

/// Read an in-memory buffer through a custom hook set.
pub fn read_str_with<H: ReadHooks>(
    text: &str,
    hooks: H,
) -> Reader<Parser<Lexer<StrCursor<'_>>>, H> {
    Reader::with_hooks(parse_str(text), hooks)
}
