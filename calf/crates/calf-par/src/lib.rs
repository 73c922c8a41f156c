//! calf-par - The Calf bracket parser.
//!
//! Folds the lexer's flat token stream into a lazy stream of top-level
//! forms with a shift/reduce stack of open frames. Opening delimiters
//! push a frame; the matching close pops it and builds a composite
//! carrying both delimiter positions; integer, float, and string tokens
//! are refined into parsed scalars on the way through. The parser
//! handles only brackets and atoms, and in exchange reports precise,
//! positioned errors.
//!
//! ```
//! use calf_par::{parse_str, Form};
//!
//! let form = parse_str("(1 2)").next().unwrap().unwrap();
//! match form {
//!     Form::List(list) => assert_eq!(list.forms.len(), 2),
//!     other => panic!("expected a list, got {other:?}"),
//! }
//! ```

mod edge_cases;
pub mod error;
pub mod form;
mod transform;

pub use error::ParseError;
pub use form::{CompositeKind, DictForm, FloatLit, Form, IntLit, SeqForm, StrLit};

use calf_lex::{lex_str, LexError, Lexer, StrCursor, Token, TokenKind};

/// One open composite awaiting its closing delimiter.
struct Frame {
    children: Vec<Form>,
    open: Token,
    close: TokenKind,
    kind: CompositeKind,
}

/// The frame an opening delimiter starts, or `None` for other kinds.
fn composite_for(kind: TokenKind) -> Option<(TokenKind, CompositeKind)> {
    let close = kind.matching_close()?;
    let composite = match kind {
        TokenKind::ParenLeft => CompositeKind::List,
        TokenKind::BracketLeft => CompositeKind::SqList,
        _ => CompositeKind::Dict,
    };
    Some((close, composite))
}

/// A lazy parser over a token stream.
///
/// Implements `Iterator<Item = Result<Form, ParseError>>`, consuming
/// only as many tokens as the next top-level form needs. The stream
/// fuses after the first error. By default `WHITESPACE` and `COMMENT`
/// tokens are discarded; disable that to get a lossless tree:
///
/// ```
/// use calf_lex::lex_str;
/// use calf_par::Parser;
///
/// let forms: Vec<_> = Parser::new(lex_str("a b"))
///     .discard_whitespace(false)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(forms.len(), 3);
/// assert_eq!(forms[1].kind_name(), "WHITESPACE");
/// ```
pub struct Parser<I> {
    tokens: I,
    stack: Vec<Frame>,
    discard_whitespace: bool,
    done: bool,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    /// Parse `tokens`, discarding whitespace and comments.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            stack: Vec::new(),
            discard_whitespace: true,
            done: false,
        }
    }

    /// Keep or discard `WHITESPACE`/`COMMENT` tokens (default: discard).
    pub fn discard_whitespace(mut self, discard: bool) -> Self {
        self.discard_whitespace = discard;
        self
    }

    /// Pull tokens until the next top-level form completes.
    ///
    /// Returns `Ok(None)` once the token stream is exhausted with no
    /// frame left open.
    pub fn next_form(&mut self) -> Result<Option<Form>, ParseError> {
        loop {
            let Some(next) = self.tokens.next() else {
                return match self.stack.pop() {
                    Some(frame) => Err(ParseError::MissingClose {
                        expected: frame.close,
                        open: frame.open,
                    }),
                    None => Ok(None),
                };
            };
            let token = next?;

            // Trivia: dropped, or carried through verbatim.
            if token.kind.is_trivia() {
                if self.discard_whitespace {
                    continue;
                }
                match self.attach(Form::Atom(token)) {
                    Some(form) => return Ok(Some(form)),
                    None => continue,
                }
            }

            // The close the innermost frame is waiting for.
            if let Some(frame) = self.stack.pop() {
                if token.kind == frame.close {
                    let form = reduce(frame, &token)?;
                    match self.attach(form) {
                        Some(form) => return Ok(Some(form)),
                        None => continue,
                    }
                }
                self.stack.push(frame);
            }

            // An opening delimiter starts a new frame.
            if let Some((close, kind)) = composite_for(token.kind) {
                self.stack.push(Frame {
                    children: Vec::new(),
                    open: token,
                    close,
                    kind,
                });
                continue;
            }

            // Any other closing delimiter is stray; find the outer
            // frame it would close, if any, as a hint.
            if token.kind.is_close_delimiter() {
                let matching_open = self
                    .stack
                    .iter()
                    .rev()
                    .find(|frame| frame.close == token.kind)
                    .map(|frame| frame.open.clone());
                return Err(ParseError::UnexpectedClose {
                    token,
                    matching_open,
                });
            }

            // An atom, refined if it is a scalar literal.
            let form = transform::refine(token)?;
            match self.attach(form) {
                Some(form) => return Ok(Some(form)),
                None => continue,
            }
        }
    }

    /// Attach a finished form to the innermost frame, or hand it back
    /// for yielding when the stack is empty.
    fn attach(&mut self, form: Form) -> Option<Form> {
        match self.stack.last_mut() {
            Some(frame) => {
                frame.children.push(form);
                None
            }
            None => Some(form),
        }
    }
}

/// Build the composite for a popped frame.
fn reduce(frame: Frame, close: &Token) -> Result<Form, ParseError> {
    let Frame {
        children,
        open,
        kind,
        ..
    } = frame;
    let end = close.start;
    match kind {
        CompositeKind::List => Ok(Form::List(SeqForm {
            forms: children,
            source: open.source.clone(),
            start: open.start,
            end,
        })),
        CompositeKind::SqList => Ok(Form::SqList(SeqForm {
            forms: children,
            source: open.source.clone(),
            start: open.start,
            end,
        })),
        CompositeKind::Dict => {
            if children.len() % 2 != 0 {
                return Err(ParseError::OddDict { open, end });
            }
            let mut pairs = Vec::with_capacity(children.len() / 2);
            let mut children = children.into_iter();
            while let (Some(key), Some(value)) = (children.next(), children.next()) {
                pairs.push((key, value));
            }
            Ok(Form::Dict(DictForm {
                pairs,
                source: open.source.clone(),
                start: open.start,
                end,
            }))
        }
    }
}

impl<I> Iterator for Parser<I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    type Item = Result<Form, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_form() {
            Ok(Some(form)) => Some(Ok(form)),
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

/// Parse an in-memory buffer with the canonical grammar, discarding
/// whitespace.
///
/// # Examples
///
/// ```
/// use calf_par::parse_str;
///
/// let kinds: Vec<_> = parse_str("1 foo \"s\"")
///     .map(|f| f.unwrap().kind_name())
///     .collect();
/// assert_eq!(kinds, vec!["INTEGER", "SYMBOL", "STRING"]);
/// ```
pub fn parse_str(text: &str) -> Parser<Lexer<StrCursor<'_>>> {
    Parser::new(lex_str(text))
}
