//! calf-lex - The Calf tokenizer.
//!
//! Turns a character stream into a lazy stream of positioned flat
//! tokens. The token alphabet and its patterns live in a declarative,
//! ordered [`Grammar`] table; the [`Lexer`] driver implements
//! longest-match with candidate pruning: the set of possible token
//! kinds only shrinks as characters are consumed, and a token is
//! emitted the moment no extension is admissible.
//!
//! ```
//! use calf_lex::{lex_str, TokenKind};
//!
//! let tokens: Vec<_> = lex_str("(+ 1 2)").collect::<Result<_, _>>().unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Symbol);
//! assert_eq!(tokens[1].text, "+");
//! ```

pub mod cursor;
mod edge_cases;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod token;

pub use cursor::{CharSource, StrCursor};
pub use error::LexError;
pub use grammar::{Grammar, TokenRule};
pub use lexer::{lex_str, Lexer, DEFAULT_SOURCE_NAME};
pub use token::{Attributes, Token, TokenKind};
