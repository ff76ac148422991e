//! # Tokenizer Component
//!
//! Lexical analysis for Zyxt source code: raw text in, an ordered stream of
//! position-tagged [`Token`](token::Token)s out.
//!
//! ## Design Principles
//!
//! * **Single pass**: characters are read once, front to back, with no
//!   backtracking. Context that a later character depends on (am I in a comment,
//!   did a flag just open) lives in an explicit [`LexState`](state::LexState).
//! * **Total**: every input produces a token stream. Unknown words become
//!   `Variable`s and an unclosed block comment simply consumes the rest of the
//!   text.
//! * **Precise positions**: every token records the 1-based line and column of
//!   its first character.
//!
//! ## Component Structure
//!
//! * [`token`]: token, kind and position types
//! * [`table`]: exact-match operator and literal tables
//! * [`state`]: the lexer state machine
//! * [`tokenizer`]: the tokenizing pass itself
//! * [`render`]: turns a token stream back into source text
//!
//! ## Usage Example
//!
//! ```rust
//! use zyxt::tokenizer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x += 1\n");
//! assert_eq!(tokens[1].kind, TokenKind::AssignmentOperator);
//! assert_eq!(tokens[1].value, "+=");
//! assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
//! ```

pub mod render;
pub mod state;
pub mod table;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use render::render;
pub use token::{Position, Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
