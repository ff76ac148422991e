//! # Zyxt
//!
//! Front end for the Zyxt language. The interesting part is the
//! [`tokenizer`], a single-pass character-level state machine that turns source
//! text into typed, position-tagged tokens. [`config`] and [`error`] support the
//! `zyxt` command-line tool that drives it.
//!
//! ```text
//! Source Code → Tokenizer → (Parser → Compiler / Interpreter, not yet built)
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};
