//! # Token Types
//!
//! Core data types produced by the tokenizer: the [`Token`] record, the closed
//! [`TokenKind`] enumeration and the 1-based [`Position`] cursor used to tag
//! every token with the place it started in the source.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

/// The closed set of token kinds.
///
/// `UnaryOperator` and `StatementEnd` are part of the vocabulary but are not
/// produced by the current rule set. `StatementEnd` doubles as the "previous
/// kind" seen at the start of a stream, which is what lets a leading `:` open a
/// flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, AsRefStr,
)]
pub enum TokenKind {
    /// `//`
    CommentStart,
    /// The newline that ends a line comment
    CommentEnd,
    /// `/*`
    MultilineCommentStart,
    /// `*/`
    MultilineCommentEnd,
    /// Comment text with the delimiters stripped
    Comment,
    /// `:`
    Flag,
    /// The label attached to a flag
    FlagLabel,
    /// `b~`, `++`, `!` etc
    UnaryOperator,
    /// `=`, `+=` etc
    AssignmentOperator,
    /// `+`, `-`, `/f`, `rt`, `b&` etc
    ArithmeticOrBitwiseOperator,
    /// `==`, `>`, `is` etc
    RelationalOperator,
    /// `&&`, `||`, `^^`
    LogicalOperator,
    /// `..`
    ConcatOperator,
    /// `><`
    SwapOperator,
    /// `istype`, `isnttype`
    TypeOperator,
    /// `null`, `true`, `false`
    Literal,
    /// `;`
    StatementEnd,
    Variable,
}

impl TokenKind {
    /// Whether this kind is one of the comment delimiters or comment text.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::CommentStart
                | TokenKind::CommentEnd
                | TokenKind::MultilineCommentStart
                | TokenKind::MultilineCommentEnd
                | TokenKind::Comment
        )
    }
}

/// A classified, position-tagged lexical unit.
///
/// `line` and `column` are 1-based and point at the first character of the
/// token in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, position: Position) -> Self {
        Self {
            value: value.into(),
            kind,
            line: position.line,
            column: position.column,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.value, self.position())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Moves the cursor past `c`. A newline starts the next line at column 1.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// The position one column to the left, on the same line.
    pub(crate) fn back(self) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_sub(1).max(1),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
