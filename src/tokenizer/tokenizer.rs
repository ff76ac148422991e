//! # Tokenizer
//!
//! A single forward pass over the source, one character at a time. Characters
//! accumulate in a buffer until something resolves them into a token: a comment
//! delimiter, a flag `:`, or whitespace ending a word. A synthetic newline is
//! appended to the input so that the last word is always flushed.
//!
//! The pass never rejects input. Words that match no table entry become
//! `Variable`s, and an unterminated block comment swallows the rest of the text.

use tracing::{debug, trace};

use super::{
    state::{LexState, Resume},
    table::classify,
    token::{Position, Token, TokenKind},
};

/// Converts source text into an ordered sequence of [`Token`]s.
///
/// The tokenizer keeps no state between calls; every call to
/// [`tokenize`](Tokenizer::tokenize) starts fresh, so one value can be shared
/// freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(len = input.len()))]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut run = Run::new();
        for c in input.chars().chain(std::iter::once('\n')) {
            run.step(c);
        }
        let tokens = run.finish();
        debug!(count = tokens.len(), "tokenized input");
        tokens
    }
}

/// Tokenizes `input` with a fresh [`Tokenizer`].
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(input)
}

/// State owned by a single tokenize call.
struct Run {
    tokens: Vec<Token>,
    buffer: String,
    state: LexState,
    /// Kind of the most recent token. `StatementEnd` before anything is emitted.
    last: TokenKind,
    /// Position of the next character to be read.
    cursor: Position,
    /// Where the pending token started.
    start: Position,
}

impl Run {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            buffer: String::new(),
            state: LexState::Normal,
            last: TokenKind::StatementEnd,
            cursor: Position::default(),
            start: Position::default(),
        }
    }

    fn step(&mut self, c: char) {
        let here = self.cursor;
        self.cursor.advance(c);

        if c == '\r' && self.state.flushes_on_whitespace() {
            if self.buffer.is_empty() {
                self.start = self.cursor;
            }
            return;
        }

        self.buffer.push(c);

        match self.state {
            LexState::InLineComment { resume } => {
                if c == '\n' {
                    self.buffer.pop();
                    self.close_comment(TokenKind::CommentEnd, "\n", here, resume);
                }
                return;
            }
            LexState::InBlockComment { resume } => {
                if self.buffer.ends_with("*/") {
                    self.buffer.truncate(self.buffer.len() - 2);
                    self.close_comment(TokenKind::MultilineCommentEnd, "*/", here.back(), resume);
                }
                return;
            }
            LexState::Normal | LexState::InFlag => {}
        }

        if c == ':' && self.opens_flag() {
            self.flag(here);
        } else if c.is_whitespace() {
            self.end_word();
        } else {
            // Outside comments the buffer never holds whitespace, so it can be
            // compared as is.
            match self.buffer.as_str() {
                "//" => self.open_comment(TokenKind::CommentStart),
                "/*" => self.open_comment(TokenKind::MultilineCommentStart),
                _ => {}
            }
        }
    }

    fn finish(self) -> Vec<Token> {
        if let LexState::InBlockComment { .. } = self.state {
            debug!(
                start = %self.start,
                "block comment not closed before end of input"
            );
        }
        self.tokens
    }

    fn emit(&mut self, kind: TokenKind, value: impl Into<String>, at: Position) {
        let token = Token::new(value, kind, at);
        trace!(%token, "emit");
        self.tokens.push(token);
        self.last = kind;
    }

    fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn opens_flag(&self) -> bool {
        match self.state {
            LexState::InFlag => true,
            LexState::Normal => matches!(self.last, TokenKind::StatementEnd | TokenKind::Flag),
            _ => false,
        }
    }

    /// Handles a `:` that opens or closes a flag. `here` is the colon's position.
    fn flag(&mut self, here: Position) {
        self.buffer.pop();
        let label = self.take_buffer();
        let label = label.trim();

        match (self.state, self.last) {
            (LexState::Normal, TokenKind::StatementEnd) => {
                if !label.is_empty() {
                    debug!(text = label, at = %here, "text before opening flag dropped");
                }
                self.state = LexState::InFlag;
            }
            (LexState::Normal, _) => {
                if !label.is_empty() {
                    self.emit(TokenKind::FlagLabel, label, self.start);
                }
                self.state = LexState::InFlag;
            }
            _ => {
                if !label.is_empty() {
                    self.emit(TokenKind::FlagLabel, label, self.start);
                }
                self.state = LexState::Normal;
            }
        }

        self.emit(TokenKind::Flag, ":", here);
        self.start = self.cursor;
    }

    /// Whitespace ends the pending word. Leading whitespace is absorbed.
    fn end_word(&mut self) {
        let buffer = self.take_buffer();
        let word = buffer.trim();

        if !word.is_empty() {
            let kind = if self.state == LexState::InFlag {
                self.state = LexState::Normal;
                TokenKind::FlagLabel
            } else {
                classify(word).unwrap_or(TokenKind::Variable)
            };
            self.emit(kind, word, self.start);
        }

        self.start = self.cursor;
    }

    fn open_comment(&mut self, kind: TokenKind) {
        let resume = self.state.suspend(self.last);
        let delimiter = self.take_buffer();
        self.emit(kind, delimiter, self.start);

        self.state = if kind == TokenKind::CommentStart {
            LexState::InLineComment { resume }
        } else {
            LexState::InBlockComment { resume }
        };
        self.start = self.cursor;
    }

    fn close_comment(&mut self, end: TokenKind, delimiter: &str, at: Position, resume: Resume) {
        let text = self.take_buffer();
        self.emit(TokenKind::Comment, text, self.start);
        self.emit(end, delimiter, at);

        self.last = resume.last;
        self.state = LexState::resume(resume);
        self.start = self.cursor;
    }
}
