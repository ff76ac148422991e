//! Lexer state machine.

use super::token::TokenKind;

/// What the tokenizer returns to once a comment closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resume {
    pub last: TokenKind,
    pub in_flag: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
    /// Ordinary code. Whitespace ends the pending word.
    #[default]
    Normal,
    /// A `:` opened a flag and its label is being collected.
    InFlag,
    /// Inside `// ...`, closed by a newline.
    InLineComment { resume: Resume },
    /// Inside `/* ... */`.
    InBlockComment { resume: Resume },
}

impl LexState {
    /// Whitespace terminates tokens everywhere except inside comments, where
    /// it is literal content.
    pub fn flushes_on_whitespace(self) -> bool {
        matches!(self, LexState::Normal | LexState::InFlag)
    }

    /// Captures enough of the current state to pick up after a comment.
    pub fn suspend(self, last: TokenKind) -> Resume {
        Resume {
            last,
            in_flag: self == LexState::InFlag,
        }
    }

    pub fn resume(resume: Resume) -> Self {
        if resume.in_flag {
            LexState::InFlag
        } else {
            LexState::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_flushing_by_state() {
        let resume = LexState::Normal.suspend(TokenKind::StatementEnd);
        assert!(LexState::Normal.flushes_on_whitespace());
        assert!(LexState::InFlag.flushes_on_whitespace());
        assert!(!LexState::InLineComment { resume }.flushes_on_whitespace());
        assert!(!LexState::InBlockComment { resume }.flushes_on_whitespace());
    }

    #[test]
    fn test_suspend_and_resume_flag() {
        let resume = LexState::InFlag.suspend(TokenKind::Flag);
        assert!(resume.in_flag);
        assert_eq!(LexState::resume(resume), LexState::InFlag);

        let resume = LexState::Normal.suspend(TokenKind::Variable);
        assert_eq!(resume.last, TokenKind::Variable);
        assert_eq!(LexState::resume(resume), LexState::Normal);
    }
}
