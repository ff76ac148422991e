//! Rebuilds source text from a token stream.
//!
//! Whitespace between tokens is not kept by the tokenizer, so the result is not
//! byte-for-byte the original. It does tokenize back into the same sequence of
//! kinds and values: comment and flag delimiters are written back verbatim and
//! every word the tokenizer ended at whitespace is followed by a single space.

use super::token::{Token, TokenKind};

pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        out.push_str(&token.value);
        match token.kind {
            TokenKind::MultilineCommentEnd => out.push(' '),
            // written exactly as they appeared
            kind if kind.is_comment() || kind == TokenKind::Flag => {}
            // a label directly followed by its closing `:` must stay attached
            TokenKind::FlagLabel => {
                let closed = iter.peek().is_some_and(|next| next.kind == TokenKind::Flag);
                if !closed {
                    out.push(' ');
                }
            }
            _ => out.push(' '),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_render_code() {
        let tokens = tokenize("x   +=\n\t1");
        assert_eq!(render(&tokens), "x += 1 ");
    }

    #[test]
    fn test_render_comments() {
        let tokens = tokenize("// hi\n/* a\nb */y");
        assert_eq!(render(&tokens), "// hi\n/* a\nb */ y ");
    }

    #[test]
    fn test_render_comment_inside_flag() {
        let tokens = tokenize("//a\n:/*b*/c:");
        assert_eq!(render(&tokens), "//a\n:/*b*/ c:");
    }

    #[test]
    fn test_render_flags() {
        let tokens = tokenize(":label: x :other");
        assert_eq!(render(&tokens), ":label:x :other ");
    }

    #[test]
    fn test_render_open_flag_label() {
        let tokens = tokenize(":loop x");
        assert_eq!(render(&tokens), ":loop x ");
    }

    #[test]
    fn test_render_reproduces_tokens() {
        let source = "// head\n:a:b:c  d /* x */ e += true\n";
        let tokens = tokenize(source);
        let again = tokenize(&render(&tokens));
        let strip = |ts: Vec<Token>| -> Vec<(TokenKind, String)> {
            ts.into_iter().map(|t| (t.kind, t.value)).collect()
        };
        assert_eq!(strip(again), strip(tokens));
    }
}
