//! # Operator and Literal Tables
//!
//! The closed set of spellings that are classified when a whitespace-terminated
//! word matches one of them exactly. There is no prefix or longest-match logic:
//! `+=` is recognised because the whole word is `+=`, never as `+` followed by
//! `=`. A word that matches nothing falls through to `Variable`.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::token::TokenKind;

pub const ASSIGNMENT_OPERATORS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "/f=", "/c=", "/~=", "%=", "b&=", "b|=", "b^=", "b<<=", "b>>=",
    "b>>>=",
];

pub const ARITHMETIC_OR_BITWISE_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "/f", "/c", "/~", "%", "rt", "lg", "b&", "b|", "b^", "b<<", "b>>", "b>>>",
];

pub const RELATIONAL_OPERATORS: &[&str] =
    &["==", ">", "<", ">=", "<=", "!=", "===", "!==", "is", "isnt"];

pub const LOGICAL_OPERATORS: &[&str] = &["&&", "||", "^^"];

pub const CONCAT_OPERATORS: &[&str] = &[".."];

pub const SWAP_OPERATORS: &[&str] = &["><"];

pub const TYPE_OPERATORS: &[&str] = &["istype", "isnttype"];

pub const LITERALS: &[&str] = &["null", "true", "false"];

/// Tables in the order they are consulted.
const TABLES: &[(TokenKind, &[&str])] = &[
    (TokenKind::AssignmentOperator, ASSIGNMENT_OPERATORS),
    (
        TokenKind::ArithmeticOrBitwiseOperator,
        ARITHMETIC_OR_BITWISE_OPERATORS,
    ),
    (TokenKind::RelationalOperator, RELATIONAL_OPERATORS),
    (TokenKind::LogicalOperator, LOGICAL_OPERATORS),
    (TokenKind::ConcatOperator, CONCAT_OPERATORS),
    (TokenKind::SwapOperator, SWAP_OPERATORS),
    (TokenKind::TypeOperator, TYPE_OPERATORS),
    (TokenKind::Literal, LITERALS),
];

lazy_static! {
    static ref CLASSIFIER: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for (kind, spellings) in TABLES {
            for spelling in spellings.iter() {
                // first table wins
                map.entry(*spelling).or_insert(*kind);
            }
        }
        map
    };
}

/// Looks up a whitespace-trimmed word in the tables.
pub fn classify(word: &str) -> Option<TokenKind> {
    CLASSIFIER.get(word).copied()
}

/// Every `(spelling, kind)` pair, in table order.
pub fn entries() -> impl Iterator<Item = (&'static str, TokenKind)> {
    TABLES
        .iter()
        .flat_map(|(kind, spellings)| spellings.iter().map(move |s| (*s, *kind)))
}
