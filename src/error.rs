/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The diagnostic taxonomy. Each variant corresponds to exactly one of
/// the distinct syntactic failures the scanner can detect; the parser
/// reports the first one it hits and stops (no error recovery).
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum ErrorKind {
    /// Leading `10` followed by a literal digit instead of an exponent.
    BadNumMultiplier,
    /// A binary operator (`*`, `.`, `/`) with no operand on one side.
    DanglingBinop,
    /// Two binary operators in a row.
    ConsecBinops,
    /// An unrecognised character where a unit, operator or grouping
    /// symbol was expected.
    BadInitialSymbol,
    /// An unrecognised character while scanning an exponent.
    BadExponSymbol,
    /// A `log`/`ln`/`exp`/`sqrt` function tag found inside a
    /// parenthesised sub-expression.
    FunctionContext,
    /// Unmatched `(` or `)`.
    UnbalParen,
    /// Unmatched `[` or `]`.
    UnbalBracket,
    /// Internal inconsistency, including exceeding the recursion-depth
    /// limit.
    ParserError,
}

impl ErrorKind {
    /// The taxonomy tag, stable across releases, for callers that want
    /// to match on the diagnostic category without depending on the
    /// enum's Rust representation (e.g. a JSON API consumer).
    pub const fn tag(&self) -> &'static str {
        match self {
            ErrorKind::BadNumMultiplier => "BAD_NUM_MULTIPLIER",
            ErrorKind::DanglingBinop => "DANGLING_BINOP",
            ErrorKind::ConsecBinops => "CONSEC_BINOPS",
            ErrorKind::BadInitialSymbol => "BAD_INITIAL_SYMBOL",
            ErrorKind::BadExponSymbol => "BAD_EXPON_SYMBOL",
            ErrorKind::FunctionContext => "FUNCTION_CONTEXT",
            ErrorKind::UnbalParen => "UNBAL_PAREN",
            ErrorKind::UnbalBracket => "UNBAL_BRACKET",
            ErrorKind::ParserError => "PARSER_ERROR",
        }
    }

    /// A human-readable phrase describing the category, for presentation
    /// layers that want more than the bare tag.
    pub const fn description(&self) -> &'static str {
        match self {
            ErrorKind::BadNumMultiplier => {
                "'10' multiplier followed by a literal digit instead of an exponent"
            }
            ErrorKind::DanglingBinop => {
                "binary operator with no operand"
            }
            ErrorKind::ConsecBinops => "two binary operators in a row",
            ErrorKind::BadInitialSymbol => {
                "unrecognised character (expected a unit, operator or grouping symbol)"
            }
            ErrorKind::BadExponSymbol => {
                "unrecognised character while scanning an exponent"
            }
            ErrorKind::FunctionContext => {
                "function tag inside a parenthesised sub-expression"
            }
            ErrorKind::UnbalParen => "unbalanced parentheses",
            ErrorKind::UnbalBracket => "unbalanced brackets",
            ErrorKind::ParserError => "internal parser error",
        }
    }
}

/// A failed parse. Carries the diagnostic category and the original
/// input verbatim, so a caller can reproduce the message the wcslib
/// family of tools emits without the core depending on any particular
/// presentation.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
#[error("{kind}: {input:?}")]
pub struct UnitError {
    pub kind: ErrorKind,
    pub input: String,
}

impl UnitError {
    pub fn new(kind: ErrorKind, input: impl Into<String>) -> Self {
        UnitError {
            kind,
            input: input.into(),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
