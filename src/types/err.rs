//! Error types used in the library.
//!
//! - Parse errors are external, and follow from malformed input.
//! - BCP errors follow from a request to propagate through a formula which is not in Horn form.
//!   This is a violation of the contract of the linear procedure, and is fatal to the relevant call.
//! - Evaluation errors follow from evaluating a formula on a valuation which does not value some atom of the formula.
//!
//! Note, a solve which fails to determine the satisfiability of a formula is *not* an error.
//! Instead, see [Decision::Unknown](crate::reports::Decision::Unknown).
//
//  As with the names of the reports, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::NodeKey;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    BCP(BCPError),
    Evaluation(EvaluationError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::BCP(e) => write!(f, "BCP error: {e}"),
            Self::Evaluation(e) => write!(f, "Evaluation error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, or a string of whitespace.
    Empty,

    /// A pair of brackets with nothing between them.
    EmptyGroup,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// A connective was read without some formula on one side of the connective.
    MissingOperand,

    /// Two formulas were read without a connective between them.
    MissingConnective,

    /// Some open bracket was not closed.
    UnmatchedOpen,

    /// Some close bracket does not close an open bracket.
    UnmatchedClose,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::EmptyGroup => write!(f, "empty brackets"),
            Self::Negation => write!(f, "negation without a formula to negate"),
            Self::MissingOperand => write!(f, "connective without a formula on each side"),
            Self::MissingConnective => write!(f, "formulas without a connective between them"),
            Self::UnmatchedOpen => write!(f, "unclosed bracket"),
            Self::UnmatchedClose => write!(f, "unopened bracket"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// Propagation was requested through a disjunction or an implication.
    /// Propagation is only defined on atoms, negations, and conjunctions, and so the formula should first be rewritten to Horn form.
    UnsupportedOperation(NodeKey),
}

impl std::fmt::Display for BCPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperation(key) => {
                write!(f, "propagation through {key:?}, which is not an atom, negation, or conjunction")
            }
        }
    }
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors during evaluation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The valuation does not contain a value for the atom.
    UnboundVariable(String),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable(sign) => write!(f, "no value for {sign}"),
        }
    }
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}
