//! The one failure mode of evaluation: text that does not describe a
//! well-formed dotted-pair expression.
//!
//! Errors propagate unchanged from the innermost split up through every
//! enclosing evaluation; there is no partial result.

use std::fmt;

use crate::value::atom_policies::policy_base;
use crate::value::{AtomError, Cons, ToAtom, Value};


/// Creates a MalformedExpression wrapped in Err.
#[macro_export]
macro_rules! malformed {
    ($expr:expr, $($reason:tt)+) => {
        Err($crate::error::MalformedExpression::new(
            $crate::error::MalformedReason::$($reason)+,
            $expr,
        ))
    };
}


#[derive(Clone, Debug, PartialEq)]
pub struct MalformedExpression {
    reason: MalformedReason,
    expr: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MalformedReason {
    Empty,
    MissingSeparator,
    UnmatchedOpen,
    UnmatchedClose,
    TrailingInput,
    StrayDelimiter,
    InvalidAtom(AtomError),
    InvalidSeparator(char),
}

impl MalformedExpression {
    /// Prefer using malformed! for convenience.
    pub fn new<S: AsRef<str>>(reason: MalformedReason, expr: S) -> Self {
        Self {
            reason,
            expr: expr.as_ref().to_string(),
        }
    }

    pub fn reason(&self) -> &MalformedReason {
        &self.reason
    }

    /// The (sub)expression that failed, not necessarily the whole input.
    pub fn expr(&self) -> &str {
        &self.expr
    }

    /// Error as a Value: (MalformedExpression.(<Reason>.NIL)).
    pub fn reify(&self) -> Value {
        Cons::pair(
            "MalformedExpression".to_atom_or_panic(policy_base),
            Cons::single(self.reason.name().to_atom_or_panic(policy_base)),
        )
        .into()
    }
}

impl MalformedReason {
    pub fn name(&self) -> &'static str {
        match self {
            MalformedReason::Empty => "Empty",
            MalformedReason::MissingSeparator => "MissingSeparator",
            MalformedReason::UnmatchedOpen => "UnmatchedOpen",
            MalformedReason::UnmatchedClose => "UnmatchedClose",
            MalformedReason::TrailingInput => "TrailingInput",
            MalformedReason::StrayDelimiter => "StrayDelimiter",
            MalformedReason::InvalidAtom(_) => "InvalidAtom",
            MalformedReason::InvalidSeparator(_) => "InvalidSeparator",
        }
    }
}


impl fmt::Display for MalformedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Malformed Expression] {}: \"{}\"", self.reason, self.expr)
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "empty expression"),
            MalformedReason::MissingSeparator => write!(f, "no top-level pair separator"),
            MalformedReason::UnmatchedOpen => write!(f, "unmatched open paren"),
            MalformedReason::UnmatchedClose => write!(f, "unmatched close paren"),
            MalformedReason::TrailingInput => write!(f, "input continues past closing paren"),
            MalformedReason::StrayDelimiter => write!(f, "delimiter inside atom"),
            MalformedReason::InvalidAtom(err) => write!(f, "invalid atom ({})", err),
            MalformedReason::InvalidSeparator(c) => write!(f, "unusable separator '{}'", c),
        }
    }
}

impl std::error::Error for MalformedExpression {}
