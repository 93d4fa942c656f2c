//! Getting expression text into evaluable shape.
//!
//! Evaluation expects one expression with no whitespace at all. The helpers
//! here strip whitespace and carve multi-line, multi-expression text into
//! single expressions.

// Public exports.
pub use collector::{read_exprs, ExprCollector};

// Public mods.
pub mod collector;

#[cfg(feature = "cli")]
pub mod cli_stream;


/// Squishes multi-line text into one line by dropping all whitespace.
pub fn oneline<S: AsRef<str>>(input: S) -> String {
    input.as_ref().split_whitespace().collect()
}
