//! Evaluator for the dotted-pair S-expression language of McCarthy's 1960
//! paper, restricted to CAR, CDR, CONS, EQ and COND.
//!
//! ```
//! use dotlisp::prelude::*;
//!
//! let value = evaluate("(CONS.((CAR.(A.B)).(CDR.(A.C))))").unwrap();
//! assert_eq!(value.to_string(), "((A.NIL).(C.NIL))");
//! ```
//!
//! Input must be whitespace-free; see stream::oneline. Note that this crate
//! does *not* setup logging, clients should take care of that. See:
//!   https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;

pub mod interpreter;
pub mod options;
pub mod printer;
pub mod splitter;
pub mod stream;
pub mod value;

pub mod prelude {
    pub use crate::error::{MalformedExpression, MalformedReason};
    pub use crate::interpreter::{evaluate, Interpreter, Operator, Ret};
    pub use crate::options::{AtomPolicyKind, EvalOptions};
    pub use crate::splitter::{split, DEFAULT_SEPARATOR};
    pub use crate::stream::{oneline, read_exprs, ExprCollector};
    pub use crate::value::{Atom, Cons, HeapValue, ToAtom, Value};
    // Macros.
    pub use crate::malformed;
}
