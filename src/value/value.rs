//! Module for representing evaluated S-exps.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::atom::Atom;
use super::cons::Cons;
use super::fmt_io_adapter::FmtIoAdapter;


pub type HeapValue = Box<Value>;

#[derive(Clone, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Atom(Atom),
    /// Result of EQ. Never equal to an atom of the same spelling.
    Truth(bool),
    Cons(Cons),
    /// The nil terminator standing alone, with no value before it.
    Nil,
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Reads the first slot of this value as a truth value.
    ///
    /// A bare Nil is false, as is a cons whose car is false or Nil. Atoms and
    /// nested conses are true.
    pub fn truth(&self) -> bool {
        fn slot_truth(slot: &Value) -> bool {
            match slot {
                Value::Truth(b) => *b,
                Value::Nil => false,
                _ => true,
            }
        }

        match self {
            Value::Cons(cons) => slot_truth(cons.car()),
            other => slot_truth(other),
        }
    }

    /// Writes this value in dotted-pair notation.
    ///
    /// Leaves (anything but a Cons, plus the implicit terminator of a
    /// single-slot Cons) go through write_leaf; parens go through write_paren
    /// so callers can decorate them per depth.
    pub fn write_pair<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        dot: &str,
        write_leaf: &mut F,
        write_paren: &mut P,
    ) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &Value, usize) -> io::Result<()>,
        P: FnMut(&mut W, &str, usize) -> io::Result<()>,
    {
        const MAX_DISPLAY_DEPTH: usize = 64;

        let cons = match self {
            Value::Cons(cons) => cons,
            leaf => return write_leaf(w, leaf, depth),
        };
        if depth >= MAX_DISPLAY_DEPTH {
            return write!(w, "(..)");
        }

        write_paren(w, "(", depth)?;
        cons.car().write_pair(w, depth + 1, dot, write_leaf, write_paren)?;
        write!(w, "{}", dot)?;
        match cons.cdr() {
            Some(cdr) => cdr.write_pair(w, depth + 1, dot, write_leaf, write_paren)?,
            None => write_leaf(w, &Value::Nil, depth + 1)?,
        }
        write_paren(w, ")", depth)
    }
}

/// Plain rendering of a non-Cons value.
pub fn write_plain_leaf<W: io::Write>(w: &mut W, leaf: &Value) -> io::Result<()> {
    match leaf {
        Value::Atom(atom) => write!(w, "{}", atom),
        Value::Truth(true) => write!(w, "T"),
        Value::Truth(false) => write!(w, "F"),
        Value::Nil => write!(w, "NIL"),
        Value::Cons(_) => write!(w, "(..)"),
    }
}


impl fmt::Display for Value {
    /// Alternate formatting pads the dot: (A . B).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dot = if f.alternate() { " . " } else { "." };
        match self.write_pair(
            &mut FmtIoAdapter::new(f),
            0,
            dot,
            &mut |writer, leaf, _depth| write_plain_leaf(writer, leaf),
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        ) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Nil
    }
}

impl From<Atom> for Value {
    fn from(atom: Atom) -> Self {
        Value::Atom(atom)
    }
}

impl From<Cons> for Value {
    fn from(cons: Cons) -> Self {
        Value::Cons(cons)
    }
}

impl From<bool> for Value {
    fn from(truth: bool) -> Self {
        Value::Truth(truth)
    }
}

impl From<HeapValue> for Value {
    fn from(value: HeapValue) -> Self {
        *value
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
