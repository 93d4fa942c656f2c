use std::borrow::Borrow;
use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::Value;


/// Indivisible symbolic token; compared by its text alone.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Atom(String);

/// Decides which strings may name an atom. See atom_policies.
pub type AtomPolicy = fn(&str) -> Result<(), AtomError>;

pub type AtomResult = Result<Atom, AtomError>;

pub trait ToAtom {
    fn to_atom(&self, policy: AtomPolicy) -> AtomResult;

    fn to_atom_or_panic(&self, policy: AtomPolicy) -> Atom {
        self.to_atom(policy).unwrap()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AtomError {
    Empty,
    Whitespace(String),
    Delimiter(String),
    NonConforming(String),
}

impl Atom {
    pub fn new<S: AsRef<str>>(atom: S, policy: AtomPolicy) -> AtomResult {
        policy(atom.as_ref())?;
        Ok(Atom(atom.as_ref().to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToAtom for S {
    fn to_atom(&self, policy: AtomPolicy) -> AtomResult {
        Atom::new(self, policy)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for AtomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomError::Empty => write!(f, "empty atom"),
            AtomError::Whitespace(s) => write!(f, "atom \"{}\" contains whitespace", s),
            AtomError::Delimiter(s) => write!(f, "atom \"{}\" contains a delimiter", s),
            AtomError::NonConforming(s) => write!(f, "atom \"{}\" rejected by policy", s),
        }
    }
}

impl Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<Value> for Atom {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Atom(atom) = value {
            Ok(atom)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Atom {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Atom(atom) = value {
            Ok(atom)
        } else {
            Err(value)
        }
    }
}
