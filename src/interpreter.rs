//! Evaluator for dotted-pair S-expressions.
//!
//! Parsing and evaluation are fused: each level splits its text once and
//! recurses into the halves it needs. CAR and CDR never look at the half they
//! discard, and COND never looks at its consequent when the test is false.

use lazy_static::lazy_static;
use log::{debug, trace};

use std::collections::HashMap;
use std::fmt;

use crate::error::MalformedExpression;
use crate::options::EvalOptions;
use crate::splitter::split;
use crate::value::{Atom, Cons, Value};


pub type Ret = Result<Value, MalformedExpression>;

/// The primitive forms; any other head is an ordinary expression.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Car,
    Cdr,
    Cons,
    Eq,
    Cond,
}

macro_rules! operators {
    [$($keyword:tt : $op:expr),*] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($keyword, $op);
            )*
            m
        }
    };
}

lazy_static! {
    static ref OPERATORS: HashMap<&'static str, Operator> = operators![
        "CAR": Operator::Car,
        "CDR": Operator::Cdr,
        "CONS": Operator::Cons,
        "EQ": Operator::Eq,
        "COND": Operator::Cond
    ];
}

impl Operator {
    /// Exact, case-sensitive match.
    pub fn from_keyword(keyword: &str) -> Option<Operator> {
        OPERATORS.get(keyword).copied()
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::Car => "CAR",
            Operator::Cdr => "CDR",
            Operator::Cons => "CONS",
            Operator::Eq => "EQ",
            Operator::Cond => "COND",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}


/// Stateless apart from its options; share freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    options: EvalOptions,
}

impl Interpreter {
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluates one normalized (whitespace-free) expression.
    pub fn eval(&self, input: &str) -> Ret {
        self.eval_at(input, 0)
    }

    fn eval_at(&self, input: &str, depth: usize) -> Ret {
        trace!("eval[{}]: {}", depth, input);
        if !input.starts_with('(') {
            return self.atom(input);
        }

        let (head, tail) = split(input, self.options.separator)?;
        let op = match Operator::from_keyword(head) {
            Some(op) => op,
            None => {
                let car = self.eval_at(head, depth + 1)?;
                let cdr = self.eval_at(tail, depth + 1)?;
                return Ok(Cons::pair(car, cdr).into());
            }
        };

        let (x, y) = split(tail, self.options.separator)?;
        let result: Value = match op {
            Operator::Car => Cons::single(self.eval_at(x, depth + 1)?).into(),
            Operator::Cdr => Cons::single(self.eval_at(y, depth + 1)?).into(),
            Operator::Cons => {
                let car = self.eval_at(x, depth + 1)?;
                let cdr = self.eval_at(y, depth + 1)?;
                Cons::pair(car, cdr).into()
            }
            Operator::Eq => {
                let a = self.eval_at(x, depth + 1)?;
                let b = self.eval_at(y, depth + 1)?;
                Cons::single(a == b).into()
            }
            Operator::Cond => {
                if self.eval_at(x, depth + 1)?.truth() {
                    Cons::single(self.eval_at(y, depth + 1)?).into()
                } else {
                    Value::Nil
                }
            }
        };

        debug!("{}[{}] -> {}", op, depth, result);
        Ok(result)
    }

    fn atom(&self, input: &str) -> Ret {
        let separator = self.options.separator;
        if input.is_empty() {
            return malformed!(input, Empty);
        }
        if input.contains(|c: char| c == '(' || c == ')' || c == separator) {
            return malformed!(input, StrayDelimiter);
        }

        match Atom::new(input, self.options.atoms.policy()) {
            Ok(atom) => Ok(atom.into()),
            Err(err) => malformed!(input, InvalidAtom(err)),
        }
    }
}

/// Evaluates with default options.
pub fn evaluate(input: &str) -> Ret {
    Interpreter::default().eval(input)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
