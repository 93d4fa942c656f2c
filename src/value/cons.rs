use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use super::value::{HeapValue, Value};


/// Ordered pair. A missing cdr is the nil terminator, i.e. the cons carries
/// a single evaluated value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Cons {
    car: HeapValue,
    cdr: Option<HeapValue>,
}

impl Cons {
    pub fn new(car: HeapValue, cdr: Option<HeapValue>) -> Cons {
        Cons { car, cdr }
    }

    pub fn pair<A: Into<Value>, B: Into<Value>>(car: A, cdr: B) -> Cons {
        Cons::new(Box::new(car.into()), Some(Box::new(cdr.into())))
    }

    pub fn single<A: Into<Value>>(car: A) -> Cons {
        Cons::new(Box::new(car.into()), None)
    }

    pub fn car(&self) -> &Value {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> Option<&Value> {
        match &self.cdr {
            Some(val) => Some(val.as_ref()),
            None => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.cdr.is_none()
    }

    pub fn consume(self) -> (HeapValue, Option<HeapValue>) {
        (self.car, self.cdr)
    }
}


impl TryFrom<Value> for Cons {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a Cons {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}
