use dotlisp::prelude::*;


pub fn setup() -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::default()
}

pub fn results<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> Vec<Value> {
    read_exprs(s)
        .unwrap()
        .iter()
        .map(|e| interpreter.eval(e).unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> Vec<Ret> {
    read_exprs(s)
        .unwrap()
        .iter()
        .map(|e| interpreter.eval(e))
        .collect::<Vec<_>>()
}

pub fn atom(s: &str) -> Value {
    s.to_atom_or_panic(AtomPolicyKind::Base.policy()).into()
}
