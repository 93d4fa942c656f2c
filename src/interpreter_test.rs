use super::*;

use std::convert::TryFrom;

use crate::error::MalformedReason;
use crate::options::AtomPolicyKind;
use crate::value::atom_policies::policy_base;
use crate::value::{AtomError, ToAtom};


fn atom(s: &str) -> Value {
    s.to_atom_or_panic(policy_base).into()
}

fn single(v: Value) -> Value {
    Cons::single(v).into()
}

fn pair(a: Value, b: Value) -> Value {
    Cons::pair(a, b).into()
}

fn reason(input: &str) -> MalformedReason {
    evaluate(input).unwrap_err().reason().clone()
}

#[test]
fn atom_identity() {
    for s in &["A", "X", "TRUE", "NIL", "AB12", "CAR"] {
        assert_eq!(evaluate(s).unwrap(), atom(s));
    }
}

#[test]
fn generic_pair() {
    assert_eq!(evaluate("(A.B)").unwrap(), pair(atom("A"), atom("B")));
    assert_eq!(
        evaluate("(A.((B.(C.NIL)).(D.NIL)))").unwrap(),
        pair(
            atom("A"),
            pair(
                pair(atom("B"), pair(atom("C"), atom("NIL"))),
                pair(atom("D"), atom("NIL"))
            )
        )
    );
}

#[test]
fn car() {
    assert_eq!(evaluate("(CAR.(X.Y))").unwrap(), single(atom("X")));
}

#[test]
fn cdr() {
    assert_eq!(evaluate("(CDR.(X.Y))").unwrap(), single(atom("Y")));
}

#[test]
fn car_of_cdr() {
    assert_eq!(
        evaluate("(CAR.((CDR.(X.Y)).Z))").unwrap(),
        single(single(atom("Y")))
    );
}

#[test]
fn cons_of_car_cdr() {
    assert_eq!(
        evaluate("(CONS.((CAR.(A.B)).(CDR.(A.C))))").unwrap(),
        pair(single(atom("A")), single(atom("C")))
    );
}

#[test]
fn nested_cons() {
    let result = evaluate("(CONS.((CONS.(A.B)).C))").unwrap();
    assert_eq!(result, pair(pair(atom("A"), atom("B")), atom("C")));
    assert_eq!(result.to_string(), "((A.B).C)");
}

#[test]
fn eq() {
    assert_eq!(evaluate("(EQ.(A.A))").unwrap(), single(true.into()));
    assert_eq!(evaluate("(EQ.(A.B))").unwrap(), single(false.into()));
}

#[test]
fn eq_pairs_structural() {
    assert_eq!(
        evaluate("(EQ.((CONS.(A.B)).(CONS.(A.B))))").unwrap(),
        single(true.into())
    );
    assert_eq!(
        evaluate("(EQ.((CONS.(A.B)).(CONS.(A.C))))").unwrap(),
        single(false.into())
    );
    // A terminated cons is not the same as a pair ending in the atom NIL.
    assert_eq!(
        evaluate("(EQ.((CAR.(A.B)).(A.NIL)))").unwrap(),
        single(false.into())
    );
}

#[test]
fn cond_true() {
    assert_eq!(
        evaluate("(COND.((EQ.(A.A)).TRUE))").unwrap(),
        single(atom("TRUE"))
    );
}

#[test]
fn cond_false() {
    assert_eq!(evaluate("(COND.((EQ.(A.B)).TRUE))").unwrap(), Value::Nil);
}

#[test]
fn cond_short_circuits() {
    // The consequent is malformed but never looked at.
    assert_eq!(evaluate("(COND.((EQ.(A.B)).(OOPS)))").unwrap(), Value::Nil);
    assert_eq!(
        reason("(COND.((EQ.(A.A)).(OOPS)))"),
        MalformedReason::MissingSeparator
    );
}

#[test]
fn cond_on_false_cond() {
    let inner = "(COND.((EQ.(A.B)).X))";
    let outer = format!("(COND.({}.Y))", inner);
    assert_eq!(evaluate(&outer).unwrap(), Value::Nil);
}

#[test]
fn cond_atom_test_is_true() {
    assert_eq!(evaluate("(COND.(A.B))").unwrap(), single(atom("B")));
}

#[test]
fn car_ignores_discarded_half() {
    assert_eq!(evaluate("(CAR.(X.(Y)))").unwrap(), single(atom("X")));
    assert_eq!(evaluate("(CDR.((Y).X))").unwrap(), single(atom("X")));
}

#[test]
fn car_cons_round_trip() {
    let operands = [("A", "B"), ("(A.B)", "C"), ("(CAR.(P.Q))", "(CONS.(R.S))")];
    for (x, y) in &operands {
        let cons = evaluate(&format!("(CONS.({}.{}))", x, y)).unwrap();
        let (car, cdr) = Cons::try_from(cons).unwrap().consume();

        let car_result = evaluate(&format!("(CAR.({}.{}))", x, y)).unwrap();
        assert_eq!(car_result, single(*car));
        let cdr_result = evaluate(&format!("(CDR.({}.{}))", x, y)).unwrap();
        assert_eq!(cdr_result, single(*cdr.unwrap()));
    }
}

#[test]
fn unknown_head_is_ordinary() {
    assert_eq!(
        evaluate("(car.(X.Y))").unwrap(),
        pair(atom("car"), pair(atom("X"), atom("Y")))
    );
    assert_eq!(
        evaluate("((CAR.(X.Y)).Z)").unwrap(),
        pair(single(atom("X")), atom("Z"))
    );
}

#[test]
fn idempotent() {
    let input = "(CONS.((CONS.((CAR.(A.B)).(CDR.(A.C)))).D))";
    let interpreter = Interpreter::default();
    assert_eq!(interpreter.eval(input).unwrap(), interpreter.eval(input).unwrap());
    assert_eq!(interpreter.eval(input).unwrap(), evaluate(input).unwrap());
}

#[test]
fn malformed() {
    assert_eq!(reason(""), MalformedReason::Empty);
    assert_eq!(reason("(AB)"), MalformedReason::MissingSeparator);
    assert_eq!(reason("(A.B"), MalformedReason::UnmatchedOpen);
    assert_eq!(reason("(A.B))"), MalformedReason::TrailingInput);
    assert_eq!(reason("(CAR.X)"), MalformedReason::MissingSeparator);
    assert_eq!(reason("(A.)"), MalformedReason::Empty);
    assert_eq!(reason("(A.B.C)"), MalformedReason::StrayDelimiter);
    assert_eq!(reason("A)"), MalformedReason::StrayDelimiter);
}

#[test]
fn malformed_propagates_from_depth() {
    let err = evaluate("(CONS.((CAR.(A.B)).(CDR.(A.(C)))))").unwrap_err();
    assert_eq!(err.reason(), &MalformedReason::MissingSeparator);
    assert_eq!(err.expr(), "(C)");
}

#[test]
fn paper_atoms() {
    let interpreter = Interpreter::new(EvalOptions::default().with_atoms(AtomPolicyKind::Paper));
    assert_eq!(interpreter.eval("(A1.B)").unwrap(), pair(atom("A1"), atom("B")));
    assert_eq!(
        interpreter.eval("(a.B)").unwrap_err().reason(),
        &MalformedReason::InvalidAtom(AtomError::NonConforming("a".to_string()))
    );
}

#[test]
fn custom_separator() {
    let interpreter = Interpreter::new(EvalOptions::default().with_separator(',').unwrap());
    assert_eq!(
        interpreter.eval("(CONS,((CAR,(A,B)),C))").unwrap(),
        pair(single(atom("A")), atom("C"))
    );
    assert_eq!(
        interpreter.eval("(A.B)").unwrap_err().reason(),
        &MalformedReason::MissingSeparator
    );
}

#[test]
fn operator_keywords() {
    assert_eq!(Operator::from_keyword("CONS"), Some(Operator::Cons));
    assert_eq!(Operator::from_keyword("cons"), None);
    assert_eq!(Operator::from_keyword("ATOM"), None);
    assert_eq!(Operator::Cond.to_string(), "COND");
}
