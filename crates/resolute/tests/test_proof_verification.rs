//! Every proof found must re-derive step by step from its premises

use resolute::{
    prover_for, Atom, ClauseRole, Formula, Outcome, ProverConfig, Rule, Term, Variable,
    VerificationError,
};

fn atom(name: &str, args: Vec<Term>) -> Formula {
    Formula::atom(Atom::new(name, args))
}

fn all(var: &str, body: Formula) -> Formula {
    Formula::forall(Variable::new(var), body)
}

fn v(name: &str) -> Term {
    Term::var(name)
}

fn problems() -> Vec<(&'static str, Vec<Formula>, Formula)> {
    vec![
        (
            "syllogism",
            vec![
                all("X", Formula::implies(atom("Man", vec![v("X")]), atom("Mortal", vec![v("X")]))),
                atom("Man", vec![Term::constant("socrates")]),
            ],
            atom("Mortal", vec![Term::constant("socrates")]),
        ),
        (
            "transitivity",
            vec![
                all(
                    "X",
                    all(
                        "Y",
                        all(
                            "Z",
                            Formula::implies(
                                Formula::and(
                                    atom("Lt", vec![v("X"), v("Y")]),
                                    atom("Lt", vec![v("Y"), v("Z")]),
                                ),
                                atom("Lt", vec![v("X"), v("Z")]),
                            ),
                        ),
                    ),
                ),
                atom("Lt", vec![Term::constant("a"), Term::constant("b")]),
                atom("Lt", vec![Term::constant("b"), Term::constant("c")]),
                atom("Lt", vec![Term::constant("c"), Term::constant("d")]),
            ],
            atom("Lt", vec![Term::constant("a"), Term::constant("d")]),
        ),
        (
            "drinker",
            // ∃X (D(X) → ∀Y D(Y)) holds in every non-empty domain
            vec![],
            Formula::exists(
                Variable::new("X"),
                Formula::implies(atom("D", vec![v("X")]), all("Y", atom("D", vec![v("Y")]))),
            ),
        ),
        (
            "skolem_function",
            // ∀X ∃Y Loves(X, Y), ∀X ∀Y (Loves(X, Y) → Happy(X)) ⊢ Happy(bob)
            vec![
                all("X", Formula::exists(Variable::new("Y"), atom("Loves", vec![v("X"), v("Y")]))),
                all(
                    "X",
                    all(
                        "Y",
                        Formula::implies(
                            atom("Loves", vec![v("X"), v("Y")]),
                            atom("Happy", vec![v("X")]),
                        ),
                    ),
                ),
            ],
            atom("Happy", vec![Term::constant("bob")]),
        ),
    ]
}

#[test]
fn test_all_proofs_verify() {
    for (name, kb, query) in problems() {
        let mut prover = prover_for(&kb, &query, ProverConfig::default()).unwrap();
        let result = prover.prove();
        assert_eq!(result.outcome, Outcome::Proved, "{} was not proved", name);
        prover
            .verify_proof()
            .unwrap_or_else(|e| panic!("{}: proof verification failed: {}", name, e));
    }
}

#[test]
fn test_trace_is_a_closed_derivation() {
    for (name, kb, query) in problems() {
        let result = resolute::prove(&kb, &query, ProverConfig::default()).unwrap();

        let mut known: Vec<_> = result.premises.iter().map(|s| s.clause_id).collect();
        for step in &result.premises {
            assert_eq!(step.rule, Rule::Input, "{}", name);
            assert!(step.parents.is_empty(), "{}", name);
        }
        for step in &result.trace {
            assert_ne!(step.rule, Rule::Input, "{}", name);
            for parent in &step.parents {
                assert!(
                    known.contains(parent),
                    "{}: step {} uses unknown {}",
                    name,
                    step.clause_id,
                    parent
                );
            }
            known.push(step.clause_id);
        }

        let last = result.trace.last().unwrap();
        assert!(last.conclusion.is_empty(), "{}", name);
        // Every refutation needs the negated query
        assert!(
            result.premises.iter().any(|s| s.conclusion.role == ClauseRole::NegatedConjecture),
            "{}",
            name
        );
    }
}

#[test]
fn test_no_proof_to_verify() {
    let kb = vec![atom("P", vec![Term::constant("a")])];
    let query = atom("P", vec![Term::constant("b")]);
    let mut prover = prover_for(&kb, &query, ProverConfig::default()).unwrap();
    assert_eq!(prover.prove().outcome, Outcome::NotProved);
    assert_eq!(prover.verify_proof(), Err(VerificationError::NoProof));
}
