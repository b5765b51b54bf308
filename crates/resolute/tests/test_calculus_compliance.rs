//! Tests that the inference rules and redundancy checks behave like the
//! resolution calculus requires

use resolute::{
    factoring, is_tautology, resolve, subsumes, unify, Atom, Clause, ClauseId, Literal, Outcome,
    Prover, ProverConfig, ScopeId, Term, UnificationError, Variable, VariableFactory,
};
use std::sync::Arc;

fn pos(name: &str, args: Vec<Term>) -> Literal {
    Literal::positive(Atom::new(name, args))
}

fn neg(name: &str, args: Vec<Term>) -> Literal {
    Literal::negative(Atom::new(name, args))
}

fn x() -> Term {
    Term::var("X")
}

fn f(arg: Term) -> Term {
    Term::function("f", vec![arg])
}

#[test]
fn test_complementary_ground_units_give_empty_clause() {
    let factory = VariableFactory::new();
    let a = Term::constant("a");
    let resolvents = resolve(
        &Clause::new(vec![pos("P", vec![a.clone()])]),
        &Clause::new(vec![neg("P", vec![a])]),
        &factory,
    );
    assert_eq!(resolvents.len(), 1);
    assert!(resolvents[0].is_empty());
}

#[test]
fn test_different_constants_do_not_resolve() {
    let factory = VariableFactory::new();
    let resolvents = resolve(
        &Clause::new(vec![pos("P", vec![Term::constant("a")])]),
        &Clause::new(vec![neg("P", vec![Term::constant("b")])]),
        &factory,
    );
    assert!(resolvents.is_empty());
}

#[test]
fn test_self_resolution_renames_apart() {
    // ~P(X) ∨ P(f(X)) against its own copy gives ~P(X) ∨ P(f(f(X)))
    let clause = Clause::new(vec![neg("P", vec![x()]), pos("P", vec![f(x())])]);
    let factory = VariableFactory::new();
    let resolvents = resolve(&clause, &clause, &factory);

    let expected = Clause::new(vec![neg("P", vec![x()]), pos("P", vec![f(f(x()))])]).key();
    assert!(!resolvents.is_empty());
    assert!(resolvents.iter().all(|r| r.key() == expected));
    // Without renaming, X ↦ f(X) would fail the occurs check and nothing
    // would be derived
    for r in &resolvents {
        assert_eq!(r.variables().len(), 1);
    }
}

#[test]
fn test_occurs_check() {
    assert!(matches!(
        unify(&x(), &f(x())),
        Err(UnificationError::OccursCheck(_, _))
    ));
}

#[test]
fn test_unifier_makes_terms_equal() {
    let t1 = Term::function("g", vec![x(), Term::constant("b")]);
    let t2 = Term::function("g", vec![Term::constant("a"), Term::var("Y")]);
    let mgu = unify(&t1, &t2).unwrap();
    assert_eq!(t1.apply_substitution(&mgu), t2.apply_substitution(&mgu));
}

#[test]
fn test_factoring_merges_unifiable_literals() {
    let clause = Clause::new(vec![
        pos("P", vec![x()]),
        pos("P", vec![Term::constant("a")]),
        pos("Q", vec![x()]),
    ]);
    let factors = factoring(&clause, ClauseId(7));
    assert_eq!(factors.len(), 1);
    assert_eq!(factors[0].conclusion.to_string(), "P(a) ∨ Q(a)");
    assert_eq!(factors[0].derivation.premises, vec![ClauseId(7)]);
}

#[test]
fn test_renamed_clauses_are_the_same_clause() {
    let original = Clause::new(vec![neg("P", vec![x()]), pos("Q", vec![x(), Term::var("Y")])]);
    let renamed = Clause::new(vec![
        pos(
            "Q",
            vec![
                Term::Variable(Variable::scoped("U", ScopeId(3))),
                Term::Variable(Variable::scoped("V", ScopeId(9))),
            ],
        ),
        neg("P", vec![Term::Variable(Variable::scoped("U", ScopeId(3)))]),
    ]);
    assert_eq!(original.key(), renamed.key());

    let prover = Prover::new(
        vec![original, renamed],
        ProverConfig::default(),
        Arc::new(VariableFactory::new()),
    );
    assert_eq!(prover.store().len(), 1);
}

#[test]
fn test_variable_sharing_is_part_of_the_clause() {
    // P(X, X) and P(X, Y) are not renamings of each other
    let shared = Clause::new(vec![pos("P", vec![x(), x()])]);
    let distinct = Clause::new(vec![pos("P", vec![x(), Term::var("Y")])]);
    assert_ne!(shared.key(), distinct.key());
}

#[test]
fn test_subsumption_respects_size() {
    let general = Clause::new(vec![pos("P", vec![x()])]);
    let specific = Clause::new(vec![pos("P", vec![Term::constant("a")]), pos("Q", vec![])]);
    assert!(subsumes(&general, &specific));
    assert!(!subsumes(&specific, &general));

    // P(X) ∨ P(Y) maps onto P(a) but is longer, so it must not subsume it
    let two = Clause::new(vec![pos("P", vec![x()]), pos("P", vec![Term::var("Y")])]);
    let unit = Clause::new(vec![pos("P", vec![Term::constant("a")])]);
    assert!(!subsumes(&two, &unit));
}

#[test]
fn test_tautology_detection() {
    let clause = Clause::new(vec![pos("P", vec![x()]), neg("P", vec![x()])]);
    assert!(is_tautology(&clause));
    let not_taut = Clause::new(vec![pos("P", vec![x()]), neg("P", vec![Term::var("Y")])]);
    assert!(!is_tautology(&not_taut));
}

#[test]
fn test_refutation_that_needs_factoring() {
    // P(X) ∨ P(Y) and ~P(U) ∨ ~P(V) are unsatisfiable, but binary resolution
    // alone never shortens the clauses
    let clauses = vec![
        Clause::new(vec![pos("P", vec![x()]), pos("P", vec![Term::var("Y")])]),
        Clause::new(vec![neg("P", vec![Term::var("U")]), neg("P", vec![Term::var("V")])]),
    ];
    let mut prover = Prover::new(
        clauses,
        ProverConfig::default(),
        Arc::new(VariableFactory::new()),
    );
    let result = prover.prove();

    assert_eq!(result.outcome, Outcome::Proved);
    assert!(result.stats.factors_generated > 0);
    assert!(prover.verify_proof().is_ok());
}
