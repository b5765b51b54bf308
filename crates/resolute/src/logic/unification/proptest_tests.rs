//! Property-based tests for unification and matching using proptest.

use super::{match_term, unify, Substitution};
use crate::logic::core::term::{ScopeId, Term, Variable};
use proptest::prelude::*;

/// Term description, turned into a term by `build_term`
#[derive(Debug, Clone)]
enum TermDesc {
    Var(u8),                 // Variable index 0-3
    Const(u8),               // Constant index 0-3
    Func(u8, Vec<TermDesc>), // Function index 0-1, with args
}

fn arb_term_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        prop_oneof![
            (0..4u8).prop_map(TermDesc::Var),
            (0..4u8).prop_map(TermDesc::Const),
        ]
        .boxed()
    } else {
        prop_oneof![
            3 => (0..4u8).prop_map(TermDesc::Var),
            3 => (0..4u8).prop_map(TermDesc::Const),
            2 => (0..2u8, proptest::collection::vec(arb_term_desc(max_depth - 1), 1..=2))
                .prop_map(|(f, args)| TermDesc::Func(f, args)),
        ]
        .boxed()
    }
}

/// Function symbols always get the arity their index implies, so a symbol
/// name never appears with two arities
fn build_term(desc: &TermDesc) -> Term {
    match desc {
        TermDesc::Var(i) => Term::var(format!("X{}", i)),
        TermDesc::Const(i) => Term::constant(format!("c{}", i)),
        TermDesc::Func(f, args) => {
            let args: Vec<Term> = args.iter().map(build_term).collect();
            Term::function(format!("f{}_{}", f, args.len()), args)
        }
    }
}

fn arb_term(max_depth: u32) -> impl Strategy<Value = Term> {
    arb_term_desc(max_depth).prop_map(|d| build_term(&d))
}

fn arb_term_pair(max_depth: u32) -> impl Strategy<Value = (Term, Term)> {
    (arb_term(max_depth), arb_term(max_depth))
}

/// Move every variable of a term into the given scope
fn rescope(term: &Term, scope: u64) -> Term {
    let mut subst = Substitution::new();
    for v in term.variables() {
        let renamed = Variable::scoped(v.name.clone(), ScopeId(scope));
        subst.insert(v, Term::Variable(renamed));
    }
    term.apply_substitution(&subst)
}

// =========================================================================
// Unification properties
// =========================================================================

proptest! {
    /// Soundness: if unify(s, t) = σ, then sσ = tσ
    #[test]
    fn unification_soundness((t1, t2) in arb_term_pair(3)) {
        if let Ok(sigma) = unify(&t1, &t2) {
            let t1_sigma = t1.apply_substitution(&sigma);
            let t2_sigma = t2.apply_substitution(&sigma);
            prop_assert_eq!(t1_sigma, t2_sigma, "unifier must make terms equal");
        }
    }

    /// The unifier is idempotent: applying it twice changes nothing
    #[test]
    fn unification_idempotent((t1, t2) in arb_term_pair(3)) {
        if let Ok(sigma) = unify(&t1, &t2) {
            prop_assert!(sigma.is_idempotent(), "unifier {} is not idempotent", sigma);
            let once = t1.apply_substitution(&sigma);
            prop_assert_eq!(once.apply_substitution(&sigma), once);
        }
    }

    /// Symmetry: unify(s, t) succeeds iff unify(t, s) succeeds
    #[test]
    fn unification_symmetry((t1, t2) in arb_term_pair(3)) {
        let r1 = unify(&t1, &t2);
        let r2 = unify(&t2, &t1);
        prop_assert_eq!(r1.is_ok(), r2.is_ok(), "unification should be symmetric");
    }

    /// The unifier only mentions variables of its inputs
    #[test]
    fn unification_no_foreign_variables((t1, t2) in arb_term_pair(3)) {
        let vars: Vec<Variable> = t1.variables().into_iter().chain(t2.variables()).collect();
        if let Ok(sigma) = unify(&t1, &t2) {
            for (var, term) in &sigma.map {
                prop_assert!(vars.contains(var), "unifier binds foreign variable {}", var);
                for v in term.variables() {
                    prop_assert!(vars.contains(&v), "unifier introduces variable {}", v);
                }
            }
        }
    }

    /// Occurs check: unify(X, f(X)) should always fail
    #[test]
    fn unification_occurs_check(func_idx in 0..2u8, depth in 1..3u32) {
        let x = Term::var("X");
        let mut term = x.clone();
        for _ in 0..depth {
            term = Term::function(format!("f{}", func_idx), vec![term]);
        }
        prop_assert!(unify(&x, &term).is_err(), "occurs check should prevent X = f(...X...)");
    }

    /// Identity: unify(t, t) succeeds with the empty substitution
    #[test]
    fn unification_identity(t in arb_term(3)) {
        let result = unify(&t, &t);
        prop_assert!(result.is_ok(), "term should unify with itself");
        if let Ok(sigma) = result {
            prop_assert!(sigma.is_empty());
        }
    }

    /// A term always unifies with a renamed copy of itself, and the unifier
    /// maps the copy's variables onto the original's
    #[test]
    fn unification_with_renamed_copy(t in arb_term(3)) {
        let original = rescope(&t, 1);
        let copy = rescope(&t, 2);
        let sigma = unify(&original, &copy);
        prop_assert!(sigma.is_ok());
        if let Ok(sigma) = sigma {
            prop_assert_eq!(copy.apply_substitution(&sigma), original);
        }
    }
}

// =========================================================================
// Matching properties
// =========================================================================

proptest! {
    /// Soundness: if match(pattern, target) = σ, then pattern·σ = target
    #[test]
    fn matching_soundness((t1, t2) in arb_term_pair(3)) {
        let mut sigma = Substitution::new();
        if match_term(&t1, &t2, &mut sigma) {
            let t1_sigma = t1.apply_substitution(&sigma);
            prop_assert_eq!(
                t1_sigma,
                t2,
                "matching substitution must make pattern equal to target"
            );
        }
    }

    /// Matching is NOT symmetric in general
    #[test]
    fn matching_asymmetry_constant_vs_variable(const_idx in 0..4u8) {
        let x = Term::var("X");
        let c = Term::constant(format!("c{}", const_idx));

        prop_assert!(
            match_term(&x, &c, &mut Substitution::new()),
            "variable pattern should match constant"
        );
        prop_assert!(
            !match_term(&c, &x, &mut Substitution::new()),
            "constant pattern should not match variable"
        );
    }
}

// =========================================================================
// Substitution properties
// =========================================================================

proptest! {
    /// Empty substitution is identity
    #[test]
    fn substitution_identity(t in arb_term(3)) {
        let empty = Substitution::new();
        let t_applied = t.apply_substitution(&empty);
        prop_assert_eq!(t, t_applied, "empty substitution should be identity");
    }

    /// Applying a composition equals applying both substitutions in turn
    #[test]
    fn substitution_compose((t1, t2) in arb_term_pair(2), t in arb_term(3)) {
        let s1 = Substitution::singleton(Variable::new("X0"), t1);
        let s2 = Substitution::singleton(Variable::new("X1"), t2);
        let composed = s1.compose(&s2);
        prop_assert_eq!(
            t.apply_substitution(&composed),
            t.apply_substitution(&s1).apply_substitution(&s2)
        );
    }
}
