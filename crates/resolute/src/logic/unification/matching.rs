//! One-way matching for subsumption

use super::substitution::Substitution;
use crate::logic::core::literal::Literal;
use crate::logic::core::term::Term;

/// One-way match: extend `subst` so that `pattern`σ == `term`.
///
/// Only variables of the pattern are bound; variables of `term` are treated
/// as constants. On failure `subst` may hold partial bindings, so callers
/// that backtrack keep their own copy.
pub fn match_term(pattern: &Term, term: &Term, subst: &mut Substitution) -> bool {
    match (pattern, term) {
        (Term::Variable(v), t) => match subst.get(v) {
            Some(bound) => bound == t,
            None => {
                subst.insert(v.clone(), t.clone());
                true
            }
        },
        (Term::Constant(c1), Term::Constant(c2)) => c1 == c2,
        (Term::Function(f1, args1), Term::Function(f2, args2)) => {
            f1 == f2
                && args1.len() == args2.len()
                && args1
                    .iter()
                    .zip(args2)
                    .all(|(p, t)| match_term(p, t, subst))
        }
        (Term::Constant(c), t) => t.is_constant_named(&c.name),
        (Term::Function(f, args), t) if args.is_empty() => t.is_constant_named(&f.name),
        _ => false,
    }
}

/// Match a literal onto another of the same polarity and predicate
pub fn match_literal(pattern: &Literal, target: &Literal, subst: &mut Substitution) -> bool {
    pattern.polarity == target.polarity
        && pattern.atom.predicate == target.atom.predicate
        && pattern
            .atom
            .args
            .iter()
            .zip(&target.atom.args)
            .all(|(p, t)| match_term(p, t, subst))
}
