//! Most General Unifier (MGU) computation

use super::substitution::Substitution;
use crate::logic::core::literal::{Atom, PredicateSymbol};
use crate::logic::core::term::{Term, Variable};
use std::collections::VecDeque;
use std::fmt;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Reasons a unification attempt fails.
///
/// Failure is an ordinary outcome of the search, not a program error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Occurs check failed - variable occurs in term
    OccursCheck(Variable, Term),
    /// Constant or function symbols don't match
    SymbolClash(String, String),
    /// Same function symbol used with different arities
    ArityMismatch(usize, usize),
    /// Atoms with different predicate symbols
    PredicateClash(PredicateSymbol, PredicateSymbol),
}

impl fmt::Display for UnificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnificationError::OccursCheck(v, t) => write!(f, "occurs check: {} in {}", v, t),
            UnificationError::SymbolClash(a, b) => write!(f, "symbol clash: {} vs {}", a, b),
            UnificationError::ArityMismatch(a, b) => write!(f, "arity mismatch: {} vs {}", a, b),
            UnificationError::PredicateClash(p, q) => {
                write!(f, "predicate clash: {}/{} vs {}/{}", p.name, p.arity, q.name, q.arity)
            }
        }
    }
}

/// Unify two terms, returning a most general unifier (MGU) if one exists
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    unify_many(vec![(term1.clone(), term2.clone())])
}

/// Unify two atoms. Predicate name and arity must agree before any argument
/// is looked at.
pub fn unify_atoms(atom1: &Atom, atom2: &Atom) -> UnificationResult {
    if atom1.predicate != atom2.predicate || atom1.args.len() != atom2.args.len() {
        return Err(UnificationError::PredicateClash(
            atom1.predicate.clone(),
            atom2.predicate.clone(),
        ));
    }
    unify_many(
        atom1
            .args
            .iter()
            .cloned()
            .zip(atom2.args.iter().cloned())
            .collect(),
    )
}

/// Simultaneously unify a list of term pairs, left to right.
///
/// Robinson's algorithm over a work list. Every pending pair has the current
/// substitution applied, so a new binding is pushed into the remaining work
/// and into the range of the substitution as soon as it is made.
pub fn unify_many(pairs: Vec<(Term, Term)>) -> UnificationResult {
    let mut subst = Substitution::new();
    let mut pending: VecDeque<(Term, Term)> = pairs.into();

    while let Some((t1, t2)) = pending.pop_front() {
        if t1 == t2 {
            continue;
        }
        match (t1, t2) {
            (Term::Variable(v1), Term::Variable(v2)) => {
                // Later-introduced variable is bound to the earlier one
                let (from, to) = if v1 > v2 { (v1, v2) } else { (v2, v1) };
                bind(&mut subst, &mut pending, from, Term::Variable(to));
            }
            (Term::Variable(v), t) | (t, Term::Variable(v)) => {
                if t.contains_variable(&v) {
                    return Err(UnificationError::OccursCheck(v, t));
                }
                bind(&mut subst, &mut pending, v, t);
            }
            (Term::Constant(c1), Term::Constant(c2)) => {
                // Equal constants were skipped above
                return Err(UnificationError::SymbolClash(c1.name, c2.name));
            }
            (Term::Function(f1, args1), Term::Function(f2, args2)) => {
                if f1.name != f2.name {
                    return Err(UnificationError::SymbolClash(f1.name, f2.name));
                }
                if args1.len() != args2.len() {
                    return Err(UnificationError::ArityMismatch(args1.len(), args2.len()));
                }
                // Front of the queue, first argument first
                for pair in args1.into_iter().zip(args2).rev() {
                    pending.push_front(pair);
                }
            }
            (Term::Function(f, args), Term::Constant(c))
            | (Term::Constant(c), Term::Function(f, args)) => {
                // `a()` and `a` name the same constant
                if args.is_empty() && f.name == c.name {
                    continue;
                }
                return Err(UnificationError::SymbolClash(f.name, c.name));
            }
        }
    }

    Ok(subst)
}

fn bind(
    subst: &mut Substitution,
    pending: &mut VecDeque<(Term, Term)>,
    var: Variable,
    term: Term,
) {
    let single = Substitution::singleton(var.clone(), term.clone());
    for (a, b) in pending.iter_mut() {
        *a = a.apply_substitution(&single);
        *b = b.apply_substitution(&single);
    }
    subst.insert_normalized(var, term);
}
