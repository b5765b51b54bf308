//! First-order formulas, the input to clausal normalization

use super::literal::Atom;
use super::term::Variable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// First-order formula
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// Atomic formula
    Atom(Atom),
    /// Negation
    Not(Box<Formula>),
    /// Conjunction
    And(Box<Formula>, Box<Formula>),
    /// Disjunction
    Or(Box<Formula>, Box<Formula>),
    /// Implication
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional
    Iff(Box<Formula>, Box<Formula>),
    /// Universal quantification
    ForAll(Variable, Box<Formula>),
    /// Existential quantification
    Exists(Variable, Box<Formula>),
}

impl Formula {
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    pub fn negation(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    pub fn forall(var: Variable, body: Formula) -> Self {
        Formula::ForAll(var, Box::new(body))
    }

    pub fn exists(var: Variable, body: Formula) -> Self {
        Formula::Exists(var, Box::new(body))
    }

    /// Left-nested conjunction of all formulas; `None` when empty
    pub fn conjunction(formulas: impl IntoIterator<Item = Formula>) -> Option<Formula> {
        formulas.into_iter().reduce(Formula::and)
    }

    /// Get all free variables in the formula
    pub fn free_variables(&self) -> HashSet<Variable> {
        match self {
            Formula::Atom(atom) => {
                let mut vars = HashSet::new();
                atom.collect_variables(&mut vars);
                vars
            }
            Formula::Not(f) => f.free_variables(),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                let mut vars = f1.free_variables();
                vars.extend(f2.free_variables());
                vars
            }
            Formula::ForAll(var, f) | Formula::Exists(var, f) => {
                let mut vars = f.free_variables();
                vars.remove(var);
                vars
            }
        }
    }

    /// Check if the formula is closed (no free variables)
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    /// Bind every free variable with an outermost universal quantifier.
    ///
    /// Quantifiers are added in a deterministic order (sorted variables).
    pub fn universal_closure(self) -> Formula {
        let mut free: Vec<Variable> = self.free_variables().into_iter().collect();
        free.sort();
        free.into_iter()
            .rev()
            .fold(self, |body, var| Formula::forall(var, body))
    }

    /// Check if the formula contains any quantifier
    pub fn contains_quantifier(&self) -> bool {
        match self {
            Formula::Atom(_) => false,
            Formula::Not(f) => f.contains_quantifier(),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => f1.contains_quantifier() || f2.contains_quantifier(),
            Formula::ForAll(_, _) | Formula::Exists(_, _) => true,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(inner) => write!(f, "~{}", inner),
            Formula::And(a, b) => write!(f, "({} & {})", a, b),
            Formula::Or(a, b) => write!(f, "({} | {})", a, b),
            Formula::Implies(a, b) => write!(f, "({} => {})", a, b),
            Formula::Iff(a, b) => write!(f, "({} <=> {})", a, b),
            Formula::ForAll(v, body) => write!(f, "![{}]: {}", v, body),
            Formula::Exists(v, body) => write!(f, "?[{}]: {}", v, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::core::term::Term;

    fn p(args: Vec<Term>) -> Formula {
        Formula::atom(Atom::new("P", args))
    }

    #[test]
    fn test_free_variables_respect_binders() {
        let x = Variable::new("X");
        let y = Variable::new("Y");
        let f = Formula::forall(x.clone(), p(vec![Term::var("X"), Term::var("Y")]));
        let free = f.free_variables();
        assert!(free.contains(&y));
        assert!(!free.contains(&x));
        assert!(!f.is_closed());
    }

    #[test]
    fn test_universal_closure() {
        let f = p(vec![Term::var("Y"), Term::var("X")]).universal_closure();
        assert!(f.is_closed());
        match f {
            Formula::ForAll(v, inner) => {
                assert_eq!(v, Variable::new("X"));
                assert!(matches!(*inner, Formula::ForAll(ref w, _) if *w == Variable::new("Y")));
            }
            other => panic!("expected quantifier, got {}", other),
        }
    }

    #[test]
    fn test_conjunction() {
        assert!(Formula::conjunction(Vec::new()).is_none());
        let c = Formula::conjunction(vec![p(vec![]), p(vec![]), p(vec![])]);
        assert!(matches!(c, Some(Formula::And(_, _))));
    }
}
