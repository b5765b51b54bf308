//! Variable substitutions

use crate::logic::core::clause::Clause;
use crate::logic::core::literal::{Atom, Literal};
use crate::logic::core::term::{Term, Variable};
use indexmap::IndexMap;
use std::fmt;

/// A substitution mapping variables to terms.
///
/// Bindings are applied simultaneously. Insertion order is kept so that
/// substitutions print deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pub map: IndexMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: IndexMap::new(),
        }
    }

    /// Substitution with a single binding
    pub fn singleton(var: Variable, term: Term) -> Self {
        let mut subst = Substitution::new();
        subst.insert(var, term);
        subst
    }

    /// Add a variable -> term mapping as is
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Add a binding while keeping the substitution idempotent.
    ///
    /// The new term is rewritten by the existing bindings, and the new binding is
    /// applied to every existing range term. `var` must not already be bound.
    pub fn insert_normalized(&mut self, var: Variable, term: Term) {
        let term = term.apply_substitution(self);
        let single = Substitution::singleton(var.clone(), term.clone());
        for existing in self.map.values_mut() {
            *existing = existing.apply_substitution(&single);
        }
        self.map.insert(var, term);
    }

    /// Compose two substitutions: `self` first, then `other`
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();

        // Apply other to all terms in self
        for (var, term) in &self.map {
            result.insert(var.clone(), term.apply_substitution(other));
        }

        // Add mappings from other that aren't in self
        for (var, term) in &other.map {
            if !self.map.contains_key(var) {
                result.insert(var.clone(), term.clone());
            }
        }

        result
    }

    /// Get the term for a variable, if bound
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// No bound variable occurs in any range term, so applying twice equals
    /// applying once
    pub fn is_idempotent(&self) -> bool {
        self.map
            .values()
            .all(|term| self.map.keys().all(|var| !term.contains_variable(var)))
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ↦ {}", var, term)?;
        }
        write!(f, "}}")
    }
}

impl Term {
    /// Apply a substitution to this term
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.map.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) => self.clone(),
            Term::Function(f, args) => {
                let new_args = args
                    .iter()
                    .map(|arg| arg.apply_substitution(subst))
                    .collect();
                Term::Function(f.clone(), new_args)
            }
        }
    }
}

impl Atom {
    /// Apply a substitution to this atom
    pub fn apply_substitution(&self, subst: &Substitution) -> Atom {
        Atom {
            predicate: self.predicate.clone(),
            args: self
                .args
                .iter()
                .map(|arg| arg.apply_substitution(subst))
                .collect(),
        }
    }
}

impl Literal {
    /// Apply a substitution to this literal
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        Literal {
            atom: self.atom.apply_substitution(subst),
            polarity: self.polarity,
        }
    }
}

impl Clause {
    /// Apply a substitution to this clause; literals that become equal collapse
    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        Clause {
            id: self.id,
            role: self.role,
            age: self.age,
            ..Clause::new(
                self.literals
                    .iter()
                    .map(|lit| lit.apply_substitution(subst))
                    .collect(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable {
        Variable::new("X")
    }

    fn y() -> Variable {
        Variable::new("Y")
    }

    #[test]
    fn test_apply_is_simultaneous() {
        // {X ↦ Y, Y ↦ a} applied to f(X, Y) gives f(Y, a), not f(a, a)
        let mut subst = Substitution::new();
        subst.insert(x(), Term::var("Y"));
        subst.insert(y(), Term::constant("a"));
        let t = Term::function("f", vec![Term::var("X"), Term::var("Y")]);
        assert_eq!(
            t.apply_substitution(&subst),
            Term::function("f", vec![Term::var("Y"), Term::constant("a")])
        );
    }

    #[test]
    fn test_compose() {
        // σ1 = {X ↦ f(Y)}, σ2 = {Y ↦ a, X ↦ b}
        let s1 = Substitution::singleton(x(), Term::function("f", vec![Term::var("Y")]));
        let mut s2 = Substitution::new();
        s2.insert(y(), Term::constant("a"));
        s2.insert(x(), Term::constant("b"));

        let composed = s1.compose(&s2);
        assert_eq!(
            composed.get(&x()),
            Some(&Term::function("f", vec![Term::constant("a")]))
        );
        assert_eq!(composed.get(&y()), Some(&Term::constant("a")));
        assert_eq!(composed.len(), 2);

        // Applying the composition equals applying σ1 then σ2
        let t = Term::function("g", vec![Term::var("X"), Term::var("Y")]);
        assert_eq!(
            t.apply_substitution(&composed),
            t.apply_substitution(&s1).apply_substitution(&s2)
        );
    }

    #[test]
    fn test_insert_normalized_stays_idempotent() {
        let mut subst = Substitution::new();
        subst.insert_normalized(x(), Term::function("f", vec![Term::var("Y")]));
        subst.insert_normalized(y(), Term::constant("a"));
        assert!(subst.is_idempotent());
        assert_eq!(
            subst.get(&x()),
            Some(&Term::function("f", vec![Term::constant("a")]))
        );
    }

    #[test]
    fn test_apply_to_clause_collapses_duplicates() {
        let clause = Clause::new(vec![
            Literal::positive(Atom::new("P", vec![Term::var("X")])),
            Literal::positive(Atom::new("P", vec![Term::var("Y")])),
        ]);
        let subst = Substitution::singleton(x(), Term::var("Y"));
        assert_eq!(clause.apply_substitution(&subst).len(), 1);
    }
}
