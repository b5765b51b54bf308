//! Atoms and literals in first-order logic

use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A predicate symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PredicateSymbol {
    pub name: String,
    pub arity: usize,
}

impl PredicateSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        PredicateSymbol {
            name: name.into(),
            arity,
        }
    }
}

/// An atomic formula (predicate applied to terms)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: PredicateSymbol,
    pub args: Vec<Term>,
}

impl Atom {
    /// Create an atom; the predicate's arity is taken from `args`
    pub fn new(predicate: impl Into<String>, args: Vec<Term>) -> Self {
        Atom {
            predicate: PredicateSymbol::new(predicate, args.len()),
            args,
        }
    }

    /// Collect all variables in this atom
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        for term in &self.args {
            term.collect_variables(vars);
        }
    }
}

/// A literal (positive or negative atom)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub atom: Atom,
    pub polarity: bool, // true = positive, false = negative
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(atom: Atom) -> Self {
        Literal {
            atom,
            polarity: true,
        }
    }

    /// Create a new negative literal
    pub fn negative(atom: Atom) -> Self {
        Literal {
            atom,
            polarity: false,
        }
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Same atom, opposite polarity
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }

    /// Collect all variables in this literal
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        self.atom.collect_variables(vars);
    }

    pub fn symbol_count(&self) -> usize {
        1 + self.atom.args.iter().map(Term::symbol_count).sum::<usize>()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.predicate.name)?;
        if self.args.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.atom)
    }
}
