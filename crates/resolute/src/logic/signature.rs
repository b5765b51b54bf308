//! Symbol table of a problem: predicate and function names with arities

use crate::error::{Error, Result};
use crate::logic::core::formula::Formula;
use crate::logic::core::literal::Atom;
use crate::logic::core::term::Term;
use indexmap::IndexMap;

/// Predicates and functions (constants are functions of arity 0) seen in a
/// set of formulas, in order of first appearance.
///
/// A name may be a predicate and a function at the same time, but within
/// each kind it has exactly one arity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    predicates: IndexMap<String, usize>,
    functions: IndexMap<String, usize>,
}

impl Signature {
    pub fn new() -> Self {
        Signature::default()
    }

    /// Collect the signature of all formulas, rejecting arity conflicts
    pub fn from_formulas<'a>(formulas: impl IntoIterator<Item = &'a Formula>) -> Result<Self> {
        let mut signature = Signature::new();
        for formula in formulas {
            signature.add_formula(formula)?;
        }
        Ok(signature)
    }

    pub fn add_formula(&mut self, formula: &Formula) -> Result<()> {
        match formula {
            Formula::Atom(atom) => self.add_atom(atom),
            Formula::Not(f) | Formula::ForAll(_, f) | Formula::Exists(_, f) => self.add_formula(f),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                self.add_formula(f1)?;
                self.add_formula(f2)
            }
        }
    }

    pub fn add_atom(&mut self, atom: &Atom) -> Result<()> {
        if atom.predicate.arity != atom.args.len() {
            return Err(Error::invalid_formula(format!(
                "predicate {} declared with arity {} but applied to {} arguments",
                atom.predicate.name,
                atom.predicate.arity,
                atom.args.len()
            )));
        }
        self.add_predicate(&atom.predicate.name, atom.predicate.arity)?;
        for arg in &atom.args {
            self.add_term(arg)?;
        }
        Ok(())
    }

    pub fn add_term(&mut self, term: &Term) -> Result<()> {
        match term {
            Term::Variable(_) => Ok(()),
            Term::Constant(c) => self.add_function(&c.name, 0),
            Term::Function(f, args) => {
                if f.arity != args.len() {
                    return Err(Error::invalid_formula(format!(
                        "function {} declared with arity {} but applied to {} arguments",
                        f.name,
                        f.arity,
                        args.len()
                    )));
                }
                self.add_function(&f.name, f.arity)?;
                for arg in args {
                    self.add_term(arg)?;
                }
                Ok(())
            }
        }
    }

    pub fn add_predicate(&mut self, name: &str, arity: usize) -> Result<()> {
        insert_symbol(&mut self.predicates, "predicate", name, arity)
    }

    pub fn add_function(&mut self, name: &str, arity: usize) -> Result<()> {
        insert_symbol(&mut self.functions, "function", name, arity)
    }

    pub fn predicate_arity(&self, name: &str) -> Option<usize> {
        self.predicates.get(name).copied()
    }

    pub fn function_arity(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    /// Is `name` used by any predicate, function or constant?
    pub fn contains_name(&self, name: &str) -> bool {
        self.predicates.contains_key(name) || self.functions.contains_key(name)
    }

    pub fn predicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.predicates.iter().map(|(name, &arity)| (name.as_str(), arity))
    }

    pub fn functions(&self) -> impl Iterator<Item = (&str, usize)> {
        self.functions.iter().map(|(name, &arity)| (name.as_str(), arity))
    }
}

fn insert_symbol(
    table: &mut IndexMap<String, usize>,
    kind: &str,
    name: &str,
    arity: usize,
) -> Result<()> {
    match table.get(name) {
        Some(&known) if known != arity => Err(Error::invalid_formula(format!(
            "{} {} used with arity {} and {}",
            kind, name, known, arity
        ))),
        Some(_) => Ok(()),
        None => {
            table.insert(name.to_string(), arity);
            Ok(())
        }
    }
}
