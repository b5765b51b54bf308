//! First-order logic representation and manipulation
//!
//! This module provides the fundamental types for representing FOL formulas:
//! terms, literals, clauses, formulas, substitutions and fresh-name supply.

pub mod core;
pub mod fresh;
pub mod signature;
pub mod unification;

// Re-export commonly used types
pub use core::clause::{Clause, ClauseId, ClauseKey, ClauseRole};
pub use core::formula::Formula;
pub use core::literal::{Atom, Literal, PredicateSymbol};
pub use core::term::{Constant, FunctionSymbol, ScopeId, Term, Variable};
pub use fresh::VariableFactory;
pub use signature::Signature;
pub use unification::{
    match_literal, match_term, unify, unify_atoms, unify_many, Substitution, UnificationError,
    UnificationResult,
};
