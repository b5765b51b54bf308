//! Common types and utilities for inference rules

use super::derivation::Derivation;
use crate::logic::core::clause::Clause;
use crate::logic::core::literal::Literal;
use crate::logic::unification::Substitution;

/// Result of an inference rule application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResult {
    pub derivation: Derivation,
    pub conclusion: Clause,
}

/// Literals of `clause` except those at `skip`, with `subst` applied
pub fn collect_literals_except(
    clause: &Clause,
    skip: &[usize],
    subst: &Substitution,
) -> Vec<Literal> {
    clause
        .literals
        .iter()
        .enumerate()
        .filter(|(i, _)| !skip.contains(i))
        .map(|(_, lit)| lit.apply_substitution(subst))
        .collect()
}
