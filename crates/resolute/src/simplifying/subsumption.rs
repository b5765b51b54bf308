//! Subsumption checking for redundancy elimination
//!
//! A clause C subsumes clause D if there exists a substitution σ such that
//! Cσ ⊆ D and C has no more literals than D. The size condition keeps a
//! clause from being discarded in favour of a non-factored generalization.
//! Matching tries every target literal for each pattern literal and
//! backtracks on failure, so the check is complete.

use crate::logic::core::clause::{Clause, ClauseId};
use crate::logic::core::literal::Literal;
use crate::logic::unification::{match_literal, Substitution};

/// Does `general` subsume `specific`?
pub fn subsumes(general: &Clause, specific: &Clause) -> bool {
    if general.len() > specific.len() {
        return false;
    }
    // Every predicate/polarity of the subsumer must appear in the target
    let feasible = general.literals.iter().all(|g| {
        specific
            .literals
            .iter()
            .any(|s| s.polarity == g.polarity && s.atom.predicate == g.atom.predicate)
    });
    if !feasible {
        return false;
    }

    // Heaviest literals first: they have the fewest candidate targets
    let mut pattern: Vec<&Literal> = general.literals.iter().collect();
    pattern.sort_by_key(|lit| std::cmp::Reverse(lit.symbol_count()));
    extend_match(&pattern, specific, &Substitution::new())
}

fn extend_match(pattern: &[&Literal], specific: &Clause, subst: &Substitution) -> bool {
    let Some((first, rest)) = pattern.split_first() else {
        return true;
    };
    specific.literals.iter().any(|target| {
        let mut attempt = subst.clone();
        match_literal(first, target, &mut attempt) && extend_match(rest, specific, &attempt)
    })
}

/// `general` subsumes `specific` but not the other way round
pub fn properly_subsumes(general: &Clause, specific: &Clause) -> bool {
    subsumes(general, specific) && !subsumes(specific, general)
}

/// First candidate that subsumes `clause` (forward subsumption)
pub fn find_subsumer<'a>(
    clause: &Clause,
    candidates: impl IntoIterator<Item = (ClauseId, &'a Clause)>,
) -> Option<ClauseId> {
    candidates
        .into_iter()
        .find(|(_, candidate)| subsumes(candidate, clause))
        .map(|(id, _)| id)
}

/// Candidates properly subsumed by `clause` (backward subsumption)
pub fn find_subsumed<'a>(
    clause: &Clause,
    candidates: impl IntoIterator<Item = (ClauseId, &'a Clause)>,
) -> Vec<ClauseId> {
    candidates
        .into_iter()
        .filter(|(_, candidate)| properly_subsumes(clause, candidate))
        .map(|(id, _)| id)
        .collect()
}
