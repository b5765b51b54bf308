//! Binary resolution inference rule

use super::common::{collect_literals_except, InferenceResult};
use super::derivation::Derivation;
use crate::logic::core::clause::{Clause, ClauseId};
use crate::logic::fresh::VariableFactory;
use crate::logic::unification::unify_atoms;

/// All binary resolvents of two clauses.
///
/// `clause2` is renamed apart with fresh scopes first, so the two premises
/// never share a variable, even when a clause is resolved against itself.
/// For every complementary pair `L1 ∈ clause1`, `L2 ∈ clause2` whose atoms
/// unify with MGU θ, the resolvent is `(clause1 \ {L1} ∪ clause2 \ {L2})θ`.
/// Tautological resolvents are returned too; the caller decides what to keep.
pub fn resolution(
    clause1: &Clause,
    clause2: &Clause,
    id1: ClauseId,
    id2: ClauseId,
    variables: &VariableFactory,
) -> Vec<InferenceResult> {
    let mut results = Vec::new();

    // Cheap pre-check before paying for a renaming
    let has_candidate = clause1.literals.iter().any(|l1| {
        clause2
            .literals
            .iter()
            .any(|l2| l1.polarity != l2.polarity && l1.atom.predicate == l2.atom.predicate)
    });
    if !has_candidate {
        return results;
    }

    let renamed2 = variables.rename_clause(clause2);

    for (i, lit1) in clause1.literals.iter().enumerate() {
        for (j, lit2) in renamed2.literals.iter().enumerate() {
            if lit1.polarity == lit2.polarity || lit1.atom.predicate != lit2.atom.predicate {
                continue;
            }
            if let Ok(mgu) = unify_atoms(&lit1.atom, &lit2.atom) {
                let mut literals = collect_literals_except(clause1, &[i], &mgu);
                literals.extend(collect_literals_except(&renamed2, &[j], &mgu));
                results.push(InferenceResult {
                    derivation: Derivation::resolution(id1, id2),
                    conclusion: Clause::derived(literals, 0),
                });
            }
        }
    }

    results
}

/// Resolvent clauses of two clauses, without derivation bookkeeping
pub fn resolve(clause1: &Clause, clause2: &Clause, variables: &VariableFactory) -> Vec<Clause> {
    let id1 = clause1.id.unwrap_or(ClauseId(0));
    let id2 = clause2.id.unwrap_or(ClauseId(0));
    resolution(clause1, clause2, id1, id2, variables)
        .into_iter()
        .map(|r| r.conclusion)
        .collect()
}
