//! Factoring inference rule

use super::common::{collect_literals_except, InferenceResult};
use super::derivation::Derivation;
use crate::logic::core::clause::{Clause, ClauseId};
use crate::logic::unification::unify_atoms;

/// Factors of a clause: for every pair of same-polarity literals whose atoms
/// unify with MGU θ, the clause with θ applied and the pair merged.
pub fn factoring(clause: &Clause, id: ClauseId) -> Vec<InferenceResult> {
    let mut results = Vec::new();

    for i in 0..clause.literals.len() {
        let lit1 = &clause.literals[i];
        for j in (i + 1)..clause.literals.len() {
            let lit2 = &clause.literals[j];

            // Must have same polarity and predicate
            if lit1.polarity != lit2.polarity || lit1.atom.predicate != lit2.atom.predicate {
                continue;
            }
            if let Ok(mgu) = unify_atoms(&lit1.atom, &lit2.atom) {
                // Literal j becomes equal to literal i under the MGU
                let literals = collect_literals_except(clause, &[j], &mgu);
                results.push(InferenceResult {
                    derivation: Derivation::factoring(id),
                    conclusion: Clause::derived(literals, 0),
                });
            }
        }
    }

    results
}
