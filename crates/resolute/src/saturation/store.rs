//! Append-only clause arena with derivations and a variant index

use crate::inference::Derivation;
use crate::logic::core::clause::{Clause, ClauseId, ClauseKey};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Outcome of offering a clause to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Stored under a new identity
    Added(ClauseId),
    /// A variant was already stored under this identity
    Duplicate(ClauseId),
}

/// Every clause ever kept during a proof attempt.
///
/// Identities are positions in the arena and are never reused; a clause and
/// its derivation are immutable once stored. Clauses that differ only by
/// variable renaming and literal order are stored once.
#[derive(Debug, Clone, Default)]
pub struct ClauseStore {
    clauses: Vec<Clause>,
    derivations: Vec<Derivation>,
    variants: IndexMap<ClauseKey, ClauseId>,
}

impl ClauseStore {
    pub fn new() -> Self {
        ClauseStore::default()
    }

    /// Store `clause` unless a variant is already present
    pub fn insert(&mut self, mut clause: Clause, derivation: Derivation) -> Insertion {
        let key = clause.key();
        if let Some(&existing) = self.variants.get(&key) {
            return Insertion::Duplicate(existing);
        }
        let id = ClauseId(self.clauses.len());
        clause.id = Some(id);
        self.clauses.push(clause);
        self.derivations.push(derivation);
        self.variants.insert(key, id);
        Insertion::Added(id)
    }

    /// Identity of a stored variant of `clause`, if any
    pub fn find_variant(&self, clause: &Clause) -> Option<ClauseId> {
        self.variants.get(&clause.key()).copied()
    }

    pub fn get(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.get(id.index())
    }

    pub fn derivation(&self, id: ClauseId) -> Option<&Derivation> {
        self.derivations.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClauseId, &Clause)> {
        self.clauses.iter().enumerate().map(|(i, c)| (ClauseId(i), c))
    }

    /// Ancestors of `id` (itself included), in increasing identity order.
    ///
    /// Parents always have smaller identities than their children, so this
    /// order is a topological order of the derivation DAG.
    pub fn ancestors(&self, id: ClauseId) -> Vec<ClauseId> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if current.index() >= self.clauses.len() || !seen.insert(current) {
                continue;
            }
            if let Some(derivation) = self.derivations.get(current.index()) {
                stack.extend(derivation.premises.iter().copied());
            }
        }
        seen.into_iter().collect()
    }
}
