//! Index of clause pairs that have already been resolved

use crate::logic::core::clause::ClauseId;
use std::collections::HashSet;

/// Unordered clause pairs resolved so far; each pair is resolved at most once.
///
/// Only the saturation loop writes to the index. Workers receive the pairs
/// it has already claimed.
#[derive(Debug, Clone, Default)]
pub struct ProcessedPairs {
    seen: HashSet<(ClauseId, ClauseId)>,
}

impl ProcessedPairs {
    pub fn new() -> Self {
        ProcessedPairs::default()
    }

    fn normalize(a: ClauseId, b: ClauseId) -> (ClauseId, ClauseId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Claim a pair; false if it was claimed before
    pub fn insert(&mut self, a: ClauseId, b: ClauseId) -> bool {
        self.seen.insert(Self::normalize(a, b))
    }

    pub fn contains(&self, a: ClauseId, b: ClauseId) -> bool {
        self.seen.contains(&Self::normalize(a, b))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
