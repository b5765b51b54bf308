//! Proof attempt outcomes, traces and statistics

use crate::inference::Rule;
use crate::logic::core::clause::{Clause, ClauseId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which budget ended the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceLimit {
    Iterations,
    Clauses,
    Time,
    Cancelled,
    /// The queue emptied after clauses over `max_clause_size` were dropped
    ClauseSize,
}

impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceLimit::Iterations => "iteration limit",
            ResourceLimit::Clauses => "clause limit",
            ResourceLimit::Time => "time limit",
            ResourceLimit::Cancelled => "cancelled",
            ResourceLimit::ClauseSize => "clause size limit",
        };
        f.write_str(s)
    }
}

/// Terminal outcome of a proof attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The empty clause was derived: the query follows from the knowledge base
    Proved,
    /// The clause set is saturated without a contradiction
    NotProved,
    /// A budget ran out first; nothing is known about the query
    ResourceExceeded(ResourceLimit),
}

/// One clause of a proof with the rule and parents that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub clause_id: ClauseId,
    pub rule: Rule,
    pub parents: Vec<ClauseId>,
    pub conclusion: Clause,
}

/// Counters collected during saturation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverStats {
    pub input_clauses: usize,
    pub pairs_resolved: usize,
    pub resolvents_generated: usize,
    pub factors_generated: usize,
    pub tautologies_deleted: usize,
    pub duplicates_deleted: usize,
    pub oversized_deleted: usize,
    pub forward_subsumed: usize,
    pub backward_subsumed: usize,
}

/// Result of a proof attempt.
///
/// `trace` lists the derived clauses of the refutation in derivation order,
/// ending with the empty clause; `premises` lists the input clauses it uses.
/// Both are empty unless the outcome is [`Outcome::Proved`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofResult {
    pub outcome: Outcome,
    pub trace: Vec<ProofStep>,
    pub premises: Vec<ProofStep>,
    pub final_clause_count: usize,
    pub iterations_used: usize,
    pub stats: ProverStats,
}

impl ProofResult {
    pub fn is_proved(&self) -> bool {
        self.outcome == Outcome::Proved
    }

    /// Identity of the empty clause, when proved
    pub fn empty_clause(&self) -> Option<ClauseId> {
        self.trace
            .last()
            .filter(|step| step.conclusion.is_empty())
            .map(|step| step.clause_id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
