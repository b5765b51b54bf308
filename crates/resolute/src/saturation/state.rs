//! Given-clause saturation loop.
//!
//! The `Prover` owns the clause store, the processed and unprocessed sets and
//! the processed-pairs index. Each `step()` selects the oldest unprocessed
//! clause, factors it and resolves it against every processed clause
//! (itself included). Selection by age is fair, so every clause is eventually
//! selected and the search stays refutation complete.
//!
//! Use `prove()` to run to completion, or `step()` for incremental execution.

use super::pairs::ProcessedPairs;
use super::result::{Outcome, ProofResult, ProofStep, ProverStats, ResourceLimit};
use super::store::{ClauseStore, Insertion};
use super::worker::{evaluate_pairs, StopSignal};
use crate::config::ProverConfig;
use crate::inference::{factoring, resolution, Derivation, InferenceResult, Rule};
use crate::logic::core::clause::{Clause, ClauseId};
use crate::logic::fresh::VariableFactory;
use crate::simplifying::{find_subsumed, find_subsumer, is_tautology};
use indexmap::IndexSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};

/// Observable state of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProverStatus {
    Running,
    Proved,
    NotProved,
    ResourceExceeded(ResourceLimit),
}

impl From<Outcome> for ProverStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Proved => ProverStatus::Proved,
            Outcome::NotProved => ProverStatus::NotProved,
            Outcome::ResourceExceeded(limit) => ProverStatus::ResourceExceeded(limit),
        }
    }
}

/// A proof step that does not follow from its parents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("no empty clause has been derived")]
    NoProof,

    #[error("clause {clause} refers to unknown or later premise {premise}")]
    InvalidPremise { clause: ClauseId, premise: ClauseId },

    #[error("clause {clause} is not a {rule} conclusion of its premises")]
    InvalidConclusion { clause: ClauseId, rule: Rule },
}

/// Per-problem saturation engine.
pub struct Prover {
    /// Prover configuration (limits, timeouts, worker count)
    pub config: ProverConfig,
    store: ClauseStore,
    /// Clauses already selected as given clause
    processed: IndexSet<ClauseId>,
    /// Clauses waiting for selection, oldest first
    unprocessed: IndexSet<ClauseId>,
    pairs: ProcessedPairs,
    variables: Arc<VariableFactory>,
    stats: ProverStats,
    iterations: usize,
    empty_clause: Option<ClauseId>,
    result: Option<ProofResult>,
    start_time: Option<Instant>,
    /// Set to `true` from any thread to stop the search
    pub cancel: Arc<AtomicBool>,
}

impl Prover {
    /// Create a prover over `initial_clauses`.
    ///
    /// The clauses must not share variables with each other (clausification
    /// with the same `variables` factory guarantees this). Inputs go through
    /// the same redundancy checks as derived clauses.
    pub fn new(
        initial_clauses: Vec<Clause>,
        config: ProverConfig,
        variables: Arc<VariableFactory>,
    ) -> Self {
        let mut prover = Prover {
            config,
            store: ClauseStore::new(),
            processed: IndexSet::new(),
            unprocessed: IndexSet::new(),
            pairs: ProcessedPairs::new(),
            variables,
            stats: ProverStats::default(),
            iterations: 0,
            empty_clause: None,
            result: None,
            start_time: None,
            cancel: Arc::new(AtomicBool::new(false)),
        };
        prover.stats.input_clauses = initial_clauses.len();
        for clause in initial_clauses {
            prover.add_clause(clause, Derivation::input());
            if prover.empty_clause.is_some() {
                break;
            }
        }
        prover
    }

    /// Share an externally owned cancellation flag
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run saturation to completion.
    pub fn prove(&mut self) -> ProofResult {
        debug!(
            clauses = self.store.len(),
            workers = self.config.workers,
            "starting saturation"
        );
        loop {
            if let Some(result) = self.step() {
                return result;
            }
        }
    }

    pub fn status(&self) -> ProverStatus {
        match &self.result {
            Some(result) => result.outcome.into(),
            None => ProverStatus::Running,
        }
    }

    pub fn store(&self) -> &ClauseStore {
        &self.store
    }

    pub fn stats(&self) -> &ProverStats {
        &self.stats
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Clauses waiting for selection, oldest first
    pub fn unprocessed(&self) -> impl Iterator<Item = ClauseId> + '_ {
        self.unprocessed.iter().copied()
    }

    pub fn processed(&self) -> impl Iterator<Item = ClauseId> + '_ {
        self.processed.iter().copied()
    }

    /// Execute one iteration of the saturation loop.
    ///
    /// Returns `Some(result)` once the search is over (and the same result on
    /// every later call), `None` to continue.
    pub fn step(&mut self) -> Option<ProofResult> {
        if let Some(result) = &self.result {
            return Some(result.clone());
        }
        let start = *self.start_time.get_or_insert_with(Instant::now);

        if self.empty_clause.is_some() {
            return Some(self.finish(Outcome::Proved));
        }
        if self.unprocessed.is_empty() {
            // Saturation only counts when no derived clause was dropped for size
            let outcome = if self.stats.oversized_deleted > 0 {
                Outcome::ResourceExceeded(ResourceLimit::ClauseSize)
            } else {
                Outcome::NotProved
            };
            return Some(self.finish(outcome));
        }
        if let Some(limit) = self.exceeded_limit(start) {
            return Some(self.finish(Outcome::ResourceExceeded(limit)));
        }

        // === Select given clause (oldest first) ===
        self.iterations += 1;
        let Some(given_id) = self.unprocessed.shift_remove_index(0) else {
            return Some(self.finish(Outcome::NotProved));
        };
        self.processed.insert(given_id);
        let Some(given) = self.store.get(given_id).cloned() else {
            return None;
        };
        debug!(iteration = self.iterations, given = %given, "selected given clause");

        // === Generate inferences ===
        let mut inferences: Vec<InferenceResult> = factoring(&given, given_id);
        self.stats.factors_generated += inferences.len();

        let partner_ids: Vec<ClauseId> = self
            .processed
            .iter()
            .copied()
            .filter(|&p| self.pairs.insert(given_id, p))
            .collect();
        self.stats.pairs_resolved += partner_ids.len();

        let deadline = self.deadline(start);
        let stop = StopSignal::new(&self.cancel, deadline);
        let evaluation = {
            let partners: Vec<(ClauseId, &Clause)> = partner_ids
                .iter()
                .filter_map(|&id| self.store.get(id).map(|c| (id, c)))
                .collect();
            evaluate_pairs(
                given_id,
                &given,
                &partners,
                &self.variables,
                self.config.workers,
                &stop,
            )
        };
        for outcome in evaluation.outcomes {
            self.stats.resolvents_generated += outcome.inferences.len();
            inferences.extend(outcome.inferences);
        }

        // === Add new clauses ===
        for inference in inferences {
            let mut conclusion = inference.conclusion;
            conclusion.age = self.iterations;
            self.add_clause(conclusion, inference.derivation);
            if self.empty_clause.is_some() {
                return Some(self.finish(Outcome::Proved));
            }
        }

        if evaluation.interrupted {
            let limit = if self.cancel.load(Ordering::Relaxed) {
                ResourceLimit::Cancelled
            } else {
                ResourceLimit::Time
            };
            return Some(self.finish(Outcome::ResourceExceeded(limit)));
        }

        None
    }

    /// Re-derive every step of the refutation from its parents.
    ///
    /// A derived clause is accepted when some conclusion of its rule applied
    /// to its parents is a variant of it.
    pub fn verify_proof(&self) -> Result<(), VerificationError> {
        let empty = self.empty_clause.ok_or(VerificationError::NoProof)?;

        for id in self.store.ancestors(empty) {
            let (Some(clause), Some(derivation)) = (self.store.get(id), self.store.derivation(id))
            else {
                return Err(VerificationError::InvalidPremise {
                    clause: empty,
                    premise: id,
                });
            };
            for &premise in &derivation.premises {
                if premise >= id || self.store.get(premise).is_none() {
                    return Err(VerificationError::InvalidPremise {
                        clause: id,
                        premise,
                    });
                }
            }

            let premises = derivation.premises.as_slice();
            let candidates: Vec<InferenceResult> = match (derivation.rule, premises) {
                (Rule::Input, []) => continue,
                (Rule::Resolution, &[left, right]) => {
                    match (self.store.get(left), self.store.get(right)) {
                        (Some(l), Some(r)) => resolution(l, r, left, right, &self.variables),
                        _ => Vec::new(),
                    }
                }
                (Rule::Factoring, &[parent]) => match self.store.get(parent) {
                    Some(p) => factoring(p, parent),
                    None => Vec::new(),
                },
                _ => Vec::new(),
            };

            let key = clause.key();
            if !candidates.iter().any(|c| c.conclusion.key() == key) {
                return Err(VerificationError::InvalidConclusion {
                    clause: id,
                    rule: derivation.rule,
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Private helper methods
    // =========================================================================

    fn deadline(&self, start: Instant) -> Option<Instant> {
        if self.config.timeout == Duration::ZERO {
            None
        } else {
            Some(start + self.config.timeout)
        }
    }

    /// First budget that is used up, checked in a fixed order
    fn exceeded_limit(&self, start: Instant) -> Option<ResourceLimit> {
        if self.cancel.load(Ordering::Relaxed) {
            return Some(ResourceLimit::Cancelled);
        }
        if self.config.max_iterations > 0 && self.iterations >= self.config.max_iterations {
            return Some(ResourceLimit::Iterations);
        }
        if self.config.max_clauses > 0 && self.store.len() >= self.config.max_clauses {
            return Some(ResourceLimit::Clauses);
        }
        if self.config.timeout > Duration::ZERO && start.elapsed() >= self.config.timeout {
            return Some(ResourceLimit::Time);
        }
        None
    }

    /// Run the redundancy checks on a clause and store it if it survives.
    fn add_clause(&mut self, clause: Clause, derivation: Derivation) -> Option<ClauseId> {
        if is_tautology(&clause) {
            self.stats.tautologies_deleted += 1;
            return None;
        }
        if derivation.rule != Rule::Input
            && self.config.max_clause_size > 0
            && clause.len() > self.config.max_clause_size
        {
            self.stats.oversized_deleted += 1;
            return None;
        }
        if self.store.find_variant(&clause).is_some() {
            self.stats.duplicates_deleted += 1;
            return None;
        }

        // Forward subsumption against every live clause
        let live = self.processed.iter().chain(self.unprocessed.iter());
        let subsumer = find_subsumer(
            &clause,
            live.filter_map(|&id| self.store.get(id).map(|c| (id, c))),
        );
        if let Some(by) = subsumer {
            trace!(clause = %clause, subsumer = %by, "forward subsumed");
            self.stats.forward_subsumed += 1;
            return None;
        }

        let id = match self.store.insert(clause, derivation) {
            Insertion::Added(id) => id,
            Insertion::Duplicate(_) => {
                self.stats.duplicates_deleted += 1;
                return None;
            }
        };

        // Backward subsumption: drop waiting clauses the new one makes redundant
        if let Some(clause) = self.store.get(id) {
            let subsumed = find_subsumed(
                clause,
                self.unprocessed
                    .iter()
                    .filter_map(|&u| self.store.get(u).map(|c| (u, c))),
            );
            for victim in subsumed {
                trace!(clause = %victim, by = %id, "backward subsumed");
                self.unprocessed.shift_remove(&victim);
                self.stats.backward_subsumed += 1;
            }
            trace!(id = %id, clause = %clause, "kept clause");
            if clause.is_empty() {
                self.empty_clause = Some(id);
            }
        }

        self.unprocessed.insert(id);
        Some(id)
    }

    fn finish(&mut self, outcome: Outcome) -> ProofResult {
        let mut trace = Vec::new();
        let mut premises = Vec::new();
        if let (Outcome::Proved, Some(empty)) = (outcome, self.empty_clause) {
            for id in self.store.ancestors(empty) {
                let (Some(clause), Some(derivation)) =
                    (self.store.get(id), self.store.derivation(id))
                else {
                    continue;
                };
                let step = ProofStep {
                    clause_id: id,
                    rule: derivation.rule,
                    parents: derivation.premises.clone(),
                    conclusion: clause.clone(),
                };
                if derivation.rule == Rule::Input {
                    premises.push(step);
                } else {
                    trace.push(step);
                }
            }
        }

        let result = ProofResult {
            outcome,
            trace,
            premises,
            final_clause_count: self.store.len(),
            iterations_used: self.iterations,
            stats: self.stats.clone(),
        };
        debug!(
            outcome = ?result.outcome,
            iterations = result.iterations_used,
            clauses = result.final_clause_count,
            "saturation finished"
        );
        self.result = Some(result.clone());
        result
    }
}
