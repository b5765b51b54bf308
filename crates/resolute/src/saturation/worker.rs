//! Evaluation of clause pairs, optionally spread over worker threads

use crate::inference::{resolution, InferenceResult};
use crate::logic::core::clause::{Clause, ClauseId};
use crate::logic::fresh::VariableFactory;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

/// Conditions under which workers stop between two pair evaluations
pub struct StopSignal<'a> {
    /// Raised by the first worker that derives the empty clause
    pub done: AtomicBool,
    /// Raised from outside the prover
    pub cancel: &'a AtomicBool,
    pub deadline: Option<Instant>,
}

impl<'a> StopSignal<'a> {
    pub fn new(cancel: &'a AtomicBool, deadline: Option<Instant>) -> Self {
        StopSignal {
            done: AtomicBool::new(false),
            cancel,
            deadline,
        }
    }

    pub fn should_stop(&self) -> bool {
        self.done.load(Ordering::Acquire)
            || self.cancel.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Resolvents of the given clause with one partner
#[derive(Debug, Clone)]
pub struct PairOutcome {
    pub partner: ClauseId,
    pub inferences: Vec<InferenceResult>,
}

/// Outcomes in partner order, and whether evaluation stopped early
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub outcomes: Vec<PairOutcome>,
    pub interrupted: bool,
}

/// Resolve `given` against every partner.
///
/// With more than one worker the partners are split into contiguous chunks,
/// one scoped thread per chunk. Workers only read clauses and draw fresh
/// scopes from the shared factory; the caller merges the outcomes, which come
/// back in partner order whatever the thread count.
pub fn evaluate_pairs(
    given_id: ClauseId,
    given: &Clause,
    partners: &[(ClauseId, &Clause)],
    variables: &VariableFactory,
    workers: usize,
    stop: &StopSignal<'_>,
) -> Evaluation {
    if workers <= 1 || partners.len() <= 1 {
        return evaluate_chunk(given_id, given, partners, variables, stop);
    }

    let chunk_size = partners.len().div_ceil(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = partners
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || evaluate_chunk(given_id, given, chunk, variables, stop))
            })
            .collect();

        let mut merged = Evaluation::default();
        for handle in handles {
            match handle.join() {
                Ok(part) => {
                    merged.interrupted |= part.interrupted;
                    merged.outcomes.extend(part.outcomes);
                }
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        merged
    })
}

fn evaluate_chunk(
    given_id: ClauseId,
    given: &Clause,
    partners: &[(ClauseId, &Clause)],
    variables: &VariableFactory,
    stop: &StopSignal<'_>,
) -> Evaluation {
    let mut evaluation = Evaluation::default();
    for &(partner_id, partner) in partners {
        if stop.should_stop() {
            evaluation.interrupted = true;
            break;
        }
        let inferences = resolution(given, partner, given_id, partner_id, variables);
        if inferences.iter().any(|r| r.conclusion.is_empty()) {
            stop.done.store(true, Ordering::Release);
        }
        evaluation.outcomes.push(PairOutcome {
            partner: partner_id,
            inferences,
        });
    }
    evaluation
}
