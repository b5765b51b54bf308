//! One-call entry point: clausify a problem and run the saturation loop.

use crate::cnf::clausify_problem;
use crate::config::ProverConfig;
use crate::error::Result;
use crate::logic::core::formula::Formula;
use crate::logic::fresh::VariableFactory;
use crate::saturation::{ProofResult, Prover};
use std::sync::Arc;

/// Build a prover for `kb ∪ {¬query}` without running it.
///
/// The returned prover can be driven with `step()` or cancelled through its
/// `cancel` flag.
pub fn prover_for(kb: &[Formula], query: &Formula, config: ProverConfig) -> Result<Prover> {
    let variables = Arc::new(VariableFactory::new());
    let clauses = clausify_problem(kb, query, &variables)?;
    Ok(Prover::new(clauses, config, variables))
}

/// Try to refute `kb ∪ {¬query}`.
///
/// Malformed input is an error; running out of resources is reported through
/// the outcome of the returned result.
pub fn prove(kb: &[Formula], query: &Formula, config: ProverConfig) -> Result<ProofResult> {
    let mut prover = prover_for(kb, query, config)?;
    Ok(prover.prove())
}
