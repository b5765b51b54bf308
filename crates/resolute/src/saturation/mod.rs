//! Saturation-based refutation using the given clause algorithm

mod pairs;
pub mod result;
mod state;
pub mod store;
mod worker;

pub use pairs::ProcessedPairs;
pub use result::{Outcome, ProofResult, ProofStep, ProverStats, ResourceLimit};
pub use state::{Prover, ProverStatus, VerificationError};
pub use store::{ClauseStore, Insertion};
