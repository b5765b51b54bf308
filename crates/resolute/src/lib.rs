//! resolute: a refutation prover for first-order logic
//!
//! Formulas are converted to clausal form (`cnf`), then a given-clause
//! saturation loop (`saturation`) applies binary resolution and factoring
//! until the empty clause appears, nothing new can be derived, or a resource
//! budget runs out.

pub mod cnf;
pub mod config;
pub mod error;
pub mod inference;
pub mod logic;
pub mod prover;
pub mod saturation;
pub mod simplifying;

// Re-export commonly used types
pub use logic::{
    Atom, Clause, ClauseId, ClauseKey, ClauseRole, Constant, Formula, FunctionSymbol, Literal,
    PredicateSymbol, ScopeId, Signature, Substitution, Term, Variable, VariableFactory,
};
pub use logic::{unify, unify_atoms, UnificationError, UnificationResult};

pub use cnf::{clausify_problem, to_clauses, CnfConverter};
pub use config::ProverConfig;
pub use error::{Error, Result};
pub use inference::{factoring, resolution, resolve, Derivation, InferenceResult, Rule};
pub use prover::{prove, prover_for};
pub use saturation::{
    ClauseStore, Outcome, ProofResult, ProofStep, Prover, ProverStats, ProverStatus,
    ResourceLimit, VerificationError,
};
pub use simplifying::{is_tautology, subsumes};
