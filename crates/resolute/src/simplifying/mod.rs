//! Redundancy checks applied to new clauses

pub mod subsumption;
pub mod tautology;

pub use subsumption::{find_subsumed, find_subsumer, properly_subsumes, subsumes};
pub use tautology::is_tautology;
