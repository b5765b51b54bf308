//! Clause derivation tracking.
//!
//! Records how each clause was derived (inference rule + premises).

use crate::logic::core::clause::ClauseId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inference rule that produced a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Clause of the clausified input
    Input,
    /// Binary resolution of two parents
    Resolution,
    /// Factoring of a single parent
    Factoring,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Input => "Input",
            Rule::Resolution => "Resolution",
            Rule::Factoring => "Factoring",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a clause was derived: the rule and the ordered parent identities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    pub rule: Rule,
    pub premises: Vec<ClauseId>,
}

impl Derivation {
    /// Create an Input derivation (no premises)
    pub fn input() -> Self {
        Derivation {
            rule: Rule::Input,
            premises: vec![],
        }
    }

    pub fn resolution(left: ClauseId, right: ClauseId) -> Self {
        Derivation {
            rule: Rule::Resolution,
            premises: vec![left, right],
        }
    }

    pub fn factoring(parent: ClauseId) -> Self {
        Derivation {
            rule: Rule::Factoring,
            premises: vec![parent],
        }
    }
}
