//! Tautology deletion.
//!
//! A clause containing a literal together with its exact complement is true in
//! every interpretation and can never contribute to a refutation.

use crate::logic::core::clause::Clause;

pub fn is_tautology(clause: &Clause) -> bool {
    clause.is_tautology()
}
