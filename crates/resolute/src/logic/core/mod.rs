//! Core data model: terms, literals, clauses and formulas

pub mod clause;
pub mod formula;
pub mod literal;
pub mod term;
