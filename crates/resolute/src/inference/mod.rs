//! Inference rules for resolution-based refutation

pub mod common;
pub mod derivation;
pub mod factoring;
pub mod resolution;

pub use common::InferenceResult;
pub use derivation::{Derivation, Rule};
pub use factoring::factoring;
pub use resolution::{resolution, resolve};
