//! Conversion from first-order formulas to clauses
//!
//! The pipeline runs in fixed stages: implication elimination, negation normal
//! form, standardizing apart, Skolemization, dropping universals,
//! distribution and clause splitting.

pub mod clausify;
pub mod normal_form;
pub mod skolem;

pub use clausify::{distribute, drop_universals, split_clauses, Matrix};
pub use normal_form::{eliminate_implications, standardize_apart, to_nnf, validate, Nnf};
pub use skolem::{skolemize, SkolemFactory};

use crate::error::Result;
use crate::logic::core::clause::{Clause, ClauseRole};
use crate::logic::core::formula::Formula;
use crate::logic::fresh::VariableFactory;
use crate::logic::signature::Signature;
use tracing::{debug, trace};

/// Converts formulas to clauses, sharing fresh-variable and Skolem supply
/// across every formula it sees.
pub struct CnfConverter<'a> {
    variables: &'a VariableFactory,
    skolems: SkolemFactory,
    signature: Signature,
}

impl<'a> CnfConverter<'a> {
    pub fn new(variables: &'a VariableFactory) -> Self {
        CnfConverter {
            variables,
            skolems: SkolemFactory::new(),
            signature: Signature::new(),
        }
    }

    /// Converter whose Skolem names avoid every symbol of `signature`
    pub fn with_signature(variables: &'a VariableFactory, signature: Signature) -> Self {
        CnfConverter {
            variables,
            skolems: SkolemFactory::new(),
            signature,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Convert one formula. Free variables are read as universally quantified.
    pub fn convert(&mut self, formula: Formula, role: ClauseRole) -> Result<Vec<Clause>> {
        validate(&formula)?;
        self.signature.add_formula(&formula)?;
        self.skolems.check_collisions(&self.signature)?;

        let closed = formula.universal_closure();
        let nnf = to_nnf(eliminate_implications(closed))?;
        let nnf = standardize_apart(nnf, self.variables);
        let nnf = skolemize(nnf, &self.signature, &mut self.skolems)?;
        let matrix = distribute(drop_universals(nnf)?);
        let clauses = split_clauses(matrix, role);

        for clause in &clauses {
            trace!(clause = %clause, "normalized to clause");
        }
        Ok(clauses)
    }
}

/// Clausal form of a single formula
pub fn to_clauses(formula: Formula, variables: &VariableFactory) -> Result<Vec<Clause>> {
    CnfConverter::new(variables).convert(formula, ClauseRole::Axiom)
}

/// Clauses of `kb ∪ {¬query}`, ready for refutation.
///
/// The query is closed universally before it is negated, so an open query
/// asks for every instance. All formulas are checked for arity conflicts up
/// front, and Skolem symbols avoid every symbol of the problem.
pub fn clausify_problem(
    kb: &[Formula],
    query: &Formula,
    variables: &VariableFactory,
) -> Result<Vec<Clause>> {
    for formula in kb.iter().chain(std::iter::once(query)) {
        validate(formula)?;
    }
    let signature = Signature::from_formulas(kb.iter().chain(std::iter::once(query)))?;
    let mut converter = CnfConverter::with_signature(variables, signature);

    let mut clauses = Vec::new();
    for formula in kb {
        clauses.extend(converter.convert(formula.clone(), ClauseRole::Axiom)?);
    }
    let negated = Formula::negation(query.clone().universal_closure());
    let goal = converter.convert(negated, ClauseRole::NegatedConjecture)?;
    debug!(
        axioms = clauses.len(),
        goal = goal.len(),
        "clausified problem"
    );
    clauses.extend(goal);
    Ok(clauses)
}
