//! Quantifier-free stages: dropping universals, distributing disjunctions and
//! splitting into clauses

use super::normal_form::Nnf;
use crate::error::{Error, Result};
use crate::logic::core::clause::{Clause, ClauseRole};
use crate::logic::core::literal::Literal;

/// Quantifier-free formula in negation normal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matrix {
    Lit(Literal),
    And(Box<Matrix>, Box<Matrix>),
    Or(Box<Matrix>, Box<Matrix>),
}

/// Stage 5: drop universal quantifiers; the variables stay free and are read
/// as universally quantified from here on.
///
/// Existentials must have been removed by Skolemization.
pub fn drop_universals(nnf: Nnf) -> Result<Matrix> {
    Ok(match nnf {
        Nnf::Lit(lit) => Matrix::Lit(lit),
        Nnf::And(a, b) => Matrix::And(
            Box::new(drop_universals(*a)?),
            Box::new(drop_universals(*b)?),
        ),
        Nnf::Or(a, b) => Matrix::Or(
            Box::new(drop_universals(*a)?),
            Box::new(drop_universals(*b)?),
        ),
        Nnf::ForAll(_, body) => drop_universals(*body)?,
        Nnf::Exists(v, _) => {
            return Err(Error::Normalization {
                reason: format!("existential over {} survived Skolemization", v),
            })
        }
    })
}

/// Stage 6: distribute Or over And until no Or has an And below it
pub fn distribute(matrix: Matrix) -> Matrix {
    match matrix {
        Matrix::Lit(lit) => Matrix::Lit(lit),
        Matrix::And(a, b) => Matrix::And(Box::new(distribute(*a)), Box::new(distribute(*b))),
        Matrix::Or(a, b) => distribute_or(distribute(*a), distribute(*b)),
    }
}

/// Disjunction of two already distributed matrices
fn distribute_or(a: Matrix, b: Matrix) -> Matrix {
    match (a, b) {
        // (A1 & A2) | B = (A1 | B) & (A2 | B)
        (Matrix::And(a1, a2), b) => Matrix::And(
            Box::new(distribute_or(*a1, b.clone())),
            Box::new(distribute_or(*a2, b)),
        ),
        // A | (B1 & B2) = (A | B1) & (A | B2)
        (a, Matrix::And(b1, b2)) => Matrix::And(
            Box::new(distribute_or(a.clone(), *b1)),
            Box::new(distribute_or(a, *b2)),
        ),
        (a, b) => Matrix::Or(Box::new(a), Box::new(b)),
    }
}

/// Stage 7: split a distributed matrix into clauses.
///
/// Duplicate literals collapse inside each clause, and syntactic tautologies
/// are dropped since they can never take part in a refutation.
pub fn split_clauses(matrix: Matrix, role: ClauseRole) -> Vec<Clause> {
    let mut conjuncts = Vec::new();
    collect_conjuncts(matrix, &mut conjuncts);

    conjuncts
        .into_iter()
        .map(|disjunction| {
            let mut literals = Vec::new();
            collect_literals(disjunction, &mut literals);
            Clause::with_role(literals, role)
        })
        .filter(|clause| !clause.is_tautology())
        .collect()
}

fn collect_conjuncts(matrix: Matrix, out: &mut Vec<Matrix>) {
    match matrix {
        Matrix::And(a, b) => {
            collect_conjuncts(*a, out);
            collect_conjuncts(*b, out);
        }
        other => out.push(other),
    }
}

fn collect_literals(matrix: Matrix, out: &mut Vec<Literal>) {
    match matrix {
        Matrix::Lit(lit) => out.push(lit),
        // Only reachable before distribution; flattening keeps the literals
        Matrix::And(a, b) | Matrix::Or(a, b) => {
            collect_literals(*a, out);
            collect_literals(*b, out);
        }
    }
}
