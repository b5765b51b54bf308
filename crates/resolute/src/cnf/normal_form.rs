//! Formula-level stages: validation, implication elimination, negation
//! normal form and standardizing apart

use crate::error::{Error, Result};
use crate::logic::core::formula::Formula;
use crate::logic::core::literal::Literal;
use crate::logic::core::term::{Term, Variable};
use crate::logic::fresh::VariableFactory;
use crate::logic::unification::Substitution;

/// Formula in negation normal form: negation only on atoms, no implications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nnf {
    Lit(Literal),
    And(Box<Nnf>, Box<Nnf>),
    Or(Box<Nnf>, Box<Nnf>),
    ForAll(Variable, Box<Nnf>),
    Exists(Variable, Box<Nnf>),
}

impl Nnf {
    /// Apply a substitution to every literal; binders are left alone
    pub fn apply_substitution(&self, subst: &Substitution) -> Nnf {
        match self {
            Nnf::Lit(lit) => Nnf::Lit(lit.apply_substitution(subst)),
            Nnf::And(a, b) => Nnf::And(
                Box::new(a.apply_substitution(subst)),
                Box::new(b.apply_substitution(subst)),
            ),
            Nnf::Or(a, b) => Nnf::Or(
                Box::new(a.apply_substitution(subst)),
                Box::new(b.apply_substitution(subst)),
            ),
            Nnf::ForAll(v, body) => {
                Nnf::ForAll(v.clone(), Box::new(body.apply_substitution(subst)))
            }
            Nnf::Exists(v, body) => {
                Nnf::Exists(v.clone(), Box::new(body.apply_substitution(subst)))
            }
        }
    }
}

/// Reject formulas where a quantifier binds a variable that an enclosing
/// quantifier already binds.
pub fn validate(formula: &Formula) -> Result<()> {
    fn walk(formula: &Formula, bound: &mut Vec<Variable>) -> Result<()> {
        match formula {
            Formula::Atom(_) => Ok(()),
            Formula::Not(f) => walk(f, bound),
            Formula::And(f1, f2)
            | Formula::Or(f1, f2)
            | Formula::Implies(f1, f2)
            | Formula::Iff(f1, f2) => {
                walk(f1, bound)?;
                walk(f2, bound)
            }
            Formula::ForAll(v, f) | Formula::Exists(v, f) => {
                if bound.contains(v) {
                    return Err(Error::invalid_formula(format!(
                        "quantifier re-binds variable {} already in scope",
                        v
                    )));
                }
                bound.push(v.clone());
                let result = walk(f, bound);
                bound.pop();
                result
            }
        }
    }
    walk(formula, &mut Vec::new())
}

/// Stage 1: rewrite `P → Q` as `¬P ∨ Q` and `P ↔ Q` as `(¬P ∨ Q) ∧ (¬Q ∨ P)`
pub fn eliminate_implications(formula: Formula) -> Formula {
    match formula {
        Formula::Atom(a) => Formula::Atom(a),
        Formula::Not(f) => Formula::negation(eliminate_implications(*f)),
        Formula::And(f1, f2) => {
            Formula::and(eliminate_implications(*f1), eliminate_implications(*f2))
        }
        Formula::Or(f1, f2) => {
            Formula::or(eliminate_implications(*f1), eliminate_implications(*f2))
        }
        Formula::Implies(f1, f2) => Formula::or(
            Formula::negation(eliminate_implications(*f1)),
            eliminate_implications(*f2),
        ),
        Formula::Iff(f1, f2) => {
            let p = eliminate_implications(*f1);
            let q = eliminate_implications(*f2);
            Formula::and(
                Formula::or(Formula::negation(p.clone()), q.clone()),
                Formula::or(Formula::negation(q), p),
            )
        }
        Formula::ForAll(v, f) => Formula::forall(v, eliminate_implications(*f)),
        Formula::Exists(v, f) => Formula::exists(v, eliminate_implications(*f)),
    }
}

/// Stage 2: push negations down to the atoms (De Morgan, quantifier duality,
/// double negation).
///
/// Implications left in the input are expanded on the way, so the result is
/// the same whether or not stage 1 ran first.
pub fn to_nnf(formula: Formula) -> Result<Nnf> {
    enum WorkItem {
        Process(Formula, bool), // (formula, negate)
        CombineAnd,
        CombineOr,
        CombineForAll(Variable),
        CombineExists(Variable),
    }

    let mut stack: Vec<WorkItem> = vec![WorkItem::Process(formula, false)];
    let mut results: Vec<Nnf> = Vec::new();

    while let Some(item) = stack.pop() {
        match item {
            WorkItem::Process(formula, negate) => match (formula, negate) {
                (Formula::Atom(a), false) => results.push(Nnf::Lit(Literal::positive(a))),
                (Formula::Atom(a), true) => results.push(Nnf::Lit(Literal::negative(a))),

                // Double negation - just flip and continue
                (Formula::Not(f), neg) => stack.push(WorkItem::Process(*f, !neg)),

                (Formula::And(f1, f2), false) => {
                    stack.push(WorkItem::CombineAnd);
                    stack.push(WorkItem::Process(*f2, false));
                    stack.push(WorkItem::Process(*f1, false));
                }
                // ~(A & B) = ~A | ~B
                (Formula::And(f1, f2), true) => {
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(*f2, true));
                    stack.push(WorkItem::Process(*f1, true));
                }

                (Formula::Or(f1, f2), false) => {
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(*f2, false));
                    stack.push(WorkItem::Process(*f1, false));
                }
                // ~(A | B) = ~A & ~B
                (Formula::Or(f1, f2), true) => {
                    stack.push(WorkItem::CombineAnd);
                    stack.push(WorkItem::Process(*f2, true));
                    stack.push(WorkItem::Process(*f1, true));
                }

                // A => B = ~A | B
                (Formula::Implies(f1, f2), false) => {
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(*f2, false));
                    stack.push(WorkItem::Process(*f1, true));
                }
                // ~(A => B) = A & ~B
                (Formula::Implies(f1, f2), true) => {
                    stack.push(WorkItem::CombineAnd);
                    stack.push(WorkItem::Process(*f2, true));
                    stack.push(WorkItem::Process(*f1, false));
                }

                // A <=> B = (~A | B) & (~B | A)
                (Formula::Iff(f1, f2), false) => {
                    let a = (*f1).clone();
                    let b = (*f2).clone();
                    stack.push(WorkItem::CombineAnd);
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(a, false));
                    stack.push(WorkItem::Process(b, true));
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(*f2, false));
                    stack.push(WorkItem::Process(*f1, true));
                }
                // ~(A <=> B) = (A | B) & (~A | ~B)
                (Formula::Iff(f1, f2), true) => {
                    let a = (*f1).clone();
                    let b = (*f2).clone();
                    stack.push(WorkItem::CombineAnd);
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(b, true));
                    stack.push(WorkItem::Process(a, true));
                    stack.push(WorkItem::CombineOr);
                    stack.push(WorkItem::Process(*f2, false));
                    stack.push(WorkItem::Process(*f1, false));
                }

                // Quantifier duality
                (Formula::ForAll(v, f), false) | (Formula::Exists(v, f), true) => {
                    stack.push(WorkItem::CombineForAll(v));
                    stack.push(WorkItem::Process(*f, negate));
                }
                (Formula::Exists(v, f), false) | (Formula::ForAll(v, f), true) => {
                    stack.push(WorkItem::CombineExists(v));
                    stack.push(WorkItem::Process(*f, negate));
                }
            },
            WorkItem::CombineAnd => {
                let (left, right) = pop_pair(&mut results)?;
                results.push(Nnf::And(Box::new(left), Box::new(right)));
            }
            WorkItem::CombineOr => {
                let (left, right) = pop_pair(&mut results)?;
                results.push(Nnf::Or(Box::new(left), Box::new(right)));
            }
            WorkItem::CombineForAll(v) => {
                let body = pop_one(&mut results)?;
                results.push(Nnf::ForAll(v, Box::new(body)));
            }
            WorkItem::CombineExists(v) => {
                let body = pop_one(&mut results)?;
                results.push(Nnf::Exists(v, Box::new(body)));
            }
        }
    }

    pop_one(&mut results)
}

fn pop_one(results: &mut Vec<Nnf>) -> Result<Nnf> {
    results.pop().ok_or_else(|| Error::Normalization {
        reason: "negation normal form: operand stack underflow".to_string(),
    })
}

fn pop_pair(results: &mut Vec<Nnf>) -> Result<(Nnf, Nnf)> {
    let right = pop_one(results)?;
    let left = pop_one(results)?;
    Ok((left, right))
}

/// Stage 3: give every quantified variable a fresh scope id from `factory`.
///
/// Free variables are left as they are.
pub fn standardize_apart(nnf: Nnf, factory: &VariableFactory) -> Nnf {
    fn walk(nnf: Nnf, env: &mut Vec<(Variable, Variable)>, factory: &VariableFactory) -> Nnf {
        match nnf {
            Nnf::Lit(lit) => {
                if env.is_empty() {
                    return Nnf::Lit(lit);
                }
                // Innermost binding wins
                let mut subst = Substitution::new();
                for (old, new) in env.iter() {
                    subst.insert(old.clone(), Term::Variable(new.clone()));
                }
                Nnf::Lit(lit.apply_substitution(&subst))
            }
            Nnf::And(a, b) => Nnf::And(
                Box::new(walk(*a, env, factory)),
                Box::new(walk(*b, env, factory)),
            ),
            Nnf::Or(a, b) => Nnf::Or(
                Box::new(walk(*a, env, factory)),
                Box::new(walk(*b, env, factory)),
            ),
            Nnf::ForAll(v, body) => {
                let fresh = factory.fresh_variable(&v);
                env.push((v, fresh.clone()));
                let body = walk(*body, env, factory);
                env.pop();
                Nnf::ForAll(fresh, Box::new(body))
            }
            Nnf::Exists(v, body) => {
                let fresh = factory.fresh_variable(&v);
                env.push((v, fresh.clone()));
                let body = walk(*body, env, factory);
                env.pop();
                Nnf::Exists(fresh, Box::new(body))
            }
        }
    }
    walk(nnf, &mut Vec::new(), factory)
}
