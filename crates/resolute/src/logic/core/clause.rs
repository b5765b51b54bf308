//! Clauses and their canonical keys

use super::literal::Literal;
use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Identity of a clause in the clause store
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClauseId(pub usize);

impl ClauseId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a clause in the proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClauseRole {
    /// Clause from the knowledge base
    #[default]
    Axiom,
    /// Clause from the negated query
    NegatedConjecture,
    /// Derived clause (from inference)
    Derived,
}

impl ClauseRole {
    /// Check if this is a goal clause (negated conjecture)
    pub fn is_goal(&self) -> bool {
        matches!(self, ClauseRole::NegatedConjecture)
    }
}

/// A clause (disjunction of literals with set semantics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub literals: Vec<Literal>,
    pub id: Option<ClauseId>,
    pub role: ClauseRole,
    /// Iteration in which the clause was created, 0 for input clauses
    pub age: usize,
}

impl Clause {
    /// Create a new clause from literals; duplicates collapse, first occurrence wins
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause {
            literals: dedup_literals(literals),
            id: None,
            role: ClauseRole::default(),
            age: 0,
        }
    }

    /// Create a new clause with a specific role
    pub fn with_role(literals: Vec<Literal>, role: ClauseRole) -> Self {
        Clause {
            role,
            ..Clause::new(literals)
        }
    }

    /// Create a derived clause with age
    pub fn derived(literals: Vec<Literal>, age: usize) -> Self {
        Clause {
            role: ClauseRole::Derived,
            age,
            ..Clause::new(literals)
        }
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Syntactic tautology: some literal appears together with its exact complement
    pub fn is_tautology(&self) -> bool {
        for i in 0..self.literals.len() {
            for j in (i + 1)..self.literals.len() {
                if self.literals[i].is_complement_of(&self.literals[j]) {
                    return true;
                }
            }
        }
        false
    }

    /// Variables in order of first appearance
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for lit in &self.literals {
            for arg in &lit.atom.args {
                arg.push_variables(&mut seen, &mut out);
            }
        }
        out
    }

    /// Count the total number of symbols in this clause
    pub fn symbol_count(&self) -> usize {
        self.literals.iter().map(Literal::symbol_count).sum()
    }

    /// Canonical key, equal for clauses that differ only by variable renaming
    /// and literal order
    pub fn key(&self) -> ClauseKey {
        ClauseKey::from_clause(self)
    }
}

fn dedup_literals(mut literals: Vec<Literal>) -> Vec<Literal> {
    for lit in &mut literals {
        lit.atom.args.iter_mut().for_each(Term::canonicalize);
    }
    let mut seen = HashSet::new();
    literals
        .into_iter()
        .filter(|lit| seen.insert(lit.clone()))
        .collect()
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}

// =============================================================================
// ClauseKey - canonical form for deduplication up to renaming
// =============================================================================

/// Upper bound on literal orderings tried when equal-skeleton literals tie
const MAX_CANONICAL_ORDERINGS: usize = 720;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum TermKey {
    /// Variable numbered by first appearance
    Variable(u32),
    Constant(String),
    Function(String, Vec<TermKey>),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct LiteralKey {
    polarity: bool,
    predicate: String,
    arity: usize,
    args: Vec<TermKey>,
}

/// Structural key of a clause with variables renamed in order of first
/// appearance.
///
/// Literals are first ordered by their variable-blind skeleton. Literals whose
/// skeletons tie are tried in every relative order (up to a bound) and the
/// smallest resulting key is kept, so two variants of a clause get the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey {
    literals: Vec<LiteralKey>,
}

impl ClauseKey {
    pub fn from_clause(clause: &Clause) -> Self {
        let mut order: Vec<(LiteralKey, usize)> = clause
            .literals
            .iter()
            .enumerate()
            .map(|(i, lit)| (skeleton(lit), i))
            .collect();
        order.sort();

        // Group literal positions whose skeletons are equal
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, (sk, idx)) in order.iter().enumerate() {
            if i > 0 && order[i - 1].0 == *sk {
                if let Some(group) = groups.last_mut() {
                    group.push(*idx);
                    continue;
                }
            }
            groups.push(vec![*idx]);
        }

        let orderings: usize = groups
            .iter()
            .map(|g| factorial(g.len()))
            .fold(1usize, |acc, n| acc.saturating_mul(n));

        if orderings <= MAX_CANONICAL_ORDERINGS {
            let mut best: Option<Vec<LiteralKey>> = None;
            let mut current = Vec::with_capacity(clause.literals.len());
            search_orderings(clause, &groups, 0, &mut current, &mut best);
            if let Some(literals) = best {
                return ClauseKey { literals };
            }
        }

        let flat: Vec<usize> = groups.into_iter().flatten().collect();
        ClauseKey {
            literals: numbered_keys(clause, &flat),
        }
    }
}

fn factorial(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
}

fn search_orderings(
    clause: &Clause,
    groups: &[Vec<usize>],
    group_idx: usize,
    current: &mut Vec<usize>,
    best: &mut Option<Vec<LiteralKey>>,
) {
    if group_idx == groups.len() {
        let keys = numbered_keys(clause, current);
        if best.as_ref().is_none_or(|b| keys < *b) {
            *best = Some(keys);
        }
        return;
    }
    let mut group = groups[group_idx].clone();
    permute(&mut group, 0, &mut |perm: &[usize]| {
        let base = current.len();
        current.extend_from_slice(perm);
        search_orderings(clause, groups, group_idx + 1, current, best);
        current.truncate(base);
    });
}

fn permute(items: &mut [usize], k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

fn skeleton(lit: &Literal) -> LiteralKey {
    fn term(t: &Term) -> TermKey {
        match t {
            Term::Variable(_) => TermKey::Variable(0),
            Term::Constant(c) => TermKey::Constant(c.name.clone()),
            Term::Function(f, args) => {
                TermKey::Function(f.name.clone(), args.iter().map(term).collect())
            }
        }
    }
    LiteralKey {
        polarity: lit.polarity,
        predicate: lit.atom.predicate.name.clone(),
        arity: lit.atom.predicate.arity,
        args: lit.atom.args.iter().map(term).collect(),
    }
}

fn numbered_keys(clause: &Clause, order: &[usize]) -> Vec<LiteralKey> {
    fn term(t: &Term, numbering: &mut HashMap<Variable, u32>) -> TermKey {
        match t {
            Term::Variable(v) => {
                let next = numbering.len() as u32;
                TermKey::Variable(*numbering.entry(v.clone()).or_insert(next))
            }
            Term::Constant(c) => TermKey::Constant(c.name.clone()),
            Term::Function(f, args) => {
                TermKey::Function(f.name.clone(), args.iter().map(|a| term(a, numbering)).collect())
            }
        }
    }

    let mut numbering = HashMap::new();
    order
        .iter()
        .map(|&i| {
            let lit = &clause.literals[i];
            LiteralKey {
                polarity: lit.polarity,
                predicate: lit.atom.predicate.name.clone(),
                arity: lit.atom.predicate.arity,
                args: lit.atom.args.iter().map(|t| term(t, &mut numbering)).collect(),
            }
        })
        .collect()
}
