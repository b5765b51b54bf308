//! Fresh variable supply

use crate::logic::core::clause::Clause;
use crate::logic::core::term::{ScopeId, Term, Variable};
use crate::logic::unification::Substitution;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out scope ids that are never reused within a run.
///
/// The counter is atomic, so a factory can be shared (`Arc<VariableFactory>`)
/// between the normalizer and the resolution workers: every call returns a
/// distinct id and no id is skipped.
#[derive(Debug)]
pub struct VariableFactory {
    next: AtomicU64,
}

impl Default for VariableFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableFactory {
    /// Fresh ids start at 1; scope 0 belongs to input variables
    pub fn new() -> Self {
        VariableFactory {
            next: AtomicU64::new(1),
        }
    }

    /// Next unused scope id
    pub fn fresh_scope(&self) -> ScopeId {
        ScopeId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Copy of `var` in a brand new scope
    pub fn fresh_variable(&self, var: &Variable) -> Variable {
        Variable::scoped(var.name.clone(), self.fresh_scope())
    }

    /// Number of scope ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }

    /// Renaming that gives every distinct variable of `clause` its own new
    /// scope; names are kept
    pub fn renaming_for(&self, clause: &Clause) -> Substitution {
        let mut subst = Substitution::new();
        for var in clause.variables() {
            let renamed = self.fresh_variable(&var);
            subst.insert(var, Term::Variable(renamed));
        }
        subst
    }

    /// Variant of `clause` sharing no variable with anything created before
    pub fn rename_clause(&self, clause: &Clause) -> Clause {
        clause.apply_substitution(&self.renaming_for(clause))
    }
}
