//! Terms in first-order logic

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Uniqueness tag attached to a variable.
///
/// Scope 0 is reserved for variables as written in the input. Every variable
/// produced by a [`VariableFactory`](crate::logic::VariableFactory) carries a
/// strictly larger scope, so a later-introduced variable compares greater.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ScopeId(pub u64);

impl ScopeId {
    /// Scope of variables written by the caller
    pub const INPUT: ScopeId = ScopeId(0);

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A variable in first-order logic
///
/// Two variables are identical only if both name and scope match. The derived
/// ordering compares the scope first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub scope: ScopeId,
    pub name: String,
}

impl Variable {
    /// Create an input variable (scope 0)
    pub fn new(name: impl Into<String>) -> Self {
        Variable {
            scope: ScopeId::INPUT,
            name: name.into(),
        }
    }

    /// Create a variable with an explicit scope
    pub fn scoped(name: impl Into<String>, scope: ScopeId) -> Self {
        Variable {
            scope,
            name: name.into(),
        }
    }
}

/// A constant symbol
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A function symbol with arity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: usize,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionSymbol {
            name: name.into(),
            arity,
        }
    }
}

/// A term in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Function(FunctionSymbol, Vec<Term>),
}

impl Term {
    /// Input variable term
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(Constant::new(name))
    }

    /// Function application; the symbol's arity is taken from `args`.
    ///
    /// With no arguments this is the constant of that name, so `a()` and `a`
    /// are one term.
    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Self {
        if args.is_empty() {
            Term::constant(name)
        } else {
            Term::Function(FunctionSymbol::new(name, args.len()), args)
        }
    }

    /// Rewrite every nullary application `a()` below this term to the
    /// constant `a`, in place
    pub fn canonicalize(&mut self) {
        match self {
            Term::Function(f, args) if args.is_empty() => {
                let name = std::mem::take(&mut f.name);
                *self = Term::constant(name);
            }
            Term::Function(_, args) => args.iter_mut().for_each(Term::canonicalize),
            Term::Variable(_) | Term::Constant(_) => {}
        }
    }

    /// Is this the constant `name`, written either as `a` or as `a()`?
    pub fn is_constant_named(&self, name: &str) -> bool {
        match self {
            Term::Constant(c) => c.name == name,
            Term::Function(f, args) => args.is_empty() && f.name == name,
            Term::Variable(_) => false,
        }
    }

    /// Variables of this term in order of first appearance, without repeats
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.push_variables(&mut seen, &mut out);
        out
    }

    pub(crate) fn push_variables(&self, seen: &mut HashSet<Variable>, out: &mut Vec<Variable>) {
        match self {
            Term::Variable(v) => {
                if seen.insert(v.clone()) {
                    out.push(v.clone());
                }
            }
            Term::Constant(_) => {}
            Term::Function(_, args) => {
                for arg in args {
                    arg.push_variables(seen, out);
                }
            }
        }
    }

    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) => {}
            Term::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Occurs check: does `var` appear anywhere inside this term?
    pub fn contains_variable(&self, var: &Variable) -> bool {
        match self {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Function(_, args) => args.iter().any(|arg| arg.contains_variable(var)),
        }
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) => true,
            Term::Function(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Number of symbol occurrences (variables included)
    pub fn symbol_count(&self) -> usize {
        match self {
            Term::Variable(_) | Term::Constant(_) => 1,
            Term::Function(_, args) => 1 + args.iter().map(Term::symbol_count).sum::<usize>(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope == ScopeId::INPUT {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}_{}", self.name, self.scope.0)
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Function(func, args) => {
                write!(f, "{}(", func.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
