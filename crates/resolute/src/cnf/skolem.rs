//! Skolemization

use super::normal_form::Nnf;
use crate::error::{Error, Result};
use crate::logic::core::term::{Term, Variable};
use crate::logic::signature::Signature;
use crate::logic::unification::Substitution;
use indexmap::IndexSet;

/// Supplies Skolem symbol names `sk0`, `sk1`, ... that avoid every name of
/// the input signature and every Skolem name handed out before.
#[derive(Debug, Clone, Default)]
pub struct SkolemFactory {
    next: usize,
    issued: IndexSet<String>,
}

impl SkolemFactory {
    pub fn new() -> Self {
        SkolemFactory::default()
    }

    /// Next name not used by `signature` or by an earlier Skolem symbol
    pub fn fresh_name(&mut self, signature: &Signature) -> String {
        loop {
            let name = format!("sk{}", self.next);
            self.next += 1;
            if !signature.contains_name(&name) && !self.issued.contains(&name) {
                self.issued.insert(name.clone());
                return name;
            }
        }
    }

    /// Skolem term over the given universal variables; a constant if there are none
    pub fn fresh_term(&mut self, signature: &Signature, universals: &[Variable]) -> Term {
        let name = self.fresh_name(signature);
        if universals.is_empty() {
            Term::constant(name)
        } else {
            Term::function(
                name,
                universals.iter().cloned().map(Term::Variable).collect(),
            )
        }
    }

    /// Skolem names handed out so far, in order
    pub fn issued(&self) -> impl Iterator<Item = &str> {
        self.issued.iter().map(String::as_str)
    }

    /// Fail if `signature` uses a name that was already issued as a Skolem
    /// symbol.
    pub fn check_collisions(&self, signature: &Signature) -> Result<()> {
        match self.issued.iter().find(|name| signature.contains_name(name)) {
            Some(name) => Err(Error::SkolemCollision { name: name.clone() }),
            None => Ok(()),
        }
    }
}

/// Stage 4: replace every existential variable by a Skolem term over exactly
/// the universally quantified variables enclosing it, and drop the
/// existential quantifier.
///
/// The input must be standardized apart, so substituting into the body never
/// captures a variable.
pub fn skolemize(nnf: Nnf, signature: &Signature, skolems: &mut SkolemFactory) -> Result<Nnf> {
    fn walk(
        nnf: Nnf,
        universals: &mut Vec<Variable>,
        signature: &Signature,
        skolems: &mut SkolemFactory,
    ) -> Result<Nnf> {
        Ok(match nnf {
            Nnf::Lit(lit) => Nnf::Lit(lit),
            Nnf::And(a, b) => Nnf::And(
                Box::new(walk(*a, universals, signature, skolems)?),
                Box::new(walk(*b, universals, signature, skolems)?),
            ),
            Nnf::Or(a, b) => Nnf::Or(
                Box::new(walk(*a, universals, signature, skolems)?),
                Box::new(walk(*b, universals, signature, skolems)?),
            ),
            Nnf::ForAll(v, body) => {
                universals.push(v.clone());
                let body = walk(*body, universals, signature, skolems);
                universals.pop();
                Nnf::ForAll(v, Box::new(body?))
            }
            Nnf::Exists(v, body) => {
                let term = skolems.fresh_term(signature, universals);
                let body = body.apply_substitution(&Substitution::singleton(v, term));
                walk(body, universals, signature, skolems)?
            }
        })
    }

    let result = walk(nnf, &mut Vec::new(), signature, skolems)?;
    skolems.check_collisions(signature)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::core::literal::{Atom, Literal};
    use crate::logic::core::term::ScopeId;

    fn p(args: Vec<Term>) -> Nnf {
        Nnf::Lit(Literal::positive(Atom::new("P", args)))
    }

    #[test]
    fn test_names_skip_signature() {
        let mut sig = Signature::new();
        sig.add_function("sk0", 0).unwrap();
        sig.add_predicate("sk2", 1).unwrap();
        let mut skolems = SkolemFactory::new();
        assert_eq!(skolems.fresh_name(&sig), "sk1");
        assert_eq!(skolems.fresh_name(&sig), "sk3");
        assert_eq!(skolems.issued().collect::<Vec<_>>(), vec!["sk1", "sk3"]);
    }

    #[test]
    fn test_existential_without_universals_becomes_constant() {
        let y = Variable::scoped("Y", ScopeId(1));
        let nnf = Nnf::Exists(y.clone(), Box::new(p(vec![Term::Variable(y)])));
        let mut skolems = SkolemFactory::new();
        let out = skolemize(nnf, &Signature::new(), &mut skolems).unwrap();
        assert_eq!(out, p(vec![Term::constant("sk0")]));
    }

    #[test]
    fn test_skolem_function_takes_enclosing_universals() {
        // ∀X ∃Y P(X, Y)  ⇒  ∀X P(X, sk0(X))
        let x = Variable::scoped("X", ScopeId(1));
        let y = Variable::scoped("Y", ScopeId(2));
        let nnf = Nnf::ForAll(
            x.clone(),
            Box::new(Nnf::Exists(
                y.clone(),
                Box::new(p(vec![Term::Variable(x.clone()), Term::Variable(y)])),
            )),
        );
        let mut skolems = SkolemFactory::new();
        let out = skolemize(nnf, &Signature::new(), &mut skolems).unwrap();
        let expected = Nnf::ForAll(
            x.clone(),
            Box::new(p(vec![
                Term::Variable(x.clone()),
                Term::function("sk0", vec![Term::Variable(x)]),
            ])),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_sibling_universal_is_not_an_argument() {
        // (∀X Q(X)) ∨ ∃Y P(Y)  ⇒  Y becomes a constant
        let x = Variable::scoped("X", ScopeId(1));
        let y = Variable::scoped("Y", ScopeId(2));
        let q = Nnf::Lit(Literal::positive(Atom::new("Q", vec![Term::Variable(x.clone())])));
        let nnf = Nnf::Or(
            Box::new(Nnf::ForAll(x, Box::new(q.clone()))),
            Box::new(Nnf::Exists(y.clone(), Box::new(p(vec![Term::Variable(y)])))),
        );
        let out = skolemize(nnf, &Signature::new(), &mut SkolemFactory::new()).unwrap();
        match out {
            Nnf::Or(_, right) => assert_eq!(*right, p(vec![Term::constant("sk0")])),
            other => panic!("unexpected shape {:?}", other),
        }
    }

    #[test]
    fn test_collision_with_later_signature() {
        let mut skolems = SkolemFactory::new();
        let name = skolems.fresh_name(&Signature::new());
        let mut sig = Signature::new();
        sig.add_function(&name, 0).unwrap();
        assert_eq!(
            skolems.check_collisions(&sig),
            Err(Error::SkolemCollision { name })
        );
    }
}
