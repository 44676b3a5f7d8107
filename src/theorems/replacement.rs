//! The replacement meta-theorem: substitution of provably-equivalent
//! subformulas. Given `p1`, `p2` and a target `p3`, produces a proof of
//!
//! `(∀v1 … ∀vn (p1 ⇔ p2)) ⇒ (p3 ⇔ p3[p1 ↦ p2])`
//!
//! where `v1..vn` are the free variables of `p1 ⇔ p2` in sorted order.
//! Closing over every free variable keeps the hypothesis closed, so the
//! final deduction step never trips over a generalization inside the
//! recursion.

use std::collections::HashMap;

use crate::models::{Prop, Proof, RuleError, Variable};

use super::deduction::deduction;
use super::equivalence::{
    forall_iff_exchange, iff_from_eval, iff_reflexive, iff_to_eval, iff_to_not_iff,
    iff_transition, imply_iff_exchange,
};

pub fn replacement(p1: &Prop, p2: &Prop, p3: &Prop) -> Result<Proof, RuleError> {
    let equivalence = Prop::iff(p1.clone(), p2.clone());
    let closure_vars: Vec<Variable> = equivalence.free_vars().into_iter().collect();

    let mut closed = equivalence.clone();
    for v in closure_vars.iter().rev() {
        closed = Prop::forall(v.clone(), closed);
    }
    let hypothesis = Proof::assumption(closed);

    // Peel the universal closure back off, outermost binder first.
    let mut peeled = hypothesis.clone();
    for (i, v) in closure_vars.iter().enumerate() {
        let mut inner = equivalence.clone();
        for u in closure_vars[i + 1..].iter().rev() {
            inner = Prop::forall(u.clone(), inner);
        }
        peeled = Proof::modus_ponens(&peeled, &Proof::axiom4(inner, v.clone(), v.clone())?)?;
    }

    let mut walker = Walker {
        target: p1,
        substitute: p2,
        equivalence: peeled,
        memo: HashMap::new(),
    };
    let lifted = walker.walk(p3)?;
    deduction(&hypothesis, &lifted)
}

struct Walker<'a> {
    target: &'a Prop,
    substitute: &'a Prop,
    /// Proof of `p1 ⇔ p2` under the closure hypothesis.
    equivalence: Proof,
    /// The recursion is memoisable on the sub-proposition; shared subtrees
    /// reuse their lift.
    memo: HashMap<Prop, Proof>,
}

impl Walker<'_> {
    /// Produce a proof of `p ⇔ p[p1 ↦ p2]` (or, for an extended form whose
    /// rebuilt replacement diverges from the expansion's, the eval-form
    /// equivalence).
    fn walk(&mut self, p: &Prop) -> Result<Proof, RuleError> {
        if let Some(hit) = self.memo.get(p) {
            return Ok(hit.clone());
        }
        let lifted = if p == self.target {
            self.equivalence.clone()
        } else {
            match p {
                Prop::Var(_) => iff_reflexive(p)?,
                Prop::Not(q) => iff_to_not_iff(&self.walk(q)?)?,
                Prop::Imply(l, r) => {
                    let left = self.walk(l)?;
                    let right = self.walk(r)?;
                    imply_iff_exchange(&left, &right)?
                }
                Prop::Forall(v, q) => {
                    let inner = self.walk(q)?;
                    let generalized = Proof::generalization(&inner, v.clone());
                    forall_iff_exchange(&generalized)?
                }
                Prop::And(..) | Prop::Or(..) | Prop::Iff(..) | Prop::Exists(..) => {
                    let bridged = iff_to_eval(p)?;
                    let expanded = self.walk(&p.eval())?;
                    let through = iff_transition(&bridged, &expanded)?;
                    let rebuilt = p.replacement(self.target, self.substitute);
                    let reached = match through.prop() {
                        Prop::Iff(_, r) => (**r).clone(),
                        _ => p.eval(),
                    };
                    if rebuilt.eval() == reached {
                        let back = iff_from_eval(&rebuilt)?;
                        iff_transition(&through, &back)?
                    } else {
                        through
                    }
                }
            }
        };
        self.memo.insert(p.clone(), lifted.clone());
        Ok(lifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn va() -> Prop {
        Prop::var("a")
    }

    fn vb() -> Prop {
        Prop::var("b")
    }

    fn vc() -> Prop {
        Prop::var("c")
    }

    fn x() -> Variable {
        Variable::new("x")
    }

    fn closed_hypothesis(p1: &Prop, p2: &Prop) -> Prop {
        let equivalence = Prop::iff(p1.clone(), p2.clone());
        let mut closed = equivalence.clone();
        for v in equivalence.free_vars().into_iter().rev() {
            closed = Prop::forall(v, closed);
        }
        closed
    }

    #[test]
    fn test_replacement_at_the_target_itself() {
        let proof = replacement(&va(), &vb(), &va()).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(va(), vb()),
        );
        assert_eq!(*proof.prop(), expected);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_replacement_in_negation() {
        let target = Prop::not(va());
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target.clone(), target.replacement(&va(), &vb())),
        );
        assert_eq!(*proof.prop(), expected);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_replacement_in_implication() {
        let target = Prop::imply(va(), Prop::imply(vc(), va()));
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target.clone(), target.replacement(&va(), &vb())),
        );
        assert_eq!(*proof.prop(), expected);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_replacement_leaves_unrelated_formula_alone() {
        let target = Prop::imply(vc(), vc());
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target.clone(), target),
        );
        assert_eq!(*proof.prop(), expected);
    }

    #[test]
    fn test_replacement_under_quantifier() {
        let target = Prop::forall(x(), Prop::imply(Prop::var("x"), va()));
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target.clone(), target.replacement(&va(), &vb())),
        );
        assert_eq!(*proof.prop(), expected);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_replacement_rebuilds_extended_forms() {
        let target = Prop::and(va(), vc());
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let replaced = target.replacement(&va(), &vb());
        assert!(matches!(replaced, Prop::And(..)));
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target, replaced),
        );
        assert_eq!(*proof.prop(), expected);
    }

    #[test]
    fn test_replacement_through_or_and_iff() {
        let target = Prop::or(Prop::iff(va(), vc()), Prop::not(va()));
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target.clone(), target.replacement(&va(), &vb())),
        );
        assert_eq!(*proof.prop(), expected);
    }

    #[test]
    fn test_replacement_surfaces_eval_form_on_divergence() {
        // p1 matches a subtree of the expansion that the rebuilt extended
        // form cannot express: ¬c appears inside eval(c ∨ a) but not in
        // the Or node itself.
        let p1 = Prop::not(vc());
        let target = Prop::or(vc(), va());
        let proof = replacement(&p1, &vb(), &target).unwrap();
        let expanded = target.eval();
        let expected = Prop::imply(
            closed_hypothesis(&p1, &vb()),
            Prop::iff(target, expanded.replacement(&p1, &vb())),
        );
        assert_eq!(*proof.prop(), expected);
    }

    #[test]
    fn test_replacement_with_compound_equivalents() {
        let p1 = Prop::imply(va(), vb());
        let p2 = Prop::or(Prop::not(va()), vb());
        let target = Prop::not(Prop::imply(va(), vb()));
        let proof = replacement(&p1, &p2, &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&p1, &p2),
            Prop::iff(target.clone(), target.replacement(&p1, &p2)),
        );
        assert_eq!(*proof.prop(), expected);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_replacement_memoises_shared_subtrees() {
        let shared = Prop::imply(va(), vc());
        let target = Prop::imply(shared.clone(), shared);
        let proof = replacement(&va(), &vb(), &target).unwrap();
        let expected = Prop::imply(
            closed_hypothesis(&va(), &vb()),
            Prop::iff(target.clone(), target.replacement(&va(), &vb())),
        );
        assert_eq!(*proof.prop(), expected);
    }
}
