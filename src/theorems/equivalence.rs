//! Combinators over proved biconditionals. The replacement theorem walks a
//! proposition and needs to lift an equivalence through each connective;
//! these are the per-connective lifts.

use crate::models::{Prop, Proof, RuleError, RuleErrorKind};

use super::connectives::{iff_elim_left, iff_elim_right, iff_intro};
use super::deduction::deduction;
use super::propositional::{not_to_not_intro, reflexive, transitive};

/// `⊢ p ⇔ p`
pub fn iff_reflexive(p: &Prop) -> Result<Proof, RuleError> {
    let forward = reflexive(p)?;
    let backward = reflexive(p)?;
    iff_intro(&forward, &backward)
}

/// From `a ⇔ b` and `b ⇔ c`, derive `a ⇔ c`.
pub fn iff_transition(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let b = match x.prop() {
        Prop::Iff(_, r) => (**r).clone(),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("iff_transition: {} is not a biconditional", other),
            ))
        }
    };
    let b2 = match y.prop() {
        Prop::Iff(l, _) => (**l).clone(),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("iff_transition: {} is not a biconditional", other),
            ))
        }
    };
    if b != b2 {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("iff_transition: {} does not match {}", b, b2),
        ));
    }
    let forward = transitive(&iff_elim_left(x)?, &iff_elim_left(y)?)?;
    let backward = transitive(&iff_elim_right(y)?, &iff_elim_right(x)?)?;
    iff_intro(&forward, &backward)
}

/// From `a ⇔ b`, derive `¬a ⇔ ¬b`.
pub fn iff_to_not_iff(x: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = match x.prop() {
        Prop::Iff(l, r) => ((**l).clone(), (**r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("iff_to_not_iff: {} is not a biconditional", other),
            ))
        }
    };
    let forward = Proof::modus_ponens(&iff_elim_right(x)?, &not_to_not_intro(&b, &a)?)?;
    let backward = Proof::modus_ponens(&iff_elim_left(x)?, &not_to_not_intro(&a, &b)?)?;
    iff_intro(&forward, &backward)
}

/// From `a ⇔ b` and `c ⇔ d`, derive `(a ⇒ c) ⇔ (b ⇒ d)`.
pub fn imply_iff_exchange(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = match x.prop() {
        Prop::Iff(l, r) => ((**l).clone(), (**r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("imply_iff_exchange: {} is not a biconditional", other),
            ))
        }
    };
    let (c, d) = match y.prop() {
        Prop::Iff(l, r) => ((**l).clone(), (**r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("imply_iff_exchange: {} is not a biconditional", other),
            ))
        }
    };
    let ab = iff_elim_left(x)?;
    let ba = iff_elim_right(x)?;
    let cd = iff_elim_left(y)?;
    let dc = iff_elim_right(y)?;

    let hyp_ac = Proof::assumption(Prop::imply(a.clone(), c.clone()));
    let chained = transitive(&transitive(&ba, &hyp_ac)?, &cd)?;
    let forward = deduction(&hyp_ac, &chained)?;

    let hyp_bd = Proof::assumption(Prop::imply(b.clone(), d.clone()));
    let chained_back = transitive(&transitive(&ab, &hyp_bd)?, &dc)?;
    let backward = deduction(&hyp_bd, &chained_back)?;

    iff_intro(&forward, &backward)
}

/// From `∀v (a ⇔ b)`, derive `(∀v a) ⇔ (∀v b)`.
pub fn forall_iff_exchange(x: &Proof) -> Result<Proof, RuleError> {
    let (v, a, b) = match x.prop() {
        Prop::Forall(v, body) => match body.as_ref() {
            Prop::Iff(l, r) => (v.clone(), (**l).clone(), (**r).clone()),
            other => {
                return Err(RuleError::new(
                    RuleErrorKind::NotImply,
                    format!("forall_iff_exchange: body {} is not a biconditional", other),
                ))
            }
        },
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("forall_iff_exchange: {} is not universally quantified", other),
            ))
        }
    };
    let equivalence = Prop::iff(a.clone(), b.clone());
    let peel = Proof::axiom4(equivalence, v.clone(), v.clone())?;
    let instance = Proof::modus_ponens(x, &peel)?;

    let hyp_a = Proof::assumption(Prop::forall(v.clone(), a.clone()));
    let each_a = Proof::modus_ponens(&hyp_a, &Proof::axiom4(a.clone(), v.clone(), v.clone())?)?;
    let each_b = Proof::modus_ponens(&each_a, &iff_elim_left(&instance)?)?;
    let all_b = Proof::generalization(&each_b, v.clone());
    let forward = deduction(&hyp_a, &all_b)?;

    let hyp_b = Proof::assumption(Prop::forall(v.clone(), b.clone()));
    let each_b2 = Proof::modus_ponens(&hyp_b, &Proof::axiom4(b, v.clone(), v.clone())?)?;
    let each_a2 = Proof::modus_ponens(&each_b2, &iff_elim_right(&instance)?)?;
    let all_a = Proof::generalization(&each_a2, v);
    let backward = deduction(&hyp_b, &all_a)?;

    iff_intro(&forward, &backward)
}

/// `⊢ p ⇔ p.eval()`
pub fn iff_to_eval(p: &Prop) -> Result<Proof, RuleError> {
    let forward = Proof::to_eval_axiom(p.clone());
    let backward = Proof::from_eval_axiom(p.clone());
    iff_intro(&forward, &backward)
}

/// `⊢ p.eval() ⇔ p`
pub fn iff_from_eval(p: &Prop) -> Result<Proof, RuleError> {
    let forward = Proof::from_eval_axiom(p.clone());
    let backward = Proof::to_eval_axiom(p.clone());
    iff_intro(&forward, &backward)
}
