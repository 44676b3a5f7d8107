//! Introduction, elimination and exchange laws for the extended
//! connectives. Each law works by bridging the extended form into its core
//! expansion with the eval axioms, deriving the corresponding law over the
//! raw `¬`/`⇒` shape, and bridging back.

use crate::models::{Prop, Proof, RuleError, RuleErrorKind};

use super::deduction::deduction;
use super::propositional::{
    contradiction_elim, double_not_elim, double_not_intro, imply_exchange, negative_imply,
    not_to_not_intro, reflexive, transitive,
};

// ─── Core-shape working lemmas ───────────────────────────────────────────
// These operate on the expansion shape `¬(a ⇒ ¬b)` of a conjunction and
// `¬a ⇒ b` of a disjunction, with `a` and `b` already in core form.

/// `⊢ ¬(a ⇒ ¬b) ⇒ a`
pub(crate) fn and_reduction_left(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let pair = Prop::imply(a.clone(), Prop::not(b.clone()));
    let s1 = negative_imply(a, &Prop::not(b.clone()))?;
    let s2 = not_to_not_intro(&Prop::not(a.clone()), &pair)?;
    let s3 = Proof::modus_ponens(&s1, &s2)?;
    transitive(&s3, &double_not_elim(a)?)
}

/// `⊢ ¬(a ⇒ ¬b) ⇒ b`
pub(crate) fn and_reduction_right(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let not_b = Prop::not(b.clone());
    let pair = Prop::imply(a.clone(), not_b.clone());
    let s1 = Proof::axiom1(not_b.clone(), a.clone());
    let s2 = not_to_not_intro(&not_b, &pair)?;
    let s3 = Proof::modus_ponens(&s1, &s2)?;
    transitive(&s3, &double_not_elim(b)?)
}

/// From `a` and `b`, derive `¬(a ⇒ ¬b)`.
pub(crate) fn and_introduction(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let a = x.prop().clone();
    let b = y.prop().clone();
    let pair = Prop::imply(a.clone(), Prop::not(b.clone()));
    let s1 = reflexive(&pair)?;
    let s2 = imply_exchange(&s1)?;
    let s3 = not_to_not_intro(&pair, &Prop::not(b.clone()))?;
    let s4 = transitive(&s2, &s3)?;
    let s5 = Proof::modus_ponens(x, &s4)?;
    let s6 = Proof::modus_ponens(y, &double_not_intro(&b)?)?;
    Proof::modus_ponens(&s6, &s5)
}

/// `⊢ a ⇒ (¬a ⇒ b)`
pub(crate) fn or_induction_left(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let s1 = negative_imply(&Prop::not(a.clone()), b)?;
    let s2 = double_not_intro(a)?;
    transitive(&s2, &s1)
}

// ─── Conjunction ─────────────────────────────────────────────────────────

/// `⊢ (a ∧ b) ⇒ a`
pub fn and_elim_left(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let conj = Prop::and(a.clone(), b.clone());
    let s1 = Proof::to_eval_axiom(conj);
    let core = and_reduction_left(&a.eval(), &b.eval())?;
    let s2 = transitive(&s1, &core)?;
    transitive(&s2, &Proof::from_eval_axiom(a.clone()))
}

/// `⊢ (a ∧ b) ⇒ b`
pub fn and_elim(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let conj = Prop::and(a.clone(), b.clone());
    let s1 = Proof::to_eval_axiom(conj);
    let core = and_reduction_right(&a.eval(), &b.eval())?;
    let s2 = transitive(&s1, &core)?;
    transitive(&s2, &Proof::from_eval_axiom(b.clone()))
}

/// From `a` and `b`, derive `a ∧ b`.
pub fn and_intro(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let a = x.prop().clone();
    let b = y.prop().clone();
    let xe = Proof::modus_ponens(x, &Proof::to_eval_axiom(a.clone()))?;
    let ye = Proof::modus_ponens(y, &Proof::to_eval_axiom(b.clone()))?;
    let core = and_introduction(&xe, &ye)?;
    Proof::modus_ponens(&core, &Proof::from_eval_axiom(Prop::and(a, b)))
}

/// `⊢ (a ∧ b) ⇒ (b ∧ a)`
pub fn and_exchange(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let hypothesis = Proof::assumption(Prop::and(a.clone(), b.clone()));
    let left = Proof::modus_ponens(&hypothesis, &and_elim_left(a, b)?)?;
    let right = Proof::modus_ponens(&hypothesis, &and_elim(a, b)?)?;
    let swapped = and_intro(&right, &left)?;
    deduction(&hypothesis, &swapped)
}

// ─── Disjunction ─────────────────────────────────────────────────────────

/// `⊢ a ⇒ (a ∨ b)`
pub fn or_intro_left(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let s1 = Proof::to_eval_axiom(a.clone());
    let core = or_induction_left(&a.eval(), &b.eval())?;
    let s2 = transitive(&s1, &core)?;
    transitive(&s2, &Proof::from_eval_axiom(Prop::or(a.clone(), b.clone())))
}

/// `⊢ b ⇒ (a ∨ b)`
pub fn or_intro_right(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let s1 = Proof::to_eval_axiom(b.clone());
    let core = Proof::axiom1(b.eval(), Prop::not(a.eval()));
    let s2 = transitive(&s1, &core)?;
    transitive(&s2, &Proof::from_eval_axiom(Prop::or(a.clone(), b.clone())))
}

/// From `a ⇒ c` and `b ⇒ c`, derive `(a ∨ b) ⇒ c`.
pub fn or_elim(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (a, c) = match x.prop() {
        Prop::Imply(l, r) => ((**l).clone(), (**r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("or_elim: {} is not an implication", other),
            ))
        }
    };
    let (b, c2) = match y.prop() {
        Prop::Imply(l, r) => ((**l).clone(), (**r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("or_elim: {} is not an implication", other),
            ))
        }
    };
    if c != c2 {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("or_elim: {} does not match {}", c, c2),
        ));
    }
    let disj = Prop::or(a.clone(), b.clone());
    let hypothesis = Proof::assumption(disj.clone());
    let expanded = Proof::modus_ponens(&hypothesis, &Proof::to_eval_axiom(disj))?;
    let from_left = transitive(&Proof::from_eval_axiom(a), x)?;
    let from_right = transitive(&Proof::from_eval_axiom(b), y)?;
    let negative_case = transitive(&expanded, &from_right)?;
    let conclusion = contradiction_elim(&from_left, &negative_case)?;
    deduction(&hypothesis, &conclusion)
}

/// `⊢ (a ∨ b) ⇒ (b ∨ a)`
pub fn or_exchange(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let x = or_intro_right(b, a)?;
    let y = or_intro_left(b, a)?;
    or_elim(&x, &y)
}

// ─── Biconditional ───────────────────────────────────────────────────────

/// From `a ⇒ b` and `b ⇒ a`, derive `a ⇔ b`.
pub fn iff_intro(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = match x.prop() {
        Prop::Imply(l, r) => ((**l).clone(), (**r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("iff_intro: {} is not an implication", other),
            ))
        }
    };
    let expected = Prop::imply(b.clone(), a.clone());
    if *y.prop() != expected {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("iff_intro: {} is not the converse of {}", y.prop(), x.prop()),
        ));
    }
    let forward = transitive(
        &transitive(&Proof::from_eval_axiom(a.clone()), x)?,
        &Proof::to_eval_axiom(b.clone()),
    )?;
    let backward = transitive(
        &transitive(&Proof::from_eval_axiom(b.clone()), y)?,
        &Proof::to_eval_axiom(a.clone()),
    )?;
    let core = and_introduction(&forward, &backward)?;
    Proof::modus_ponens(&core, &Proof::from_eval_axiom(Prop::iff(a, b)))
}

fn expect_iff(proof: &Proof, rule: &str) -> Result<(Prop, Prop), RuleError> {
    match proof.prop() {
        Prop::Iff(l, r) => Ok(((**l).clone(), (**r).clone())),
        other => Err(RuleError::new(
            RuleErrorKind::NotImply,
            format!("{}: {} is not a biconditional", rule, other),
        )),
    }
}

/// From `a ⇔ b`, derive `a ⇒ b`.
pub fn iff_elim_left(x: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = expect_iff(x, "iff_elim_left")?;
    let expanded = Proof::modus_ponens(x, &Proof::to_eval_axiom(x.prop().clone()))?;
    let forward_core = Prop::imply(a.eval(), b.eval());
    let backward_core = Prop::imply(b.eval(), a.eval());
    let project = and_reduction_left(&forward_core, &backward_core)?;
    let core = Proof::modus_ponens(&expanded, &project)?;
    transitive(
        &transitive(&Proof::to_eval_axiom(a), &core)?,
        &Proof::from_eval_axiom(b),
    )
}

/// From `a ⇔ b`, derive `b ⇒ a`.
pub fn iff_elim_right(x: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = expect_iff(x, "iff_elim_right")?;
    let expanded = Proof::modus_ponens(x, &Proof::to_eval_axiom(x.prop().clone()))?;
    let forward_core = Prop::imply(a.eval(), b.eval());
    let backward_core = Prop::imply(b.eval(), a.eval());
    let project = and_reduction_right(&forward_core, &backward_core)?;
    let core = Proof::modus_ponens(&expanded, &project)?;
    transitive(
        &transitive(&Proof::to_eval_axiom(b), &core)?,
        &Proof::from_eval_axiom(a),
    )
}

/// From `a ⇔ b`, derive `b ⇔ a`.
pub fn iff_exchange(x: &Proof) -> Result<Proof, RuleError> {
    let backward = iff_elim_right(x)?;
    let forward = iff_elim_left(x)?;
    iff_intro(&backward, &forward)
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

    #[test]
    fn test_and_elim_projects_right() {
        // S5
        let conj = Prop::and(va(), vb());
        let proof = and_elim(&va(), &vb()).unwrap();
        assert_eq!(*proof.prop(), Prop::imply(conj, vb()));
        assert!(proof.is_closed());
    }

    #[test]
    fn test_and_elim_left_projects_left() {
        let conj = Prop::and(va(), vb());
        let proof = and_elim_left(&va(), &vb()).unwrap();
        assert_eq!(*proof.prop(), Prop::imply(conj, va()));
        assert!(proof.is_closed());
    }

    #[test]
    fn test_and_intro() {
        let x = Proof::assumption(va());
        let y = Proof::assumption(vb());
        let proof = and_intro(&x, &y).unwrap();
        assert_eq!(*proof.prop(), Prop::and(va(), vb()));
        assert!(proof.depends_on(&x));
        assert!(proof.depends_on(&y));
    }

    #[test]
    fn test_and_exchange() {
        let proof = and_exchange(&va(), &vb()).unwrap();
        assert_eq!(
            *proof.prop(),
            Prop::imply(Prop::and(va(), vb()), Prop::and(vb(), va()))
        );
        assert!(proof.is_closed());
    }

    #[test]
    fn test_and_laws_on_extended_components() {
        // components that are themselves extended forms go through eval
        let left = Prop::or(va(), vb());
        let right = Prop::and(vb(), vc());
        let proof = and_elim(&left, &right).unwrap();
        assert_eq!(
            *proof.prop(),
            Prop::imply(Prop::and(left, right.clone()), right)
        );
    }

    #[test]
    fn test_or_intro_left() {
        let proof = or_intro_left(&va(), &vb()).unwrap();
        assert_eq!(
            *proof.prop(),
            Prop::imply(va(), Prop::or(va(), vb()))
        );
        assert!(proof.is_closed());
    }

    #[test]
    fn test_or_intro_right() {
        let proof = or_intro_right(&va(), &vb()).unwrap();
        assert_eq!(
            *proof.prop(),
            Prop::imply(vb(), Prop::or(va(), vb()))
        );
        assert!(proof.is_closed());
    }

    #[test]
    fn test_or_elim() {
        let x = Proof::assumption(Prop::imply(va(), vc()));
        let y = Proof::assumption(Prop::imply(vb(), vc()));
        let proof = or_elim(&x, &y).unwrap();
        assert_eq!(
            *proof.prop(),
            Prop::imply(Prop::or(va(), vb()), vc())
        );
        assert!(proof.depends_on(&x));
        assert!(proof.depends_on(&y));
    }

    #[test]
    fn test_or_elim_rejects_mismatched_conclusions() {
        let x = Proof::assumption(Prop::imply(va(), vc()));
        let y = Proof::assumption(Prop::imply(vb(), va()));
        let err = or_elim(&x, &y).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::AntecedentMismatch);
    }

    #[test]
    fn test_or_exchange() {
        let proof = or_exchange(&va(), &vb()).unwrap();
        assert_eq!(
            *proof.prop(),
            Prop::imply(Prop::or(va(), vb()), Prop::or(vb(), va()))
        );
        assert!(proof.is_closed());
    }

    #[test]
    fn test_iff_intro_and_elims() {
        let forward = Proof::assumption(Prop::imply(va(), vb()));
        let backward = Proof::assumption(Prop::imply(vb(), va()));
        let both = iff_intro(&forward, &backward).unwrap();
        assert_eq!(*both.prop(), Prop::iff(va(), vb()));

        let left = iff_elim_left(&both).unwrap();
        assert_eq!(*left.prop(), Prop::imply(va(), vb()));
        let right = iff_elim_right(&both).unwrap();
        assert_eq!(*right.prop(), Prop::imply(vb(), va()));
    }

    #[test]
    fn test_iff_intro_rejects_non_converse() {
        let forward = Proof::assumption(Prop::imply(va(), vb()));
        let wrong = Proof::assumption(Prop::imply(va(), vc()));
        let err = iff_intro(&forward, &wrong).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::AntecedentMismatch);
    }

    #[test]
    fn test_iff_exchange() {
        let forward = Proof::assumption(Prop::imply(va(), vb()));
        let backward = Proof::assumption(Prop::imply(vb(), va()));
        let both = iff_intro(&forward, &backward).unwrap();
        let swapped = iff_exchange(&both).unwrap();
        assert_eq!(*swapped.prop(), Prop::iff(vb(), va()));
    }
}
