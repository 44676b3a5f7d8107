use crate::models::{Proof, ProofKind, RuleError, RuleErrorKind};

use super::propositional::reflexive;

/// The deduction theorem: rewrite a proof of `b` that depends on the
/// assumption `a` into a proof of `a ⇒ b` that does not.
///
/// The resulting assumption set is the input's with `a` removed. The
/// rewrite recurses over the proof structure; a `Generalization` over a
/// variable free in the assumption is rejected (the Bernays–Tarski
/// restriction), since exporting the assumption past that quantifier would
/// not be sound.
pub fn deduction(assumption: &Proof, proof: &Proof) -> Result<Proof, RuleError> {
    if !matches!(assumption.kind(), ProofKind::Assumption) {
        return Err(RuleError::new(
            RuleErrorKind::UnknownProofKind,
            format!("deduction: {} is not an assumption", assumption.prop()),
        ));
    }

    // The proof is the assumption itself: a ⇒ a.
    if matches!(proof.kind(), ProofKind::Assumption) && proof.prop() == assumption.prop() {
        return reflexive(assumption.prop());
    }

    // A generalization over a variable free in the assumption is refused
    // outright, whether or not this branch of the proof depends on it.
    if let ProofKind::Generalization { var, .. } = proof.kind() {
        if assumption.prop().is_free(var) {
            return Err(RuleError::new(
                RuleErrorKind::FreeVarViolation,
                format!(
                    "deduction: {} is free in assumption {}",
                    var,
                    assumption.prop()
                ),
            ));
        }
    }

    // The proof does not depend on the assumption (axioms, eval axioms,
    // other assumptions, or any subtree that never used it): weaken with
    // Axiom1.
    if !proof.depends_on(assumption) {
        let weaken = Proof::axiom1(proof.prop().clone(), assumption.prop().clone());
        return Proof::modus_ponens(proof, &weaken);
    }

    match proof.kind() {
        ProofKind::ModusPonens { minor, major } => {
            let minor_deduced = deduction(assumption, minor)?;
            let major_deduced = deduction(assumption, major)?;
            let distribute = Proof::axiom2(
                assumption.prop().clone(),
                minor.prop().clone(),
                proof.prop().clone(),
            );
            let step = Proof::modus_ponens(&major_deduced, &distribute)?;
            Proof::modus_ponens(&minor_deduced, &step)
        }
        ProofKind::Generalization { subproof, var } => {
            let deduced = deduction(assumption, subproof)?;
            let generalized = Proof::generalization(&deduced, var.clone());
            let export = Proof::axiom5(
                assumption.prop().clone(),
                subproof.prop().clone(),
                var.clone(),
            )?;
            Proof::modus_ponens(&generalized, &export)
        }
        // An assumption depending on `assumption` is `assumption` itself
        // (handled above), and every axiom is closed (handled above).
        _ => Err(RuleError::new(
            RuleErrorKind::UnknownProofKind,
            format!("deduction: unexpected proof of {}", proof.prop()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Prop, Variable};

    fn va() -> Prop {
        Prop::var("a")
    }

    fn vb() -> Prop {
        Prop::var("b")
    }

    #[test]
    fn test_deduction_collapses_one_assumption() {
        let a = Proof::assumption(va());
        let b = Proof::assumption(Prop::imply(va(), vb()));
        let m = Proof::modus_ponens(&a, &b).unwrap();

        let d = deduction(&a, &m).unwrap();
        assert_eq!(*d.prop(), Prop::imply(va(), vb()));
        assert!(!d.depends_on(&a));
        assert!(d.depends_on(&b));
        assert_eq!(d.assumptions().len(), 1);
    }

    #[test]
    fn test_deduction_on_the_assumption_itself() {
        let a = Proof::assumption(va());
        let d = deduction(&a, &a).unwrap();
        assert_eq!(*d.prop(), Prop::imply(va(), va()));
        assert!(d.is_closed());
    }

    #[test]
    fn test_deduction_weakens_independent_proof() {
        let a = Proof::assumption(va());
        let axiom = Proof::axiom1(vb(), va());
        let d = deduction(&a, &axiom).unwrap();
        assert_eq!(
            *d.prop(),
            Prop::imply(va(), axiom.prop().clone())
        );
        assert!(d.is_closed());
    }

    #[test]
    fn test_deduction_removes_both_assumptions_in_turn() {
        let a = Proof::assumption(va());
        let b = Proof::assumption(Prop::imply(va(), vb()));
        let m = Proof::modus_ponens(&a, &b).unwrap();

        let d1 = deduction(&b, &m).unwrap();
        assert_eq!(
            *d1.prop(),
            Prop::imply(Prop::imply(va(), vb()), vb())
        );
        let d2 = deduction(&a, &d1).unwrap();
        assert!(d2.is_closed());
        assert_eq!(
            *d2.prop(),
            Prop::imply(va(), Prop::imply(Prop::imply(va(), vb()), vb()))
        );
    }

    #[test]
    fn test_deduction_forbids_capture() {
        // S4: generalizing over a variable free in the assumption fails
        let x = Variable::new("x");
        let p = Proof::generalization(&Proof::assumption(va()), x.clone());
        let err = deduction(&Proof::assumption(Prop::var("x")), &p).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::FreeVarViolation);
        assert!(err.message.contains("free in assumption"));
    }

    #[test]
    fn test_deduction_through_generalization() {
        // assumption has no free occurrence of the generalized variable
        let x = Variable::new("x");
        let a = Proof::assumption(va());
        let g = Proof::generalization(&a, x.clone());
        let d = deduction(&a, &g).unwrap();
        assert_eq!(
            *d.prop(),
            Prop::imply(va(), Prop::forall(x, va()))
        );
        assert!(d.is_closed());
    }

    #[test]
    fn test_deduction_requires_assumption_node() {
        let not_assumption = Proof::axiom1(va(), vb());
        let target = Proof::assumption(vb());
        let err = deduction(&not_assumption, &target).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::UnknownProofKind);
    }
}
