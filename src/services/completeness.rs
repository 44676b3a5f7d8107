//! Completeness of propositional tautologies over the three Hilbert axioms
//! and modus ponens, by Kalmár's construction.
//!
//! For a full assignment of the formula's variables, the formula or its
//! negation is provable from the corresponding literal assumptions, by
//! structural recursion. Variables are then eliminated one at a time: the
//! proofs under `x` and under `¬x` are discharged with the deduction
//! theorem and merged through the case-split schema
//! `(x ⇒ φ) ⇒ ((¬x ⇒ φ) ⇒ φ)`. A tautology ends with every assumption
//! gone; anything else surfaces the falsifying assignment.

use std::collections::BTreeMap;

use crate::models::{Prop, Proof, RuleError, RuleErrorKind, Variable};
use crate::theorems::deduction::deduction;
use crate::theorems::propositional::{
    contradiction, double_not_intro, imply_exchange, negative_imply, not_to_not_intro, reflexive,
};

/// Prove the given propositional tautology from the axioms alone. Extended
/// connectives are accepted: the core expansion is proved and bridged back
/// through the eval axiom. Quantified input and non-tautologies are
/// rejected with [`RuleErrorKind::NotATautology`].
pub fn complete(prop: &Prop) -> Result<Proof, RuleError> {
    if !prop.is_quantifier_free() {
        return Err(RuleError::new(
            RuleErrorKind::NotATautology,
            format!("complete: {} quantifies over individuals", prop),
        ));
    }
    let core = prop.eval();
    let variables: Vec<Variable> = core.free_vars().into_iter().collect();
    let mut assignment = BTreeMap::new();
    let proof = eliminate(&core, &variables, &mut assignment)?;
    if core == *prop {
        Ok(proof)
    } else {
        Proof::modus_ponens(&proof, &Proof::from_eval_axiom(prop.clone()))
    }
}

/// Split on the first unassigned variable, prove the target under both
/// branches, and merge. With no variable left the assignment is total and
/// the literal-case recursion must land on the target itself.
fn eliminate(
    target: &Prop,
    remaining: &[Variable],
    assignment: &mut BTreeMap<Variable, bool>,
) -> Result<Proof, RuleError> {
    let Some((variable, rest)) = remaining.split_first() else {
        let (proof, holds) = derive_literal_case(target, assignment)?;
        if !holds {
            return Err(RuleError::new(
                RuleErrorKind::NotATautology,
                format!(
                    "complete: {} is false under {}",
                    target,
                    describe_assignment(assignment)
                ),
            ));
        }
        return Ok(proof);
    };

    let literal = Prop::Var(variable.clone());

    assignment.insert(variable.clone(), true);
    let under_true = eliminate(target, rest, assignment)?;
    assignment.insert(variable.clone(), false);
    let under_false = eliminate(target, rest, assignment)?;
    assignment.remove(variable);

    let positive = deduction(&Proof::assumption(literal.clone()), &under_true)?;
    let negative = deduction(&Proof::assumption(Prop::not(literal.clone())), &under_false)?;
    let split = contradiction(&literal, target)?;
    Proof::modus_ponens(&negative, &Proof::modus_ponens(&positive, &split)?)
}

/// Under a total assignment, prove either `p` (returning `true`) or `¬p`
/// (returning `false`) from the literal assumptions.
fn derive_literal_case(
    p: &Prop,
    assignment: &BTreeMap<Variable, bool>,
) -> Result<(Proof, bool), RuleError> {
    match p {
        Prop::Var(v) => match assignment.get(v) {
            Some(true) => Ok((Proof::assumption(p.clone()), true)),
            Some(false) => Ok((Proof::assumption(Prop::not(p.clone())), false)),
            None => Err(RuleError::new(
                RuleErrorKind::NotATautology,
                format!("complete: {} has no assigned value", v),
            )),
        },
        Prop::Not(q) => {
            let (inner, holds) = derive_literal_case(q, assignment)?;
            if holds {
                let doubled = Proof::modus_ponens(&inner, &double_not_intro(q)?)?;
                Ok((doubled, false))
            } else {
                Ok((inner, true))
            }
        }
        Prop::Imply(l, r) => {
            let (left, left_holds) = derive_literal_case(l, assignment)?;
            let (right, right_holds) = derive_literal_case(r, assignment)?;
            if right_holds {
                let weakened =
                    Proof::modus_ponens(&right, &Proof::axiom1((**r).clone(), (**l).clone()))?;
                Ok((weakened, true))
            } else if !left_holds {
                let exploded = Proof::modus_ponens(&left, &negative_imply(l, r)?)?;
                Ok((exploded, true))
            } else {
                // antecedent true, consequent false: refute the implication
                let pivot = imply_exchange(&reflexive(p)?)?;
                let applied = Proof::modus_ponens(&left, &pivot)?;
                let contra = Proof::modus_ponens(&applied, &not_to_not_intro(p, r)?)?;
                let refuted = Proof::modus_ponens(&right, &contra)?;
                Ok((refuted, false))
            }
        }
        other => Err(RuleError::new(
            RuleErrorKind::NotATautology,
            format!("complete: {} is not in the core propositional fragment", other),
        )),
    }
}

fn describe_assignment(assignment: &BTreeMap<Variable, bool>) -> String {
    assignment
        .iter()
        .map(|(v, value)| format!("{}={}", v, value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::truth_table::is_tautology;

    fn va() -> Prop {
        Prop::var("a")
    }

    fn vb() -> Prop {
        Prop::var("b")
    }

    #[test]
    fn test_complete_identity() {
        // S7
        let phi = Prop::imply(va(), va());
        let proof = complete(&phi).unwrap();
        assert_eq!(*proof.prop(), phi);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_complete_axiom1_shape() {
        // S6
        let phi = Prop::imply(va(), Prop::imply(vb(), va()));
        let proof = complete(&phi).unwrap();
        assert_eq!(*proof.prop(), phi);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_complete_excluded_middle_core_form() {
        // ¬a ⇒ ¬a is the core rendering of a ∨ ¬a
        let phi = Prop::imply(Prop::not(va()), Prop::not(va()));
        let proof = complete(&phi).unwrap();
        assert_eq!(*proof.prop(), phi);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_complete_peirce() {
        let phi = Prop::imply(
            Prop::imply(Prop::imply(va(), vb()), va()),
            va(),
        );
        let proof = complete(&phi).unwrap();
        assert_eq!(*proof.prop(), phi);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_complete_three_variables() {
        // transitivity schema: (a ⇒ b) ⇒ ((b ⇒ c) ⇒ (a ⇒ c))
        let phi = Prop::imply(
            Prop::imply(va(), vb()),
            Prop::imply(
                Prop::imply(vb(), Prop::var("c")),
                Prop::imply(va(), Prop::var("c")),
            ),
        );
        assert_eq!(is_tautology(&phi), Some(true));
        let proof = complete(&phi).unwrap();
        assert_eq!(*proof.prop(), phi);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_complete_extended_connectives() {
        let phi = Prop::or(va(), Prop::not(va()));
        let proof = complete(&phi).unwrap();
        assert_eq!(*proof.prop(), phi);
        assert!(proof.is_closed());

        let psi = Prop::imply(Prop::and(va(), vb()), va());
        let proof = complete(&psi).unwrap();
        assert_eq!(*proof.prop(), psi);
        assert!(proof.is_closed());
    }

    #[test]
    fn test_complete_rejects_non_tautology() {
        let phi = Prop::imply(va(), vb());
        let err = complete(&phi).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::NotATautology);
        assert!(err.message.contains("a=true"));
        assert!(err.message.contains("b=false"));
    }

    #[test]
    fn test_complete_rejects_plain_variable() {
        let err = complete(&va()).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::NotATautology);
    }

    #[test]
    fn test_complete_rejects_quantified_input() {
        let x = Variable::new("x");
        let phi = Prop::imply(
            Prop::forall(x.clone(), Prop::var("x")),
            Prop::forall(x, Prop::var("x")),
        );
        let err = complete(&phi).unwrap_err();
        assert_eq!(err.kind, RuleErrorKind::NotATautology);
    }

    #[test]
    fn test_complete_agrees_with_truth_tables_on_generated_props() {
        use crate::services::generator::{GeneratorConfig, PropGenerator};
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let generator = PropGenerator::new(GeneratorConfig {
            max_depth: 3,
            ..GeneratorConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(20240811);
        for _ in 0..40 {
            let phi = generator.generate(&mut rng);
            let semantic = is_tautology(&phi).unwrap();
            match complete(&phi) {
                Ok(proof) => {
                    assert!(semantic, "proved the non-tautology {}", phi);
                    assert_eq!(*proof.prop(), phi);
                    assert!(proof.is_closed());
                }
                Err(err) => {
                    assert!(!semantic, "failed on the tautology {}: {}", phi, err);
                    assert_eq!(err.kind, RuleErrorKind::NotATautology);
                }
            }
        }
    }

    #[test]
    fn test_complete_agrees_with_truth_tables() {
        let candidates = vec![
            Prop::imply(va(), Prop::imply(vb(), va())),
            Prop::imply(Prop::not(Prop::not(va())), va()),
            Prop::imply(va(), vb()),
            Prop::iff(va(), Prop::not(Prop::not(va()))),
            Prop::and(va(), Prop::not(va())),
        ];
        for phi in candidates {
            let provable = complete(&phi).is_ok();
            assert_eq!(
                Some(provable),
                is_tautology(&phi),
                "disagreement on {}",
                phi
            );
        }
    }
}
