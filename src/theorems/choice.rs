//! Choice-to-existence: a proof of `B` from the assumption `A` lifts to a
//! proof of `(∃x A) ⇒ (∃x B)`. The derivation routes through a freshly
//! generated witness variable so that nothing the caller wrote can collide
//! with the intermediate existential.

use crate::models::{Prop, Proof, RuleError, Variable};

use super::deduction::deduction;
use super::connectives::iff_elim_right;
use super::first_order::{exist_intro, exist_rename_var, not_free_var_imply_exist_iff_forall};
use super::propositional::transitive;

pub fn choice_to_exist(
    assumption: &Proof,
    proof: &Proof,
    x: &Variable,
) -> Result<Proof, RuleError> {
    let conditional = deduction(assumption, proof)?;
    let premise = assumption.prop().clone();
    let conclusion = proof.prop().clone();

    let exists_premise = Prop::exists(x.clone(), premise.clone());
    let exists_conclusion = Prop::exists(x.clone(), conclusion.clone());
    let witness = Variable::fresh_for(&[&exists_premise, &exists_conclusion]);

    // B ⇒ ∃w B[x ↦ w], with w the fresh witness.
    let renamed = conclusion.substitute(x, &witness);
    let into_witnessed = exist_intro(&renamed, &witness, x)?;
    let lifted = transitive(&conditional, &into_witnessed)?;

    // A ⇒ ∃w B[x ↦ w] holds for arbitrary x, and x is gone from the
    // consequent, so the existential moves past the implication.
    let generalized = Proof::generalization(&lifted, x.clone());
    let exists_witnessed = Prop::exists(witness.clone(), renamed.clone());
    let shuffle = not_free_var_imply_exist_iff_forall(&premise, &exists_witnessed, x)?;
    let from_forall = iff_elim_right(&shuffle)?;
    let witnessed_conditional = Proof::modus_ponens(&generalized, &from_forall)?;

    // Rename the witness back to x.
    let rename_back = exist_rename_var(&renamed, &witness, x)?;
    transitive(&witnessed_conditional, &rename_back)
}
