//! Derived quantifier rules. The working pattern throughout is the
//! original Hilbert one: assume the antecedent, instantiate with Axiom4,
//! chain propositionally, generalize, and discharge with the deduction
//! theorem. Rules about `∃` go through its `¬∀¬` expansion via the eval
//! axioms.

use crate::models::{Prop, Proof, RuleError, RuleErrorKind, Variable};

use super::deduction::deduction;
use super::connectives::iff_intro;
use super::propositional::{
    double_not_elim, double_not_intro, not_to_not_intro, reflexive, transitive,
};

/// `⊢ p ⇒ ∀x p` when `x` is not free in `p`.
pub fn not_free_var_forall_intro(p: &Prop, x: &Variable) -> Result<Proof, RuleError> {
    if p.is_free(x) {
        return Err(RuleError::new(
            RuleErrorKind::FreeVarViolation,
            format!("not_free_var_forall_intro: {} is free in {}", x, p),
        ));
    }
    let hypothesis = Proof::assumption(p.clone());
    let generalized = Proof::generalization(&hypothesis, x.clone());
    deduction(&hypothesis, &generalized)
}

/// `⊢ ∃x p ⇒ p` when `x` is not free in `p`.
pub fn not_free_var_exist_elim(p: &Prop, x: &Variable) -> Result<Proof, RuleError> {
    if p.is_free(x) {
        return Err(RuleError::new(
            RuleErrorKind::FreeVarViolation,
            format!("not_free_var_exist_elim: {} is free in {}", x, p),
        ));
    }
    let expanded = p.eval();
    let negated = Prop::not(expanded.clone());
    let all_negated = Prop::forall(x.clone(), negated.clone());

    let s1 = not_free_var_forall_intro(&negated, x)?;
    let s2 = Proof::modus_ponens(&s1, &not_to_not_intro(&negated, &all_negated)?)?;
    let s3 = transitive(&s2, &double_not_elim(&expanded)?)?;
    let bridge_in = Proof::to_eval_axiom(Prop::exists(x.clone(), p.clone()));
    transitive(&transitive(&bridge_in, &s3)?, &Proof::from_eval_axiom(p.clone()))
}

/// Existential introduction: `⊢ p[x ↦ y] ⇒ ∃x p`. Requires `y` not bound
/// in `p`.
pub fn exist_intro(p: &Prop, x: &Variable, y: &Variable) -> Result<Proof, RuleError> {
    if p.is_bounded(y) {
        return Err(RuleError::new(
            RuleErrorKind::BoundCapture,
            format!("exist_intro: {} is bound in {}", y, p),
        ));
    }
    let expanded = p.eval();
    let witnessed = expanded.substitute(x, y);
    let not_expanded = Prop::not(expanded.clone());
    let all_negated = Prop::forall(x.clone(), not_expanded.clone());

    let s1 = Proof::to_eval_axiom(p.substitute(x, y));
    let s2 = double_not_intro(&witnessed)?;
    let instantiate = Proof::axiom4(not_expanded, x.clone(), y.clone())?;
    let s3 = Proof::modus_ponens(
        &instantiate,
        &not_to_not_intro(&all_negated, &Prop::not(witnessed))?,
    )?;
    let s4 = Proof::from_eval_axiom(Prop::exists(x.clone(), p.clone()));
    transitive(&transitive(&transitive(&s1, &s2)?, &s3)?, &s4)
}

/// `⊢ ∀x ∀y p ⇒ ∀y ∀x p`
pub fn forall_exchange(p: &Prop, x: &Variable, y: &Variable) -> Result<Proof, RuleError> {
    let nested = Prop::forall(x.clone(), Prop::forall(y.clone(), p.clone()));
    if x == y {
        return reflexive(&nested);
    }
    let hypothesis = Proof::assumption(nested);
    let inner = Proof::modus_ponens(
        &hypothesis,
        &Proof::axiom4(Prop::forall(y.clone(), p.clone()), x.clone(), x.clone())?,
    )?;
    let body = Proof::modus_ponens(&inner, &Proof::axiom4(p.clone(), y.clone(), y.clone())?)?;
    let swapped = Proof::generalization(&Proof::generalization(&body, x.clone()), y.clone());
    deduction(&hypothesis, &swapped)
}

/// `⊢ ∀x (a ⇒ b) ⇒ (∀x a ⇒ ∀x b)`
pub fn forall_imply_to_imply_forall(
    x: &Variable,
    a: &Prop,
    b: &Prop,
) -> Result<Proof, RuleError> {
    let pointwise = Prop::imply(a.clone(), b.clone());
    let hypothesis = Proof::assumption(Prop::forall(x.clone(), pointwise.clone()));
    let all_a = Proof::assumption(Prop::forall(x.clone(), a.clone()));

    let step = Proof::modus_ponens(&hypothesis, &Proof::axiom4(pointwise, x.clone(), x.clone())?)?;
    let each_a = Proof::modus_ponens(&all_a, &Proof::axiom4(a.clone(), x.clone(), x.clone())?)?;
    let each_b = Proof::modus_ponens(&each_a, &step)?;
    let all_b = Proof::generalization(&each_b, x.clone());

    let inner = deduction(&all_a, &all_b)?;
    deduction(&hypothesis, &inner)
}

/// `⊢ ∀x (a ⇒ b) ⇒ (∃x a ⇒ ∃x b)`
pub fn forall_imply_to_imply_exist(
    x: &Variable,
    a: &Prop,
    b: &Prop,
) -> Result<Proof, RuleError> {
    let a_core = a.eval();
    let b_core = b.eval();
    let pointwise = Prop::imply(a.clone(), b.clone());
    let hypothesis = Proof::assumption(Prop::forall(x.clone(), pointwise.clone()));

    let step = Proof::modus_ponens(&hypothesis, &Proof::axiom4(pointwise, x.clone(), x.clone())?)?;
    let step_core = transitive(
        &transitive(&Proof::from_eval_axiom(a.clone()), &step)?,
        &Proof::to_eval_axiom(b.clone()),
    )?;
    let contra = Proof::modus_ponens(&step_core, &not_to_not_intro(&a_core, &b_core)?)?;

    let not_b = Prop::not(b_core.clone());
    let not_a = Prop::not(a_core.clone());
    let all_not_b = Proof::assumption(Prop::forall(x.clone(), not_b.clone()));
    let each_not_b =
        Proof::modus_ponens(&all_not_b, &Proof::axiom4(not_b.clone(), x.clone(), x.clone())?)?;
    let each_not_a = Proof::modus_ponens(&each_not_b, &contra)?;
    let all_not_a = Proof::generalization(&each_not_a, x.clone());
    let monotone = deduction(&all_not_b, &all_not_a)?;

    let flipped = Proof::modus_ponens(
        &monotone,
        &not_to_not_intro(
            &Prop::forall(x.clone(), not_b),
            &Prop::forall(x.clone(), not_a),
        )?,
    )?;
    let chain = transitive(
        &transitive(
            &Proof::to_eval_axiom(Prop::exists(x.clone(), a.clone())),
            &flipped,
        )?,
        &Proof::from_eval_axiom(Prop::exists(x.clone(), b.clone())),
    )?;
    deduction(&hypothesis, &chain)
}

/// `⊢ ¬∀x p ⇒ ∃x ¬p`
pub fn not_forall_to_exist_not(x: &Variable, p: &Prop) -> Result<Proof, RuleError> {
    let p_core = p.eval();
    let doubled = Prop::not(Prop::not(p_core.clone()));
    let hypothesis = Proof::assumption(Prop::forall(x.clone(), doubled.clone()));
    let each = Proof::modus_ponens(&hypothesis, &Proof::axiom4(doubled.clone(), x.clone(), x.clone())?)?;
    let simplified = Proof::modus_ponens(&each, &double_not_elim(&p_core)?)?;
    let all = Proof::generalization(&simplified, x.clone());
    let collapse = deduction(&hypothesis, &all)?;

    let flipped = Proof::modus_ponens(
        &collapse,
        &not_to_not_intro(
            &Prop::forall(x.clone(), doubled),
            &Prop::forall(x.clone(), p_core),
        )?,
    )?;
    transitive(
        &transitive(
            &Proof::to_eval_axiom(Prop::not(Prop::forall(x.clone(), p.clone()))),
            &flipped,
        )?,
        &Proof::from_eval_axiom(Prop::exists(x.clone(), Prop::not(p.clone()))),
    )
}

/// `⊢ ¬∃x p ⇒ ∀x ¬p`
pub fn not_exist_to_forall_not(x: &Variable, p: &Prop) -> Result<Proof, RuleError> {
    let p_core = p.eval();
    let negated = Prop::not(p_core.clone());
    let all_negated_core = Prop::forall(x.clone(), negated.clone());

    let bridge_in = Proof::to_eval_axiom(Prop::not(Prop::exists(x.clone(), p.clone())));
    let undouble = double_not_elim(&all_negated_core)?;

    let hypothesis = Proof::assumption(all_negated_core);
    let each_core = Proof::modus_ponens(&hypothesis, &Proof::axiom4(negated, x.clone(), x.clone())?)?;
    let each = Proof::modus_ponens(&each_core, &Proof::from_eval_axiom(Prop::not(p.clone())))?;
    let all = Proof::generalization(&each, x.clone());
    let rebuild = deduction(&hypothesis, &all)?;

    transitive(&transitive(&bridge_in, &undouble)?, &rebuild)
}

/// Rename the bound variable of an existential: `⊢ ∃x p ⇒ ∃y p[x ↦ y]`.
/// Requires `y` to occur nowhere in `p`.
pub fn exist_rename_var(p: &Prop, x: &Variable, y: &Variable) -> Result<Proof, RuleError> {
    let mut occurring = std::collections::BTreeSet::new();
    p.collect_vars(&mut occurring);
    if occurring.contains(y) {
        return Err(RuleError::new(
            RuleErrorKind::BoundCapture,
            format!("exist_rename_var: {} occurs in {}", y, p),
        ));
    }
    if x == y {
        return reflexive(&Prop::exists(x.clone(), p.clone()));
    }
    let p_core = p.eval();
    let q_core = p_core.substitute(x, y);
    let not_p = Prop::not(p_core.clone());
    let not_q = Prop::not(q_core.clone());

    let hypothesis = Proof::assumption(Prop::forall(y.clone(), not_q.clone()));
    let back = Proof::modus_ponens(&hypothesis, &Proof::axiom4(not_q.clone(), y.clone(), x.clone())?)?;
    let all = Proof::generalization(&back, x.clone());
    let renamed = deduction(&hypothesis, &all)?;

    let flipped = Proof::modus_ponens(
        &renamed,
        &not_to_not_intro(
            &Prop::forall(y.clone(), not_q),
            &Prop::forall(x.clone(), not_p),
        )?,
    )?;
    transitive(
        &transitive(
            &Proof::to_eval_axiom(Prop::exists(x.clone(), p.clone())),
            &flipped,
        )?,
        &Proof::from_eval_axiom(Prop::exists(y.clone(), p.substitute(x, y))),
    )
}

/// `⊢ ((∃x a) ⇒ b) ⇔ ∀x (a ⇒ b)` when `x` is not free in `b` — moves an
/// existential antecedent past the implication.
pub fn not_free_var_imply_exist_iff_forall(
    a: &Prop,
    b: &Prop,
    x: &Variable,
) -> Result<Proof, RuleError> {
    if b.is_free(x) {
        return Err(RuleError::new(
            RuleErrorKind::FreeVarViolation,
            format!("not_free_var_imply_exist_iff_forall: {} is free in {}", x, b),
        ));
    }
    let exists_a = Prop::exists(x.clone(), a.clone());

    // (∃x a ⇒ b) ⇒ ∀x (a ⇒ b)
    let hyp_elim = Proof::assumption(Prop::imply(exists_a.clone(), b.clone()));
    let hyp_a = Proof::assumption(a.clone());
    let witnessed = Proof::modus_ponens(&hyp_a, &exist_intro(a, x, x)?)?;
    let concluded = Proof::modus_ponens(&witnessed, &hyp_elim)?;
    let pointwise = deduction(&hyp_a, &concluded)?;
    let generalized = Proof::generalization(&pointwise, x.clone());
    let forward = deduction(&hyp_elim, &generalized)?;

    // ∀x (a ⇒ b) ⇒ (∃x a ⇒ b)
    let a_core = a.eval();
    let pointwise_prop = Prop::imply(a.clone(), b.clone());
    let hyp_all = Proof::assumption(Prop::forall(x.clone(), pointwise_prop.clone()));
    let step = Proof::modus_ponens(
        &hyp_all,
        &Proof::axiom4(pointwise_prop, x.clone(), x.clone())?,
    )?;
    let step_core = transitive(&Proof::from_eval_axiom(a.clone()), &step)?;
    let contra = Proof::modus_ponens(&step_core, &not_to_not_intro(&a_core, b)?)?;
    let all_contra = Proof::generalization(&contra, x.clone());
    let export = Proof::axiom5(
        Prop::not(b.clone()),
        Prop::not(a_core.clone()),
        x.clone(),
    )?;
    let pushed = Proof::modus_ponens(&all_contra, &export)?;
    let flipped = Proof::modus_ponens(
        &pushed,
        &not_to_not_intro(
            &Prop::not(b.clone()),
            &Prop::forall(x.clone(), Prop::not(a_core)),
        )?,
    )?;
    let unwrapped = transitive(&flipped, &double_not_elim(b)?)?;
    let chain = transitive(&Proof::to_eval_axiom(exists_a), &unwrapped)?;
    let backward = deduction(&hyp_all, &chain)?;

    iff_intro(&forward, &backward)
}
