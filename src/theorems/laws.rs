//! Closed proofs of the classical named laws. Each is a schema over
//! arbitrary propositions; the ones involving extended connectives work
//! through the eval bridges like the rest of the connective layer.

use crate::models::{Prop, Proof, RuleError, Variable};

use super::connectives::{
    and_elim, and_elim_left, and_intro, iff_intro, or_elim, or_intro_left, or_intro_right,
};
use super::deduction::deduction;
use super::first_order::not_free_var_forall_intro;
use super::propositional::{
    contradiction_elim, double_not_elim, double_not_intro, negative_imply, not_to_not_intro,
    reductio, reflexive, transitive,
};

/// Law of the excluded middle: `⊢ a ∨ ¬a`.
pub fn excluded_middle(a: &Prop) -> Result<Proof, RuleError> {
    // eval(a ∨ ¬a) is ¬a' ⇒ ¬a', which is an instance of reflexivity
    let core = reflexive(&Prop::not(a.eval()))?;
    Proof::modus_ponens(
        &core,
        &Proof::from_eval_axiom(Prop::or(a.clone(), Prop::not(a.clone()))),
    )
}

/// Law of non-contradiction: `⊢ ¬(a ∧ ¬a)`.
pub fn non_contradiction(a: &Prop) -> Result<Proof, RuleError> {
    // eval(¬(a ∧ ¬a)) is ¬¬(a' ⇒ ¬¬a')
    let inner = double_not_intro(&a.eval())?;
    let doubled = Proof::modus_ponens(&inner, &double_not_intro(inner.prop())?)?;
    Proof::modus_ponens(
        &doubled,
        &Proof::from_eval_axiom(Prop::not(Prop::and(a.clone(), Prop::not(a.clone())))),
    )
}

/// Hypothetical syllogism as a schema: `⊢ (a ⇒ b) ⇒ ((b ⇒ c) ⇒ (a ⇒ c))`.
pub fn hypothetical_syllogism(a: &Prop, b: &Prop, c: &Prop) -> Result<Proof, RuleError> {
    let first = Proof::assumption(Prop::imply(a.clone(), b.clone()));
    let second = Proof::assumption(Prop::imply(b.clone(), c.clone()));
    let chained = transitive(&first, &second)?;
    let inner = deduction(&second, &chained)?;
    deduction(&first, &inner)
}

/// Disjunctive syllogism: `⊢ (a ∨ b) ⇒ (¬a ⇒ b)`.
pub fn disjunctive_syllogism(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let disj = Prop::or(a.clone(), b.clone());
    let hyp_or = Proof::assumption(disj.clone());
    let hyp_not = Proof::assumption(Prop::not(a.clone()));
    let expanded = Proof::modus_ponens(&hyp_or, &Proof::to_eval_axiom(disj))?;
    let negated_core = Proof::modus_ponens(&hyp_not, &Proof::to_eval_axiom(Prop::not(a.clone())))?;
    let conclusion_core = Proof::modus_ponens(&negated_core, &expanded)?;
    let conclusion = Proof::modus_ponens(&conclusion_core, &Proof::from_eval_axiom(b.clone()))?;
    let inner = deduction(&hyp_not, &conclusion)?;
    deduction(&hyp_or, &inner)
}

/// Constructive dilemma:
/// `⊢ (a ⇒ c) ⇒ ((b ⇒ d) ⇒ ((a ∨ b) ⇒ (c ∨ d)))`.
pub fn constructive_dilemma(
    a: &Prop,
    b: &Prop,
    c: &Prop,
    d: &Prop,
) -> Result<Proof, RuleError> {
    let first = Proof::assumption(Prop::imply(a.clone(), c.clone()));
    let second = Proof::assumption(Prop::imply(b.clone(), d.clone()));
    let left = transitive(&first, &or_intro_left(c, d)?)?;
    let right = transitive(&second, &or_intro_right(c, d)?)?;
    let merged = or_elim(&left, &right)?;
    let inner = deduction(&second, &merged)?;
    deduction(&first, &inner)
}

/// Peirce's law: `⊢ ((a ⇒ b) ⇒ a) ⇒ a`.
pub fn peirce(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let hypothesis = Proof::assumption(Prop::imply(
        Prop::imply(a.clone(), b.clone()),
        a.clone(),
    ));
    let negative = Proof::assumption(Prop::not(a.clone()));
    let vacuous = Proof::modus_ponens(&negative, &negative_imply(a, b)?)?;
    let affirmed = Proof::modus_ponens(&vacuous, &hypothesis)?;
    let from_negative = deduction(&negative, &affirmed)?;
    let merged = contradiction_elim(&reflexive(a)?, &from_negative)?;
    deduction(&hypothesis, &merged)
}

/// Material implication: `⊢ (a ⇒ b) ⇔ (¬a ∨ b)`.
pub fn material_implication(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let disj = Prop::or(Prop::not(a.clone()), b.clone());
    let a_core = a.eval();

    let hyp_imply = Proof::assumption(Prop::imply(a.clone(), b.clone()));
    // eval(¬a ∨ b) is ¬¬a' ⇒ b'
    let undouble = double_not_elim(&a_core)?;
    let chained = transitive(
        &transitive(&undouble, &Proof::from_eval_axiom(a.clone()))?,
        &hyp_imply,
    )?;
    let core = transitive(&chained, &Proof::to_eval_axiom(b.clone()))?;
    let as_disj = Proof::modus_ponens(&core, &Proof::from_eval_axiom(disj.clone()))?;
    let forward = deduction(&hyp_imply, &as_disj)?;

    let hyp_disj = Proof::assumption(disj.clone());
    let hyp_a = Proof::assumption(a.clone());
    let expanded = Proof::modus_ponens(&hyp_disj, &Proof::to_eval_axiom(disj))?;
    let a_eval = Proof::modus_ponens(&hyp_a, &Proof::to_eval_axiom(a.clone()))?;
    let doubled = Proof::modus_ponens(&a_eval, &double_not_intro(&a_core)?)?;
    let b_core = Proof::modus_ponens(&doubled, &expanded)?;
    let concluded = Proof::modus_ponens(&b_core, &Proof::from_eval_axiom(b.clone()))?;
    let pointwise = deduction(&hyp_a, &concluded)?;
    let backward = deduction(&hyp_disj, &pointwise)?;

    iff_intro(&forward, &backward)
}

/// Exportation: `⊢ ((a ∧ b) ⇒ c) ⇔ (a ⇒ (b ⇒ c))`.
pub fn exportation(a: &Prop, b: &Prop, c: &Prop) -> Result<Proof, RuleError> {
    let conj = Prop::and(a.clone(), b.clone());

    let hyp_joint = Proof::assumption(Prop::imply(conj.clone(), c.clone()));
    let hyp_a = Proof::assumption(a.clone());
    let hyp_b = Proof::assumption(b.clone());
    let paired = and_intro(&hyp_a, &hyp_b)?;
    let concluded = Proof::modus_ponens(&paired, &hyp_joint)?;
    let export_b = deduction(&hyp_b, &concluded)?;
    let export_a = deduction(&hyp_a, &export_b)?;
    let forward = deduction(&hyp_joint, &export_a)?;

    let hyp_curried = Proof::assumption(Prop::imply(
        a.clone(),
        Prop::imply(b.clone(), c.clone()),
    ));
    let hyp_conj = Proof::assumption(conj.clone());
    let left = Proof::modus_ponens(&hyp_conj, &and_elim_left(a, b)?)?;
    let right = Proof::modus_ponens(&hyp_conj, &and_elim(a, b)?)?;
    let applied = Proof::modus_ponens(&right, &Proof::modus_ponens(&left, &hyp_curried)?)?;
    let import = deduction(&hyp_conj, &applied)?;
    let backward = deduction(&hyp_curried, &import)?;

    iff_intro(&forward, &backward)
}

/// De Morgan: `⊢ ¬(a ∧ b) ⇔ (¬a ∨ ¬b)`.
pub fn de_morgan_not_and(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let conj = Prop::and(a.clone(), b.clone());
    let disj = Prop::or(Prop::not(a.clone()), Prop::not(b.clone()));
    let a_core = a.eval();
    let b_core = b.eval();

    // ¬(a ∧ b) ⇒ (¬a ∨ ¬b): under ¬¬a', the pair a ∧ b follows from b',
    // so ¬(a ∧ b) refutes b'. That is exactly eval(¬a ∨ ¬b).
    let hyp_neg = Proof::assumption(Prop::not(conj.clone()));
    let hyp_wit = Proof::assumption(Prop::not(Prop::not(a_core.clone())));
    let hyp_b = Proof::assumption(b_core.clone());
    let a_eval = Proof::modus_ponens(&hyp_wit, &double_not_elim(&a_core)?)?;
    let a_full = Proof::modus_ponens(&a_eval, &Proof::from_eval_axiom(a.clone()))?;
    let b_full = Proof::modus_ponens(&hyp_b, &Proof::from_eval_axiom(b.clone()))?;
    let paired = and_intro(&a_full, &b_full)?;
    let entails = deduction(&hyp_b, &paired)?;
    let contraposed = Proof::modus_ponens(&entails, &not_to_not_intro(&b_core, &conj)?)?;
    let not_b_core = Proof::modus_ponens(&hyp_neg, &contraposed)?;
    let pointwise = deduction(&hyp_wit, &not_b_core)?;
    let as_disj = Proof::modus_ponens(&pointwise, &Proof::from_eval_axiom(disj.clone()))?;
    let forward = deduction(&hyp_neg, &as_disj)?;

    // (¬a ∨ ¬b) ⇒ ¬(a ∧ b): from the conjunction both a' and ¬b' would
    // follow, which is absurd.
    let hyp_disj = Proof::assumption(disj.clone());
    let hyp_conj = Proof::assumption(conj.clone());
    let expanded = Proof::modus_ponens(&hyp_disj, &Proof::to_eval_axiom(disj))?;
    let a_of = Proof::modus_ponens(&hyp_conj, &and_elim_left(a, b)?)?;
    let b_of = Proof::modus_ponens(&hyp_conj, &and_elim(a, b)?)?;
    let a_eval2 = Proof::modus_ponens(&a_of, &Proof::to_eval_axiom(a.clone()))?;
    let doubled = Proof::modus_ponens(&a_eval2, &double_not_intro(&a_core)?)?;
    let not_b_eval = Proof::modus_ponens(&doubled, &expanded)?;
    let b_eval = Proof::modus_ponens(&b_of, &Proof::to_eval_axiom(b.clone()))?;
    let to_b = deduction(&hyp_conj, &b_eval)?;
    let to_not_b = deduction(&hyp_conj, &not_b_eval)?;
    let backward_core = reductio(&to_b, &to_not_b)?;
    let backward = deduction(&hyp_disj, &backward_core)?;

    iff_intro(&forward, &backward)
}

/// De Morgan: `⊢ ¬(a ∨ b) ⇔ (¬a ∧ ¬b)`.
pub fn de_morgan_not_or(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let disj = Prop::or(a.clone(), b.clone());
    let conj = Prop::and(Prop::not(a.clone()), Prop::not(b.clone()));
    let a_core = a.eval();
    let b_core = b.eval();
    let disj_core = Prop::imply(Prop::not(a_core.clone()), b_core.clone());

    // ¬(a ∨ b) ⇒ (¬a ∧ ¬b): each disjunct alone would already give a ∨ b.
    let hyp_neg = Proof::assumption(Prop::not(disj.clone()));
    let neg_core = Proof::modus_ponens(&hyp_neg, &Proof::to_eval_axiom(Prop::not(disj.clone())))?;
    let from_a = transitive(
        &Proof::to_eval_axiom(a.clone()),
        &super::connectives::or_induction_left(&a_core, &b_core)?,
    )?;
    let not_a = Proof::modus_ponens(
        &neg_core,
        &Proof::modus_ponens(&from_a, &not_to_not_intro(a, &disj_core)?)?,
    )?;
    let from_b = transitive(
        &Proof::to_eval_axiom(b.clone()),
        &Proof::axiom1(b_core.clone(), Prop::not(a_core.clone())),
    )?;
    let not_b = Proof::modus_ponens(
        &neg_core,
        &Proof::modus_ponens(&from_b, &not_to_not_intro(b, &disj_core)?)?,
    )?;
    let paired = and_intro(&not_a, &not_b)?;
    let forward = deduction(&hyp_neg, &paired)?;

    // (¬a ∧ ¬b) ⇒ ¬(a ∨ b): the disjunction would contradict ¬b.
    let hyp_conj = Proof::assumption(conj.clone());
    let not_a_of = Proof::modus_ponens(
        &hyp_conj,
        &and_elim_left(&Prop::not(a.clone()), &Prop::not(b.clone()))?,
    )?;
    let not_b_of = Proof::modus_ponens(
        &hyp_conj,
        &and_elim(&Prop::not(a.clone()), &Prop::not(b.clone()))?,
    )?;
    let not_a_core = Proof::modus_ponens(&not_a_of, &Proof::to_eval_axiom(Prop::not(a.clone())))?;
    let not_b_core = Proof::modus_ponens(&not_b_of, &Proof::to_eval_axiom(Prop::not(b.clone())))?;
    let hyp_disj = Proof::assumption(disj.clone());
    let expanded = Proof::modus_ponens(&hyp_disj, &Proof::to_eval_axiom(disj.clone()))?;
    let b_under = Proof::modus_ponens(&not_a_core, &expanded)?;
    let to_b = deduction(&hyp_disj, &b_under)?;
    let to_not_b = deduction(&hyp_disj, &not_b_core)?;
    let backward_core = reductio(&to_b, &to_not_b)?;
    let backward = deduction(&hyp_conj, &backward_core)?;

    iff_intro(&forward, &backward)
}

/// Vacuous quantification: `⊢ (∀x a) ⇔ a` when `x` is not free in `a`.
pub fn vacuous_forall(a: &Prop, x: &Variable) -> Result<Proof, RuleError> {
    let backward = not_free_var_forall_intro(a, x)?;
    let forward = Proof::axiom4(a.clone(), x.clone(), x.clone())?;
    iff_intro(&forward, &backward)
}
