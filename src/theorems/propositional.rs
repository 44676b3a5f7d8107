use crate::models::{Prop, Proof, RuleError, RuleErrorKind};

use super::deduction::deduction;

fn expect_imply(proof: &Proof, rule: &str) -> Result<(Prop, Prop), RuleError> {
    match proof.prop() {
        Prop::Imply(l, r) => Ok(((**l).clone(), (**r).clone())),
        other => Err(RuleError::new(
            RuleErrorKind::NotImply,
            format!("{}: {} is not an implication", rule, other),
        )),
    }
}

/// `⊢ p ⇒ p`
pub fn reflexive(p: &Prop) -> Result<Proof, RuleError> {
    let p2p = Prop::imply(p.clone(), p.clone());
    let s1 = Proof::axiom1(p.clone(), p.clone());
    let s2 = Proof::axiom1(p.clone(), p2p.clone());
    let s3 = Proof::axiom2(p.clone(), p2p, p.clone());
    let s4 = Proof::modus_ponens(&s2, &s3)?;
    Proof::modus_ponens(&s1, &s4)
}

/// From `a ⇒ b` and `b ⇒ c`, derive `a ⇒ c`.
pub fn transitive(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = expect_imply(x, "transitive")?;
    let (b2, c) = expect_imply(y, "transitive")?;
    if b != b2 {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("transitive: {} does not match {}", b, b2),
        ));
    }
    let s1 = Proof::modus_ponens(y, &Proof::axiom1(y.prop().clone(), a.clone()))?;
    let s2 = Proof::axiom2(a, b, c);
    let s3 = Proof::modus_ponens(&s1, &s2)?;
    Proof::modus_ponens(x, &s3)
}

/// From `a ⇒ (b ⇒ c)`, derive `b ⇒ (a ⇒ c)`.
pub fn imply_exchange(x: &Proof) -> Result<Proof, RuleError> {
    let (a, rest) = expect_imply(x, "imply_exchange")?;
    let (b, c) = match rest {
        Prop::Imply(l, r) => ((*l).clone(), (*r).clone()),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("imply_exchange: consequent {} is not an implication", other),
            ))
        }
    };
    let s1 = Proof::axiom1(b.clone(), a.clone());
    let s2 = Proof::modus_ponens(x, &Proof::axiom2(a, b, c))?;
    transitive(&s1, &s2)
}

/// From `a ⇒ (b ⇒ c)` and `b`, derive `a ⇒ c`.
pub fn reduction(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (a, rest) = expect_imply(x, "reduction")?;
    let b = match &rest {
        Prop::Imply(l, _) => (**l).clone(),
        other => {
            return Err(RuleError::new(
                RuleErrorKind::NotImply,
                format!("reduction: consequent {} is not an implication", other),
            ))
        }
    };
    if *y.prop() != b {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("reduction: {} does not match {}", y.prop(), b),
        ));
    }
    let antecedent = Proof::assumption(a);
    let inner = Proof::modus_ponens(&antecedent, x)?;
    let conclusion = Proof::modus_ponens(y, &inner)?;
    deduction(&antecedent, &conclusion)
}

/// `⊢ ¬¬p ⇒ p`
pub fn double_not_elim(p: &Prop) -> Result<Proof, RuleError> {
    let not_p = Prop::not(p.clone());
    let not_not_p = Prop::not(not_p.clone());
    let s1 = Proof::axiom3(p.clone(), not_p.clone());
    let s2 = reflexive(&not_p)?;
    let s3 = reduction(&s1, &s2)?;
    let s4 = Proof::axiom1(not_not_p, not_p);
    transitive(&s4, &s3)
}

/// `⊢ p ⇒ ¬¬p`
pub fn double_not_intro(p: &Prop) -> Result<Proof, RuleError> {
    let not_p = Prop::not(p.clone());
    let not_not_p = Prop::not(not_p.clone());
    let triple_not_p = Prop::not(not_not_p.clone());
    let s1 = Proof::axiom3(not_not_p, p.clone());
    let s2 = double_not_elim(&not_p)?;
    let s3 = Proof::modus_ponens(&s2, &s1)?;
    let s4 = Proof::axiom1(p.clone(), triple_not_p);
    transitive(&s4, &s3)
}

/// `⊢ (¬a ⇒ ¬b) ⇒ (b ⇒ a)`
pub fn not_to_not_elim(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let s1 = Proof::axiom1(b.clone(), Prop::not(a.clone()));
    let s2 = imply_exchange(&Proof::axiom3(a.clone(), b.clone()))?;
    let s3 = transitive(&s1, &s2)?;
    imply_exchange(&s3)
}

/// `⊢ (a ⇒ b) ⇒ (¬b ⇒ ¬a)`
pub fn not_to_not_intro(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let hypothesis = Proof::assumption(Prop::imply(a.clone(), b.clone()));
    let s1 = transitive(&double_not_elim(a)?, &hypothesis)?;
    let s2 = transitive(&s1, &double_not_intro(b)?)?;
    let s3 = not_to_not_elim(&Prop::not(a.clone()), &Prop::not(b.clone()))?;
    let s4 = Proof::modus_ponens(&s2, &s3)?;
    deduction(&hypothesis, &s4)
}

/// Clavius' law: `⊢ (¬p ⇒ p) ⇒ p`.
pub fn clavius(p: &Prop) -> Result<Proof, RuleError> {
    let s1 = reflexive(&Prop::not(p.clone()))?;
    let s2 = Proof::axiom3(p.clone(), p.clone());
    Proof::modus_ponens(&s1, &s2)
}

/// From `c ⇒ p` and `c ⇒ ¬p`, derive `¬c`: a hypothesis with
/// contradictory consequences is refuted.
pub fn reductio(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (c, p) = expect_imply(x, "reductio")?;
    let (c2, not_p) = expect_imply(y, "reductio")?;
    if c != c2 {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("reductio: {} does not match {}", c, c2),
        ));
    }
    if not_p != Prop::not(p.clone()) {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("reductio: {} is not the negation of {}", not_p, p),
        ));
    }
    let not_c = Prop::not(c.clone());
    let s1 = transitive(x, &double_not_intro(&p)?)?;
    let s2 = Proof::modus_ponens(y, &not_to_not_intro(&c, &not_p)?)?;
    let s3 = transitive(&s1, &s2)?;
    let s4 = transitive(&double_not_elim(&c)?, &s3)?;
    Proof::modus_ponens(&s4, &clavius(&not_c)?)
}

/// `⊢ ¬a ⇒ (a ⇒ b)` — from a refuted antecedent anything follows.
pub fn negative_imply(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let not_b = Prop::not(b.clone());
    let pos = Proof::assumption(a.clone());
    let neg = Proof::assumption(Prop::not(a.clone()));
    let s1 = Proof::modus_ponens(&pos, &Proof::axiom1(a.clone(), not_b.clone()))?;
    let s2 = Proof::modus_ponens(&neg, &Proof::axiom1(Prop::not(a.clone()), not_b))?;
    let s3 = Proof::axiom3(b.clone(), a.clone());
    let s4 = Proof::modus_ponens(&s1, &Proof::modus_ponens(&s2, &s3)?)?;
    let s5 = deduction(&pos, &s4)?;
    deduction(&neg, &s5)
}

/// From `a ⇒ b` and `¬a ⇒ b`, derive `b`: the two horns of a case split
/// agree, so their conclusion holds outright.
pub fn contradiction_elim(x: &Proof, y: &Proof) -> Result<Proof, RuleError> {
    let (a, b) = expect_imply(x, "contradiction_elim")?;
    let (not_a, b2) = expect_imply(y, "contradiction_elim")?;
    if not_a != Prop::not(a.clone()) {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("contradiction_elim: {} is not the negation of {}", not_a, a),
        ));
    }
    if b != b2 {
        return Err(RuleError::new(
            RuleErrorKind::AntecedentMismatch,
            format!("contradiction_elim: {} does not match {}", b, b2),
        ));
    }
    let s1 = Proof::modus_ponens(x, &not_to_not_intro(&a, &b)?)?;
    let s2 = Proof::modus_ponens(y, &not_to_not_intro(&not_a, &b)?)?;
    let s3 = Proof::axiom3(b.clone(), not_a);
    let s4 = Proof::modus_ponens(&s2, &s3)?;
    Proof::modus_ponens(&s1, &s4)
}

/// `⊢ (a ⇒ b) ⇒ ((¬a ⇒ b) ⇒ b)` — the case-split schema.
pub fn contradiction(a: &Prop, b: &Prop) -> Result<Proof, RuleError> {
    let pos = Proof::assumption(Prop::imply(a.clone(), b.clone()));
    let neg = Proof::assumption(Prop::imply(Prop::not(a.clone()), b.clone()));
    let merged = contradiction_elim(&pos, &neg)?;
    let s1 = deduction(&neg, &merged)?;
    deduction(&pos, &s1)
}
