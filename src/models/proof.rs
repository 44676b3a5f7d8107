use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use super::prop::Prop;
use super::variable::Variable;

/// Type alias for shared ownership of proofs using Arc. Proof terms form a
/// DAG; sub-proofs referenced more than once are stored once.
pub type SharedProof = Arc<Proof>;

/// Which side condition or shape requirement a rule violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleErrorKind {
    /// An operand that must be an implication (or other required node kind)
    /// is not.
    NotImply,
    /// Modus ponens antecedent does not match, or two operands that must
    /// share a component do not.
    AntecedentMismatch,
    /// A substituted variable would be captured by a quantifier.
    BoundCapture,
    /// A variable required to be non-free is free.
    FreeVarViolation,
    /// A proof of an unexpected shape was fed to a meta-rule.
    UnknownProofKind,
    /// Completeness could not close every assumption; the input is not a
    /// tautology.
    NotATautology,
}

/// Error raised by a kernel constructor or derived rule. Reported
/// synchronously at the offending construction; no partial proof is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleError {
    pub kind: RuleErrorKind,
    pub message: String,
}

impl RuleError {
    pub fn new(kind: RuleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuleError {}

/// Identifies the constructor that built a proof. `ModusPonens` and
/// `Generalization` keep structured references to their inputs; the
/// deduction theorem recurses into exactly those.
#[derive(Debug, Clone)]
pub enum ProofKind {
    Assumption,
    Axiom1,
    Axiom2,
    Axiom3,
    Axiom4,
    Axiom5,
    ModusPonens {
        minor: SharedProof,
        major: SharedProof,
    },
    Generalization {
        subproof: SharedProof,
        var: Variable,
    },
    ToEvalAxiom,
    FromEvalAxiom,
}

/// A proof object. Carries the proved proposition and the set of open
/// assumptions it depends on. The fields are private: the associated
/// constructors below are the only way to build one, which keeps the
/// kernel closed.
///
/// Two proofs are equal iff their conclusions are structurally equal; the
/// assumption set does not enter equality.
#[derive(Debug, Clone)]
pub struct Proof {
    prop: Prop,
    kind: ProofKind,
    assumptions: BTreeSet<Prop>,
}

impl PartialEq for Proof {
    fn eq(&self, other: &Self) -> bool {
        self.prop == other.prop
    }
}

impl Eq for Proof {}

impl Proof {
    fn closed(prop: Prop, kind: ProofKind) -> Proof {
        Proof {
            prop,
            kind,
            assumptions: BTreeSet::new(),
        }
    }

    /// An assumption stands for its own conclusion and contributes itself
    /// to its own assumption set.
    pub fn assumption(p: Prop) -> Proof {
        let assumptions = BTreeSet::from([p.clone()]);
        Proof {
            prop: p,
            kind: ProofKind::Assumption,
            assumptions,
        }
    }

    /// `⊢ p1 ⇒ (p2 ⇒ p1)`
    pub fn axiom1(p1: Prop, p2: Prop) -> Proof {
        let prop = Prop::imply(p1.clone(), Prop::imply(p2, p1));
        Proof::closed(prop, ProofKind::Axiom1)
    }

    /// `⊢ (p1 ⇒ (p2 ⇒ p3)) ⇒ ((p1 ⇒ p2) ⇒ (p1 ⇒ p3))`
    pub fn axiom2(p1: Prop, p2: Prop, p3: Prop) -> Proof {
        let nested = Prop::imply(p1.clone(), Prop::imply(p2.clone(), p3.clone()));
        let distributed = Prop::imply(
            Prop::imply(p1.clone(), p2),
            Prop::imply(p1, p3),
        );
        Proof::closed(Prop::imply(nested, distributed), ProofKind::Axiom2)
    }

    /// `⊢ (¬p1 ⇒ ¬p2) ⇒ ((¬p1 ⇒ p2) ⇒ p1)`
    pub fn axiom3(p1: Prop, p2: Prop) -> Proof {
        let contrapositive = Prop::imply(Prop::not(p1.clone()), Prop::not(p2.clone()));
        let affirmative = Prop::imply(Prop::not(p1.clone()), p2);
        let prop = Prop::imply(contrapositive, Prop::imply(affirmative, p1));
        Proof::closed(prop, ProofKind::Axiom3)
    }

    /// Universal instantiation: `⊢ ∀x p ⇒ p[x ↦ y]`. Requires `y` not
    /// bound in `p`, otherwise the substitution would be captured.
    pub fn axiom4(p: Prop, x: Variable, y: Variable) -> Result<Proof, RuleError> {
        if p.is_bounded(&y) {
            return Err(RuleError::new(
                RuleErrorKind::BoundCapture,
                format!("axiom4: {} is bound in {}", y, p),
            ));
        }
        let instantiated = p.substitute(&x, &y);
        let prop = Prop::imply(Prop::forall(x, p), instantiated);
        Ok(Proof::closed(prop, ProofKind::Axiom4))
    }

    /// `⊢ ∀x (p1 ⇒ p2) ⇒ (p1 ⇒ ∀x p2)`. Requires `x` not free in `p1`.
    pub fn axiom5(p1: Prop, p2: Prop, x: Variable) -> Result<Proof, RuleError> {
        if p1.is_free(&x) {
            return Err(RuleError::new(
                RuleErrorKind::FreeVarViolation,
                format!("axiom5: {} is free in {}", x, p1),
            ));
        }
        let quantified = Prop::forall(x.clone(), Prop::imply(p1.clone(), p2.clone()));
        let exported = Prop::imply(p1, Prop::forall(x, p2));
        Ok(Proof::closed(Prop::imply(quantified, exported), ProofKind::Axiom5))
    }

    /// From `a` and `a ⇒ b`, conclude `b`. The assumption set is the union
    /// of the operands'.
    pub fn modus_ponens(minor: &Proof, major: &Proof) -> Result<Proof, RuleError> {
        let (antecedent, consequent) = match major.prop() {
            Prop::Imply(l, r) => (l.clone(), r.clone()),
            other => {
                return Err(RuleError::new(
                    RuleErrorKind::NotImply,
                    format!("modus_ponens: {} is not an implication", other),
                ))
            }
        };
        if *minor.prop() != *antecedent {
            return Err(RuleError::new(
                RuleErrorKind::AntecedentMismatch,
                format!(
                    "modus_ponens: antecedent {} does not match operand {}",
                    antecedent,
                    minor.prop()
                ),
            ));
        }
        let mut assumptions = minor.assumptions.clone();
        assumptions.extend(major.assumptions.iter().cloned());
        Ok(Proof {
            prop: (*consequent).clone(),
            kind: ProofKind::ModusPonens {
                minor: Arc::new(minor.clone()),
                major: Arc::new(major.clone()),
            },
            assumptions,
        })
    }

    /// From `a`, conclude `∀x a`. No side condition at the kernel level;
    /// the deduction theorem imposes its own restriction.
    pub fn generalization(subproof: &Proof, x: Variable) -> Proof {
        Proof {
            prop: Prop::forall(x.clone(), subproof.prop.clone()),
            kind: ProofKind::Generalization {
                subproof: Arc::new(subproof.clone()),
                var: x,
            },
            assumptions: subproof.assumptions.clone(),
        }
    }

    /// `⊢ p ⇒ p.eval()` — the bridge from an extended form into its core
    /// expansion.
    pub fn to_eval_axiom(p: Prop) -> Proof {
        let expanded = p.eval();
        Proof::closed(Prop::imply(p, expanded), ProofKind::ToEvalAxiom)
    }

    /// `⊢ p.eval() ⇒ p` — the bridge back from the core expansion.
    pub fn from_eval_axiom(p: Prop) -> Proof {
        let expanded = p.eval();
        Proof::closed(Prop::imply(expanded, p), ProofKind::FromEvalAxiom)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The proved conclusion.
    pub fn prop(&self) -> &Prop {
        &self.prop
    }

    /// The constructor that built this proof.
    pub fn kind(&self) -> &ProofKind {
        &self.kind
    }

    /// The propositions of the open assumptions this proof depends on,
    /// in their natural order.
    pub fn assumptions(&self) -> &BTreeSet<Prop> {
        &self.assumptions
    }

    /// Whether this proof depends on the given assumption.
    pub fn depends_on(&self, assumption: &Proof) -> bool {
        self.assumptions.contains(assumption.prop())
    }

    /// Whether the proof has no open assumptions.
    pub fn is_closed(&self) -> bool {
        self.assumptions.is_empty()
    }

    /// Number of distinct proof steps, counting shared sub-proofs once.
    pub fn step_count(&self) -> usize {
        fn walk(proof: &Proof, seen: &mut HashSet<*const Proof>) -> usize {
            let mut count = 1;
            match proof.kind() {
                ProofKind::ModusPonens { minor, major } => {
                    for child in [minor, major] {
                        if seen.insert(Arc::as_ptr(child)) {
                            count += walk(child, seen);
                        }
                    }
                }
                ProofKind::Generalization { subproof, .. } => {
                    if seen.insert(Arc::as_ptr(subproof)) {
                        count += walk(subproof, seen);
                    }
                }
                _ => {}
            }
            count
        }
        walk(self, &mut HashSet::new())
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.assumptions.is_empty() {
            write!(f, "⊢ {}", self.prop)
        } else {
            let context = self
                .assumptions
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{} ⊢ {}", context, self.prop)
        }
    }
}
