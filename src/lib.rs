//! Hilbert-style proof kernel and derived-theorem library for classical
//! first-order logic.
//!
//! Propositions ([`models::Prop`]) are built from variables with `¬`, `⇒`
//! and `∀`, plus the extended forms `∧`, `∨`, `⇔` and `∃` defined by
//! reduction into the core. Proof objects ([`models::Proof`]) can only be
//! produced by the kernel constructors — the five axiom schemas, modus
//! ponens, generalization, assumptions and the two eval bridges — so a
//! `Proof` in hand is evidence that its conclusion follows from its open
//! assumptions. Everything in [`theorems`] and [`services`] is a pure
//! composition of kernel steps on top.
//!
//! ```
//! use hilbert_fol_lib::models::{Prop, Proof};
//! use hilbert_fol_lib::theorems::deduction;
//!
//! let a = Proof::assumption(Prop::var("a"));
//! let rule = Proof::assumption(Prop::imply(Prop::var("a"), Prop::var("b")));
//! let b = Proof::modus_ponens(&a, &rule).unwrap();
//!
//! let conditional = deduction(&a, &b).unwrap();
//! assert_eq!(*conditional.prop(), Prop::imply(Prop::var("a"), Prop::var("b")));
//! assert!(!conditional.depends_on(&a));
//! ```

pub mod models;
pub mod theorems;
pub mod services;
