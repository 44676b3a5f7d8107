//! Semantic evaluation of quantifier-free propositions. The proof layer is
//! purely syntactic; this service answers the model-side question — does a
//! formula hold under an assignment, and is it a tautology — so that the
//! two can be checked against each other.

use std::collections::BTreeMap;

use crate::models::{Prop, Variable};

/// Largest variable count `is_tautology` will enumerate (2^20 rows).
pub const MAX_VARIABLES: usize = 20;

/// Truth value of `prop` under `assignment`. `None` if the proposition
/// contains a quantifier or a variable the assignment does not cover.
pub fn evaluate(prop: &Prop, assignment: &BTreeMap<Variable, bool>) -> Option<bool> {
    match prop {
        Prop::Var(v) => assignment.get(v).copied(),
        Prop::Not(p) => evaluate(p, assignment).map(|b| !b),
        Prop::Imply(l, r) => Some(!evaluate(l, assignment)? || evaluate(r, assignment)?),
        Prop::And(l, r) => Some(evaluate(l, assignment)? && evaluate(r, assignment)?),
        Prop::Or(l, r) => Some(evaluate(l, assignment)? || evaluate(r, assignment)?),
        Prop::Iff(l, r) => Some(evaluate(l, assignment)? == evaluate(r, assignment)?),
        Prop::Forall(..) | Prop::Exists(..) => None,
    }
}

/// Whether the proposition holds under every assignment. `None` for
/// quantified input or more than [`MAX_VARIABLES`] variables.
pub fn is_tautology(prop: &Prop) -> Option<bool> {
    if !prop.is_quantifier_free() {
        return None;
    }
    let vars: Vec<Variable> = prop.free_vars().into_iter().collect();
    if vars.len() > MAX_VARIABLES {
        return None;
    }
    for mask in 0u64..(1u64 << vars.len()) {
        let assignment: BTreeMap<Variable, bool> = vars
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), mask & (1 << i) != 0))
            .collect();
        match evaluate(prop, &assignment) {
            Some(true) => {}
            Some(false) => return Some(false),
            None => return None,
        }
    }
    Some(true)
}

/// The falsifying assignments of a proposition, if any. Empty for a
/// tautology; `None` under the same conditions as [`is_tautology`].
pub fn counterexamples(prop: &Prop) -> Option<Vec<BTreeMap<Variable, bool>>> {
    if !prop.is_quantifier_free() {
        return None;
    }
    let vars: Vec<Variable> = prop.free_vars().into_iter().collect();
    if vars.len() > MAX_VARIABLES {
        return None;
    }
    let mut found = Vec::new();
    for mask in 0u64..(1u64 << vars.len()) {
        let assignment: BTreeMap<Variable, bool> = vars
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), mask & (1 << i) != 0))
            .collect();
        if !evaluate(prop, &assignment)? {
            found.push(assignment);
        }
    }
    Some(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(pairs: &[(&str, bool)]) -> BTreeMap<Variable, bool> {
        pairs
            .iter()
            .map(|(name, value)| (Variable::new(*name), *value))
            .collect()
    }

    #[test]
    fn test_evaluate_connectives() {
        let p = Prop::imply(Prop::var("a"), Prop::var("b"));
        assert_eq!(evaluate(&p, &assign(&[("a", true), ("b", false)])), Some(false));
        assert_eq!(evaluate(&p, &assign(&[("a", false), ("b", false)])), Some(true));

        let q = Prop::iff(Prop::var("a"), Prop::not(Prop::var("a")));
        assert_eq!(evaluate(&q, &assign(&[("a", true)])), Some(false));
    }

    #[test]
    fn test_evaluate_extended_matches_expansion() {
        let p = Prop::and(Prop::var("a"), Prop::or(Prop::var("b"), Prop::var("c")));
        let expanded = p.eval();
        for mask in 0..8u32 {
            let assignment = assign(&[
                ("a", mask & 1 != 0),
                ("b", mask & 2 != 0),
                ("c", mask & 4 != 0),
            ]);
            assert_eq!(evaluate(&p, &assignment), evaluate(&expanded, &assignment));
        }
    }

    #[test]
    fn test_evaluate_rejects_quantifiers_and_gaps() {
        let q = Prop::forall(Variable::new("x"), Prop::var("x"));
        assert_eq!(evaluate(&q, &assign(&[("x", true)])), None);
        let p = Prop::var("a");
        assert_eq!(evaluate(&p, &assign(&[])), None);
    }

    #[test]
    fn test_is_tautology() {
        let p = Prop::imply(Prop::var("a"), Prop::var("a"));
        assert_eq!(is_tautology(&p), Some(true));

        let q = Prop::or(Prop::var("a"), Prop::not(Prop::var("a")));
        assert_eq!(is_tautology(&q), Some(true));

        let r = Prop::imply(Prop::var("a"), Prop::var("b"));
        assert_eq!(is_tautology(&r), Some(false));
    }

    #[test]
    fn test_counterexamples() {
        let p = Prop::imply(Prop::var("a"), Prop::var("b"));
        let found = counterexamples(&p).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], assign(&[("a", true), ("b", false)]));

        let t = Prop::imply(Prop::var("a"), Prop::var("a"));
        assert!(counterexamples(&t).unwrap().is_empty());
    }
}
