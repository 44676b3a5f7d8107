use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::variable::Variable;

/// Type alias for shared ownership of props using Arc.
/// Cloning a `Prop` copies one node; sub-trees are shared.
pub type SharedProp = Arc<Prop>;

/// A proposition of classical first-order logic over variables.
///
/// The first four variants are the core language; `And`, `Or`, `Iff` and
/// `Exists` are extended forms defined by reduction into the core via
/// [`Prop::eval`]. Equality is syntactic everywhere: an extended form is
/// never equal to its expansion. The eval axioms of the proof kernel are
/// the only bridge between the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Prop {
    Var(Variable),
    Not(SharedProp),
    Imply(SharedProp, SharedProp),
    Forall(Variable, SharedProp),
    And(SharedProp, SharedProp),
    Or(SharedProp, SharedProp),
    Iff(SharedProp, SharedProp),
    Exists(Variable, SharedProp),
}

impl Prop {
    /// Variable proposition from a name.
    pub fn var(name: &str) -> Prop {
        Prop::Var(Variable::new(name))
    }

    pub fn not(p: Prop) -> Prop {
        Prop::Not(Arc::new(p))
    }

    pub fn imply(lhs: Prop, rhs: Prop) -> Prop {
        Prop::Imply(Arc::new(lhs), Arc::new(rhs))
    }

    pub fn forall(x: Variable, body: Prop) -> Prop {
        Prop::Forall(x, Arc::new(body))
    }

    pub fn and(lhs: Prop, rhs: Prop) -> Prop {
        Prop::And(Arc::new(lhs), Arc::new(rhs))
    }

    pub fn or(lhs: Prop, rhs: Prop) -> Prop {
        Prop::Or(Arc::new(lhs), Arc::new(rhs))
    }

    pub fn iff(lhs: Prop, rhs: Prop) -> Prop {
        Prop::Iff(Arc::new(lhs), Arc::new(rhs))
    }

    pub fn exists(x: Variable, body: Prop) -> Prop {
        Prop::Exists(x, Arc::new(body))
    }

    // ─── Variable bookkeeping ────────────────────────────────────────────

    /// Whether `x` occurs free in this proposition.
    pub fn is_free(&self, x: &Variable) -> bool {
        match self {
            Prop::Var(v) => v == x,
            Prop::Not(p) => p.is_free(x),
            Prop::Imply(l, r) | Prop::And(l, r) | Prop::Or(l, r) | Prop::Iff(l, r) => {
                l.is_free(x) || r.is_free(x)
            }
            Prop::Forall(v, p) | Prop::Exists(v, p) => v != x && p.is_free(x),
        }
    }

    /// Whether `x` occurs bound, i.e. is the binder of some quantifier in
    /// this proposition.
    pub fn is_bounded(&self, x: &Variable) -> bool {
        match self {
            Prop::Var(_) => false,
            Prop::Not(p) => p.is_bounded(x),
            Prop::Imply(l, r) | Prop::And(l, r) | Prop::Or(l, r) | Prop::Iff(l, r) => {
                l.is_bounded(x) || r.is_bounded(x)
            }
            Prop::Forall(v, p) | Prop::Exists(v, p) => v == x || p.is_bounded(x),
        }
    }

    /// The set of free variables.
    pub fn free_vars(&self) -> BTreeSet<Variable> {
        match self {
            Prop::Var(v) => BTreeSet::from([v.clone()]),
            Prop::Not(p) => p.free_vars(),
            Prop::Imply(l, r) | Prop::And(l, r) | Prop::Or(l, r) | Prop::Iff(l, r) => {
                let mut set = l.free_vars();
                set.extend(r.free_vars());
                set
            }
            Prop::Forall(v, p) | Prop::Exists(v, p) => {
                let mut set = p.free_vars();
                set.remove(v);
                set
            }
        }
    }

    /// The set of bound variables (quantifier binders).
    pub fn bound_vars(&self) -> BTreeSet<Variable> {
        match self {
            Prop::Var(_) => BTreeSet::new(),
            Prop::Not(p) => p.bound_vars(),
            Prop::Imply(l, r) | Prop::And(l, r) | Prop::Or(l, r) | Prop::Iff(l, r) => {
                let mut set = l.bound_vars();
                set.extend(r.bound_vars());
                set
            }
            Prop::Forall(v, p) | Prop::Exists(v, p) => {
                let mut set = p.bound_vars();
                set.insert(v.clone());
                set
            }
        }
    }

    /// Every variable occurring anywhere, binders included.
    pub(crate) fn collect_vars(&self, out: &mut BTreeSet<Variable>) {
        match self {
            Prop::Var(v) => {
                out.insert(v.clone());
            }
            Prop::Not(p) => p.collect_vars(out),
            Prop::Imply(l, r) | Prop::And(l, r) | Prop::Or(l, r) | Prop::Iff(l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
            Prop::Forall(v, p) | Prop::Exists(v, p) => {
                out.insert(v.clone());
                p.collect_vars(out);
            }
        }
    }

    // ─── Transformations ─────────────────────────────────────────────────

    /// Replace every occurrence of variable `x` by `y`, free and bound
    /// alike: a quantifier binding `x` is rebound to `y`. Capture-permitting
    /// by contract; the call sites that care (Axiom4, ExistIntro) impose
    /// their side conditions before substituting.
    pub fn substitute(&self, x: &Variable, y: &Variable) -> Prop {
        if !self.is_free(x) && !self.is_bounded(x) {
            return self.clone();
        }
        match self {
            Prop::Var(v) => {
                if v == x {
                    Prop::Var(y.clone())
                } else {
                    self.clone()
                }
            }
            Prop::Not(p) => Prop::not(p.substitute(x, y)),
            Prop::Imply(l, r) => Prop::imply(l.substitute(x, y), r.substitute(x, y)),
            Prop::And(l, r) => Prop::and(l.substitute(x, y), r.substitute(x, y)),
            Prop::Or(l, r) => Prop::or(l.substitute(x, y), r.substitute(x, y)),
            Prop::Iff(l, r) => Prop::iff(l.substitute(x, y), r.substitute(x, y)),
            Prop::Forall(v, p) => {
                let binder = if v == x { y.clone() } else { v.clone() };
                Prop::forall(binder, p.substitute(x, y))
            }
            Prop::Exists(v, p) => {
                let binder = if v == x { y.clone() } else { v.clone() };
                Prop::exists(binder, p.substitute(x, y))
            }
        }
    }

    /// Replace every sub-tree structurally equal to `sub` by `rep`. Not
    /// capture-avoiding; extended nodes are rebuilt as extended nodes.
    pub fn replacement(&self, sub: &Prop, rep: &Prop) -> Prop {
        if self == sub {
            return rep.clone();
        }
        match self {
            Prop::Var(_) => self.clone(),
            Prop::Not(p) => Prop::not(p.replacement(sub, rep)),
            Prop::Imply(l, r) => Prop::imply(l.replacement(sub, rep), r.replacement(sub, rep)),
            Prop::And(l, r) => Prop::and(l.replacement(sub, rep), r.replacement(sub, rep)),
            Prop::Or(l, r) => Prop::or(l.replacement(sub, rep), r.replacement(sub, rep)),
            Prop::Iff(l, r) => Prop::iff(l.replacement(sub, rep), r.replacement(sub, rep)),
            Prop::Forall(v, p) => Prop::forall(v.clone(), p.replacement(sub, rep)),
            Prop::Exists(v, p) => Prop::exists(v.clone(), p.replacement(sub, rep)),
        }
    }

    /// Expand every extended form into the core language:
    ///
    /// - `p ∧ q` becomes `¬(p ⇒ ¬q)`
    /// - `p ∨ q` becomes `¬p ⇒ q`
    /// - `p ⇔ q` becomes `(p ⇒ q) ∧ (q ⇒ p)`, expanded one step further
    /// - `∃x p` becomes `¬∀x ¬p`
    ///
    /// Identity on core connectives (children still expand).
    pub fn eval(&self) -> Prop {
        match self {
            Prop::Var(_) => self.clone(),
            Prop::Not(p) => Prop::not(p.eval()),
            Prop::Imply(l, r) => Prop::imply(l.eval(), r.eval()),
            Prop::Forall(v, p) => Prop::forall(v.clone(), p.eval()),
            Prop::And(l, r) => Prop::not(Prop::imply(l.eval(), Prop::not(r.eval()))),
            Prop::Or(l, r) => Prop::imply(Prop::not(l.eval()), r.eval()),
            Prop::Iff(l, r) => {
                let forward = Prop::imply(l.eval(), r.eval());
                let backward = Prop::imply(r.eval(), l.eval());
                Prop::not(Prop::imply(forward, Prop::not(backward)))
            }
            Prop::Exists(v, p) => Prop::not(Prop::forall(v.clone(), Prop::not(p.eval()))),
        }
    }

    /// Whether the proposition contains no quantifier at any depth.
    pub fn is_quantifier_free(&self) -> bool {
        match self {
            Prop::Var(_) => true,
            Prop::Not(p) => p.is_quantifier_free(),
            Prop::Imply(l, r) | Prop::And(l, r) | Prop::Or(l, r) | Prop::Iff(l, r) => {
                l.is_quantifier_free() && r.is_quantifier_free()
            }
            Prop::Forall(..) | Prop::Exists(..) => false,
        }
    }

    /// Whether the proposition uses only the core connectives.
    pub fn is_core(&self) -> bool {
        match self {
            Prop::Var(_) => true,
            Prop::Not(p) => p.is_core(),
            Prop::Imply(l, r) => l.is_core() && r.is_core(),
            Prop::Forall(_, p) => p.is_core(),
            Prop::And(..) | Prop::Or(..) | Prop::Iff(..) | Prop::Exists(..) => false,
        }
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    fn precedence(&self) -> u8 {
        match self {
            Prop::Var(_) => 6,
            Prop::Not(_) | Prop::Forall(..) | Prop::Exists(..) => 5,
            Prop::And(..) => 4,
            Prop::Or(..) => 3,
            Prop::Imply(..) => 2,
            Prop::Iff(..) => 1,
        }
    }

    fn render(&self, ascii: bool) -> String {
        let wrap = |child: &Prop, is_left: bool| -> String {
            // Imply and Iff render right-associatively
            let needs = child.precedence() < self.precedence()
                || (child.precedence() == self.precedence()
                    && is_left
                    && matches!(self, Prop::Imply(..) | Prop::Iff(..)));
            let inner = child.render(ascii);
            if needs {
                format!("({})", inner)
            } else {
                inner
            }
        };
        match self {
            Prop::Var(v) => v.name().to_string(),
            Prop::Not(p) => format!("{}{}", if ascii { "~" } else { "¬" }, wrap(p, false)),
            Prop::Imply(l, r) => {
                format!("{} {} {}", wrap(l, true), if ascii { "->" } else { "⇒" }, wrap(r, false))
            }
            Prop::And(l, r) => {
                format!("{} {} {}", wrap(l, true), if ascii { "&" } else { "∧" }, wrap(r, false))
            }
            Prop::Or(l, r) => {
                format!("{} {} {}", wrap(l, true), if ascii { "|" } else { "∨" }, wrap(r, false))
            }
            Prop::Iff(l, r) => {
                format!("{} {} {}", wrap(l, true), if ascii { "<->" } else { "⇔" }, wrap(r, false))
            }
            Prop::Forall(v, p) => {
                if ascii {
                    format!("forall {}. {}", v, wrap(p, false))
                } else {
                    format!("∀{} {}", v, wrap(p, false))
                }
            }
            Prop::Exists(v, p) => {
                if ascii {
                    format!("exists {}. {}", v, wrap(p, false))
                } else {
                    format!("∃{} {}", v, wrap(p, false))
                }
            }
        }
    }

    /// Display string using logical symbols. Informative only, not a
    /// contract.
    pub fn display_string(&self) -> String {
        self.render(false)
    }

    /// ASCII rendering for environments without the logical symbols.
    pub fn ascii_string(&self) -> String {
        self.render(true)
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable {
        Variable::new("x")
    }

    fn y() -> Variable {
        Variable::new("y")
    }

    #[test]
    fn test_free_vars_of_var() {
        let p = Prop::var("x");
        assert_eq!(p.free_vars(), BTreeSet::from([x()]));
        assert!(p.bound_vars().is_empty());
    }

    #[test]
    fn test_forall_removes_free_adds_bound() {
        let p = Prop::forall(x(), Prop::imply(Prop::var("x"), Prop::var("y")));
        assert!(!p.is_free(&x()));
        assert!(p.is_free(&y()));
        assert!(p.is_bounded(&x()));
        assert_eq!(p.free_vars(), BTreeSet::from([y()]));
        assert_eq!(p.bound_vars(), BTreeSet::from([x()]));
    }

    #[test]
    fn test_extended_forms_inherit_expansion_vars() {
        let p = Prop::exists(x(), Prop::var("x"));
        assert_eq!(p.free_vars(), p.eval().free_vars());
        assert_eq!(p.bound_vars(), p.eval().bound_vars());

        let q = Prop::and(Prop::var("x"), Prop::var("y"));
        assert_eq!(q.free_vars(), q.eval().free_vars());
    }

    #[test]
    fn test_substitute_identity() {
        let p = Prop::forall(x(), Prop::imply(Prop::var("x"), Prop::var("y")));
        assert_eq!(p.substitute(&x(), &x()), p);
        assert_eq!(p.substitute(&y(), &y()), p);
    }

    #[test]
    fn test_substitute_rebinds_quantifier() {
        let p = Prop::forall(x(), Prop::var("x"));
        let q = p.substitute(&x(), &y());
        assert_eq!(q, Prop::forall(y(), Prop::var("y")));
    }

    #[test]
    fn test_substitute_untouched_when_absent() {
        let p = Prop::imply(Prop::var("a"), Prop::var("b"));
        assert_eq!(p.substitute(&x(), &y()), p);
    }

    #[test]
    fn test_eval_and() {
        let p = Prop::and(Prop::var("a"), Prop::var("b"));
        let expected = Prop::not(Prop::imply(Prop::var("a"), Prop::not(Prop::var("b"))));
        assert_eq!(p.eval(), expected);
    }

    #[test]
    fn test_eval_or() {
        let p = Prop::or(Prop::var("a"), Prop::var("b"));
        let expected = Prop::imply(Prop::not(Prop::var("a")), Prop::var("b"));
        assert_eq!(p.eval(), expected);
    }

    #[test]
    fn test_eval_iff_expands_two_levels() {
        let p = Prop::iff(Prop::var("a"), Prop::var("b"));
        let forward = Prop::imply(Prop::var("a"), Prop::var("b"));
        let backward = Prop::imply(Prop::var("b"), Prop::var("a"));
        let expected = Prop::not(Prop::imply(forward, Prop::not(backward)));
        assert_eq!(p.eval(), expected);
    }

    #[test]
    fn test_eval_exists() {
        let p = Prop::exists(x(), Prop::var("x"));
        let expected = Prop::not(Prop::forall(x(), Prop::not(Prop::var("x"))));
        assert_eq!(p.eval(), expected);
    }

    #[test]
    fn test_eval_recurses_through_core() {
        let p = Prop::imply(Prop::and(Prop::var("a"), Prop::var("b")), Prop::var("c"));
        let expected = Prop::imply(
            Prop::not(Prop::imply(Prop::var("a"), Prop::not(Prop::var("b")))),
            Prop::var("c"),
        );
        assert_eq!(p.eval(), expected);
    }

    #[test]
    fn test_extended_form_not_equal_to_expansion() {
        let p = Prop::and(Prop::var("a"), Prop::var("b"));
        assert_ne!(p, p.eval());
    }

    #[test]
    fn test_replacement_replaces_all_occurrences() {
        let a = Prop::var("a");
        let b = Prop::var("b");
        let p = Prop::imply(a.clone(), Prop::not(a.clone()));
        let q = p.replacement(&a, &b);
        assert_eq!(q, Prop::imply(b.clone(), Prop::not(b)));
    }

    #[test]
    fn test_replacement_rebuilds_extended_nodes() {
        let a = Prop::var("a");
        let b = Prop::var("b");
        let p = Prop::iff(a.clone(), a.clone());
        let q = p.replacement(&a, &b);
        assert_eq!(q, Prop::iff(b.clone(), b));
        assert!(matches!(q, Prop::Iff(..)));
    }

    #[test]
    fn test_replacement_of_whole_tree() {
        let p = Prop::and(Prop::var("a"), Prop::var("b"));
        let r = Prop::var("c");
        assert_eq!(p.replacement(&p.clone(), &r), r);
    }

    #[test]
    fn test_display() {
        let p = Prop::imply(
            Prop::and(Prop::var("a"), Prop::var("b")),
            Prop::var("c"),
        );
        assert_eq!(p.display_string(), "a ∧ b ⇒ c");
        assert_eq!(p.ascii_string(), "a & b -> c");
    }

    #[test]
    fn test_display_right_associative_imply() {
        let p = Prop::imply(
            Prop::imply(Prop::var("a"), Prop::var("b")),
            Prop::var("c"),
        );
        assert_eq!(p.display_string(), "(a ⇒ b) ⇒ c");
        let q = Prop::imply(
            Prop::var("a"),
            Prop::imply(Prop::var("b"), Prop::var("c")),
        );
        assert_eq!(q.display_string(), "a ⇒ b ⇒ c");
    }

    #[test]
    fn test_display_quantifier() {
        let p = Prop::forall(x(), Prop::imply(Prop::var("x"), Prop::var("y")));
        assert_eq!(p.display_string(), "∀x (x ⇒ y)");
        let q = Prop::not(Prop::forall(x(), Prop::var("x")));
        assert_eq!(q.display_string(), "¬∀x x");
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Prop::forall(
            x(),
            Prop::iff(
                Prop::exists(y(), Prop::var("y")),
                Prop::or(Prop::var("a"), Prop::not(Prop::var("b"))),
            ),
        );
        let json = serde_json::to_string(&p).unwrap();
        let back: Prop = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_is_quantifier_free() {
        assert!(Prop::and(Prop::var("a"), Prop::var("b")).is_quantifier_free());
        assert!(!Prop::exists(x(), Prop::var("x")).is_quantifier_free());
        assert!(!Prop::not(Prop::forall(x(), Prop::var("x"))).is_quantifier_free());
    }

    #[test]
    fn test_is_core() {
        assert!(Prop::imply(Prop::var("a"), Prop::not(Prop::var("b"))).is_core());
        assert!(!Prop::or(Prop::var("a"), Prop::var("b")).is_core());
        assert!(Prop::forall(x(), Prop::var("x")).is_core());
    }
}
