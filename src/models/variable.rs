use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::prop::Prop;

/// A named object-language variable.
///
/// Equality, hashing and ordering are all by name, so two variables with the
/// same name are the same variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A variable whose name occurs nowhere in `props`, neither free nor
    /// bound (binders included). Used where a derivation needs a witness
    /// variable that cannot collide with anything the caller wrote.
    pub fn fresh_for(props: &[&Prop]) -> Variable {
        let mut taken = std::collections::BTreeSet::new();
        for p in props {
            p.collect_vars(&mut taken);
        }
        loop {
            let id = Uuid::new_v4().simple().to_string();
            let candidate = Variable::new(format!("w{}", &id[..8]));
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
