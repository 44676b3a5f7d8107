pub mod completeness;
pub mod truth_table;
pub mod generator;

pub use completeness::complete;
pub use truth_table::{evaluate, is_tautology};
pub use generator::{GeneratorConfig, PropGenerator};
