use rand::Rng;

use crate::models::{Prop, Variable};

/// Configuration for random proposition generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub max_depth: usize,
    pub variable_pool: Vec<Variable>,
    pub allow_iff: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            variable_pool: vec![
                Variable::new("a"),
                Variable::new("b"),
                Variable::new("c"),
            ],
            allow_iff: true,
        }
    }
}

/// Random quantifier-free proposition generator, used to exercise the
/// completeness procedure against the truth-table evaluator.
pub struct PropGenerator {
    config: GeneratorConfig,
}

impl PropGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Prop {
        self.generate_at(rng, self.config.max_depth)
    }

    fn random_var<R: Rng>(&self, rng: &mut R) -> Prop {
        let index = rng.gen_range(0..self.config.variable_pool.len());
        Prop::Var(self.config.variable_pool[index].clone())
    }

    fn generate_at<R: Rng>(&self, rng: &mut R, depth: usize) -> Prop {
        if depth == 0 {
            return self.random_var(rng);
        }
        let choices = if self.config.allow_iff { 6 } else { 5 };
        match rng.gen_range(0..choices) {
            0 => self.random_var(rng),
            1 => Prop::not(self.generate_at(rng, depth - 1)),
            2 => Prop::imply(
                self.generate_at(rng, depth - 1),
                self.generate_at(rng, depth - 1),
            ),
            3 => Prop::and(
                self.generate_at(rng, depth - 1),
                self.generate_at(rng, depth - 1),
            ),
            4 => Prop::or(
                self.generate_at(rng, depth - 1),
                self.generate_at(rng, depth - 1),
            ),
            _ => Prop::iff(
                self.generate_at(rng, depth - 1),
                self.generate_at(rng, depth - 1),
            ),
        }
    }
}
