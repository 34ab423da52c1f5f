use rand::distributions::{Distribution, Uniform};
use rand::{Rng, RngCore};

use super::ActionSelection;
use crate::utils::argmax;
use crate::values::ActionValues;
use crate::BanditError;

#[derive(Debug, Clone)]
pub struct UniformEpsilonGreed {
    exploration_decider: Uniform<f64>,
    pub epsilon: f64,
}

impl UniformEpsilonGreed {
    pub fn new(epsilon: f64) -> Result<Self, BanditError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(BanditError::InvalidParameter {
                name: "epsilon",
                value: epsilon,
            });
        }
        Ok(Self {
            exploration_decider: Uniform::from(0.0..1.0),
            epsilon,
        })
    }

    fn should_explore(&self, rng: &mut dyn RngCore) -> bool {
        self.epsilon != 0.0 && self.exploration_decider.sample(rng) < self.epsilon
    }
}

impl ActionSelection for UniformEpsilonGreed {
    fn select_action(&self, values: &ActionValues, _t: u128, rng: &mut dyn RngCore) -> usize {
        if self.should_explore(rng) {
            rng.gen_range(0..values.n_actions())
        } else {
            argmax(values.q().iter())
        }
    }
}
