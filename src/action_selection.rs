mod greedy;
mod softmax;
mod uniform_epsilon_greed;
mod upper_confidence_bound;

use enum_dispatch::enum_dispatch;
use rand::RngCore;

pub use greedy::Greedy;
pub use softmax::Softmax;
pub use uniform_epsilon_greed::UniformEpsilonGreed;
pub use upper_confidence_bound::UpperConfidenceBound;

use crate::values::ActionValues;
use crate::BanditError;

#[enum_dispatch]
pub trait ActionSelection {
    /// Picks the next action from the current value estimates. `t` is the
    /// 0-based step index (only UCB reads it). Never mutates `values`.
    fn select_action(&self, values: &ActionValues, t: u128, rng: &mut dyn RngCore) -> usize;
}

#[derive(Debug, Clone)]
#[enum_dispatch(ActionSelection)]
pub enum EnumActionSelection {
    Greedy(Greedy),
    UniformEpsilonGreed(UniformEpsilonGreed),
    Softmax(Softmax),
    UpperConfidenceBound(UpperConfidenceBound),
}

impl EnumActionSelection {
    /// Builds a strategy from the name the frontend supplies. Parameters of
    /// the other strategies are ignored.
    pub fn from_name(
        name: &str,
        epsilon: f64,
        tau: f64,
        confidence_level: f64,
    ) -> Result<Self, BanditError> {
        match name.trim().to_lowercase().as_str() {
            "greedy" => Ok(Greedy::new().into()),
            "epsilon-greedy" => Ok(UniformEpsilonGreed::new(epsilon)?.into()),
            "softmax" => Ok(Softmax::new(tau)?.into()),
            "ucb" => Ok(UpperConfidenceBound::new(confidence_level)?.into()),
            _ => Err(BanditError::UnrecognizedPolicy(name.to_string())),
        }
    }
}
