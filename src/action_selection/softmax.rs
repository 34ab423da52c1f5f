use ndarray::Array1;
use rand::{Rng, RngCore};

use super::ActionSelection;
use crate::utils::categorical_sample;
use crate::values::ActionValues;
use crate::BanditError;

#[derive(Debug, Clone)]
pub struct Softmax {
    pub tau: f64,
}

impl Softmax {
    pub fn new(tau: f64) -> Result<Self, BanditError> {
        if tau <= 0.0 {
            return Err(BanditError::InvalidParameter {
                name: "tau",
                value: tau,
            });
        }
        Ok(Self { tau })
    }

    /// Selection probabilities `exp(q/tau) / sum(exp(q/tau))` over all
    /// actions; sums to 1.
    pub fn distribution(&self, values: &ActionValues) -> Array1<f64> {
        let scaled = values.q() / self.tau;
        // shift by the maximum so exp stays finite
        let max = scaled.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        let exp = scaled.mapv(|v| (v - max).exp());
        let sum = exp.sum();
        exp / sum
    }
}

impl ActionSelection for Softmax {
    fn select_action(&self, values: &ActionValues, _t: u128, rng: &mut dyn RngCore) -> usize {
        let probs = self.distribution(values);
        categorical_sample(probs.iter().copied(), rng.gen())
    }
}
