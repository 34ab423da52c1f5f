use rand::RngCore;

use super::ActionSelection;
use crate::utils::argmax;
use crate::values::ActionValues;
use crate::BanditError;

#[derive(Debug, Clone)]
pub struct UpperConfidenceBound {
    pub confidence_level: f64,
}

impl UpperConfidenceBound {
    // keeps the exploration bonus finite for actions that were never tried,
    // while still making them dominate the maximization
    const VISIT_FLOOR: f64 = 1e-5;

    pub fn new(confidence_level: f64) -> Result<Self, BanditError> {
        if confidence_level < 0.0 {
            return Err(BanditError::InvalidParameter {
                name: "confidence_level",
                value: confidence_level,
            });
        }
        Ok(Self { confidence_level })
    }
}

impl ActionSelection for UpperConfidenceBound {
    fn select_action(&self, values: &ActionValues, t: u128, _rng: &mut dyn RngCore) -> usize {
        let exploration = ((t + 1) as f64).ln();
        let bonus = values.visits().mapv(|n| {
            self.confidence_level * (exploration / (n as f64 + Self::VISIT_FLOOR)).sqrt()
        });
        let ucbs = values.q() + &bonus;
        argmax(ucbs.iter())
    }
}
