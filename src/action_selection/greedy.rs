use rand::RngCore;

use super::ActionSelection;
use crate::utils::argmax;
use crate::values::ActionValues;

#[derive(Debug, Clone, Default)]
pub struct Greedy;

impl Greedy {
    pub fn new() -> Self {
        Self
    }
}

impl ActionSelection for Greedy {
    fn select_action(&self, values: &ActionValues, _t: u128, _rng: &mut dyn RngCore) -> usize {
        argmax(values.q().iter())
    }
}
