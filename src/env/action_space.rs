use rand::distributions::{Distribution, Uniform};
use rand::RngCore;

#[derive(Debug, Clone)]
pub struct ActionSpace {
    pub size: usize,
    dist: Uniform<usize>,
}

impl ActionSpace {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            dist: Uniform::from(0..size),
        }
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> usize {
        self.dist.sample(rng)
    }
}
