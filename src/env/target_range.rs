use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;

use super::{ActionSpace, Env, EnvError, Transition};

/// Shooting range with one pop-up target per lane. Each shell fired at a
/// lane hits with that lane's probability and scores its payout. The round
/// ends when the score reaches the goal, or runs out when the shells do.
#[derive(Debug, Clone)]
pub struct TargetRangeEnv {
    ready: bool,
    lanes: Vec<(f64, f64)>, // (hit chance, payout)
    hits: Vec<u64>,
    score: f64,
    goal: f64,
    shells: u128,
    fired: u128,
    rng: ThreadRng,
    dist: Uniform<f64>,
}

impl TargetRangeEnv {
    pub fn new(lanes: &[(f64, f64)], goal: f64, shells: u128) -> Self {
        Self {
            ready: false,
            lanes: lanes.to_vec(),
            hits: vec![0; lanes.len()],
            score: 0.0,
            goal,
            shells,
            fired: 0,
            rng: rand::thread_rng(),
            dist: Uniform::from(0.0..1.0),
        }
    }

    /// Arcade preset: near lanes pay little and rarely miss, far lanes pay
    /// big and mostly miss.
    pub fn arcade() -> Self {
        Self::new(
            &[(0.9, 1.0), (0.35, 5.0), (0.15, 20.0), (0.05, 100.0)],
            200.0,
            800,
        )
    }
}

impl Env<f64> for TargetRangeEnv {
    fn reset(&mut self) -> Result<f64, EnvError> {
        self.hits = vec![0; self.lanes.len()];
        self.score = 0.0;
        self.fired = 0;
        self.ready = true;
        Ok(self.score)
    }

    fn step(&mut self, action: usize) -> Result<Transition<f64>, EnvError> {
        if !self.ready {
            return Err(EnvError::EnvNotReady);
        }
        if action >= self.lanes.len() {
            return Err(EnvError::InvalidAction(action));
        }
        let (hit_chance, payout) = self.lanes[action];
        let reward = if self.dist.sample(&mut self.rng) < hit_chance {
            self.hits[action] += 1;
            payout
        } else {
            0.0
        };
        self.score += reward;
        self.fired += 1;
        let terminated = self.score >= self.goal;
        let truncated = !terminated && self.fired >= self.shells;
        if terminated || truncated {
            self.ready = false;
        }
        Ok(Transition {
            observation: self.score,
            reward,
            terminated,
            truncated,
        })
    }

    fn action_space(&self) -> ActionSpace {
        ActionSpace::new(self.lanes.len())
    }

    fn render(&self) -> String {
        let lanes: Vec<String> = self
            .lanes
            .iter()
            .zip(&self.hits)
            .map(|((_, payout), hits)| format!("{:>3} x{:<4}", payout, hits))
            .collect();
        format!(
            "|{}| score {:.0}/{:.0} | shells left {}",
            lanes.join("|"),
            self.score,
            self.goal,
            self.shells.saturating_sub(self.fired)
        )
    }
}
