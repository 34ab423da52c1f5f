use log::{debug, info};
use ndarray::Array1;
use rand::RngCore;

use crate::action_selection::{ActionSelection, EnumActionSelection};
use crate::env::Env;
use crate::values::ActionValues;
use crate::BanditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    Running,
    Terminated,
    Truncated,
    StepBudgetExhausted,
}

#[derive(Debug, Clone)]
pub struct EpisodeResult {
    pub total_reward: f64,
    pub q: Array1<f64>,
    pub visits: Array1<u64>,
    pub steps: u128,
    pub status: EpisodeStatus,
}

pub struct EpisodeRunner {
    selection: EnumActionSelection,
    max_steps: u128,
    render: bool,
}

impl EpisodeRunner {
    pub fn new(selection: EnumActionSelection, max_steps: u128) -> Self {
        Self {
            selection,
            max_steps,
            render: false,
        }
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn run<O>(
        &self,
        env: &mut dyn Env<O>,
        rng: &mut dyn RngCore,
    ) -> Result<EpisodeResult, BanditError> {
        self.run_until(env, rng, || false)
    }

    /// Same as `run`, but polls `interrupt` before every step so a frontend
    /// can translate a quit request into an early stop. The environment is
    /// closed on every exit path.
    pub fn run_until<O>(
        &self,
        env: &mut dyn Env<O>,
        rng: &mut dyn RngCore,
        interrupt: impl FnMut() -> bool,
    ) -> Result<EpisodeResult, BanditError> {
        let outcome = self.episode(env, rng, interrupt);
        let closed = env.close();
        let result = outcome?;
        closed?;
        info!(
            "episode over with status {:?} after {} steps, total reward {}",
            result.status, result.steps, result.total_reward
        );
        Ok(result)
    }

    fn episode<O>(
        &self,
        env: &mut dyn Env<O>,
        rng: &mut dyn RngCore,
        mut interrupt: impl FnMut() -> bool,
    ) -> Result<EpisodeResult, BanditError> {
        let n_actions = env.action_space().size;
        env.reset()?;
        let mut values = ActionValues::new(n_actions);
        let mut total_reward: f64 = 0.0;
        let mut steps: u128 = 0;
        let mut status = EpisodeStatus::Running;

        for t in 0..self.max_steps {
            if interrupt() {
                status = EpisodeStatus::Truncated;
                break;
            }
            let action = self.selection.select_action(&values, t, rng);
            let transition = env.step(action)?;
            total_reward += transition.reward;
            values.update(action, transition.reward);
            steps = t + 1;
            if self.render {
                println!("{}", env.render());
            }
            debug!("step {}: action {} reward {}", t, action, transition.reward);
            if transition.terminated {
                status = EpisodeStatus::Terminated;
                break;
            }
            if transition.truncated {
                status = EpisodeStatus::Truncated;
                break;
            }
        }
        if status == EpisodeStatus::Running {
            status = EpisodeStatus::StepBudgetExhausted;
        }

        let (q, visits) = values.into_parts();
        Ok(EpisodeResult {
            total_reward,
            q,
            visits,
            steps,
            status,
        })
    }
}
