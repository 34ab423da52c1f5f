mod action_space;
mod target_range;

use thiserror::Error;

pub use action_space::ActionSpace;
pub use target_range::TargetRangeEnv;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("environment is not ready, call reset first")]
    EnvNotReady,
    #[error("action {0} is outside of the action space")]
    InvalidAction(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O> {
    pub observation: O,
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
}

pub trait Env<O> {
    fn reset(&mut self) -> Result<O, EnvError>;
    fn step(&mut self, action: usize) -> Result<Transition<O>, EnvError>;
    fn action_space(&self) -> ActionSpace;
    fn render(&self) -> String;
    fn close(&mut self) -> Result<(), EnvError> {
        Ok(())
    }
}
