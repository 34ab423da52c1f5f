pub mod action_selection;
pub mod env;
pub mod runner;
pub mod utils;
pub mod values;

use thiserror::Error;

use crate::env::EnvError;

#[derive(Debug, Error)]
pub enum BanditError {
    #[error("unrecognized action selection strategy `{0}`")]
    UnrecognizedPolicy(String),
    #[error("invalid value {value} for parameter `{name}`")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("environment failure: {0}")]
    EnvironmentFailure(#[from] EnvError),
}

pub use action_selection::{ActionSelection, EnumActionSelection};
pub use runner::{EpisodeResult, EpisodeRunner, EpisodeStatus};
pub use values::ActionValues;
