use std::process::exit;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use bandit_strategies::action_selection::EnumActionSelection;
use bandit_strategies::env::{Env, TargetRangeEnv};
use bandit_strategies::runner::EpisodeRunner;

/// Run one episode of the target range game with an exploration/exploitation
/// action selection strategy
#[derive(StructOpt, Debug)]
#[structopt(name = "bandit_strategies")]
struct Cli {
    /// Action selection strategy: greedy, epsilon-greedy, softmax or ucb
    #[structopt(long = "policy", short = "p", default_value = "greedy")]
    policy: String,

    /// Exploration ratio for the epsilon-greedy strategy
    #[structopt(long = "epsilon", default_value = "0.1")]
    epsilon: String,

    /// Temperature of the softmax strategy
    #[structopt(long = "tau", default_value = "1.0")]
    tau: String,

    /// Confidence level for the UCB strategy
    #[structopt(long = "confidence_level", short = "c", default_value = "2.0")]
    confidence_level: String,

    /// Maximum number of steps for the episode
    #[structopt(long = "max_steps", short = "n", default_value = "1000")]
    max_steps: u128,

    /// Print the range after every step
    #[structopt(long = "render")]
    render: bool,

    /// Seed for the pseudo random number generator
    #[structopt(long = "seed")]
    seed: Option<u64>,
}

fn parse_or_default(raw: &str, name: &str, default: f64) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "could not read `{}` as a value for {}, falling back to {}",
                raw, name, default
            );
            default
        }
    }
}

fn main() {
    env_logger::init();
    let cli: Cli = Cli::from_args();

    let epsilon = parse_or_default(&cli.epsilon, "epsilon", 0.1);
    let tau = parse_or_default(&cli.tau, "tau", 1.0);
    let confidence_level = parse_or_default(&cli.confidence_level, "confidence_level", 2.0);

    let selection =
        match EnumActionSelection::from_name(&cli.policy, epsilon, tau, confidence_level) {
            Ok(selection) => selection,
            Err(e) => {
                eprintln!("{}", e);
                exit(1);
            }
        };

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut env = TargetRangeEnv::arcade();

    println!("--- Running strategy: {} ---", cli.policy);
    println!("Actions available: {}", env.action_space().size);

    let runner = EpisodeRunner::new(selection, cli.max_steps).with_render(cli.render);
    match runner.run(&mut env, &mut rng) {
        Ok(result) => {
            println!(
                "Finished with status {:?} after {} steps",
                result.status, result.steps
            );
            println!("Total reward: {}", result.total_reward);
            println!("Final Q: {:.3}", result.q);
            println!("Times each action was selected: {}", result.visits);
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
