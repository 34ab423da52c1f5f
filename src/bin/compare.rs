use std::process::exit;

use kdam::{tqdm, BarExt};
use plotters::style::{BLUE, GREEN, RED, YELLOW};
use rand::rngs::StdRng;
use rand::SeedableRng;

extern crate structopt;

use structopt::StructOpt;

use bandit_strategies::action_selection::{
    EnumActionSelection, Greedy, Softmax, UniformEpsilonGreed, UpperConfidenceBound,
};
use bandit_strategies::env::TargetRangeEnv;
use bandit_strategies::runner::EpisodeRunner;
use bandit_strategies::utils::{moving_average, plot_moving_average};
use bandit_strategies::BanditError;

/// Run the four exploration/exploitation strategies on the target range and
/// generate a graphic of their results
#[derive(StructOpt, Debug)]
#[structopt(name = "compare")]
struct Cli {
    /// Number of episodes to run for each strategy
    #[structopt(long = "n_episodes", short = "n", default_value = "100")]
    n_episodes: u128,

    /// Maximum number of steps for each episode
    #[structopt(long = "max_steps", default_value = "1000")]
    max_steps: u128,

    /// Exploration ratio for the epsilon-greedy strategy
    #[structopt(long = "epsilon", default_value = "0.1")]
    epsilon: f64,

    /// Temperature of the softmax strategy
    #[structopt(long = "tau", default_value = "1.0")]
    tau: f64,

    /// Confidence level for the UCB strategy
    #[structopt(long = "confidence_level", short = "c", default_value = "2.0")]
    confidence_level: f64,

    /// Moving average window for the visualization of results
    #[structopt(long = "moving_average_window", default_value = "10")]
    moving_average_window: usize,

    /// Seed for the pseudo random number generator
    #[structopt(long = "seed")]
    seed: Option<u64>,
}

fn build_strategies(cli: &Cli) -> Result<Vec<(&'static str, EnumActionSelection)>, BanditError> {
    Ok(vec![
        ("greedy", Greedy::new().into()),
        ("epsilon-greedy", UniformEpsilonGreed::new(cli.epsilon)?.into()),
        ("softmax", Softmax::new(cli.tau)?.into()),
        ("ucb", UpperConfidenceBound::new(cli.confidence_level)?.into()),
    ])
}

fn main() {
    env_logger::init();
    let cli: Cli = Cli::from_args();

    let strategies = match build_strategies(&cli) {
        Ok(strategies) => strategies,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut rewards: Vec<Vec<f64>> = vec![];
    let mut legends: Vec<&str> = vec![];

    for (name, selection) in strategies {
        let runner = EpisodeRunner::new(selection, cli.max_steps);
        let mut totals: Vec<f64> = vec![];

        let mut pb = tqdm!(total = cli.n_episodes as usize);
        pb.set_description(name.to_string());
        // every episode starts from scratch, nothing is carried over
        for _episode in 0..cli.n_episodes {
            let mut env = TargetRangeEnv::arcade();
            match runner.run(&mut env, &mut rng) {
                Ok(result) => totals.push(result.total_reward),
                Err(e) => {
                    eprintln!("{}", e);
                    exit(1);
                }
            }
            match pb.update(1) {
                Ok(_) => (),
                Err(e) => panic!("{}", e.to_string()),
            };
        }
        eprintln!();
        println!(
            "{}: mean total reward {:.2}",
            name,
            totals.iter().sum::<f64>() / totals.len() as f64
        );
        rewards.push(moving_average(cli.moving_average_window, &totals));
        legends.push(name);
    }

    let colors = [&BLUE, &GREEN, &RED, &YELLOW];
    if let Err(e) = plot_moving_average(&rewards, &colors, &legends, "Total rewards") {
        eprintln!("could not generate the plot: {}", e);
        exit(1);
    }
}
