//! Command-line interface for the orbitize prior library
//!
//! This binary provides a CLI to inspect priors before handing them to a fit:
//! - Drawing samples from a single prior
//! - Evaluating log-probabilities of values under a prior
//! - Summing the log-prior of a parameter vector against a prior table
//! - Drawing an initial walker ensemble from a prior table
//!
//! # Usage
//!
//! ```bash
//! # Draw 5 samples from a Jeffreys prior
//! orbitize-priors sample --prior "Jeffreys(1, 100)" -n 5 --seed 42
//!
//! # Evaluate a uniform prior at a few points
//! orbitize-priors lnprob --prior "Uniform(0, 10)" -- -1 5 11
//!
//! # Total log-prior of a parameter vector
//! orbitize-priors total --config priors.json 10.0 0.5 1.2
//!
//! # Initial walkers for an ensemble sampler
//! orbitize-priors walkers --config priors.json -n 100 --seed 1
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ndarray::Array1;
use orbitize_priors::{
    io::load_prior_config,
    priors::{all_lnpriors, draw_walkers, Prior, PriorDistribution},
};
use rand::{rngs::StdRng, SeedableRng};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Draw samples from a prior
    Sample {
        /// Prior specification, e.g. "Gaussian(1.3, 0.2)"
        #[arg(short, long)]
        prior: Prior,

        /// Number of samples to draw
        #[arg(short, long, default_value_t = 10)]
        num_samples: usize,

        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate the log-probability of values under a prior
    Lnprob {
        /// Prior specification, e.g. "Uniform(0, 10)"
        #[arg(short, long)]
        prior: Prior,

        /// Values to evaluate
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Sum the log-prior of a parameter vector against a prior table
    Total {
        /// Path to the JSON prior table
        #[arg(short, long)]
        config: PathBuf,

        /// Parameter values, in the order of the prior table
        #[arg(required = true, allow_negative_numbers = true)]
        params: Vec<f64>,
    },
    /// Draw an initial walker ensemble from a prior table
    Walkers {
        /// Path to the JSON prior table
        #[arg(short, long)]
        config: PathBuf,

        /// Number of walkers
        #[arg(short, long, default_value_t = 100)]
        num_walkers: usize,

        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Main entry point for the CLI application
pub fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample {
            prior,
            num_samples,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let samples = prior
                .draw_samples(num_samples, &mut rng)
                .expect("Failed to draw samples");
            for sample in samples.iter() {
                println!("{sample}");
            }
        }
        Commands::Lnprob { prior, values } => {
            let values = Array1::from_vec(values);
            let lnprob = prior
                .compute_lnprob(values.view())
                .expect("Failed to compute log-probability");
            for (value, lnprob) in values.iter().zip(lnprob.iter()) {
                println!("{value}\t{lnprob}");
            }
        }
        Commands::Total { config, params } => {
            let config = load_prior_config(config).expect("Failed to load prior table");
            let total = all_lnpriors(&params, &config.priors())
                .expect("Failed to compute total log-prior");
            println!("{total}");
        }
        Commands::Walkers {
            config,
            num_walkers,
            seed,
        } => {
            let config = load_prior_config(config).expect("Failed to load prior table");
            let mut rng = make_rng(seed);
            let walkers = draw_walkers(&config.priors(), num_walkers, &mut rng)
                .expect("Failed to draw walkers");

            println!("{}", config.names().join(","));
            for row in walkers.rows() {
                let row = row.iter().map(|x| x.to_string()).collect::<Vec<_>>();
                println!("{}", row.join(","));
            }
        }
    }
}
