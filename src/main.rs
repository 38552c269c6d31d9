//! Trains a sigmoid network on an IDX digit dataset.
//!
//! Run with:
//!   cargo run --release -- --images train-images.idx3-ubyte --labels train-labels.idx1-ubyte
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sgd_net::data::load_idx_pair;
use sgd_net::{NetBlueprint, Network, NetworkSpec, Result, TrainConfig};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// IDX3 image file
    #[arg(long, value_name = "PATH")]
    images: PathBuf,
    /// IDX1 label file
    #[arg(long, value_name = "PATH")]
    labels: PathBuf,
    /// JSON run description (blueprint and training config)
    #[arg(long, value_name = "PATH")]
    spec: Option<PathBuf>,
    #[arg(long)]
    epochs: Option<usize>,
    #[arg(long)]
    batch_size: Option<usize>,
    #[arg(long)]
    rate: Option<f64>,
    /// Seeds both parameter initialization and shuffling
    #[arg(long)]
    seed: Option<u64>,
    /// Hidden layer size when no spec file is given
    #[arg(long, default_value_t = 30)]
    hidden: usize,
    /// Number of output classes
    #[arg(long, default_value_t = 10)]
    classes: usize,
    /// Only train on the first N examples
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut examples = load_idx_pair(&cli.images, &cli.labels, cli.classes)?;
    if let Some(limit) = cli.limit {
        examples.truncate(limit);
    }
    let input_size = examples.first().map_or(0, |e| e.input.len());

    let mut spec = match &cli.spec {
        Some(path) => NetworkSpec::load_json(&path.to_string_lossy())?,
        None => NetworkSpec {
            name: "digits".to_owned(),
            blueprint: NetBlueprint::new(vec![input_size, cli.hidden, cli.classes])?,
            training: TrainConfig::new(30, 10, 3.0),
        },
    };

    // Command-line flags override the spec file.
    let training = &mut spec.training;
    training.epochs = cli.epochs.unwrap_or(training.epochs);
    training.mini_batch_size = cli.batch_size.unwrap_or(training.mini_batch_size);
    training.learning_rate = cli.rate.unwrap_or(training.learning_rate);
    training.seed = cli.seed.or(training.seed);

    info!(name = %spec.name, blueprint = ?spec.blueprint.sizes(), "building network");
    let mut rng = match spec.training.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network: Network = Network::init(spec.blueprint.clone(), &mut rng);

    let report = network.train(&mut examples, &spec.training)?;
    let cost = network.cost(&examples)?;
    info!(
        epochs = report.epochs.len(),
        updates = report.total_updates(),
        cost,
        "training finished"
    );
    Ok(())
}
