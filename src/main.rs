use std::process;

use clap::Parser;
use collatz_rng::{
    stats::{Histogram, Summary},
    CollatzRng, Result,
};
use log::{error, info};
use num_bigint::BigInt;

/// Sample the Collatz generator and print a distribution report
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the generator, defaults to the current time in milliseconds
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<BigInt>,

    /// Number of values to draw
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Smallest value to draw
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    low: i64,

    /// Largest value to draw
    #[arg(long, default_value_t = 99, allow_negative_numbers = true)]
    high: i64,

    /// Number of histogram buckets
    #[arg(short, long, default_value_t = 10)]
    buckets: usize,

    /// Width of the longest histogram bar
    #[arg(short, long, default_value_t = 50)]
    width: usize,
}

fn run(args: Args) -> Result<()> {
    info!("Initializing Collatz RNG...");
    let mut rng = CollatzRng::from_seed(args.seed);
    println!("Seed used: {}", rng.seed());

    info!(
        "Generating {} random numbers between {} and {}...",
        args.count, args.low, args.high
    );
    let data: Vec<i64> = rng.ints(args.low, args.high)?.take(args.count).collect();
    let preview = &data[..data.len().min(10)];
    println!("First {} values: {:?}", preview.len(), preview);

    if let Some(summary) = Summary::from_samples(&data) {
        println!("\n{}", summary);
    }

    let mut histogram = Histogram::new(args.low, args.high, args.buckets)?;
    for &value in &data {
        histogram.record(value);
    }
    println!("\n{}", histogram.render(args.width));

    info!("Done after {} steps.", rng.steps_taken());
    Ok(())
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(args) {
        error!("{}", err);
        process::exit(1);
    }
}
