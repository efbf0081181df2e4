use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use whist_bench::config::{BenchConfig, ResolvedOutputs};
use whist_bench::logging::init_logging;
use whist_bench::runner::MatchRunner;

/// Self-play harness for whist bots.
#[derive(Debug, Parser)]
#[command(
    name = "whist-bench",
    author,
    version,
    about = "Deterministic whist self-play harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of matches to play.
    #[arg(long, value_name = "MATCHES")]
    matches: Option<usize>,

    /// Override the RNG seed for match generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration.
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchConfig::from_path(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(matches) = cli.matches {
        config.deals.matches = matches;
    }

    if let Some(seed) = cli.seed {
        config.deals.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let matches = config.deals.matches;
    let variant = config.variant;

    println!("Loaded configuration '{run_id}': {matches} × {variant}");

    let logging_guard = init_logging(&config.logging, &outputs, &run_id)?;
    let runner = MatchRunner::new(config, outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: no matches played.");
        return Ok(());
    }

    let summary = runner.run()?;
    println!(
        "Run '{run_id}' complete: {} matches, {} hands → {}",
        summary.matches_played,
        summary.hands_played,
        summary.jsonl_path.display()
    );
    println!(
        "Match wins: North/South {}, East/West {}",
        summary.match_wins[0], summary.match_wins[1]
    );
    if let Some(guard) = logging_guard.as_ref() {
        println!("Trace log: {}", guard.log_path.display());
    }

    Ok(())
}
