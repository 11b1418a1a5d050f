//! `echo-resonance`: builds a network of echo mages and reports how they
//! resonate.
//! - `demo` runs the built-in four-mage roster
//! - `analyze` reads a JSON roster and prints every mage's resonance field
//! - `drift` applies seeded jitter to every intent and tracks coherence

mod roster;

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use resonance_metrics::{NetworkMetrics, Registry};
use resonance_network::ResonanceNetwork;
use tracing::{info, Level};

#[derive(Debug, Parser)]
#[command(name = "echo-resonance", version, about = "Kin resonance between echo mages")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the network snapshot as JSON after the report.
    #[arg(long, global = true)]
    export: bool,

    /// Print prometheus text exposition for the network.
    #[arg(long, global = true)]
    metrics: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the built-in roster.
    Demo,
    /// Analyze a roster file.
    Analyze { roster: PathBuf },
    /// Drift every intent with seeded uniform jitter.
    Drift {
        roster: PathBuf,
        #[arg(long, default_value_t = 5)]
        steps: usize,
        #[arg(long, default_value_t = 0.05)]
        jitter: f64,
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat, verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format, cli.verbose);

    let network = match &cli.command {
        Command::Demo => run_demo()?,
        Command::Analyze { roster } => run_analyze(roster::load_roster(roster)?),
        Command::Drift {
            roster,
            steps,
            jitter,
            seed,
        } => run_drift(roster::load_roster(roster)?, *steps, *jitter, *seed)?,
    };

    if cli.export {
        println!("{}", network.snapshot().to_json()?);
    }
    if cli.metrics {
        print!("{}", observe_metrics(&network)?);
    }
    Ok(())
}

fn observe_metrics(network: &ResonanceNetwork) -> Result<String> {
    let registry = Registry::new();
    let metrics = NetworkMetrics::register(&registry)?;
    metrics.observe(network);
    Ok(resonance_metrics::render(&registry)?)
}

fn print_pairings(network: &ResonanceNetwork) {
    let pairings = network.optimal_pairings();
    if pairings.is_empty() {
        println!("  (no kin pairings)");
    }
    for p in pairings {
        println!("  {} <-> {}: {:.3}", p.a.label(), p.b.label(), p.similarity);
    }
}

fn run_demo() -> Result<ResonanceNetwork> {
    let mut network = roster::demo_roster();
    let (first, candidates) = network
        .mages()
        .split_first()
        .map(|(first, rest)| (first.clone(), rest.to_vec()))
        .ok_or_else(|| anyhow::anyhow!("demo roster is empty"))?;

    println!("{}'s kin:", first.label());
    for kin in first.find_kin(&candidates) {
        println!("  - {} ({:.3})", kin.label(), first.calculate_similarity(kin));
    }
    for other in &candidates {
        println!(
            "  {} reads {} as {} ({:.3})",
            first.label(),
            other.label(),
            first.classify(other),
            first.calculate_similarity(other)
        );
    }

    for (label, echo) in network.broadcast_activation() {
        info!(mage = %label, "{echo}");
    }

    println!("network coherence: {:.3}", network.coherence());
    println!("optimal pairings:");
    print_pairings(&network);

    if let Some(lead) = network.get(first.label()) {
        println!("{} as seed:", lead.label());
        println!("{}", lead.to_json()?);
    }
    Ok(network)
}

fn run_analyze(network: ResonanceNetwork) -> ResonanceNetwork {
    info!(mages = network.len(), "analyzing roster");
    for mage in &network {
        println!("{mage}");
        for (label, reading) in mage.resonance_field(network.mages()) {
            println!(
                "  {:<12} {:<8} similarity={:.3} distance={:.3}{}",
                label,
                reading.relationship,
                reading.similarity,
                reading.intent_distance,
                if reading.is_kin { " kin" } else { "" }
            );
        }
    }
    println!("network coherence: {:.3}", network.coherence());
    println!("optimal pairings:");
    print_pairings(&network);
    network
}

fn run_drift(
    mut network: ResonanceNetwork,
    steps: usize,
    jitter: f64,
    seed: u64,
) -> Result<ResonanceNetwork> {
    ensure!(
        jitter >= 0.0 && (2.0 * jitter).is_finite(),
        "jitter must be finite and non-negative, got {jitter}"
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<String> = network.iter().map(|m| m.label().to_string()).collect();

    println!("step 0: coherence {:.4}", network.coherence());
    for step in 1..=steps {
        for label in &labels {
            let Some(current) = network.get(label).map(|m| m.intent().to_array()) else {
                continue;
            };
            let next: Vec<f64> = current
                .iter()
                .map(|c| c + rng.gen_range(-jitter..=jitter))
                .collect();
            network.drift(label, &next)?;
        }
        println!(
            "step {step}: coherence {:.4}, kin pairings {}",
            network.coherence(),
            network.optimal_pairings().len()
        );
    }
    Ok(network)
}
