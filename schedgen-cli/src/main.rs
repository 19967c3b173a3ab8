//! Command-line driver generating scheduler artifacts from a pair count.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use schedgen::{ChoreographyMode, Package, Schedule};
use tracing_subscriber::EnvFilter;

/// Crossbar scheduler and choreography generator.
///
/// Writes `sched<N>.c`, the combinational arbitration function, and
/// `sched<N>.scr`, the matching global protocol, into the output directory.
#[derive(Parser)]
#[command(name = "schedgen", version, about = "Crossbar scheduler and choreography generator")]
struct Cli {
    /// Number of symmetric port/datapath pairs.
    num_datapaths: usize,

    /// Choreography synthesis strategy.
    #[arg(long, value_enum, default_value = "round-robin")]
    mode: Mode,

    /// Output directory for the generated artifacts.
    #[arg(long, default_value = "./build")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    RoundRobin,
    FullPermutation,
}

impl From<Mode> for ChoreographyMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::RoundRobin => ChoreographyMode::RoundRobin,
            Mode::FullPermutation => ChoreographyMode::FullPermutation,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    println!("// Input: {} datapaths", cli.num_datapaths);

    let mut package = Package::default();
    package.add(Schedule::new(cli.num_datapaths));

    package
        .gen_c(&cli.out_dir)
        .with_context(|| format!("writing scheduler code under {}", cli.out_dir.display()))?;
    tracing::info!("generated sched{}.c", cli.num_datapaths);

    package
        .gen_scr(&cli.out_dir, cli.mode.into())
        .with_context(|| format!("writing protocol code under {}", cli.out_dir.display()))?;
    tracing::info!(mode = ?cli.mode, "generated sched{}.scr", cli.num_datapaths);

    Ok(())
}
