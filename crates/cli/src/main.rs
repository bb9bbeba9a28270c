//! zxyt: run the stochastic X/Y feedback simulation from the command line.
//!
//! Usage:
//!   zxyt run [--config FILE] [--seed N] [--output FILE] [--precision P]
//!   zxyt summary [--config FILE] [--seed N] [--runs K]
//!   zxyt plot [--config FILE] [--window N]        (feature `plot`)
//!
//! Set `RUST_LOG=debug` to see what the engine is doing.

mod settings;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use zxyt_engine::feedback;
use zxyt_observers::{
    csv::{CsvExport, CsvObserver, DEFAULT_PRECISION},
    diagnostics::Diagnostics,
};

use settings::SimArgs;

#[derive(Parser)]
#[command(author, version, about = "Stochastic X/Y feedback simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run once and write the frames as CSV
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Write to FILE instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Decimals for the X, Y and Z columns
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },
    /// Run repeatedly and print noise and feedback statistics
    Summary {
        #[command(flatten)]
        sim: SimArgs,

        /// Number of independent runs
        #[arg(long, default_value_t = 100)]
        runs: usize,
    },
    /// Open a windowed chart of X, Y and Z
    #[cfg(feature = "plot")]
    Plot {
        #[command(flatten)]
        sim: SimArgs,

        /// Frames visible at once (a fifth of the run if omitted)
        #[arg(long)]
        window: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Run {
            sim,
            output,
            precision,
        } => run(&sim, output.as_deref(), precision),
        Cmd::Summary { sim, runs } => summary(&sim, runs),
        #[cfg(feature = "plot")]
        Cmd::Plot { sim, window } => plot(&sim, window),
    }
}

fn run(sim: &SimArgs, output: Option<&Path>, precision: usize) -> Result<()> {
    let config = sim.resolve()?;

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut csv = CsvObserver::with_export(writer, CsvExport::new().precision(precision));

    let solution = feedback::solve(&config, sim.noise_source().as_mut(), &mut csv)?;
    let rows = csv.rows();
    csv.finish().context("write csv")?;

    log::info!("wrote {rows} frames ({:?})", solution.status);
    Ok(())
}

fn summary(sim: &SimArgs, runs: usize) -> Result<()> {
    if runs == 0 {
        bail!("--runs must be at least 1");
    }
    let config = sim.resolve()?;
    if config.is_noiseless() {
        log::warn!("noise intensity is 0, every run will be identical");
    }

    let mut noise = sim.noise_source();
    let mut diagnostics = Diagnostics::new();
    for _ in 0..runs {
        feedback::solve(&config, noise.as_mut(), &mut diagnostics)?;
    }
    log::info!("completed {runs} runs of {} timesteps", config.timesteps);

    println!("{}", diagnostics.summary());
    println!(
        "expected:        noise sd={} z=±{}",
        config.noise_intensity, config.observer_strength
    );
    Ok(())
}

#[cfg(feature = "plot")]
fn plot(sim: &SimArgs, window: Option<usize>) -> Result<()> {
    use zxyt_observers::{ShowConfig, show_result};

    let config = sim.resolve()?;
    let result = feedback::solve_unobserved(&config, sim.noise_source().as_mut())?.result;

    let mut show = ShowConfig::new()
        .title(format!(
            "zxyt: strength={}, noise={}",
            config.observer_strength, config.noise_intensity
        ))
        .legend();
    if let Some(size) = window {
        show = show.window(size);
    }

    show_result(&result, show).map_err(|e| anyhow::anyhow!("open chart: {e}"))
}
