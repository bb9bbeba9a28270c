//! Interactive views of the zxyt feedback engine.
//!
//! Each mode runs the engine and opens a plot window showing what it did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- noisy
//! cargo run --example plot --features plot -- noisy 0.2
//! cargo run --example plot --features plot -- noiseless
//! ```
//!
//! # Modes
//!
//! - **noisy [noise]** — The default configuration with the given noise
//!   intensity (0.05 if omitted). X and Y wander as a bounded random walk
//!   while Z flips sign to pull them back together.
//!
//! - **noiseless** — Noise disabled. X and Y meet, separate, and meet again
//!   with period 2; Z alternates between −0.1 and +0.1.

use std::error::Error;

use zxyt_engine::{BoxMuller, SimulationConfig, feedback};
use zxyt_observers::{FRAME_TRACES, PlotObserver, ShowConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "noisy".into());
    match mode.as_str() {
        "noisy" => {
            let noise = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<f64>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid noise intensity, expected a number, e.g. 0.1");
                    std::process::exit(1);
                })
                .unwrap_or(0.05);
            noisy(noise)
        }
        "noiseless" => noiseless(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [noisy [noise]|noiseless]");
            std::process::exit(1);
        }
    }
}

/// Run the default configuration and chart X, Y and Z as frames arrive.
fn noisy(noise_intensity: f64) -> Result<(), Box<dyn Error>> {
    let config = SimulationConfig {
        noise_intensity,
        ..SimulationConfig::default()
    };

    let mut obs = PlotObserver::<3>::new(FRAME_TRACES);
    feedback::solve(&config, &mut BoxMuller::thread_local(), &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(format!("zxyt: noise={noise_intensity}, strength=0.1"))
            .legend(),
    )?;

    Ok(())
}

/// Run without noise to show the period-2 oscillation.
fn noiseless() -> Result<(), Box<dyn Error>> {
    let config = SimulationConfig {
        timesteps: 40,
        noise_intensity: 0.0,
        ..SimulationConfig::default()
    };

    let mut obs = PlotObserver::<3>::new(FRAME_TRACES);
    feedback::solve(&config, &mut BoxMuller::thread_local(), &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title("zxyt: noiseless oscillation")
            .legend()
            .window(40),
    )?;

    Ok(())
}
