//! Reusable observers and read-only consumers for zxyt simulation output.
//!
//! Everything here either attaches to a run as an [`Observer`] or reads a
//! finished [`SimulationResult`]. Nothing mutates frames.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for engine-agnostic observers
//!   ([`HasFrame`], [`CanStopEarly`])
//! - [`csv`] — CSV export with columns `timestep,X,Y,Z`
//! - [`diagnostics`] — Running statistics of noise residuals and feedback
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] and [`show_result`] for a windowed
//!   chart of X, Y and Z via egui. This feature adds dependencies on `eframe`
//!   and `egui_plot`.
//!
//! [`Observer`]: zxyt_core::Observer
//! [`SimulationResult`]: zxyt_core::SimulationResult
//! [`HasFrame`]: traits::HasFrame
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod csv;
pub mod diagnostics;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{FRAME_TRACES, PlotObserver, Plottable, ShowConfig, show_result};
