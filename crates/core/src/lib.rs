//! Core types for the zxyt feedback simulation.
//!
//! This crate defines the shared abstractions that the engine, observers, and
//! front ends build on:
//!
//! - [`Frame`] — one timestep's snapshot of X, Y, the feedback term Z, and the
//!   [`Direction`] the observer currently favors
//! - [`SimulationResult`] — the ordered, read-only sequence of frames a run
//!   produces
//! - [`Observer`] — receives engine events and optionally returns control actions
//! - [`GaussianSource`] — the injectable source of standard normal draws

mod direction;
mod frame;
mod noise;
mod observer;
mod result;

pub use direction::Direction;
pub use frame::Frame;
pub use noise::GaussianSource;
pub use observer::Observer;
pub use result::{SimulationResult, window_bounds};
