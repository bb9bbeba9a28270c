//! Capability traits for engine-agnostic observers.
//!
//! These traits abstract over engine-specific event and action types, so an
//! observer can be written once and attached to any engine that emits frames.
//!
//! # Event traits
//!
//! - [`HasFrame`] — events that carry a frame and its timestep
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use zxyt_core::Observer;
//! use zxyt_observers::traits::{CanStopEarly, HasFrame};
//!
//! /// Stops a run once the imbalance grows past a limit.
//! struct RunawayGuard {
//!     limit: f64,
//! }
//!
//! impl<E: HasFrame, A: CanStopEarly> Observer<E, A> for RunawayGuard {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.frame().imbalance().abs() > self.limit {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use zxyt_core::Frame;
use zxyt_engine::feedback;

/// An event that carries a frame.
pub trait HasFrame {
    /// Returns the timestep (frame index) of this event.
    fn step(&self) -> usize;

    /// Returns the frame produced at this timestep.
    fn frame(&self) -> &Frame;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the engine early.
    fn stop_early() -> Self;
}

impl HasFrame for feedback::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl CanStopEarly for feedback::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
