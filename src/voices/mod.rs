//! Instrument voices
//!
//! Each voice is a pure producer: it reads the shared time axis and
//! its own fixed parameters and returns one signal of the same length.
//! Voices share no state; stochastic voices own a seed and build their
//! generator from it at render time.

mod bells;
mod drone;
mod fragment;
mod melody;
mod pad;

pub use bells::Bells;
pub use drone::Drone;
pub use fragment::Fragment;
pub use melody::Melody;
pub use pad::Pad;

use crate::synth::TimeAxis;

/// Trait for instrument voices
pub trait Voice {
    /// Short name used in progress output
    fn label(&self) -> &'static str;

    /// Render one signal, the same length as the time axis
    fn render(&self, axis: &TimeAxis) -> Vec<f64>;
}
