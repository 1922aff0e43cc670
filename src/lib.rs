//! Hearthlight - procedurally rendered ambient hearth music
//!
//! Renders one fixed two-minute ambient piece from compiled-in
//! parameters: a plucked melody, a sustained pad, sparse bells, a
//! harmonic drone with noise texture, and flute-like fragments, each
//! reverberated, then mixed, tone-shaped, mastered, and written to a
//! mono WAV file.

pub mod config;
pub mod engine;
pub mod synth;
pub mod voices;

pub use config::TrackConfig;
pub use engine::{RenderedTrack, Renderer};
