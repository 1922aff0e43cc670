//! Plucked melody line
//!
//! Repeats a fixed note sequence at a handful of offsets through the
//! piece. Each note is a fundamental plus a weaker second harmonic
//! under an exponential decay.

use std::f64::consts::PI;

use super::Voice;
use crate::config::MelodyConfig;
use crate::synth::{Envelope, TimeAxis};

/// Sparse plucked melody voice
pub struct Melody {
    base_freq: f64,
    params: MelodyConfig,
}

impl Melody {
    /// Create the voice from its parameters
    pub fn new(base_freq: f64, params: MelodyConfig) -> Self {
        Self { base_freq, params }
    }

    fn add_note(&self, output: &mut [f64], axis: &TimeAxis, start_secs: f64, freq: f64, duration: f64) {
        let envelope = Envelope::ExpDecay {
            rate: self.params.decay_rate,
        };
        let (start, end) = axis.span(start_secs, duration);

        for (j, sample) in output[start..end].iter_mut().enumerate() {
            let local = j as f64 / axis.sample_rate();
            let fundamental = (2.0 * PI * freq * local).sin();
            let second = self.params.harmonic_gain * (2.0 * PI * freq * 2.0 * local).sin();
            *sample += (fundamental + second) * envelope.amplitude(local, duration) * self.params.level;
        }
    }
}

impl Voice for Melody {
    fn label(&self) -> &'static str {
        "melody"
    }

    fn render(&self, axis: &TimeAxis) -> Vec<f64> {
        let mut output = vec![0.0; axis.len()];
        let total = axis.duration_secs();

        for &pattern_start in &self.params.pattern_starts {
            let mut cursor = pattern_start;

            for note in &self.params.pattern {
                // A note that would run past the end is dropped, not
                // truncated; the cursor still advances
                if cursor + note.duration < total {
                    self.add_note(&mut output, axis, cursor, note.ratio * self.base_freq, note.duration);
                }
                cursor += note.duration;
            }
        }

        output
    }
}
