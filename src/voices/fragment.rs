//! Sparse melodic fragments
//!
//! A short flute-like phrase that surfaces a couple of times in the
//! piece. Notes sit under a smooth half-sine arc and are separated by
//! small gaps of silence.

use std::f64::consts::PI;

use super::Voice;
use crate::config::FragmentConfig;
use crate::synth::{Envelope, TimeAxis};

/// Sparse fragment voice
pub struct Fragment {
    base_freq: f64,
    params: FragmentConfig,
}

impl Fragment {
    pub fn new(base_freq: f64, params: FragmentConfig) -> Self {
        Self { base_freq, params }
    }
}

impl Voice for Fragment {
    fn label(&self) -> &'static str {
        "fragment"
    }

    fn render(&self, axis: &TimeAxis) -> Vec<f64> {
        let mut output = vec![0.0; axis.len()];
        let total = axis.duration_secs();
        let envelope = Envelope::HalfSine {
            power: self.params.envelope_power,
        };

        for &fragment_start in &self.params.fragment_starts {
            let mut cursor = fragment_start;

            for note in &self.params.notes {
                if cursor + note.duration < total {
                    let freq = note.ratio * self.base_freq;
                    let (start, end) = axis.span(cursor, note.duration);

                    for (j, sample) in output[start..end].iter_mut().enumerate() {
                        let local = j as f64 / axis.sample_rate();
                        let fundamental = (2.0 * PI * freq * local).sin();
                        let second =
                            self.params.harmonic_gain * (2.0 * PI * freq * 2.0 * local).sin();
                        *sample += (fundamental + second)
                            * envelope.amplitude(local, note.duration)
                            * self.params.level;
                    }
                }
                cursor += note.duration + self.params.note_gap;
            }
        }

        output
    }
}
