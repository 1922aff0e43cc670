//! Sustained harmonic pad
//!
//! A handful of simultaneous tones under one constant envelope, each
//! with a slow, shallow vibrato. Populates every sample of the piece.

use std::f64::consts::PI;

use super::Voice;
use crate::config::PadConfig;
use crate::synth::TimeAxis;

/// Sustained pad voice
pub struct Pad {
    base_freq: f64,
    params: PadConfig,
}

impl Pad {
    pub fn new(base_freq: f64, params: PadConfig) -> Self {
        Self { base_freq, params }
    }
}

impl Voice for Pad {
    fn label(&self) -> &'static str {
        "pad"
    }

    fn render(&self, axis: &TimeAxis) -> Vec<f64> {
        let mut output = vec![0.0; axis.len()];

        for &ratio in &self.params.ratios {
            let freq = ratio * self.base_freq;
            // Offsetting the vibrato phase by the carrier frequency
            // keeps the voices from swaying in lockstep
            let phase = freq / 100.0;

            for (sample, &t) in output.iter_mut().zip(axis.timestamps()) {
                let vibrato = 1.0
                    + self.params.vibrato_depth
                        * (2.0 * PI * self.params.vibrato_rate * t + phase).sin();

                let fundamental = (2.0 * PI * freq * vibrato * t).sin();
                let second = self.params.harmonic_gain * (2.0 * PI * freq * 2.0 * vibrato * t).sin();
                *sample += fundamental + second;
            }
        }

        let level = self.params.sustain * self.params.level;
        for sample in output.iter_mut() {
            *sample *= level;
        }

        output
    }
}
