//! Drone and noise texture
//!
//! A stack of sine partials held for the whole piece, with a whisper
//! of band-limited noise on top.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Voice;
use crate::config::DroneConfig;
use crate::synth::{Biquad, TimeAxis};

/// Continuous drone voice
pub struct Drone {
    base_freq: f64,
    params: DroneConfig,
}

impl Drone {
    pub fn new(base_freq: f64, params: DroneConfig) -> Self {
        Self { base_freq, params }
    }

    fn texture(&self, axis: &TimeAxis) -> Vec<f64> {
        let noise = &self.params.noise;
        let mut rng = StdRng::seed_from_u64(noise.seed);

        let mut texture: Vec<f64> = (0..axis.len())
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();

        Biquad::bandpass(axis.sample_rate(), noise.band_low, noise.band_high)
            .process_buffer(&mut texture);

        for sample in texture.iter_mut() {
            *sample *= noise.gain;
        }
        texture
    }
}

impl Voice for Drone {
    fn label(&self) -> &'static str {
        "drone"
    }

    fn render(&self, axis: &TimeAxis) -> Vec<f64> {
        let level = self.params.sustain * self.params.level;
        let mut output = vec![0.0; axis.len()];

        for partial in &self.params.partials {
            let freq = partial.ratio * self.base_freq;
            for (sample, &t) in output.iter_mut().zip(axis.timestamps()) {
                *sample += partial.gain * (2.0 * PI * freq * t).sin();
            }
        }
        for sample in output.iter_mut() {
            *sample *= level;
        }

        let texture = self.texture(axis);
        for (sample, grain) in output.iter_mut().zip(texture) {
            *sample += grain;
        }

        output
    }
}
