//! Sparse bell accents
//!
//! Each candidate strike time sounds with a fixed probability; the
//! strike frequency is drawn from a small candidate set. Draws come
//! from the voice's own seeded generator, so renders are reproducible
//! and independent of the other voices.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Voice;
use crate::config::BellsConfig;
use crate::synth::{Envelope, TimeAxis};

/// Percussive bell voice
pub struct Bells {
    base_freq: f64,
    params: BellsConfig,
}

impl Bells {
    pub fn new(base_freq: f64, params: BellsConfig) -> Self {
        Self { base_freq, params }
    }

    /// Render with an explicit generator
    ///
    /// For each candidate strike, the occurrence draw comes before the
    /// frequency draw; reordering the strike list changes the outcome.
    pub fn render_with(&self, axis: &TimeAxis, rng: &mut impl Rng) -> Vec<f64> {
        let mut output = vec![0.0; axis.len()];
        let envelope = Envelope::ExpDecay {
            rate: self.params.decay_rate,
        };

        for &strike_time in &self.params.strike_times {
            if rng.gen::<f64>() >= self.params.probability {
                continue;
            }
            let ratio = self.params.ratios[rng.gen_range(0..self.params.ratios.len())];
            let freq = ratio * self.base_freq;

            let (start, end) = axis.span(strike_time, self.params.strike_secs);
            for (j, sample) in output[start..end].iter_mut().enumerate() {
                let local = j as f64 / axis.sample_rate();
                let tone = (2.0 * PI * freq * local).sin();
                *sample += tone
                    * envelope.amplitude(local, self.params.strike_secs)
                    * self.params.level;
            }
        }

        output
    }
}

impl Voice for Bells {
    fn label(&self) -> &'static str {
        "bells"
    }

    fn render(&self, axis: &TimeAxis) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        self.render_with(axis, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackConfig;

    fn test_bells(probability: f64) -> Bells {
        let config = TrackConfig::default();
        let mut params = config.bells;
        params.probability = probability;
        Bells::new(config.tuning.base_freq, params)
    }

    #[test]
    fn test_output_length_matches_axis() {
        let axis = TimeAxis::new(44100, 30.0);
        let signal = test_bells(0.6).render(&axis);
        assert_eq!(signal.len(), axis.len());
    }

    #[test]
    fn test_zero_probability_is_silent() {
        let axis = TimeAxis::new(44100, 30.0);
        let signal = test_bells(0.0).render(&axis);
        assert!(signal.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_certain_strikes_all_sound() {
        let axis = TimeAxis::new(44100, 120.0);
        let bells = test_bells(1.0);
        let signal = bells.render(&axis);

        for &strike_time in &bells.params.strike_times {
            let start = axis.index_at(strike_time);
            let window = &signal[start..start + 4410];
            assert!(
                window.iter().any(|&s| s != 0.0),
                "no strike at {}s",
                strike_time
            );
        }
    }

    #[test]
    fn test_same_seed_same_strikes() {
        let axis = TimeAxis::new(44100, 120.0);
        let a = test_bells(0.6).render(&axis);
        let b = test_bells(0.6).render(&axis);
        assert_eq!(a, b);
    }

    #[test]
    fn test_silent_outside_candidate_times() {
        let axis = TimeAxis::new(44100, 120.0);
        let signal = test_bells(1.0).render(&axis);

        // First candidate strike is at 20 s
        let first = axis.index_at(20.0);
        assert!(signal[..first].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_strike_past_the_end_is_clamped() {
        let config = TrackConfig::default();
        let mut params = config.bells;
        params.strike_times = vec![9.0];
        params.probability = 1.0;
        let bells = Bells::new(config.tuning.base_freq, params);

        // 5 s strike starting 1 s before the end: truncated, no panic
        let axis = TimeAxis::new(44100, 10.0);
        let signal = bells.render(&axis);
        assert_eq!(signal.len(), axis.len());
        assert!(signal[axis.index_at(9.5)] != 0.0);
    }
}
