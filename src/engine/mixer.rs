//! Mix-down and tone shaping
//!
//! Weighted sum of the reverberated voices, then a fixed filter chain:
//! highpass to clear the mud, a parallel presence boost, and a warm
//! lowpass.

use crate::config::ToneConfig;
use crate::synth::{Biquad, FirstOrder};

/// Weighted sum of same-length signals
pub fn mix(signals: &[(Vec<f64>, f64)]) -> Vec<f64> {
    let len = signals.first().map_or(0, |(signal, _)| signal.len());
    let mut output = vec![0.0; len];

    for (signal, gain) in signals {
        assert_eq!(signal.len(), len, "voice signals must share one length");
        for (out, sample) in output.iter_mut().zip(signal) {
            *out += sample * gain;
        }
    }

    output
}

/// Apply the tone-shaping chain in place
///
/// Filter state starts at zero on every call; the chain is single-shot,
/// not streaming.
pub fn shape_tone(buffer: &mut [f64], tone: &ToneConfig, sample_rate: f64) {
    FirstOrder::highpass(sample_rate, tone.highpass_hz).process_buffer(buffer);

    // Presence band is boosted in parallel, not substituted
    let mut presence = buffer.to_vec();
    FirstOrder::highpass(sample_rate, tone.presence_low_hz).process_buffer(&mut presence);
    FirstOrder::lowpass(sample_rate, tone.presence_high_hz).process_buffer(&mut presence);
    for (sample, band) in buffer.iter_mut().zip(&presence) {
        *sample += band * tone.presence_gain;
    }

    Biquad::lowpass(sample_rate, tone.lowpass_hz, 0.707).process_buffer(buffer);
}
