//! Recursive digital filters
//!
//! First-order and biquad sections used single-shot: state starts at
//! zero and the whole signal is processed in one pass.

use std::f64::consts::PI;

/// First-order filter section (one pole, one zero)
pub struct FirstOrder {
    b0: f64,
    b1: f64,
    a1: f64,

    x1: f64,
    y1: f64,
}

impl FirstOrder {
    /// First-order lowpass at the given cutoff
    pub fn lowpass(sample_rate: f64, cutoff_hz: f64) -> Self {
        let k = (PI * clamp_cutoff(cutoff_hz, sample_rate) / sample_rate).tan();
        Self {
            b0: k / (k + 1.0),
            b1: k / (k + 1.0),
            a1: (k - 1.0) / (k + 1.0),
            x1: 0.0,
            y1: 0.0,
        }
    }

    /// First-order highpass at the given cutoff
    pub fn highpass(sample_rate: f64, cutoff_hz: f64) -> Self {
        let k = (PI * clamp_cutoff(cutoff_hz, sample_rate) / sample_rate).tan();
        Self {
            b0: 1.0 / (k + 1.0),
            b1: -1.0 / (k + 1.0),
            a1: (k - 1.0) / (k + 1.0),
            x1: 0.0,
            y1: 0.0,
        }
    }

    /// Process a single sample
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.b1 * self.x1 - self.a1 * self.y1;
        self.x1 = input;
        self.y1 = output;
        output
    }

    /// Process a buffer of samples in place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Biquad filter section (Direct Form II transposed)
pub struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,

    z1: f64,
    z2: f64,
}

impl Biquad {
    /// Second-order lowpass with the given Q
    pub fn lowpass(sample_rate: f64, cutoff_hz: f64, q: f64) -> Self {
        let omega = 2.0 * PI * clamp_cutoff(cutoff_hz, sample_rate) / sample_rate;
        let alpha = omega.sin() / (2.0 * q);
        let cos_omega = omega.cos();

        let b0 = (1.0 - cos_omega) / 2.0;
        let b1 = 1.0 - cos_omega;
        let b2 = (1.0 - cos_omega) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self::normalized(b0, b1, b2, a0, a1, a2)
    }

    /// Second-order bandpass spanning the given band edges
    ///
    /// Center frequency and Q are derived from the edges; peak gain at
    /// the center is 0 dB.
    pub fn bandpass(sample_rate: f64, low_hz: f64, high_hz: f64) -> Self {
        let low = clamp_cutoff(low_hz, sample_rate);
        let high = clamp_cutoff(high_hz, sample_rate).max(low * 1.001);
        let center = (low * high).sqrt();
        let q = center / (high - low);

        let omega = 2.0 * PI * center / sample_rate;
        let alpha = omega.sin() / (2.0 * q);
        let cos_omega = omega.cos();

        let b0 = alpha;
        let b1 = 0.0;
        let b2 = -alpha;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self::normalized(b0, b1, b2, a0, a1, a2)
    }

    fn normalized(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Process a single sample
    pub fn process(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.z1;

        self.z1 = self.b1 * input - self.a1 * output + self.z2;
        self.z2 = self.b2 * input - self.a2 * output;

        output
    }

    /// Process a buffer of samples in place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Keep cutoffs inside the stable range for the sample rate
fn clamp_cutoff(cutoff_hz: f64, sample_rate: f64) -> f64 {
    cutoff_hz.clamp(1.0, sample_rate * 0.45)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, sample_rate: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect()
    }

    fn steady_rms(buffer: &[f64]) -> f64 {
        // Skip the first quarter so filter transients settle
        let tail = &buffer[buffer.len() / 4..];
        (tail.iter().map(|s| s * s).sum::<f64>() / tail.len() as f64).sqrt()
    }

    #[test]
    fn test_first_order_highpass_attenuates_low() {
        let mut buffer = sine(20.0, 44100.0, 44100);
        FirstOrder::highpass(44100.0, 1000.0).process_buffer(&mut buffer);
        assert!(steady_rms(&buffer) < 0.1, "got {}", steady_rms(&buffer));
    }

    #[test]
    fn test_first_order_highpass_passes_high() {
        let mut buffer = sine(8000.0, 44100.0, 44100);
        FirstOrder::highpass(44100.0, 35.0).process_buffer(&mut buffer);
        let rms = steady_rms(&buffer);
        assert!((rms - 1.0 / 2.0_f64.sqrt()).abs() < 0.05, "got {}", rms);
    }

    #[test]
    fn test_first_order_lowpass_attenuates_high() {
        let mut buffer = sine(10000.0, 44100.0, 44100);
        FirstOrder::lowpass(44100.0, 300.0).process_buffer(&mut buffer);
        assert!(steady_rms(&buffer) < 0.05, "got {}", steady_rms(&buffer));
    }

    #[test]
    fn test_biquad_lowpass_passes_low() {
        let mut buffer = sine(100.0, 44100.0, 44100);
        Biquad::lowpass(44100.0, 4500.0, 0.707).process_buffer(&mut buffer);
        let rms = steady_rms(&buffer);
        assert!((rms - 1.0 / 2.0_f64.sqrt()).abs() < 0.05, "got {}", rms);
    }

    #[test]
    fn test_biquad_lowpass_attenuates_high() {
        let mut buffer = sine(15000.0, 44100.0, 44100);
        Biquad::lowpass(44100.0, 1000.0, 0.707).process_buffer(&mut buffer);
        assert!(steady_rms(&buffer) < 0.05, "got {}", steady_rms(&buffer));
    }

    #[test]
    fn test_bandpass_passes_center() {
        // Geometric center of 80..1200 is ~310 Hz
        let mut buffer = sine(310.0, 44100.0, 44100);
        Biquad::bandpass(44100.0, 80.0, 1200.0).process_buffer(&mut buffer);
        let rms = steady_rms(&buffer);
        assert!(rms > 0.5, "got {}", rms);
    }

    #[test]
    fn test_bandpass_rejects_out_of_band() {
        let mut low = sine(10.0, 44100.0, 44100);
        let mut high = sine(12000.0, 44100.0, 44100);
        Biquad::bandpass(44100.0, 80.0, 1200.0).process_buffer(&mut low);
        Biquad::bandpass(44100.0, 80.0, 1200.0).process_buffer(&mut high);
        assert!(steady_rms(&low) < 0.2, "got {}", steady_rms(&low));
        assert!(steady_rms(&high) < 0.2, "got {}", steady_rms(&high));
    }

    #[test]
    fn test_state_starts_at_zero() {
        let mut filter = Biquad::lowpass(44100.0, 1000.0, 0.707);
        let output = filter.process(0.0);
        assert_eq!(output, 0.0);
    }
}
