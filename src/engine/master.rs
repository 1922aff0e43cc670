//! Mastering stage
//!
//! DC removal, peak normalization, tanh soft clipping, and a final
//! hard clip to the representable range.

use crate::config::MasterConfig;

/// Final level statistics of a mastered buffer
#[derive(Debug, Clone, Copy)]
pub struct MasterReport {
    /// Root-mean-square level
    pub rms: f64,

    /// Peak absolute amplitude
    pub peak: f64,
}

/// Subtract the signal mean
pub fn remove_dc(buffer: &mut [f64]) {
    if buffer.is_empty() {
        return;
    }
    let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
    for sample in buffer.iter_mut() {
        *sample -= mean;
    }
}

/// Scale the buffer so its peak equals `target`
///
/// A silent buffer is left untouched.
pub fn normalize_peak(buffer: &mut [f64], target: f64) {
    let current = peak(buffer);
    if current > 0.0 {
        let gain = target / current;
        for sample in buffer.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Tanh soft clip: `tanh(x * drive) * level`
pub fn soft_clip(buffer: &mut [f64], drive: f64, level: f64) {
    for sample in buffer.iter_mut() {
        *sample = (*sample * drive).tanh() * level;
    }
}

/// Hard clip to [-1, 1]
pub fn hard_clip(buffer: &mut [f64]) {
    for sample in buffer.iter_mut() {
        *sample = sample.clamp(-1.0, 1.0);
    }
}

/// Peak absolute amplitude
pub fn peak(buffer: &[f64]) -> f64 {
    buffer.iter().fold(0.0f64, |a, &s| a.max(s.abs()))
}

/// Root-mean-square level
pub fn rms(buffer: &[f64]) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    (buffer.iter().map(|s| s * s).sum::<f64>() / buffer.len() as f64).sqrt()
}

/// Run the full mastering chain in place and report final levels
pub fn master(buffer: &mut [f64], config: &MasterConfig) -> MasterReport {
    remove_dc(buffer);
    normalize_peak(buffer, config.target_peak);
    soft_clip(buffer, config.clip_drive, config.clip_level);
    hard_clip(buffer);

    MasterReport {
        rms: rms(buffer),
        peak: peak(buffer),
    }
}
