//! Time base for a render
//!
//! A uniformly sampled time axis covering the whole piece. Built once
//! by the renderer and read-only to the voices.

/// Uniformly sampled time axis
pub struct TimeAxis {
    sample_rate: f64,
    timestamps: Vec<f64>,
}

impl TimeAxis {
    /// Build the axis for a piece of the given length
    pub fn new(sample_rate: u32, duration_secs: f64) -> Self {
        let sample_rate = sample_rate as f64;
        let len = (sample_rate * duration_secs) as usize;
        let timestamps = (0..len).map(|i| i as f64 / sample_rate).collect();

        Self {
            sample_rate,
            timestamps,
        }
    }

    /// Number of samples in the axis
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check whether the axis is empty
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Length of the axis in seconds
    pub fn duration_secs(&self) -> f64 {
        self.timestamps.len() as f64 / self.sample_rate
    }

    /// Timestamp of every sample, in seconds
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Sample index of a point in time
    pub fn index_at(&self, secs: f64) -> usize {
        (secs * self.sample_rate) as usize
    }

    /// Sample range of an event, clamped to the axis
    ///
    /// Returns `start..end` indices; `start == end` when the event lies
    /// entirely past the end of the axis.
    pub fn span(&self, start_secs: f64, len_secs: f64) -> (usize, usize) {
        let start = self.index_at(start_secs).min(self.len());
        let len = (len_secs * self.sample_rate) as usize;
        let end = (start + len).min(self.len());
        (start, end)
    }
}
