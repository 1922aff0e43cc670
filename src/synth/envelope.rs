//! Envelope shapes for note events
//!
//! An envelope is a multiplier over a note's lifetime, evaluated from
//! the elapsed time inside the event.

/// Envelope shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    /// Exponential decay from 1.0 at a fixed rate per second
    ExpDecay { rate: f64 },

    /// Half sine arc over the event, raised to a power
    HalfSine { power: f64 },
}

impl Envelope {
    /// Amplitude at `local_secs` into an event of `duration_secs`
    pub fn amplitude(&self, local_secs: f64, duration_secs: f64) -> f64 {
        match *self {
            Envelope::ExpDecay { rate } => (-local_secs * rate).exp(),
            Envelope::HalfSine { power } => {
                if duration_secs <= 0.0 {
                    return 0.0;
                }
                let arc = (std::f64::consts::PI * local_secs / duration_secs).sin();
                // The arc dips just below zero past the end of the event
                arc.max(0.0).powf(power)
            }
        }
    }
}
