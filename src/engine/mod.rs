//! Offline render engine
//!
//! Builds the time axis, renders each voice, applies per-voice reverb,
//! mixes, shapes tone, and masters. One call, one finished buffer.

mod master;
mod mixer;
mod recorder;

pub use master::MasterReport;
pub use recorder::Recorder;

use crate::config::TrackConfig;
use crate::synth::{Reverb, TimeAxis};
use crate::voices::{Bells, Drone, Fragment, Melody, Pad, Voice};

/// One voice with its post-processing settings
struct Lane {
    voice: Box<dyn Voice>,
    reverb: Reverb,
    gain: f64,
}

/// A finished render
pub struct RenderedTrack {
    /// Final samples, bounded to [-1, 1]
    pub samples: Vec<f64>,

    /// Final level statistics
    pub report: MasterReport,
}

/// The offline renderer
pub struct Renderer {
    config: TrackConfig,
}

impl Renderer {
    /// Create a renderer for the given configuration
    pub fn new(config: TrackConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// Labels of the voices, in mix order
    pub fn voice_labels(&self) -> Vec<&'static str> {
        self.lanes().iter().map(|lane| lane.voice.label()).collect()
    }

    fn lanes(&self) -> Vec<Lane> {
        let cfg = &self.config;
        let base = cfg.tuning.base_freq;

        let lane = |voice: Box<dyn Voice>, reverb: &crate::config::ReverbConfig, gain: f64| Lane {
            voice,
            reverb: Reverb::new(reverb.delay_secs, reverb.decay, reverb.wet),
            gain,
        };

        vec![
            lane(
                Box::new(Melody::new(base, cfg.melody.clone())),
                &cfg.melody.reverb,
                cfg.mix.melody,
            ),
            lane(
                Box::new(Pad::new(base, cfg.pad.clone())),
                &cfg.pad.reverb,
                cfg.mix.pad,
            ),
            lane(
                Box::new(Bells::new(base, cfg.bells.clone())),
                &cfg.bells.reverb,
                cfg.mix.bells,
            ),
            lane(
                Box::new(Drone::new(base, cfg.drone.clone())),
                &cfg.drone.reverb,
                cfg.mix.drone,
            ),
            lane(
                Box::new(Fragment::new(base, cfg.fragment.clone())),
                &cfg.fragment.reverb,
                cfg.mix.fragment,
            ),
        ]
    }

    /// Render the full piece
    pub fn render(&self) -> RenderedTrack {
        let axis = TimeAxis::new(self.config.audio.sample_rate, self.config.audio.duration_secs);

        let mut weighted = Vec::new();
        for lane in self.lanes() {
            let signal = lane.voice.render(&axis);
            let signal = lane.reverb.apply(&signal, axis.sample_rate());
            weighted.push((signal, lane.gain));
        }

        let mut samples = mixer::mix(&weighted);
        mixer::shape_tone(&mut samples, &self.config.tone, axis.sample_rate());
        let report = master::master(&mut samples, &self.config.master);

        RenderedTrack { samples, report }
    }
}
