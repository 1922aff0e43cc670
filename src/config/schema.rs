//! Configuration schema definitions
//!
//! Every constant of the piece lives here: tuning, note lists, timing
//! offsets, gains, filter cutoffs, mastering levels. The compiled-in
//! defaults describe the full track; alternate parameter sets can be
//! loaded from YAML for testing without code edits.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration for a render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Audio output settings
    pub audio: AudioConfig,

    /// Tuning of the whole piece
    pub tuning: TuningConfig,

    /// Plucked melody line
    pub melody: MelodyConfig,

    /// Sustained harmonic pad
    pub pad: PadConfig,

    /// Sparse bell accents
    pub bells: BellsConfig,

    /// Drone and noise texture
    pub drone: DroneConfig,

    /// Sparse melodic fragments
    pub fragment: FragmentConfig,

    /// Per-voice gains for the final mix
    pub mix: MixConfig,

    /// Tone-shaping filter chain
    pub tone: ToneConfig,

    /// Mastering stage
    pub master: MasterConfig,
}

impl TrackConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let nyquist = self.audio.sample_rate as f64 * 0.5;

        if self.audio.sample_rate < 8000 || self.audio.sample_rate > 192000 {
            bail!("Sample rate must be between 8000 and 192000");
        }
        if self.audio.duration_secs <= 0.0 {
            bail!("Duration must be positive");
        }
        if self.audio.output_file.is_empty() {
            bail!("Output file name must not be empty");
        }
        if self.tuning.base_freq <= 0.0 {
            bail!("Base frequency must be positive");
        }

        if self.melody.pattern.is_empty() {
            bail!("Melody pattern must contain at least one note");
        }
        for note in &self.melody.pattern {
            note.validate("melody")?;
        }
        if self.fragment.notes.is_empty() {
            bail!("Fragment notes must contain at least one note");
        }
        for note in &self.fragment.notes {
            note.validate("fragment")?;
        }

        if !(0.0..=1.0).contains(&self.bells.probability) {
            bail!("Bell strike probability must be between 0.0 and 1.0");
        }
        if self.bells.ratios.is_empty() {
            bail!("Bell frequency ratios must not be empty");
        }
        if self.bells.strike_secs <= 0.0 {
            bail!("Bell strike duration must be positive");
        }

        if self.drone.partials.is_empty() {
            bail!("Drone partials must not be empty");
        }
        if self.drone.noise.band_low <= 0.0 || self.drone.noise.band_low >= self.drone.noise.band_high
        {
            bail!("Noise band edges must satisfy 0 < low < high");
        }
        if self.drone.noise.band_high >= nyquist {
            bail!("Noise band upper edge must be below Nyquist");
        }

        for (name, reverb) in [
            ("melody", &self.melody.reverb),
            ("pad", &self.pad.reverb),
            ("bells", &self.bells.reverb),
            ("drone", &self.drone.reverb),
            ("fragment", &self.fragment.reverb),
        ] {
            reverb.validate(name)?;
        }

        if self.tone.highpass_hz <= 0.0 || self.tone.highpass_hz >= nyquist {
            bail!("Highpass cutoff must be between 0 and Nyquist");
        }
        if self.tone.presence_low_hz <= 0.0 || self.tone.presence_low_hz >= self.tone.presence_high_hz
        {
            bail!("Presence band edges must satisfy 0 < low < high");
        }
        if self.tone.presence_high_hz >= nyquist {
            bail!("Presence band upper edge must be below Nyquist");
        }
        if self.tone.lowpass_hz <= 0.0 || self.tone.lowpass_hz >= nyquist {
            bail!("Lowpass cutoff must be between 0 and Nyquist");
        }

        if self.master.target_peak <= 0.0 || self.master.target_peak > 1.0 {
            bail!("Normalization target peak must be between 0.0 and 1.0");
        }

        Ok(())
    }
}

/// Audio output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Length of the rendered piece in seconds
    pub duration_secs: f64,

    /// Output WAV file name, written to the working directory
    pub output_file: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration_secs: 120.0,
            output_file: "hearthlight.wav".to_string(),
        }
    }
}

/// Tuning of the whole piece
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Base frequency in Hz; every voice frequency is a ratio of this
    pub base_freq: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        // D3
        Self { base_freq: 146.83 }
    }
}

/// One note in a melodic sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Frequency as a ratio of the base frequency
    pub ratio: f64,

    /// Nominal duration in seconds
    pub duration: f64,
}

impl NoteConfig {
    fn new(ratio: f64, duration: f64) -> Self {
        Self { ratio, duration }
    }

    fn validate(&self, voice: &str) -> Result<()> {
        if self.ratio <= 0.0 {
            bail!("{} note ratio must be positive", voice);
        }
        if self.duration <= 0.0 {
            bail!("{} note duration must be positive", voice);
        }
        Ok(())
    }
}

/// Plucked melody line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MelodyConfig {
    /// Note sequence played back-to-back at each pattern start
    pub pattern: Vec<NoteConfig>,

    /// Offsets in seconds where the pattern begins
    pub pattern_starts: Vec<f64>,

    /// Volume applied to every pattern
    pub level: f64,

    /// Exponential decay rate of each note envelope
    pub decay_rate: f64,

    /// Gain of the second harmonic relative to the fundamental
    pub harmonic_gain: f64,

    /// Reverb applied to this voice
    pub reverb: ReverbConfig,
}

impl Default for MelodyConfig {
    fn default() -> Self {
        Self {
            pattern: vec![
                NoteConfig::new(1.0, 2.0),
                NoteConfig::new(1.2, 1.5),
                NoteConfig::new(1.5, 2.5),
                NoteConfig::new(2.0, 1.0),
                NoteConfig::new(1.5, 1.5),
                NoteConfig::new(1.2, 2.0),
                NoteConfig::new(1.0, 3.0),
            ],
            pattern_starts: vec![8.0, 35.0, 62.0, 89.0],
            level: 0.2,
            decay_rate: 1.0,
            harmonic_gain: 0.3,
            reverb: ReverbConfig::new(0.08, 0.3, 0.2),
        }
    }
}

/// Sustained harmonic pad
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Simultaneous voice frequencies as ratios of the base
    pub ratios: Vec<f64>,

    /// Vibrato rate in Hz
    pub vibrato_rate: f64,

    /// Vibrato depth as a fraction of the carrier frequency
    pub vibrato_depth: f64,

    /// Gain of the second harmonic relative to the fundamental
    pub harmonic_gain: f64,

    /// Constant amplitude envelope
    pub sustain: f64,

    /// Output level
    pub level: f64,

    /// Reverb applied to this voice
    pub reverb: ReverbConfig,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            ratios: vec![0.67, 1.0, 1.2, 1.5, 2.0],
            vibrato_rate: 0.8,
            vibrato_depth: 0.0002,
            harmonic_gain: 0.3,
            sustain: 0.5,
            level: 0.05,
            reverb: ReverbConfig::new(0.1, 0.25, 0.15),
        }
    }
}

/// Sparse bell accents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BellsConfig {
    /// Candidate strike frequencies as ratios of the base
    pub ratios: Vec<f64>,

    /// Candidate strike offsets in seconds
    pub strike_times: Vec<f64>,

    /// Probability that a candidate strike sounds
    pub probability: f64,

    /// Length of one strike in seconds
    pub strike_secs: f64,

    /// Exponential decay rate of each strike envelope
    pub decay_rate: f64,

    /// Output level
    pub level: f64,

    /// Seed for strike decisions and frequency choices
    pub seed: u64,

    /// Reverb applied to this voice
    pub reverb: ReverbConfig,
}

impl Default for BellsConfig {
    fn default() -> Self {
        Self {
            ratios: vec![2.0, 3.0, 4.0, 5.0],
            strike_times: vec![20.0, 38.0, 58.0, 76.0, 98.0],
            probability: 0.6,
            strike_secs: 5.0,
            decay_rate: 0.8,
            level: 0.06,
            seed: 42,
            reverb: ReverbConfig::new(0.12, 0.35, 0.2),
        }
    }
}

/// One drone partial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialConfig {
    /// Frequency as a ratio of the base frequency
    pub ratio: f64,

    /// Relative gain of this partial
    pub gain: f64,
}

/// Drone and noise texture
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneConfig {
    /// Sine partials summed into the drone
    pub partials: Vec<PartialConfig>,

    /// Constant amplitude envelope
    pub sustain: f64,

    /// Output level of the drone sum
    pub level: f64,

    /// Band-limited noise texture added on top
    pub noise: NoiseConfig,

    /// Reverb applied to this voice
    pub reverb: ReverbConfig,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            partials: vec![
                PartialConfig { ratio: 1.0, gain: 1.0 },
                PartialConfig { ratio: 1.5, gain: 0.6 },
                PartialConfig { ratio: 2.0, gain: 0.4 },
            ],
            sustain: 0.8,
            level: 0.08,
            noise: NoiseConfig::default(),
            reverb: ReverbConfig::new(0.04, 0.2, 0.1),
        }
    }
}

/// Band-limited noise texture
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Gain of the filtered noise
    pub gain: f64,

    /// Lower band edge in Hz
    pub band_low: f64,

    /// Upper band edge in Hz
    pub band_high: f64,

    /// Seed for the noise samples
    pub seed: u64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            gain: 0.003,
            band_low: 80.0,
            band_high: 1200.0,
            seed: 43,
        }
    }
}

/// Sparse melodic fragments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentConfig {
    /// Note sequence played at each fragment start
    pub notes: Vec<NoteConfig>,

    /// Offsets in seconds where a fragment begins
    pub fragment_starts: Vec<f64>,

    /// Silence inserted after each note in seconds
    pub note_gap: f64,

    /// Power the half-sine envelope is raised to
    pub envelope_power: f64,

    /// Gain of the second harmonic relative to the fundamental
    pub harmonic_gain: f64,

    /// Output level
    pub level: f64,

    /// Reverb applied to this voice
    pub reverb: ReverbConfig,
}

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            notes: vec![
                NoteConfig::new(2.0, 2.5),
                NoteConfig::new(2.25, 1.5),
                NoteConfig::new(2.67, 2.0),
                NoteConfig::new(3.0, 3.0),
            ],
            fragment_starts: vec![45.0, 85.0],
            note_gap: 0.5,
            envelope_power: 0.5,
            harmonic_gain: 0.2,
            level: 0.06,
            reverb: ReverbConfig::new(0.06, 0.2, 0.15),
        }
    }
}

/// Single-tap reverb parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverbConfig {
    /// Tap delay in seconds
    pub delay_secs: f64,

    /// Gain applied to the delayed copy
    pub decay: f64,

    /// Wet fraction mixed back onto the dry signal
    pub wet: f64,
}

impl ReverbConfig {
    pub fn new(delay_secs: f64, decay: f64, wet: f64) -> Self {
        Self { delay_secs, decay, wet }
    }

    fn validate(&self, voice: &str) -> Result<()> {
        if self.delay_secs < 0.0 {
            bail!("{} reverb delay must not be negative", voice);
        }
        if !(0.0..=1.0).contains(&self.decay) {
            bail!("{} reverb decay must be between 0.0 and 1.0", voice);
        }
        if !(0.0..=1.0).contains(&self.wet) {
            bail!("{} reverb wet fraction must be between 0.0 and 1.0", voice);
        }
        Ok(())
    }
}

impl Default for ReverbConfig {
    fn default() -> Self {
        Self::new(0.08, 0.25, 0.15)
    }
}

/// Per-voice gains for the final mix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConfig {
    pub melody: f64,
    pub pad: f64,
    pub bells: f64,
    pub drone: f64,
    pub fragment: f64,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            melody: 1.2,
            pad: 0.8,
            bells: 0.7,
            drone: 0.8,
            fragment: 0.6,
        }
    }
}

/// Tone-shaping filter chain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// First-order highpass cutoff in Hz
    pub highpass_hz: f64,

    /// Lower edge of the presence band in Hz
    pub presence_low_hz: f64,

    /// Upper edge of the presence band in Hz
    pub presence_high_hz: f64,

    /// Gain of the presence band added back onto the signal
    pub presence_gain: f64,

    /// Second-order lowpass cutoff in Hz
    pub lowpass_hz: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            highpass_hz: 35.0,
            presence_low_hz: 800.0,
            presence_high_hz: 3000.0,
            presence_gain: 0.1,
            lowpass_hz: 4500.0,
        }
    }
}

/// Mastering stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterConfig {
    /// Peak level after normalization
    pub target_peak: f64,

    /// Input gain of the tanh soft clipper
    pub clip_drive: f64,

    /// Output gain of the tanh soft clipper
    pub clip_level: f64,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            target_peak: 0.8,
            clip_drive: 1.1,
            clip_level: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_track_shape() {
        let config = TrackConfig::default();
        assert_eq!(config.audio.sample_rate, 44100);
        assert_eq!(config.audio.duration_secs, 120.0);
        assert_eq!(config.melody.pattern.len(), 7);
        assert_eq!(config.melody.pattern_starts.len(), 4);
        assert_eq!(config.bells.strike_times.len(), 5);
        assert_eq!(config.fragment.fragment_starts.len(), 2);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "audio:\n  sample_rate: 48000\n";
        let config: TrackConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.audio.sample_rate, 48000);
        assert_eq!(config.audio.duration_secs, 120.0); // default
        assert_eq!(config.tuning.base_freq, 146.83); // default
    }

    #[test]
    fn test_voice_section_override() {
        let yaml = r#"
bells:
  probability: 1.0
  seed: 7
"#;
        let config: TrackConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bells.probability, 1.0);
        assert_eq!(config.bells.seed, 7);
        assert_eq!(config.bells.ratios.len(), 4); // default
    }

    #[test]
    fn test_invalid_sample_rate() {
        let mut config = TrackConfig::default();
        config.audio.sample_rate = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_probability() {
        let mut config = TrackConfig::default();
        config.bells.probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_presence_band() {
        let mut config = TrackConfig::default();
        config.tone.presence_low_hz = 5000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_noise_band_above_nyquist() {
        let mut config = TrackConfig::default();
        config.audio.sample_rate = 8000;
        config.drone.noise.band_high = 6000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_melody_pattern() {
        let mut config = TrackConfig::default();
        config.melody.pattern.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_reverb_wet() {
        let mut config = TrackConfig::default();
        config.pad.reverb.wet = 2.0;
        assert!(config.validate().is_err());
    }
}
