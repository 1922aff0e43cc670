//! WAV file recorder
//!
//! Writes the rendered signal to a mono 32-bit float WAV file.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// WAV file recorder
pub struct Recorder {
    writer: WavWriter<BufWriter<File>>,
    sample_rate: u32,
    samples_written: u64,
}

impl Recorder {
    /// Open a new mono float WAV file for writing
    pub fn create(path: &Path, sample_rate: u32) -> Result<Self> {
        let spec = WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };

        let writer = WavWriter::create(path, spec)
            .with_context(|| format!("failed to create WAV file: {:?}", path))?;

        Ok(Self {
            writer,
            sample_rate,
            samples_written: 0,
        })
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of samples written
    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    /// Get the duration written in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples_written as f64 / self.sample_rate as f64
    }

    /// Write a whole signal
    pub fn write_signal(&mut self, signal: &[f64]) -> Result<()> {
        for &sample in signal {
            self.writer
                .write_sample(sample as f32)
                .context("failed to write sample")?;
        }
        self.samples_written += signal.len() as u64;
        Ok(())
    }

    /// Finalize the WAV file
    ///
    /// Must be called to write the header and close the file.
    pub fn finalize(self) -> Result<()> {
        self.writer.finalize().context("failed to finalize WAV file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_recorder_creation() {
        let file = NamedTempFile::new().unwrap();
        let recorder = Recorder::create(file.path(), 44100).unwrap();

        assert_eq!(recorder.sample_rate(), 44100);
        assert_eq!(recorder.samples_written(), 0);
        assert_eq!(recorder.duration_secs(), 0.0);
    }

    #[test]
    fn test_recorder_accounting() {
        let file = NamedTempFile::new().unwrap();
        let mut recorder = Recorder::create(file.path(), 44100).unwrap();

        recorder.write_signal(&vec![0.0; 44100]).unwrap();
        assert_eq!(recorder.samples_written(), 44100);
        assert!((recorder.duration_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_recorder_produces_valid_wav() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let signal: Vec<f64> = (0..1000)
            .map(|i| (i as f64 / 1000.0 * std::f64::consts::PI * 2.0).sin())
            .collect();

        {
            let mut recorder = Recorder::create(&path, 44100).unwrap();
            recorder.write_signal(&signal).unwrap();
            recorder.finalize().unwrap();
        }

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 32);
        assert_eq!(spec.sample_format, SampleFormat::Float);

        let samples: Vec<f32> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 1000);
        assert!((samples[250] - signal[250] as f32).abs() < 1e-6);
    }

    #[test]
    fn test_recorder_unwritable_path_errors() {
        let result = Recorder::create(Path::new("/no/such/dir/out.wav"), 44100);
        assert!(result.is_err());
    }
}
