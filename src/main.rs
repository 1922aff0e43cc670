//! Hearthlight - procedurally rendered ambient hearth music

use anyhow::Result;
use hearthlight::engine::{Recorder, Renderer};
use hearthlight::TrackConfig;
use std::path::Path;

fn main() -> Result<()> {
    let config = TrackConfig::default();
    config.validate()?;

    println!(
        "Rendering {:.0}s of ambience at {} Hz...",
        config.audio.duration_secs, config.audio.sample_rate
    );

    let renderer = Renderer::new(config.clone());
    println!("  Voices: {}", renderer.voice_labels().join(", "));

    let track = renderer.render();
    println!("Mastered {} samples", track.samples.len());
    println!("  RMS:  {:.4}", track.report.rms);
    println!("  Peak: {:.4}", track.report.peak);

    let path = Path::new(&config.audio.output_file);
    let mut recorder = Recorder::create(path, config.audio.sample_rate)?;
    recorder.write_signal(&track.samples)?;
    let samples_written = recorder.samples_written();
    let seconds_written = recorder.duration_secs();
    recorder.finalize()?;
    println!(
        "Wrote {:?} ({} samples, {:.1}s)",
        path, samples_written, seconds_written
    );

    println!("\nThe piece:");
    println!("  - Plucked melody line with paired harmonics");
    println!("  - Warm sustained pad with slow vibrato");
    println!("  - Sparse bells with natural spacing");
    println!("  - Harmonic drone under a whisper of texture");
    println!("  - Occasional flute-like fragments");
    println!("  - Intimate single-tap reverb on every voice");
    println!("  - Warm tone shaping and gentle limiting");

    Ok(())
}
