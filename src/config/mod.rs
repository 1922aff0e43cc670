//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load a track configuration from a YAML file
///
/// The binary renders with the compiled-in defaults; this loader exists
/// so alternate parameter sets can be supplied in tests and tooling.
pub fn load_config(path: &Path) -> Result<TrackConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {:?}", path))?;
    let config: TrackConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
