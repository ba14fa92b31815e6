//! Host configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `pixelpet.ron` file (if exists)
//! 3. Environment variables prefixed with `PIXELPET_`
//!
//! Example environment variable: `PIXELPET_SIMULATION__VARIANT=evolving`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use pixelpet_life::LifeVariant;
use serde::{Deserialize, Serialize};

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PetConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub debug: DebugConfig,
}

/// Which rules to run and how to seed them
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    pub variant: LifeVariant,
    /// Fixed seed for reproducible runs, entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Body animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Seconds between animation frames
    pub frame_interval_secs: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_secs: 0.1,
        }
    }
}

/// Debug/development settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DebugConfig {
    /// Enable verbose logging
    pub verbose_logging: bool,
}

impl PetConfig {
    /// Load from the working directory's `pixelpet.ron` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from("pixelpet")
    }

    /// Load with `file_stem` as the optional ron file (extension added by the loader)
    pub fn load_from(file_stem: &str) -> Result<Self> {
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("simulation.variant", "classic")?
            .set_default("animation.frame_interval_secs", 0.1)?
            .set_default("debug.verbose_logging", false)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file_stem)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (PIXELPET_SIMULATION__SEED, etc.)
            .add_source(Environment::with_prefix("PIXELPET").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let loaded: PetConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        let interval = loaded.animation.frame_interval_secs;
        if interval.is_nan() || interval <= 0.0 {
            anyhow::bail!("animation.frame_interval_secs must be positive, got {interval}");
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PetConfig::default();
        assert_eq!(config.simulation.variant, LifeVariant::Classic);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.animation.frame_interval_secs, 0.1);
        assert!(!config.debug.verbose_logging);
    }

    #[test]
    fn test_load_config_with_defaults() {
        // Should load defaults when no config file exists
        let config = PetConfig::load_from("no-such-pixelpet-config").expect("Failed to load config");
        assert_eq!(config.simulation.variant, LifeVariant::Classic);
        assert_eq!(config.animation.frame_interval_secs, 0.1);
    }

    #[test]
    fn test_load_config_from_ron_file() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("pet");
        std::fs::write(
            stem.with_extension("ron"),
            "(simulation: (variant: \"evolving\", seed: 9), animation: (frame_interval_secs: 0.25))",
        )
        .unwrap();

        let config = PetConfig::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.simulation.variant, LifeVariant::Evolving);
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.animation.frame_interval_secs, 0.25);
    }
}
