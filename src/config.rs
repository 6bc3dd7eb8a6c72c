//! Interaction layer configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configuration for the interaction layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Scale factor applied to raw device coordinates; logical position
    /// is raw position divided by this value
    pub pointer_scale: f32,
    /// Maximum press-to-release time, in seconds, for a tap
    pub tap_threshold: f64,
}

impl InteractionConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Settings are loaded in the following order:
    /// 1. config/{profile}.toml (optional, profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_POINTER_SCALE=2.0)
    pub fn load(profile: &str) -> Result<Self, Error> {
        let config = Config::builder()
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .set_default("pointer_scale", 1.0)?
            .set_default("tap_threshold", 0.2)?
            .set_override("profile", profile)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, Error> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            pointer_scale: 1.0,
            tap_threshold: 0.2,
        }
    }
}
