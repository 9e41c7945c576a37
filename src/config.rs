use crate::error::{PlayerError, Result};
use crate::playback::{TimestampSource, TimingPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_HOST: &str = "localhost";
/// Port Mercury listens on when used with flok/pulsar
pub const DEFAULT_PORT: u16 = 4880;
pub const DEFAULT_ADDRESS: &str = "/mercury-code";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Persistent OSC destination settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscSettings {
    pub host: String,
    pub port: u16,
    pub address: String,
}

impl Default for OscSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl OscSettings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mercury-log-player").join("settings.json"))
    }

    /// Load settings from the user config dir, falling back to defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str(&contents) {
                Ok(settings) => return settings,
                Err(e) => debug!("ignoring invalid settings in {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    /// Write settings to the user config dir
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("no config directory on this platform"))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Everything a playback session needs, validated before playback starts
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub folder: PathBuf,
    /// 1.0 = same as performance, 2.0 = twice as fast
    pub rate: f64,
    pub timing: TimingPolicy,
    pub extension: String,
    pub osc: OscSettings,
}

impl PlayerConfig {
    pub fn new(folder: Option<PathBuf>, osc: OscSettings) -> Result<Self> {
        let folder = folder.ok_or_else(|| {
            PlayerError::Config("please provide a folder path with option -f".to_string())
        })?;

        Ok(Self {
            folder,
            rate: 1.0,
            timing: TimingPolicy::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            osc,
        })
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_fixed_length(mut self, secs: Option<f64>) -> Self {
        self.timing.fixed_length_secs = secs;
        self
    }

    pub fn with_timestamp_source(mut self, source: TimestampSource) -> Self {
        self.timing.source = source;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Reject values that would make scheduling meaningless
    pub fn validate(self) -> Result<Self> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(PlayerError::Config(format!(
                "playback rate must be a positive number, got {}",
                self.rate
            )));
        }

        if let Some(secs) = self.timing.fixed_length_secs {
            if !secs.is_finite() || secs < 0.0 {
                return Err(PlayerError::Config(format!(
                    "length must be zero or more seconds, got {}",
                    secs
                )));
            }
        }

        if !self.osc.address.starts_with('/') {
            return Err(PlayerError::Config(format!(
                "OSC address must start with '/', got {:?}",
                self.osc.address
            )));
        }

        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(PlayerError::Config("file extension must not be empty".to_string()));
        }
        let extension = extension.to_string();

        Ok(Self { extension, ..self })
    }
}
