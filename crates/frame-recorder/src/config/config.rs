//! Configuration management for frame-recorder.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{LoggingConfig, RecordingConfig, SourceConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use frame_recorder_core::{FrameRate, RecorderParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recording session settings.
    #[serde(default)]
    pub recording: RecordingConfig,
    /// Synthetic frame source settings.
    #[serde(default)]
    pub source: SourceConfig,
    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the platform config directory, creating a
    /// default file if none exists.
    ///
    /// Note: This does NOT validate the values. Call `validate()` before
    /// building a recorder from it.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config found, creating default");
            Self::create_default(&config_path)
        }
    }

    /// Load configuration from a specific file.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::parse(&contents)?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text. Missing sections and keys take
    /// their defaults.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check every value the recorder and frame source depend on.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        FrameRate::new(self.recording.frame_rate_hz).map_err(|e| AppError::ConfigError {
            reason: format!("recording.frame_rate_hz: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let period = self.source_frame_period()?;

        if self.source.payload_bytes == 0 {
            return Err(AppError::ConfigError {
                reason: "source.payload_bytes must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let jitter = Duration::from_millis(self.source.jitter_ms);
        if jitter >= period {
            return Err(AppError::ConfigError {
                reason: format!(
                    "source.jitter_ms ({:?}) must be shorter than the frame period ({:?})",
                    jitter, period
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Session params for the recorder.
    #[track_caller]
    pub fn recorder_params(&self) -> AppResult<RecorderParams> {
        Ok(RecorderParams::new(
            self.recording.frame_rate_hz,
            self.recording.camera_facing.into(),
        )?)
    }

    /// Time between frames produced by the synthetic source.
    #[track_caller]
    pub fn source_frame_period(&self) -> AppResult<Duration> {
        let rate = FrameRate::new(self.source.frame_rate_hz).map_err(|e| AppError::ConfigError {
            reason: format!("source.frame_rate_hz: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let nanos = u64::try_from(rate.interval_nanos()).map_err(|e| AppError::ConfigError {
            reason: format!("source.frame_rate_hz: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Duration::from_nanos(nanos))
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "frame-recorder", "Frame-Recorder").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default(config_path: &Path) -> AppResult<Self> {
        let config = Config::default();

        config.save_to(config_path)?;

        info!(config_path = ?config_path, "Default config created");

        Ok(config)
    }
}
