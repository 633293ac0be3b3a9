use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};

pub const DEFAULT_MAX_SPEED_MS: f64 = 20.0;
pub const DEFAULT_SMOOTH_NEIGHBORS: usize = 5;
pub const DEFAULT_SMOOTH_WINDOW_S: f64 = 5.0;
/// Upper limit for `smooth_window_s` (one day).
pub const MAX_SMOOTH_WINDOW_S: f64 = 86_400.0;

/// Filtering and smoothing knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Speed ceiling between adjacent kept points (m/s); faster fixes are GPS jumps.
    pub max_speed_ms: f64,
    /// Points taken on each side of a sample when smoothing.
    pub smooth_neighbors: usize,
    /// Time reach on each side of a sample when smoothing (s).
    pub smooth_window_s: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            max_speed_ms: DEFAULT_MAX_SPEED_MS,
            smooth_neighbors: DEFAULT_SMOOTH_NEIGHBORS,
            smooth_window_s: DEFAULT_SMOOTH_WINDOW_S,
        }
    }
}

impl TrackConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.max_speed_ms.is_finite() || self.max_speed_ms <= 0.0 {
            return Err(TrackError::InvalidConfig(format!(
                "max_speed_ms must be a positive number, got {}",
                self.max_speed_ms
            )));
        }
        if !self.smooth_window_s.is_finite()
            || self.smooth_window_s < 0.0
            || self.smooth_window_s > MAX_SMOOTH_WINDOW_S
        {
            return Err(TrackError::InvalidConfig(format!(
                "smooth_window_s must be between 0 and {MAX_SMOOTH_WINDOW_S}, got {}",
                self.smooth_window_s
            )));
        }
        Ok(())
    }

    pub fn smooth_window(&self) -> chrono::Duration {
        chrono::Duration::microseconds((self.smooth_window_s * 1_000_000.0).round() as i64)
    }
}

/// Parses a config from JSON text, reporting the field path on failure.
pub fn parse_config(json: &str) -> Result<TrackConfig> {
    let mut de = serde_json::Deserializer::from_str(json);
    let cfg: TrackConfig = serde_path_to_error::deserialize(&mut de).map_err(|e| TrackError::Config {
        path: e.path().to_string(),
        source: e.into_inner(),
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Reads a config from disk (JSON).
/// A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<TrackConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg = parse_config(&contents)?;
        log::info!("config loaded from {} ({:?})", path.display(), cfg);
        Ok(cfg)
    } else {
        log::warn!("config {} not found, using defaults", path.display());
        Ok(TrackConfig::default())
    }
}

/// Writes a config to disk as pretty JSON.
pub fn save_config(cfg: &TrackConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg).map_err(|e| TrackError::Config {
        path: ".".to_string(),
        source: e,
    })?;
    std::fs::write(path, json)?;
    log::info!("config saved to {}", path.display());
    Ok(())
}
