//! Dashboard configuration – a TOML document with per-field defaults.
//!
//! The copy in `common/dashboard.toml` is compiled in so the server render and
//! the hydrated client always agree. The server can additionally validate an
//! override file at start-up.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::projection::MAX_TILE_ZOOM;
use crate::upload::MAX_FILES;
use crate::village::LatLng;

const BUNDLED_TOML: &str = include_str!("../dashboard.toml");

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub map: MapConfig,
    pub timing: TimingConfig,
    pub upload: UploadConfig,
}

// ── map ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Slippy tile URL with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub tile_url: String,
    pub attribution: String,
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Viewport size in CSS pixels.
    pub width: f64,
    pub height: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap contributors".into(),
            center: LatLng::new(11.5, 76.5),
            zoom: 9,
            min_zoom: 3,
            max_zoom: 18,
            width: 960.0,
            height: 560.0,
        }
    }
}

// ── timing ───────────────────────────────────────────────────────────────

/// Durations of the simulated delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub map_loading_ms: u64,
    pub insights_refresh_ms: u64,
    pub report_generation_ms: u64,
    pub banner_ms: u64,
    pub recorder_tick_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            map_loading_ms: 1500,
            insights_refresh_ms: 2000,
            report_generation_ms: 2000,
            banner_ms: 3000,
            recorder_tick_ms: 1000,
        }
    }
}

impl TimingConfig {
    pub fn map_loading(&self) -> Duration {
        Duration::from_millis(self.map_loading_ms)
    }

    pub fn insights_refresh(&self) -> Duration {
        Duration::from_millis(self.insights_refresh_ms)
    }

    pub fn report_generation(&self) -> Duration {
        Duration::from_millis(self.report_generation_ms)
    }

    pub fn banner(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    pub fn recorder_tick(&self) -> Duration {
        Duration::from_millis(self.recorder_tick_ms)
    }
}

// ── upload ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_files: usize,
    pub max_file_mb: u32,
    /// Value for the file input's `accept` attribute.
    pub accept: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_mb: 10,
            accept: ".pdf,.jpg,.jpeg,.png,.doc,.docx".into(),
        }
    }
}

// ── loading ──────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Config compiled into the binary, falling back to defaults if the
    /// embedded file does not parse.
    pub fn bundled() -> Self {
        parse(BUNDLED_TOML).unwrap_or_else(|e| {
            warn!("Bundled dashboard.toml rejected, using defaults: {e}");
            DashboardConfig::default()
        })
    }
}

/// Parse and validate a TOML document.
pub fn parse(text: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(text)?;
    let map = &config.map;
    if map.max_zoom > MAX_TILE_ZOOM {
        return Err(ConfigError::MaxZoomTooDeep { max_zoom: map.max_zoom, limit: MAX_TILE_ZOOM });
    }
    if map.zoom < map.min_zoom || map.zoom > map.max_zoom {
        return Err(ConfigError::ZoomOutOfRange {
            zoom: map.zoom,
            min: map.min_zoom,
            max: map.max_zoom,
        });
    }
    let max_files = config.upload.max_files;
    if max_files == 0 || max_files > MAX_FILES {
        return Err(ConfigError::UploadCapOutOfRange { max_files, limit: MAX_FILES });
    }
    Ok(config)
}

/// Read and validate a TOML file from disk.
pub fn load(path: &Path) -> Result<DashboardConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("Invalid config: {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_bundled_matches_defaults() {
        assert_eq!(parse(BUNDLED_TOML).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = parse(
            r#"
[map]
zoom = 11
center = [10.09, 77.06]

[timing]
map_loading_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(config.map.zoom, 11);
        assert_eq!(config.map.center, LatLng::new(10.09, 77.06));
        assert_eq!(config.timing.map_loading(), Duration::from_millis(250));
        assert_eq!(config.timing.banner_ms, 3000);
        assert_eq!(config.upload.max_files, 5);
    }

    #[test]
    fn test_zoom_out_of_range() {
        let err = parse("[map]\nzoom = 20\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZoomOutOfRange { zoom: 20, .. }));
    }

    #[test]
    fn test_max_zoom_beyond_tiles_rejected() {
        let err = parse("[map]\nmax_zoom = 40\n").unwrap_err();
        assert!(matches!(err, ConfigError::MaxZoomTooDeep { max_zoom: 40, limit: 19 }));
        assert!(parse("[map]\nmax_zoom = 19\n").is_ok());
    }

    #[test]
    fn test_upload_cap_above_five_rejected() {
        let err = parse("[upload]\nmax_files = 12\n").unwrap_err();
        assert!(matches!(err, ConfigError::UploadCapOutOfRange { max_files: 12, limit: 5 }));
        let err = parse("[upload]\nmax_files = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::UploadCapOutOfRange { max_files: 0, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/vanmitra.toml")).unwrap_err();
        assert!(err.to_string().contains("Cannot read config"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = tempfile("[upload]\nmax_files = 3\n");
        let config = load(path.as_path()).unwrap();
        assert_eq!(config.upload.max_files, 3);
    }

    fn tempfile(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("vanmitra_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dashboard.toml");
        std::fs::write(&path, content).unwrap();
        path
    }
}
