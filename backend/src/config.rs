//! Starscape configuration file support.
//!
//! Configuration is read from `starscape.toml`. Every field has a default, so a
//! missing file (or a file with only some sections) is valid. Environment
//! variables are applied on top of the file.
//!
//! ```toml
//! [builder]
//! input = "hygdata_v3.csv"
//! output = "stars_60ly.json"
//! max_distance_ly = 60.0
//!
//! [scene]
//! default_view_distance = 20.0
//! line_mode = "connections"
//!
//! [server]
//! port = 8080
//! repository = "file"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::db::RepositoryType;
use crate::scene::{GridMode, LineMode};

/// Name of the configuration file looked up by [`StarscapeConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "starscape.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarscapeConfig {
    #[serde(default)]
    pub builder: BuilderSettings,
    #[serde(default)]
    pub scene: SceneSettings,
    #[serde(default)]
    pub focus: FocusSettings,
    #[serde(default)]
    pub performance: PerformanceSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Catalog builder inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderSettings {
    /// Raw HYG-style CSV table
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Normalized JSON catalog written by the builder
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_max_distance_ly")]
    pub max_distance_ly: f64,
}

/// Initial view parameters of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    #[serde(default = "default_view_distance")]
    pub default_view_distance: f64,
    /// Cutoffs offered by the view-distance selector
    #[serde(default = "default_view_distance_options")]
    pub view_distance_options: Vec<f64>,
    /// Label offset along camera-right
    #[serde(default = "default_label_pad")]
    pub label_pad: f64,
    /// Label offset along camera-up
    #[serde(default)]
    pub label_v_offset: f64,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(default)]
    pub line_mode: LineMode,
    #[serde(default)]
    pub grid_mode: GridMode,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub show_axes: bool,
}

/// Camera focus animation timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSettings {
    #[serde(default = "default_orient_ms")]
    pub orient_ms: u64,
    #[serde(default = "default_zoom_ms")]
    pub zoom_ms: u64,
    /// Orbit radius reached at the end of a zoom
    #[serde(default = "default_zoom_radius")]
    pub zoom_radius: f64,
}

/// Frame loop throttling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSettings {
    #[serde(default = "default_true")]
    pub idle_skip: bool,
    /// Quiet frames before throttling starts
    #[serde(default = "default_idle_threshold_frames")]
    pub idle_threshold_frames: u32,
    /// While throttled, sync and render every n-th frame
    #[serde(default = "default_idle_render_interval")]
    pub idle_render_interval: u32,
}

/// Catalog server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Catalog JSON served by the file repository
    #[serde(default = "default_output")]
    pub catalog: PathBuf,
    /// `local` or `file`
    #[serde(default = "default_repository")]
    pub repository: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("hygdata_v3.csv")
}

fn default_output() -> PathBuf {
    PathBuf::from("stars_60ly.json")
}

fn default_max_distance_ly() -> f64 {
    60.0
}

fn default_view_distance() -> f64 {
    20.0
}

fn default_view_distance_options() -> Vec<f64> {
    vec![8.0, 12.0, 16.0, 20.0]
}

fn default_label_pad() -> f64 {
    0.3
}

fn default_true() -> bool {
    true
}

fn default_orient_ms() -> u64 {
    800
}

fn default_zoom_ms() -> u64 {
    700
}

fn default_zoom_radius() -> f64 {
    5.0
}

fn default_idle_threshold_frames() -> u32 {
    120
}

fn default_idle_render_interval() -> u32 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_repository() -> String {
    "file".to_string()
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            max_distance_ly: default_max_distance_ly(),
        }
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            default_view_distance: default_view_distance(),
            view_distance_options: default_view_distance_options(),
            label_pad: default_label_pad(),
            label_v_offset: 0.0,
            show_labels: true,
            line_mode: LineMode::default(),
            grid_mode: GridMode::default(),
            show_grid: true,
            show_axes: false,
        }
    }
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            orient_ms: default_orient_ms(),
            zoom_ms: default_zoom_ms(),
            zoom_radius: default_zoom_radius(),
        }
    }
}

impl FocusSettings {
    pub fn orient_duration(&self) -> Duration {
        Duration::from_millis(self.orient_ms)
    }

    pub fn zoom_duration(&self) -> Duration {
        Duration::from_millis(self.zoom_ms)
    }
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            idle_skip: true,
            idle_threshold_frames: default_idle_threshold_frames(),
            idle_render_interval: default_idle_render_interval(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog: default_output(),
            repository: default_repository(),
        }
    }
}

impl ServerSettings {
    pub fn repository_type(&self) -> Result<RepositoryType, ConfigError> {
        RepositoryType::from_str(&self.repository)
            .map_err(|e| ConfigError::invalid("server.repository", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StarscapeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `starscape.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Load from `path` (or the default location), apply environment
    /// overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_location()?,
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Environment Variables
    /// - `HOST`: server host
    /// - `PORT`: server port
    /// - `STARSCAPE_CATALOG`: catalog JSON served by the file repository
    /// - `STARSCAPE_REPOSITORY`: `local` or `file`
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", format!("'{}' is not a port number", port)))?;
        }
        if let Some(catalog) = lookup("STARSCAPE_CATALOG") {
            self.server.catalog = PathBuf::from(catalog);
        }
        if let Some(repository) = lookup("STARSCAPE_REPOSITORY") {
            self.server.repository = repository;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.builder.max_distance_ly;
        if !(max.is_finite() && max > 0.0) {
            return Err(ConfigError::invalid(
                "builder.max_distance_ly",
                "must be a positive number",
            ));
        }
        let view = self.scene.default_view_distance;
        if !(view.is_finite() && view > 0.0) {
            return Err(ConfigError::invalid(
                "scene.default_view_distance",
                "must be a positive number",
            ));
        }
        if self.scene.view_distance_options.is_empty() {
            return Err(ConfigError::invalid(
                "scene.view_distance_options",
                "at least one option is required",
            ));
        }
        if self.performance.idle_render_interval == 0 {
            return Err(ConfigError::invalid(
                "performance.idle_render_interval",
                "must be at least 1",
            ));
        }
        self.server.repository_type()?;
        Ok(())
    }
}
