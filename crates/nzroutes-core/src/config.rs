// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::source::DataSource;
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ROUTES_URL: &str =
    "https://raw.githubusercontent.com/vatnz-dev/std-rte-public/refs/heads/main/stdRtes.json";
pub const TRAFFIC_URL: &str = "https://data.vatsim.net/v3/vatsim-data.json";
pub const METAR_URL: &str = "https://metar.vatsim.net";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub routes_source: DataSource,
    pub airfields_source: DataSource,
    pub traffic_url: String,
    pub metar_url: String,
    /// Both departure and arrival must start with this for a flight to be tracked.
    pub icao_prefix: String,
    /// Route relevance: pilots closer than this to their departure aerodrome.
    pub departure_radius_nm: f64,
    /// Weather relevance: pilots closer than this to their destination.
    pub arrival_radius_nm: f64,
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            routes_source: DataSource::Url(ROUTES_URL.to_string()),
            airfields_source: DataSource::Embedded,
            traffic_url: TRAFFIC_URL.to_string(),
            metar_url: METAR_URL.to_string(),
            icao_prefix: "NZ".to_string(),
            departure_radius_nm: 30.0,
            arrival_radius_nm: 300.0,
            refresh_interval_secs: 30,
            request_timeout_secs: 30,
        }
    }
}

impl MonitorConfig {
    /// Default location: `<platform config dir>/nzroutes/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("nz", "nzroutes", "nzroutes").map(|d| d.config_dir().join("config.json"))
    }

    /// Loads `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => {
                warn!("No config directory available; using built-in defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            debug!("Config file not found; using defaults — path={}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!("Loaded config — path={}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
