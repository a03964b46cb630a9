// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no embedded document for {0}")]
    NotEmbedded(&'static str),
}

/// Where a catalog or airfield document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
    /// The copy compiled into the binary, where one exists.
    Embedded,
}

impl DataSource {
    /// Treats anything that looks like an http(s) URL as a URL and the rest as a path.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }

    /// Reads the raw document. `Embedded` must be resolved by the caller, which
    /// knows which bundled document it wants; `what` names it for the error.
    pub fn read_bytes(&self, what: &'static str, timeout: Duration) -> Result<Vec<u8>, SourceError> {
        match self {
            DataSource::Url(url) => {
                debug!("Fetching document — what={} url={}", what, url);
                let client = reqwest::blocking::Client::builder()
                    .timeout(timeout)
                    .build()?;
                let response = client.get(url).send()?.error_for_status()?;
                let bytes = response.bytes()?;
                debug!("Fetched document — what={} bytes={}", what, bytes.len());
                Ok(bytes.to_vec())
            }
            DataSource::Path(path) => {
                debug!("Reading document — what={} path={}", what, path.display());
                Ok(fs::read(path)?)
            }
            DataSource::Embedded => Err(SourceError::NotEmbedded(what)),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Embedded => f.write_str("<embedded>"),
        }
    }
}
