// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::time::Duration;

/// Fetches raw METAR text per station. The text is passed through untouched.
pub struct MetarClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl MetarClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn station_url(&self, icao: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            icao.trim().to_uppercase()
        )
    }

    /// Returns `Ok(None)` when the service has no report for `icao`.
    pub fn fetch(&self, icao: &str) -> Result<Option<String>> {
        let url = self.station_url(icao);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Could not get METAR data for {}", icao))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("METAR not found — station={}", icao);
            return Ok(None);
        }

        let body = response
            .error_for_status()
            .and_then(|r| r.text())
            .with_context(|| format!("Could not read METAR data for {}", icao))?;

        Ok(clean_metar(&body))
    }

    /// Fetches each station, skipping (and logging) any that fail.
    pub fn fetch_many<'a, I>(&self, icaos: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut result = BTreeMap::new();
        for icao in icaos {
            match self.fetch(icao) {
                Ok(Some(metar)) => {
                    result.insert(icao.to_string(), metar);
                }
                Ok(None) => {}
                Err(e) => warn!("METAR fetch failed — station={} error={:#}", icao, e),
            }
        }
        debug!("fetch_many — found={}", result.len());
        result
    }
}

fn clean_metar(body: &str) -> Option<String> {
    let clean = body.trim();
    if clean.is_empty() {
        None
    } else {
        Some(clean.to_string())
    }
}
