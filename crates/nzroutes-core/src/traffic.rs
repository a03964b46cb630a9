// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Live pilot snapshot from the VATSIM v3 data feed.

use crate::geo::LatLong;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub flight_plan: Option<FlightPlan>,
}

impl Pilot {
    pub fn position(&self) -> LatLong {
        LatLong::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    #[serde(default)]
    pub pilots: Vec<Pilot>,
}

impl TrafficSnapshot {
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).context("Failed to parse traffic snapshot")
    }
}

/// Pilots whose filed departure and arrival both start with `prefix`, in feed order.
pub fn domestic_pilots<'a>(prefix: &str, pilots: &'a [Pilot]) -> Vec<&'a Pilot> {
    pilots
        .iter()
        .filter(|p| match &p.flight_plan {
            Some(plan) => plan.departure.starts_with(prefix) && plan.arrival.starts_with(prefix),
            None => false,
        })
        .collect()
}

pub struct TrafficFeed {
    url: String,
    client: reqwest::blocking::Client,
}

impl TrafficFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn fetch(&self) -> Result<TrafficSnapshot> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Could not get pilots data from {}", self.url))?;
        let bytes = response.bytes().context("Failed to read traffic response")?;
        let snapshot = TrafficSnapshot::from_slice(&bytes)?;
        debug!("Fetched traffic snapshot — pilot_count={}", snapshot.pilots.len());
        Ok(snapshot)
    }
}
