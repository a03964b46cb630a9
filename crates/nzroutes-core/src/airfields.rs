// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Aerodrome lookup by ICAO identifier.

use crate::geo::LatLong;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

const EMBEDDED_AIRFIELDS: &str = include_str!("../data/nz_airfields.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfieldData {
    pub icao: String,
    pub name: String,
    pub location: LatLong,
}

#[derive(Error, Debug)]
pub enum AirfieldError {
    #[error("could not parse airfields data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only index of aerodromes, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct AirfieldIndex {
    airfields: HashMap<String, AirfieldData>,
}

impl AirfieldIndex {
    /// Parses a JSON array of airfield records.
    ///
    /// A later record with the same ICAO replaces an earlier one.
    pub fn from_slice(data: &[u8]) -> Result<Self, AirfieldError> {
        let records: Vec<AirfieldData> = serde_json::from_slice(data)?;
        let airfields: HashMap<String, AirfieldData> = records
            .into_iter()
            .map(|a| (a.icao.clone(), a))
            .collect();

        debug!("Loaded airfield index — airfield_count={}", airfields.len());
        Ok(Self { airfields })
    }

    /// The New Zealand aerodrome list compiled into the binary.
    pub fn embedded() -> Result<Self, AirfieldError> {
        Self::from_slice(EMBEDDED_AIRFIELDS.as_bytes())
    }

    pub fn get(&self, icao: &str) -> Option<&AirfieldData> {
        self.airfields.get(icao)
    }

    pub fn location(&self, icao: &str) -> Option<LatLong> {
        self.get(icao).map(|a| a.location)
    }

    pub fn len(&self) -> usize {
        self.airfields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airfields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AirfieldData> {
        self.airfields.values()
    }
}
