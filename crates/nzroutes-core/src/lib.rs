// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Standard route catalog, route matching and proximity filtering for
//! New Zealand VATSIM traffic, plus the thin collaborators that feed them.

pub mod airfields;
pub mod config;
pub mod geo;
pub mod report;
pub mod routes;
pub mod source;
pub mod table;
pub mod traffic;
pub mod validation;
pub mod weather;

use thiserror::Error;

pub use airfields::{AirfieldData, AirfieldIndex};
pub use config::MonitorConfig;
pub use geo::{haversine_nm, is_near, LatLong};
pub use report::{ReportBuilder, RouteReport};
pub use routes::{Route, RouteCatalog, Waypoints};
pub use source::DataSource;

/// Startup failures. Any of these is fatal: there is no useful mode without
/// a catalog and an airfield index.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {what} from {source_name}: {error}")]
    Source {
        what: &'static str,
        source_name: String,
        #[source]
        error: source::SourceError,
    },
    #[error(transparent)]
    Airfields(#[from] airfields::AirfieldError),
    #[error(transparent)]
    Catalog(#[from] routes::CatalogError),
}

/// Reference data loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub airfields: AirfieldIndex,
    pub catalog: RouteCatalog,
}

impl ReferenceData {
    pub fn load(config: &MonitorConfig) -> Result<Self, LoadError> {
        let airfields = match &config.airfields_source {
            DataSource::Embedded => AirfieldIndex::embedded()?,
            other => AirfieldIndex::from_slice(&read(other, "airfields", config)?)?,
        };
        let catalog = RouteCatalog::from_slice(&read(&config.routes_source, "routes", config)?)?;

        log::info!(
            "Reference data loaded — airfields={} departures={} routes={}",
            airfields.len(),
            catalog.departures().len(),
            catalog.len()
        );
        Ok(Self { airfields, catalog })
    }

    pub fn report_builder(&self, config: &MonitorConfig) -> ReportBuilder<'_> {
        ReportBuilder::new(
            &self.catalog,
            &self.airfields,
            config.departure_radius_nm,
            config.arrival_radius_nm,
        )
    }
}

fn read(
    source: &DataSource,
    what: &'static str,
    config: &MonitorConfig,
) -> Result<Vec<u8>, LoadError> {
    source
        .read_bytes(what, config.request_timeout())
        .map_err(|error| LoadError::Source {
            what,
            source_name: source.to_string(),
            error,
        })
}
