// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Per-cycle assembly of route and weather relevance.

use crate::airfields::AirfieldIndex;
use crate::geo::is_near;
use crate::routes::{Route, RouteCatalog};
use crate::traffic::Pilot;
use crate::validation;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;

/// One (pilot, candidate route) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    pub callsign: String,
    pub departure: String,
    pub destination: String,
    pub route_id: String,
    pub formatted_waypoints: String,
    pub remarks_text: String,
    pub matched: bool,
}

impl RouteReport {
    pub fn evaluate(callsign: &str, filed_route: &str, route: &Route) -> Self {
        Self {
            callsign: callsign.to_string(),
            departure: route.departure.clone(),
            destination: route.destination.clone(),
            route_id: route.id.clone(),
            formatted_waypoints: route.formatted_waypoints(),
            remarks_text: route.remarks.to_string(),
            matched: validation::matches(filed_route, route),
        }
    }
}

pub struct ReportBuilder<'a> {
    catalog: &'a RouteCatalog,
    airfields: &'a AirfieldIndex,
    departure_radius_nm: f64,
    arrival_radius_nm: f64,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(
        catalog: &'a RouteCatalog,
        airfields: &'a AirfieldIndex,
        departure_radius_nm: f64,
        arrival_radius_nm: f64,
    ) -> Self {
        Self {
            catalog,
            airfields,
            departure_radius_nm,
            arrival_radius_nm,
        }
    }

    /// Rows for pilots still close to their departure aerodrome, in pilot order.
    pub fn route_reports(&self, pilots: &[&Pilot]) -> Vec<RouteReport> {
        let per_pilot: Vec<Vec<RouteReport>> = pilots
            .par_iter()
            .map(|pilot| self.pilot_reports(pilot))
            .collect();
        per_pilot.into_iter().flatten().collect()
    }

    fn pilot_reports(&self, pilot: &Pilot) -> Vec<RouteReport> {
        let Some(plan) = &pilot.flight_plan else {
            return Vec::new();
        };

        let Some(departure) = self.airfields.location(&plan.departure) else {
            debug!(
                "Departure aerodrome not in airfield index — callsign={} departure={}",
                pilot.callsign, plan.departure
            );
            return Vec::new();
        };
        if !is_near(pilot.position(), departure, self.departure_radius_nm) {
            return Vec::new();
        }

        if self.catalog.routes_from(&plan.departure).is_none() {
            info!("No routes for departure field {}", plan.departure);
            return Vec::new();
        }

        self.catalog
            .routes_between(&plan.departure, &plan.arrival)
            .map(|route| RouteReport::evaluate(&pilot.callsign, &plan.route, route))
            .collect()
    }

    /// Arrival aerodromes worth a weather report: some pilot is inside the
    /// arrival radius of it. Sorted and de-duplicated.
    pub fn weather_stations(&self, pilots: &[&Pilot]) -> BTreeSet<String> {
        pilots
            .iter()
            .filter_map(|pilot| {
                let plan = pilot.flight_plan.as_ref()?;
                let destination = self.airfields.location(&plan.arrival)?;
                is_near(pilot.position(), destination, self.arrival_radius_nm)
                    .then(|| plan.arrival.clone())
            })
            .collect()
    }

    /// Offline evaluation of a filed route against every route for a pairing.
    pub fn check_filed_route(
        &self,
        departure: &str,
        destination: &str,
        filed_route: &str,
    ) -> Vec<RouteReport> {
        self.catalog
            .routes_between(departure, destination)
            .map(|route| RouteReport::evaluate("-", filed_route, route))
            .collect()
    }
}
