// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Standard route catalog.
//!
//! The published document keys routes by departure aerodrome. Each record's
//! `routePoints` field changes shape depending on the sibling
//! `runwayDependant` flag, so records are decoded in two steps: the flag is
//! read first and then the points are decoded into exactly one of the two
//! [`Waypoints`] variants. A record whose points disagree with its flag fails
//! the whole load.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not parse route catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("route {id} from {departure}: routePoints is not {expected}: {source}")]
    RoutePointsShape {
        id: String,
        departure: String,
        expected: &'static str,
        source: serde_json::Error,
    },
    #[error("route {id} is runway dependant but lists no runways")]
    NoRunwayVariants { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remarks {
    #[serde(rename = "ac_type", default)]
    pub aircraft_type: Option<String>,
    #[serde(rename = "alt_limit", default)]
    pub altitude_limit: Option<String>,
}

impl fmt::Display for Remarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if let Some(ac) = self.aircraft_type.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("Aircraft type: {}", ac));
        }
        if let Some(alt) = self.altitude_limit.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("Altitude limit: {}", alt));
        }
        f.write_str(&parts.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayPoints {
    pub runway: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Waypoints {
    /// One sequence, used whatever runway is in use.
    Simple(Vec<String>),
    /// One candidate sequence per runway. Never empty once loaded.
    RunwayDependent(Vec<RunwayPoints>),
}

impl Waypoints {
    /// Every candidate sequence a filed route may satisfy.
    pub fn candidates(&self) -> impl Iterator<Item = &[String]> {
        let (simple, variants) = match self {
            Waypoints::Simple(points) => (Some(points.as_slice()), &[][..]),
            Waypoints::RunwayDependent(variants) => (None, variants.as_slice()),
        };
        simple
            .into_iter()
            .chain(variants.iter().map(|v| v.points.as_slice()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: String,
    pub departure: String,
    pub destination: String,
    pub remarks: Remarks,
    pub waypoints: Waypoints,
}

impl Route {
    /// Display form: the simple sequence, or the first runway variant
    /// prefixed with its runway.
    pub fn formatted_waypoints(&self) -> String {
        match &self.waypoints {
            Waypoints::Simple(points) => points.join(" "),
            Waypoints::RunwayDependent(variants) => match variants.first() {
                Some(v) => format!("{}: {}", v.runway, v.points.join(" ")),
                None => String::new(),
            },
        }
    }

    pub fn is_runway_dependent(&self) -> bool {
        matches!(self.waypoints, Waypoints::RunwayDependent(_))
    }

    /// True when some candidate sequence is empty and so accepts any filed route.
    pub fn has_empty_candidate(&self) -> bool {
        self.waypoints.candidates().any(|c| c.is_empty())
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    routes: HashMap<String, Vec<RouteRecord>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteRecord {
    id: String,
    departure_aerodrome: String,
    destination_aerodrome: String,
    runway_dependant: bool,
    route_points: Value,
    #[serde(default)]
    remarks: Remarks,
}

impl RouteRecord {
    fn into_route(self) -> Result<Route, CatalogError> {
        let waypoints = if self.runway_dependant {
            let variants: Vec<RunwayPoints> =
                serde_json::from_value(self.route_points).map_err(|source| {
                    CatalogError::RoutePointsShape {
                        id: self.id.clone(),
                        departure: self.departure_aerodrome.clone(),
                        expected: "a list of runway/points objects",
                        source,
                    }
                })?;
            if variants.is_empty() {
                return Err(CatalogError::NoRunwayVariants { id: self.id });
            }
            Waypoints::RunwayDependent(variants)
        } else {
            let points: Vec<String> =
                serde_json::from_value(self.route_points).map_err(|source| {
                    CatalogError::RoutePointsShape {
                        id: self.id.clone(),
                        departure: self.departure_aerodrome.clone(),
                        expected: "a list of waypoint names",
                        source,
                    }
                })?;
            Waypoints::Simple(points)
        };

        Ok(Route {
            id: self.id,
            departure: self.departure_aerodrome,
            destination: self.destination_aerodrome,
            remarks: self.remarks,
            waypoints,
        })
    }
}

/// Departure ICAO to the routes published for it, in document order.
///
/// Built once and never mutated; share it behind `&` or `Arc` freely.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: HashMap<String, Vec<Route>>,
}

impl RouteCatalog {
    pub fn from_slice(data: &[u8]) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_slice(data)?;

        let mut routes = HashMap::with_capacity(doc.routes.len());
        let mut total = 0usize;
        for (departure, records) in doc.routes {
            let mut bucket = Vec::with_capacity(records.len());
            for record in records {
                let route = record.into_route()?;
                if route.departure != departure {
                    debug!(
                        "Route filed under a different departure — route_id={} bucket={} departure={}",
                        route.id, departure, route.departure
                    );
                }
                if route.has_empty_candidate() {
                    warn!(
                        "Route has an empty waypoint list and will match any filed route — route_id={} departure={}",
                        route.id, departure
                    );
                }
                bucket.push(route);
            }
            total += bucket.len();
            routes.insert(departure, bucket);
        }

        debug!(
            "Loaded route catalog — departure_count={} route_count={}",
            routes.len(),
            total
        );
        Ok(Self { routes })
    }

    /// Routes published for `departure`, or `None` when the aerodrome has no bucket.
    pub fn routes_from(&self, departure: &str) -> Option<&[Route]> {
        self.routes.get(departure).map(Vec::as_slice)
    }

    /// Routes for a departure/destination pairing, in catalog order.
    pub fn routes_between<'a>(
        &'a self,
        departure: &str,
        destination: &'a str,
    ) -> impl Iterator<Item = &'a Route> + 'a {
        self.routes_from(departure)
            .unwrap_or_default()
            .iter()
            .filter(move |r| r.destination == destination)
    }

    /// Departure ICAOs, sorted.
    pub fn departures(&self) -> Vec<&str> {
        let mut deps: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        deps.sort_unstable();
        deps
    }

    /// Total number of routes across every departure.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "routes": {
            "NZAA": [
                {
                    "id": "AAWN1",
                    "departureAerodrome": "NZAA",
                    "destinationAerodrome": "NZWN",
                    "runwayDependant": false,
                    "routePoints": ["NOBAR", "Y346", "SELWI"],
                    "remarks": {"ac_type": "JET", "alt_limit": ""}
                },
                {
                    "id": "AAWN2",
                    "departureAerodrome": "NZAA",
                    "destinationAerodrome": "NZWN",
                    "runwayDependant": true,
                    "routePoints": [
                        {"runway": "05R", "points": ["ADKOS", "Y346"]},
                        {"runway": "23L", "points": ["NOBAR", "Y346"]}
                    ],
                    "remarks": {}
                },
                {
                    "id": "AACH1",
                    "departureAerodrome": "NZAA",
                    "destinationAerodrome": "NZCH",
                    "runwayDependant": false,
                    "routePoints": ["NOBAR", "Y346", "WNSWE"]
                }
            ]
        }
    }"#;

    #[test]
    fn test_load_catalog() {
        let catalog = RouteCatalog::from_slice(DOC.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.departures(), vec!["NZAA"]);

        let routes = catalog.routes_from("NZAA").unwrap();
        let ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["AAWN1", "AAWN2", "AACH1"]);

        assert_eq!(
            routes[0].waypoints,
            Waypoints::Simple(vec!["NOBAR".into(), "Y346".into(), "SELWI".into()])
        );
        assert!(routes[1].is_runway_dependent());
        assert_eq!(routes[2].remarks, Remarks::default());
    }

    #[test]
    fn test_routes_between_preserves_order() {
        let catalog = RouteCatalog::from_slice(DOC.as_bytes()).unwrap();
        let ids: Vec<&str> = catalog
            .routes_between("NZAA", "NZWN")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["AAWN1", "AAWN2"]);
        assert_eq!(catalog.routes_between("NZQN", "NZWN").count(), 0);
        assert!(catalog.routes_from("NZQN").is_none());
    }

    #[test]
    fn test_formatted_waypoints() {
        let catalog = RouteCatalog::from_slice(DOC.as_bytes()).unwrap();
        let routes = catalog.routes_from("NZAA").unwrap();
        assert_eq!(routes[0].formatted_waypoints(), "NOBAR Y346 SELWI");
        assert_eq!(routes[1].formatted_waypoints(), "05R: ADKOS Y346");
    }

    #[test]
    fn test_remarks_display() {
        let both = Remarks {
            aircraft_type: Some("JET".into()),
            altitude_limit: Some("FL150".into()),
        };
        assert_eq!(both.to_string(), "Aircraft type: JET, Altitude limit: FL150");

        let alt_only = Remarks {
            aircraft_type: Some(String::new()),
            altitude_limit: Some("A080".into()),
        };
        assert_eq!(alt_only.to_string(), "Altitude limit: A080");
        assert_eq!(Remarks::default().to_string(), "");
    }

    #[test]
    fn test_flat_points_under_runway_flag_is_rejected() {
        let doc = r#"{"routes": {"NZWN": [{
            "id": "WNAA9",
            "departureAerodrome": "NZWN",
            "destinationAerodrome": "NZAA",
            "runwayDependant": true,
            "routePoints": ["NOBAR", "Y346"]
        }]}}"#;
        match RouteCatalog::from_slice(doc.as_bytes()) {
            Err(CatalogError::RoutePointsShape { id, departure, .. }) => {
                assert_eq!(id, "WNAA9");
                assert_eq!(departure, "NZWN");
            }
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_runway_objects_without_flag_are_rejected() {
        let doc = r#"{"routes": {"NZWN": [{
            "id": "WNAA3",
            "departureAerodrome": "NZWN",
            "destinationAerodrome": "NZAA",
            "runwayDependant": false,
            "routePoints": [{"runway": "34", "points": ["NOBAR"]}]
        }]}}"#;
        let err = RouteCatalog::from_slice(doc.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("WNAA3"), "{}", err);
    }

    #[test]
    fn test_runway_dependent_without_runways_is_rejected() {
        let doc = r#"{"routes": {"NZWN": [{
            "id": "WNAA4",
            "departureAerodrome": "NZWN",
            "destinationAerodrome": "NZAA",
            "runwayDependant": true,
            "routePoints": []
        }]}}"#;
        assert!(matches!(
            RouteCatalog::from_slice(doc.as_bytes()),
            Err(CatalogError::NoRunwayVariants { id }) if id == "WNAA4"
        ));
    }

    #[test]
    fn test_missing_discriminator_is_parse_error() {
        let doc = r#"{"routes": {"NZWN": [{
            "id": "WNAA5",
            "departureAerodrome": "NZWN",
            "destinationAerodrome": "NZAA",
            "routePoints": ["NOBAR"]
        }]}}"#;
        assert!(matches!(
            RouteCatalog::from_slice(doc.as_bytes()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_variant_is_flagged() {
        let doc = r#"{"routes": {"NZWN": [{
            "id": "WNAA6",
            "departureAerodrome": "NZWN",
            "destinationAerodrome": "NZAA",
            "runwayDependant": true,
            "routePoints": [{"runway": "16", "points": []}]
        }]}}"#;
        let catalog = RouteCatalog::from_slice(doc.as_bytes()).unwrap();
        assert!(catalog.routes_from("NZWN").unwrap()[0].has_empty_candidate());
    }
}
