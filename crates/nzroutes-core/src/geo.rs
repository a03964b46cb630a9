// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// A point in decimal degrees. Field names follow the airfield document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Great-circle distance between two points on a spherical Earth, in nautical miles.
pub fn haversine_nm(a: LatLong, b: LatLong) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.long - a.long).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards against h drifting a hair above 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_NM * c
}

/// True when `point` lies strictly closer than `threshold_nm` to `reference`.
pub fn is_near(point: LatLong, reference: LatLong, threshold_nm: f64) -> bool {
    haversine_nm(point, reference) < threshold_nm
}
