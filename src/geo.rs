//! Great-circle distance helpers for nearest-province lookup

use crate::error::SkyWatchError;
use crate::models::Province;
use haversine::{Location as HaversineLocation, Units, distance};

/// Great-circle distance between two coordinates in kilometers
#[must_use]
pub fn distance_km(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    let from = HaversineLocation {
        latitude: from_lat,
        longitude: from_lon,
    };
    let to = HaversineLocation {
        latitude: to_lat,
        longitude: to_lon,
    };
    distance(from, to, Units::Kilometers)
}

/// Find the province nearest to the given coordinate.
///
/// Only a strictly smaller distance replaces the current best, so ties go to
/// the earliest candidate in input order. The result is always an element of
/// `provinces`.
///
/// # Errors
///
/// Returns `InvalidInput` when `provinces` is empty.
pub fn nearest(provinces: &[Province], lat: f64, lon: f64) -> crate::Result<&Province> {
    let mut best = provinces
        .first()
        .ok_or_else(|| SkyWatchError::invalid_input("province list is empty"))?;
    let mut best_distance = distance_km(lat, lon, best.lat, best.lon);

    for candidate in &provinces[1..] {
        let candidate_distance = distance_km(lat, lon, candidate.lat, candidate.lon);
        if candidate_distance < best_distance {
            best = candidate;
            best_distance = candidate_distance;
        }
    }

    Ok(best)
}
