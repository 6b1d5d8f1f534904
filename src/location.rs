//! Location provider seam
//!
//! The platform's location service is a single-shot asynchronous query with
//! two outcomes: a coordinate, or a typed unavailability reason. Unavailable
//! is an expected branch, not a failure; callers fall back to a default
//! province.

use async_trait::async_trait;
use std::fmt;

/// A geographic coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Why no position could be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The user denied the position request
    Denied,
    /// The position request timed out
    Timeout,
    /// The platform has no location capability
    Unsupported,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Denied => write!(f, "permission denied"),
            UnavailableReason::Timeout => write!(f, "request timed out"),
            UnavailableReason::Unsupported => write!(f, "not supported on this platform"),
        }
    }
}

/// Single-shot source of the user's current position
#[async_trait]
pub trait LocationProvider {
    /// Query the current position once
    async fn current_position(&self) -> Result<Coordinates, UnavailableReason>;
}

/// Provider backed by an explicitly supplied coordinate (CLI flags)
pub struct FixedLocationProvider {
    coordinates: Coordinates,
}

impl FixedLocationProvider {
    /// Create a provider that always reports the given position
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            coordinates: Coordinates { lat, lon },
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, UnavailableReason> {
        Ok(self.coordinates)
    }
}

/// Provider for platforms without a location capability
pub struct NoLocationProvider;

#[async_trait]
impl LocationProvider for NoLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, UnavailableReason> {
        Err(UnavailableReason::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_provider_reports_its_position() {
        let provider = FixedLocationProvider::new(16.05, 108.20);
        let position = provider.current_position().await.unwrap();
        assert_eq!(position.lat, 16.05);
        assert_eq!(position.lon, 108.20);
    }

    #[tokio::test]
    async fn test_no_location_provider_is_unsupported() {
        let provider = NoLocationProvider;
        let reason = provider.current_position().await.unwrap_err();
        assert_eq!(reason, UnavailableReason::Unsupported);
    }
}
