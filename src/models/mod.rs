//! Data models for the SkyWatch application
//!
//! This module contains the core domain models organized by concern:
//! - Province: named regions with representative coordinates
//! - Forecast: daily and hourly forecast bundles from the backend
//! - Storm: storm track feature collections

pub mod forecast;
pub mod province;
pub mod storm;

// Re-export all public types for convenient access
pub use forecast::{DailyForecast, ForecastBundle, HourlyForecast};
pub use province::Province;
pub use storm::{StormFeature, StormFeatureCollection, StormGeometry, StormProperties};
