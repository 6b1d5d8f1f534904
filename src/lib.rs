//! `SkyWatch` - Weather forecast and storm tracking client
//!
//! This library provides the client side of a weather/storm-tracking
//! service: fetching forecasts and storm tracks from a backend API,
//! nearest-province lookup, and rendering into cards, charts, and a map
//! overlay through pluggable display surfaces.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geo;
pub mod icons;
pub mod location;
pub mod models;
pub mod render;
pub mod storm;
pub mod terminal;

// Re-export core types for public API
pub use api::{ApiClient, WeatherApi};
pub use config::SkyWatchConfig;
pub use error::SkyWatchError;
pub use forecast::{ForecastController, ForecastState, ForecastView};
pub use icons::{WeatherIcon, icon_for};
pub use location::{Coordinates, LocationProvider, UnavailableReason};
pub use models::{ForecastBundle, Province, StormFeatureCollection};
pub use render::{ChartSpec, DailyCard, Renderer};
pub use storm::{MapSurface, StormMapController};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkyWatchError>;
