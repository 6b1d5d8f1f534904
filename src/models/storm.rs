//! Storm track model: a GeoJSON feature collection
//!
//! The backend serves the track as a `FeatureCollection` containing at most
//! one `LineString` (the historical path) and any number of `Point` features
//! (fix positions). GeoJSON stores coordinates as `[lon, lat]`.

use serde::{Deserialize, Serialize};

/// Geographic feature collection describing a storm's track
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StormFeatureCollection {
    /// Track and fix-position features in the order the backend stored them
    #[serde(default)]
    pub features: Vec<StormFeature>,
}

/// A single feature of the storm track
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StormFeature {
    /// Feature geometry
    pub geometry: StormGeometry,
    /// Optional feature metadata
    #[serde(default)]
    pub properties: StormProperties,
}

/// Geometry of a storm feature
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum StormGeometry {
    /// The storm's path as a sequence of `[lon, lat]` positions
    LineString {
        /// Path positions
        coordinates: Vec<[f64; 2]>,
    },
    /// A single fix position as `[lon, lat]`
    Point {
        /// Fix position
        coordinates: [f64; 2],
    },
}

/// Properties carried by a storm feature
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StormProperties {
    /// Display name of the feature, when the upstream provides one
    #[serde(default)]
    pub name: Option<String>,
}

impl StormFeatureCollection {
    /// Last `Point` feature in stored order.
    ///
    /// The backend stores fixes oldest-first, so the last point is the most
    /// recent known position. No timestamp sort is performed here; the
    /// ordering contract is the backend's.
    #[must_use]
    pub fn last_point(&self) -> Option<&StormFeature> {
        self.features
            .iter()
            .rev()
            .find(|f| matches!(f.geometry, StormGeometry::Point { .. }))
    }
}
