//! Storm map controller
//!
//! Initializes a map view over a dark basemap, fetches the storm track, and
//! renders it: the `LineString` path with the highlighted track style and
//! each `Point` fix as a circle marker with a popup label. Fetch failures
//! are log-only; the map keeps showing the basemap.

use crate::api::WeatherApi;
use crate::config::MapConfig;
use crate::models::{StormFeatureCollection, StormGeometry};
use tracing::{error, info};

/// Popup label used when a fix position carries no name
const DEFAULT_POINT_LABEL: &str = "Tâm bão";

/// Style of the storm path polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

/// Style of a fix-position circle marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: u32,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

/// Highlighted style for the storm path
pub const TRACK_STYLE: TrackStyle = TrackStyle {
    color: "red",
    weight: 3,
    opacity: 0.7,
};

/// Circle marker style for fix positions
pub const MARKER_STYLE: MarkerStyle = MarkerStyle {
    radius: 8,
    color: "red",
    fill_color: "#f03",
    fill_opacity: 0.8,
};

/// Interactive map surface with tile layers and vector overlays.
///
/// Positions are `(lat, lon)` pairs; conversion from GeoJSON's `[lon, lat]`
/// happens in the controller.
pub trait MapSurface {
    /// Center the map on a coordinate at a zoom level
    fn set_view(&mut self, lat: f64, lon: f64, zoom: u8);

    /// Add a basemap tile layer
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);

    /// Draw the storm path
    fn draw_track(&mut self, positions: &[(f64, f64)], style: TrackStyle);

    /// Add a fix-position marker with a bound popup label
    fn add_marker(&mut self, lat: f64, lon: f64, style: MarkerStyle, popup: &str);

    /// Open a standalone popup at a coordinate
    fn open_popup(&mut self, lat: f64, lon: f64, text: &str);
}

/// Fetches the storm track and renders it onto a map surface
pub struct StormMapController<A, M>
where
    A: WeatherApi,
    M: MapSurface,
{
    api: A,
    map: M,
    config: MapConfig,
}

impl<A, M> StormMapController<A, M>
where
    A: WeatherApi,
    M: MapSurface,
{
    /// Create a controller over an API client and a map surface
    pub fn new(api: A, map: M, config: MapConfig) -> Self {
        Self { api, map, config }
    }

    /// Access the map surface for inspection
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Page activation: set up the basemap and render the storm track.
    ///
    /// On fetch failure the error is logged and the map stays on the
    /// basemap; there is no user-facing error banner on this page.
    pub async fn activate(&mut self) {
        self.map
            .set_view(self.config.center_lat, self.config.center_lon, self.config.zoom);
        self.map
            .add_tile_layer(&self.config.tile_url, &self.config.attribution);

        match self.api.get_storm_track().await {
            Ok(collection) => {
                info!(
                    "Rendering storm track with {} features",
                    collection.features.len()
                );
                self.render_track(&collection);
            }
            Err(e) => {
                error!("Failed to load storm track: {}", e);
            }
        }
    }

    fn render_track(&mut self, collection: &StormFeatureCollection) {
        for feature in &collection.features {
            match &feature.geometry {
                StormGeometry::LineString { coordinates } => {
                    let positions: Vec<(f64, f64)> = coordinates
                        .iter()
                        .map(|&[lon, lat]| (lat, lon))
                        .collect();
                    self.map.draw_track(&positions, TRACK_STYLE);
                }
                StormGeometry::Point { coordinates } => {
                    let [lon, lat] = *coordinates;
                    let label = feature
                        .properties
                        .name
                        .as_deref()
                        .unwrap_or(DEFAULT_POINT_LABEL);
                    self.map.add_marker(lat, lon, MARKER_STYLE, label);
                }
            }
        }

        // The backend stores fixes oldest-first, so the last point in stored
        // order is the current position. See DESIGN.md on the ordering
        // contract.
        if let Some(feature) = collection.last_point() {
            if let StormGeometry::Point { coordinates } = feature.geometry {
                let [lon, lat] = coordinates;
                let label = feature
                    .properties
                    .name
                    .as_deref()
                    .unwrap_or(DEFAULT_POINT_LABEL);
                self.map.open_popup(lat, lon, label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkyWatchError;
    use crate::models::{ForecastBundle, Province};
    use async_trait::async_trait;

    struct StubApi {
        track: Option<StormFeatureCollection>,
    }

    #[async_trait]
    impl WeatherApi for StubApi {
        async fn list_provinces(&self) -> crate::Result<Vec<Province>> {
            Ok(Vec::new())
        }

        async fn get_forecast(&self, _province_name: &str) -> crate::Result<ForecastBundle> {
            Ok(ForecastBundle::default())
        }

        async fn get_storm_track(&self) -> crate::Result<StormFeatureCollection> {
            self.track
                .clone()
                .ok_or_else(|| SkyWatchError::network("connection refused"))
        }
    }

    #[derive(Debug, PartialEq)]
    enum MapOp {
        SetView(f64, f64, u8),
        TileLayer(String),
        Track(usize),
        Marker(f64, f64, String),
        Popup(f64, f64, String),
    }

    #[derive(Default)]
    struct RecordingMap {
        ops: Vec<MapOp>,
    }

    impl MapSurface for RecordingMap {
        fn set_view(&mut self, lat: f64, lon: f64, zoom: u8) {
            self.ops.push(MapOp::SetView(lat, lon, zoom));
        }

        fn add_tile_layer(&mut self, url_template: &str, _attribution: &str) {
            self.ops.push(MapOp::TileLayer(url_template.to_string()));
        }

        fn draw_track(&mut self, positions: &[(f64, f64)], _style: TrackStyle) {
            self.ops.push(MapOp::Track(positions.len()));
        }

        fn add_marker(&mut self, lat: f64, lon: f64, _style: MarkerStyle, popup: &str) {
            self.ops.push(MapOp::Marker(lat, lon, popup.to_string()));
        }

        fn open_popup(&mut self, lat: f64, lon: f64, text: &str) {
            self.ops.push(MapOp::Popup(lat, lon, text.to_string()));
        }
    }

    fn sample_track() -> StormFeatureCollection {
        serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[112.0, 14.0], [113.5, 15.2], [114.2, 15.9]]
                        },
                        "properties": {}
                    },
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [112.0, 14.0]},
                        "properties": {"name": "Vị trí 06h"}
                    },
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [114.2, 15.9]},
                        "properties": {}
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn controller(
        track: Option<StormFeatureCollection>,
    ) -> StormMapController<StubApi, RecordingMap> {
        StormMapController::new(
            StubApi { track },
            RecordingMap::default(),
            MapConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_activate_renders_track_and_opens_last_popup() {
        let mut controller = controller(Some(sample_track()));
        controller.activate().await;

        let ops = &controller.map().ops;
        assert_eq!(ops[0], MapOp::SetView(15.0, 115.0, 5));
        assert!(matches!(ops[1], MapOp::TileLayer(_)));
        assert_eq!(ops[2], MapOp::Track(3));
        assert_eq!(
            ops[3],
            MapOp::Marker(14.0, 112.0, "Vị trí 06h".to_string())
        );
        // Unnamed point gets the default label; lat/lon swapped from GeoJSON.
        assert_eq!(ops[4], MapOp::Marker(15.9, 114.2, "Tâm bão".to_string()));
        assert_eq!(ops[5], MapOp::Popup(15.9, 114.2, "Tâm bão".to_string()));
        assert_eq!(ops.len(), 6);
    }

    #[tokio::test]
    async fn test_empty_collection_renders_basemap_only() {
        let mut controller = controller(Some(StormFeatureCollection::default()));
        controller.activate().await;

        let ops = &controller.map().ops;
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], MapOp::SetView(..)));
        assert!(matches!(ops[1], MapOp::TileLayer(_)));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_silent() {
        let mut controller = controller(None);
        controller.activate().await;

        // Basemap stays up, nothing else is drawn, no panic.
        assert_eq!(controller.map().ops.len(), 2);
    }
}
