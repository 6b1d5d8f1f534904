//! Integration tests driving both controllers through the public API

use async_trait::async_trait;
use skywatch::config::MapConfig;
use skywatch::forecast::{ForecastController, ForecastState, ForecastView};
use skywatch::location::{Coordinates, LocationProvider, UnavailableReason};
use skywatch::models::{
    DailyForecast, ForecastBundle, HourlyForecast, Province, StormFeatureCollection,
};
use skywatch::render::{ChartHandle, ChartSpec, ChartSurface, DailyCard, Renderer};
use skywatch::storm::{MapSurface, MarkerStyle, StormMapController, TrackStyle};
use skywatch::{SkyWatchError, WeatherApi};

/// Backend stub serving canned payloads for every endpoint
struct FakeBackend {
    forecast_error: Option<String>,
}

#[async_trait]
impl WeatherApi for FakeBackend {
    async fn list_provinces(&self) -> skywatch::Result<Vec<Province>> {
        Ok(vec![
            Province::new("Hà Nội", 21.0285, 105.8542),
            Province::new("Huế", 16.4637, 107.5909),
            Province::new("TP. Hồ Chí Minh", 10.8231, 106.6297),
        ])
    }

    async fn get_forecast(&self, _province_name: &str) -> skywatch::Result<ForecastBundle> {
        if let Some(message) = &self.forecast_error {
            return Err(SkyWatchError::network(message.clone()));
        }
        Ok(ForecastBundle {
            daily: DailyForecast {
                time: vec!["2026-08-22".to_string(), "2026-08-23".to_string()],
                weather_code: vec![61, 95],
                temperature_2m_max: vec![29.5, 27.0],
                temperature_2m_min: vec![24.5, 23.8],
            },
            hourly: HourlyForecast {
                labels: vec![
                    "2026-08-22T00:00".to_string(),
                    "2026-08-22T01:00".to_string(),
                ],
                temperature_2m: vec![25.2, 25.0],
                relative_humidity_2m: vec![92.0, 93.0],
                precipitation: vec![0.8, 1.2],
                showers: vec![0.2, 0.5],
                wind_speed_10m: vec![14.0, 16.5],
                pressure_msl: vec![1003.0, 1002.5],
            },
        })
    }

    async fn get_storm_track(&self) -> skywatch::Result<StormFeatureCollection> {
        Ok(serde_json::from_str(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {
                            "type": "LineString",
                            "coordinates": [[111.5, 13.8], [113.0, 14.9]]
                        },
                        "properties": {}
                    },
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [113.0, 14.9]},
                        "properties": {"name": "Bão số 3"}
                    }
                ]
            }"#,
        )
        .expect("valid fixture"))
    }
}

struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn current_position(&self) -> Result<Coordinates, UnavailableReason> {
        Err(UnavailableReason::Denied)
    }
}

struct NearHue;

#[async_trait]
impl LocationProvider for NearHue {
    async fn current_position(&self) -> Result<Coordinates, UnavailableReason> {
        Ok(Coordinates {
            lat: 16.5,
            lon: 107.6,
        })
    }
}

#[derive(Default)]
struct PageView {
    selected: Option<String>,
    cards: Vec<DailyCard>,
    errors: Vec<String>,
}

impl ForecastView for PageView {
    fn set_provinces(&mut self, _names: &[String]) {}

    fn set_selected(&mut self, name: &str) {
        self.selected = Some(name.to_string());
    }

    fn set_province_placeholder(&mut self, _text: &str) {}

    fn show_loading(&mut self, _province_name: &str) {}

    fn show_notice(&mut self, _text: &str) {}

    fn show_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn show_results(&mut self, cards: &[DailyCard]) {
        self.cards = cards.to_vec();
    }
}

#[derive(Default)]
struct ChartCounter {
    next_id: u64,
    live: usize,
}

impl ChartSurface for ChartCounter {
    fn create_chart(&mut self, _spec: ChartSpec) -> ChartHandle {
        self.next_id += 1;
        self.live += 1;
        ChartHandle(self.next_id)
    }

    fn destroy_chart(&mut self, _handle: ChartHandle) {
        self.live -= 1;
    }
}

#[derive(Default)]
struct MapLog {
    popups: Vec<(f64, f64, String)>,
    tracks: usize,
    markers: usize,
}

impl MapSurface for MapLog {
    fn set_view(&mut self, _lat: f64, _lon: f64, _zoom: u8) {}

    fn add_tile_layer(&mut self, _url_template: &str, _attribution: &str) {}

    fn draw_track(&mut self, _positions: &[(f64, f64)], _style: TrackStyle) {
        self.tracks += 1;
    }

    fn add_marker(&mut self, _lat: f64, _lon: f64, _style: MarkerStyle, _popup: &str) {
        self.markers += 1;
    }

    fn open_popup(&mut self, lat: f64, lon: f64, text: &str) {
        self.popups.push((lat, lon, text.to_string()));
    }
}

#[tokio::test]
async fn test_forecast_page_end_to_end() {
    let mut controller = ForecastController::new(
        FakeBackend {
            forecast_error: None,
        },
        NearHue,
        PageView::default(),
        Renderer::new(ChartCounter::default()),
        "Hà Nội",
    );

    controller.activate().await;

    assert_eq!(*controller.state(), ForecastState::Displaying);
    assert_eq!(controller.view().selected.as_deref(), Some("Huế"));
    assert_eq!(controller.view().cards.len(), 2);
    // 24.5 rounds half-up to 25.
    assert_eq!(controller.view().cards[0].temp_min, 25);
    assert_eq!(controller.renderer().surface().live, 4);

    // A second selection replaces all four charts without leaking any.
    controller.select_province("TP. Hồ Chí Minh").await;
    assert_eq!(controller.renderer().surface().live, 4);
    assert_eq!(controller.renderer().surface().next_id, 8);
}

#[tokio::test]
async fn test_forecast_error_reaches_the_page() {
    let mut controller = ForecastController::new(
        FakeBackend {
            forecast_error: Some("no data".to_string()),
        },
        DeniedLocation,
        PageView::default(),
        Renderer::new(ChartCounter::default()),
        "Hà Nội",
    );

    controller.activate().await;

    assert_eq!(*controller.state(), ForecastState::Error);
    assert!(controller.view().errors.iter().any(|e| e.contains("no data")));
    assert_eq!(controller.renderer().surface().live, 0);
}

#[tokio::test]
async fn test_storm_page_end_to_end() {
    let mut controller = StormMapController::new(
        FakeBackend {
            forecast_error: None,
        },
        MapLog::default(),
        MapConfig::default(),
    );

    controller.activate().await;

    let map = controller.map();
    assert_eq!(map.tracks, 1);
    assert_eq!(map.markers, 1);
    assert_eq!(map.popups.len(), 1);
    let (lat, lon, text) = &map.popups[0];
    assert_eq!((*lat, *lon), (14.9, 113.0));
    assert_eq!(text, "Bão số 3");
}
