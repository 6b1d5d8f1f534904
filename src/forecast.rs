//! Forecast page controller
//!
//! Drives the page lifecycle: load the province list, resolve the user's
//! location (or fall back to the default province), fetch the forecast for
//! the selected province, and render cards and charts. Fetch failures never
//! propagate out of the controller; they become visible messages on the view.
//!
//! Every forecast fetch is tagged with a request generation. A response that
//! arrives after a newer fetch has started carries a stale generation and is
//! discarded, so overlapping requests can never overwrite fresher state.

use crate::api::WeatherApi;
use crate::error::SkyWatchError;
use crate::geo;
use crate::location::LocationProvider;
use crate::models::{ForecastBundle, Province};
use crate::render::{ChartSurface, DailyCard, Renderer};
use tracing::{debug, info, warn};

/// Placeholder shown in the selector when the province list cannot load
const PROVINCE_LIST_ERROR: &str = "Lỗi tải danh sách tỉnh";

/// Lifecycle state of the forecast page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastState {
    Idle,
    LoadingProvinces,
    ResolvingLocation,
    LoadingForecast(String),
    Displaying,
    Error,
}

/// Display surface for the forecast page.
///
/// Owned exclusively by one controller; implementations replace prior
/// content wholesale on each call.
pub trait ForecastView {
    /// Populate the province selection control
    fn set_provinces(&mut self, names: &[String]);

    /// Move the selection to the given province
    fn set_selected(&mut self, name: &str);

    /// Degrade the selection control to a single placeholder entry
    fn set_province_placeholder(&mut self, text: &str);

    /// Show the loading indicator for a province, hiding prior results
    fn show_loading(&mut self, province_name: &str);

    /// Show a non-error informational note
    fn show_notice(&mut self, text: &str);

    /// Show an error message, hiding loading indicator and results
    fn show_error(&mut self, text: &str);

    /// Show the daily card list
    fn show_results(&mut self, cards: &[DailyCard]);
}

/// Orchestrates province loading, location resolution, and forecast display
pub struct ForecastController<A, L, V, S>
where
    A: WeatherApi,
    L: LocationProvider,
    V: ForecastView,
    S: ChartSurface,
{
    api: A,
    location: L,
    view: V,
    renderer: Renderer<S>,
    provinces: Vec<Province>,
    state: ForecastState,
    generation: u64,
    default_province: String,
}

impl<A, L, V, S> ForecastController<A, L, V, S>
where
    A: WeatherApi,
    L: LocationProvider,
    V: ForecastView,
    S: ChartSurface,
{
    /// Create a controller over its collaborators
    pub fn new(
        api: A,
        location: L,
        view: V,
        renderer: Renderer<S>,
        default_province: impl Into<String>,
    ) -> Self {
        Self {
            api,
            location,
            view,
            renderer,
            provinces: Vec::new(),
            state: ForecastState::Idle,
            generation: 0,
            default_province: default_province.into(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> &ForecastState {
        &self.state
    }

    /// Provinces loaded for this page visit
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// Access the view for inspection
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Access the renderer for inspection
    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    /// Page activation: load provinces, then resolve location and fetch.
    ///
    /// A province-list failure degrades the selector to a placeholder and
    /// dead-ends; recovering requires a fresh activation.
    pub async fn activate(&mut self) {
        self.state = ForecastState::LoadingProvinces;
        info!("Loading province list");

        match self.api.list_provinces().await {
            Ok(provinces) => {
                let names: Vec<String> = provinces.iter().map(|p| p.name.clone()).collect();
                self.view.set_provinces(&names);
                self.provinces = provinces;
                self.locate().await;
            }
            Err(e) => {
                warn!("Failed to load province list: {}", e);
                self.view.set_province_placeholder(PROVINCE_LIST_ERROR);
                self.state = ForecastState::Error;
            }
        }
    }

    /// Resolve the user's position and fetch the nearest province's forecast.
    ///
    /// An unavailable position is an expected branch, not an error: a notice
    /// is shown and the default province is fetched instead.
    pub async fn locate(&mut self) {
        self.state = ForecastState::ResolvingLocation;
        self.view.show_notice("Đang xin quyền truy cập vị trí...");

        match self.location.current_position().await {
            Ok(position) => {
                let name = match geo::nearest(&self.provinces, position.lat, position.lon) {
                    Ok(province) => province.name.clone(),
                    Err(e) => {
                        warn!("Nearest-province lookup failed: {}", e);
                        self.default_province.clone()
                    }
                };
                debug!(
                    "Position ({}, {}) resolved to {}",
                    position.lat, position.lon, name
                );
                self.view.set_selected(&name);
                self.load_forecast(&name).await;
            }
            Err(reason) => {
                debug!("Position unavailable: {}", reason);
                let default = self.default_province.clone();
                self.view.show_notice(&format!(
                    "Không thể lấy vị trí. Mặc định hiển thị {default}."
                ));
                self.load_forecast(&default).await;
            }
        }
    }

    /// User selected a different province
    pub async fn select_province(&mut self, name: &str) {
        self.load_forecast(name).await;
    }

    /// Fetch and display the forecast for a province
    pub async fn load_forecast(&mut self, name: &str) {
        let generation = self.begin_forecast(name);
        let result = self.api.get_forecast(name).await;
        self.complete_forecast(generation, name, result);
    }

    /// Start a forecast fetch, returning its request generation
    pub fn begin_forecast(&mut self, name: &str) -> u64 {
        self.generation += 1;
        self.state = ForecastState::LoadingForecast(name.to_string());
        self.view.show_loading(name);
        self.generation
    }

    /// Apply a completed fetch. Responses from superseded fetches are
    /// discarded.
    pub fn complete_forecast(
        &mut self,
        generation: u64,
        name: &str,
        result: crate::Result<ForecastBundle>,
    ) {
        if generation != self.generation {
            debug!(
                "Discarding stale forecast response for {} (generation {}, current {})",
                name, generation, self.generation
            );
            return;
        }

        let bundle = match result {
            Ok(bundle) => bundle,
            Err(e) => {
                self.fail(name, &e);
                return;
            }
        };

        if let Err(e) = bundle.validate() {
            self.fail(name, &e);
            return;
        }

        let cards = self.renderer.render_daily(&bundle.daily);
        self.renderer.render_charts(&bundle.hourly);
        self.view.show_results(&cards);
        self.state = ForecastState::Displaying;
        info!("Displaying forecast for {}", name);
    }

    fn fail(&mut self, name: &str, error: &SkyWatchError) {
        warn!("Forecast fetch for {} failed: {}", name, error);
        self.view.show_error(&format!(
            "Không thể tải dữ liệu cho {name}. ({})",
            error.user_message()
        ));
        self.state = ForecastState::Error;
    }
}
