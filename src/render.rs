//! Forecast rendering: daily summary cards and time-series chart specs
//!
//! The renderer converts forecast bundles into view-models and hands chart
//! specifications to a [`ChartSurface`]. It owns the registry of mounted
//! chart handles explicitly; every [`Renderer::render_charts`] call destroys
//! the previous charts and creates the new set atomically, so no chart
//! instance is ever leaked between renders.

use crate::icons::{WeatherIcon, describe, icon_for};
use crate::models::{DailyForecast, HourlyForecast};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, Utc};

/// Tooltip date format for the hourly time axis, Vietnamese convention
pub const TOOLTIP_FORMAT: &str = "HH:mm dd/MM";

/// View-model for one daily summary card
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCard {
    /// Localized calendar-day label, e.g. "T7 22/08"
    pub day_label: String,
    /// Display icon for the day's weather code
    pub icon: WeatherIcon,
    /// Human-readable condition text
    pub description: &'static str,
    /// Maximum temperature, rounded half-up to the nearest degree
    pub temp_max: i32,
    /// Minimum temperature, rounded half-up to the nearest degree
    pub temp_min: i32,
}

/// Which of the four hourly charts a spec describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    TempHumidity,
    Precipitation,
    Wind,
    Pressure,
}

/// Visual style of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Line,
    Bar,
}

/// Which vertical axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesAxis {
    Left,
    Right,
}

/// One data series within a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label
    pub label: &'static str,
    /// Data points, parallel to the chart's time labels
    pub points: Vec<f64>,
    /// Axis the series is plotted against
    pub axis: SeriesAxis,
    /// Series color as a CSS hex string
    pub color: &'static str,
}

/// A vertical axis with its unit label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSpec {
    /// Unit shown as the axis title
    pub unit: &'static str,
}

/// Full specification of one chart, ready for a charting surface
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub chart_type: ChartType,
    /// Per-hour time axis labels
    pub labels: Vec<DateTime<Utc>>,
    pub series: Vec<Series>,
    pub left_axis: AxisSpec,
    /// Present only for dual-axis charts
    pub right_axis: Option<AxisSpec>,
    /// Tooltip date format for the time axis
    pub tooltip_format: &'static str,
}

/// Handle to a chart instance mounted on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle(pub u64);

/// Surface that can mount and unmount chart instances
pub trait ChartSurface {
    /// Create a chart from a spec, returning a handle to the instance
    fn create_chart(&mut self, spec: ChartSpec) -> ChartHandle;

    /// Destroy a previously created chart instance
    fn destroy_chart(&mut self, handle: ChartHandle);
}

/// Converts forecast data into cards and charts on a surface
pub struct Renderer<S: ChartSurface> {
    surface: S,
    charts: Vec<ChartHandle>,
}

impl<S: ChartSurface> Renderer<S> {
    /// Create a renderer over a charting surface
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            charts: Vec::new(),
        }
    }

    /// Access the underlying surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handles of the currently mounted charts
    pub fn mounted_charts(&self) -> &[ChartHandle] {
        &self.charts
    }

    /// Build the daily summary card list.
    ///
    /// Each call produces the full replacement list; no incremental diffing.
    #[must_use]
    pub fn render_daily(&self, daily: &DailyForecast) -> Vec<DailyCard> {
        daily
            .time
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let code = daily.weather_code[i];
                DailyCard {
                    day_label: format_day_label(day),
                    icon: icon_for(code),
                    description: describe(code),
                    temp_max: round_half_up(daily.temperature_2m_max[i]),
                    temp_min: round_half_up(daily.temperature_2m_min[i]),
                }
            })
            .collect()
    }

    /// Mount the four hourly charts, replacing any previously mounted set
    pub fn render_charts(&mut self, hourly: &HourlyForecast) {
        for handle in self.charts.drain(..) {
            self.surface.destroy_chart(handle);
        }

        for spec in build_chart_specs(hourly) {
            let handle = self.surface.create_chart(spec);
            self.charts.push(handle);
        }
    }
}

/// Round half-up to the nearest integer: 24.5 -> 25, -1.5 -> -1.
///
/// The same rule applies to every rendered temperature.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Build the four chart specifications from hourly data
#[must_use]
pub fn build_chart_specs(hourly: &HourlyForecast) -> Vec<ChartSpec> {
    let labels: Vec<DateTime<Utc>> = hourly.labels.iter().map(|l| parse_hour_label(l)).collect();

    vec![
        ChartSpec {
            kind: ChartKind::TempHumidity,
            chart_type: ChartType::Line,
            labels: labels.clone(),
            series: vec![
                Series {
                    label: "Nhiệt độ (°C)",
                    points: hourly.temperature_2m.clone(),
                    axis: SeriesAxis::Left,
                    color: "#facc15",
                },
                Series {
                    label: "Độ ẩm (%)",
                    points: hourly.relative_humidity_2m.clone(),
                    axis: SeriesAxis::Right,
                    color: "#38bdf8",
                },
            ],
            left_axis: AxisSpec { unit: "°C" },
            right_axis: Some(AxisSpec { unit: "%" }),
            tooltip_format: TOOLTIP_FORMAT,
        },
        ChartSpec {
            kind: ChartKind::Precipitation,
            chart_type: ChartType::Bar,
            labels: labels.clone(),
            series: vec![
                Series {
                    label: "Lượng mưa (mm)",
                    points: hourly.precipitation.clone(),
                    axis: SeriesAxis::Left,
                    color: "#60a5fa",
                },
                Series {
                    label: "Mưa rào (mm)",
                    points: hourly.showers.clone(),
                    axis: SeriesAxis::Left,
                    color: "#2563eb",
                },
            ],
            left_axis: AxisSpec { unit: "mm" },
            right_axis: None,
            tooltip_format: TOOLTIP_FORMAT,
        },
        ChartSpec {
            kind: ChartKind::Wind,
            chart_type: ChartType::Line,
            labels: labels.clone(),
            series: vec![Series {
                label: "Tốc độ gió (km/h)",
                points: hourly.wind_speed_10m.clone(),
                axis: SeriesAxis::Left,
                color: "#4ade80",
            }],
            left_axis: AxisSpec { unit: "km/h" },
            right_axis: None,
            tooltip_format: TOOLTIP_FORMAT,
        },
        ChartSpec {
            kind: ChartKind::Pressure,
            chart_type: ChartType::Line,
            labels,
            series: vec![Series {
                label: "Áp suất (hPa)",
                points: hourly.pressure_msl.clone(),
                axis: SeriesAxis::Left,
                color: "#f472b6",
            }],
            left_axis: AxisSpec { unit: "hPa" },
            right_axis: None,
            tooltip_format: TOOLTIP_FORMAT,
        },
    ]
}

fn format_day_label(day: &str) -> String {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_or_else(
        |_| day.to_string(),
        |date| {
            date.format_localized("%a %d/%m", Locale::vi_VN)
                .to_string()
        },
    )
}

fn parse_hour_label(label: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(label, "%Y-%m-%dT%H:%M")
        .map_or_else(|_| Utc::now(), |dt| dt.and_utc())
}
