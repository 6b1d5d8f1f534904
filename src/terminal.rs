//! Terminal implementations of the display surfaces
//!
//! The controllers only talk to the surface traits; these implementations
//! print the view-models so the CLI binary can exercise the full pipeline
//! without a browser charting or mapping library.

use crate::forecast::ForecastView;
use crate::render::{ChartHandle, ChartKind, ChartSpec, ChartSurface, DailyCard, SeriesAxis};
use crate::storm::{MapSurface, MarkerStyle, TrackStyle};

/// Forecast page rendered as plain terminal output
#[derive(Default)]
pub struct TerminalView;

impl ForecastView for TerminalView {
    fn set_provinces(&mut self, names: &[String]) {
        println!("Provinces available: {}", names.len());
    }

    fn set_selected(&mut self, name: &str) {
        println!("Selected province: {name}");
    }

    fn set_province_placeholder(&mut self, text: &str) {
        println!("[{text}]");
    }

    fn show_loading(&mut self, province_name: &str) {
        println!("Dự báo cho {province_name}...");
    }

    fn show_notice(&mut self, text: &str) {
        println!("* {text}");
    }

    fn show_error(&mut self, text: &str) {
        eprintln!("! {text}");
    }

    fn show_results(&mut self, cards: &[DailyCard]) {
        println!();
        for card in cards {
            println!(
                "  {:<10} {:<16} {:>3}°/{:>3}°  {}",
                card.day_label,
                card.icon.id(),
                card.temp_max,
                card.temp_min,
                card.description
            );
        }
        println!();
    }
}

/// Charting surface that prints a one-line summary per series
#[derive(Default)]
pub struct TerminalCharts {
    next_id: u64,
}

fn chart_title(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::TempHumidity => "Temperature / Humidity",
        ChartKind::Precipitation => "Precipitation / Showers",
        ChartKind::Wind => "Wind speed",
        ChartKind::Pressure => "Pressure",
    }
}

impl ChartSurface for TerminalCharts {
    fn create_chart(&mut self, spec: ChartSpec) -> ChartHandle {
        println!("[{}]", chart_title(spec.kind));
        for series in &spec.series {
            let (min, max) = series.points.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(min, max), &v| (min.min(v), max.max(v)),
            );
            let unit = match series.axis {
                SeriesAxis::Left => spec.left_axis.unit,
                SeriesAxis::Right => spec.right_axis.map_or("", |a| a.unit),
            };
            if series.points.is_empty() {
                println!("  {}: no data", series.label);
            } else {
                println!("  {}: {min:.1}{unit} .. {max:.1}{unit}", series.label);
            }
        }
        self.next_id += 1;
        ChartHandle(self.next_id)
    }

    fn destroy_chart(&mut self, _handle: ChartHandle) {
        // Printed output cannot be unmounted; nothing to do.
    }
}

/// Map surface that lists the rendered layers
#[derive(Default)]
pub struct TerminalMap;

impl MapSurface for TerminalMap {
    fn set_view(&mut self, lat: f64, lon: f64, zoom: u8) {
        println!("Map centered at ({lat}, {lon}), zoom {zoom}");
    }

    fn add_tile_layer(&mut self, _url_template: &str, attribution: &str) {
        println!("Basemap: {attribution}");
    }

    fn draw_track(&mut self, positions: &[(f64, f64)], style: TrackStyle) {
        println!(
            "Track: {} positions ({}, weight {})",
            positions.len(),
            style.color,
            style.weight
        );
    }

    fn add_marker(&mut self, lat: f64, lon: f64, _style: MarkerStyle, popup: &str) {
        println!("  fix ({lat:.1}, {lon:.1}): {popup}");
    }

    fn open_popup(&mut self, lat: f64, lon: f64, text: &str) {
        println!("Current position ({lat:.1}, {lon:.1}): {text}");
    }
}
