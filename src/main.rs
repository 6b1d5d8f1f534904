//! SkyWatch CLI entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use skywatch::api::ApiClient;
use skywatch::config::SkyWatchConfig;
use skywatch::forecast::ForecastController;
use skywatch::location::{FixedLocationProvider, LocationProvider, NoLocationProvider};
use skywatch::render::Renderer;
use skywatch::storm::StormMapController;
use skywatch::terminal::{TerminalCharts, TerminalMap, TerminalView};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skywatch", version, about = "Weather forecast and storm tracking client")]
struct Cli {
    /// Path to a configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the forecast, selecting the nearest province to a position
    Forecast {
        /// Province to show instead of resolving a position
        #[arg(long)]
        province: Option<String>,

        /// Current latitude in decimal degrees
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Current longitude in decimal degrees
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
    },
    /// Show the current storm track
    Storm,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SkyWatchConfig::load_from_path(cli.config.clone())?;

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        None => print_overview(&config, cli.verbose),
        Some(Command::Forecast { province, lat, lon }) => match (lat, lon) {
            (Some(lat), Some(lon)) => {
                run_forecast(&config, FixedLocationProvider::new(lat, lon), province).await?;
            }
            _ => {
                run_forecast(&config, NoLocationProvider, province).await?;
            }
        },
        Some(Command::Storm) => {
            run_storm(&config).await?;
        }
    }

    Ok(())
}

async fn run_forecast<L: LocationProvider>(
    config: &SkyWatchConfig,
    location: L,
    province: Option<String>,
) -> Result<()> {
    let api = ApiClient::new(&config.backend)?;
    let mut controller = ForecastController::new(
        api,
        location,
        TerminalView,
        Renderer::new(TerminalCharts::default()),
        config.forecast.default_province.clone(),
    );

    controller.activate().await;
    if let Some(name) = province {
        controller.select_province(&name).await;
    }
    Ok(())
}

async fn run_storm(config: &SkyWatchConfig) -> Result<()> {
    let api = ApiClient::new(&config.backend)?;
    let mut controller = StormMapController::new(api, TerminalMap, config.map.clone());
    controller.activate().await;
    Ok(())
}

fn print_overview(config: &SkyWatchConfig, verbose: bool) {
    println!("SkyWatch {}", skywatch::VERSION);
    println!("Weather forecast and storm tracking client");
    println!();
    println!("Backend: {}", config.backend.base_url);
    println!("Run `skywatch forecast` or `skywatch storm` to get started.");

    if verbose {
        if let Some(path) = SkyWatchConfig::get_config_path() {
            println!("Using config from: {}", path.display());
        }
        println!("Log level: {}", config.logging.level);
        println!("Default province: {}", config.forecast.default_province);
    }
}
