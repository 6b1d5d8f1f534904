//! Forecast models mirroring the backend wire contract
//!
//! Daily and hourly data arrive as parallel sequences: index `i` across all
//! sequences of a bundle describes the same calendar day or hour. A length
//! mismatch is a contract breach by the backend and fails validation
//! immediately rather than being papered over.

use crate::error::SkyWatchError;
use serde::{Deserialize, Serialize};

/// Daily forecast as parallel sequences, one entry per calendar day
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DailyForecast {
    /// Calendar days, ISO `YYYY-MM-DD`
    pub time: Vec<String>,
    /// WMO weather condition code per day
    pub weather_code: Vec<u16>,
    /// Daily maximum temperature in °C
    pub temperature_2m_max: Vec<f64>,
    /// Daily minimum temperature in °C
    pub temperature_2m_min: Vec<f64>,
}

impl DailyForecast {
    /// Number of forecast days
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the forecast contains no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Fail fast if the parallel sequences disagree on length
    pub fn validate(&self) -> crate::Result<()> {
        let n = self.time.len();
        if self.weather_code.len() != n
            || self.temperature_2m_max.len() != n
            || self.temperature_2m_min.len() != n
        {
            return Err(SkyWatchError::parse(
                "daily forecast sequences have mismatched lengths",
            ));
        }
        Ok(())
    }
}

/// Hourly forecast as parallel sequences, one entry per hour
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HourlyForecast {
    /// Hour timestamps, ISO `YYYY-MM-DDTHH:MM`
    pub labels: Vec<String>,
    /// Air temperature at 2m in °C
    pub temperature_2m: Vec<f64>,
    /// Relative humidity at 2m in %
    pub relative_humidity_2m: Vec<f64>,
    /// Precipitation in mm
    pub precipitation: Vec<f64>,
    /// Showers in mm
    pub showers: Vec<f64>,
    /// Wind speed at 10m in km/h
    pub wind_speed_10m: Vec<f64>,
    /// Mean sea level pressure in hPa
    pub pressure_msl: Vec<f64>,
}

impl HourlyForecast {
    /// Number of forecast hours
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the forecast contains no hours
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Fail fast if the parallel sequences disagree on length
    pub fn validate(&self) -> crate::Result<()> {
        let n = self.labels.len();
        if self.temperature_2m.len() != n
            || self.relative_humidity_2m.len() != n
            || self.precipitation.len() != n
            || self.showers.len() != n
            || self.wind_speed_10m.len() != n
            || self.pressure_msl.len() != n
        {
            return Err(SkyWatchError::parse(
                "hourly forecast sequences have mismatched lengths",
            ));
        }
        Ok(())
    }
}

/// Full forecast payload returned by `GET /api/forecast`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ForecastBundle {
    /// Daily summary data
    pub daily: DailyForecast,
    /// Hourly detail data
    #[serde(rename = "hourly_detailed")]
    pub hourly: HourlyForecast,
}

impl ForecastBundle {
    /// Validate both halves of the bundle
    pub fn validate(&self) -> crate::Result<()> {
        self.daily.validate()?;
        self.hourly.validate()?;
        Ok(())
    }
}
