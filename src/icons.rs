//! Static mapping from WMO weather condition codes to display icons

use serde::{Deserialize, Serialize};

/// Display icon for a weather condition.
///
/// The mapping from codes is many-to-one; codes outside the table fall back
/// to [`WeatherIcon::Unknown`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    Sun,
    CloudSun,
    Cloud,
    CloudFog,
    Drizzle,
    CloudRain,
    CloudDrizzle,
    CloudLightning,
    Unknown,
}

impl WeatherIcon {
    /// Icon identifier understood by the display layer
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::CloudSun => "cloud-sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::CloudFog => "cloud-fog",
            WeatherIcon::Drizzle => "drizzle",
            WeatherIcon::CloudRain => "cloud-rain",
            WeatherIcon::CloudDrizzle => "cloud-drizzle",
            WeatherIcon::CloudLightning => "cloud-lightning",
            WeatherIcon::Unknown => "cloud-question",
        }
    }
}

/// Icon for a WMO weather condition code. Total over all inputs.
#[must_use]
pub fn icon_for(code: u16) -> WeatherIcon {
    match code {
        0 | 1 => WeatherIcon::Sun,
        2 => WeatherIcon::CloudSun,
        3 => WeatherIcon::Cloud,
        45 | 48 => WeatherIcon::CloudFog,
        51 | 53 | 55 => WeatherIcon::Drizzle,
        61 | 63 | 65 => WeatherIcon::CloudRain,
        80 | 81 | 82 => WeatherIcon::CloudDrizzle,
        95 | 96 | 99 => WeatherIcon::CloudLightning,
        _ => WeatherIcon::Unknown,
    }
}

/// Human-readable description for a WMO weather condition code
#[must_use]
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, WeatherIcon::Sun)]
    #[case(1, WeatherIcon::Sun)]
    #[case(2, WeatherIcon::CloudSun)]
    #[case(3, WeatherIcon::Cloud)]
    #[case(48, WeatherIcon::CloudFog)]
    #[case(55, WeatherIcon::Drizzle)]
    #[case(63, WeatherIcon::CloudRain)]
    #[case(82, WeatherIcon::CloudDrizzle)]
    #[case(99, WeatherIcon::CloudLightning)]
    fn test_icon_table(#[case] code: u16, #[case] expected: WeatherIcon) {
        assert_eq!(icon_for(code), expected);
    }

    #[test]
    fn test_unmapped_code_falls_back_to_unknown() {
        assert_eq!(icon_for(9999), WeatherIcon::Unknown);
        assert_eq!(icon_for(9999).id(), "cloud-question");
    }

    #[test]
    fn test_icon_for_is_referentially_transparent() {
        for code in [0u16, 2, 45, 61, 95, 9999] {
            assert_eq!(icon_for(code), icon_for(code));
        }
    }

    #[test]
    fn test_describe_is_total() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(9999), "Unknown");
    }
}
