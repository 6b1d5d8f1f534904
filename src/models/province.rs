//! Province model used as the unit of forecast lookup

use serde::{Deserialize, Serialize};

/// A named administrative region with a representative coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Province {
    /// Province name, unique within the backend's list
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Province {
    /// Create a new province
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_wire_format() {
        let json = r#"{"name":"Hà Nội","lat":21.0285,"lon":105.8542}"#;
        let province: Province = serde_json::from_str(json).unwrap();
        assert_eq!(province.name, "Hà Nội");
        assert_eq!(province.lat, 21.0285);
        assert_eq!(province.lon, 105.8542);
    }
}
