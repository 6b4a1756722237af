//! Soil Measurement Data
//!
//! Input records for the scoring engine: the soil type enumeration, the raw
//! readings a user enters, and the stamped `SoilMeasurement` that carries an
//! identity and creation time.
//!
//! Nominal ranges (the engine accepts anything outside them):
//! - pH: 3.5 - 9.5
//! - N / P / K: 0 - 100 ppm
//! - Organic matter: 0 - 10 %
//! - Moisture: 0 - 100 %

use crate::error::SoilError;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// Soil texture classes offered by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    Peat,
    Chalky,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loam,
        SoilType::Silt,
        SoilType::Peat,
        SoilType::Chalky,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loam => "Loam",
            SoilType::Silt => "Silt",
            SoilType::Peat => "Peat",
            SoilType::Chalky => "Chalky",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SoilType {
    type Err = SoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SoilType::ALL
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SoilError::UnknownSoilType(s.to_string()))
    }
}

/// Raw soil readings as entered, without identity metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReadings {
    pub ph: f64,

    /// Parts per million
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,

    /// Percent
    #[serde(alias = "organicMatter")]
    pub organic_matter: f64,
    pub moisture: f64,

    #[serde(alias = "soilType")]
    pub soil_type: SoilType,
}

/// Identity of a recorded measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementId(pub Uuid);

impl MeasurementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MeasurementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "soil-{}", self.0.simple())
    }
}

/// A soil measurement stamped with identity and creation time.
///
/// Fields are public for reading; nothing in the crate mutates a measurement
/// after it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilMeasurement {
    pub id: MeasurementId,
    pub timestamp: DateTime<Utc>,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    #[serde(alias = "organicMatter")]
    pub organic_matter: f64,
    pub moisture: f64,
    #[serde(alias = "soilType")]
    pub soil_type: SoilType,
}

impl SoilMeasurement {
    /// Record readings with a fresh identity and the current time
    pub fn new(readings: SoilReadings) -> Self {
        Self::with_identity(readings, MeasurementId::new(), Utc::now())
    }

    /// Record readings with caller-supplied identity metadata
    pub fn with_identity(readings: SoilReadings, id: MeasurementId, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            timestamp,
            ph: readings.ph,
            nitrogen: readings.nitrogen,
            phosphorus: readings.phosphorus,
            potassium: readings.potassium,
            organic_matter: readings.organic_matter,
            moisture: readings.moisture,
            soil_type: readings.soil_type,
        }
    }

    /// The readings without identity metadata
    pub fn readings(&self) -> SoilReadings {
        SoilReadings {
            ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            organic_matter: self.organic_matter,
            moisture: self.moisture,
            soil_type: self.soil_type,
        }
    }
}

impl From<SoilReadings> for SoilMeasurement {
    fn from(readings: SoilReadings) -> Self {
        Self::new(readings)
    }
}

/// Parse a JSON array of readings
pub fn parse_readings(json: &str) -> Result<Vec<SoilReadings>, SoilError> {
    Ok(serde_json::from_str(json)?)
}

fn read_readings(path: &Path) -> Result<Vec<SoilReadings>, SoilError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Load a JSON array of readings from disk
pub fn load_readings(path: &Path) -> Result<Vec<SoilReadings>> {
    let readings = read_readings(path)
        .with_context(|| format!("Failed to load soil readings: {:?}", path))?;

    tracing::info!(path = ?path, count = readings.len(), "Loaded soil readings");

    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_type_from_str() {
        assert_eq!("clay".parse::<SoilType>().unwrap(), SoilType::Clay);
        assert_eq!(" Chalky ".parse::<SoilType>().unwrap(), SoilType::Chalky);
        assert_eq!("SANDY".parse::<SoilType>().unwrap(), SoilType::Sandy);

        let err = "gravel".parse::<SoilType>().unwrap_err();
        assert!(matches!(err, SoilError::UnknownSoilType(ref s) if s == "gravel"));
    }

    #[test]
    fn test_soil_type_serializes_as_display_name() {
        let json = serde_json::to_string(&SoilType::Peat).unwrap();
        assert_eq!(json, "\"Peat\"");
        assert_eq!(SoilType::Silt.to_string(), "Silt");
    }

    #[test]
    fn test_parse_readings_accepts_both_field_spellings() {
        let json = r#"[
            {"ph": 6.5, "nitrogen": 40, "phosphorus": 20, "potassium": 30,
             "organic_matter": 2.5, "moisture": 55, "soil_type": "Clay"},
            {"ph": 7.8, "nitrogen": 60, "phosphorus": 35, "potassium": 45,
             "organicMatter": 4.0, "moisture": 65, "soilType": "Loam"}
        ]"#;

        let readings = parse_readings(json).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].soil_type, SoilType::Clay);
        assert_eq!(readings[0].organic_matter, 2.5);
        assert_eq!(readings[1].organic_matter, 4.0);
        assert_eq!(readings[1].soil_type, SoilType::Loam);
    }

    #[test]
    fn test_parse_readings_rejects_unknown_soil_type() {
        let json = r#"[{"ph": 6.5, "nitrogen": 40, "phosphorus": 20, "potassium": 30,
            "organic_matter": 2.5, "moisture": 55, "soil_type": "Gravel"}]"#;

        assert!(matches!(parse_readings(json), Err(SoilError::Json(_))));
    }

    #[test]
    fn test_measurement_keeps_readings() {
        let readings = SoilReadings {
            ph: 6.2,
            nitrogen: 55.0,
            phosphorus: 31.0,
            potassium: 42.0,
            organic_matter: 3.5,
            moisture: 58.0,
            soil_type: SoilType::Silt,
        };

        let a = SoilMeasurement::new(readings);
        let b = SoilMeasurement::new(readings);

        assert_eq!(a.readings(), readings);
        assert_ne!(a.id, b.id);
        assert!(a.id.to_string().starts_with("soil-"));
    }

    #[test]
    fn test_measurement_accepts_both_field_spellings() {
        let json = r#"{"id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f",
            "timestamp": "2025-04-12T09:30:00Z",
            "ph": 6.9, "nitrogen": 48, "phosphorus": 26, "potassium": 39,
            "organicMatter": 2.8, "moisture": 61, "soilType": "Sandy"}"#;

        let measurement: SoilMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(measurement.organic_matter, 2.8);
        assert_eq!(measurement.soil_type, SoilType::Sandy);
        assert_eq!(measurement.id.to_string(), "soil-6f1c2d3e4b5a4c7d8e9f0a1b2c3d4e5f");

        // Written back under the snake_case names
        let value = serde_json::to_value(&measurement).unwrap();
        assert_eq!(value["soil_type"], "Sandy");
        assert!(value.get("organic_matter").is_some());
        assert!(value.get("organicMatter").is_none());
    }

    #[test]
    fn test_from_readings_stamps_identity() {
        let readings = SoilReadings {
            ph: 7.1,
            nitrogen: 44.0,
            phosphorus: 28.0,
            potassium: 36.0,
            organic_matter: 2.2,
            moisture: 49.0,
            soil_type: SoilType::Chalky,
        };

        let measurement = SoilMeasurement::from(readings);
        assert_eq!(measurement.readings(), readings);
        assert_ne!(measurement.id, SoilMeasurement::from(readings).id);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_readings(Path::new("/nonexistent/readings.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("readings.json"));
    }
}
