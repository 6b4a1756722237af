//! Analysis Comparison
//!
//! Compares two analyses parameter by parameter: both readings, the signed
//! difference and whether the parameter improved, declined or stayed put.
//! A rise counts as an improvement for every parameter, pH included.

use crate::analysis::Analysis;
use crate::data::SoilMeasurement;
use serde::{Deserialize, Serialize};

/// pH changes smaller than this are reported as unchanged
pub const PH_CHANGE_THRESHOLD: f64 = 0.5;

/// Changes smaller than this (ppm or percent) are reported as unchanged
pub const READING_CHANGE_THRESHOLD: f64 = 10.0;

/// Direction of change between two readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeStatus {
    Improved,
    Declined,
    Unchanged,
}

impl ChangeStatus {
    /// Classify `current - previous` against a threshold
    pub fn from_difference(difference: f64, threshold: f64) -> Self {
        if difference.abs() < threshold {
            ChangeStatus::Unchanged
        } else if difference > 0.0 {
            ChangeStatus::Improved
        } else {
            ChangeStatus::Declined
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ChangeStatus::Improved => "Improved",
            ChangeStatus::Declined => "Declined",
            ChangeStatus::Unchanged => "Unchanged",
        }
    }
}

/// One parameter of a two-analysis comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub parameter: String, // "Nitrogen"
    pub unit: String,      // "ppm", "%", or empty for pH
    pub current: f64,
    pub previous: f64,
    /// `current - previous`
    pub difference: f64,
    pub status: ChangeStatus,
}

impl ComparisonRow {
    /// "↑" for a rise or no change, "↓" for a fall
    pub fn arrow(&self) -> &'static str {
        if self.difference >= 0.0 {
            "↑"
        } else {
            "↓"
        }
    }

    /// Absolute difference with its arrow, e.g. "12.5 ↓"
    pub fn difference_text(&self) -> String {
        format!("{:.1} {}", self.difference.abs(), self.arrow())
    }

    /// Reading with unit suffix, e.g. "42.0 ppm" or "6.5"
    pub fn format_value(&self, value: f64) -> String {
        match self.unit.as_str() {
            "" => format!("{:.1}", value),
            "%" => format!("{:.1}%", value),
            unit => format!("{:.1} {}", value, unit),
        }
    }
}

fn parameters(m: &SoilMeasurement) -> [(&'static str, &'static str, f64, f64); 6] {
    [
        ("pH Level", "", m.ph, PH_CHANGE_THRESHOLD),
        ("Nitrogen", "ppm", m.nitrogen, READING_CHANGE_THRESHOLD),
        ("Phosphorus", "ppm", m.phosphorus, READING_CHANGE_THRESHOLD),
        ("Potassium", "ppm", m.potassium, READING_CHANGE_THRESHOLD),
        ("Organic Matter", "%", m.organic_matter, READING_CHANGE_THRESHOLD),
        ("Moisture", "%", m.moisture, READING_CHANGE_THRESHOLD),
    ]
}

/// Compare `current` against an earlier `previous` analysis
pub fn compare(current: &Analysis, previous: &Analysis) -> Vec<ComparisonRow> {
    parameters(&current.soil_measurement)
        .into_iter()
        .zip(parameters(&previous.soil_measurement))
        .map(|((name, unit, now, threshold), (_, _, before, _))| {
            let difference = now - before;
            ComparisonRow {
                parameter: name.to_string(),
                unit: unit.to_string(),
                current: now,
                previous: before,
                difference,
                status: ChangeStatus::from_difference(difference, threshold),
            }
        })
        .collect()
}
