//! Soil Analysis
//!
//! `create_analysis` is the single entry point collaborators use: it scores a
//! measurement, generates its recommendations and wraps both, with a fresh
//! identity and timestamp, into an immutable `Analysis`.
//!
//! Includes both sequential and parallel (Rayon) batch implementations.

use crate::data::SoilMeasurement;
use crate::recommendations::rules::{
    LIME_BELOW_PH, NITROGEN_BELOW_PPM, ORGANIC_MATTER_BELOW_PCT, PHOSPHORUS_BELOW_PPM,
    POTASSIUM_BELOW_PPM, SULFUR_ABOVE_PH,
};
use crate::recommendations::{generate_recommendations, group_recommendations, Recommendation, RecommendationGroups};
use crate::scorer::calculate_health_score;
use crate::utils::normalization::MOISTURE_PLATEAU;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "analysis-{}", self.0.simple())
    }
}

/// Result of analysing one soil measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: AnalysisId,
    pub timestamp: DateTime<Utc>,
    pub soil_measurement: SoilMeasurement,
    pub recommendations: Vec<Recommendation>,
    /// 0-10, one decimal place
    pub health_score: f64,
}

impl Analysis {
    /// Analyse a measurement under caller-supplied identity metadata
    pub fn with_identity(measurement: SoilMeasurement, id: AnalysisId, timestamp: DateTime<Utc>) -> Self {
        let recommendations = generate_recommendations(&measurement);
        let health_score = calculate_health_score(&measurement);

        tracing::debug!(
            analysis_id = %id,
            soil_type = %measurement.soil_type,
            health_score,
            recommendations = recommendations.len(),
            "Created soil analysis"
        );

        Self {
            id,
            timestamp,
            soil_measurement: measurement,
            recommendations,
            health_score,
        }
    }

    pub fn category(&self) -> HealthCategory {
        HealthCategory::from_score(self.health_score)
    }

    /// Essential / supplemental split of the recommendations
    pub fn grouped_recommendations(&self) -> RecommendationGroups {
        group_recommendations(&self.recommendations)
    }

    /// True when no rule fired
    pub fn needs_no_fertilizer(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Short notes on readings outside their healthy range
    ///
    /// Uses the same thresholds as the recommendation rules; moisture is low
    /// below the full-score plateau.
    pub fn improvement_areas(&self) -> Vec<&'static str> {
        let m = &self.soil_measurement;
        let checks = [
            (m.ph < LIME_BELOW_PH || m.ph > SULFUR_ABOVE_PH, "Soil pH needs adjustment"),
            (m.nitrogen < NITROGEN_BELOW_PPM, "Nitrogen levels are low"),
            (m.phosphorus < PHOSPHORUS_BELOW_PPM, "Phosphorus levels are low"),
            (m.potassium < POTASSIUM_BELOW_PPM, "Potassium levels are low"),
            (m.organic_matter < ORGANIC_MATTER_BELOW_PCT, "Organic matter content needs improvement"),
            (m.moisture < MOISTURE_PLATEAU.0, "Soil moisture levels are low"),
        ];

        checks
            .into_iter()
            .filter_map(|(applies, area)| applies.then_some(area))
            .collect()
    }
}

/// Analyse a soil measurement
pub fn create_analysis(measurement: SoilMeasurement) -> Analysis {
    Analysis::with_identity(measurement, AnalysisId::new(), Utc::now())
}

/// Analyse a batch of measurements in parallel; output order matches input
pub fn create_analyses(measurements: &[SoilMeasurement]) -> Vec<Analysis> {
    measurements
        .par_iter()
        .cloned()
        .map(create_analysis)
        .collect()
}

/// Analyse a batch sequentially (for comparison with the parallel path)
pub fn create_analyses_sequential(measurements: &[SoilMeasurement]) -> Vec<Analysis> {
    measurements.iter().cloned().map(create_analysis).collect()
}

/// Health band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HealthCategory {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl HealthCategory {
    /// Bands are inclusive on their lower bound; anything below 2 (or NaN)
    /// is Very Poor.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 8.0 => HealthCategory::Excellent,
            s if s >= 6.0 => HealthCategory::Good,
            s if s >= 4.0 => HealthCategory::Fair,
            s if s >= 2.0 => HealthCategory::Poor,
            _ => HealthCategory::VeryPoor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "Excellent",
            HealthCategory::Good => "Good",
            HealthCategory::Fair => "Fair",
            HealthCategory::Poor => "Poor",
            HealthCategory::VeryPoor => "Very Poor",
        }
    }

    /// Badge colour class used by the web front end
    pub fn color_class(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "bg-soil-green",
            HealthCategory::Good => "bg-soil-light-green",
            HealthCategory::Fair => "bg-soil-light-brown",
            HealthCategory::Poor => "bg-soil-terra",
            HealthCategory::VeryPoor => "bg-red-600",
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => "★★★★★",
            HealthCategory::Good => "★★★★☆",
            HealthCategory::Fair => "★★★☆☆",
            HealthCategory::Poor => "★★☆☆☆",
            HealthCategory::VeryPoor => "★☆☆☆☆",
        }
    }

    /// One-sentence overall assessment
    pub fn assessment(&self) -> &'static str {
        match self {
            HealthCategory::Excellent => {
                "Excellent soil health. Your soil is in optimal condition for plant growth."
            }
            HealthCategory::Good => {
                "Good soil health. Some minor improvements can be made for optimal plant growth."
            }
            HealthCategory::Fair => {
                "Fair soil health. Several improvements are needed for better plant growth."
            }
            HealthCategory::Poor | HealthCategory::VeryPoor => {
                "Poor soil health. Significant improvements are required for successful plant growth."
            }
        }
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
