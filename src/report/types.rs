use crate::data::SoilType;
use crate::recommendations::RecommendationGroups;
use serde::{Deserialize, Serialize};

/// Complete display model for one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilReport {
    pub analysis_id: String, // "analysis-3f2a..."
    pub date: String,        // "October 18, 2026"
    pub soil_type: SoilType,
    pub overall: OverallAssessment,
    pub improvement_areas: Vec<String>, // "Nitrogen levels are low"
    pub parameters: Vec<ParameterCard>,
    pub recommendations: RecommendationGroups,
    pub nutrient_chart: Vec<ChartPoint>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub score: f64,
    pub stars: String,       // "★★★★☆"
    pub label: String,       // "Excellent" / "Good" / "Fair" / "Poor" / "Very Poor"
    pub color_class: String, // "bg-soil-green"
    pub message: String,
}

/// One measured parameter with its normalized sub-score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterCard {
    pub name: String,   // "Nitrogen"
    pub unit: String,   // "ppm", "%", or empty for pH
    pub value: f64,     // Raw reading
    pub score: f64,     // Normalized 0-10
    pub weight: f64,    // Share of the health score
}

impl ParameterCard {
    /// Name with unit suffix, e.g. "Nitrogen (ppm)"
    pub fn label(&self) -> String {
        if self.unit.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.unit)
        }
    }
}

/// Bar of the nutrient chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
    pub color: String, // "#4F7942"
}
