use crate::analysis::{Analysis, HealthCategory};
use crate::report::chart::nutrient_chart;
use crate::report::types::*;
use crate::scorer::{score_breakdown, WEIGHTS};

/// Date format used on reports ("October 18, 2026")
pub const REPORT_DATE_FORMAT: &str = "%B %d, %Y";

/// Builds display reports from analyses
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generate the full report for an analysis
    pub fn generate(analysis: &Analysis) -> SoilReport {
        let measurement = &analysis.soil_measurement;

        SoilReport {
            analysis_id: analysis.id.to_string(),
            date: analysis.timestamp.format(REPORT_DATE_FORMAT).to_string(),
            soil_type: measurement.soil_type,
            overall: Self::generate_overall(analysis.health_score),
            improvement_areas: analysis
                .improvement_areas()
                .into_iter()
                .map(String::from)
                .collect(),
            parameters: Self::generate_parameters(analysis),
            recommendations: analysis.grouped_recommendations(),
            nutrient_chart: nutrient_chart(measurement),
        }
    }

    fn generate_overall(score: f64) -> OverallAssessment {
        let category = HealthCategory::from_score(score);

        OverallAssessment {
            score,
            stars: category.stars().to_string(),
            label: category.label().to_string(),
            color_class: category.color_class().to_string(),
            message: category.assessment().to_string(),
        }
    }

    fn generate_parameters(analysis: &Analysis) -> Vec<ParameterCard> {
        let m = &analysis.soil_measurement;
        let scores = score_breakdown(m);

        let rows = [
            ("pH Level", "", m.ph, scores.ph, WEIGHTS.ph),
            ("Nitrogen", "ppm", m.nitrogen, scores.nitrogen, WEIGHTS.nitrogen),
            ("Phosphorus", "ppm", m.phosphorus, scores.phosphorus, WEIGHTS.phosphorus),
            ("Potassium", "ppm", m.potassium, scores.potassium, WEIGHTS.potassium),
            ("Organic Matter", "%", m.organic_matter, scores.organic_matter, WEIGHTS.organic_matter),
            ("Moisture", "%", m.moisture, scores.moisture, WEIGHTS.moisture),
        ];

        rows.into_iter()
            .map(|(name, unit, value, score, weight)| ParameterCard {
                name: name.to_string(),
                unit: unit.to_string(),
                value,
                score,
                weight,
            })
            .collect()
    }
}
