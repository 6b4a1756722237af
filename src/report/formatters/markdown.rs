use crate::analysis::Analysis;
use crate::history::AnalysisHistory;
use crate::recommendations::Recommendation;
use crate::report::comparison::compare;
use crate::report::types::SoilReport;

/// Date format of the history table
const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Markdown formatter for soil reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a report as markdown
    pub fn format(report: &SoilReport) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Soil Analysis Report\n\n");
        md.push_str(&format!("**Report ID:** {}  \n", report.analysis_id));
        md.push_str(&format!("**Analysis Date:** {}  \n", report.date));
        md.push_str(&format!("**Soil Type:** {}\n\n", report.soil_type));

        // Overall
        md.push_str("## Soil Health Overview\n\n");
        md.push_str(&format!(
            "**Overall Health Score:** {:.1}/10 {} {}\n\n",
            report.overall.score, report.overall.stars, report.overall.label
        ));
        md.push_str(&format!("{}\n\n", report.overall.message));

        if !report.improvement_areas.is_empty() {
            md.push_str("### Areas for Improvement\n\n");
            for area in &report.improvement_areas {
                md.push_str(&format!("- {}\n", area));
            }
            md.push('\n');
        }

        // Parameters
        md.push_str("## Nutrient Analysis\n\n");
        md.push_str("| Parameter | Value | Score | Weight |\n");
        md.push_str("|-----------|-------|-------|--------|\n");
        for param in &report.parameters {
            md.push_str(&format!(
                "| {} | {:.1} | {:.1} | {:.0}% |\n",
                param.label(),
                param.value,
                param.score,
                param.weight * 100.0
            ));
        }
        md.push('\n');

        // Recommendations
        md.push_str("## Fertilizer Recommendations\n\n");
        if report.recommendations.is_empty() {
            md.push_str("Your soil is healthy and doesn't need additional fertilizer at this time.\n");
            return md;
        }

        if !report.recommendations.essential.is_empty() {
            md.push_str("### Essential Nutrients\n\n");
            for rec in &report.recommendations.essential {
                Self::format_recommendation(&mut md, rec);
            }
        }

        if !report.recommendations.supplemental.is_empty() {
            md.push_str("### Soil Amendments & Supplements\n\n");
            for rec in &report.recommendations.supplemental {
                Self::format_recommendation(&mut md, rec);
            }
        }

        md
    }

    fn format_recommendation(md: &mut String, rec: &Recommendation) {
        md.push_str(&format!(
            "#### {} ({} priority)\n\n",
            rec.name,
            rec.priority.display_text()
        ));
        md.push_str(&format!("- **Amount:** {}\n", rec.amount));
        md.push_str(&format!("- **Frequency:** {}\n", rec.frequency));
        md.push_str(&format!("- **Benefits:** {}\n", rec.benefits));
        if let Some(notes) = &rec.notes {
            md.push_str(&format!("- *Note:* {}\n", notes));
        }
        md.push('\n');
    }

    /// Format the session history as a table, newest first
    pub fn format_history(history: &AnalysisHistory) -> String {
        let mut md = String::with_capacity(256 + history.len() * 64);

        md.push_str("## Analysis History\n\n");
        if history.is_empty() {
            md.push_str("No analyses recorded yet.\n");
            return md;
        }

        md.push_str("| Date | Soil Type | pH | Health Score | Status |\n");
        md.push_str("|------|-----------|----|--------------|--------|\n");
        for analysis in history.iter() {
            md.push_str(&format!(
                "| {} | {} | {} | {:.1} | {} |\n",
                analysis.timestamp.format(HISTORY_DATE_FORMAT),
                analysis.soil_measurement.soil_type,
                analysis.soil_measurement.ph,
                analysis.health_score,
                analysis.category()
            ));
        }

        md
    }

    /// Format a parameter-by-parameter comparison of two analyses
    pub fn format_comparison(current: &Analysis, previous: &Analysis) -> String {
        let rows = compare(current, previous);
        let mut md = String::with_capacity(1024);

        md.push_str("## Analysis Comparison\n\n");
        md.push_str(&format!(
            "**Current:** {} ({}, {:.1}/10)  \n",
            current.timestamp.format(HISTORY_DATE_FORMAT),
            current.soil_measurement.soil_type,
            current.health_score
        ));
        md.push_str(&format!(
            "**Compared with:** {} ({}, {:.1}/10)\n\n",
            previous.timestamp.format(HISTORY_DATE_FORMAT),
            previous.soil_measurement.soil_type,
            previous.health_score
        ));

        md.push_str("| Parameter | Current | Previous | Difference | Status |\n");
        md.push_str("|-----------|---------|----------|------------|--------|\n");
        for row in &rows {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                row.parameter,
                row.format_value(row.current),
                row.format_value(row.previous),
                row.difference_text(),
                row.status.display_text()
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{create_analysis, AnalysisId};
    use crate::data::{MeasurementId, SoilMeasurement, SoilReadings, SoilType};
    use crate::report::ReportGenerator;
    use chrono::{TimeZone, Utc};

    fn analysis(readings: SoilReadings) -> Analysis {
        let timestamp = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let measurement = SoilMeasurement::with_identity(readings, MeasurementId::new(), timestamp);
        Analysis::with_identity(measurement, AnalysisId::new(), timestamp)
    }

    fn acidic_clay() -> SoilReadings {
        SoilReadings {
            ph: 5.0,
            nitrogen: 30.0,
            phosphorus: 45.0,
            potassium: 55.0,
            organic_matter: 2.0,
            moisture: 40.0,
            soil_type: SoilType::Clay,
        }
    }

    #[test]
    fn test_format_report_groups() {
        let report = ReportGenerator::generate(&analysis(acidic_clay()));
        let md = MarkdownFormatter::format(&report);

        assert!(md.starts_with("# Soil Analysis Report"));
        assert!(md.contains("**Analysis Date:** June 01, 2025"));
        assert!(md.contains("**Soil Type:** Clay"));
        assert!(md.contains("| Nitrogen (ppm) | 30.0 |"));
        assert!(md.contains("| 15% |"));

        let essential = md.find("### Essential Nutrients").unwrap();
        let supplemental = md.find("### Soil Amendments & Supplements").unwrap();
        let lime = md.find("#### Agricultural Lime (High priority)").unwrap();
        let gypsum = md.find("#### Gypsum (Medium priority)").unwrap();
        assert!(essential < lime && lime < supplemental && supplemental < gypsum);
        assert!(md.contains("- *Note:* Best applied in fall or early spring"));

        let areas = md.find("### Areas for Improvement").unwrap();
        assert!(areas < md.find("## Nutrient Analysis").unwrap());
        assert!(md.contains("- Soil pH needs adjustment\n- Nitrogen levels are low\n"));
    }

    #[test]
    fn test_format_report_without_recommendations() {
        let readings = SoilReadings {
            ph: 6.5,
            nitrogen: 55.0,
            phosphorus: 35.0,
            potassium: 45.0,
            organic_matter: 3.5,
            moisture: 60.0,
            soil_type: SoilType::Silt,
        };
        let md = MarkdownFormatter::format(&ReportGenerator::generate(&analysis(readings)));

        assert!(md.contains("doesn't need additional fertilizer"));
        assert!(!md.contains("### Essential Nutrients"));
        assert!(!md.contains("### Areas for Improvement"));
    }

    #[test]
    fn test_format_history() {
        let mut history = AnalysisHistory::new();
        assert!(MarkdownFormatter::format_history(&history).contains("No analyses recorded yet."));

        history.record(analysis(acidic_clay()));
        history.record(create_analysis(SoilMeasurement::new(SoilReadings {
            soil_type: SoilType::Chalky,
            ph: 8.1,
            ..acidic_clay()
        })));

        let md = MarkdownFormatter::format_history(&history);
        let chalky = md.find("| Chalky | 8.1 |").unwrap();
        let clay = md.find("| 2025-06-01 | Clay | 5 |").unwrap();
        assert!(chalky < clay);
    }

    #[test]
    fn test_format_comparison() {
        let previous = analysis(acidic_clay());
        let current = analysis(SoilReadings {
            ph: 6.2,
            nitrogen: 48.0,
            potassium: 40.0,
            ..acidic_clay()
        });

        let md = MarkdownFormatter::format_comparison(&current, &previous);

        assert!(md.starts_with("## Analysis Comparison"));
        assert!(md.contains("**Compared with:** 2025-06-01 (Clay, "));
        assert!(md.contains("| pH Level | 6.2 | 5.0 | 1.2 ↑ | Improved |"));
        assert!(md.contains("| Nitrogen | 48.0 ppm | 30.0 ppm | 18.0 ↑ | Improved |"));
        assert!(md.contains("| Phosphorus | 45.0 ppm | 45.0 ppm | 0.0 ↑ | Unchanged |"));
        assert!(md.contains("| Potassium | 40.0 ppm | 55.0 ppm | 15.0 ↓ | Declined |"));
        assert!(md.contains("| Organic Matter | 2.0% | 2.0% | 0.0 ↑ | Unchanged |"));
        assert_eq!(md.lines().filter(|l| l.starts_with("| ")).count(), 7);
    }
}
