use crate::report::types::SoilReport;

/// JSON formatter for soil reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &SoilReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &SoilReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }

    /// Format several reports as one pretty-printed JSON array
    pub fn format_all(reports: &[SoilReport]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::create_analysis;
    use crate::data::{SoilMeasurement, SoilReadings, SoilType};
    use crate::report::ReportGenerator;

    fn report() -> SoilReport {
        ReportGenerator::generate(&create_analysis(SoilMeasurement::new(SoilReadings {
            ph: 7.9,
            nitrogen: 60.0,
            phosphorus: 20.0,
            potassium: 50.0,
            organic_matter: 4.0,
            moisture: 65.0,
            soil_type: SoilType::Loam,
        })))
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&report()).unwrap();

        assert!(json.contains("\"soil_type\": \"Loam\""));
        assert!(json.contains("\"name\": \"Sulfur\""));
        assert!(json.contains("\"priority\": \"High\""));
        assert!(json.contains("\"essential\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&report()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
    }

    #[test]
    fn test_format_all_is_array() {
        let json = JsonFormatter::format_all(&[report(), report()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
