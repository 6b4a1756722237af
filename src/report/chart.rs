use crate::data::SoilMeasurement;
use crate::report::types::ChartPoint;

/// Organic matter is a percentage on 0-10; scale it onto the ppm bars' axis
pub const ORGANIC_MATTER_CHART_SCALE: f64 = 10.0;

/// Bars for the nutrient levels chart: N, P, K (ppm) and organic matter x10
pub fn nutrient_chart(measurement: &SoilMeasurement) -> Vec<ChartPoint> {
    let bars = [
        ("Nitrogen", measurement.nitrogen, "#4F7942"),
        ("Phosphorus", measurement.phosphorus, "#8B4513"),
        ("Potassium", measurement.potassium, "#CD5C5C"),
        (
            "Organic Matter",
            measurement.organic_matter * ORGANIC_MATTER_CHART_SCALE,
            "#8FBC8F",
        ),
    ];

    bars.into_iter()
        .map(|(name, value, color)| ChartPoint {
            name: name.to_string(),
            value,
            color: color.to_string(),
        })
        .collect()
}
