//! Soil Health Scorer
//!
//! Combines the six normalized sub-scores into a weighted 0-10 health score.
//! Weights sum to 1.0 and every sub-score is bounded to [0, 10], so the total
//! needs no clamping.

use crate::data::SoilMeasurement;
use crate::utils::normalization::{normalize_moisture, normalize_nutrient, normalize_ph};
use serde::{Deserialize, Serialize};

/// Range maximum for N, P and K readings (ppm)
pub const NUTRIENT_MAX_PPM: f64 = 100.0;

/// Range maximum for organic matter (percent)
pub const ORGANIC_MATTER_MAX_PCT: f64 = 10.0;

/// Per-parameter weights of the health score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
    pub moisture: f64,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    ph: 0.2,
    nitrogen: 0.2,
    phosphorus: 0.15,
    potassium: 0.15,
    organic_matter: 0.2,
    moisture: 0.1,
};

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.ph + self.nitrogen + self.phosphorus + self.potassium + self.organic_matter + self.moisture
    }
}

/// Unrounded sub-scores (0-10 each) and their weighted total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter: f64,
    pub moisture: f64,
    pub weighted_total: f64,
}

impl ScoreBreakdown {
    /// Total rounded to one decimal place
    pub fn health_score(&self) -> f64 {
        round_to_tenth(self.weighted_total)
    }
}

/// Normalize every reading and weight the results
pub fn score_breakdown(measurement: &SoilMeasurement) -> ScoreBreakdown {
    let ph = normalize_ph(measurement.ph);
    let nitrogen = normalize_nutrient(measurement.nitrogen, 0.0, NUTRIENT_MAX_PPM);
    let phosphorus = normalize_nutrient(measurement.phosphorus, 0.0, NUTRIENT_MAX_PPM);
    let potassium = normalize_nutrient(measurement.potassium, 0.0, NUTRIENT_MAX_PPM);
    let organic_matter = normalize_nutrient(measurement.organic_matter, 0.0, ORGANIC_MATTER_MAX_PCT);
    let moisture = normalize_moisture(measurement.moisture);

    let weighted_total = ph * WEIGHTS.ph
        + nitrogen * WEIGHTS.nitrogen
        + phosphorus * WEIGHTS.phosphorus
        + potassium * WEIGHTS.potassium
        + organic_matter * WEIGHTS.organic_matter
        + moisture * WEIGHTS.moisture;

    ScoreBreakdown {
        ph,
        nitrogen,
        phosphorus,
        potassium,
        organic_matter,
        moisture,
        weighted_total,
    }
}

/// Health score (0-10, one decimal place)
pub fn calculate_health_score(measurement: &SoilMeasurement) -> f64 {
    score_breakdown(measurement).health_score()
}

fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SoilReadings, SoilType};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn measurement(ph: f64, n: f64, p: f64, k: f64, om: f64, moisture: f64) -> SoilMeasurement {
        SoilMeasurement::new(SoilReadings {
            ph,
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            organic_matter: om,
            moisture,
            soil_type: SoilType::Loam,
        })
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert_relative_eq!(WEIGHTS.total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rich_soil_score() {
        // pH 10, N/P/K/OM 20/3 each, moisture 10:
        // 2 + (0.2 + 0.15 + 0.15 + 0.2) * 20/3 + 1 = 7.667
        let m = measurement(6.5, 100.0, 100.0, 100.0, 10.0, 60.0);
        let breakdown = score_breakdown(&m);

        assert_relative_eq!(breakdown.ph, 10.0);
        assert_relative_eq!(breakdown.moisture, 10.0);
        assert_relative_eq!(breakdown.weighted_total, 3.0 + 0.7 * 20.0 / 3.0, epsilon = 1e-9);
        assert_eq!(calculate_health_score(&m), 7.7);
    }

    #[test]
    fn test_optimal_nutrients_score() {
        // 2 + 1.5 + 1.125 + 1.125 + 1.5 + 1 = 8.25 exactly, rounds half up to 8.3
        let m = measurement(6.5, 75.0, 75.0, 75.0, 7.5, 60.0);
        assert_eq!(score_breakdown(&m).weighted_total, 8.25);
        assert_eq!(calculate_health_score(&m), 8.3);
    }

    #[test]
    fn test_empty_soil_scores_zero() {
        let m = measurement(3.5, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(calculate_health_score(&m), 0.0);
    }

    #[test]
    fn test_score_has_one_decimal() {
        let m = measurement(5.9, 43.0, 27.0, 38.0, 2.2, 47.0);
        let score = calculate_health_score(&m);
        assert_relative_eq!(score * 10.0, (score * 10.0).round(), epsilon = 1e-9);
    }

    #[test]
    fn test_score_ignores_soil_type() {
        let base = measurement(6.1, 52.0, 33.0, 41.0, 3.2, 64.0);
        let scores: Vec<f64> = SoilType::ALL
            .into_iter()
            .map(|soil_type| {
                let mut readings = base.readings();
                readings.soil_type = soil_type;
                calculate_health_score(&SoilMeasurement::new(readings))
            })
            .collect();

        assert!(scores.iter().all(|s| *s == scores[0]));
    }

    proptest! {
        #[test]
        fn prop_score_bounded(
            ph in -5.0f64..20.0,
            n in -50.0f64..500.0,
            p in -50.0f64..500.0,
            k in -50.0f64..500.0,
            om in -5.0f64..50.0,
            moisture in -20.0f64..200.0,
        ) {
            let m = measurement(ph, n, p, k, om, moisture);
            let breakdown = score_breakdown(&m);

            for sub in [breakdown.ph, breakdown.nitrogen, breakdown.phosphorus,
                        breakdown.potassium, breakdown.organic_matter, breakdown.moisture] {
                prop_assert!((0.0..=10.0).contains(&sub));
            }

            let score = calculate_health_score(&m);
            prop_assert!((0.0..=10.0).contains(&score));
        }

        #[test]
        fn prop_score_deterministic(
            ph in 3.5f64..9.5,
            n in 0.0f64..100.0,
            om in 0.0f64..10.0,
            moisture in 0.0f64..100.0,
        ) {
            let readings = SoilReadings {
                ph,
                nitrogen: n,
                phosphorus: n / 2.0,
                potassium: n / 3.0,
                organic_matter: om,
                moisture,
                soil_type: SoilType::Clay,
            };
            let a = calculate_health_score(&SoilMeasurement::new(readings));
            let b = calculate_health_score(&SoilMeasurement::new(readings));
            prop_assert_eq!(a, b);
        }
    }
}
