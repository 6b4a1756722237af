//! Fertilizer Recommendation Rules
//!
//! Each rule is an independent threshold or categorical test that appends one
//! fixed recommendation. Rules run in a fixed order with no early exit:
//!
//! 1. pH < 5.5 -> Agricultural Lime, else pH > 7.5 -> Sulfur
//! 2. Nitrogen < 50 ppm
//! 3. Phosphorus < 30 ppm
//! 4. Potassium < 40 ppm
//! 5. Organic matter < 3 %
//! 6. Soil type (Clay -> Gypsum, Sandy -> Organic Mulch)
//! 7. Health score > 7 -> balanced maintenance fertilizer
//!
//! Rule 7 can fire alongside deficiency rules when the other factors carry
//! the score.

use crate::data::{SoilMeasurement, SoilType};
use crate::recommendations::types::{Priority, Recommendation, RecommendationTemplate};
use crate::scorer::calculate_health_score;

pub const LIME_BELOW_PH: f64 = 5.5;
pub const SULFUR_ABOVE_PH: f64 = 7.5;
pub const NITROGEN_BELOW_PPM: f64 = 50.0;
pub const PHOSPHORUS_BELOW_PPM: f64 = 30.0;
pub const POTASSIUM_BELOW_PPM: f64 = 40.0;
pub const ORGANIC_MATTER_BELOW_PCT: f64 = 3.0;
pub const MAINTENANCE_ABOVE_SCORE: f64 = 7.0;

pub const AGRICULTURAL_LIME: RecommendationTemplate = RecommendationTemplate {
    name: "Agricultural Lime",
    amount: "50-100 lbs per 1000 sq ft",
    frequency: "Once per season",
    benefits: "Raises soil pH to reduce acidity",
    notes: Some("Apply evenly and water thoroughly"),
    priority: Priority::High,
};

pub const SULFUR: RecommendationTemplate = RecommendationTemplate {
    name: "Sulfur",
    amount: "10-20 lbs per 1000 sq ft",
    frequency: "Once per season",
    benefits: "Lowers soil pH to reduce alkalinity",
    notes: Some("May take several months to see full effect"),
    priority: Priority::High,
};

pub const NITROGEN_FERTILIZER: RecommendationTemplate = RecommendationTemplate {
    name: "Nitrogen-rich Fertilizer",
    amount: "1-2 lbs per 1000 sq ft",
    frequency: "Every 4-6 weeks during growing season",
    benefits: "Promotes leaf growth and green color",
    notes: Some("Water thoroughly after application to prevent burning"),
    priority: Priority::High,
};

pub const PHOSPHATE_FERTILIZER: RecommendationTemplate = RecommendationTemplate {
    name: "Phosphate Fertilizer",
    amount: "2-3 lbs per 1000 sq ft",
    frequency: "Every 8-10 weeks",
    benefits: "Promotes root development and flowering",
    notes: Some("Work into soil rather than surface application for best results"),
    priority: Priority::Medium,
};

pub const POTASSIUM_FERTILIZER: RecommendationTemplate = RecommendationTemplate {
    name: "Potassium-rich Fertilizer",
    amount: "1-2 lbs per 1000 sq ft",
    frequency: "Every 6-8 weeks",
    benefits: "Improves overall plant vigor and disease resistance",
    notes: Some("Particularly important for fruit and root development"),
    priority: Priority::Medium,
};

pub const COMPOST: RecommendationTemplate = RecommendationTemplate {
    name: "Compost",
    amount: "1-2 inches layer",
    frequency: "Twice per year",
    benefits: "Improves soil structure, water retention, and nutrient availability",
    notes: Some("Work into top 4-6 inches of soil if possible"),
    priority: Priority::High,
};

pub const GYPSUM: RecommendationTemplate = RecommendationTemplate {
    name: "Gypsum",
    amount: "40 lbs per 1000 sq ft",
    frequency: "Once per year",
    benefits: "Improves clay soil structure and drainage",
    notes: Some("Best applied in fall or early spring"),
    priority: Priority::Medium,
};

pub const ORGANIC_MULCH: RecommendationTemplate = RecommendationTemplate {
    name: "Organic Mulch",
    amount: "3-4 inch layer",
    frequency: "Twice per year",
    benefits: "Improves water retention in sandy soils",
    notes: Some("Reapply as it breaks down"),
    priority: Priority::Medium,
};

pub const BALANCED_FERTILIZER: RecommendationTemplate = RecommendationTemplate {
    name: "Balanced Fertilizer (10-10-10)",
    amount: "1 lb per 1000 sq ft",
    frequency: "Every 8-10 weeks during growing season",
    benefits: "Maintains overall soil fertility",
    notes: Some("Reduce frequency for native plants"),
    priority: Priority::Low,
};

/// Amendment tied to a soil type, if any
pub fn soil_type_amendment(soil_type: SoilType) -> Option<&'static RecommendationTemplate> {
    match soil_type {
        SoilType::Clay => Some(&GYPSUM),
        SoilType::Sandy => Some(&ORGANIC_MULCH),
        SoilType::Loam | SoilType::Silt | SoilType::Peat | SoilType::Chalky => None,
    }
}

/// Templates of every rule that fires, in rule order
pub fn matching_templates(measurement: &SoilMeasurement) -> Vec<&'static RecommendationTemplate> {
    let mut templates = Vec::with_capacity(7);

    if measurement.ph < LIME_BELOW_PH {
        templates.push(&AGRICULTURAL_LIME);
    } else if measurement.ph > SULFUR_ABOVE_PH {
        templates.push(&SULFUR);
    }

    if measurement.nitrogen < NITROGEN_BELOW_PPM {
        templates.push(&NITROGEN_FERTILIZER);
    }

    if measurement.phosphorus < PHOSPHORUS_BELOW_PPM {
        templates.push(&PHOSPHATE_FERTILIZER);
    }

    if measurement.potassium < POTASSIUM_BELOW_PPM {
        templates.push(&POTASSIUM_FERTILIZER);
    }

    if measurement.organic_matter < ORGANIC_MATTER_BELOW_PCT {
        templates.push(&COMPOST);
    }

    if let Some(amendment) = soil_type_amendment(measurement.soil_type) {
        templates.push(amendment);
    }

    if calculate_health_score(measurement) > MAINTENANCE_ABOVE_SCORE {
        templates.push(&BALANCED_FERTILIZER);
    }

    templates
}

/// Fertilizer recommendations for a measurement, in rule order.
///
/// An empty result means no fertilizer is needed.
pub fn generate_recommendations(measurement: &SoilMeasurement) -> Vec<Recommendation> {
    matching_templates(measurement)
        .into_iter()
        .map(RecommendationTemplate::to_recommendation)
        .collect()
}
