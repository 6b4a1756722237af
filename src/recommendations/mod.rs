pub mod types;
pub mod rules;
pub mod grouping;

pub use types::{Priority, Recommendation, RecommendationGroups, RecommendationTemplate};
pub use rules::{generate_recommendations, matching_templates, soil_type_amendment};
pub use grouping::{group_recommendations, is_essential};
