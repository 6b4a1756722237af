use crate::recommendations::types::{Recommendation, RecommendationGroups};

/// Name fragments (lowercase) that mark a recommendation as essential
pub const ESSENTIAL_KEYWORDS: [&str; 5] = ["nitrogen", "phosph", "potassium", "lime", "sulfur"];

/// True if the recommendation corrects pH or a primary nutrient
pub fn is_essential(recommendation: &Recommendation) -> bool {
    let name = recommendation.name.to_lowercase();
    ESSENTIAL_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}

/// Split recommendations into essential and supplemental groups.
///
/// Single pass; every recommendation lands in exactly one group and relative
/// order is kept within each group.
pub fn group_recommendations(recommendations: &[Recommendation]) -> RecommendationGroups {
    let mut groups = RecommendationGroups::default();

    for recommendation in recommendations {
        if is_essential(recommendation) {
            groups.essential.push(recommendation.clone());
        } else {
            groups.supplemental.push(recommendation.clone());
        }
    }

    groups
}
