use serde::{Deserialize, Serialize};

/// A fertilizer or amendment suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub amount: String,    // "1-2 lbs per 1000 sq ft"
    pub frequency: String, // "Every 6-8 weeks"
    pub benefits: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub priority: Priority,
}

/// How urgently a recommendation should be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn display_text(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Fixed content of one rule's recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationTemplate {
    pub name: &'static str,
    pub amount: &'static str,
    pub frequency: &'static str,
    pub benefits: &'static str,
    pub notes: Option<&'static str>,
    pub priority: Priority,
}

impl RecommendationTemplate {
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            name: self.name.to_string(),
            amount: self.amount.to_string(),
            frequency: self.frequency.to_string(),
            benefits: self.benefits.to_string(),
            notes: self.notes.map(str::to_string),
            priority: self.priority,
        }
    }
}

/// Recommendations split for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationGroups {
    /// pH correction and N/P/K fertilizers
    pub essential: Vec<Recommendation>,
    /// Everything else (compost, soil-type amendments, maintenance)
    pub supplemental: Vec<Recommendation>,
}

impl RecommendationGroups {
    pub fn is_empty(&self) -> bool {
        self.essential.is_empty() && self.supplemental.is_empty()
    }

    pub fn len(&self) -> usize {
        self.essential.len() + self.supplemental.len()
    }
}
