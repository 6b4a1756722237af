//! Soil Health Scorer
//!
//! Scores soil measurements on a 0-10 health scale and recommends
//! fertilizers and amendments.
//!
//! - `utils/`: Normalization curves for pH, nutrients and moisture
//! - `scorer`: Weighted health score and per-parameter breakdown
//! - `recommendations/`: Rule table, generation and display grouping
//! - `analysis`: `create_analysis` entry point and health categories
//! - `history`: Session-local analysis history
//! - `report/`: Report view model with Markdown and JSON formatters
//!
//! Every scoring function is pure; nothing here holds state between calls.

pub mod error;
pub mod config;
pub mod utils;
pub mod data;
pub mod scorer;
pub mod recommendations;
pub mod analysis;
pub mod history;
pub mod report;

// Re-export commonly used types
pub use error::SoilError;
pub use config::{AnalyzerConfig, OutputFormat};
pub use utils::{normalize_moisture, normalize_nutrient, normalize_ph};
pub use data::{MeasurementId, SoilMeasurement, SoilReadings, SoilType};
pub use scorer::{calculate_health_score, score_breakdown, ScoreBreakdown};
pub use recommendations::{generate_recommendations, group_recommendations, Priority, Recommendation, RecommendationGroups};
pub use analysis::{create_analyses, create_analysis, Analysis, AnalysisId, HealthCategory};
pub use history::AnalysisHistory;
pub use report::{compare, ChangeStatus, ComparisonRow, JsonFormatter, MarkdownFormatter, ReportGenerator, SoilReport};
