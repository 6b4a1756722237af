pub mod types;
pub mod chart;
pub mod comparison;
pub mod generator;
pub mod formatters;

pub use types::{ChartPoint, OverallAssessment, ParameterCard, SoilReport};
pub use chart::nutrient_chart;
pub use comparison::{compare, ChangeStatus, ComparisonRow};
pub use generator::ReportGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
