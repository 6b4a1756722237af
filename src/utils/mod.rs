//! Utility modules for soil scoring
//!
//! - Normalization: piecewise curves mapping raw readings onto 0-10

pub mod normalization;

pub use normalization::{normalize_moisture, normalize_nutrient, normalize_ph};
