//! Normalization Utilities
//!
//! Maps raw soil readings onto a comparable 0-10 scale using fixed
//! piecewise-linear curves. The curves are heuristics and are kept exactly as
//! authored, including the nutrient curve never reaching 10 at its optimum.

/// pH at which the pH curve peaks
pub const OPTIMAL_PH: f64 = 6.5;

/// Fraction of the range maximum treated as the nutrient optimum
pub const NUTRIENT_OPTIMAL_FRACTION: f64 = 0.75;

/// Moisture plateau (percent) scoring a full 10
pub const MOISTURE_PLATEAU: (f64, f64) = (50.0, 70.0);

/// Score pH by distance from the optimum
///
/// Curve (d = |ph - 6.5|):
/// - d < 0.5: 10 - 2d          (pH 6-7, score 9-10)
/// - d < 1.0: 8 - 4(d - 0.5)   (pH 5.5-6 / 7-7.5)
/// - d < 1.5: 6 - 4(d - 1.0)   (pH 5-5.5 / 7.5-8)
/// - d < 2.0: 4 - 4(d - 1.5)   (pH 4.5-5 / 8-8.5)
/// - else:    max(0, 2 - 2(d - 2.0))
pub fn normalize_ph(ph: f64) -> f64 {
    let distance = (ph - OPTIMAL_PH).abs();

    if distance < 0.5 {
        10.0 - distance * 2.0
    } else if distance < 1.0 {
        8.0 - (distance - 0.5) * 4.0
    } else if distance < 1.5 {
        6.0 - (distance - 1.0) * 4.0
    } else if distance < 2.0 {
        4.0 - (distance - 1.5) * 4.0
    } else {
        (2.0 - (distance - 2.0) * 2.0).max(0.0)
    }
}

/// Score a nutrient reading over `[min, max]`
///
/// Linear within the range, then penalised once the reading passes 75% of
/// `max`. The penalty factor falls off linearly with the excess ratio but is
/// floored at 0.5, so an over-supplied nutrient keeps at least half its
/// linear score.
///
/// `max` is a fixed positive constant at every call site (100 for N/P/K, 10
/// for organic matter).
pub fn normalize_nutrient(value: f64, min: f64, max: f64) -> f64 {
    let normalized = ((value - min) / (max - min) * 10.0).clamp(0.0, 10.0);

    let optimal = max * NUTRIENT_OPTIMAL_FRACTION;
    let ratio = value / optimal;
    if ratio <= 1.0 {
        return normalized;
    }

    let excess = ratio - 1.0;
    normalized * (1.0 - excess).max(0.5)
}

/// Score soil moisture (percent)
///
/// Full marks on the 50-70% plateau, a linear climb from 0 below it and a
/// slower decline above it.
pub fn normalize_moisture(moisture: f64) -> f64 {
    let (low, high) = MOISTURE_PLATEAU;

    if (low..=high).contains(&moisture) {
        10.0
    } else if moisture < low {
        (moisture / 5.0).max(0.0)
    } else {
        (10.0 - (moisture - high) / 3.0).max(0.0)
    }
}
