use crate::config::ScoringWeights;
use crate::disc::FlightNumbers;

const MIN_RANGE_FACTOR: f64 = 0.25;
const MAX_RANGE_FACTOR: f64 = 2.0;

/// Stability shift caused by wind.
///
/// Headwind pushes toward overstable, tailwind toward understable, and wind
/// from the thrower's right subtracts stability in proportion to its lateral
/// component. Understable discs are more easily moved. Linear in wind speed.
pub fn wind_adjustment(
    weights: &ScoringWeights,
    headwind: f64,
    crosswind: f64,
    base_stability: f64,
) -> f64 {
    let susceptibility = 1.0 + weights.understable_wind_gain * (-base_stability).max(0.0);
    susceptibility
        * (weights.headwind_stability_per_mph * headwind
            - weights.crosswind_turn_per_mph * crosswind)
}

/// Still-air, flat-out distance in feet. A measured distance wins; otherwise
/// it is estimated for a thrower who gets `feet_per_speed` out of each speed
/// point.
pub fn flat_distance_ft(
    weights: &ScoringWeights,
    numbers: &FlightNumbers,
    feet_per_speed: f64,
    measured: Option<f64>,
) -> f64 {
    measured.unwrap_or_else(|| numbers.speed() * feet_per_speed + numbers.glide() * weights.feet_per_glide)
}

/// Multiplier on range: below 1 into a headwind, above 1 with a tailwind.
pub fn range_wind_factor(weights: &ScoringWeights, headwind: f64) -> f64 {
    (1.0 - weights.range_headwind_per_mph * headwind).clamp(MIN_RANGE_FACTOR, MAX_RANGE_FACTOR)
}

/// How far into "long shot" territory a distance is, in (0, 1).
pub fn reach(weights: &ScoringWeights, distance_ft: f64) -> f64 {
    distance_ft / (distance_ft + weights.reference_distance_ft)
}

/// (overstable excess, understable excess) past the configured thresholds.
pub fn stability_excess(weights: &ScoringWeights, effective_stability: f64) -> (f64, f64) {
    let over = (effective_stability - weights.overstable_threshold).max(0.0);
    let under = (-effective_stability - weights.understable_threshold).max(0.0);
    (over, under)
}
