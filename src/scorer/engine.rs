use super::physics::{flat_distance_ft, range_wind_factor, reach, stability_excess, wind_adjustment};
use super::types::{FlightTendency, ScoreDetails, ScoreResult};
use super::Scorer;
use crate::disc::DiscProfile;
use crate::shot::ShotContext;
use std::sync::Arc;

/// Ranking path: only what the selector needs.
pub fn score_full(scorer: &Scorer, disc: &Arc<DiscProfile>, ctx: &ShotContext) -> ScoreResult {
    let d = score_debug(scorer, disc, ctx);
    ScoreResult {
        disc: Arc::clone(disc),
        score: d.score,
        tendency: FlightTendency::classify(d.effective_stability, scorer.weights.straight_band),
        effective_stability: d.effective_stability,
        expected_range: d.expected_range,
    }
}

/// Full breakdown, used by reports.
pub fn score_debug(scorer: &Scorer, disc: &DiscProfile, ctx: &ShotContext) -> ScoreDetails {
    let w = &scorer.weights;
    let numbers = disc.numbers();
    let mut d = ScoreDetails::default();

    // 1. Stability under wind
    d.headwind = ctx.headwind();
    d.crosswind = ctx.crosswind();
    d.base_stability = numbers.stability();
    d.wind_adjustment = wind_adjustment(w, d.headwind, d.crosswind, d.base_stability);
    d.effective_stability = d.base_stability + d.wind_adjustment;

    // 2. Range
    d.flat_distance_ft = flat_distance_ft(
        w,
        numbers,
        scorer.feet_per_speed(ctx.skill()),
        disc.avg_distance(ctx.skill()),
    );
    d.wind_range_factor = range_wind_factor(w, d.headwind);
    d.expected_range = ctx.unit().from_feet(d.flat_distance_ft * d.wind_range_factor);

    // 3. Fit
    let target = ctx.distance();
    debug_assert!(target > 0.0, "ShotContext invariant broken: distance {}", target);
    d.range_error = (d.expected_range - target) / target;
    d.range_penalty = w.range_weight * d.range_error * d.range_error;

    d.reach = reach(w, ctx.distance_ft());
    let (over, under) = stability_excess(w, d.effective_stability);
    let length_scale = w.stability_floor + d.reach;
    d.overstable_penalty = length_scale * w.overstable_weight * over * over;
    d.understable_penalty = length_scale * w.understable_weight * under * under;

    d.total_penalty = d.range_penalty + d.overstable_penalty + d.understable_penalty;
    d.score = 100.0 / (1.0 + d.total_penalty);

    d
}
