//! Entry points for a request-handling layer.
//!
//! The free functions use the default weights; hold a [`Scorer`] built from
//! a [`crate::config::Config`] to use custom ones.

use crate::disc::{Bag, DiscCatalog, DiscProfile};
use crate::error::DfResult;
use crate::scorer::{ScoreResult, Scorer};
use crate::selector::{Mode, Outcome};
use crate::shot::{DistanceUnit, HoleLayout, ShotContext, SkillLevel};
use crate::trajectory::{self, FlightPath, Overlay};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

pub fn build_shot_context(
    distance: f64,
    wind_speed: f64,
    wind_direction: &str,
    hole_layout: Option<HoleLayout>,
) -> DfResult<ShotContext> {
    ShotContext::parse(distance, wind_speed, wind_direction, hole_layout)
}

pub fn score_disc(disc: &Arc<DiscProfile>, ctx: &ShotContext) -> ScoreResult {
    Scorer::default().score(disc, ctx)
}

pub fn recommend(bag: &Bag, ctx: &ShotContext, mode: Mode) -> Outcome {
    Scorer::default().recommend(bag, ctx, mode)
}

pub fn generate_trajectory(
    disc: &DiscProfile,
    ctx: &ShotContext,
    sample_count: usize,
) -> DfResult<FlightPath> {
    Scorer::default().trajectory(disc, ctx, sample_count)
}

/// One recommendation call as a presentation layer would send it, with the
/// bag already resolved to catalog ids by the account store.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub owner: String,
    pub disc_ids: Vec<String>,
    pub distance: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    #[serde(default)]
    pub unit: DistanceUnit,
    #[serde(default)]
    pub skill: SkillLevel,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub hole_layout: Option<HoleLayout>,
    #[serde(default)]
    pub samples: Option<usize>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub outcome: Outcome,
    /// Path of the top-ranked disc, when there is one.
    pub path: Option<FlightPath>,
    pub overlay: Option<Overlay>,
}

/// Service: resolve the bag, recommend, and draw the best disc's path.
pub fn handle_recommendation(
    scorer: &Scorer,
    catalog: &DiscCatalog,
    req: &RecommendationRequest,
) -> DfResult<RecommendationResponse> {
    let ctx = build_shot_context(
        req.distance,
        req.wind_speed,
        &req.wind_direction,
        req.hole_layout.clone(),
    )?
    .with_unit(req.unit)
    .with_skill(req.skill);

    let bag = catalog.resolve_bag(&req.owner, &req.disc_ids)?;
    info!(
        "Recommending for '{}' ({} discs, {:.0}{}, mode {})",
        req.owner,
        bag.len(),
        ctx.distance(),
        ctx.unit().abbrev(),
        req.mode
    );

    let outcome = scorer.recommend(&bag, &ctx, req.mode);
    let samples = req.samples.unwrap_or(scorer.flight.default_samples);

    let (path, overlay) = match outcome.recommendation() {
        Some(rec) => {
            let best = &rec.best().disc;
            match trajectory::generate_overlay(scorer, best, &ctx, samples)? {
                Some(overlay) => (Some(overlay.path.clone()), Some(overlay)),
                None => (Some(scorer.trajectory(best, &ctx, samples)?), None),
            }
        }
        None => (None, None),
    };

    Ok(RecommendationResponse {
        outcome,
        path,
        overlay,
    })
}
