pub mod engine;
pub mod physics;
pub mod types;

pub use self::types::{FlightTendency, ScoreDetails, ScoreResult};
use crate::config::{
    Config, FlightModel, ScoringWeights, SelectionPolicy, DEFAULT_FEET_PER_SPEED,
    DEFAULT_SPEED_CAPS,
};
use crate::disc::{Bag, DiscProfile};
use crate::error::DfResult;
use crate::selector::{self, Mode, Outcome};
use crate::shot::{ShotContext, SkillLevel};
use crate::trajectory::{self, FlightPath};
use std::sync::Arc;

/// Immutable scoring setup. Cheap to share across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub weights: ScoringWeights,
    pub flight: FlightModel,
    pub selection: SelectionPolicy,

    // Parsed config tables, indexed by SkillLevel::index()
    feet_per_speed: [f64; 4],
    speed_caps: [f64; 4],
}

impl Scorer {
    pub fn new(config: Config) -> DfResult<Self> {
        config.validate()?;
        let feet_per_speed = config.weights.get_feet_per_speed()?;
        let speed_caps = config.selection.get_speed_caps()?;
        Ok(Self {
            weights: config.weights,
            flight: config.flight,
            selection: config.selection,
            feet_per_speed,
            speed_caps,
        })
    }

    pub fn feet_per_speed(&self, skill: SkillLevel) -> f64 {
        self.feet_per_speed[skill.index()]
    }

    pub fn speed_cap(&self, skill: SkillLevel) -> f64 {
        self.speed_caps[skill.index()]
    }

    /// Fast path used for ranking.
    pub fn score(&self, disc: &Arc<DiscProfile>, ctx: &ShotContext) -> ScoreResult {
        engine::score_full(self, disc, ctx)
    }

    /// Detailed breakdown for reports.
    pub fn score_debug(&self, disc: &DiscProfile, ctx: &ShotContext) -> ScoreDetails {
        engine::score_debug(self, disc, ctx)
    }

    pub fn recommend(&self, bag: &Bag, ctx: &ShotContext, mode: Mode) -> Outcome {
        selector::recommend(self, bag, ctx, mode)
    }

    pub fn trajectory(
        &self,
        disc: &DiscProfile,
        ctx: &ShotContext,
        samples: usize,
    ) -> DfResult<FlightPath> {
        trajectory::generate(self, disc, ctx, samples)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        let config = Config::default();
        Self {
            weights: config.weights,
            flight: config.flight,
            selection: config.selection,
            feet_per_speed: DEFAULT_FEET_PER_SPEED,
            speed_caps: DEFAULT_SPEED_CAPS,
        }
    }
}
