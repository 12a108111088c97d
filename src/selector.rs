//! Ranks a bag against a shot and applies the selection mode.

use crate::disc::{Bag, DiscProfile};
use crate::scorer::{ScoreResult, Scorer};
use crate::shot::ShotContext;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One disc: the top of the ranking.
    #[default]
    Simple,
    /// Conservative / moderate / aggressive spread.
    Multi,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Conservative,
    Moderate,
    Aggressive,
}

/// A spread slot. `fallback` is set when no disc fit the slot's stability
/// rule and the overall best was used instead.
#[derive(Debug, Clone, Serialize)]
pub struct Pick {
    pub result: ScoreResult,
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Single(ScoreResult),
    Spread {
        conservative: Pick,
        moderate: ScoreResult,
        aggressive: Pick,
    },
}

impl Recommendation {
    /// The overall top-ranked disc, whatever the mode.
    pub fn best(&self) -> &ScoreResult {
        match self {
            Self::Single(r) => r,
            Self::Spread { moderate, .. } => moderate,
        }
    }

    pub fn for_strategy(&self, strategy: Strategy) -> &ScoreResult {
        match (self, strategy) {
            (Self::Single(r), _) => r,
            (Self::Spread { conservative, .. }, Strategy::Conservative) => &conservative.result,
            (Self::Spread { moderate, .. }, Strategy::Moderate) => moderate,
            (Self::Spread { aggressive, .. }, Strategy::Aggressive) => &aggressive.result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Recommended {
        recommendation: Recommendation,
        /// Every eligible disc, best first.
        ranking: Vec<ScoreResult>,
    },
    /// The bag has no discs at all.
    EmptyBag,
    /// The bag has discs but the selection policy excluded all of them.
    NoEligibleDiscs,
}

impl Outcome {
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Recommended { recommendation, .. } => Some(recommendation),
            _ => None,
        }
    }

    pub fn ranking(&self) -> &[ScoreResult] {
        match self {
            Self::Recommended { ranking, .. } => ranking,
            _ => &[],
        }
    }
}

impl Mode {
    /// `ranked` must already be sorted with [`ScoreResult::rank_cmp`].
    pub fn select(&self, ranked: &[ScoreResult]) -> Option<Recommendation> {
        let top = ranked.first()?;
        let rec = match self {
            Self::Simple => Recommendation::Single(top.clone()),
            Self::Multi => Recommendation::Spread {
                conservative: pick_or_fallback(ranked, top, |r| r.effective_stability >= 0.0),
                moderate: top.clone(),
                aggressive: pick_or_fallback(ranked, top, |r| r.effective_stability < 0.0),
            },
        };
        Some(rec)
    }
}

fn pick_or_fallback<F>(ranked: &[ScoreResult], top: &ScoreResult, rule: F) -> Pick
where
    F: Fn(&ScoreResult) -> bool,
{
    match ranked.iter().find(|r| rule(r)) {
        Some(r) => Pick {
            result: r.clone(),
            fallback: false,
        },
        None => Pick {
            result: top.clone(),
            fallback: true,
        },
    }
}

/// Scores every disc and sorts best first. Scoring runs in parallel; the
/// sort key is total so the result does not depend on scheduling.
pub fn rank(scorer: &Scorer, discs: &[Arc<DiscProfile>], ctx: &ShotContext) -> Vec<ScoreResult> {
    let mut ranked: Vec<ScoreResult> = discs
        .par_iter()
        .map(|disc| scorer.score(disc, ctx))
        .collect();
    ranked.sort_by(|a, b| a.rank_cmp(b));
    for r in &ranked {
        debug!(
            "   {:<14} score {:>6.2}  eff {:>5.2}  range {:>6.1}",
            r.disc.id().as_str(),
            r.score,
            r.effective_stability,
            r.expected_range
        );
    }
    ranked
}

/// Discs the selection policy lets through for this thrower.
pub fn eligible(scorer: &Scorer, bag: &Bag, ctx: &ShotContext) -> Vec<Arc<DiscProfile>> {
    if !scorer.selection.enforce_speed_cap {
        return bag.discs().cloned().collect();
    }
    let cap = scorer.speed_cap(ctx.skill());
    bag.discs()
        .filter(|d| d.numbers().speed() <= cap)
        .cloned()
        .collect()
}

pub fn recommend(scorer: &Scorer, bag: &Bag, ctx: &ShotContext, mode: Mode) -> Outcome {
    if bag.is_empty() {
        return Outcome::EmptyBag;
    }
    let discs = eligible(scorer, bag, ctx);
    let ranking = rank(scorer, &discs, ctx);
    match mode.select(&ranking) {
        Some(recommendation) => {
            if let Recommendation::Spread {
                conservative,
                aggressive,
                ..
            } = &recommendation
            {
                if conservative.fallback || aggressive.fallback {
                    warn!("Spread incomplete for this bag; using the overall best as fallback");
                }
            }
            Outcome::Recommended {
                recommendation,
                ranking,
            }
        }
        None => {
            warn!(
                "No disc in a bag of {} passes the {} speed cap",
                bag.len(),
                ctx.skill()
            );
            Outcome::NoEligibleDiscs
        }
    }
}
