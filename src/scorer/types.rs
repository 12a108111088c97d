use crate::disc::DiscProfile;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;
use strum_macros::Display;

/// Which way the disc finishes, for a right-hand backhand throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FlightTendency {
    /// Understable: turns over and drifts right.
    Hook,
    Straight,
    /// Overstable: holds its line and finishes left.
    Fade,
}

impl FlightTendency {
    pub fn classify(effective_stability: f64, straight_band: f64) -> Self {
        if effective_stability < -straight_band {
            Self::Hook
        } else if effective_stability > straight_band {
            Self::Fade
        } else {
            Self::Straight
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Hook => "turns right (RHBH)",
            Self::Straight => "flies straight (RHBH)",
            Self::Fade => "fades left, holds line (RHBH)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub disc: Arc<DiscProfile>,
    pub score: f64,
    pub tendency: FlightTendency,
    pub effective_stability: f64,
    /// In the shot context's distance unit.
    pub expected_range: f64,
}

impl ScoreResult {
    /// Best first. Ties fall to the straighter flyer, then the slower disc,
    /// then the disc id, so the order is total.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| {
                self.effective_stability
                    .abs()
                    .total_cmp(&other.effective_stability.abs())
            })
            .then_with(|| {
                self.disc
                    .numbers()
                    .speed()
                    .total_cmp(&other.disc.numbers().speed())
            })
            .then_with(|| self.disc.id().cmp(other.disc.id()))
    }
}

#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ScoreDetails {
    // Top-line
    pub score: f64,
    pub total_penalty: f64,

    // Wind (mph)
    pub headwind: f64,
    pub crosswind: f64,

    // Stability
    pub base_stability: f64,
    pub wind_adjustment: f64,
    pub effective_stability: f64,

    // Range
    pub flat_distance_ft: f64,
    pub wind_range_factor: f64,
    pub expected_range: f64,
    pub range_error: f64,
    pub range_penalty: f64,

    // Stability fit
    pub reach: f64,
    pub overstable_penalty: f64,
    pub understable_penalty: f64,
}
