pub mod catalog;
pub mod path;
pub mod recommend;

use clap::Args;
use discforge::error::DfResult;
use discforge::shot::{DistanceUnit, HoleLayout, ShotContext, SkillLevel};
use std::fs;

/// Shot conditions shared by every scoring subcommand.
#[derive(Args, Debug, Clone)]
pub struct ShotArgs {
    /// Distance to the target, in `--unit`.
    #[arg(short, long, allow_negative_numbers = true)]
    pub distance: f64,

    /// Wind speed in mph.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub wind_speed: f64,

    /// Where the wind comes from: a 16-point label (N, WSW) or degrees.
    /// N is a headwind.
    #[arg(long, default_value = "N", allow_hyphen_values = true)]
    pub wind_dir: String,

    #[arg(long, default_value = "feet")]
    pub unit: DistanceUnit,

    #[arg(long, default_value = "beginner")]
    pub skill: SkillLevel,

    /// Hole layout JSON (dogleg and obstacles) for the overlay.
    #[arg(long)]
    pub hole: Option<String>,
}

impl ShotArgs {
    pub fn layout(&self) -> DfResult<Option<HoleLayout>> {
        match &self.hole {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                Ok(Some(serde_json::from_str(&content)?))
            }
            None => Ok(None),
        }
    }

    pub fn build(&self) -> DfResult<ShotContext> {
        Ok(
            ShotContext::parse(self.distance, self.wind_speed, &self.wind_dir, self.layout()?)?
                .with_unit(self.unit)
                .with_skill(self.skill),
        )
    }
}
