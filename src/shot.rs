//! Normalized shot conditions.
//!
//! Wind direction is where the wind blows *from*, clockwise from the throw
//! line: 0° headwind, 90° from the thrower's right, 180° tailwind, 270° from
//! the left. Compass labels assume the thrower faces north, so `N` is a
//! headwind.

use crate::error::{DfResult, DiscForgeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const METERS_PER_FOOT: f64 = 0.3048;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    pub fn degrees(&self) -> f64 {
        match self {
            Self::N => 0.0,
            Self::NNE => 22.5,
            Self::NE => 45.0,
            Self::ENE => 67.5,
            Self::E => 90.0,
            Self::ESE => 112.5,
            Self::SE => 135.0,
            Self::SSE => 157.5,
            Self::S => 180.0,
            Self::SSW => 202.5,
            Self::SW => 225.0,
            Self::WSW => 247.5,
            Self::W => 270.0,
            Self::WNW => 292.5,
            Self::NW => 315.0,
            Self::NNW => 337.5,
        }
    }

    /// Closest 16-point label for an angle.
    pub fn nearest(degrees: f64) -> Self {
        let norm = normalize_degrees(degrees);
        let idx = ((norm / 22.5).round() as usize) % 16;
        Self::iter().nth(idx).unwrap_or(Self::N)
    }
}

/// Wind origin angle in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindDirection(f64);

impl WindDirection {
    pub fn from_degrees(degrees: f64) -> DfResult<Self> {
        if !degrees.is_finite() {
            return Err(DiscForgeError::InvalidInput(format!(
                "wind direction must be a finite angle (got {})",
                degrees
            )));
        }
        Ok(Self(normalize_degrees(degrees)))
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }
}

impl From<CompassPoint> for WindDirection {
    fn from(point: CompassPoint) -> Self {
        Self(point.degrees())
    }
}

impl FromStr for WindDirection {
    type Err = DiscForgeError;

    /// Accepts a 16-point compass label (`N`, `wsw`) or a numeric angle.
    fn from_str(s: &str) -> DfResult<Self> {
        let s = s.trim();
        if let Ok(point) = CompassPoint::from_str(s) {
            return Ok(point.into());
        }
        match s.parse::<f64>() {
            Ok(deg) => Self::from_degrees(deg),
            Err(_) => Err(DiscForgeError::InvalidInput(format!(
                "unrecognized wind direction '{}'",
                s
            ))),
        }
    }
}

fn normalize_degrees(degrees: f64) -> f64 {
    let norm = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Feet,
    Meters,
}

impl DistanceUnit {
    pub fn to_feet(&self, value: f64) -> f64 {
        match self {
            Self::Feet => value,
            Self::Meters => value / METERS_PER_FOOT,
        }
    }

    pub fn from_feet(&self, feet: f64) -> f64 {
        match self {
            Self::Feet => feet,
            Self::Meters => feet * METERS_PER_FOOT,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl SkillLevel {
    /// Column in the per-skill config tables.
    pub fn index(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
            Self::Pro => 3,
        }
    }
}

/// Something on the hole to draw next to the flight path.
/// Coordinates share the path's frame and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleLayout {
    /// Degrees; positive bends right.
    pub dogleg_angle: f64,
    /// Fraction of the hole length where the fairway bends.
    pub dogleg_at: f64,
    pub obstacles: Vec<Obstacle>,
}

impl HoleLayout {
    pub fn validate(&self) -> DfResult<()> {
        if !(self.dogleg_angle.is_finite() && self.dogleg_angle.abs() < 180.0) {
            return Err(DiscForgeError::InvalidInput(format!(
                "dogleg angle must be within (-180, 180) (got {})",
                self.dogleg_angle
            )));
        }
        if !(0.0..=1.0).contains(&self.dogleg_at) {
            return Err(DiscForgeError::InvalidInput(format!(
                "dogleg position must be a fraction in [0, 1] (got {})",
                self.dogleg_at
            )));
        }
        for o in &self.obstacles {
            let finite = o.x.is_finite() && o.y.is_finite() && o.radius.is_finite();
            if !finite || o.radius <= 0.0 {
                return Err(DiscForgeError::InvalidInput(format!(
                    "obstacle '{}' needs finite coordinates and a positive radius",
                    o.label
                )));
            }
        }
        Ok(())
    }
}

/// Validated conditions for one shot. Fields are private so an instance
/// can only come out of [`ShotContext::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotContext {
    distance: f64,
    unit: DistanceUnit,
    wind_speed: f64,
    wind_direction: WindDirection,
    skill: SkillLevel,
    layout: Option<HoleLayout>,
}

impl ShotContext {
    pub fn new(
        distance: f64,
        wind_speed: f64,
        wind_direction: WindDirection,
        layout: Option<HoleLayout>,
    ) -> DfResult<Self> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(DiscForgeError::InvalidInput(format!(
                "distance must be positive (got {})",
                distance
            )));
        }
        if !(wind_speed.is_finite() && wind_speed >= 0.0) {
            return Err(DiscForgeError::InvalidInput(format!(
                "wind speed must be non-negative (got {})",
                wind_speed
            )));
        }
        if let Some(l) = &layout {
            l.validate()?;
        }
        Ok(Self {
            distance,
            unit: DistanceUnit::Feet,
            wind_speed,
            wind_direction,
            skill: SkillLevel::default(),
            layout,
        })
    }

    /// Parses the wind direction from a label or angle, then validates.
    pub fn parse(
        distance: f64,
        wind_speed: f64,
        wind_direction: &str,
        layout: Option<HoleLayout>,
    ) -> DfResult<Self> {
        Self::new(distance, wind_speed, wind_direction.parse()?, layout)
    }

    pub fn calm(distance: f64) -> DfResult<Self> {
        Self::new(distance, 0.0, WindDirection::default(), None)
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_skill(mut self, skill: SkillLevel) -> Self {
        self.skill = skill;
        self
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn distance_ft(&self) -> f64 {
        self.unit.to_feet(self.distance)
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn wind_direction(&self) -> WindDirection {
        self.wind_direction
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    pub fn layout(&self) -> Option<&HoleLayout> {
        self.layout.as_ref()
    }

    /// Positive for headwind, negative for tailwind (mph).
    pub fn headwind(&self) -> f64 {
        self.wind_speed * self.wind_direction.radians().cos()
    }

    /// Positive when the wind comes from the thrower's right (mph).
    pub fn crosswind(&self) -> f64 {
        self.wind_speed * self.wind_direction.radians().sin()
    }
}

impl Default for WindDirection {
    fn default() -> Self {
        Self(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_table_is_evenly_spaced() {
        for (i, p) in CompassPoint::iter().enumerate() {
            assert_eq!(p.degrees(), i as f64 * 22.5);
            assert_eq!(CompassPoint::nearest(p.degrees()), p);
        }
    }

    #[test]
    fn nearest_wraps_past_north() {
        assert_eq!(CompassPoint::nearest(355.0), CompassPoint::N);
        assert_eq!(CompassPoint::nearest(-90.0), CompassPoint::W);
    }

    #[test]
    fn tiny_negative_angle_stays_in_range() {
        let d = WindDirection::from_degrees(-1e-14).unwrap();
        assert!(d.degrees() >= 0.0 && d.degrees() < 360.0);
    }
}
