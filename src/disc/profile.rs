use crate::error::{DfResult, DiscForgeError};
use crate::shot::SkillLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

pub const SPEED_RANGE: (f64, f64) = (1.0, 14.0);
pub const GLIDE_RANGE: (f64, f64) = (1.0, 7.0);
pub const TURN_RANGE: (f64, f64) = (-5.0, 1.0);
pub const FADE_RANGE: (f64, f64) = (0.0, 5.0);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscId(String);

impl DiscId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiscId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiscId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DiscId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The four flight-shaping numbers printed on a disc.
/// Only constructible through [`FlightNumbers::new`], which enforces the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightNumbers {
    speed: f64,
    glide: f64,
    turn: f64,
    fade: f64,
}

impl FlightNumbers {
    pub fn new(speed: f64, glide: f64, turn: f64, fade: f64) -> DfResult<Self> {
        check_range("speed", speed, SPEED_RANGE)?;
        check_range("glide", glide, GLIDE_RANGE)?;
        check_range("turn", turn, TURN_RANGE)?;
        check_range("fade", fade, FADE_RANGE)?;
        Ok(Self {
            speed,
            glide,
            turn,
            fade,
        })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn glide(&self) -> f64 {
        self.glide
    }

    pub fn turn(&self) -> f64 {
        self.turn
    }

    pub fn fade(&self) -> f64 {
        self.fade
    }

    /// turn + fade: negative is understable, positive overstable.
    pub fn stability(&self) -> f64 {
        self.turn + self.fade
    }
}

impl fmt::Display for FlightNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.speed, self.glide, self.turn, self.fade)
    }
}

fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> DfResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(DiscForgeError::Validation(format!(
            "{} must be within [{}, {}] (got {})",
            name, min, max, value
        )))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DiscType {
    Putter,
    Midrange,
    FairwayDriver,
    DistanceDriver,
}

impl DiscType {
    pub fn from_speed(speed: f64) -> Self {
        if speed <= 3.0 {
            Self::Putter
        } else if speed <= 5.0 {
            Self::Midrange
        } else if speed <= 9.0 {
            Self::FairwayDriver
        } else {
            Self::DistanceDriver
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Overstable,
    Stable,
    Understable,
}

impl Stability {
    pub fn classify(numbers: &FlightNumbers) -> Self {
        let sum = numbers.stability();
        if sum >= 2.0 {
            Self::Overstable
        } else if sum <= -1.0 {
            Self::Understable
        } else {
            Self::Stable
        }
    }
}

/// Difference of flight numbers, `self - other`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightDelta {
    pub speed_diff: f64,
    pub glide_diff: f64,
    pub turn_diff: f64,
    pub fade_diff: f64,
    pub more_stable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscProfile {
    id: DiscId,
    name: String,
    manufacturer: Option<String>,
    disc_type: DiscType,
    numbers: FlightNumbers,
    // Measured still-air distance in feet, indexed by SkillLevel::index()
    avg_distance: [Option<f64>; 4],
}

impl DiscProfile {
    pub fn new(id: impl Into<DiscId>, name: impl Into<String>, numbers: FlightNumbers) -> DfResult<Self> {
        let id = id.into();
        let name = name.into();
        if id.as_str().trim().is_empty() {
            return Err(DiscForgeError::Validation("disc id must not be empty".to_string()));
        }
        if name.trim().is_empty() {
            return Err(DiscForgeError::Validation(format!(
                "disc '{}' has an empty name",
                id
            )));
        }
        Ok(Self {
            id,
            name,
            manufacturer: None,
            disc_type: DiscType::from_speed(numbers.speed()),
            numbers,
            avg_distance: [None; 4],
        })
    }

    /// Shorthand for [`FlightNumbers::new`] followed by [`DiscProfile::new`].
    pub fn from_numbers(
        id: impl Into<DiscId>,
        name: impl Into<String>,
        speed: f64,
        glide: f64,
        turn: f64,
        fade: f64,
    ) -> DfResult<Self> {
        Self::new(id, name, FlightNumbers::new(speed, glide, turn, fade)?)
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_type(mut self, disc_type: DiscType) -> Self {
        self.disc_type = disc_type;
        self
    }

    /// Records how far this disc actually flies for one skill level, in
    /// feet. Scoring prefers it over the speed-based estimate.
    pub fn with_avg_distance(mut self, skill: SkillLevel, feet: f64) -> DfResult<Self> {
        if !(feet.is_finite() && feet > 0.0) {
            return Err(DiscForgeError::Validation(format!(
                "disc '{}': average {} distance must be positive (got {})",
                self.id, skill, feet
            )));
        }
        self.avg_distance[skill.index()] = Some(feet);
        Ok(self)
    }

    pub fn avg_distance(&self, skill: SkillLevel) -> Option<f64> {
        self.avg_distance[skill.index()]
    }

    pub fn id(&self) -> &DiscId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn disc_type(&self) -> DiscType {
        self.disc_type
    }

    pub fn numbers(&self) -> &FlightNumbers {
        &self.numbers
    }

    pub fn stability(&self) -> Stability {
        Stability::classify(&self.numbers)
    }

    pub fn is_beginner_friendly(&self) -> bool {
        self.numbers.speed() <= 7.0 && self.stability() != Stability::Overstable
    }

    pub fn compare_to(&self, other: &DiscProfile) -> FlightDelta {
        let (a, b) = (&self.numbers, &other.numbers);
        FlightDelta {
            speed_diff: a.speed() - b.speed(),
            glide_diff: a.glide() - b.glide(),
            turn_diff: a.turn() - b.turn(),
            fade_diff: a.fade() - b.fade(),
            more_stable: a.fade() > b.fade(),
        }
    }
}

impl fmt::Display for DiscProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.manufacturer {
            Some(m) => write!(f, "{} {} [{}]", m, self.name, self.numbers),
            None => write!(f, "{} [{}]", self.name, self.numbers),
        }
    }
}

/// Unvalidated row as it appears in catalog files (CSV or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "type", default)]
    pub disc_type: Option<DiscType>,
    pub speed: f64,
    pub glide: f64,
    pub turn: f64,
    pub fade: f64,
    // Optional measured distances (feet) per skill level
    #[serde(default)]
    pub avg_beginner: Option<f64>,
    #[serde(default)]
    pub avg_intermediate: Option<f64>,
    #[serde(default)]
    pub avg_advanced: Option<f64>,
    #[serde(default)]
    pub avg_pro: Option<f64>,
}

impl TryFrom<DiscRecord> for DiscProfile {
    type Error = DiscForgeError;

    fn try_from(rec: DiscRecord) -> DfResult<Self> {
        let numbers = FlightNumbers::new(rec.speed, rec.glide, rec.turn, rec.fade)
            .map_err(|e| DiscForgeError::Validation(format!("disc '{}': {}", rec.id, e)))?;
        let mut profile = DiscProfile::new(rec.id, rec.name, numbers)?;
        if let Some(m) = rec.manufacturer.filter(|m| !m.trim().is_empty()) {
            profile = profile.with_manufacturer(m);
        }
        if let Some(t) = rec.disc_type {
            profile = profile.with_type(t);
        }
        let measured = [
            (SkillLevel::Beginner, rec.avg_beginner),
            (SkillLevel::Intermediate, rec.avg_intermediate),
            (SkillLevel::Advanced, rec.avg_advanced),
            (SkillLevel::Pro, rec.avg_pro),
        ];
        for (skill, feet) in measured {
            if let Some(feet) = feet {
                profile = profile.with_avg_distance(skill, feet)?;
            }
        }
        Ok(profile)
    }
}
