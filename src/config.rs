use crate::error::{DfResult, DiscForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Parsed forms of the default table flags below.
pub const DEFAULT_FEET_PER_SPEED: [f64; 4] = [35.0, 45.0, 55.0, 65.0];
pub const DEFAULT_SPEED_CAPS: [f64; 4] = [7.0, 10.0, 12.0, 14.0];

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub flight: FlightModel,
    #[command(flatten)]
    pub selection: SelectionPolicy,
}

impl Config {
    pub fn validate(&self) -> DfResult<()> {
        self.weights.validate()?;
        self.flight.validate()?;
        self.selection.validate()?;
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === RANGE FIT ===
    #[arg(long, default_value_t = 10.0)]
    pub range_weight: f64,
    #[arg(long, default_value_t = 8.0)]
    pub feet_per_glide: f64,
    // Flat-out feet per speed point, one value per skill level
    // (beginner, intermediate, advanced, pro)
    #[arg(long, default_value = "35,45,55,65")]
    pub feet_per_speed: String,
    #[arg(long, default_value_t = 0.01)]
    pub range_headwind_per_mph: f64,

    // === STABILITY FIT ===
    #[arg(long, default_value_t = 0.5)]
    pub overstable_weight: f64,
    #[arg(long, default_value_t = 0.8)]
    pub understable_weight: f64,
    #[arg(long, default_value_t = 2.0)]
    pub overstable_threshold: f64,
    #[arg(long, default_value_t = 0.5)]
    pub understable_threshold: f64,
    // Stability penalties grow with shot length; this is the share applied
    // even to the shortest shot.
    #[arg(long, default_value_t = 0.25)]
    pub stability_floor: f64,
    #[arg(long, default_value_t = 250.0)]
    pub reference_distance_ft: f64,
    #[arg(long, default_value_t = 1.0)]
    pub straight_band: f64,

    // === WIND ===
    #[arg(long, default_value_t = 0.1)]
    pub headwind_stability_per_mph: f64,
    #[arg(long, default_value_t = 0.05)]
    pub crosswind_turn_per_mph: f64,
    #[arg(long, default_value_t = 0.1)]
    pub understable_wind_gain: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            range_weight: 10.0,
            feet_per_glide: 8.0,
            feet_per_speed: "35,45,55,65".to_string(),
            range_headwind_per_mph: 0.01,
            overstable_weight: 0.5,
            understable_weight: 0.8,
            overstable_threshold: 2.0,
            understable_threshold: 0.5,
            stability_floor: 0.25,
            reference_distance_ft: 250.0,
            straight_band: 1.0,
            headwind_stability_per_mph: 0.1,
            crosswind_turn_per_mph: 0.05,
            understable_wind_gain: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn get_feet_per_speed(&self) -> DfResult<[f64; 4]> {
        let table = parse_f64_array::<4>(&self.feet_per_speed, "feet_per_speed")?;
        if table.iter().any(|v| *v <= 0.0) {
            return Err(DiscForgeError::Config(
                "--feet-per-speed values must be positive".to_string(),
            ));
        }
        Ok(table)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> DfResult<()> {
        let named = [
            ("range_weight", self.range_weight),
            ("feet_per_glide", self.feet_per_glide),
            ("range_headwind_per_mph", self.range_headwind_per_mph),
            ("overstable_weight", self.overstable_weight),
            ("understable_weight", self.understable_weight),
            ("overstable_threshold", self.overstable_threshold),
            ("understable_threshold", self.understable_threshold),
            ("stability_floor", self.stability_floor),
            ("straight_band", self.straight_band),
            ("headwind_stability_per_mph", self.headwind_stability_per_mph),
            ("crosswind_turn_per_mph", self.crosswind_turn_per_mph),
            ("understable_wind_gain", self.understable_wind_gain),
        ];
        for (name, value) in named {
            non_negative(name, value)?;
        }
        if !(self.reference_distance_ft.is_finite() && self.reference_distance_ft > 0.0) {
            return Err(DiscForgeError::Config(
                "reference_distance_ft must be positive".to_string(),
            ));
        }
        self.get_feet_per_speed()?;
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field.clone();
                }
            };
        }

        update_if_present!(range_weight, "range_weight");
        update_if_present!(feet_per_glide, "feet_per_glide");
        update_if_present!(feet_per_speed, "feet_per_speed");
        update_if_present!(range_headwind_per_mph, "range_headwind_per_mph");

        update_if_present!(overstable_weight, "overstable_weight");
        update_if_present!(understable_weight, "understable_weight");
        update_if_present!(overstable_threshold, "overstable_threshold");
        update_if_present!(understable_threshold, "understable_threshold");
        update_if_present!(stability_floor, "stability_floor");
        update_if_present!(reference_distance_ft, "reference_distance_ft");
        update_if_present!(straight_band, "straight_band");

        update_if_present!(headwind_stability_per_mph, "headwind_stability_per_mph");
        update_if_present!(crosswind_turn_per_mph, "crosswind_turn_per_mph");
        update_if_present!(understable_wind_gain, "understable_wind_gain");
    }
}

/// Shape of the three-phase lateral model used for flight paths.
/// Gains are fractions of the expected range.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModel {
    #[arg(long, default_value_t = 0.015)]
    pub turn_gain: f64,
    #[arg(long, default_value_t = 0.06)]
    pub fade_gain: f64,
    #[arg(long, default_value_t = 0.45)]
    pub turn_end: f64,
    #[arg(long, default_value_t = 0.7)]
    pub fade_start: f64,
    #[arg(long, default_value_t = 0.004)]
    pub wind_drift_per_mph: f64,
    #[arg(long, default_value_t = 50)]
    pub default_samples: usize,
    // Upper bound on a requested sample count
    #[arg(long, default_value_t = 10_000)]
    pub max_samples: usize,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self {
            turn_gain: 0.015,
            fade_gain: 0.06,
            turn_end: 0.45,
            fade_start: 0.7,
            wind_drift_per_mph: 0.004,
            default_samples: 50,
            max_samples: 10_000,
        }
    }
}

impl FlightModel {
    pub fn validate(&self) -> DfResult<()> {
        non_negative("turn_gain", self.turn_gain)?;
        non_negative("fade_gain", self.fade_gain)?;
        non_negative("wind_drift_per_mph", self.wind_drift_per_mph)?;
        let ordered = 0.0 < self.turn_end && self.turn_end <= self.fade_start && self.fade_start < 1.0;
        if !ordered {
            return Err(DiscForgeError::Config(format!(
                "flight phases must satisfy 0 < turn_end <= fade_start < 1 (got {} / {})",
                self.turn_end, self.fade_start
            )));
        }
        if self.default_samples < 2 || self.default_samples > self.max_samples {
            return Err(DiscForgeError::Config(format!(
                "default_samples must be within [2, max_samples = {}] (got {})",
                self.max_samples, self.default_samples
            )));
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionPolicy {
    /// Drop discs faster than the thrower's skill can handle.
    #[arg(long, default_value_t = false)]
    pub enforce_speed_cap: bool,
    // Max disc speed per skill level (beginner, intermediate, advanced, pro)
    #[arg(long, default_value = "7,10,12,14")]
    pub speed_caps: String,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            enforce_speed_cap: false,
            speed_caps: "7,10,12,14".to_string(),
        }
    }
}

impl SelectionPolicy {
    pub fn get_speed_caps(&self) -> DfResult<[f64; 4]> {
        parse_f64_array::<4>(&self.speed_caps, "speed_caps")
    }

    pub fn validate(&self) -> DfResult<()> {
        self.get_speed_caps().map(|_| ())
    }
}

fn non_negative(name: &str, value: f64) -> DfResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DiscForgeError::Config(format!(
            "{} must be a non-negative number (got {})",
            name, value
        )))
    }
}

fn parse_f64_array<const N: usize>(s: &str, name: &str) -> DfResult<[f64; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(DiscForgeError::Config(format!(
            "--{} requires {} values",
            name.replace('_', "-"),
            N
        )));
    }
    let mut arr = [0.0_f64; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p
            .trim()
            .parse()
            .map_err(|_| DiscForgeError::Config(format!("Invalid number in {}: '{}'", name, p)))?;
        if !arr[i].is_finite() {
            return Err(DiscForgeError::Config(format!(
                "Invalid number in {}: '{}'",
                name, p
            )));
        }
    }
    Ok(arr)
}
