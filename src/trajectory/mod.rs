//! Discretized flight paths for drawing.
//!
//! Frame: origin at the tee, `y` forward along the throw line, `x` lateral
//! and positive to the thrower's right. Handedness is right-hand backhand,
//! so turn drifts to +x and fade finishes toward -x. Units follow the shot
//! context.

pub mod overlay;

pub use self::overlay::{Clearance, Overlay};
use crate::config::FlightModel;
use crate::disc::{DiscProfile, FlightNumbers};
use crate::error::{DfResult, DiscForgeError};
use crate::scorer::Scorer;
use crate::shot::{DistanceUnit, ShotContext};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightPath {
    points: Vec<Point>,
    expected_range: f64,
    target_distance: f64,
    unit: DistanceUnit,
}

impl FlightPath {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn expected_range(&self) -> f64 {
        self.expected_range
    }

    pub fn target_distance(&self) -> f64 {
        self.target_distance
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn landing(&self) -> Point {
        self.points.last().copied().unwrap_or(Point::ORIGIN)
    }

    /// Positive when the disc is expected to fly past the target.
    pub fn overshoot(&self) -> f64 {
        self.expected_range - self.target_distance
    }

    /// (leftmost, rightmost) lateral displacement.
    pub fn lateral_extent(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)))
    }

    /// Lateral offset where the path crosses the target distance, or `None`
    /// if it comes up short.
    pub fn offset_at_target(&self) -> Option<f64> {
        let target = self.target_distance;
        self.points.windows(2).find_map(|w| {
            let (a, b) = (w[0], w[1]);
            if a.y <= target && target <= b.y && b.y > a.y {
                let f = (target - a.y) / (b.y - a.y);
                Some(a.x + f * (b.x - a.x))
            } else {
                None
            }
        })
    }
}

const MAX_DRIFT_RATE: f64 = 1.0;

fn smoothstep(u: f64) -> f64 {
    let u = u.clamp(0.0, 1.0);
    u * u * (3.0 - 2.0 * u)
}

/// Still-air lateral displacement as a fraction of range at flight fraction `t`.
pub fn still_air_lateral(model: &FlightModel, numbers: &FlightNumbers, t: f64) -> f64 {
    // 1. High-speed turn, held through the glide plateau
    let turn_amp = -numbers.turn() * model.turn_gain * numbers.glide() / (1.0 + numbers.fade());
    let turn = turn_amp * smoothstep(t / model.turn_end);

    // 2. Low-speed fade
    let fade = if t > model.fade_start {
        let u = (t - model.fade_start) / (1.0 - model.fade_start);
        numbers.fade() * model.fade_gain * u * u
    } else {
        0.0
    };

    turn - fade
}

pub fn generate(
    scorer: &Scorer,
    disc: &DiscProfile,
    ctx: &ShotContext,
    samples: usize,
) -> DfResult<FlightPath> {
    let model = &scorer.flight;
    if samples < 2 || samples > model.max_samples {
        return Err(DiscForgeError::InvalidInput(format!(
            "a flight path needs between 2 and {} samples (got {})",
            model.max_samples, samples
        )));
    }

    let numbers = disc.numbers();
    let range = scorer.score_debug(disc, ctx).expected_range;
    let wind_from = ctx.wind_direction().radians();
    // At most one unit sideways per unit forward, whatever the wind speed.
    let drift_per_unit = (model.wind_drift_per_mph * ctx.wind_speed()).min(MAX_DRIFT_RATE);
    let last = (samples - 1) as f64;

    let mut points = Vec::with_capacity(samples);
    points.push(Point::ORIGIN);

    let mut prev_base_x = 0.0;
    let mut prev_y = 0.0;
    let mut drift = 0.0;
    for i in 1..samples {
        let t = i as f64 / last;
        let y = range * t;
        let base_x = range * still_air_lateral(model, numbers, t);

        // Wind pushes sideways relative to the current heading.
        let dy = y - prev_y;
        let heading = (base_x - prev_base_x).atan2(dy);
        drift -= drift_per_unit * (wind_from - heading).sin() * dy;

        points.push(Point::new(base_x + drift, y));
        prev_base_x = base_x;
        prev_y = y;
    }

    debug!(
        "Path for {}: {} samples, range {:.1}{}",
        disc.id(),
        samples,
        range,
        ctx.unit().abbrev()
    );

    Ok(FlightPath {
        points,
        expected_range: range,
        target_distance: ctx.distance(),
        unit: ctx.unit(),
    })
}

/// Path plus hole overlay; `None` when the context carries no hole layout.
pub fn generate_overlay(
    scorer: &Scorer,
    disc: &DiscProfile,
    ctx: &ShotContext,
    samples: usize,
) -> DfResult<Option<Overlay>> {
    match ctx.layout() {
        Some(layout) => Ok(Some(overlay::build(generate(scorer, disc, ctx, samples)?, layout))),
        None => Ok(None),
    }
}
