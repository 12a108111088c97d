#![allow(dead_code)]

use discforge::disc::{Bag, DiscProfile};
use discforge::shot::ShotContext;
use std::sync::Arc;

pub fn disc(id: &str, speed: f64, glide: f64, turn: f64, fade: f64) -> Arc<DiscProfile> {
    Arc::new(DiscProfile::from_numbers(id, id, speed, glide, turn, fade).unwrap())
}

pub fn shot(distance: f64, wind_speed: f64, wind_dir: &str) -> ShotContext {
    ShotContext::parse(distance, wind_speed, wind_dir, None).unwrap()
}

pub fn bag(discs: &[Arc<DiscProfile>]) -> Bag {
    Bag::from_profiles("tester", discs.iter().cloned())
}

/// A small bag spanning the stability range.
pub fn mixed_bag() -> Vec<Arc<DiscProfile>> {
    vec![
        disc("flippy", 9.0, 5.0, -4.0, 1.0),
        disc("neutral", 7.0, 5.0, -1.0, 1.0),
        disc("stable", 9.0, 5.0, -1.0, 2.0),
        disc("beef", 12.0, 4.0, 0.0, 4.0),
        disc("putter", 2.0, 3.0, 0.0, 1.0),
    ]
}
