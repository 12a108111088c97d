use super::{FlightPath, Point};
use crate::shot::HoleLayout;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Clearance {
    pub label: String,
    /// Closest approach of the path to the obstacle's edge; negative inside.
    pub clearance: f64,
    pub hit: bool,
}

/// What a presentation layer needs to draw a hole next to a flight path.
#[derive(Debug, Clone, Serialize)]
pub struct Overlay {
    pub path: FlightPath,
    /// Tee, dogleg bend, target.
    pub fairway: Vec<Point>,
    pub clearances: Vec<Clearance>,
}

impl Overlay {
    pub fn hits(&self) -> impl Iterator<Item = &Clearance> {
        self.clearances.iter().filter(|c| c.hit)
    }
}

pub fn build(path: FlightPath, layout: &HoleLayout) -> Overlay {
    let fairway = fairway_line(path.target_distance(), layout);
    let clearances = layout
        .obstacles
        .iter()
        .map(|o| {
            let center = Point::new(o.x, o.y);
            let closest = distance_to_polyline(&center, path.points());
            let clearance = closest - o.radius;
            Clearance {
                label: o.label.clone(),
                clearance,
                hit: clearance < 0.0,
            }
        })
        .collect();

    Overlay {
        path,
        fairway,
        clearances,
    }
}

fn fairway_line(length: f64, layout: &HoleLayout) -> Vec<Point> {
    let bend_y = length * layout.dogleg_at;
    let rest = length - bend_y;
    let angle = layout.dogleg_angle.to_radians();
    vec![
        Point::ORIGIN,
        Point::new(0.0, bend_y),
        Point::new(rest * angle.sin(), bend_y + rest * angle.cos()),
    ]
}

fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

fn distance_to_polyline(p: &Point, line: &[Point]) -> f64 {
    match line {
        [] => f64::INFINITY,
        [only] => p.distance_to(only),
        _ => line
            .windows(2)
            .map(|w| distance_to_segment(p, &w[0], &w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 10.0);
        assert_eq!(distance_to_segment(&Point::new(3.0, 5.0), &a, &b), 3.0);
        assert_eq!(distance_to_segment(&Point::new(0.0, 14.0), &a, &b), 4.0);
    }

    #[test]
    fn straight_hole_has_straight_fairway() {
        let layout = HoleLayout::default();
        let line = fairway_line(300.0, &layout);
        assert_eq!(line.last().copied(), Some(Point::new(0.0, 300.0)));
    }
}
