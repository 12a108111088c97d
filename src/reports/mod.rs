use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use discforge::config::ScoringWeights;
use discforge::disc::DiscProfile;
use discforge::scorer::{FlightTendency, ScoreDetails, ScoreResult};
use discforge::selector::{Pick, Recommendation};
use discforge::shot::{CompassPoint, ShotContext};
use discforge::trajectory::{FlightPath, Overlay};
use std::sync::Arc;

fn tendency_color(t: FlightTendency) -> Color {
    match t {
        FlightTendency::Hook => Color::Yellow,
        FlightTendency::Straight => Color::Green,
        FlightTendency::Fade => Color::Magenta,
    }
}

fn right_align_from(table: &mut Table, first: usize, last: usize) {
    for i in first..=last {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_shot_header(ctx: &ShotContext) {
    let unit = ctx.unit().abbrev();
    println!(
        "\n🥏 Shot: {:.0}{}  |  Wind {:.0} mph from {:.0}° ({})  |  Skill: {}",
        ctx.distance(),
        unit,
        ctx.wind_speed(),
        ctx.wind_direction().degrees(),
        CompassPoint::nearest(ctx.wind_direction().degrees()),
        ctx.skill()
    );
}

pub fn print_ranking(ranking: &[ScoreResult], ctx: &ShotContext) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Disc").add_attribute(Attribute::Bold),
        Cell::new("Flight"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Eff Stab"),
        Cell::new(format!("Range ({})", ctx.unit().abbrev())),
        Cell::new("Δ Target"),
        Cell::new("Tendency"),
    ]);
    right_align_from(&mut table, 3, 6);

    for (i, r) in ranking.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(r.disc.name()).add_attribute(Attribute::Bold),
            Cell::new(r.disc.numbers()),
            Cell::new(format!("{:.1}", r.score)).fg(Color::Cyan),
            Cell::new(format!("{:+.2}", r.effective_stability)),
            Cell::new(format!("{:.0}", r.expected_range)),
            Cell::new(format!("{:+.0}", r.expected_range - ctx.distance())),
            Cell::new(r.tendency.describe()).fg(tendency_color(r.tendency)),
        ]);
    }
    println!("\n{}", table);
}

fn pick_cells(slot: &str, result: &ScoreResult, fallback: bool) -> Vec<Cell> {
    let note = if fallback { "fallback: best overall" } else { "" };
    vec![
        Cell::new(slot).add_attribute(Attribute::Bold),
        Cell::new(result.disc.to_string()),
        Cell::new(format!("{:.1}", result.score)).fg(Color::Cyan),
        Cell::new(result.tendency.describe()).fg(tendency_color(result.tendency)),
        Cell::new(note).fg(Color::DarkGrey),
    ]
}

pub fn print_recommendation(rec: &Recommendation) {
    match rec {
        Recommendation::Single(r) => {
            println!(
                "\n✅ Throw the {}: score {:.1}, {}",
                r.disc,
                r.score,
                r.tendency.describe()
            );
        }
        Recommendation::Spread {
            conservative,
            moderate,
            aggressive,
        } => {
            let mut table = Table::new();
            table
                .load_preset(ASCII_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
            table.add_row(vec!["Strategy", "Disc", "Score", "Tendency", ""]);
            let Pick { result, fallback } = conservative;
            table.add_row(pick_cells("Conservative", result, *fallback));
            table.add_row(pick_cells("Moderate", moderate, false));
            let Pick { result, fallback } = aggressive;
            table.add_row(pick_cells("Aggressive", result, *fallback));
            println!("\n{}", table);
        }
    }
}

pub fn print_score_breakdown(name: &str, d: &ScoreDetails, w: &ScoringWeights) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new(format!("Breakdown: {}", name)).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    let rows = [
        ("Headwind (mph)".to_string(), d.headwind),
        ("Crosswind (mph)".to_string(), d.crosswind),
        ("Base stability".to_string(), d.base_stability),
        ("Wind adjustment".to_string(), d.wind_adjustment),
        ("Effective stability".to_string(), d.effective_stability),
        ("Flat distance (ft)".to_string(), d.flat_distance_ft),
        ("Wind range factor".to_string(), d.wind_range_factor),
        ("Expected range".to_string(), d.expected_range),
        ("Range error".to_string(), d.range_error),
        (format!("Range penalty (x{:.1})", w.range_weight), d.range_penalty),
        ("Reach".to_string(), d.reach),
        (
            format!("Overstable penalty (x{:.1})", w.overstable_weight),
            d.overstable_penalty,
        ),
        (
            format!("Understable penalty (x{:.1})", w.understable_weight),
            d.understable_penalty,
        ),
        ("Total penalty".to_string(), d.total_penalty),
        ("Score".to_string(), d.score),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:.3}", value)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}

/// Prints roughly `rows` evenly spaced samples, always including both ends.
pub fn print_path(disc: &DiscProfile, path: &FlightPath, rows: usize) {
    let unit = path.unit().abbrev();
    println!(
        "\n📈 {}: expected range {:.0}{} vs target {:.0}{} ({:+.0}{})",
        disc,
        path.expected_range(),
        unit,
        path.target_distance(),
        unit,
        path.overshoot(),
        unit
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Sample"),
        Cell::new(format!("Forward ({})", unit)),
        Cell::new(format!("Lateral ({})", unit)),
    ]);
    right_align_from(&mut table, 0, 2);

    let n = path.len();
    let step = (n / rows.max(1)).max(1);
    for (i, p) in path.points().iter().enumerate() {
        if i % step == 0 || i + 1 == n {
            table.add_row(vec![
                Cell::new(i),
                Cell::new(format!("{:.1}", p.y)),
                Cell::new(format!("{:+.1}", p.x)),
            ]);
        }
    }
    println!("{}", table);

    let (left, right) = path.lateral_extent();
    println!(
        "   Lateral extent: {:.1}{} left / {:.1}{} right (RHBH, + is right)",
        -left, unit, right, unit
    );
    match path.offset_at_target() {
        Some(x) => println!("   Offset at target: {:+.1}{}", x, unit),
        None => println!("   Comes up short of the target."),
    }
}

pub fn print_overlay(overlay: &Overlay) {
    let unit = overlay.path.unit().abbrev();
    if let Some(end) = overlay.fairway.last() {
        println!(
            "\n🗺  Fairway ends at ({:+.1}, {:.1}){}",
            end.x, end.y, unit
        );
    }
    if overlay.clearances.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec!["Obstacle", "Clearance", "Status"]);
    for c in &overlay.clearances {
        let status = if c.hit {
            Cell::new("HIT").fg(Color::Red)
        } else {
            Cell::new("clear").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(&c.label),
            Cell::new(format!("{:.1}{}", c.clearance, unit)).set_alignment(CellAlignment::Right),
            status,
        ]);
    }
    println!("{}", table);
}

pub fn print_catalog<'a, I>(discs: I)
where
    I: IntoIterator<Item = &'a Arc<DiscProfile>>,
{
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Maker"),
        Cell::new("Type"),
        Cell::new("Flight"),
        Cell::new("Stability"),
        Cell::new("Beginner"),
    ]);
    for d in discs {
        table.add_row(vec![
            Cell::new(d.id()).add_attribute(Attribute::Bold),
            Cell::new(d.name()),
            Cell::new(d.manufacturer().unwrap_or("-")),
            Cell::new(d.disc_type()),
            Cell::new(d.numbers()),
            Cell::new(d.stability()),
            Cell::new(if d.is_beginner_friendly() { "yes" } else { "" }),
        ]);
    }
    println!("\n{}", table);
}
