mod common;

use common::disc;
use discforge::disc::{
    Bag, DiscCatalog, DiscId, DiscProfile, DiscType, FlightNumbers, Stability,
};
use discforge::error::DiscForgeError;
use discforge::shot::SkillLevel;
use rstest::rstest;
use std::fs::File;
use std::io::{Cursor, Write};

#[rstest]
#[case(0.0, 5.0, 0.0, 1.0)]
#[case(15.0, 5.0, 0.0, 1.0)]
#[case(9.0, 0.5, 0.0, 1.0)]
#[case(9.0, 8.0, 0.0, 1.0)]
#[case(9.0, 5.0, -6.0, 1.0)]
#[case(9.0, 5.0, 2.0, 1.0)]
#[case(9.0, 5.0, 0.0, -1.0)]
#[case(9.0, 5.0, 0.0, 6.0)]
#[case(f64::NAN, 5.0, 0.0, 1.0)]
#[case(9.0, 5.0, f64::INFINITY, 1.0)]
fn out_of_range_numbers_are_rejected(
    #[case] speed: f64,
    #[case] glide: f64,
    #[case] turn: f64,
    #[case] fade: f64,
) {
    assert!(matches!(
        FlightNumbers::new(speed, glide, turn, fade),
        Err(DiscForgeError::Validation(_))
    ));
}

#[rstest]
#[case(1.0, 1.0, -5.0, 0.0)]
#[case(14.0, 7.0, 1.0, 5.0)]
#[case(9.5, 5.5, -1.5, 2.5)]
fn range_bounds_are_inclusive(
    #[case] speed: f64,
    #[case] glide: f64,
    #[case] turn: f64,
    #[case] fade: f64,
) {
    let n = FlightNumbers::new(speed, glide, turn, fade).unwrap();
    assert_eq!(n.stability(), turn + fade);
}

#[rstest]
#[case(2.0, DiscType::Putter)]
#[case(5.0, DiscType::Midrange)]
#[case(7.0, DiscType::FairwayDriver)]
#[case(12.0, DiscType::DistanceDriver)]
fn type_is_inferred_from_speed(#[case] speed: f64, #[case] expected: DiscType) {
    assert_eq!(disc("x", speed, 4.0, 0.0, 1.0).disc_type(), expected);
}

#[rstest]
#[case(-3.0, 1.0, Stability::Understable)]
#[case(-1.0, 1.0, Stability::Stable)]
#[case(-1.0, 3.0, Stability::Overstable)]
fn stability_class(#[case] turn: f64, #[case] fade: f64, #[case] expected: Stability) {
    assert_eq!(disc("x", 9.0, 5.0, turn, fade).stability(), expected);
}

#[test]
fn empty_id_or_name_is_rejected() {
    let n = FlightNumbers::new(5.0, 5.0, 0.0, 0.0).unwrap();
    assert!(DiscProfile::new("", "Mako3", n).is_err());
    assert!(DiscProfile::new("mako", "  ", n).is_err());
}

#[test]
fn compare_to_reports_differences() {
    let a = disc("a", 9.0, 5.0, -1.0, 2.0);
    let b = disc("b", 7.0, 5.0, 0.0, 1.0);
    let d = a.compare_to(&b);
    assert_eq!(d.speed_diff, 2.0);
    assert_eq!(d.glide_diff, 0.0);
    assert_eq!(d.turn_diff, -1.0);
    assert_eq!(d.fade_diff, 1.0);
    assert!(d.more_stable);
}

#[test]
fn display_shows_flight_numbers() {
    let d = DiscProfile::from_numbers("tb", "Thunderbird", 9.0, 5.0, 0.0, 2.0)
        .unwrap()
        .with_manufacturer("Innova");
    assert_eq!(d.to_string(), "Innova Thunderbird [9/5/0/2]");
}

#[test]
fn csv_catalog_loads_optional_columns() {
    let data = "\
id,name,manufacturer,type,speed,glide,turn,fade
tb, Thunderbird ,Innova,,9,5,0,2
judge,Judge,,putter,2,4,0,1
";
    let catalog = DiscCatalog::from_csv_reader(Cursor::new(data)).unwrap();
    assert_eq!(catalog.len(), 2);

    let tb = catalog.get(&DiscId::new("tb")).unwrap();
    assert_eq!(tb.name(), "Thunderbird");
    assert_eq!(tb.manufacturer(), Some("Innova"));
    assert_eq!(tb.disc_type(), DiscType::FairwayDriver);

    let judge = catalog.get(&DiscId::new("judge")).unwrap();
    assert_eq!(judge.manufacturer(), None);
    assert_eq!(judge.disc_type(), DiscType::Putter);
}

#[test]
fn catalog_rows_carry_measured_distances() {
    let data = "\
id,name,manufacturer,type,speed,glide,turn,fade,avg_beginner,avg_intermediate,avg_advanced,avg_pro
tb,Thunderbird,Innova,,9,5,0,2,240,,,390
buzzz,Buzzz,Discraft,,5,4,-1,1,,,,
";
    let catalog = DiscCatalog::from_csv_reader(Cursor::new(data)).unwrap();
    let tb = catalog.get(&DiscId::new("tb")).unwrap();
    assert_eq!(tb.avg_distance(SkillLevel::Beginner), Some(240.0));
    assert_eq!(tb.avg_distance(SkillLevel::Intermediate), None);
    assert_eq!(tb.avg_distance(SkillLevel::Pro), Some(390.0));
    let buzzz = catalog.get(&DiscId::new("buzzz")).unwrap();
    assert_eq!(buzzz.avg_distance(SkillLevel::Beginner), None);

    let json = r#"[{"id": "river", "name": "River", "speed": 7, "glide": 7,
                    "turn": -1, "fade": 1, "avg_intermediate": 310}]"#;
    let catalog = DiscCatalog::from_json_reader(Cursor::new(json)).unwrap();
    let river = catalog.get(&DiscId::new("river")).unwrap();
    assert_eq!(river.avg_distance(SkillLevel::Intermediate), Some(310.0));

    let negative = "id,name,manufacturer,type,speed,glide,turn,fade,avg_beginner\nx,X,,,9,5,0,1,-20\n";
    assert!(matches!(
        DiscCatalog::from_csv_reader(Cursor::new(negative)),
        Err(DiscForgeError::Validation(_))
    ));
}

#[test]
fn catalog_filters_by_type() {
    let catalog = DiscCatalog::stock().unwrap();
    let putters: Vec<_> = catalog
        .of_type(DiscType::Putter)
        .iter()
        .map(|d| d.id().as_str().to_string())
        .collect();
    assert_eq!(putters, vec!["aviar", "judge"]);
    assert!(catalog.of_type(DiscType::DistanceDriver).len() >= 2);
}

#[test]
fn csv_catalog_rejects_bad_rows() {
    let out_of_range = "id,name,manufacturer,type,speed,glide,turn,fade\nx,X,,,20,5,0,1\n";
    assert!(matches!(
        DiscCatalog::from_csv_reader(Cursor::new(out_of_range)),
        Err(DiscForgeError::Validation(_))
    ));

    let duplicate = "id,name,manufacturer,type,speed,glide,turn,fade\nx,X,,,9,5,0,1\nx,Y,,,7,5,0,1\n";
    assert!(matches!(
        DiscCatalog::from_csv_reader(Cursor::new(duplicate)),
        Err(DiscForgeError::Validation(_))
    ));

    let not_a_number = "id,name,manufacturer,type,speed,glide,turn,fade\nx,X,,,fast,5,0,1\n";
    assert!(matches!(
        DiscCatalog::from_csv_reader(Cursor::new(not_a_number)),
        Err(DiscForgeError::Csv(_))
    ));
}

#[test]
fn catalog_file_format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("discs.json");
    let mut f = File::create(&json_path).unwrap();
    write!(
        f,
        r#"[{{"id": "river", "name": "River", "speed": 7, "glide": 7, "turn": -1, "fade": 1}}]"#
    )
    .unwrap();
    let catalog = DiscCatalog::load_from_file(&json_path).unwrap();
    assert_eq!(catalog.len(), 1);

    let csv_path = dir.path().join("discs.csv");
    let mut f = File::create(&csv_path).unwrap();
    writeln!(f, "id,name,manufacturer,type,speed,glide,turn,fade").unwrap();
    writeln!(f, "zone,Zone,Discraft,,4,3,0,3").unwrap();
    let catalog = DiscCatalog::load_from_file(&csv_path).unwrap();
    assert_eq!(catalog.len(), 1);

    assert!(matches!(
        DiscCatalog::load_from_file(dir.path().join("missing.csv")),
        Err(DiscForgeError::Io(_))
    ));
}

#[test]
fn bag_holds_each_disc_once() {
    let a = disc("a", 9.0, 5.0, -1.0, 2.0);
    let b = disc("b", 7.0, 5.0, 0.0, 1.0);
    let mut bag = Bag::new("sam");
    assert!(bag.add(a.clone()));
    assert!(!bag.add(a.clone()));
    assert!(bag.add(b));
    assert_eq!(bag.len(), 2);
    assert!(bag.entries().iter().all(|e| e.owner == "sam"));

    assert!(bag.remove(&DiscId::new("a")).is_some());
    assert!(!bag.contains(a.id()));
    assert!(bag.remove(&DiscId::new("a")).is_none());
}

#[test]
fn resolve_bag_collapses_repeats_and_rejects_unknown_ids() {
    let catalog = DiscCatalog::stock().unwrap();
    let bag = catalog
        .resolve_bag("sam", ["teebird", "buzzz", "teebird"])
        .unwrap();
    assert_eq!(bag.len(), 2);
    assert_eq!(bag.owner(), "sam");

    match catalog.resolve_bag("sam", ["teebird", "frisbee"]) {
        Err(DiscForgeError::UnknownDisc(id)) => assert_eq!(id, "frisbee"),
        other => panic!("expected UnknownDisc, got {:?}", other),
    }
}
