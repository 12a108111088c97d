use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::process::{Command, Output};

fn discforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_discforge"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run discforge")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn catalog_lists_stock_discs() {
    let out = discforge(&["catalog"]);
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    assert!(stdout.contains("12 of 12 discs"));
    assert!(stdout.contains("Destroyer"));

    let out = discforge(&["catalog", "--type", "putter"]);
    let stdout = stdout_of(&out);
    assert!(stdout.contains("2 of 12 discs"));
    assert!(!stdout.contains("Destroyer"));
}

#[test]
fn recommend_prints_the_best_disc() {
    let out = discforge(&[
        "recommend",
        "-d",
        "300",
        "--wind-speed",
        "10",
        "--wind-dir",
        "N",
        "--bag",
        "thunderbird,buzzz,aviar",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = stdout_of(&out);

    let re = Regex::new(r"Throw the Innova Thunderbird \[9/5/0/2\]: score (\d+\.\d)").unwrap();
    let caps = re.captures(&stdout).expect("no recommendation line");
    let score: f64 = caps[1].parse().unwrap();
    assert!(score > 0.0 && score <= 100.0);
    assert!(stdout.contains("Expected range") || stdout.contains("expected range"));
}

#[test]
fn recommend_json_is_machine_readable() {
    let out = discforge(&[
        "recommend",
        "-d",
        "250",
        "--bag",
        "teebird,river,roc",
        "--mode",
        "multi",
        "--json",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&out)).unwrap();
    assert_eq!(json["outcome"]["outcome"], "recommended");
    assert!(json["outcome"]["recommendation"]["spread"].is_object());
    assert_eq!(json["outcome"]["ranking"].as_array().unwrap().len(), 3);
}

#[test]
fn multi_mode_can_name_a_strategy() {
    let out = discforge(&[
        "recommend",
        "-d",
        "280",
        "--mode",
        "multi",
        "--strategy",
        "aggressive",
    ]);
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    assert!(stdout.contains("Conservative"));
    assert!(stdout.contains("aggressive pick"));
}

#[test]
fn invalid_input_exits_with_failure() {
    let negative = discforge(&["recommend", "-d", "-5", "--bag", "teebird"]);
    assert!(!negative.status.success());

    let unknown = discforge(&["recommend", "-d", "300", "--bag", "frisbee"]);
    assert!(!unknown.status.success());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("frisbee"));

    let bad_wind = discforge(&["path", "-d", "300", "--disc", "teebird", "--wind-dir", "up"]);
    assert!(!bad_wind.status.success());

    let one_sample = discforge(&["path", "-d", "300", "--disc", "teebird", "-n", "1"]);
    assert!(!one_sample.status.success());
}

#[test]
fn path_json_has_requested_samples() {
    let out = discforge(&[
        "path", "-d", "250", "--disc", "teebird", "-n", "20", "--wind-speed", "8", "--wind-dir",
        "E", "--json",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&out)).unwrap();
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 20);
    assert_eq!(points[0]["x"], 0.0);
    assert_eq!(points[0]["y"], 0.0);
}

#[test]
fn path_with_hole_prints_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let hole = dir.path().join("hole.json");
    let mut f = File::create(&hole).unwrap();
    write!(
        f,
        r#"{{"dogleg_angle": -20, "dogleg_at": 0.5,
            "obstacles": [{{"label": "big oak", "x": 0, "y": 120, "radius": 10}}]}}"#
    )
    .unwrap();

    let out = discforge(&[
        "path",
        "-d",
        "250",
        "--disc",
        "mako",
        "--hole",
        hole.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    assert!(stdout.contains("big oak"));
    assert!(stdout.contains("HIT"));
}

#[test]
fn custom_catalog_and_weights_are_used() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("discs.csv");
    let mut f = File::create(&catalog).unwrap();
    writeln!(f, "id,name,manufacturer,type,speed,glide,turn,fade").unwrap();
    writeln!(f, "home,Homebrew,,,6,5,-1,1").unwrap();

    let weights = dir.path().join("weights.json");
    let mut f = File::create(&weights).unwrap();
    write!(f, r#"{{"range_weight": 2.0}}"#).unwrap();

    let out = discforge(&[
        "recommend",
        "--catalog",
        catalog.to_str().unwrap(),
        "--weights",
        weights.to_str().unwrap(),
        "--range-weight",
        "3.0",
        "-d",
        "200",
        "--debug",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = stdout_of(&out);
    assert!(stdout.contains("Homebrew"));
    assert!(stdout.contains("Range penalty (x3.0)"));
}
