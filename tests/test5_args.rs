use clap::Parser;
use serde_json::json;
use std::io::Write;

use golf_club_selector::args::validation::{
    bag_from_json, check_club_key, check_readable_file_and_json, validate_bag_json,
};
use golf_club_selector::args::{Args, CleanArgs, Command};
use golf_club_selector::error::SelectorError;

mod common;
use common::assert_close;

#[test]
fn test_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let args = CleanArgs::new(Args::try_parse_from(["golf-club-selector"])?)?;
    assert_eq!(args.host, "0.0.0.0");
    assert_eq!(args.port, 5201);
    assert_eq!(args.bag.len(), 11);
    assert_close(args.tuning.headwind_factor, 0.008);
    assert_close(args.tuning.tailwind_factor, -0.005);
    assert_eq!(args.command, Command::Serve);
    Ok(())
}

#[test]
fn test_tuning_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let args = CleanArgs::new(Args::try_parse_from([
        "golf-club-selector",
        "--headwind-factor",
        "0.01",
        "--tailwind-factor",
        "-0.004",
        "--uphill-factor",
        "1.5",
    ])?)?;
    assert_close(args.tuning.headwind_factor, 0.01);
    assert_close(args.tuning.tailwind_factor, -0.004);
    assert_close(args.tuning.uphill_factor, 1.5);
    assert_close(args.tuning.downhill_factor, 1.0);
    Ok(())
}

#[test]
fn test_non_finite_factor_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::try_parse_from(["golf-club-selector", "--uphill-factor", "inf"])?;
    assert!(matches!(CleanArgs::new(parsed), Err(SelectorError::Config(_))));
    Ok(())
}

#[test]
fn test_recommend_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let args = CleanArgs::new(Args::try_parse_from([
        "golf-club-selector",
        "recommend",
        "--distance",
        "140",
        "--elevation",
        "-10",
        "--wind-dir",
        "SE",
    ])?)?;
    assert_eq!(
        args.command,
        Command::Recommend {
            distance: "140".into(),
            elevation: "-10".into(),
            wind_speed: "0".into(),
            wind_dir: "SE".into(),
        }
    );
    Ok(())
}

#[test]
fn test_bag_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        "{}",
        json!([
            {"key": "d", "label": "Driver", "carry": 230},
            {"key": "7i", "label": "7 Iron", "carry": 135.5}
        ])
    )?;
    let path = file.path().to_string_lossy().to_string();

    let args = CleanArgs::new(Args::try_parse_from(["golf-club-selector", "-b", &path])?)?;
    assert_eq!(args.bag.len(), 2);
    assert_close(args.bag.get("7i").map(|c| c.carry).unwrap_or_default(), 135.5);
    Ok(())
}

#[test]
fn test_unreadable_bag_file() {
    let err = check_readable_file_and_json("/definitely/not/here.json");
    assert!(err.is_err());
    assert!(Args::try_parse_from(["golf-club-selector", "-b", "/definitely/not/here.json"]).is_err());
}

#[test]
fn test_bag_json_shape_checks() {
    assert!(validate_bag_json(&json!({"key": "d"})).is_err());
    assert!(validate_bag_json(&json!([])).is_err());
    assert!(validate_bag_json(&json!([{"key": "d", "label": "Driver"}])).is_err());
    assert!(validate_bag_json(&json!([{"key": "d", "label": "Driver", "carry": -1}])).is_err());
    assert!(validate_bag_json(&json!([{"key": "d", "label": "Driver", "carry": 200, "loft": 9}])).is_err());
    assert!(
        validate_bag_json(&json!([
            {"key": "d", "label": "Driver", "carry": 200},
            {"key": "d", "label": "Other", "carry": 100}
        ]))
        .is_err()
    );
    assert!(validate_bag_json(&json!([{"key": "d", "label": "Driver", "carry": 200}])).is_ok());
}

#[test]
fn test_club_keys_stay_url_safe() {
    assert!(check_club_key("56").is_ok());
    assert!(check_club_key("hybrid_3").is_ok());
    assert!(check_club_key("").is_err());
    assert!(check_club_key("7 iron").is_err());
    assert!(check_club_key("a/b").is_err());
}

#[test]
fn test_bag_from_json() -> Result<(), SelectorError> {
    let bag = bag_from_json(&json!([{"key": "p", "label": "PW", "carry": 110}]))?;
    assert_eq!(bag.clubs()[0].label, "PW");
    assert!(matches!(
        bag_from_json(&json!([])),
        Err(SelectorError::Config(_))
    ));
    Ok(())
}
