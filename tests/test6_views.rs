use scraper::{Html, Selector};

use golf_club_selector::error::SelectorError;
use golf_club_selector::model::{Bag, Club, parse_carry};
use golf_club_selector::mvu::runtime::run_selector;
use golf_club_selector::mvu::selector::{Msg, SelectorModel};
use golf_club_selector::selection::{Tuning, recommend};
use golf_club_selector::view::format::{format_meters, format_pct, format_signed_meters};
use golf_club_selector::view::results::{render_recommendation, tuning_notes};

mod common;
use common::assert_close;

#[test]
fn test_meters_round_half_up() {
    assert_eq!(format_meters(162.5), "163 m");
    assert_eq!(format_meters(162.4), "162 m");
    assert_eq!(format_meters(-2.5), "-2 m");
    assert_eq!(format_meters(0.0), "0 m");
}

#[test]
fn test_signed_meters() {
    assert_eq!(format_signed_meters(12.0), "+12 m");
    assert_eq!(format_signed_meters(0.0), "+0 m");
    assert_eq!(format_signed_meters(-10.0), "-10 m");
    assert_eq!(format_signed_meters(-0.3), "0 m");
}

#[test]
fn test_pct() {
    assert_eq!(format_pct(107.142_857), "107%");
    assert_eq!(format_pct(88.5), "89%");
}

#[test]
fn test_carry_parsing() {
    assert_close(parse_carry("155"), 155.0);
    assert_close(parse_carry(" 99.5 "), 99.5);
    assert_close(parse_carry("-20"), 0.0);
    assert_close(parse_carry("inf"), 0.0);
    assert_close(parse_carry("seven"), 0.0);
    assert_close(Club::new("x", "X", f64::NAN).carry, 0.0);
    assert!(!parse_carry("-0").is_sign_negative());
    assert!(!Club::new("z", "Z", -0.0).carry.is_sign_negative());
}

#[test]
fn test_duplicate_keys_keep_first() {
    let bag = Bag::new(vec![Club::new("a", "First", 100.0), Club::new("a", "Second", 120.0)]);
    assert_eq!(bag.len(), 1);
    assert_eq!(bag.clubs()[0].label, "First");
}

#[test]
fn test_recommendation_fragment_lists_alternatives() -> Result<(), SelectorError> {
    let rec = recommend(&Bag::default(), 150.0)?;
    let html = render_recommendation(Some(&rec), None, &Tuning::default()).into_string();
    let document = Html::parse_fragment(&html);
    let alts = Selector::parse(".alternative").expect("valid selector");
    let clubs: Vec<&str> = document
        .select(&alts)
        .filter_map(|el| el.value().attr("data-club"))
        .collect();
    assert_eq!(clubs, vec!["8i", "6i"]);
    assert!(html.contains("107%"));
    assert!(html.contains("all out"));
    Ok(())
}

#[test]
fn test_empty_bag_fragment() {
    let html = render_recommendation(None, Some(&SelectorError::EmptyBag), &Tuning::default())
        .into_string();
    assert!(html.contains("id=\"empty-bag\""));
    assert!(!html.contains("class=\"primary\""));
}

#[test]
fn test_notes_follow_tuning() {
    let notes = tuning_notes(&Tuning::default());
    assert!(notes.contains("~0.8% per m/s"));
    assert!(notes.contains("~0.5% per m/s"));
    assert!(notes.contains("~1.25 m per 1 m uphill"));
    assert!(notes.contains("~1 m per 1 m downhill"));
}

#[test]
fn test_index_page_reflects_staged_inputs() -> Result<(), SelectorError> {
    let mut model = SelectorModel::default();
    run_selector(&mut model, Msg::PageLoad)?;
    run_selector(
        &mut model,
        Msg::StageShot(golf_club_selector::model::ShotForm {
            distance: "180".into(),
            elevation: "-4".into(),
            wind_speed: "7".into(),
            wind_dir: "W".into(),
        }),
    )?;
    let html = golf_club_selector::view::index::render_index_template(&model).into_string();
    let document = Html::parse_document(&html);
    let checked = Selector::parse("input[name=wind_dir][checked]").expect("valid selector");
    let values: Vec<&str> = document
        .select(&checked)
        .filter_map(|el| el.value().attr("value"))
        .collect();
    assert_eq!(values, vec!["W"]);
    assert!(html.contains("- downhill"));
    // Still the committed 150 until Recalculate.
    let raw = Selector::parse("#raw-distance .stat-value").expect("valid selector");
    let raw_text: Vec<String> = document
        .select(&raw)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();
    assert_eq!(raw_text, vec!["150 m"]);
    Ok(())
}
