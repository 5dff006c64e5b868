use golf_club_selector::model::{ShotInputs, WindDirection};
use golf_club_selector::selection::{
    Tuning, breakdown_for_shot, compute_effective_distance, compute_effective_distance_with,
};

mod common;
use common::assert_close;

#[test]
fn test_calm_flat_shot_plays_as_is() {
    let b = compute_effective_distance(150.0, 0.0, 0.0, 0.0);
    assert_close(b.effective_distance, 150.0);
    assert_close(b.wind_adjustment, 0.0);
    assert_close(b.elevation_adjustment, 0.0);
}

#[test]
fn test_uphill_adds_more_than_downhill_takes() {
    let up = compute_effective_distance(150.0, 10.0, 0.0, 0.0);
    assert_close(up.elevation_adjustment, 12.5);
    assert_close(up.effective_distance, 162.5);

    let down = compute_effective_distance(150.0, -10.0, 0.0, 0.0);
    assert_close(down.elevation_adjustment, -10.0);
    assert_close(down.effective_distance, 140.0);
}

#[test]
fn test_headwind_and_tailwind() {
    let head = compute_effective_distance(150.0, 0.0, 10.0, 0.0);
    assert_close(head.wind_adjustment, 12.0);
    assert_close(head.effective_distance, 162.0);

    // A tailwind component times the negative tailwind factor still comes out positive.
    let tail = compute_effective_distance(150.0, 0.0, 10.0, 180.0);
    assert_close(tail.wind_adjustment, 7.5);
    assert_close(tail.effective_distance, 157.5);
}

#[test]
fn test_crosswind_barely_moves_the_number() {
    let cross = compute_effective_distance(150.0, 0.0, 10.0, 90.0);
    assert!(cross.wind_adjustment.abs() < 1e-9);

    let quartering = compute_effective_distance(150.0, 0.0, 10.0, 45.0);
    let along = 10.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert_close(quartering.wind_adjustment, 150.0 * along * 0.008);
}

#[test]
fn test_effective_distance_never_negative() {
    let b = compute_effective_distance(5.0, -30.0, 0.0, 0.0);
    assert_close(b.elevation_adjustment, -30.0);
    assert_close(b.effective_distance, 0.0);
}

#[test]
fn test_custom_tuning_is_used() {
    let tuning = Tuning {
        headwind_factor: 0.01,
        tailwind_factor: -0.01,
        uphill_factor: 2.0,
        downhill_factor: 0.5,
    };
    let b = compute_effective_distance_with(&tuning, 100.0, 10.0, 5.0, 0.0);
    assert_close(b.wind_adjustment, 5.0);
    assert_close(b.elevation_adjustment, 20.0);
    assert_close(b.effective_distance, 125.0);

    let down = compute_effective_distance_with(&tuning, 100.0, -10.0, 0.0, 0.0);
    assert_close(down.elevation_adjustment, -5.0);
}

#[test]
fn test_breakdown_for_shot_uses_direction_angle() {
    let shot = ShotInputs {
        distance: 150.0,
        elevation: 0.0,
        wind_speed: 10.0,
        wind_direction: WindDirection::S,
    };
    let b = breakdown_for_shot(&Tuning::default(), &shot);
    assert_close(b.effective_distance, 157.5);
}

#[test]
fn test_wind_direction_codes() {
    assert_eq!(WindDirection::from_code("ne"), Some(WindDirection::NE));
    assert_eq!(WindDirection::from_code(" SW "), Some(WindDirection::SW));
    assert_eq!(WindDirection::from_code("X"), None);
    assert_eq!(WindDirection::from_code_or_default("X"), WindDirection::N);
    assert_eq!(WindDirection::ALL.len(), 8);
    for (i, d) in WindDirection::ALL.iter().enumerate() {
        assert_close(d.angle_deg(), 45.0 * i as f64);
    }
}
