#![allow(dead_code)]

use golf_club_selector::model::{Bag, Club};

pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn bag_of(clubs: &[(&str, f64)]) -> Bag {
    Bag::new(
        clubs
            .iter()
            .map(|(key, carry)| Club::new(key, &key.to_uppercase(), *carry))
            .collect(),
    )
}
