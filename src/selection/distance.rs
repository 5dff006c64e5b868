use serde::{Deserialize, Serialize};

use crate::model::ShotInputs;

pub const HEADWIND_FACTOR: f64 = 0.008;
pub const TAILWIND_FACTOR: f64 = -0.005;
pub const UPHILL_FACTOR: f64 = 1.25;
pub const DOWNHILL_FACTOR: f64 = 1.0;

/// Rule-of-thumb knobs for how wind and slope change the playing distance.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Fraction of distance added per m/s of headwind component.
    pub headwind_factor: f64,
    /// Fraction of distance per m/s of tailwind component. Negative, so that a
    /// negative (tailwind) component times this factor stays non-negative.
    pub tailwind_factor: f64,
    /// Meters added per meter uphill.
    pub uphill_factor: f64,
    /// Meters per meter downhill.
    pub downhill_factor: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            headwind_factor: HEADWIND_FACTOR,
            tailwind_factor: TAILWIND_FACTOR,
            uphill_factor: UPHILL_FACTOR,
            downhill_factor: DOWNHILL_FACTOR,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DistanceBreakdown {
    pub effective_distance: f64,
    pub wind_adjustment: f64,
    pub elevation_adjustment: f64,
}

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[must_use]
pub fn compute_effective_distance(
    distance: f64,
    elevation: f64,
    wind_speed: f64,
    wind_angle_deg: f64,
) -> DistanceBreakdown {
    compute_effective_distance_with(
        &Tuning::default(),
        distance,
        elevation,
        wind_speed,
        wind_angle_deg,
    )
}

#[must_use]
pub fn compute_effective_distance_with(
    tuning: &Tuning,
    distance: f64,
    elevation: f64,
    wind_speed: f64,
    wind_angle_deg: f64,
) -> DistanceBreakdown {
    // + headwind, - tailwind
    let along = wind_speed * deg_to_rad(wind_angle_deg).cos();
    let wind_pct = if along >= 0.0 {
        along * tuning.headwind_factor
    } else {
        along * tuning.tailwind_factor
    };
    let wind_adjustment = distance * wind_pct;

    let elevation_adjustment = if elevation >= 0.0 {
        elevation * tuning.uphill_factor
    } else {
        elevation * tuning.downhill_factor
    };

    DistanceBreakdown {
        effective_distance: (distance + wind_adjustment + elevation_adjustment).max(0.0),
        wind_adjustment,
        elevation_adjustment,
    }
}

#[must_use]
pub fn breakdown_for_shot(tuning: &Tuning, shot: &ShotInputs) -> DistanceBreakdown {
    compute_effective_distance_with(
        tuning,
        shot.distance,
        shot.elevation,
        shot.wind_speed,
        shot.wind_direction.angle_deg(),
    )
}
