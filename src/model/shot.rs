use serde::{Deserialize, Serialize};

use crate::model::wind::WindDirection;

pub const DEFAULT_DISTANCE: f64 = 150.0;

/// Coerce user-typed numeric text. Empty, unparseable or non-finite input becomes 0.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Committed shot values the calculation runs on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ShotInputs {
    pub distance: f64,
    pub elevation: f64,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
}

impl Default for ShotInputs {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            elevation: 0.0,
            wind_speed: 0.0,
            wind_direction: WindDirection::N,
        }
    }
}

/// Shot values as typed into the form, before the player presses Recalculate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ShotForm {
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub elevation: String,
    #[serde(default)]
    pub wind_speed: String,
    #[serde(default)]
    pub wind_dir: String,
}

impl ShotForm {
    #[must_use]
    pub fn commit(&self) -> ShotInputs {
        ShotInputs {
            distance: coerce_number(&self.distance),
            elevation: coerce_number(&self.elevation),
            wind_speed: coerce_number(&self.wind_speed),
            wind_direction: WindDirection::from_code_or_default(&self.wind_dir),
        }
    }
}

impl From<&ShotInputs> for ShotForm {
    fn from(shot: &ShotInputs) -> Self {
        Self {
            distance: shot.distance.to_string(),
            elevation: shot.elevation.to_string(),
            wind_speed: shot.wind_speed.to_string(),
            wind_dir: shot.wind_direction.code().to_string(),
        }
    }
}
