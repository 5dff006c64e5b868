use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction the wind is blowing, relative to a player hitting toward the top of the screen.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WindDirection {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WindDirection::N => "Headwind",
            WindDirection::NE => "Headwind / L→R",
            WindDirection::E => "Left → Right",
            WindDirection::SE => "Tailwind / L→R",
            WindDirection::S => "Tailwind",
            WindDirection::SW => "Tailwind / R→L",
            WindDirection::W => "Right → Left",
            WindDirection::NW => "Headwind / R→L",
        }
    }

    /// Angle in degrees between where the wind blows and the player-to-target line.
    /// 0 is straight into the player's face.
    #[must_use]
    pub fn angle_deg(self) -> f64 {
        match self {
            WindDirection::N => 0.0,
            WindDirection::NE => 45.0,
            WindDirection::E => 90.0,
            WindDirection::SE => 135.0,
            WindDirection::S => 180.0,
            WindDirection::SW => 225.0,
            WindDirection::W => 270.0,
            WindDirection::NW => 315.0,
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            WindDirection::N => "↓",
            WindDirection::NE => "↘",
            WindDirection::E => "→",
            WindDirection::SE => "↗",
            WindDirection::S => "↑",
            WindDirection::SW => "↖",
            WindDirection::W => "←",
            WindDirection::NW => "↙",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.code().eq_ignore_ascii_case(code))
    }

    /// Unknown codes fall back to a headwind.
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
