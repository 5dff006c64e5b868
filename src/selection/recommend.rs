use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SelectorError;
use crate::model::{Bag, Club};

pub const MIN_SWING_PCT: f64 = 50.0;
pub const MAX_SWING_PCT: f64 = 115.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffortLabel {
    #[serde(rename = "very smooth")]
    VerySmooth,
    #[serde(rename = "smooth")]
    Smooth,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "firm")]
    Firm,
    #[serde(rename = "all out")]
    AllOut,
}

impl EffortLabel {
    /// Bands are half-open; a value sitting on a boundary takes the higher band.
    #[must_use]
    pub fn for_swing_pct(pct: f64) -> Self {
        if pct < 65.0 {
            EffortLabel::VerySmooth
        } else if pct < 80.0 {
            EffortLabel::Smooth
        } else if pct < 95.0 {
            EffortLabel::Normal
        } else if pct < 105.0 {
            EffortLabel::Firm
        } else {
            EffortLabel::AllOut
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EffortLabel::VerySmooth => "very smooth",
            EffortLabel::Smooth => "smooth",
            EffortLabel::Normal => "normal",
            EffortLabel::Firm => "firm",
            EffortLabel::AllOut => "all out",
        }
    }
}

impl fmt::Display for EffortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClubPick {
    pub club: Club,
    pub swing_pct: f64,
    pub effort: EffortLabel,
}

impl ClubPick {
    #[must_use]
    pub fn new(club: &Club, effective_distance: f64) -> Self {
        let swing_pct = swing_pct(effective_distance, club.carry);
        Self {
            club: club.clone(),
            swing_pct,
            effort: EffortLabel::for_swing_pct(swing_pct),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub primary: ClubPick,
    pub alternatives: Vec<ClubPick>,
    pub needs_more_than_longest: bool,
}

/// Share of a club's carry needed to cover `effective_distance`, held to a
/// plausible effort range. A zero carry asked to cover zero meters counts as
/// the softest swing.
#[must_use]
pub fn swing_pct(effective_distance: f64, carry: f64) -> f64 {
    let pct = effective_distance / carry * 100.0;
    if pct.is_nan() {
        return MIN_SWING_PCT;
    }
    pct.clamp(MIN_SWING_PCT, MAX_SWING_PCT)
}

/// Pick the shortest club that still reaches, plus its neighbours either side.
///
/// # Errors
///
/// Returns `SelectorError::EmptyBag` when there is nothing to choose from.
pub fn recommend(bag: &Bag, effective_distance: f64) -> Result<Recommendation, SelectorError> {
    let sorted = bag.sorted_by_carry();
    let longest_idx = sorted.len().checked_sub(1).ok_or(SelectorError::EmptyBag)?;

    let idx = sorted
        .iter()
        .position(|c| c.carry >= effective_distance)
        .unwrap_or(longest_idx);

    let mut alternatives = Vec::with_capacity(2);
    if let Some(shorter) = idx.checked_sub(1).and_then(|i| sorted.get(i)) {
        alternatives.push(ClubPick::new(shorter, effective_distance));
    }
    if let Some(longer) = sorted.get(idx + 1) {
        alternatives.push(ClubPick::new(longer, effective_distance));
    }

    Ok(Recommendation {
        primary: ClubPick::new(sorted[idx], effective_distance),
        alternatives,
        needs_more_than_longest: effective_distance > sorted[longest_idx].carry,
    })
}
